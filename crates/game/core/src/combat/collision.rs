use crate::action::AttackId;
use crate::env::FighterOracle;
use crate::geometry::{Facing, Vec2};
use crate::state::{FighterState, Side};

/// Outcome of scanning one attacker's hitboxes against a defender.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contact {
    /// A damaging hitbox touched a hurtbox.
    Hit { attack: AttackId, point: Vec2 },
    /// Only proximity boxes touched.
    Proximity,
    Miss,
}

/// Scans `attacker`'s live hitboxes against `defender`'s hurtboxes.
///
/// Hitboxes whose attack has used up its hits are skipped. The first damaging
/// overlap wins; proximity overlaps are only reported when nothing hit.
pub fn detect_contact(
    attacker: &FighterState,
    attacker_data: &(impl FighterOracle + ?Sized),
    defender: &FighterState,
) -> Contact {
    let mut proximity = false;

    for hitbox in attacker.hitboxes() {
        if !attacker.can_attack_hit(attacker_data, hitbox.attack_id) {
            continue;
        }
        for hurtbox in defender.hurtboxes() {
            if !hitbox.rect.overlaps(&hurtbox.rect) {
                continue;
            }
            if hitbox.proximity {
                proximity = true;
            } else {
                return Contact::Hit {
                    attack: hitbox.attack_id,
                    point: hitbox.rect.overlap_center(&hurtbox.rect),
                };
            }
        }
    }

    if proximity {
        Contact::Proximity
    } else {
        Contact::Miss
    }
}

/// Whether any live proximity box of `attacker` overlaps `defender`.
pub fn touches_proximity(
    attacker: &FighterState,
    attacker_data: &(impl FighterOracle + ?Sized),
    defender: &FighterState,
) -> bool {
    attacker
        .hitboxes()
        .iter()
        .filter(|hitbox| hitbox.proximity && attacker.can_attack_hit(attacker_data, hitbox.attack_id))
        .any(|hitbox| {
            defender
                .hurtboxes()
                .iter()
                .any(|hurtbox| hitbox.rect.overlaps(&hurtbox.rect))
        })
}

/// Separates overlapping pushboxes, splitting the overlap evenly on x.
///
/// When both fighters stand on the same x, the one facing right is treated
/// as the left fighter; with equal facings player one is.
pub fn resolve_push(a: &mut FighterState, b: &mut FighterState) {
    let ra = a.pushbox().rect;
    let rb = b.pushbox().rect;
    if !ra.overlaps(&rb) {
        return;
    }

    let a_is_left = if a.position.x != b.position.x {
        a.position.x < b.position.x
    } else {
        match (a.facing, b.facing) {
            (Facing::Right, Facing::Left) => true,
            (Facing::Left, Facing::Right) => false,
            _ => a.side() == Side::P1,
        }
    };

    if a_is_left {
        let half = (ra.x_max() - rb.x_min()) / 2.0;
        a.apply_position_change(-half, 0.0);
        b.apply_position_change(half, 0.0);
    } else {
        let half = (rb.x_max() - ra.x_min()) / 2.0;
        a.apply_position_change(half, 0.0);
        b.apply_position_change(-half, 0.0);
    }
}

/// Pushes a fighter back inside `[min_x, max_x]` by its pushbox.
pub fn clamp_to_stage(fighter: &mut FighterState, (min_x, max_x): (f32, f32)) {
    let rect = fighter.pushbox().rect;
    if rect.x_min() < min_x {
        fighter.apply_position_change(min_x - rect.x_min(), 0.0);
    } else if rect.x_max() > max_x {
        fighter.apply_position_change(max_x - rect.x_max(), 0.0);
    }
}
