mod common;

use common::*;
use std::sync::Arc;

use fight_core::{
    ActionData, ActionId, ActionType, AttackId, BattleEngine, BattleEvent, DamageResult,
    FrameRange, Rect, RoundPhase, Side,
};

#[test]
fn first_tick_enters_intro_and_places_fighters() {
    let mut engine = engine_with(quick_config(), Roster::default());
    assert_eq!(engine.phase(), RoundPhase::Stopped);

    let events = engine.tick([NONE, NONE]).to_vec();
    assert_eq!(engine.phase(), RoundPhase::Intro);
    assert!(events.contains(&BattleEvent::PhaseChanged {
        phase: RoundPhase::Intro
    }));

    let p1 = engine.fighter(Side::P1);
    let p2 = engine.fighter(Side::P2);
    assert_eq!(p1.position.x, -2.0);
    assert_eq!(p2.position.x, 2.0);
    assert!(p1.facing.is_right());
    assert!(!p2.facing.is_right());
    assert_eq!(p1.action_id(), ActionId::STAND);
}

#[test]
fn attack_connects_once_on_the_first_overlapping_tick() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);
    let jab = engine.fighter_data(Side::P1).attacks[&JAB].clone();

    // Tick 0: P1 jabs from x=-2, P2 starts walking in from x=2.
    let first = hits(&mut engine, [ATTACK, LEFT]);
    assert!(first.is_empty());
    assert_eq!(engine.fighter(Side::P1).action_id(), ActionId::NORMAL_ATTACK);
    assert_eq!(engine.fighter(Side::P1).hit_count(), 0);

    let mut landed = None;
    for tick in 1..100 {
        let events = hits(&mut engine, [NONE, LEFT]);
        if events.is_empty() {
            if landed.is_none() {
                assert_eq!(engine.fighter(Side::P1).hit_count(), 0);
            }
            continue;
        }
        assert!(landed.is_none(), "second hit on tick {tick}");
        assert_eq!(events.len(), 1);
        let hit = events[0];
        assert_eq!(hit.attacker, Side::P1);
        assert_eq!(hit.defender, Side::P2);
        assert_eq!(hit.result, DamageResult::Damage);
        assert_eq!(hit.stun_frames, jab.hit_stun);

        let p1 = engine.fighter(Side::P1);
        let p2 = engine.fighter(Side::P2);
        assert_eq!(p2.vital_health(), 3 - jab.vital_damage);
        assert_eq!(p1.hit_stun(), jab.hit_stun);
        assert_eq!(p2.hit_stun(), jab.hit_stun);
        assert_eq!(p2.action_id(), jab.damage_action);

        // The hitbox reaches x = -0.5; P2's hurtbox is 0.8 wide.
        assert!(p2.position.x - 0.4 <= -0.5 + 1e-4);
        landed = Some(tick);
    }
    assert!(landed.is_some(), "walk-in never reached the hitbox");
}

#[test]
fn hit_count_gate_limits_hits_per_activation() {
    let roster = Roster {
        vital_health: 10,
        jab_hits: 2,
        jab_length: 90,
        jab_active: FrameRange::new(0, 80),
        hit_stun: 5,
        ..Roster::default()
    };
    let mut engine = engine_with(quick_config(), roster);
    run_until(&mut engine, RoundPhase::Fight, 10);

    // Close the distance first so every active frame overlaps.
    for _ in 0..80 {
        engine.tick([NONE, LEFT]);
    }
    let gap = engine.fighter(Side::P2).position.x - engine.fighter(Side::P1).position.x;
    assert!(gap < 1.5, "fighters still {gap} apart");

    let mut total = hits(&mut engine, [ATTACK, NONE]).len();
    for _ in 0..85 {
        total += hits(&mut engine, [NONE, NONE]).len();
    }
    assert_eq!(total, 2);
    assert_eq!(engine.fighter(Side::P2).vital_health(), 8);
}

#[test]
fn blocking_walk_back_guards_then_breaks() {
    let roster = Roster {
        guard_health: 0,
        jab_hits: 1,
        jab_length: 30,
        jab_active: FrameRange::new(2, 4),
        hit_stun: 8,
        ..Roster::default()
    };
    let mut engine = engine_with(quick_config(), roster);
    run_until(&mut engine, RoundPhase::Fight, 10);

    for _ in 0..75 {
        engine.tick([RIGHT, NONE]);
    }

    // P2 holds back (right, since it faces left) while P1 jabs.
    let mut results = Vec::new();
    for tick in 0..6 {
        let p1 = if tick == 0 { ATTACK } else { NONE };
        results.extend(hits(&mut engine, [p1, RIGHT]).into_iter().map(|h| h.result));
    }
    assert_eq!(results, vec![DamageResult::GuardBreak]);

    let p2 = engine.fighter(Side::P2);
    assert_eq!(p2.action_id(), ActionId::GUARD_MID);
    assert_eq!(p2.reserved_action(), Some(ActionId::GUARD_BREAK));
    assert_eq!(p2.vital_health(), 3, "blocked hits leave vitality alone");

    // Guard break commits exactly when the stun runs out.
    let mut committed_at = None;
    for tick in 0..20 {
        let stun_before = engine.fighter(Side::P2).hit_stun();
        engine.tick([NONE, RIGHT]);
        if engine.fighter(Side::P2).action_id() == ActionId::GUARD_BREAK {
            committed_at = Some((tick, stun_before));
            break;
        }
    }
    let (_, stun_before) = committed_at.expect("guard break never committed");
    assert!(stun_before <= 1, "committed with {stun_before} stun left");
    assert_eq!(engine.fighter(Side::P2).hit_stun(), 0);
}

#[test]
fn knockout_awards_round_and_match() {
    let roster = Roster {
        vital_health: 1,
        jab_length: 30,
        jab_active: FrameRange::new(2, 6),
        ..Roster::default()
    };
    let config = quick_config().with_rounds_to_win(2);
    let mut engine = engine_with(config, roster);

    let mut round_wins = Vec::new();
    let mut match_over = None;
    for _ in 0..2000 {
        let p1 = if engine.fighter(Side::P1).action_id() == ActionId::NORMAL_ATTACK {
            NONE
        } else if engine.phase() == RoundPhase::Fight
            && engine.fighter(Side::P2).position.x - engine.fighter(Side::P1).position.x < 1.4
        {
            ATTACK
        } else {
            RIGHT
        };
        for event in engine.tick([p1, NONE]).iter().copied() {
            match event {
                BattleEvent::RoundWon { winner, wins } => round_wins.push((winner, wins)),
                BattleEvent::MatchOver { winner } => match_over = Some(winner),
                _ => {}
            }
        }
        if engine.is_match_over() {
            break;
        }
    }

    assert_eq!(round_wins, vec![(Side::P1, 1), (Side::P1, 2)]);
    assert_eq!(match_over, Some(Side::P1));
    assert_eq!(engine.round_wins(Side::P1), 2);
    assert_eq!(engine.round_wins(Side::P2), 0);
    assert_eq!(engine.phase(), RoundPhase::Stopped);

    let before = snapshot(&engine);
    assert!(engine.tick([ATTACK, ATTACK]).is_empty());
    assert_eq!(snapshot(&engine), before);
}

#[test]
fn winner_plays_win_action_during_end() {
    let roster = Roster {
        vital_health: 1,
        jab_length: 30,
        jab_active: FrameRange::new(2, 6),
        ..Roster::default()
    };
    let config = quick_config().with_phase_frames(1, 2, 60);
    let mut engine = engine_with(config, roster);
    run_until(&mut engine, RoundPhase::Fight, 10);

    while engine.phase() == RoundPhase::Fight {
        let gap = engine.fighter(Side::P2).position.x - engine.fighter(Side::P1).position.x;
        let p1 = if gap < 1.4 { ATTACK } else { RIGHT };
        engine.tick([p1, NONE]);
    }
    run_until(&mut engine, RoundPhase::End, 10);
    for _ in 0..40 {
        engine.tick([NONE, NONE]);
    }
    assert!(engine.fighter(Side::P1).has_won());
    assert_eq!(engine.fighter(Side::P1).action_id(), ActionId::WIN);
}

#[test]
fn end_phase_can_be_skipped_once_skippable() {
    let roster = Roster {
        vital_health: 1,
        jab_length: 30,
        jab_active: FrameRange::new(2, 6),
        ..Roster::default()
    };
    let mut config = quick_config().with_phase_frames(1, 2, 100);
    config.end_skippable_frames = 50;
    let mut engine = engine_with(config, roster);
    run_until(&mut engine, RoundPhase::Fight, 10);
    while engine.phase() == RoundPhase::Fight {
        let gap = engine.fighter(Side::P2).position.x - engine.fighter(Side::P1).position.x;
        engine.tick([if gap < 1.4 { ATTACK } else { RIGHT }, NONE]);
    }
    run_until(&mut engine, RoundPhase::End, 10);

    // Too early: pressing attack does nothing.
    engine.tick([ATTACK, NONE]);
    assert_eq!(engine.phase(), RoundPhase::End);

    while engine.timer() > 51 {
        engine.tick([NONE, NONE]);
    }
    engine.tick([NONE, ATTACK]);
    assert_eq!(engine.phase(), RoundPhase::Stopped);
}

#[test]
fn frame_advantage_is_antisymmetric() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);
    engine.tick([ATTACK, NONE]);

    let p1 = engine.frame_advantage(Side::P1);
    let p2 = engine.frame_advantage(Side::P2);
    assert_eq!(p1, -p2);
    // P2 stands (always cancelable, 0 left); P1 is committed to the jab.
    let jab = &engine.fighter_data(Side::P1).actions[&ActionId::NORMAL_ATTACK];
    assert_eq!(p1, -(jab.frame_count as i32 - engine.fighter(Side::P1).action_frame() as i32));
}

#[test]
fn motion_follows_current_action() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);
    engine.tick([ATTACK, RIGHT]);
    assert_eq!(
        engine.current_motion(Side::P1).map(|m| m.0),
        Some(ActionId::NORMAL_ATTACK.0)
    );
    assert_eq!(
        engine.current_motion(Side::P2).map(|m| m.0),
        Some(ActionId::BACKWARD.0)
    );
}

#[test]
fn pushboxes_never_overlap_after_a_tick() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);
    for _ in 0..200 {
        engine.tick([RIGHT, LEFT]);
        let a = engine.fighter(Side::P1).pushbox().rect;
        let b = engine.fighter(Side::P2).pushbox().rect;
        assert!(a.x_max() <= b.x_min() + 1e-4, "{a:?} vs {b:?}");
        let (min, max) = engine.config().stage_bounds();
        assert!(a.x_min() >= min - 1e-4 && b.x_max() <= max + 1e-4);
    }
}

#[test]
fn holding_back_in_proximity_raises_a_guard_next_tick() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);

    // P1 sweeps with a back attack; P2 faces left, so RIGHT is backward.
    assert!(hits(&mut engine, [ATTACK | LEFT, RIGHT]).is_empty());
    assert_eq!(engine.fighter(Side::P1).action_id(), ActionId::BACK_ATTACK);
    assert_eq!(engine.fighter(Side::P2).action_id(), ActionId::BACKWARD);

    assert!(hits(&mut engine, [NONE, RIGHT]).is_empty());
    assert_eq!(engine.fighter(Side::P2).action_id(), ActionId::GUARD_PROXIMITY);
}

#[test]
fn proximity_needs_backward_held() {
    let mut engine = engine_with(quick_config(), Roster::default());
    run_until(&mut engine, RoundPhase::Fight, 10);

    engine.tick([ATTACK | LEFT, NONE]);
    engine.tick([NONE, RIGHT]);
    assert_eq!(engine.fighter(Side::P2).action_id(), ActionId::BACKWARD);
}

#[test]
fn undefined_attack_deals_nothing_but_keeps_proximity() {
    const UNDEFINED: AttackId = AttackId(77);

    let mut data = Roster::default().build();
    let poke = ActionData::new(ActionId::NORMAL_ATTACK, ActionType::Attack, 40)
        .with_base_body()
        .with_hitbox(FrameRange::new(0, 39), Rect::new(2.5, 0.0, 5.0, 1.0), UNDEFINED)
        .with_proximity_box(FrameRange::new(0, 39), Rect::new(2.5, 0.0, 5.0, 1.5), PROXIMITY);
    data.actions.insert(ActionId::NORMAL_ATTACK, poke);
    let data = Arc::new(data);

    let mut engine = BattleEngine::new(quick_config(), [data.clone(), data]);
    run_until(&mut engine, RoundPhase::Fight, 10);
    let vital = engine.fighter(Side::P2).vital_health();

    assert!(hits(&mut engine, [ATTACK, RIGHT]).is_empty());
    assert_eq!(engine.fighter(Side::P1).action_id(), ActionId::NORMAL_ATTACK);
    assert_eq!(engine.fighter(Side::P1).hit_count(), 0);

    assert!(hits(&mut engine, [NONE, RIGHT]).is_empty());
    let p2 = engine.fighter(Side::P2);
    assert_eq!(p2.vital_health(), vital);
    assert_eq!(p2.action_id(), ActionId::GUARD_PROXIMITY);
}
