//! Fighter table loader.

use std::path::Path;

use fight_core::{ActionData, ActionId, AttackDef, FighterData, FighterProfile, GameError};
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::loaders::{LoadResult, read_file};

/// Fighter file structure for RON files.
///
/// Actions and attacks are authored as lists and keyed by id on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FighterFile {
    pub name: String,
    #[serde(default)]
    pub profile: FighterProfile,
    pub actions: Vec<ActionData>,
    #[serde(default)]
    pub attacks: Vec<AttackDef>,
}

/// Loader for fighter tables from RON files.
pub struct FighterLoader;

impl FighterLoader {
    pub fn load(path: &Path) -> LoadResult<FighterData> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load fighter {}: {}", path.display(), e))
    }

    /// Parses and validates one fighter.
    ///
    /// Fatal authoring errors fail the load; the rest are logged.
    pub fn parse(content: &str) -> LoadResult<FighterData> {
        let file: FighterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse fighter RON: {}", e))?;
        let data = FighterData::from_parts(file.name, file.profile, file.actions, file.attacks);

        for issue in validate(&data) {
            if issue.severity().is_internal() {
                return Err(issue.into());
            }
            issue.log();
        }
        tracing::debug!(
            fighter = %data.name,
            actions = data.actions.len(),
            attacks = data.attacks.len(),
            "fighter loaded"
        );
        Ok(data)
    }
}

/// Cross-checks the references between a fighter's tables.
pub fn validate(data: &FighterData) -> Vec<ContentError> {
    let fighter = || data.name.clone();
    let mut issues = Vec::new();

    if !data.actions.contains_key(&ActionId::STAND) {
        issues.push(ContentError::MissingRequiredAction {
            fighter: fighter(),
            action: ActionId::STAND,
        });
    }

    for action in data.actions.values() {
        if action.frame_count == 0 {
            issues.push(ContentError::EmptyAction {
                fighter: fighter(),
                action: action.id,
            });
        }
        if action.looping && action.loop_from_frame >= action.frame_count {
            issues.push(ContentError::LoopOutOfRange {
                fighter: fighter(),
                action: action.id,
                loop_from: action.loop_from_frame,
            });
        }
        for hitbox in &action.hitboxes {
            if !data.attacks.contains_key(&hitbox.attack) {
                issues.push(ContentError::UnknownAttack {
                    fighter: fighter(),
                    action: action.id,
                    attack: hitbox.attack,
                });
            }
        }
        let targets = action.cancels.iter().flat_map(|w| w.targets.iter().copied());
        for target in targets {
            if !data.actions.contains_key(&target) {
                issues.push(ContentError::UnknownCancelTarget {
                    fighter: fighter(),
                    action: action.id,
                    target,
                });
            }
        }
    }

    for attack in data.attacks.values() {
        for reaction in [attack.damage_action, attack.guard_action] {
            if !data.actions.contains_key(&reaction) {
                issues.push(ContentError::UnknownReaction {
                    fighter: fighter(),
                    attack: attack.id,
                    action: reaction,
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{ActionType, AttackId, FighterOracle};

    const MINIMAL: &str = r#"(
        name: "stub",
        actions: [
            (id: 0, kind: Movement, frame_count: 30, looping: true, always_cancelable: true),
            (
                id: 100,
                kind: Attack,
                frame_count: 20,
                hitboxes: [(
                    frames: (4, 6),
                    rect: (x: 0.8, y: 0.5, width: 1.0, height: 0.4),
                    attack: 1,
                )],
                cancels: [(frames: (4, 10), targets: [110], bufferable: true)],
            ),
        ],
        attacks: [(
            id: 1,
            damage_action: 200,
            guard_action: 301,
            hit_count: 1,
            vital_damage: 1,
            guard_damage: 1,
            hit_stun: 12,
            guard_stun: 8,
            guard_break_stun: 30,
        )],
    )"#;

    #[test]
    fn parses_minimal_fighter() {
        let data = FighterLoader::parse(MINIMAL).unwrap();
        assert_eq!(data.name, "stub");
        assert_eq!(data.profile, FighterProfile::default());

        let jab = data.action(ActionId::NORMAL_ATTACK).unwrap();
        assert_eq!(jab.kind, ActionType::Attack);
        assert_eq!(jab.hitboxes_at(5).count(), 1);
        assert_eq!(jab.cancels_into(4, ActionId::NORMAL_SPECIAL).count(), 1);
        assert_eq!(data.attack(AttackId(1)).map(|a| a.hit_stun), Some(12));
    }

    #[test]
    fn dangling_references_are_reported_but_kept() {
        let data = FighterLoader::parse(MINIMAL).unwrap();
        let issues = validate(&data);
        // Cancel target 110 and both reactions of attack 1 are missing.
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity().is_recoverable()));
    }

    #[test]
    fn fighter_without_stand_is_rejected() {
        let source = r#"(name: "broken", actions: [(id: 1, kind: Movement, frame_count: 10)])"#;
        let err = FighterLoader::parse(source).unwrap_err();
        assert!(err.to_string().contains("does not define action#0"));
    }

    #[test]
    fn loop_past_end_is_flagged() {
        let data = FighterData::from_parts(
            "loopy",
            FighterProfile::default(),
            [ActionData::new(ActionId::STAND, ActionType::Movement, 10).looping_from(10)],
            [],
        );
        assert_eq!(
            validate(&data),
            vec![ContentError::LoopOutOfRange {
                fighter: "loopy".into(),
                action: ActionId::STAND,
                loop_from: 10,
            }]
        );
    }
}
