//! Textual level descriptors.
//!
//! One entity per line: `<Kind> <x> <y> [<width> <height>]`. Player,
//! VictoryFlag and Collectible have intrinsic sizes and ignore any size
//! tokens; Block, GrassBlock and Spikes require them. A bad line is skipped
//! with a warning and never stops the rest of the level from loading.

use glam::IVec2;

use crate::components::entity::{EntityKind, Spawn};
use crate::error::{DescriptorError, LineError};

/// Everything recovered from a level text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelLoad {
    /// Entities in descriptor order.
    pub spawns: Vec<Spawn>,
    /// Lines that were rejected.
    pub errors: Vec<LineError>,
}

impl LevelLoad {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a single descriptor line.
pub fn parse_line(line: &str) -> Result<Spawn, DescriptorError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(DescriptorError::TooFewTokens { found: tokens.len() });
    }

    let numbers = tokens[1..]
        .iter()
        .map(|t| t.parse::<i32>().map_err(|_| DescriptorError::InvalidNumber(t.to_string())))
        .collect::<Result<Vec<i32>, _>>()?;
    let (x, y) = (numbers[0], numbers[1]);

    let sized = |kind: EntityKind| -> Result<Spawn, DescriptorError> {
        let (width, height) = match numbers[2..] {
            [w, h, ..] => (w, h),
            _ => return Err(DescriptorError::MissingSize { kind: kind.name() }),
        };
        if width <= 0 || height <= 0 {
            return Err(DescriptorError::NonPositiveSize { kind: kind.name(), width, height });
        }
        Ok(Spawn::Static {
            kind,
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        })
    };

    match tokens[0] {
        "Block" => sized(EntityKind::Block),
        "GrassBlock" => sized(EntityKind::GrassBlock),
        "Spikes" => sized(EntityKind::spikes()),
        "Player" => Ok(Spawn::avatar(x, y)),
        "VictoryFlag" => Ok(Spawn::victory_flag(x, y)),
        "Collectible" => Ok(Spawn::collectible(x, y)),
        other => Err(DescriptorError::UnknownKind(other.to_string())),
    }
}

/// Parse a whole level, collecting good entities and per-line errors.
pub fn parse_level(text: &str) -> LevelLoad {
    let mut load = LevelLoad::default();
    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(spawn) => load.spawns.push(spawn),
            Err(error) => {
                let err = LineError {
                    line: idx + 1,
                    text: line.to_string(),
                    error,
                };
                log::warn!("Level: skipping {}", err);
                load.errors.push(err);
            }
        }
    }
    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::{COLLECTIBLE_SIZE, VICTORY_FLAG_SIZE};
    use crate::core::scene::Scene;
    use crate::systems::movement::step_avatar;
    use crate::GameConfig;

    #[test]
    fn block_line() {
        let spawn = parse_line("Block 10 20 100 40").unwrap();
        match spawn {
            Spawn::Static { kind, pos, size } => {
                assert_eq!(kind, EntityKind::Block);
                assert!(kind.is_ground());
                assert!(!kind.can_enter());
                assert_eq!(pos, IVec2::new(10, 20));
                assert_eq!(size, IVec2::new(100, 40));
            }
            other => panic!("Expected static Block, got {:?}", other),
        }
    }

    #[test]
    fn spikes_line_kills_on_overlap() {
        let mut scene = Scene::new();
        scene.add(parse_line("Spikes 0 0 40 20").unwrap());
        scene.add(Spawn::avatar(5, 0));
        let Scene { entities, avatar, .. } = &mut scene;
        let avatar = avatar.as_mut().unwrap();
        step_avatar(avatar, entities, &GameConfig::default(), 20.0);
        assert!(avatar.is_dead());
    }

    #[test]
    fn intrinsic_sizes_ignore_trailing_tokens() {
        match parse_line("Collectible 5 6 999 999").unwrap() {
            Spawn::Static { size, pos, .. } => {
                assert_eq!(size, COLLECTIBLE_SIZE);
                assert_eq!(pos, IVec2::new(5, 6));
            }
            other => panic!("Expected Collectible, got {:?}", other),
        }
        match parse_line("VictoryFlag 700 100").unwrap() {
            Spawn::Static { size, .. } => assert_eq!(size, VICTORY_FLAG_SIZE),
            other => panic!("Expected VictoryFlag, got {:?}", other),
        }
    }

    #[test]
    fn player_goes_to_the_avatar_slot() {
        assert_eq!(parse_line("Player 5 5").unwrap(), Spawn::avatar(5, 5));
        assert_eq!(
            parse_line("Player 5"),
            Err(DescriptorError::TooFewTokens { found: 2 })
        );
    }

    #[test]
    fn rejections() {
        assert_eq!(
            parse_line("Foo 1 2 3"),
            Err(DescriptorError::UnknownKind("Foo".into()))
        );
        assert_eq!(
            parse_line("Block 1 two 3 4"),
            Err(DescriptorError::InvalidNumber("two".into()))
        );
        assert_eq!(
            parse_line("Block 1 2"),
            Err(DescriptorError::MissingSize { kind: "Block" })
        );
        assert_eq!(
            parse_line("Spikes 1 2 0 20"),
            Err(DescriptorError::NonPositiveSize { kind: "Spikes", width: 0, height: 20 })
        );
        assert_eq!(parse_line(""), Err(DescriptorError::TooFewTokens { found: 0 }));
    }

    #[test]
    fn bad_lines_do_not_stop_loading() {
        let text = "Block 0 550 800 50\nFoo 1 2 3\nPlayer 5\nPlayer 5 5\nCollectible 1 x\nGrassBlock 0 0 10 10";
        let load = parse_level(text);
        assert_eq!(
            load.spawns,
            vec![
                Spawn::block(0, 550, 800, 50),
                Spawn::avatar(5, 5),
                Spawn::grass_block(0, 0, 10, 10),
            ]
        );
        let lines: Vec<usize> = load.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![2, 3, 5]);
        assert!(!load.is_clean());
        assert!(load.errors[0].to_string().contains("Foo 1 2 3"));
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        assert_eq!(parse_line("  Block\t1  2 3 4  ").unwrap(), Spawn::block(1, 2, 3, 4));
    }
}
