//! Stable logical sprite names
//!
//! The core requests sprites by logical id; resolving a name to image bytes
//! is the asset pipeline's job. Names must never change once shipped, since
//! the pipeline keys generated files on them.

use serde::{Deserialize, Serialize};

/// Every sprite the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    GolferMaleIdle,
    GolferMaleSwing,
    GolferFemaleIdle,
    GolferFemaleSwing,
    Ball,
    Flag,
    Tree,
}

impl SpriteId {
    /// Stable logical asset name
    pub fn name(self) -> &'static str {
        match self {
            SpriteId::GolferMaleIdle => "golfer-male-idle",
            SpriteId::GolferMaleSwing => "golfer-male-swing",
            SpriteId::GolferFemaleIdle => "golfer-female-idle",
            SpriteId::GolferFemaleSwing => "golfer-female-swing",
            SpriteId::Ball => "ball",
            SpriteId::Flag => "flag",
            SpriteId::Tree => "tree",
        }
    }

    pub const ALL: [SpriteId; 7] = [
        SpriteId::GolferMaleIdle,
        SpriteId::GolferMaleSwing,
        SpriteId::GolferFemaleIdle,
        SpriteId::GolferFemaleSwing,
        SpriteId::Ball,
        SpriteId::Flag,
        SpriteId::Tree,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_stable() {
        let names: Vec<_> = SpriteId::ALL.iter().map(|s| s.name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());

        // Golfer names match the sprite pipeline output
        assert_eq!(SpriteId::GolferMaleIdle.name(), "golfer-male-idle");
        assert_eq!(SpriteId::GolferFemaleSwing.name(), "golfer-female-swing");
    }
}
