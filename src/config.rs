use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::generators::Generator;

/// Upper bound on each maze dimension, in cells.
pub const MAX_DIMENSION: u16 = 1000;

/// Structural guarantee of the finished maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MazeKind {
    /// A spanning tree: exactly one route between any two cells.
    #[default]
    Perfect,
    /// A spanning tree with a fraction of its dead ends opened into loops.
    Braided,
    /// A spanning tree with open rectangular rooms stamped over it.
    WithRooms,
}

impl std::fmt::Display for MazeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeKind::Perfect => write!(f, "Perfect"),
            MazeKind::Braided => write!(f, "Braided"),
            MazeKind::WithRooms => write!(f, "With rooms"),
        }
    }
}

/// Everything one maze construction needs to know. Checked once by
/// [`MazeConfig::validate`] before any cell is allocated, then carried
/// read-only by the finished [`Maze`](crate::Maze).
///
/// The braid and room fields only take effect for the matching [`MazeKind`],
/// but they are validated regardless, so an invalid value never hides behind
/// an unrelated kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Number of columns, `1..=MAX_DIMENSION`.
    pub width: u16,
    /// Number of rows, `1..=MAX_DIMENSION`.
    pub height: u16,
    /// RNG seed. `None` draws fresh OS entropy, giving up reproducibility.
    pub seed: Option<u64>,
    /// Which algorithm carves the spanning tree.
    pub generator: Generator,
    /// Structural guarantee of the result.
    pub kind: MazeKind,
    /// Fraction of dead ends to open into loops, within `[0, 1]`.
    pub braid_factor: f64,
    /// How many rooms to aim for. Placement may fall short on crowded grids.
    pub room_count: u16,
    /// Smallest room side length, at least 2.
    pub min_room_size: u16,
    /// Largest room side length, at least `min_room_size`.
    pub max_room_size: u16,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: 20,
            height: 20,
            seed: None,
            generator: Generator::default(),
            kind: MazeKind::default(),
            braid_factor: 0.5,
            room_count: 4,
            min_room_size: 3,
            max_room_size: 6,
        }
    }
}

impl MazeConfig {
    /// Checks every field against its documented range, reporting the first
    /// violation found.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(MazeError::BadDimensions {
                width: self.width,
                height: self.height,
            });
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.braid_factor) {
            return Err(MazeError::BadBraidFactor(self.braid_factor));
        }
        if self.min_room_size < 2 {
            return Err(MazeError::BadMinRoomSize(self.min_room_size));
        }
        if self.max_room_size < self.min_room_size {
            return Err(MazeError::BadRoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MazeConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_and_oversized_dimensions_are_rejected() {
        let config = MazeConfig {
            width: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MazeError::BadDimensions {
                width: 0,
                height: 20
            })
        );

        let config = MazeConfig {
            height: MAX_DIMENSION + 1,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MazeError::BadDimensions { .. })
        ));

        let config = MazeConfig {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION,
            ..MazeConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_braid_factor_must_lie_within_the_unit_interval() {
        for bad in [-0.1, 1.1, f64::NAN] {
            let config = MazeConfig {
                braid_factor: bad,
                ..MazeConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(MazeError::BadBraidFactor(_))
            ));
        }
        for good in [0.0, 0.5, 1.0] {
            let config = MazeConfig {
                braid_factor: good,
                ..MazeConfig::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn test_room_sizes_are_checked_even_for_perfect_mazes() {
        let config = MazeConfig {
            kind: MazeKind::Perfect,
            min_room_size: 1,
            ..MazeConfig::default()
        };
        assert_eq!(config.validate(), Err(MazeError::BadMinRoomSize(1)));

        let config = MazeConfig {
            min_room_size: 5,
            max_room_size: 4,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MazeError::BadRoomSizeRange { min: 5, max: 4 })
        );
    }
}
