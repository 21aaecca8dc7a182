use thiserror::Error;

/// Errors surfaced by maze construction and cell access.
///
/// Configuration problems are reported before any allocation or generation
/// work happens; out-of-range cell reads are reported at the access site.
/// Violations of internal invariants are not represented here, they panic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be between 1x1 and 1000x1000, got {width}x{height}")]
    BadDimensions { width: u16, height: u16 },

    #[error("braid factor must lie within [0, 1], got {0}")]
    BadBraidFactor(f64),

    #[error("minimum room size must be at least 2, got {0}")]
    BadMinRoomSize(u16),

    #[error("maximum room size {max} is smaller than minimum room size {min}")]
    BadRoomSizeRange { min: u16, max: u16 },

    #[error("cell ({x}, {y}) is out of range for a {width}x{height} maze")]
    CellOutOfRange {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}
