use rand::rngs::StdRng;

mod braid;
mod rooms;

use crate::config::{MazeConfig, MazeKind};
use crate::generators::get_rng;
use crate::maze::grid::Grid;

/// Offset mixed into the configured seed so modifier draws never replay the
/// generation stream.
const MODIFIER_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// RNG for the modification phase. Derived from the same configured seed as
/// generation, shifted onto its own stream; an unseeded config stays
/// unseeded here too.
fn modifier_rng(seed: Option<u64>) -> StdRng {
    get_rng(seed.map(|s| s.wrapping_add(MODIFIER_SEED_OFFSET)))
}

/// Runs the connectivity modifier selected by the maze kind, if any. A braid
/// factor of zero or a room count of zero means there is nothing to do and
/// the spanning tree passes through untouched.
pub(crate) fn apply(grid: &mut Grid, config: &MazeConfig) {
    match config.kind {
        MazeKind::Perfect => {}
        MazeKind::Braided if config.braid_factor > 0.0 => braid::braid(grid, config),
        MazeKind::WithRooms if config.room_count > 0 => {
            rooms::carve_rooms(grid, config);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate};

    fn carved_grid(width: u16, height: u16, seed: u64) -> Grid {
        let mut grid = Grid::new(width, height);
        generate(&mut grid, Generator::RecurBacktrack, Some(seed));
        grid
    }

    #[test]
    fn test_perfect_kind_leaves_the_tree_alone() {
        let mut grid = carved_grid(10, 10, 1);
        let untouched = carved_grid(10, 10, 1);
        apply(
            &mut grid,
            &MazeConfig {
                width: 10,
                height: 10,
                seed: Some(1),
                kind: MazeKind::Perfect,
                ..MazeConfig::default()
            },
        );
        assert_eq!(grid.cells(), untouched.cells());
    }

    #[test]
    fn test_zero_braid_factor_skips_the_modifier() {
        let mut grid = carved_grid(10, 10, 1);
        let untouched = carved_grid(10, 10, 1);
        apply(
            &mut grid,
            &MazeConfig {
                width: 10,
                height: 10,
                seed: Some(1),
                kind: MazeKind::Braided,
                braid_factor: 0.0,
                ..MazeConfig::default()
            },
        );
        assert_eq!(grid.cells(), untouched.cells());
    }

    #[test]
    fn test_zero_room_count_skips_the_modifier() {
        let mut grid = carved_grid(10, 10, 1);
        let untouched = carved_grid(10, 10, 1);
        apply(
            &mut grid,
            &MazeConfig {
                width: 10,
                height: 10,
                seed: Some(1),
                kind: MazeKind::WithRooms,
                room_count: 0,
                ..MazeConfig::default()
            },
        );
        assert_eq!(grid.cells(), untouched.cells());
    }

    #[test]
    fn test_modifier_stream_differs_from_the_generation_stream() {
        use rand::Rng;

        let mut gen_rng = get_rng(Some(42));
        let mut mod_rng = modifier_rng(Some(42));
        let gen_draws: Vec<u64> = (0..4).map(|_| gen_rng.random_range(0..u64::MAX)).collect();
        let mod_draws: Vec<u64> = (0..4).map(|_| mod_rng.random_range(0..u64::MAX)).collect();
        assert_ne!(gen_draws, mod_draws);
    }
}
