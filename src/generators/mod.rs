use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

mod aldous_broder;
mod ellers;
mod prim;
mod recur_backtrack;
mod recur_div;

use aldous_broder::aldous_broder;
use ellers::row_union;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;

use crate::maze::grid::Grid;

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Algorithm that carves the spanning tree. All of them produce a perfect
/// maze; they differ in texture (corridor length, branchiness) and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Generator {
    /// Row-by-row carving that only ever keeps one row of state.
    #[default]
    Ellers,
    /// Depth-first carving with backtracking; long winding corridors.
    RecurBacktrack,
    /// Growth along a frontier of candidate walls; short branchy passages.
    Prim,
    /// Repeated subdivision of an open area by pierced walls.
    RecurDiv,
    /// First-entrance random walk; unbiased over all spanning trees.
    AldousBroder,
}

impl Generator {
    /// Every algorithm, in a fixed order.
    pub const ALL: [Generator; 5] = [
        Generator::Ellers,
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::RecurDiv,
        Generator::AldousBroder,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Ellers => write!(f, "Eller's Algorithm"),
            Generator::RecurBacktrack => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
            Generator::AldousBroder => write!(f, "Aldous-Broder Random Walk"),
        }
    }
}

/// Carves a spanning tree into `grid` with the selected algorithm.
pub(crate) fn generate(grid: &mut Grid, generator: Generator, seed: Option<u64>) {
    tracing::debug!(
        %generator,
        width = grid.width(),
        height = grid.height(),
        seed,
        "carving maze"
    );
    match generator {
        Generator::Ellers => row_union(grid, seed),
        Generator::RecurBacktrack => recursive_backtrack(grid, seed),
        Generator::Prim => randomized_prim(grid, seed),
        Generator::RecurDiv => recursive_division(grid, seed),
        Generator::AldousBroder => aldous_broder(grid, seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_generator_carves_a_spanning_tree() {
        for generator in Generator::ALL {
            let mut grid = Grid::new(6, 5);
            generate(&mut grid, generator, Some(99));
            grid.assert_spanning_tree();
            grid.assert_boundary_closed();
        }
    }

    #[test]
    fn test_default_generator_is_ellers() {
        assert_eq!(Generator::default(), Generator::Ellers);
    }

    #[test]
    fn test_display_names_are_distinct() {
        for (i, a) in Generator::ALL.iter().enumerate() {
            for b in &Generator::ALL[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
