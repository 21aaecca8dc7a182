use std::collections::HashMap;

use rand::{Rng, rngs::StdRng};

use super::get_rng;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Carves the maze row by row, keeping a connectivity label per cell of the
/// current row and nothing else.
///
/// Each cell either inherits the label of the cell above it (when the wall
/// between them was opened) or starts a fresh group. Opening an east wall
/// merges two groups; merging is forbidden inside a group since that would
/// close a loop. Every group then opens at least one south wall so it stays
/// reachable from the next row, and the final row joins all remaining groups,
/// which turns the whole thing into one spanning tree.
pub fn row_union(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    let last_row = grid.height() - 1;

    // Labels of the row above; fresh arrays per row, never stored in cells.
    let mut above: Vec<u32> = Vec::new();
    let mut next_label = 0u32;

    for y in 0..grid.height() {
        let mut labels: Vec<u32> = Vec::with_capacity(grid.width() as usize);
        for x in 0..grid.width() {
            if y > 0 && grid[(x, y - 1)].is_open(Direction::South) {
                labels.push(above[x as usize]);
            } else {
                labels.push(next_label);
                next_label += 1;
            }
        }

        // Horizontal pass: merge adjacent groups on a coin flip. The final
        // row merges unconditionally so no two groups stay separated.
        for x in 0..grid.width() - 1 {
            let (keep, gone) = (labels[x as usize], labels[x as usize + 1]);
            if keep == gone {
                continue;
            }
            if y == last_row || rng.random_bool(0.5) {
                grid.open_between((x, y), Direction::East);
                for label in labels.iter_mut() {
                    if *label == gone {
                        *label = keep;
                    }
                }
            }
        }

        // Vertical pass: every group needs at least one way down.
        if y < last_row {
            let mut open_south = vec![false; grid.width() as usize];
            for x in 0..grid.width() {
                if rng.random_bool(0.5) {
                    grid.open_between((x, y), Direction::South);
                    open_south[x as usize] = true;
                }
            }
            force_group_openings(grid, y, &labels, &open_south, &mut rng);
        }

        above = labels;
    }
}

/// Opens one extra south wall for any group the coin flips left sealed.
fn force_group_openings(
    grid: &mut Grid,
    y: u16,
    labels: &[u32],
    open_south: &[bool],
    rng: &mut StdRng,
) {
    // Group members in scan order, so draws stay deterministic per seed.
    let mut group_order: Vec<u32> = Vec::new();
    let mut members: HashMap<u32, Vec<u16>> = HashMap::new();
    for x in 0..grid.width() {
        members
            .entry(labels[x as usize])
            .or_insert_with(|| {
                group_order.push(labels[x as usize]);
                Vec::new()
            })
            .push(x);
    }

    for label in group_order {
        let cells = &members[&label];
        if cells.iter().any(|&x| open_south[x as usize]) {
            continue;
        }
        let x = cells[rng.random_range(0..cells.len())];
        grid.open_between((x, y), Direction::South);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carves_a_spanning_tree() {
        for (width, height) in [(2, 2), (5, 4), (16, 16), (1, 9), (9, 1)] {
            let mut grid = Grid::new(width, height);
            row_union(&mut grid, Some(3));
            grid.assert_spanning_tree();
            grid.assert_boundary_closed();
        }
    }

    #[test]
    fn test_single_row_becomes_one_corridor() {
        // With one row there is nothing to coin-flip: the final-row rule
        // merges every pair.
        let mut grid = Grid::new(5, 1);
        row_union(&mut grid, Some(11));
        for x in 0..4 {
            assert!(grid[(x, 0)].is_open(Direction::East));
        }
    }

    #[test]
    fn test_single_column_becomes_one_corridor() {
        // Every row is its own one-cell group, so each must open downwards.
        let mut grid = Grid::new(1, 5);
        row_union(&mut grid, Some(11));
        for y in 0..4 {
            assert!(grid[(0, y)].is_open(Direction::South));
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_same_walls() {
        let mut first = Grid::new(3, 3);
        let mut second = Grid::new(3, 3);
        row_union(&mut first, Some(42));
        row_union(&mut second, Some(42));
        assert_eq!(first.cells(), second.cells());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut baseline = Grid::new(10, 10);
        row_union(&mut baseline, Some(0));
        let diverged = (1..=4).any(|seed| {
            let mut grid = Grid::new(10, 10);
            row_union(&mut grid, Some(seed));
            grid.cells() != baseline.cells()
        });
        assert!(diverged);
    }
}
