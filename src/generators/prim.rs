use rand::Rng;

use super::get_rng;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Grows the tree one wall at a time from a random start cell. A frontier
/// wall is only opened while exactly one of its sides is already in the tree,
/// so no opening can close a loop.
pub fn randomized_prim(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let mut in_tree = vec![false; grid.cell_count()];
    let start = (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );
    in_tree[grid.index_of(start)] = true;

    // Candidate walls bordering the tree, sampled in random order. Entries
    // whose far side joined the tree in the meantime are discarded on pickup.
    let mut frontier: Vec<((u16, u16), Direction)> = Direction::ALL
        .into_iter()
        .filter(|&dir| grid.neighbor(start, dir).is_some())
        .map(|dir| (start, dir))
        .collect();

    while !frontier.is_empty() {
        let (cell, dir) = frontier.swap_remove(rng.random_range(0..frontier.len()));
        let next = grid
            .neighbor(cell, dir)
            .expect("frontier walls always sit between two in-grid cells");
        if in_tree[grid.index_of(next)] {
            continue;
        }

        grid.open_between(cell, dir);
        in_tree[grid.index_of(next)] = true;
        for out in Direction::ALL {
            if let Some(beyond) = grid.neighbor(next, out) {
                if !in_tree[grid.index_of(beyond)] {
                    frontier.push((next, out));
                }
            }
        }
    }
}
