use rand::Rng;

use super::get_rng;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Random-walk carving: wander to uniformly chosen neighbors and open a wall
/// only when the step first enters a cell. Every visited cell gains exactly
/// one opening that way, and the finished tree is sampled uniformly from all
/// spanning trees of the grid.
///
/// The walk has to cover the whole grid, so expect this to be the slowest
/// generator by far on large mazes.
pub fn aldous_broder(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let mut visited = vec![false; grid.cell_count()];
    let mut current = (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );
    visited[grid.index_of(current)] = true;
    let mut remaining = grid.cell_count() - 1;

    while remaining > 0 {
        let steps = Direction::ALL
            .into_iter()
            .filter(|&dir| grid.neighbor(current, dir).is_some())
            .collect::<Vec<_>>();
        let dir = steps[rng.random_range(0..steps.len())];
        let next = grid
            .neighbor(current, dir)
            .expect("the step direction was checked against the boundary");

        if !visited[grid.index_of(next)] {
            grid.open_between(current, dir);
            visited[grid.index_of(next)] = true;
            remaining -= 1;
        }
        current = next;
    }
}
