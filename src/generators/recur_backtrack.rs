use rand::Rng;

use super::get_rng;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Depth-first carving with backtracking. The recursion is kept on an
/// explicit stack so a large grid cannot exhaust the call stack.
pub fn recursive_backtrack(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let mut visited = vec![false; grid.cell_count()];
    let start = (
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    );
    visited[grid.index_of(start)] = true;

    // The stack holds the current carving path
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let unvisited = Direction::ALL
            .into_iter()
            .filter_map(|dir| grid.neighbor(cell, dir).map(|next| (dir, next)))
            .filter(|&(_, next)| !visited[grid.index_of(next)])
            .collect::<Vec<_>>();

        if !unvisited.is_empty() {
            let (dir, next) = unvisited[rng.random_range(0..unvisited.len())];
            grid.open_between(cell, dir);
            visited[grid.index_of(next)] = true;
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor on top to keep carving depth-first
            stack.push(next);
        }
    }
}
