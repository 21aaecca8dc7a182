use rand::Rng;
use rand::seq::SliceRandom;

use super::modifier_rng;
use crate::config::MazeConfig;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Opens one extra wall at a share of the maze's dead ends, trading the
/// perfect tree for loops. Only walls with a cell on the far side count as
/// removable; the outer boundary is never touched, so a dead end pressed
/// into a corner of a one-cell-wide maze may simply stay one.
pub(crate) fn braid(grid: &mut Grid, config: &MazeConfig) {
    let mut rng = modifier_rng(config.seed);

    let mut dead_ends = collect_dead_ends(grid);
    let target = (dead_ends.len() as f64 * config.braid_factor).ceil() as usize;
    dead_ends.shuffle(&mut rng);
    tracing::debug!(
        dead_ends = dead_ends.len(),
        removal_target = target,
        braid_factor = config.braid_factor,
        "braiding maze"
    );

    let mut removed = 0;
    for cell in dead_ends {
        if removed == target {
            break;
        }
        // An earlier opening may have landed in this cell already; it is no
        // longer a dead end then and does not consume a removal.
        if grid[cell].open_sides() != 1 {
            continue;
        }
        let removable = Direction::ALL
            .into_iter()
            .filter(|&dir| grid[cell].has_wall(dir) && grid.neighbor(cell, dir).is_some())
            .collect::<Vec<_>>();
        if removable.is_empty() {
            continue;
        }
        grid.open_between(cell, removable[rng.random_range(0..removable.len())]);
        removed += 1;
    }
    tracing::debug!(removed, "braiding done");
}

/// Cells with exactly one open side, in scan order.
fn collect_dead_ends(grid: &Grid) -> Vec<(u16, u16)> {
    let mut dead_ends = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid[(x, y)].open_sides() == 1 {
                dead_ends.push((x, y));
            }
        }
    }
    dead_ends
}
