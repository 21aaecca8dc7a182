use std::cmp::Ordering;

use rand::Rng;

use super::get_rng;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// Opens the whole interior, then repeatedly walls regions off again, leaving
/// a single hole in every wall line. Splits run across the larger dimension,
/// so the passages keep a roughly even texture. Pending regions live on an
/// explicit stack instead of the call stack.
pub fn recursive_division(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    grid.open_all_interior();

    // Regions still to divide: top-left corner plus extent.
    let mut regions = vec![(0u16, 0u16, grid.width(), grid.height())];

    while let Some((x, y, width, height)) = regions.pop() {
        if width < 2 || height < 2 {
            continue;
        }

        let vertical_wall = match width.cmp(&height) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => rng.random_bool(0.5),
        };

        if vertical_wall {
            // Wall line between column x_wall and the one after it, pierced
            // at a random row.
            let diff = rng.random_range(0..width - 1);
            let x_wall = x + diff;
            let y_hole = y + rng.random_range(0..height);
            for row in y..y + height {
                if row != y_hole {
                    grid.close_between((x_wall, row), Direction::East);
                }
            }

            let left_width = diff + 1;
            regions.push((x_wall + 1, y, width - left_width, height));
            regions.push((x, y, left_width, height));
        } else {
            // Wall line between row y_wall and the one below it, pierced at a
            // random column.
            let diff = rng.random_range(0..height - 1);
            let y_wall = y + diff;
            let x_hole = x + rng.random_range(0..width);
            for col in x..x + width {
                if col != x_hole {
                    grid.close_between((col, y_wall), Direction::South);
                }
            }

            let upper_height = diff + 1;
            regions.push((x, y_wall + 1, width, height - upper_height));
            regions.push((x, y, width, upper_height));
        }
    }
}
