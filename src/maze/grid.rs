use super::cell::{Cell, Direction};

/// Row-major matrix of [`Cell`]s. The size is fixed at construction and every
/// wall change goes through [`Grid::open_between`] or [`Grid::close_between`],
/// which keep the two flags describing a shared wall in agreement.
pub struct Grid {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a `width` by `height` grid with every wall standing.
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::CLOSED; width as usize * height as usize].into_boxed_slice();
        Grid {
            cells,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) is outside a {}x{} grid",
            self.width,
            self.height
        );
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Flat row-major index of a cell, for keeping per-cell state in slices.
    pub fn index_of(&self, coord: (u16, u16)) -> usize {
        self.ravel_index(coord.0, coord.1)
    }

    /// Coordinate of the adjacent cell in the given direction, or `None` when
    /// the step would leave the grid.
    pub fn neighbor(&self, coord: (u16, u16), dir: Direction) -> Option<(u16, u16)> {
        let (x, y) = coord;
        match dir {
            Direction::North => (y > 0).then(|| (x, y - 1)),
            Direction::South => (y + 1 < self.height).then(|| (x, y + 1)),
            Direction::East => (x + 1 < self.width).then(|| (x + 1, y)),
            Direction::West => (x > 0).then(|| (x - 1, y)),
        }
    }

    /// Opens the wall between `coord` and its neighbor in `dir`, clearing the
    /// matching flag on both cells.
    ///
    /// Panics when there is no neighbor on that side; walls to the outside of
    /// the grid are never opened.
    pub fn open_between(&mut self, coord: (u16, u16), dir: Direction) {
        let Some(other) = self.neighbor(coord, dir) else {
            panic!("cannot open the {dir:?} wall of {coord:?}: no cell on the other side");
        };
        let idx = self.ravel_index(coord.0, coord.1);
        self.cells[idx].open(dir);
        let other_idx = self.ravel_index(other.0, other.1);
        self.cells[other_idx].open(dir.opposite());
    }

    /// Closes the wall between `coord` and its neighbor in `dir`, setting the
    /// matching flag on both cells.
    ///
    /// Panics when there is no neighbor on that side.
    pub fn close_between(&mut self, coord: (u16, u16), dir: Direction) {
        let Some(other) = self.neighbor(coord, dir) else {
            panic!("cannot close the {dir:?} wall of {coord:?}: no cell on the other side");
        };
        let idx = self.ravel_index(coord.0, coord.1);
        self.cells[idx].close(dir);
        let other_idx = self.ravel_index(other.0, other.1);
        self.cells[other_idx].close(dir.opposite());
    }

    /// Opens every wall that separates two adjacent cells, leaving only the
    /// outer boundary standing.
    pub fn open_all_interior(&mut self) {
        (0..self.height).for_each(|y| {
            (0..self.width).for_each(|x| {
                if x + 1 < self.width {
                    self.open_between((x, y), Direction::East);
                }
                if y + 1 < self.height {
                    self.open_between((x, y), Direction::South);
                }
            });
        });
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.cells[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
impl Grid {
    /// Number of carved passages, counting the wall between two cells once.
    pub(crate) fn open_edge_count(&self) -> usize {
        let mut open = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if x + 1 < self.width && self[(x, y)].is_open(Direction::East) {
                    open += 1;
                }
                if y + 1 < self.height && self[(x, y)].is_open(Direction::South) {
                    open += 1;
                }
            }
        }
        open
    }

    /// Number of cells reachable from (0, 0) through open walls.
    pub(crate) fn reachable_count(&self) -> usize {
        let mut seen = vec![false; self.cell_count()];
        seen[0] = true;
        let mut stack = vec![(0u16, 0u16)];
        let mut count = 1;
        while let Some(coord) = stack.pop() {
            for dir in Direction::ALL {
                if !self[coord].is_open(dir) {
                    continue;
                }
                let next = self
                    .neighbor(coord, dir)
                    .unwrap_or_else(|| panic!("open wall on the grid boundary at {coord:?}"));
                if !seen[self.index_of(next)] {
                    seen[self.index_of(next)] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        count
    }

    /// Cells whose only connection to the rest of the maze is a single open
    /// side.
    pub(crate) fn dead_end_count(&self) -> usize {
        self.cells.iter().filter(|c| c.open_sides() == 1).count()
    }

    /// Asserts the carved passages form a spanning tree: every cell reachable
    /// and exactly one fewer edge than there are cells.
    pub(crate) fn assert_spanning_tree(&self) {
        assert_eq!(self.reachable_count(), self.cell_count());
        assert_eq!(self.open_edge_count(), self.cell_count() - 1);
    }

    /// Asserts that no cell has an open wall facing out of the grid.
    pub(crate) fn assert_boundary_closed(&self) {
        for y in 0..self.height {
            assert!(self[(0, y)].has_wall(Direction::West));
            assert!(self[(self.width - 1, y)].has_wall(Direction::East));
        }
        for x in 0..self.width {
            assert!(self[(x, 0)].has_wall(Direction::North));
            assert!(self[(x, self.height - 1)].has_wall(Direction::South));
        }
    }
}
