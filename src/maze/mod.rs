pub mod cell;
pub(crate) mod grid;

use cell::Cell;
use grid::Grid;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::generators;
use crate::modifiers;

/// A finished maze: a fixed-size matrix of wall-flag cells together with the
/// configuration that produced it. Built once by [`Maze::build`], read-only
/// afterwards.
pub struct Maze {
    grid: Grid,
    config: MazeConfig,
}

impl Maze {
    /// Validates `config`, allocates the cell matrix, carves a spanning tree
    /// with the selected algorithm and, when the maze kind asks for one, runs
    /// the matching connectivity modifier.
    ///
    /// Nothing is allocated when validation fails.
    pub fn build(config: MazeConfig) -> Result<Maze, MazeError> {
        config.validate()?;
        let mut grid = Grid::new(config.width, config.height);
        generators::generate(&mut grid, config.generator, config.seed);
        modifiers::apply(&mut grid, &config);
        tracing::debug!(
            width = config.width,
            height = config.height,
            kind = %config.kind,
            "maze built"
        );
        Ok(Maze { grid, config })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Bounds-checked read access to one cell, `x` being the column and `y`
    /// the row, both counted from the top-left corner.
    pub fn cell(&self, x: u16, y: u16) -> Result<&Cell, MazeError> {
        if !self.grid.is_in_bounds((x, y)) {
            return Err(MazeError::CellOutOfRange {
                x,
                y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        Ok(&self.grid[(x, y)])
    }

    /// All cells in row-major order, for bulk consumption.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// The configuration this maze was built from.
    pub fn config(&self) -> &MazeConfig {
        &self.config
    }
}

impl std::ops::Index<(u16, u16)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.grid[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeKind;
    use crate::maze::cell::Direction;

    #[test]
    fn test_build_rejects_invalid_configs_before_generating() {
        let config = MazeConfig {
            width: 0,
            ..MazeConfig::default()
        };
        assert_eq!(
            Maze::build(config).err(),
            Some(MazeError::BadDimensions {
                width: 0,
                height: 20
            })
        );

        let config = MazeConfig {
            braid_factor: 2.0,
            ..MazeConfig::default()
        };
        assert_eq!(
            Maze::build(config).err(),
            Some(MazeError::BadBraidFactor(2.0))
        );
    }

    #[test]
    fn test_cell_access_is_bounds_checked() {
        let maze = Maze::build(MazeConfig {
            width: 4,
            height: 3,
            seed: Some(1),
            ..MazeConfig::default()
        })
        .unwrap();

        assert!(maze.cell(3, 2).is_ok());
        assert_eq!(
            maze.cell(4, 0).err(),
            Some(MazeError::CellOutOfRange {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert_eq!(
            maze.cell(0, 3).err(),
            Some(MazeError::CellOutOfRange {
                x: 0,
                y: 3,
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_built_maze_exposes_its_config() {
        let config = MazeConfig {
            width: 6,
            height: 5,
            seed: Some(2),
            kind: MazeKind::Braided,
            braid_factor: 0.3,
            ..MazeConfig::default()
        };
        let maze = Maze::build(config.clone()).unwrap();
        assert_eq!(maze.config(), &config);
        assert_eq!(maze.width(), 6);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.cells().len(), 30);
    }

    #[test]
    fn test_single_cell_maze_is_fully_walled() {
        let maze = Maze::build(MazeConfig {
            width: 1,
            height: 1,
            seed: Some(3),
            ..MazeConfig::default()
        })
        .unwrap();
        for dir in Direction::ALL {
            assert!(maze[(0, 0)].has_wall(dir));
        }
    }
}
