//! Procedural generation of rectangular grid mazes.
//!
//! A maze is a `width` by `height` matrix of cells, each tracking which of
//! its four walls are standing. [`Maze::build`] validates a [`MazeConfig`],
//! carves a spanning tree with one of five [`Generator`] algorithms and
//! optionally relaxes it afterwards, braiding dead ends into loops or
//! stamping open rooms over the corridors. The same seed always reproduces
//! the same maze.
//!
//! ```
//! use mazegen::{Generator, Maze, MazeConfig};
//!
//! let maze = Maze::build(MazeConfig {
//!     width: 12,
//!     height: 8,
//!     seed: Some(7),
//!     generator: Generator::RecurBacktrack,
//!     ..MazeConfig::default()
//! })?;
//!
//! assert_eq!(maze.cells().len(), 12 * 8);
//! assert!(maze.cell(0, 0).is_ok());
//! assert!(maze.cell(12, 0).is_err());
//! # Ok::<(), mazegen::MazeError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
mod modifiers;

pub use config::{MAX_DIMENSION, MazeConfig, MazeKind};
pub use error::MazeError;
pub use generators::Generator;
pub use maze::Maze;
pub use maze::cell::{Cell, Direction, Walls};
