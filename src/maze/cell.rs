use bitflags::bitflags;

bitflags! {
    /// Wall flags of one cell. A set bit means the wall on that side is still
    /// standing; generators clear bits as they carve passages.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH = 1 << 0;
        const SOUTH = 1 << 1;
        const EAST = 1 << 2;
        const WEST = 1 << 3;
    }
}

/// The four cardinal directions used for cell adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Every direction, in a fixed scan order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// The wall flag guarding this side of a cell.
    pub fn wall(self) -> Walls {
        match self {
            Direction::North => Walls::NORTH,
            Direction::South => Walls::SOUTH,
            Direction::East => Walls::EAST,
            Direction::West => Walls::WEST,
        }
    }
}

/// Represents a cell in the grid: four wall flags, all present until a
/// generator opens some of them. Two adjacent cells always agree on the wall
/// between them, each carrying the flag for its own side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: Walls,
}

impl Cell {
    /// A cell with all four walls standing.
    pub const CLOSED: Cell = Cell {
        walls: Walls::all(),
    };

    /// Whether the wall on the given side is standing.
    pub fn has_wall(self, dir: Direction) -> bool {
        self.walls.contains(dir.wall())
    }

    /// Whether the given side is open (wall carved away).
    pub fn is_open(self, dir: Direction) -> bool {
        !self.has_wall(dir)
    }

    /// Number of open sides. A cell with exactly one is a dead end.
    pub fn open_sides(self) -> usize {
        4 - self.walls.bits().count_ones() as usize
    }

    /// The raw wall set.
    pub fn walls(self) -> Walls {
        self.walls
    }

    pub(crate) fn open(&mut self, dir: Direction) {
        self.walls.remove(dir.wall());
    }

    pub(crate) fn close(&mut self, dir: Direction) {
        self.walls.insert(dir.wall());
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}
