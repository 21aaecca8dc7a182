use rand::Rng;
use rand::rngs::StdRng;

use super::modifier_rng;
use crate::config::MazeConfig;
use crate::maze::cell::Direction;
use crate::maze::grid::Grid;

/// How many placement attempts each requested room is worth before giving up.
const ATTEMPTS_PER_ROOM: u32 = 50;

/// An accepted room rectangle. Only tracked while placing; the walls it
/// opens are its lasting effect on the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Room {
    pub(crate) x: u16,
    pub(crate) y: u16,
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Room {
    /// True when the rectangles overlap or sit closer than the 1-cell
    /// buffer. A full cell of separation is acceptable.
    fn crowds(&self, other: &Room) -> bool {
        // Grow this room by the buffer on every side, then test plain
        // overlap with exclusive right/bottom edges.
        let left = self.x.saturating_sub(1);
        let top = self.y.saturating_sub(1);
        let right = self.x + self.width + 1;
        let bottom = self.y + self.height + 1;
        other.x < right
            && left < other.x + other.width
            && other.y < bottom
            && top < other.y + other.height
    }
}

/// Stamps open rectangular rooms over a carved maze. Placement is rejection
/// sampled: a candidate must keep a one-cell margin to the grid boundary and
/// a one-cell buffer to every accepted room, and the attempt budget caps the
/// search. Ending up with fewer rooms than requested is an accepted outcome.
///
/// Returns the accepted rectangles.
pub(crate) fn carve_rooms(grid: &mut Grid, config: &MazeConfig) -> Vec<Room> {
    let mut rng = modifier_rng(config.seed);

    let requested = config.room_count as usize;
    let mut rooms: Vec<Room> = Vec::with_capacity(requested);
    let budget = config.room_count as u32 * ATTEMPTS_PER_ROOM;

    for _ in 0..budget {
        if rooms.len() == requested {
            break;
        }
        let room_width = rng.random_range(config.min_room_size..=config.max_room_size);
        let room_height = rng.random_range(config.min_room_size..=config.max_room_size);
        // The rectangle plus its margin must fit inside the grid.
        if room_width.saturating_add(2) > grid.width()
            || room_height.saturating_add(2) > grid.height()
        {
            continue;
        }
        let room = Room {
            x: rng.random_range(1..=grid.width() - 1 - room_width),
            y: rng.random_range(1..=grid.height() - 1 - room_height),
            width: room_width,
            height: room_height,
        };
        if rooms.iter().any(|placed| room.crowds(placed)) {
            continue;
        }
        open_room(grid, &room, &mut rng);
        rooms.push(room);
    }

    if rooms.len() < requested {
        tracing::debug!(
            placed = rooms.len(),
            requested,
            "room placement fell short of the requested count"
        );
    } else {
        tracing::debug!(placed = rooms.len(), "room placement done");
    }
    rooms
}

/// Opens the room interior completely and cuts one doorway through its
/// perimeter. The margin guarantees the doorway always has a cell on the
/// far side.
fn open_room(grid: &mut Grid, room: &Room, rng: &mut StdRng) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            if x + 1 < room.x + room.width {
                grid.open_between((x, y), Direction::East);
            }
            if y + 1 < room.y + room.height {
                grid.open_between((x, y), Direction::South);
            }
        }
    }

    // One doorway on a random side keeps the room tied into the corridors
    // even when no carved passage survives along its perimeter.
    let side = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
    let door = match side {
        Direction::North => (room.x + rng.random_range(0..room.width), room.y),
        Direction::South => (
            room.x + rng.random_range(0..room.width),
            room.y + room.height - 1,
        ),
        Direction::East => (
            room.x + room.width - 1,
            room.y + rng.random_range(0..room.height),
        ),
        Direction::West => (room.x, room.y + rng.random_range(0..room.height)),
    };
    grid.open_between(door, side);
}
