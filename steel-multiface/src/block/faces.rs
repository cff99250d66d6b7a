//! Per-face occupancy bitmask for multiface blocks.

use bitflags::bitflags;
use steel_utils::{Direction, Rotation};

bitflags! {
    /// The set of faces of a cell covered by a multiface block.
    ///
    /// Bit `n` belongs to the direction with ordinal `n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Faces: u8 {
        /// The bottom face.
        const DOWN = 1 << 0;
        /// The top face.
        const UP = 1 << 1;
        /// The north face.
        const NORTH = 1 << 2;
        /// The south face.
        const SOUTH = 1 << 3;
        /// The west face.
        const WEST = 1 << 4;
        /// The east face.
        const EAST = 1 << 5;
    }
}

impl Faces {
    /// The single face lying in `direction`.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        Self::from_bits_retain(1 << direction as u8)
    }

    /// Returns true if the face in `direction` is set.
    #[must_use]
    pub const fn has(self, direction: Direction) -> bool {
        self.bits() & (1 << direction as u8) != 0
    }

    /// Returns a copy with the face in `direction` set or cleared.
    #[must_use]
    pub const fn with(self, direction: Direction, value: bool) -> Self {
        let bit = 1 << direction as u8;
        if value {
            Self::from_bits_retain(self.bits() | bit)
        } else {
            Self::from_bits_retain(self.bits() & !bit)
        }
    }

    /// Iterates the set faces in direction ordinal order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::VALUES
            .into_iter()
            .filter(move |direction| self.has(*direction))
    }

    /// Returns the faces rotated around the y axis.
    #[must_use]
    pub fn rotate(self, rotation: Rotation) -> Self {
        self.directions().map(|direction| rotation.rotate(direction)).collect()
    }
}

impl FromIterator<Direction> for Faces {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Faces::empty(), |faces, direction| faces.with(direction, true))
    }
}

impl From<Direction> for Faces {
    fn from(direction: Direction) -> Self {
        Self::from_direction(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_ordinals() {
        assert_eq!(Faces::from_direction(Direction::Down), Faces::DOWN);
        assert_eq!(Faces::from_direction(Direction::Up), Faces::UP);
        assert_eq!(Faces::from_direction(Direction::North), Faces::NORTH);
        assert_eq!(Faces::from_direction(Direction::South), Faces::SOUTH);
        assert_eq!(Faces::from_direction(Direction::West), Faces::WEST);
        assert_eq!(Faces::from_direction(Direction::East), Faces::EAST);
        assert_eq!(Faces::all().bits(), 0b11_1111);
    }

    #[test]
    fn test_with_and_has() {
        let faces = Faces::empty()
            .with(Direction::North, true)
            .with(Direction::Up, true);
        assert!(faces.has(Direction::North));
        assert!(faces.has(Direction::Up));
        assert!(!faces.has(Direction::South));

        let faces = faces.with(Direction::North, false);
        assert_eq!(faces, Faces::UP);
    }

    #[test]
    fn test_pack_unpack() {
        let faces: Faces = [Direction::East, Direction::Down, Direction::East]
            .into_iter()
            .collect();
        assert_eq!(faces, Faces::EAST | Faces::DOWN);
        let unpacked: Vec<Direction> = faces.directions().collect();
        assert_eq!(unpacked, vec![Direction::Down, Direction::East]);
    }

    #[test]
    fn test_rotate() {
        let faces = Faces::NORTH | Faces::UP | Faces::WEST;
        assert_eq!(
            faces.rotate(Rotation::Clockwise90),
            Faces::EAST | Faces::UP | Faces::NORTH
        );
        assert_eq!(faces.rotate(Rotation::None), faces);
    }
}
