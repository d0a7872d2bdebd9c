//! Board module - bounds and cell occupancy for one session
//!
//! The board has fixed dimensions for the lifetime of a session.
//! Coordinates: (row, col) where row grows downwards and col grows to the right.
//! Occupancy is tracked in a flat row-major array so collision checks and free-cell
//! scans stay cheap on large boards.

use crate::types::{GridDims, Pos};

/// The game board - fixed size, flat occupancy storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    dims: GridDims,
    /// Row-major occupancy flags (row * width + col)
    occupied: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            occupied: vec![false; dims.area()],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.dims.width as usize) + (pos.col as usize))
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    pub fn width(&self) -> u32 {
        self.dims.width
    }

    pub fn height(&self) -> u32 {
        self.dims.height
    }

    /// Check if position is inside the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.dims.height && pos.col < self.dims.width
    }

    /// Check if position is inside the board and occupied
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.index(pos).map(|i| self.occupied[i]).unwrap_or(false)
    }

    /// Mark a cell occupied or free.
    /// Returns false if out of bounds
    pub fn set_occupied(&mut self, pos: Pos, occupied: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.occupied[i] = occupied;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.occupied.fill(false);
    }

    /// Collect every free cell into `out` (cleared first), row-major.
    pub fn free_cells_into(&self, out: &mut Vec<Pos>) {
        out.clear();
        let w = self.dims.width as usize;
        for (i, occupied) in self.occupied.iter().enumerate() {
            if !occupied {
                out.push(Pos::new((i / w) as u32, (i % w) as u32));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(GridDims::new(20, 4, 3));
        let mut free = Vec::new();
        board.free_cells_into(&mut free);
        assert_eq!(free.len(), 12);
        assert_eq!(free[0], Pos::new(0, 0));
        assert_eq!(free[11], Pos::new(2, 3));
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(GridDims::new(20, 4, 3));
        assert!(board.contains(Pos::new(2, 3)));
        assert!(!board.contains(Pos::new(3, 0)));
        assert!(!board.contains(Pos::new(0, 4)));
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::new(GridDims::new(20, 4, 3));
        assert!(board.set_occupied(Pos::new(1, 1), true));
        assert!(board.is_occupied(Pos::new(1, 1)));
        assert!(!board.set_occupied(Pos::new(9, 9), true));
        assert!(!board.is_occupied(Pos::new(9, 9)));

        let mut free = Vec::new();
        board.free_cells_into(&mut free);
        assert_eq!(free.len(), 11);
        assert!(!free.contains(&Pos::new(1, 1)));

        board.clear();
        assert!(!board.is_occupied(Pos::new(1, 1)));
    }
}
