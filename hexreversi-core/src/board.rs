//! Hex board geometry with axial coordinates, cell storage and captures

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReversiError};
use crate::view;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived third cube coordinate
    pub fn s(&self) -> i64 {
        -(self.q as i64) - self.r as i64
    }

    /// Cube distance from center (0,0)
    pub fn distance_to_center(&self) -> u64 {
        let q = (self.q as i64).unsigned_abs();
        let r = (self.r as i64).unsigned_abs();
        (q + r + self.s().unsigned_abs()) / 2
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Hex {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Hex::new(self.q + dq, self.r + dr)
    }

    /// True if `self` comes before `other` reading the board top to bottom,
    /// left to right (smaller r, then smaller q)
    pub fn is_upper_left_of(&self, other: Hex) -> bool {
        (self.r, self.q) < (other.r, other.q)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // NW
];

/// Contents of a cell, also used to name the acting player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellColor {
    Empty,
    Black,
    White,
}

impl CellColor {
    /// The other player's color; Empty has no opponent
    pub fn opponent(self) -> Self {
        match self {
            CellColor::Black => CellColor::White,
            CellColor::White => CellColor::Black,
            CellColor::Empty => CellColor::Empty,
        }
    }

    /// Reject Empty where a player color is required
    pub fn ensure_player(self) -> Result<Self> {
        match self {
            CellColor::Empty => Err(ReversiError::empty_color()),
            color => Ok(color),
        }
    }

    /// Snapshot symbol: `_` empty, `X` black, `O` white
    pub fn symbol(self) -> char {
        match self {
            CellColor::Empty => '_',
            CellColor::Black => 'X',
            CellColor::White => 'O',
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellColor::Empty => "Empty",
            CellColor::Black => "Black",
            CellColor::White => "White",
        };
        f.write_str(name)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Hexagonal board of `size` cells across its widest row.
///
/// The board holds exactly the coordinates within cube distance `size / 2`
/// of the origin. Cloning yields an independent copy.
#[derive(Clone, Debug)]
pub struct HexBoard {
    size: i32,
    cells: FxHashMap<Hex, CellColor>,
}

impl PartialEq for HexBoard {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for HexBoard {}

impl HexBoard {
    /// Create a board in the starting position.
    ///
    /// Fails with `InvalidArgument` unless `size` is odd and greater than 3.
    pub fn new(size: i32) -> Result<Self> {
        if size % 2 == 0 || size <= 3 {
            return Err(ReversiError::InvalidArgument(format!(
                "board size must be odd and greater than 3, got {}",
                size
            )));
        }

        let mut board = Self {
            size,
            cells: FxHashMap::default(),
        };
        let hexes: Vec<Hex> = board.coordinates().collect();
        for hex in hexes {
            board.cells.insert(hex, CellColor::Empty);
        }

        // Ring around the center alternates, Black at NE
        let center = Hex::new(0, 0);
        for direction in 0..6 {
            let color = if direction % 2 == 1 {
                CellColor::Black
            } else {
                CellColor::White
            };
            board.cells.insert(center.neighbor(direction), color);
        }

        Ok(board)
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Distance from center to edge
    pub fn radius(&self) -> i32 {
        self.size / 2
    }

    /// Every on-board coordinate, top row first, left to right within a row
    pub fn coordinates(&self) -> impl Iterator<Item = Hex> {
        let radius = self.radius();
        (-radius..=radius).flat_map(move |r| {
            let first = (-radius).max(-radius - r);
            let last = radius.min(radius - r);
            (first..=last).map(move |q| Hex::new(q, r))
        })
    }

    /// Check if this hex is on the board
    pub fn is_valid_coordinate(&self, hex: Hex) -> bool {
        hex.distance_to_center() <= self.radius() as u64
    }

    /// Color at `hex`
    pub fn contents_of(&self, hex: Hex) -> Result<CellColor> {
        self.cells
            .get(&hex)
            .copied()
            .ok_or(ReversiError::OutOfRange { q: hex.q, r: hex.r })
    }

    /// Number of cells holding `color`
    pub fn score(&self, color: CellColor) -> Result<usize> {
        let color = color.ensure_player()?;
        Ok(self.cells.values().filter(|&&c| c == color).count())
    }

    /// Runs of opposing cells that a `color` tile at `hex` would bracket,
    /// one entry per capturing direction.
    ///
    /// Occupancy of `hex` itself is not checked. Off-board targets bracket
    /// nothing.
    pub fn legal_capture(&self, hex: Hex, color: CellColor) -> Result<Vec<Vec<Hex>>> {
        let color = color.ensure_player()?;
        if !self.is_valid_coordinate(hex) {
            return Ok(Vec::new());
        }

        let runs = (0..6)
            .filter_map(|direction| self.bracketed_run(hex, color, direction))
            .collect();
        Ok(runs)
    }

    /// Walk from `start` in one direction collecting opposing cells.
    /// Kept only if a same-colored cell closes the run.
    fn bracketed_run(&self, start: Hex, color: CellColor, direction: usize) -> Option<Vec<Hex>> {
        let opponent = color.opponent();
        let mut run = Vec::new();
        let mut current = start.neighbor(direction);

        loop {
            match self.cells.get(&current) {
                Some(&c) if c == opponent => run.push(current),
                Some(&c) if c == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                // Empty cell or board edge
                _ => return None,
            }
            current = current.neighbor(direction);
        }
    }

    /// True iff `hex` is empty, on the board, and brackets at least one run
    pub fn is_valid_move(&self, hex: Hex, color: CellColor) -> Result<bool> {
        let color = color.ensure_player()?;
        if self.cells.get(&hex) != Some(&CellColor::Empty) {
            return Ok(false);
        }
        Ok((0..6).any(|direction| self.bracketed_run(hex, color, direction).is_some()))
    }

    /// Tiles a `color` placement at `hex` would flip, without mutating
    pub fn num_tiles_captured(&self, hex: Hex, color: CellColor) -> Result<usize> {
        let runs = self.legal_capture(hex, color)?;
        Ok(runs.iter().map(Vec::len).sum())
    }

    /// Place a `color` tile at `hex` and flip every bracketed run.
    ///
    /// Validation happens before any mutation. Returns the number of
    /// tiles flipped.
    pub fn make_move(&mut self, hex: Hex, color: CellColor) -> Result<usize> {
        let color = color.ensure_player()?;
        if !self.is_valid_coordinate(hex) {
            return Err(ReversiError::InvalidArgument(format!(
                "coordinate {} is not on the board",
                hex
            )));
        }
        if self.cells.get(&hex) != Some(&CellColor::Empty) {
            return Err(ReversiError::InvalidState(format!(
                "cell {} is already occupied",
                hex
            )));
        }

        let runs = self.legal_capture(hex, color)?;
        if runs.is_empty() {
            return Err(ReversiError::InvalidState(format!(
                "placing {} at {} captures nothing",
                color, hex
            )));
        }

        let mut flipped = 0;
        for pos in runs.into_iter().flatten() {
            self.cells.insert(pos, color);
            flipped += 1;
        }
        self.cells.insert(hex, color);

        Ok(flipped)
    }

    /// True iff some empty cell is a legal placement for `color`
    pub fn has_any_legal_move(&self, color: CellColor) -> Result<bool> {
        let color = color.ensure_player()?;
        for hex in self.coordinates() {
            if self.is_valid_move(hex, color)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every legal placement for `color`, in board reading order
    pub fn legal_moves(&self, color: CellColor) -> Result<Vec<Hex>> {
        let color = color.ensure_player()?;
        let mut moves = Vec::new();
        for hex in self.coordinates() {
            if self.is_valid_move(hex, color)? {
                moves.push(hex);
            }
        }
        Ok(moves)
    }
}

impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = view::render_with(self.size, |hex| {
            self.cells.get(&hex).copied().unwrap_or(CellColor::Empty)
        });
        f.write_str(&text)
    }
}
