//! Board model: pieces, cells, coordinates and moves.
//!
//! A [`Board`] is a plain 5x5 value. Copies are cheap, so every node the
//! search explores owns its own board and nothing is shared between branches.

use std::fmt;

use crate::constants::{COLUMN_LABELS, DELTA, N};

/// One of the two piece kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Black,
    Red,
}

impl Piece {
    pub const ALL: [Piece; 2] = [Piece::Black, Piece::Red];

    pub fn opponent(self) -> Piece {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Piece::Black => 'b',
            Piece::Red => 'r',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'b' => Some(Piece::Black),
            'r' => Some(Piece::Red),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board cell: empty or holding one piece.
pub type Cell = Option<Piece>;

/// A cell coordinate as (row, col), both in `0..N`.
pub type Coord = (usize, usize);

/// A move: a drop during the placement phase or a one-step slide afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Coord),
    Slide { from: Coord, to: Coord },
}

impl Move {
    /// The cell the piece ends up on.
    pub fn destination(&self) -> Coord {
        match *self {
            Move::Place(to) | Move::Slide { to, .. } => to,
        }
    }

    /// The cell a sliding piece leaves, if any.
    pub fn source(&self) -> Option<Coord> {
        match *self {
            Move::Place(_) => None,
            Move::Slide { from, .. } => Some(from),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Place(to) => write!(f, "{}", str_coord(to)),
            Move::Slide { from, to } => write!(f, "{}-{}", str_coord(from), str_coord(to)),
        }
    }
}

/// A 5x5 Teeko board, stored row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from five row strings using `b`, `r` and `.`.
    /// Whitespace is ignored. Returns `None` on any other character or a
    /// row that is not exactly five cells wide.
    pub fn from_rows(rows: [&str; N]) -> Option<Self> {
        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != N {
                return None;
            }
            for (c, &ch) in cells.iter().enumerate() {
                board.cells[r][c] = match ch {
                    '.' => None,
                    other => Some(Piece::from_symbol(other)?),
                };
            }
        }
        Some(board)
    }

    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    pub fn in_bounds((r, c): Coord) -> bool {
        r < N && c < N
    }

    /// Cell contents, `None` for empty or out-of-bounds coordinates.
    pub fn get(&self, (r, c): Coord) -> Cell {
        self.cells.get(r).and_then(|row| row.get(c)).copied().flatten()
    }

    /// Set a cell. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, (r, c): Coord, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(r).and_then(|row| row.get_mut(c)) {
            *slot = cell;
        }
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..N).flat_map(|r| (0..N).map(move |c| (r, c)))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Some(piece))
            .count()
    }

    /// Cells holding `piece`, row-major.
    pub fn pieces(&self, piece: Piece) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |&pt| self.get(pt) == Some(piece))
    }

    /// Empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |&pt| self.get(pt).is_none())
    }

    /// In-bounds 8-neighbors of `pt`, in [`DELTA`] order.
    pub fn neighbors((r, c): Coord) -> impl Iterator<Item = Coord> {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            Self::in_bounds((nr, nc)).then_some((nr, nc))
        })
    }

    /// True when `a` and `b` are distinct 8-neighbors.
    pub fn adjacent(a: Coord, b: Coord) -> bool {
        a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
    }

    /// The same position with black and red exchanged.
    pub fn swapped(&self) -> Board {
        let mut board = *self;
        for cell in board.cells.iter_mut().flatten() {
            *cell = cell.map(Piece::opponent);
        }
        board
    }
}

/// Parse a coordinate string such as "B3" (column letter, then row digit).
///
/// Returns `None` for anything that is not a letter A-E followed by a
/// digit 0-4. The letter is case-insensitive.
pub fn parse_coord(s: &str) -> Option<Coord> {
    let mut chars = s.trim().chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    let row_char = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let col = COLUMN_LABELS.iter().position(|&l| l == col_char)?;
    let row = row_char.to_digit(10)? as usize;
    Board::in_bounds((row, col)).then_some((row, col))
}

/// Convert a coordinate to its string form (e.g. (3, 1) -> "B3").
pub fn str_coord((r, c): Coord) -> String {
    match COLUMN_LABELS.get(c) {
        Some(label) => format!("{label}{r}"),
        None => format!("?{r}"),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::symbol).to_string())
                .collect();
            writeln!(f, "{r}: {}", line.join(" "))?;
        }
        let footer: Vec<String> = COLUMN_LABELS.iter().map(char::to_string).collect();
        writeln!(f, "   {}", footer.join(" "))
    }
}
