//! Isolation board used as the reference game for the search engine.
//!
//! Two players share a rectangular grid. A player's first move may land on
//! any blank cell; after that each player jumps like a chess knight. Every
//! visited cell stays blocked for the rest of the game, and the player to
//! move with no jumps left loses.

use std::fmt;

use crate::errors::IllegalMove;
use crate::game_state::game_position::GamePosition;

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// Knight jumps as (d_row, d_col), in the order moves are reported.
const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolationBoard {
    width: u8,
    height: u8,
    blocked: Vec<bool>,
    locations: [Option<Cell>; 2],
    active: Player,
    move_count: u16,
}

impl Default for IsolationBoard {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl IsolationBoard {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; usize::from(width) * usize::from(height)],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    /// Marks `cells` as blocked without moving anyone. Out-of-bounds cells
    /// are ignored.
    pub fn with_blocked_cells(mut self, cells: &[Cell]) -> Self {
        for &cell in cells {
            if let Some(idx) = self.index_of(cell) {
                self.blocked[idx] = true;
            }
        }
        self
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    pub fn inactive_player(&self) -> Player {
        self.active.opposite()
    }

    #[inline]
    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub fn location_of(&self, player: Player) -> Option<Cell> {
        self.locations[player.index()]
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.height && cell.col < self.width {
            Some(usize::from(cell.row) * usize::from(self.width) + usize::from(cell.col))
        } else {
            None
        }
    }

    pub fn is_blank(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some_and(|idx| !self.blocked[idx])
    }

    /// Blank cells in row-major order.
    pub fn blank_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                if self.is_blank(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Knight jumps from `from` that land on blank cells.
    pub fn moves_from(&self, from: Cell) -> Vec<Cell> {
        let mut moves = Vec::with_capacity(KNIGHT_DIRECTIONS.len());
        for (d_row, d_col) in KNIGHT_DIRECTIONS {
            let row = i16::from(from.row) + i16::from(d_row);
            let col = i16::from(from.col) + i16::from(d_col);
            let (Ok(row), Ok(col)) = (u8::try_from(row), u8::try_from(col)) else {
                continue;
            };
            let target = Cell::new(row, col);
            if self.is_blank(target) {
                moves.push(target);
            }
        }
        moves
    }

    /// Fraction of cells that are still blank.
    pub fn blank_ratio(&self) -> f64 {
        if self.blocked.is_empty() {
            return 0.0;
        }
        let blank = self.blocked.iter().filter(|b| !**b).count();
        blank as f64 / self.blocked.len() as f64
    }

    fn moves_for(&self, player: Player) -> Vec<Cell> {
        match self.location_of(player) {
            None => self.blank_cells(),
            Some(from) => self.moves_from(from),
        }
    }
}

impl GamePosition for IsolationBoard {
    type Move = Cell;
    type Player = Player;

    fn legal_moves(&self, player: Player) -> Vec<Cell> {
        self.moves_for(player)
    }

    fn player_to_move(&self) -> Player {
        self.active
    }

    fn apply_move(&self, mv: &Cell) -> Result<Self, IllegalMove> {
        if !self.moves_for(self.active).contains(mv) {
            return Err(IllegalMove::new(format!(
                "{mv} for {:?} at move {}",
                self.active, self.move_count
            )));
        }
        let idx = self
            .index_of(*mv)
            .ok_or_else(|| IllegalMove::new(format!("{mv} is off the board")))?;

        let mut next = self.clone();
        next.blocked[idx] = true;
        next.locations[self.active.index()] = Some(*mv);
        next.active = self.active.opposite();
        next.move_count = self.move_count.saturating_add(1);
        Ok(next)
    }

    fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.moves_for(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.moves_for(self.active).is_empty()
    }

    fn opponent_of(&self, player: Player) -> Player {
        player.opposite()
    }
}

impl fmt::Display for IsolationBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                let symbol = if self.location_of(Player::One) == Some(cell) {
                    '1'
                } else if self.location_of(Player::Two) == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, IsolationBoard, Player};
    use crate::game_state::game_position::GamePosition;

    #[test]
    fn opening_moves_cover_every_blank_cell() {
        let board = IsolationBoard::new(3, 2);
        let moves = board.legal_moves(Player::One);
        assert_eq!(moves.len(), 6);
        assert_eq!(moves[0], Cell::new(0, 0));
        assert_eq!(moves[5], Cell::new(1, 2));
    }

    #[test]
    fn applied_move_blocks_cell_and_passes_turn() {
        let board = IsolationBoard::default();
        let next = board.apply_move(&Cell::new(3, 3)).expect("opening move is legal");

        assert_eq!(next.active_player(), Player::Two);
        assert_eq!(next.player_to_move(), Player::Two);
        assert_eq!(next.location_of(Player::One), Some(Cell::new(3, 3)));
        assert!(!next.is_blank(Cell::new(3, 3)));
        assert!(!next.legal_moves(Player::Two).contains(&Cell::new(3, 3)));
        // The parent is untouched.
        assert!(board.is_blank(Cell::new(3, 3)));
        assert_eq!(board.active_player(), Player::One);
    }

    #[test]
    fn knight_moves_respect_bounds_and_order() {
        let board = IsolationBoard::default()
            .apply_move(&Cell::new(0, 0))
            .and_then(|b| b.apply_move(&Cell::new(6, 6)))
            .expect("openings are legal");

        assert_eq!(
            board.legal_moves(Player::One),
            vec![Cell::new(1, 2), Cell::new(2, 1)]
        );
        assert_eq!(
            board.legal_moves(Player::Two),
            vec![Cell::new(4, 5), Cell::new(5, 4)]
        );
    }

    #[test]
    fn illegal_move_is_rejected() {
        let board = IsolationBoard::default()
            .apply_move(&Cell::new(0, 0))
            .and_then(|b| b.apply_move(&Cell::new(6, 6)))
            .expect("openings are legal");

        let err = board
            .apply_move(&Cell::new(3, 3))
            .expect_err("non-knight jump must fail");
        assert!(err.move_text.contains("(3, 3)"));
    }

    #[test]
    fn trapped_active_player_loses() {
        // Player one in a corner with both knight targets blocked.
        let board = IsolationBoard::new(3, 3)
            .with_blocked_cells(&[Cell::new(1, 2), Cell::new(2, 1)])
            .apply_move(&Cell::new(0, 0))
            .and_then(|b| b.apply_move(&Cell::new(1, 1)))
            .expect("openings are legal");

        assert_eq!(board.active_player(), Player::One);
        assert!(board.legal_moves(Player::One).is_empty());
        assert!(board.is_loser(Player::One));
        assert!(board.is_winner(Player::Two));
        assert!(!board.is_winner(Player::One));
        assert!(!board.is_loser(Player::Two));
    }

    #[test]
    fn render_marks_players_and_blocks() {
        let board = IsolationBoard::new(3, 2)
            .with_blocked_cells(&[Cell::new(1, 2)])
            .apply_move(&Cell::new(0, 0))
            .and_then(|b| b.apply_move(&Cell::new(1, 1)))
            .expect("openings are legal");

        assert_eq!(board.to_string(), "1 . .\n. 2 #\n");
    }

    #[test]
    fn blank_ratio_tracks_occupancy() {
        let board = IsolationBoard::new(2, 2);
        assert_eq!(board.blank_ratio(), 1.0);
        let next = board.apply_move(&Cell::new(0, 0)).expect("legal");
        assert_eq!(next.blank_ratio(), 0.75);
    }
}
