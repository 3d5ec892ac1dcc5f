use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Side length of the square board. Only 3, 4 and 5 are playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    #[default]
    Three,
    Four,
    Five,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Four, GridSize::Five];

    pub fn side(&self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.side() * self.side()
    }

    /// Center cell index; even grids have no single center.
    pub fn center(&self) -> Option<usize> {
        if self.side() % 2 == 1 {
            Some(self.cell_count() / 2)
        } else {
            None
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            5 => Ok(GridSize::Five),
            other => Err(format!("Grid size must be 3, 4 or 5, got {}", other)),
        }
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.side() as u8
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// How long a front-end should wait before showing the bot's move.
    pub fn thinking_delay(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(300),
            Difficulty::Medium => Duration::from_millis(600),
            Difficulty::Hard => Duration::from_millis(1000),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsAi,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub indices: Vec<usize>,
}

impl WinningLine {
    pub fn new(mark: Mark, indices: Vec<usize>) -> Self {
        Self { mark, indices }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scores {
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}
