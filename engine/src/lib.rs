//! Tic-tac-toe rules and bot for 3x3, 4x4 and 5x5 boards.
//!
//! The rules and the bot are pure functions over [`games::tictactoe::Board`]
//! values. [`games::tictactoe::TicTacToeGameState`] layers turns, scores and
//! mode switching on top for front-ends that want it.

pub mod config;
pub mod games;
pub mod logger;
