mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, MAX_CELLS, get_available_moves};
pub use bot_controller::{
    BotInput, DEFAULT_SEARCH_DEPTH, WIN_SCORE, calculate_minimax_move, evaluate_board,
    search_best_move, select_move,
};
pub use game_state::{AI_MARK, TicTacToeGameState};
pub use settings::{
    CONFIG_FILE_NAME, GameSettings, SettingsManager, Theme, default_config_path,
    get_config_manager,
};
pub use types::{Difficulty, GameMode, GameStatus, GridSize, Mark, Scores, WinningLine};
pub use win_detector::{check_win, check_win_with_line, is_draw, winning_lines};
