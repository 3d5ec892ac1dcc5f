use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, select_move};
use super::types::{Difficulty, GameMode, GameStatus, GridSize, Mark, Scores};
use super::win_detector::{check_win_with_line, is_draw};

/// The bot always plays O; the human (or first human in PvP) opens with X.
pub const AI_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    mode: GameMode,
    difficulty: Difficulty,
    scores: Scores,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(grid_size: GridSize, mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(grid_size),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            mode,
            difficulty,
            scores: Scores::default(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid_size(&self) -> GridSize {
        self.board.grid_size()
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winner(&self) -> Option<Mark> {
        match &self.status {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsAi
            && self.status == GameStatus::InProgress
            && self.current_mark == AI_MARK
    }

    pub fn make_move(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= self.grid_size().cell_count() {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_empty_at(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board = self.board.with_mark(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    /// Lets the bot play its turn. `Ok(None)` when it is not the bot's turn.
    pub fn make_ai_move(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        if !self.is_ai_turn() {
            return Ok(None);
        }

        let input = BotInput::new(self.board, AI_MARK);
        let Some(index) = select_move(self.difficulty, &input, rng) else {
            return Ok(None);
        };

        log!("Bot ({:?}) plays cell {}", self.difficulty, index);
        self.make_move(index)?;
        Ok(Some(index))
    }

    pub fn reset_game(&mut self) {
        self.board = Board::new(self.grid_size());
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_game();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Starts over on a board of the new size; scores and mode carry over.
    pub fn set_grid_size(&mut self, grid_size: GridSize) {
        self.board = Board::new(grid_size);
        self.reset_game();
    }

    pub fn reset_scores(&mut self) {
        self.scores = Scores::default();
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            log!("{:?} wins on cells {:?}", line.mark, line.indices);
            self.scores.record_win(line.mark);
            self.status = GameStatus::Won(line);
            return;
        }

        if is_draw(&self.board) {
            log!("Game ends in a draw");
            self.scores.draws += 1;
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::WinningLine;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.make_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new(GridSize::Four, GameMode::PlayerVsPlayer, Difficulty::Easy);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), &GameStatus::InProgress);
        assert_eq!(state.board().cells().len(), 16);
        assert_eq!(state.scores(), Scores::default());
    }

    #[test]
    fn test_moves_alternate_marks() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        state.make_move(0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.make_move(4).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().get(0), Some(Mark::X));
        assert_eq!(state.board().get(4), Some(Mark::O));
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_rejects_taken_and_out_of_bounds_cells() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        state.make_move(0).unwrap();
        assert!(state.make_move(0).is_err());
        assert!(state.make_move(9).is_err());
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_win_updates_status_and_scores() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(
            state.status(),
            &GameStatus::Won(WinningLine::new(Mark::X, vec![0, 1, 2]))
        );
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.scores(), Scores { x: 1, o: 0, draws: 0 });
        assert!(state.make_move(5).is_err());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        // X's final move fills the board and completes two lines.
        play(&mut state, &[0, 1, 2, 3, 4, 6, 5, 7, 8]);

        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.scores().draws, 0);
    }

    #[test]
    fn test_draw_updates_scores() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status(), &GameStatus::Draw);
        assert_eq!(state.scores(), Scores { x: 0, o: 0, draws: 1 });
    }

    #[test]
    fn test_reset_game_keeps_scores() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset_game();

        assert_eq!(state.status(), &GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(state.board().cells().iter().all(|&cell| cell == Mark::Empty));
        assert_eq!(state.scores().x, 1);

        state.reset_scores();
        assert_eq!(state.scores(), Scores::default());
    }

    #[test]
    fn test_set_grid_size_keeps_scores_and_mode() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsAi, Difficulty::Hard);
        state.make_move(4).unwrap();
        state.set_grid_size(GridSize::Five);

        assert_eq!(state.grid_size(), GridSize::Five);
        assert_eq!(state.board().cells().len(), 25);
        assert_eq!(state.mode(), GameMode::PlayerVsAi);
        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_set_mode_resets_board() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Medium);
        state.make_move(4).unwrap();
        state.set_mode(GameMode::PlayerVsAi);

        assert_eq!(state.mode(), GameMode::PlayerVsAi);
        assert_eq!(state.board().get(4), Some(Mark::Empty));
    }

    #[test]
    fn test_set_difficulty_keeps_board() {
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsAi, Difficulty::Easy);
        state.make_move(4).unwrap();
        state.set_difficulty(Difficulty::Hard);

        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(state.board().get(4), Some(Mark::X));
    }

    #[test]
    fn test_ai_moves_only_on_its_turn() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsAi, Difficulty::Medium);
        assert!(!state.is_ai_turn());
        assert_eq!(state.make_ai_move(&mut rng), Ok(None));

        state.make_move(0).unwrap();
        assert!(state.is_ai_turn());
        assert_eq!(state.make_ai_move(&mut rng), Ok(Some(4)));
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_ai_does_not_play_in_pvp() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsPlayer, Difficulty::Hard);
        state.make_move(0).unwrap();
        assert!(!state.is_ai_turn());
        assert_eq!(state.make_ai_move(&mut rng), Ok(None));
    }

    #[test]
    fn test_hard_ai_blocks_and_game_continues() {
        let mut rng = SessionRng::new(42);
        let mut state = TicTacToeGameState::new(GridSize::Three, GameMode::PlayerVsAi, Difficulty::Hard);
        state.make_move(0).unwrap();
        assert_eq!(state.make_ai_move(&mut rng), Ok(Some(4)));
        state.make_move(1).unwrap();
        assert_eq!(state.make_ai_move(&mut rng), Ok(Some(2)));
        assert_eq!(state.status(), &GameStatus::InProgress);
    }
}
