use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark};
use super::win_detector::{check_win, find_completed_line, winning_lines};

pub const DEFAULT_SEARCH_DEPTH: usize = 6;

/// Base score of a decided game. Has to stay above the largest heuristic sum,
/// `(2n + 2) * 10^(n - 1)` = 120 000 on a 5x5 board, plus any search depth.
pub const WIN_SCORE: i32 = 1_000_000;

pub struct BotInput {
    pub board: Board,
    pub ai_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, ai_mark: Mark) -> Self {
        Self { board, ai_mark }
    }
}

pub fn select_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => calculate_random_move(&available_moves, rng),
        Difficulty::Medium => calculate_medium_move(input, &available_moves, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves).copied()
}

fn calculate_medium_move(
    input: &BotInput,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = input.ai_mark.opponent()?;

    if let Some(index) = find_winning_move(&input.board, input.ai_mark, available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, opponent_mark, available_moves) {
        return Some(index);
    }

    if let Some(center) = input.board.grid_size().center()
        && input.board.is_empty_at(center)
    {
        return Some(center);
    }

    calculate_random_move(available_moves, rng)
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    search_best_move(&input.board, input.ai_mark, DEFAULT_SEARCH_DEPTH)
}

/// Alpha-beta search from `board` with `ai_mark` to move. Ties go to the
/// lowest index.
pub fn search_best_move(board: &Board, ai_mark: Mark, max_depth: usize) -> Option<usize> {
    let opponent_mark = ai_mark.opponent()?;
    let available_moves = get_available_moves(board);
    let first_move = *available_moves.first()?;

    let context = SearchContext {
        lines: winning_lines(board.grid_size()),
        ai_mark,
        opponent_mark,
        max_depth,
    };

    let result = minimax(&context, *board, true, 0, i32::MIN, i32::MAX);

    // A board that is already decided, or a zero-depth search, yields no child.
    Some(result.index.unwrap_or(first_move))
}

struct SearchContext {
    lines: Vec<Vec<usize>>,
    ai_mark: Mark,
    opponent_mark: Mark,
    max_depth: usize,
}

#[derive(Debug, Clone, Copy)]
struct MinimaxResult {
    index: Option<usize>,
    score: i32,
}

impl MinimaxResult {
    fn leaf(score: i32) -> Self {
        Self { index: None, score }
    }
}

fn minimax(
    context: &SearchContext,
    board: Board,
    is_maximizing: bool,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
) -> MinimaxResult {
    if let Some((winner, _)) = find_completed_line(&board, &context.lines) {
        return if winner == context.ai_mark {
            MinimaxResult::leaf(WIN_SCORE - depth as i32)
        } else {
            MinimaxResult::leaf(depth as i32 - WIN_SCORE)
        };
    }

    let moves = get_available_moves(&board);
    if moves.is_empty() {
        return MinimaxResult::leaf(0);
    }

    if depth >= context.max_depth {
        return MinimaxResult::leaf(evaluate_lines(&board, &context.lines, context.ai_mark));
    }

    let (mark, mut best) = if is_maximizing {
        (context.ai_mark, MinimaxResult::leaf(i32::MIN))
    } else {
        (context.opponent_mark, MinimaxResult::leaf(i32::MAX))
    };

    for index in moves {
        let child = board.with_mark(index, mark);
        let result = minimax(context, child, !is_maximizing, depth + 1, alpha, beta);

        if is_maximizing {
            if result.score > best.score {
                best = MinimaxResult { index: Some(index), score: result.score };
            }
            alpha = alpha.max(result.score);
        } else {
            if result.score < best.score {
                best = MinimaxResult { index: Some(index), score: result.score };
            }
            beta = beta.min(result.score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Static score of a position from `ai_mark`'s side: every line still open to
/// one player only is worth `10^marks` to that player.
pub fn evaluate_board(board: &Board, ai_mark: Mark) -> i32 {
    evaluate_lines(board, &winning_lines(board.grid_size()), ai_mark)
}

fn evaluate_lines(board: &Board, lines: &[Vec<usize>], ai_mark: Mark) -> i32 {
    let cells = board.cells();
    let mut score = 0;

    for line in lines {
        let mut ai_count = 0u32;
        let mut opp_count = 0u32;

        for &index in line {
            match cells[index] {
                Mark::Empty => {}
                m if m == ai_mark => ai_count += 1,
                _ => opp_count += 1,
            }
        }

        if ai_count > 0 && opp_count == 0 {
            score += 10i32.pow(ai_count);
        } else if opp_count > 0 && ai_count == 0 {
            score -= 10i32.pow(opp_count);
        }
    }

    score
}
