use super::board::Board;
use super::types::{GridSize, Mark, WinningLine};

/// Rows, then columns, then the main diagonal, then the anti-diagonal.
pub fn winning_lines(grid_size: GridSize) -> Vec<Vec<usize>> {
    let side = grid_size.side();
    let mut lines = Vec::with_capacity(2 * side + 2);

    for row in 0..side {
        lines.push((0..side).map(|col| row * side + col).collect());
    }

    for col in 0..side {
        lines.push((0..side).map(|row| row * side + col).collect());
    }

    lines.push((0..side).map(|i| i * side + i).collect());
    lines.push((0..side).map(|i| i * side + (side - 1 - i)).collect());

    lines
}

pub fn check_win(board: &Board) -> Option<Mark> {
    let lines = winning_lines(board.grid_size());
    find_completed_line(board, &lines).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let lines = winning_lines(board.grid_size());
    find_completed_line(board, &lines)
        .map(|(mark, indices)| WinningLine::new(mark, indices.to_vec()))
}

/// First line in `lines` uniformly held by one mark. `lines` must come from
/// `winning_lines` for the board's grid size.
pub(crate) fn find_completed_line<'a>(
    board: &Board,
    lines: &'a [Vec<usize>],
) -> Option<(Mark, &'a [usize])> {
    let cells = board.cells();

    for line in lines {
        let first = cells[line[0]];
        if first == Mark::Empty {
            continue;
        }
        if line[1..].iter().all(|&index| cells[index] == first) {
            return Some((first, line.as_slice()));
        }
    }

    None
}

/// Only meaningful after `check_win` came back empty: the final move can both
/// fill the board and complete a line.
pub fn is_draw(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}
