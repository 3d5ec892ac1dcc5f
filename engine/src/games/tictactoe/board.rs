use super::types::{GridSize, Mark};

pub const MAX_CELLS: usize = 25;

/// Row-major board, index = row * side + col. Cells past `grid_size.cell_count()`
/// are unused and always `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid_size: GridSize,
    cells: [Mark; MAX_CELLS],
}

impl Board {
    pub fn new(grid_size: GridSize) -> Self {
        Self {
            grid_size,
            cells: [Mark::Empty; MAX_CELLS],
        }
    }

    pub fn from_cells(grid_size: GridSize, cells: &[Mark]) -> Result<Self, String> {
        if cells.len() != grid_size.cell_count() {
            return Err(format!(
                "A {}x{} board needs {} cells, got {}",
                grid_size.side(),
                grid_size.side(),
                grid_size.cell_count(),
                cells.len()
            ));
        }

        let mut board = Self::new(grid_size);
        board.cells[..cells.len()].copy_from_slice(cells);
        Ok(board)
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn cells(&self) -> &[Mark] {
        &self.cells[..self.grid_size.cell_count()]
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells().get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Copy of this board with `mark` placed at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        assert!(
            index < self.grid_size.cell_count(),
            "index {} out of range for a {}x{} board",
            index,
            self.grid_size.side(),
            self.grid_size.side()
        );
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells().chunks(self.grid_size.side()) {
            let line: String = row.iter().map(Mark::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}
