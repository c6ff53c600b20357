//! Square 2D cell container for tile games.
//!
//! `Grid` holds exactly `size * size` cells in row-major order and is
//! addressed by `(column, row)` with `0 <= column, row < size`. Every cell is
//! always populated; "empty" is whatever sentinel the element type defines,
//! never a missing entry. Out-of-range access is a caller bug and panics,
//! like slice indexing.

/// A square grid of cells addressed by `(column, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `size x size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Rows as owned vectors, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.size)
            .map(|r| self.row(r).cloned().collect())
            .collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major rows.
    ///
    /// Panics unless every row is as long as the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "grid rows must form a square"
        );
        Grid {
            size,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.size && row < self.size,
            "cell ({}, {}) outside a {}x{} grid",
            col,
            row,
            self.size,
            self.size
        );
        row * self.size + col
    }

    /// Borrow the cell at `(column, row)`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> &T {
        &self.cells[self.index(col, row)]
    }

    /// Mutably borrow the cell at `(column, row)`.
    #[inline]
    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut T {
        let idx = self.index(col, row);
        &mut self.cells[idx]
    }

    /// Replace the cell at `(column, row)`.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: T) {
        let idx = self.index(col, row);
        self.cells[idx] = value;
    }

    /// Cells of row `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &T> {
        assert!(
            row < self.size,
            "row {} outside a {1}x{1} grid",
            row,
            self.size
        );
        self.cells[row * self.size..(row + 1) * self.size].iter()
    }

    /// Cells of column `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &T> {
        assert!(
            col < self.size,
            "column {} outside a {1}x{1} grid",
            col,
            self.size
        );
        self.cells[col..].iter().step_by(self.size)
    }

    /// Existing up/down/left/right neighbors of `(column, row)`.
    pub fn adjacent(&self, col: usize, row: usize) -> Vec<&T> {
        let _ = self.index(col, row);
        let mut neighbors = Vec::with_capacity(4);
        if row > 0 {
            neighbors.push(self.get(col, row - 1));
        }
        if row + 1 < self.size {
            neighbors.push(self.get(col, row + 1));
        }
        if col > 0 {
            neighbors.push(self.get(col - 1, row));
        }
        if col + 1 < self.size {
            neighbors.push(self.get(col + 1, row));
        }
        neighbors
    }

    /// All cells as `(column, row, &cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            (i % self.size, i / self.size, cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_cell() {
        let grid = Grid::new(3, 7u32);
        assert_eq!(grid.size(), 3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(*grid.get(c, r), 7);
            }
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = Grid::new(4, 0u32);
        grid.set(2, 1, 42);
        assert_eq!(*grid.get(2, 1), 42);
        // row-major neighbors untouched
        assert_eq!(*grid.get(1, 1), 0);
        assert_eq!(*grid.get(2, 2), 0);
    }

    #[test]
    fn rows_and_columns_read_in_board_order() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ]);
        let row: Vec<u32> = grid.row(1).copied().collect();
        assert_eq!(row, vec![4, 5, 6]);
        let col: Vec<u32> = grid.column(2).copied().collect();
        assert_eq!(col, vec![3, 6, 9]);
    }

    #[test]
    fn from_rows_round_trips_through_to_rows() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let grid = Grid::from_rows(rows.clone());
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn from_rows_rejects_ragged_input() {
        let _ = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_get_panics() {
        let grid = Grid::new(2, 0u32);
        let _ = grid.get(2, 0);
    }

    #[test]
    fn adjacency_respects_the_border() {
        let grid = Grid::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ]);
        // corner has two neighbors
        let mut corner: Vec<u32> = grid.adjacent(0, 0).into_iter().copied().collect();
        corner.sort_unstable();
        assert_eq!(corner, vec![2, 4]);
        // edge has three
        let mut edge: Vec<u32> = grid.adjacent(1, 0).into_iter().copied().collect();
        edge.sort_unstable();
        assert_eq!(edge, vec![1, 3, 5]);
        // center has four
        let mut center: Vec<u32> = grid.adjacent(1, 1).into_iter().copied().collect();
        center.sort_unstable();
        assert_eq!(center, vec![2, 4, 6, 8]);
    }

    #[test]
    fn iter_yields_row_major_positions() {
        let grid = Grid::from_rows(vec![vec![10, 20], vec![30, 40]]);
        let seen: Vec<(usize, usize, u32)> =
            grid.iter().map(|(c, r, v)| (c, r, *v)).collect();
        assert_eq!(
            seen,
            vec![(0, 0, 10), (1, 0, 20), (0, 1, 30), (1, 1, 40)]
        );
    }

    #[test]
    fn equality_is_cell_wise() {
        let a = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let b = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]);
        let c = Grid::from_rows(vec![vec![1, 2], vec![3, 5]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
