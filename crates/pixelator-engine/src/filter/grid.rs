//! 4x4 cell partitioning shared by the cell-based filters.

use crate::color::Pixel;
use crate::matrix::PixelMatrix;

/// Side of a cell in pixels.
pub const CELL_SIZE: usize = 4;

/// Top-left corners of all cells, row by row. Cells on the last row or
/// column are clipped when the dimensions are not multiples of four.
pub(crate) fn cell_origins(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height)
        .step_by(CELL_SIZE)
        .flat_map(move |row| (0..width).step_by(CELL_SIZE).map(move |col| (row, col)))
}

/// Pixels of the 2x2 core of the cell at `(row, col)`, clipped to the
/// matrix. Empty for cells too thin to have a core.
pub(crate) fn inner_core(source: &PixelMatrix, row: usize, col: usize) -> Vec<Pixel> {
    let rows = (row + 1).min(source.height())..(row + 3).min(source.height());
    let cols = (col + 1).min(source.width())..(col + 3).min(source.width());
    rows.flat_map(|r| cols.clone().filter_map(move |c| source.get(r, c)))
        .collect()
}

/// Fill the cell at `(row, col)` with `color`.
pub(crate) fn paint_cell(target: &mut PixelMatrix, row: usize, col: usize, color: Pixel) {
    for r in row..(row + CELL_SIZE).min(target.height()) {
        for c in col..(col + CELL_SIZE).min(target.width()) {
            target.set(r, c, color);
        }
    }
}
