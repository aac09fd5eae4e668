//! Mosaic: paint every 4x4 cell with one sampled pixel.

use super::grid::{cell_origins, inner_core, paint_cell};
use super::Filter;
use crate::matrix::PixelMatrix;

/// Which pixel of a cell becomes its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellSampling {
    /// The cell's top-left pixel.
    #[default]
    TopLeft,
    /// The first pixel of the cell's 2x2 core, or the top-left pixel when
    /// the cell is too thin to have a core.
    InnerCore,
}

/// Grid space filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridSpace {
    pub sampling: CellSampling,
}

impl GridSpace {
    pub fn new(sampling: CellSampling) -> Self {
        Self { sampling }
    }
}

impl Filter for GridSpace {
    fn name(&self) -> &'static str {
        match self.sampling {
            CellSampling::TopLeft => "grid-space",
            CellSampling::InnerCore => "grid-space2",
        }
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let mut out = source.clone();
        for (row, col) in cell_origins(source.width(), source.height()) {
            let corner = source[(row, col)];
            let color = match self.sampling {
                CellSampling::TopLeft => corner,
                CellSampling::InnerCore => inner_core(source, row, col).first().copied().unwrap_or(corner),
            };
            paint_cell(&mut out, row, col, color);
        }
        out
    }
}
