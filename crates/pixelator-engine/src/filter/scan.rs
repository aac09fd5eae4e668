//! Pixel-by-pixel scans that carry a current color and a growing palette.
//!
//! A scan is a fold: [`ScanState`] is the accumulator
//! `(current, palette) × source pixel → (current', palette', output pixel)`,
//! and [`Traversal`] is the pluggable visiting order. Every visited position
//! carries the three offsets of its "already painted edge": the row above for
//! a raster scan, the cells behind the cursor for a spiral.

use super::LinearVariant;
use crate::color::{DistanceFormula, PerceptionLevel, Pixel};
use crate::matrix::PixelMatrix;
use crate::palette::{nearest_color, AdaptivePalette};

/// North-west, north and north-east.
pub const NORTH_EDGE: [(isize, isize); 3] = [(-1, -1), (-1, 0), (-1, 1)];

/// Direction the cursor moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }

    /// The cell behind the cursor and its two side neighbors.
    pub const fn trailing_edge(self) -> [(isize, isize); 3] {
        let (dr, dc) = self.delta();
        let (pr, pc) = (dc, -dr);
        [(-dr - pr, -dc - pc), (-dr, -dc), (-dr + pr, -dc + pc)]
    }
}

/// One visited position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub row: usize,
    pub col: usize,
    /// Offsets of the already-painted neighbors to consult
    pub edge: [(isize, isize); 3],
}

/// Order in which a scan visits the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Row-major, consulting the row above.
    #[default]
    Raster,
    /// Clockwise inward spiral, consulting the cells behind the cursor.
    Spiral,
}

impl Traversal {
    /// Every position of a `width x height` matrix exactly once.
    pub fn steps(self, width: usize, height: usize) -> Vec<Step> {
        match self {
            Traversal::Raster => raster(width, height),
            Traversal::Spiral => spiral(width, height),
        }
    }
}

fn raster(width: usize, height: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            steps.push(Step {
                row,
                col,
                edge: NORTH_EDGE,
            });
        }
    }
    steps
}

/// Top row left to right, right column downwards, bottom row right to left,
/// left column upwards, then shrink the frame. Ends once the frame collapses.
fn spiral(width: usize, height: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(width * height);
    let (mut top, mut bottom) = (0isize, height as isize - 1);
    let (mut left, mut right) = (0isize, width as isize - 1);

    let mut push = |row: isize, col: isize, direction: Direction| {
        steps.push(Step {
            row: row as usize,
            col: col as usize,
            edge: direction.trailing_edge(),
        });
    };

    while top <= bottom && left <= right {
        for col in left..=right {
            push(top, col, Direction::East);
        }
        top += 1;
        for row in top..=bottom {
            push(row, right, Direction::South);
        }
        right -= 1;
        if top <= bottom {
            for col in (left..=right).rev() {
                push(bottom, col, Direction::West);
            }
            bottom -= 1;
        }
        if left <= right {
            for row in (top..=bottom).rev() {
                push(row, left, Direction::North);
            }
            left += 1;
        }
    }
    steps
}

/// Accumulator threaded through a scan.
///
/// Holds the current color, the palette discovered so far and the partially
/// painted output. Cells not yet painted are never consulted as neighbors.
#[derive(Debug, Clone)]
pub struct ScanState<P> {
    current: Pixel,
    palette: P,
    formula: DistanceFormula,
    width: usize,
    height: usize,
    painted: Vec<Option<Pixel>>,
}

impl<P: AdaptivePalette> ScanState<P> {
    /// Start a scan whose current color is `seed`; the seed is also the first
    /// palette entry.
    pub fn new(seed: Pixel, mut palette: P, width: usize, height: usize, formula: DistanceFormula) -> Self {
        palette.add(seed);
        Self {
            current: seed,
            palette,
            formula,
            width,
            height,
            painted: vec![None; width * height],
        }
    }

    #[inline]
    pub fn current(&self) -> Pixel {
        self.current
    }

    #[inline]
    pub fn palette(&self) -> &P {
        &self.palette
    }

    /// Painted pixel at `(row, col)`, if any.
    pub fn painted(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            self.painted[row * self.width + col]
        } else {
            None
        }
    }

    fn is_similar(&self, a: Pixel, b: Pixel) -> bool {
        PerceptionLevel::from_distance(a.difference(b, self.formula)).is_similar()
    }

    /// Already-painted cells on the edge of `step`, in edge order.
    fn edge_colors(&self, step: &Step) -> Vec<Pixel> {
        step.edge
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = step.row.checked_add_signed(dr)?;
                let col = step.col.checked_add_signed(dc)?;
                self.painted(row, col)
            })
            .collect()
    }

    /// Reuse a similar palette color, or adopt `source` as a new entry.
    fn from_palette(&mut self, source: Pixel) -> Pixel {
        match self.palette.find_similar(source) {
            Some(known) => known,
            None => {
                self.palette.add(source);
                source
            }
        }
    }

    /// Visit one position: decide the color for `source`, paint it and
    /// return it.
    pub fn advance(&mut self, step: &Step, source: Pixel, variant: LinearVariant) -> Pixel {
        if !self.is_similar(self.current, source) {
            let next = match variant {
                LinearVariant::PaletteOnly => self.from_palette(source),
                LinearVariant::NorthNeighbors => {
                    let edge = self.edge_colors(step);
                    match edge.into_iter().find(|&n| self.is_similar(source, n)) {
                        Some(neighbor) => neighbor,
                        None => self.from_palette(source),
                    }
                }
                LinearVariant::NearestNeighbor | LinearVariant::Spiral => {
                    let mut candidates = self.edge_colors(step);
                    candidates.push(self.current);
                    match nearest_color(source, &candidates, self.formula) {
                        Some(neighbor) => neighbor,
                        None => self.from_palette(source),
                    }
                }
            };
            self.current = next;
        }
        self.painted[step.row * self.width + step.col] = Some(self.current);
        self.current
    }

    /// The painted output. Positions never visited keep `fill`.
    pub fn into_matrix(self, fill: Pixel) -> PixelMatrix {
        let pixels = self.painted.into_iter().map(|p| p.unwrap_or(fill)).collect();
        PixelMatrix::from_pixels(self.width, self.height, pixels)
            .unwrap_or_else(|_| PixelMatrix::new(self.width, self.height, fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::LinearPalette;

    fn positions(steps: &[Step]) -> Vec<(usize, usize)> {
        steps.iter().map(|s| (s.row, s.col)).collect()
    }

    #[test]
    fn test_raster_order() {
        let steps = Traversal::Raster.steps(2, 2);
        assert_eq!(positions(&steps), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(steps.iter().all(|s| s.edge == NORTH_EDGE));
    }

    #[test]
    fn test_spiral_order_square() {
        let steps = Traversal::Spiral.steps(3, 3);
        assert_eq!(
            positions(&steps),
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (2, 1),
                (2, 0),
                (1, 0),
                (1, 1)
            ]
        );
    }

    #[test]
    fn test_spiral_visits_every_cell_once() {
        for (w, h) in [(1, 1), (1, 5), (5, 1), (4, 3), (3, 4), (6, 6), (7, 2)] {
            let mut seen = positions(&Traversal::Spiral.steps(w, h));
            assert_eq!(seen.len(), w * h, "{w}x{h}");
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), w * h, "{w}x{h} revisits a cell");
        }
        assert!(Traversal::Spiral.steps(0, 4).is_empty());
    }

    #[test]
    fn test_trailing_edges() {
        assert_eq!(Direction::East.trailing_edge(), [(-1, -1), (0, -1), (1, -1)]);
        assert_eq!(Direction::South.trailing_edge(), [(-1, 1), (-1, 0), (-1, -1)]);
        assert_eq!(Direction::West.trailing_edge(), [(1, 1), (0, 1), (-1, 1)]);
        assert_eq!(Direction::North.trailing_edge(), [(1, -1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_seed_is_first_palette_entry() {
        let red = Pixel::opaque(255, 0, 0);
        let state = ScanState::new(red, LinearPalette::new(), 2, 2, DistanceFormula::Cie76);
        assert_eq!(state.current(), red);
        assert_eq!(state.palette().colors(), &[red]);
    }

    #[test]
    fn test_similar_source_keeps_current() {
        let red = Pixel::opaque(255, 0, 0);
        let mut state = ScanState::new(red, LinearPalette::new(), 2, 1, DistanceFormula::Cie76);
        let step = Step {
            row: 0,
            col: 1,
            edge: NORTH_EDGE,
        };
        assert_eq!(state.advance(&step, Pixel::opaque(253, 1, 0), LinearVariant::PaletteOnly), red);
        assert_eq!(state.palette().colors().len(), 1);
    }

    #[test]
    fn test_dissimilar_source_joins_palette() {
        let red = Pixel::opaque(255, 0, 0);
        let blue = Pixel::opaque(0, 0, 255);
        let mut state = ScanState::new(red, LinearPalette::new(), 2, 1, DistanceFormula::Cie76);
        let step = Step {
            row: 0,
            col: 1,
            edge: NORTH_EDGE,
        };
        assert_eq!(state.advance(&step, blue, LinearVariant::PaletteOnly), blue);
        assert_eq!(state.palette().colors(), &[red, blue]);
        assert_eq!(state.painted(0, 1), Some(blue));
        assert_eq!(state.painted(0, 0), None);
    }

    #[test]
    fn test_north_neighbor_preferred_over_palette() {
        let red = Pixel::opaque(255, 0, 0);
        let green = Pixel::opaque(0, 200, 0);
        let mut state = ScanState::new(red, LinearPalette::new(), 1, 2, DistanceFormula::Cie76);
        let top = Step {
            row: 0,
            col: 0,
            edge: NORTH_EDGE,
        };
        state.advance(&top, green, LinearVariant::NorthNeighbors);
        // back to red, then the cell below green sees a near-green source
        state.current = red;
        let below = Step {
            row: 1,
            col: 0,
            edge: NORTH_EDGE,
        };
        let painted = state.advance(&below, Pixel::opaque(0, 198, 2), LinearVariant::NorthNeighbors);
        assert_eq!(painted, green);
        assert_eq!(state.palette().colors(), &[red, green]);
    }

    /// A scan whose current color is `current` (also the only palette entry)
    /// with `cells` already painted.
    fn painted_state(
        width: usize,
        height: usize,
        cells: &[((usize, usize), Pixel)],
        current: Pixel,
    ) -> ScanState<LinearPalette> {
        let mut state = ScanState::new(current, LinearPalette::new(), width, height, DistanceFormula::Cie76);
        for &((row, col), color) in cells {
            state.painted[row * width + col] = Some(color);
        }
        state
    }

    #[test]
    fn test_nearest_neighbor_beats_first_in_edge_order() {
        let source = Pixel::opaque(200, 100, 50);
        let near = Pixel::opaque(200, 102, 50);
        let far = Pixel::opaque(200, 106, 50);
        let blue = Pixel::opaque(0, 0, 255);

        let d_near = source.difference(near, DistanceFormula::Cie76);
        let d_far = source.difference(far, DistanceFormula::Cie76);
        assert!(d_near < d_far && d_far < 11.0, "near {d_near}, far {d_far}");

        // North-west is similar but farther than north
        let cells = [((0, 0), far), ((0, 1), near), ((0, 2), blue)];
        let step = Step {
            row: 1,
            col: 1,
            edge: NORTH_EDGE,
        };

        let mut first = painted_state(3, 2, &cells, Pixel::BLACK);
        assert_eq!(first.advance(&step, source, LinearVariant::NorthNeighbors), far);

        let mut nearest = painted_state(3, 2, &cells, Pixel::BLACK);
        assert_eq!(nearest.advance(&step, source, LinearVariant::NearestNeighbor), near);
        assert_eq!(nearest.palette().colors(), &[Pixel::BLACK]);
    }

    #[test]
    fn test_nearest_neighbor_falls_back_to_palette() {
        let blue = Pixel::opaque(0, 0, 255);
        let near_red = Pixel::opaque(250, 5, 5);
        let cells = [((0, 0), blue), ((0, 1), blue), ((0, 2), blue)];
        let step = Step {
            row: 1,
            col: 1,
            edge: NORTH_EDGE,
        };

        // No neighbor is similar, but the palette holds a match
        let mut state = painted_state(3, 2, &cells, near_red);
        state.current = Pixel::BLACK;
        let painted = state.advance(&step, Pixel::opaque(255, 0, 0), LinearVariant::NearestNeighbor);
        assert_eq!(painted, near_red);
        assert_eq!(state.palette().colors(), &[near_red]);

        // Nothing similar anywhere: the source is adopted
        let green = Pixel::opaque(0, 200, 0);
        let mut state = painted_state(3, 2, &cells, near_red);
        state.current = Pixel::BLACK;
        assert_eq!(state.advance(&step, green, LinearVariant::NearestNeighbor), green);
        assert_eq!(state.palette().colors(), &[near_red, green]);
    }

    #[test]
    fn test_spiral_top_row_consults_cell_behind() {
        let red = Pixel::opaque(255, 0, 0);
        let green = Pixel::opaque(0, 200, 0);
        let step = Traversal::Spiral.steps(3, 3)[1];
        assert_eq!((step.row, step.col), (0, 1));

        let mut state = painted_state(3, 3, &[((0, 0), green)], red);
        let painted = state.advance(&step, Pixel::opaque(2, 198, 0), LinearVariant::Spiral);
        assert_eq!(painted, green);
        assert_eq!(state.palette().colors(), &[red]);
    }

    #[test]
    fn test_spiral_right_column_consults_cell_above() {
        let red = Pixel::opaque(255, 0, 0);
        let green = Pixel::opaque(0, 200, 0);
        let near_green = Pixel::opaque(2, 198, 0);
        let step = Traversal::Spiral.steps(3, 3)[3];
        assert_eq!((step.row, step.col), (1, 2));

        let mut state = painted_state(3, 3, &[((0, 2), green)], red);
        assert_eq!(state.advance(&step, near_green, LinearVariant::Spiral), green);

        // The cell to the west is not on a southbound trailing edge
        let mut state = painted_state(3, 3, &[((1, 1), green)], red);
        assert_eq!(state.advance(&step, near_green, LinearVariant::Spiral), near_green);
        assert_eq!(state.palette().colors(), &[red, near_green]);
    }
}
