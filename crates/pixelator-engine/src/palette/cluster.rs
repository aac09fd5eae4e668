//! Fixed-size palette built once by k-means clustering.
//!
//! Construction shrinks the image (longer side 50 by default) and hands the
//! samples to [`kmeans_colors`]. Centroids live in RGB coordinates and the
//! metric is CIE76 over a cached Lab copy of each sample. With a time budget
//! the refinement runs one Lloyd step at a time and checks the clock between
//! steps.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use kmeans_colors::{get_kmeans, Calculate, Kmeans};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{nearest_index, ColorPalette, PaletteError};
use crate::color::{rgb_to_lab, DistanceFormula, Pixel};
use crate::matrix::PixelMatrix;
use crate::preprocess::downsample;

/// Options for [`ClusterPalette`] construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOptions {
    /// Requested number of centroids
    pub size: usize,
    /// Iteration cap handed to the k-means run
    pub max_iterations: usize,
    /// Seed of the k-means++ RNG
    pub seed: u64,
    /// Longer side of the downsampled copy that is clustered
    pub downsample_to: usize,
    /// Wall-clock limit on refinement; `None` runs to convergence or the cap
    pub time_budget: Option<Duration>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            size: 16,
            max_iterations: 80,
            seed: 42,
            downsample_to: 50,
            time_budget: None,
        }
    }
}

impl ClusterOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn downsample_to(mut self, longest_side: usize) -> Self {
        self.downsample_to = longest_side;
        self
    }

    #[inline]
    pub fn time_budget(mut self, budget: Option<Duration>) -> Self {
        self.time_budget = budget;
        self
    }
}

/// Centroid movement, summed in Lab units, below which a run has converged.
const CONVERGENCE: f32 = 0.05;

/// Cluster labels are `u8`.
const MAX_CLUSTERS: usize = 256;

/// One clustering sample: RGB for averaging, Lab for distance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Sample {
    rgb: [f32; 3],
    lab: [f32; 3],
}

impl Sample {
    fn new(rgb: [f32; 3]) -> Self {
        let lab = rgb_to_lab(rgb[0].into(), rgb[1].into(), rgb[2].into());
        Self {
            rgb,
            lab: [lab.l as f32, lab.a as f32, lab.b as f32],
        }
    }

    fn pixel(&self) -> Pixel {
        Pixel::from_rgb_f64(self.rgb.map(f64::from))
    }
}

impl Calculate for Sample {
    fn get_closest_centroid(buffer: &[Self], centroids: &[Self], indices: &mut Vec<u8>) {
        indices.clear();
        indices.extend(buffer.iter().map(|sample| {
            let mut best = (0u8, f32::MAX);
            for (i, centroid) in centroids.iter().enumerate() {
                let d = Self::difference(sample, centroid);
                if d < best.1 {
                    best = (i as u8, d);
                }
            }
            best.0
        }));
    }

    fn recalculate_centroids(rng: &mut impl Rng, buf: &[Self], centroids: &mut [Self], indices: &[u8]) {
        let mut sums = vec![([0f32; 3], 0u32); centroids.len()];
        for (sample, &label) in buf.iter().zip(indices) {
            if let Some((sum, count)) = sums.get_mut(label as usize) {
                for (s, c) in sum.iter_mut().zip(sample.rgb) {
                    *s += c;
                }
                *count += 1;
            }
        }
        for (centroid, (sum, count)) in centroids.iter_mut().zip(sums) {
            if count > 0 {
                *centroid = Sample::new(sum.map(|s| s / count as f32));
            } else if !buf.is_empty() {
                // Empty cluster: restart from a random sample
                *centroid = buf[rng.gen_range(0..buf.len())];
            }
        }
    }

    fn check_loop(centroids: &[Self], old_centroids: &[Self]) -> f32 {
        centroids
            .iter()
            .zip(old_centroids)
            .map(|(a, b)| Self::difference(a, b).sqrt())
            .sum()
    }

    fn create_random(rng: &mut impl Rng) -> Self {
        Sample::new([
            rng.gen_range(0.0..=255.0),
            rng.gen_range(0.0..=255.0),
            rng.gen_range(0.0..=255.0),
        ])
    }

    /// Squared CIE76 distance.
    fn difference(c1: &Self, c2: &Self) -> f32 {
        c1.lab
            .iter()
            .zip(c2.lab)
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

/// `k` centroid colors; immutable after construction.
///
/// Lookups are never gated: every color maps to some centroid.
///
/// # Example
///
/// ```
/// use pixelator_engine::{ClusterOptions, ClusterPalette, Pixel, PixelMatrix};
///
/// let image = PixelMatrix::new(8, 8, Pixel::opaque(40, 80, 120));
/// let palette = ClusterPalette::new(&image, &ClusterOptions::new().size(1)).unwrap();
/// assert_eq!(palette.colors(), &[Pixel::opaque(40, 80, 120)]);
/// assert_eq!(palette.nearest_color(Pixel::WHITE), Pixel::opaque(40, 80, 120));
/// ```
#[derive(Debug, Clone)]
pub struct ClusterPalette {
    colors: Vec<Pixel>,
    converged: bool,
}

impl ClusterPalette {
    /// Cluster `image` into at most `options.size` colors.
    ///
    /// When the downsampled image holds fewer distinct colors than requested,
    /// the palette shrinks to that many. Palettes are capped at 256 colors.
    ///
    /// # Errors
    ///
    /// [`PaletteError::ZeroClusters`] when `options.size` is zero,
    /// [`PaletteError::EmptyImage`] when `image` has no pixels.
    pub fn new(image: &PixelMatrix, options: &ClusterOptions) -> Result<Self, PaletteError> {
        if options.size == 0 {
            return Err(PaletteError::ZeroClusters);
        }
        if image.is_empty() {
            return Err(PaletteError::EmptyImage);
        }

        let small = downsample(image, options.downsample_to);
        let samples: Vec<Sample> = small
            .pixels()
            .iter()
            .map(|p| Sample::new(p.rgb_f64().map(|c| c as f32)))
            .collect();

        let distinct = small
            .pixels()
            .iter()
            .map(|p| p.rgb())
            .collect::<HashSet<_>>()
            .len();
        let k = options.size.min(distinct).min(MAX_CLUSTERS);
        if k < options.size {
            tracing::warn!(
                requested = options.size,
                available = distinct.min(MAX_CLUSTERS),
                "fewer distinct colors than requested clusters"
            );
        }

        // A budgeted run takes its first step here and the rest one at a time
        let first_run = match options.time_budget {
            Some(_) => options.max_iterations.min(1),
            None => options.max_iterations,
        };

        let started = Instant::now();
        let Kmeans {
            mut centroids,
            mut indices,
            ..
        } = get_kmeans(k, first_run, CONVERGENCE, false, &samples, options.seed);

        if let Some(budget) = options.time_budget {
            let mut rng = StdRng::seed_from_u64(options.seed);
            let mut steps = 1;
            while steps < options.max_iterations {
                if started.elapsed() >= budget {
                    tracing::warn!(
                        steps,
                        budget_ms = budget.as_millis() as u64,
                        "clustering time budget elapsed, keeping current centroids"
                    );
                    break;
                }
                let previous = centroids.clone();
                Sample::get_closest_centroid(&samples, &centroids, &mut indices);
                Sample::recalculate_centroids(&mut rng, &samples, &mut centroids, &indices);
                steps += 1;
                if Sample::check_loop(&centroids, &previous) <= CONVERGENCE {
                    break;
                }
            }
        }

        // Converged when one more assignment pass would change nothing
        let mut settled = Vec::with_capacity(samples.len());
        Sample::get_closest_centroid(&samples, &centroids, &mut settled);
        let converged = settled == indices;

        let colors: Vec<Pixel> = centroids.iter().map(Sample::pixel).collect();

        tracing::debug!(
            k,
            converged,
            samples = samples.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "cluster palette built"
        );

        Ok(Self { colors, converged })
    }

    /// Centroid colors.
    #[inline]
    pub fn colors(&self) -> &[Pixel] {
        &self.colors
    }

    /// Whether the centroids are a fixed point: reassigning every sample to
    /// its nearest centroid would not move any label.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// The centroid nearest to `color` (CIE76, first on ties).
    pub fn nearest_color(&self, color: Pixel) -> Pixel {
        nearest_index(color, &self.colors, DistanceFormula::Cie76).map_or(color, |(i, _)| self.colors[i])
    }
}

impl ColorPalette for ClusterPalette {
    fn nearest(&self, color: Pixel) -> Option<Pixel> {
        nearest_index(color, &self.colors, DistanceFormula::Cie76).map(|(i, _)| self.colors[i])
    }

    fn similarity_gated(&self) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.colors.len()
    }
}
