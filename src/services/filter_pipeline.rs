use std::path::Path;
use std::time::Instant;

use pixelator_engine::{ClusterPalette, FilterKind, FilterSettings, PixelMatrix};

use crate::error::AppError;
use crate::models::{AdjustConfig, AppConfig};
use crate::rendering::{read_png, write_png};

/// Pipeline that orchestrates adjust → filter → encode
pub struct FilterPipeline {
    settings: FilterSettings,
    adjust: AdjustConfig,
}

impl FilterPipeline {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            settings: config.to_filter_settings()?,
            adjust: config.adjust.clone(),
        })
    }

    /// Apply the configured saturation/contrast adjustments to a copy.
    pub fn prepare(&self, image: &PixelMatrix) -> PixelMatrix {
        let mut prepared = image.clone();
        if let Some(factor) = self.adjust.saturation {
            tracing::debug!(factor, "Adjusting saturation");
            prepared.increase_saturation(factor);
        }
        if let Some(amount) = self.adjust.contrast {
            tracing::debug!(amount, "Adjusting contrast");
            prepared.increase_contrast(amount);
        }
        prepared
    }

    /// Run one filter over an image. The input is left untouched.
    pub fn run(&self, kind: FilterKind, image: &PixelMatrix) -> Result<PixelMatrix, AppError> {
        let filter = kind.build(&self.settings)?;
        let prepared = self.prepare(image);

        let start = Instant::now();
        let output = filter.apply(&prepared);
        tracing::info!(
            filter = filter.name(),
            width = image.width(),
            height = image.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Applied filter"
        );
        Ok(output)
    }

    /// Read a PNG, filter it and write the result.
    pub fn process_file(&self, kind: FilterKind, input: &Path, output: &Path) -> Result<(), AppError> {
        let image = read_png(input)?;
        let filtered = self.run(kind, &image)?;
        write_png(output, &filtered)?;
        tracing::info!(input = %input.display(), output = %output.display(), "Saved filtered image");
        Ok(())
    }

    /// Build the k-means palette of an image with the configured options.
    pub fn cluster_palette(&self, image: &PixelMatrix) -> Result<ClusterPalette, AppError> {
        let prepared = self.prepare(image);
        let start = Instant::now();
        let palette = ClusterPalette::new(&prepared, &self.settings.cluster)?;
        tracing::info!(
            colors = palette.colors().len(),
            converged = palette.converged(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built cluster palette"
        );
        Ok(palette)
    }
}
