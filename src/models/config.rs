use crate::error::AppError;
use pixelator_engine::color::UnknownFormula;
use pixelator_engine::filter::{UnknownStrategy, DEFAULT_CENTER_WEIGHT, DEFAULT_NEIGHBOR_WEIGHT};
use pixelator_engine::{
    ClusterOptions, DistanceFormula, FilterSettings, GridWeight, PaletteStrategy,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Kernel weights for the grid-weight filter
    pub grid_weight: GridWeightConfig,

    /// k-means palette settings for the cluster filter and `palette` command
    pub cluster: ClusterConfig,

    /// Color distance formula: cie76, cie94 or ciede2000
    pub distance: String,

    /// Optional adjustments applied before filtering
    pub adjust: AdjustConfig,

    /// Palette used by the linear-difference scans: linear or gradient
    pub linear_palette: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridWeightConfig {
    pub center_weight: f64,
    pub neighbor_weight: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClusterConfig {
    pub size: usize,
    pub max_iterations: usize,
    pub seed: u64,
    /// Longest side the image is shrunk to before clustering
    pub downsample_to: usize,
    /// Wall-clock limit for refinement; unlimited when absent
    pub time_budget_ms: Option<u64>,
}

/// Pre-filter adjustments. Absent values leave the image untouched.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AdjustConfig {
    /// Saturation factor (1.0 = unchanged)
    pub saturation: Option<f32>,
    /// Contrast amount (0 = unchanged)
    pub contrast: Option<i32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_weight: GridWeightConfig::default(),
            cluster: ClusterConfig::default(),
            distance: DistanceFormula::default().to_string(),
            adjust: AdjustConfig::default(),
            linear_palette: PaletteStrategy::default().to_string(),
        }
    }
}

impl Default for GridWeightConfig {
    fn default() -> Self {
        Self {
            center_weight: DEFAULT_CENTER_WEIGHT,
            neighbor_weight: DEFAULT_NEIGHBOR_WEIGHT,
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        let options = ClusterOptions::default();
        Self {
            size: options.size,
            max_iterations: options.max_iterations,
            seed: options.seed,
            downsample_to: options.downsample_to,
            time_budget_ms: None,
        }
    }
}

impl ClusterConfig {
    pub fn to_options(&self) -> ClusterOptions {
        ClusterOptions::new()
            .size(self.size)
            .max_iterations(self.max_iterations)
            .seed(self.seed)
            .downsample_to(self.downsample_to)
            .time_budget(self.time_budget_ms.map(Duration::from_millis))
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file falls back to the defaults; unreadable or malformed
    /// files are errors.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            distance = %config.distance,
            linear_palette = %config.linear_palette,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn formula(&self) -> Result<DistanceFormula, AppError> {
        self.distance
            .parse()
            .map_err(|e: UnknownFormula| AppError::Config(e.to_string()))
    }

    pub fn palette_strategy(&self) -> Result<PaletteStrategy, AppError> {
        self.linear_palette
            .parse()
            .map_err(|e: UnknownStrategy| AppError::Config(e.to_string()))
    }

    /// Resolve the string-typed fields into engine filter settings.
    pub fn to_filter_settings(&self) -> Result<FilterSettings, AppError> {
        Ok(FilterSettings {
            grid_weight: GridWeight::new()
                .center_weight(self.grid_weight.center_weight)
                .neighbor_weight(self.grid_weight.neighbor_weight),
            cluster: self.cluster.to_options(),
            formula: self.formula()?,
            linear_palette: self.palette_strategy()?,
        })
    }
}
