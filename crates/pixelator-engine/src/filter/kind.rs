//! Named filter selection.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{
    CellSampling, ClusterQuantize, EdgeDetect, Filter, GridDifference, GridSpace, GridWeight,
    LinearDifference, LinearVariant, PaletteStrategy,
};
use crate::color::DistanceFormula;
use crate::error::EngineError;
use crate::palette::ClusterOptions;

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter '{0}'")]
pub struct UnknownFilter(pub String);

/// Every filter the engine offers, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    GridWeight,
    GridSpace,
    GridSpace2,
    GridDifference,
    LinearDifference,
    LinearDifference2,
    LinearDifference3,
    LinearDifference4,
    EdgeDetect,
    Cluster,
}

/// Tunables shared by the filters a [`FilterKind`] builds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSettings {
    pub grid_weight: GridWeight,
    pub cluster: ClusterOptions,
    pub formula: DistanceFormula,
    pub linear_palette: PaletteStrategy,
}

impl FilterKind {
    pub const ALL: [FilterKind; 10] = [
        FilterKind::GridWeight,
        FilterKind::GridSpace,
        FilterKind::GridSpace2,
        FilterKind::GridDifference,
        FilterKind::LinearDifference,
        FilterKind::LinearDifference2,
        FilterKind::LinearDifference3,
        FilterKind::LinearDifference4,
        FilterKind::EdgeDetect,
        FilterKind::Cluster,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::GridWeight => "grid-weight",
            FilterKind::GridSpace => "grid-space",
            FilterKind::GridSpace2 => "grid-space2",
            FilterKind::GridDifference => "grid-difference",
            FilterKind::LinearDifference => "linear-difference",
            FilterKind::LinearDifference2 => "linear-difference2",
            FilterKind::LinearDifference3 => "linear-difference3",
            FilterKind::LinearDifference4 => "linear-difference4",
            FilterKind::EdgeDetect => "edge-detect",
            FilterKind::Cluster => "cluster",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            FilterKind::GridWeight => "weighted 5x5 neighborhood blur",
            FilterKind::GridSpace => "4x4 mosaic sampled at each cell's top-left pixel",
            FilterKind::GridSpace2 => "4x4 mosaic sampled inside each cell's core",
            FilterKind::GridDifference => "4x4 cell averages with palette color reuse",
            FilterKind::LinearDifference => "row scan reusing palette colors",
            FilterKind::LinearDifference2 => "row scan preferring similar pixels above",
            FilterKind::LinearDifference3 => "row scan taking the nearest pixel above",
            FilterKind::LinearDifference4 => "inward spiral scan taking the nearest painted edge pixel",
            FilterKind::EdgeDetect => "black outlines where colors change",
            FilterKind::Cluster => "k-means quantization to a fixed palette",
        }
    }

    /// Build the filter configured by `settings`.
    ///
    /// # Errors
    ///
    /// Only the cluster filter can fail, with [`EngineError::Palette`] on a
    /// zero cluster size.
    pub fn build(self, settings: &FilterSettings) -> Result<Box<dyn Filter>, EngineError> {
        let linear = |variant: LinearVariant| -> Box<dyn Filter> {
            Box::new(
                LinearDifference::new(variant)
                    .palette(settings.linear_palette)
                    .formula(settings.formula),
            )
        };
        let filter: Box<dyn Filter> = match self {
            FilterKind::GridWeight => Box::new(settings.grid_weight),
            FilterKind::GridSpace => Box::new(GridSpace::new(CellSampling::TopLeft)),
            FilterKind::GridSpace2 => Box::new(GridSpace::new(CellSampling::InnerCore)),
            FilterKind::GridDifference => Box::new(GridDifference::new(settings.formula)),
            FilterKind::LinearDifference => linear(LinearVariant::PaletteOnly),
            FilterKind::LinearDifference2 => linear(LinearVariant::NorthNeighbors),
            FilterKind::LinearDifference3 => linear(LinearVariant::NearestNeighbor),
            FilterKind::LinearDifference4 => linear(LinearVariant::Spiral),
            FilterKind::EdgeDetect => Box::new(EdgeDetect),
            FilterKind::Cluster => Box::new(ClusterQuantize::new(settings.cluster.clone())?),
        };
        Ok(filter)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        FilterKind::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}
