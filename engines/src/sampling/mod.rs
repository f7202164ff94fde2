//! Sampling driver
//!
//! Draws `loop_count` values from an engine through a [`UniformInt`] over
//! the cells of a `width × height` grid and counts how often each cell was
//! hit. The resulting [`Histogram`] is what the renderer turns into a
//! heatmap.
//!
//! Cell `v` sits at `x = v % width`, `y = v / width`.
//!
//! # Example
//!
//! ```
//! use prng_engines::{sample, SamplingConfig, Xoroshiro128PlusPlus};
//!
//! let config = SamplingConfig {
//!     width: 16,
//!     height: 16,
//!     loop_count: 1_000,
//!     max_level: 4,
//! };
//! let mut rng = Xoroshiro128PlusPlus::from_state([1, 2]);
//! let histogram = sample(&mut rng, &config).unwrap();
//! assert_eq!(histogram.total(), 1_000);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::engine::Engine;
use crate::distribution::{DistributionError, UniformInt};
use crate::render::bmp;

/// Errors that can occur while sampling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("Invalid sampling config: {0}")]
    InvalidConfig(String),

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    #[error("Cell {value} outside a grid of {cells} cells")]
    CellOutOfRange { value: u64, cells: u64 },
}

/// Driver configuration
///
/// Passed explicitly to [`sample`]; missing fields fall back to the defaults
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Grid width in cells (image width in pixels)
    pub width: u32,

    /// Grid height in cells (image height in pixels)
    pub height: u32,

    /// Number of draws per engine
    pub loop_count: u64,

    /// Hit count at which a cell is rendered fully black
    pub max_level: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            loop_count: 1_000_000,
            max_level: 10,
        }
    }
}

impl SamplingConfig {
    /// Total number of grid cells
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check the configuration before any sampling happens
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.width == 0 || self.height == 0 {
            return Err(SamplingError::InvalidConfig(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_count() < 2 {
            return Err(SamplingError::InvalidConfig("Range too small".to_string()));
        }
        if self.max_level == 0 {
            return Err(SamplingError::InvalidConfig(
                "max_level must be positive".to_string(),
            ));
        }
        if usize::try_from(self.cell_count()).is_err() {
            return Err(SamplingError::InvalidConfig(format!(
                "grid of {} cells does not fit in memory",
                self.cell_count()
            )));
        }
        if bmp::file_size(self.width, self.height) > bmp::MAX_FILE_SIZE {
            return Err(SamplingError::InvalidConfig(format!(
                "{}x{} grid is too large for a BMP image",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Distribution over every cell index
    pub fn distribution(&self) -> Result<UniformInt, SamplingError> {
        Ok(UniformInt::new(0, self.cell_count() - 1)?)
    }
}

/// Per-cell hit counts over a `width × height` grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    width: u32,
    height: u32,
    counts: Vec<u32>,
}

/// Aggregate view of a histogram, for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub draws: u64,
    pub cells: u64,
    pub occupied_cells: u64,
    pub empty_cells: u64,
    pub max_count: u32,
    pub mean_count: f64,
}

impl Histogram {
    /// Empty histogram for the given grid
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            counts: vec![0; cells],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Record one hit on cell index `value`
    ///
    /// # Errors
    /// `SamplingError::CellOutOfRange` if `value` is outside the grid; the
    /// histogram is left unchanged.
    pub fn record(&mut self, value: u64) -> Result<(), SamplingError> {
        let cells = self.counts.len() as u64;
        let count = usize::try_from(value)
            .ok()
            .and_then(|index| self.counts.get_mut(index))
            .ok_or(SamplingError::CellOutOfRange { value, cells })?;
        *count = count.saturating_add(1);
        Ok(())
    }

    /// Hits on cell `(x, y)`
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the grid.
    pub fn count(&self, x: u32, y: u32) -> u32 {
        self.counts[y as usize * self.width as usize + x as usize]
    }

    /// Hits per cell in row-major order
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Sum of all hits
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn summary(&self) -> HistogramSummary {
        let cells = self.counts.len() as u64;
        let draws = self.total();
        let occupied_cells = self.counts.iter().filter(|&&c| c > 0).count() as u64;

        HistogramSummary {
            draws,
            cells,
            occupied_cells,
            empty_cells: cells - occupied_cells,
            max_count: self.counts.iter().copied().max().unwrap_or(0),
            mean_count: if cells == 0 {
                0.0
            } else {
                draws as f64 / cells as f64
            },
        }
    }
}

/// Draw `config.loop_count` cell indices from `engine` and bin them
///
/// # Errors
/// `SamplingError::InvalidConfig` if the configuration does not validate.
pub fn sample<E: Engine + ?Sized>(
    engine: &mut E,
    config: &SamplingConfig,
) -> Result<Histogram, SamplingError> {
    config.validate()?;
    let distribution = config.distribution()?;

    log::debug!(
        "Sampling {} draws over {}x{} cells (range 0~{})",
        config.loop_count,
        config.width,
        config.height,
        distribution.hi()
    );

    let mut histogram = Histogram::new(config.width, config.height);
    for _ in 0..config.loop_count {
        histogram.record(distribution.sample(&mut *engine))?;
    }

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SamplingConfig::default();
        assert_eq!(config.width, 1000);
        assert_eq!(config.height, 1000);
        assert_eq!(config.loop_count, 1_000_000);
        assert_eq!(config.max_level, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_cell_grid_rejected() {
        let config = SamplingConfig {
            width: 1,
            height: 1,
            ..SamplingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SamplingError::InvalidConfig("Range too small".to_string()))
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let config = SamplingConfig {
            width: 0,
            ..SamplingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SamplingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_max_level_rejected() {
        let config = SamplingConfig {
            max_level: 0,
            ..SamplingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_grid_too_large_for_bitmap_rejected() {
        let config = SamplingConfig {
            width: 65536,
            height: 65536,
            ..SamplingConfig::default()
        };
        match config.validate() {
            Err(SamplingError::InvalidConfig(message)) => {
                assert!(message.contains("too large"), "{}", message)
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_record_out_of_range_leaves_histogram_unchanged() {
        let mut histogram = Histogram::new(2, 2);
        histogram.record(3).unwrap();

        assert_eq!(
            histogram.record(4),
            Err(SamplingError::CellOutOfRange { value: 4, cells: 4 })
        );
        assert_eq!(
            histogram.record(u64::MAX),
            Err(SamplingError::CellOutOfRange {
                value: u64::MAX,
                cells: 4
            })
        );
        assert_eq!(histogram.total(), 1);
    }

    #[test]
    fn test_histogram_row_major_layout() {
        let mut histogram = Histogram::new(4, 3);
        histogram.record(0).unwrap();
        histogram.record(5).unwrap(); // x = 1, y = 1
        histogram.record(5).unwrap();
        histogram.record(11).unwrap(); // x = 3, y = 2

        assert_eq!(histogram.count(0, 0), 1);
        assert_eq!(histogram.count(1, 1), 2);
        assert_eq!(histogram.count(3, 2), 1);
        assert_eq!(histogram.total(), 4);
    }

    #[test]
    fn test_summary() {
        let mut histogram = Histogram::new(2, 2);
        histogram.record(1).unwrap();
        histogram.record(1).unwrap();
        histogram.record(3).unwrap();

        let summary = histogram.summary();
        assert_eq!(summary.draws, 3);
        assert_eq!(summary.cells, 4);
        assert_eq!(summary.occupied_cells, 2);
        assert_eq!(summary.empty_cells, 2);
        assert_eq!(summary.max_count, 2);
        assert_eq!(summary.mean_count, 0.75);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SamplingConfig = serde_json::from_str(r#"{"width": 64}"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 1000);
        assert_eq!(config.max_level, 10);
    }
}
