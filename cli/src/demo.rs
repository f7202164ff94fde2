//! Demo run: sample every selected engine, write its heatmap, report

use std::path::{Path, PathBuf};

use prng_engines::{render_heatmap, HistogramSummary, SamplingConfig};
use serde::Serialize;

use crate::catalogue::{self, Seeding};
use crate::error::DemoError;

/// Outcome for one engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineReport {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub summary: HistogramSummary,
}

impl EngineReport {
    /// One-line human readable summary
    pub fn line(&self) -> String {
        format!(
            "{:<22} {:>9}/{} cells hit, max {:>4}, mean {:.3} -> {}",
            self.name,
            self.summary.occupied_cells,
            self.summary.cells,
            self.summary.max_count,
            self.summary.mean_count,
            self.path.display()
        )
    }
}

/// Effective configuration, one `KEY: value` per line
pub fn config_banner(config: &SamplingConfig) -> String {
    format!(
        "WIDTH: {}\nHEIGHT: {}\nLOOP_COUNT: {}\nMAX_LEVEL: {}\nRANDOM_RANGE: 0~{}",
        config.width,
        config.height,
        config.loop_count,
        config.max_level,
        config.cell_count().saturating_sub(1)
    )
}

/// Render each engine in `names` into `out_dir`
///
/// Stops at the first failure; bitmaps already written stay on disk.
pub fn run(
    names: &[&str],
    seeding: &Seeding,
    config: &SamplingConfig,
    out_dir: &Path,
) -> Result<Vec<EngineReport>, DemoError> {
    std::fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(names.len());
    for &name in names {
        log::info!("Sampling {}", name);
        let histogram = catalogue::sample_engine(name, seeding, config)?;

        let image = render_heatmap(&histogram, config.max_level)?;
        let path = out_dir.join(format!("{}.bmp", name));
        image.save(&path)?;

        reports.push(EngineReport {
            name: name.to_string(),
            path,
            summary: histogram.summary(),
        });
    }

    Ok(reports)
}
