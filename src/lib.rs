//! Reads Training Center XML (TCX) workouts and derives lap, activity and
//! file-level metrics from their trackpoints.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

use std::path::Path;

use rayon::prelude::*;

pub use config::{Config, OutputFormat};
pub use error::ParseError;
pub use types::activity::{Position, TrackPoint};
pub use types::metric::Metric;
pub use types::summary::{Activity, Lap, ParsedFile, Summary};

use pipeline::{parse, process, source};

pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedFile, ParseError> {
    let document = parse::parse(bytes)?;
    Ok(process::process(document))
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedFile, ParseError> {
    parse_file_with(path, &Config::default())
}

pub fn parse_file_with(path: impl AsRef<Path>, config: &Config) -> Result<ParsedFile, ParseError> {
    let path = path.as_ref();
    let bytes = source::read(path, config.max_file_size)?;
    let parsed = parse_bytes(&bytes)?;

    tracing::info!(
        "Parsed {} ({} activities, {} trackpoints, {:.1} m)",
        path.display(),
        parsed.activities.len(),
        parsed.metrics.trackpoint_count,
        parsed.total_distance_meters()
    );

    Ok(parsed)
}

/// Parses each file independently in parallel. Results keep the input order.
pub fn parse_files<P>(paths: &[P], config: &Config) -> Vec<Result<ParsedFile, ParseError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| parse_file_with(path, config))
        .collect()
}
