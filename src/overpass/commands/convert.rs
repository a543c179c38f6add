use crate::overpass::document;
use crate::overpass::error::Error;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_INPUT: &str = "fountains.geojson";
pub const DEFAULT_OUTPUT: &str = "fountains.clean.geojson";

#[derive(Debug, PartialEq)]
pub struct Summary {
    pub features: usize,
    pub skipped: usize,
}

fn with_path(path: &Path, e: io::Error) -> Error {
    Error::IOError(io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
}

pub fn run(input: &Path, output: &Path) -> Result<Summary, Error> {
    let raw = fs::read_to_string(input).map_err(|e| with_path(input, e))?;
    let doc = document::parse(&raw)?;
    let total = document::elements(&doc)?.len();
    let fc = document::to_feature_collection(&doc)?;

    // Serialize fully before touching the output so failures leave no partial file.
    let out = document::to_pretty_string(&fc)?;
    fs::write(output, out).map_err(|e| with_path(output, e))?;

    let summary = Summary {
        features: fc.features.len(),
        skipped: total - fc.features.len(),
    };
    log::info!(
        "Converted {} of {} elements from {}",
        summary.features,
        total,
        input.display()
    );
    Ok(summary)
}
