//! Batch Conversion Driver
//!
//! Sequential loop over every `*.xml` file in the input directory. Each
//! document converts independently: one malformed file is logged and counted
//! as failed, and the batch proceeds to the next file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::parser::{convert_file, ConvertError};
use crate::corpus::types::CorpusDocument;

/// Success/failure tally for one batch run.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every XML file under `input_dir`, writing `{stem}.json` files
/// into `output_dir`.
///
/// Only an unreadable input directory or an uncreatable output directory
/// aborts the batch; per-document failures are isolated.
pub fn convert_directory(input_dir: &Path, output_dir: &Path) -> std::io::Result<BatchSummary> {
    fs::create_dir_all(output_dir)?;

    let mut sources: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("xml"))
        .collect();
    sources.sort();

    tracing::info!("Found {} source files in {}", sources.len(), input_dir.display());

    let mut summary = BatchSummary::default();
    for source in sources {
        match convert_one(&source, output_dir) {
            Ok(target) => {
                tracing::info!("Converted {} -> {}", source.display(), target.display());
                summary.converted += 1;
            }
            Err(err) => {
                tracing::error!("Failed to convert {}: {}", source.display(), err);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "Batch complete: {} converted, {} failed",
        summary.converted,
        summary.failed
    );
    Ok(summary)
}

fn convert_one(source: &Path, output_dir: &Path) -> Result<PathBuf, ConvertError> {
    let doc = convert_file(source)?;

    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let target = output_dir.join(format!("{stem}.json"));

    write_document(&doc, &target)?;
    Ok(target)
}

/// Pretty-printed with a trailing newline; struct field order keeps the
/// output stable across runs.
pub fn write_document(doc: &CorpusDocument, target: &Path) -> Result<(), ConvertError> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    fs::write(target, json)?;
    Ok(())
}
