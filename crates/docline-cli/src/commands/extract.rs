use std::path::{Path, PathBuf};

use anyhow::Context;
use docline_config::{DoclineConfig, ScanConfig};
use ignore::WalkBuilder;

use crate::cli::ExtractArgs;
use crate::output::{self, DocRecord};

/// Per-directory ignore file honoured while walking, in `.gitignore` syntax.
const IGNORE_FILENAME: &str = ".doclineignore";

/// Handle `docline extract`.
pub fn handle(args: &ExtractArgs, config: &DoclineConfig) -> anyhow::Result<()> {
    let include_undocumented = args.all || config.scan.include_undocumented;
    let records = collect_records(&args.paths, &config.scan, include_undocumented)?;
    print!("{}", output::render_records(&records, config.output.format)?);
    if config.output.format == docline_config::OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// Scan every source file under `paths` and flatten the results.
pub fn collect_records(
    paths: &[PathBuf],
    scan: &ScanConfig,
    include_undocumented: bool,
) -> anyhow::Result<Vec<DocRecord>> {
    let mut records = Vec::new();
    for file in source_files(paths, scan)? {
        let declarations = docline_parser::scan_file(&file)
            .with_context(|| format!("failed to scan {}", file.display()))?;
        records.extend(
            declarations
                .into_iter()
                .filter(|declaration| include_undocumented || declaration.is_documented())
                .map(|declaration| DocRecord::new(&file, declaration)),
        );
    }
    Ok(records)
}

/// Files named directly are always scanned; directories contribute the files
/// whose extension is configured, in sorted order.
fn source_files(paths: &[PathBuf], scan: &ScanConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk_directory(path, scan));
        } else {
            anyhow::bail!("path '{}' does not exist", path.display());
        }
    }
    Ok(files)
}

fn walk_directory(root: &Path, scan: &ScanConfig) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.add_custom_ignore_filename(IGNORE_FILENAME);

    let mut found = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "walker error during extract");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| scan.matches_extension(ext));
        if matches {
            found.push(entry.into_path());
        }
    }
    found.sort();
    tracing::debug!(root = %root.display(), files = found.len(), "walked directory");
    found
}
