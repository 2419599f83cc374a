use std::fmt::Write as _;
use std::path::Path;

use docline_config::OutputFormat;
use docline_parser::{Declaration, DocComment};
use serde::Serialize;

/// One reported declaration, flattened for output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DocRecord {
    pub file: String,
    pub line: usize,
    pub signature: String,
    pub doc: Option<String>,
    /// Byte offset of the doc comment run in `file`.
    pub doc_offset: Option<usize>,
}

impl DocRecord {
    pub fn new(file: &Path, declaration: Declaration) -> Self {
        let (doc, doc_offset) = declaration
            .doc
            .map_or((None, None), |doc| (Some(doc.text), Some(doc.start.utf8_offset)));
        Self {
            file: file.display().to_string(),
            line: declaration.line,
            signature: declaration.signature,
            doc,
            doc_offset,
        }
    }
}

/// Render scanned declarations in the requested format.
pub fn render_records(records: &[DocRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Raw => {
            let mut out = String::new();
            for record in records {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
            Ok(out)
        }
        OutputFormat::Text => render_records_text(records),
    }
}

fn render_records_text(records: &[DocRecord]) -> anyhow::Result<String> {
    if records.is_empty() {
        return Ok(String::from("(no declarations)\n"));
    }
    let mut out = String::new();
    for record in records {
        writeln!(out, "{}:{}: {}", record.file, record.line, record.signature)?;
        match &record.doc {
            Some(doc) => {
                for line in doc.lines() {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        writeln!(out, "    {line}")?;
                    }
                }
            }
            None => out.push_str("    (undocumented)\n"),
        }
    }
    Ok(out)
}

/// Render a single extraction result. Text output is the bare comment body.
pub fn render_doc(doc: Option<&DocComment>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?)),
        OutputFormat::Raw => Ok(format!("{}\n", serde_json::to_string(&doc)?)),
        OutputFormat::Text => Ok(doc.map(|doc| doc.text.clone()).unwrap_or_default()),
    }
}
