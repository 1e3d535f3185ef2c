//! Manifest-driven extraction of marker-delimited blocks
//!
//! A carve manifest is a TOML file listing extraction jobs. Each job names
//! a source file, the candidate encodings to read it under, a literal
//! marker pair bounding the block, a destination file, and optional text
//! to glue in front of the block (import preludes, an `export ` prefix).
//! Jobs are independent: one failing job never stops the others, and the
//! report collects every failure alongside the successes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::io;
use crate::marker;

/// A parsed carve manifest: the ordered list of extraction jobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarveManifest {
    /// Extraction jobs, run in declaration order.
    #[serde(rename = "job", default)]
    pub jobs: Vec<CarveJob>,
}

/// One marker-delimited extraction job.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CarveJob {
    /// File to scan. Relative paths resolve against the manifest's
    /// directory.
    pub source: PathBuf,

    /// Candidate encodings for the source, tried in order. Omitted or
    /// empty means UTF-8 only.
    #[serde(default)]
    pub encodings: Vec<Encoding>,

    /// Literal start marker; the block begins with this text.
    pub start_marker: String,

    /// Literal end marker; the block stops just before it.
    pub end_marker: String,

    /// Destination file, replaced atomically. Relative paths resolve
    /// against the manifest's directory.
    pub dest: PathBuf,

    /// Text emitted before the block, typically imports.
    #[serde(default)]
    pub prelude: String,

    /// Text glued directly onto the block's first character, typically a
    /// keyword like `export `.
    #[serde(default)]
    pub prefix: String,
}

impl CarveManifest {
    /// Parse a manifest from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use splice_core::CarveManifest;
    ///
    /// let manifest = CarveManifest::parse(r#"
    /// [[job]]
    /// source = "src/App.tsx"
    /// encodings = ["utf-16", "utf-8"]
    /// start-marker = "const ReportsPanel"
    /// end-marker = "const SettingsPanel"
    /// dest = "src/components/ReportsPanel.tsx"
    /// prelude = "import React from 'react';\n\n"
    /// prefix = "export "
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.jobs.len(), 1);
    /// assert_eq!(manifest.jobs[0].prefix, "export ");
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::parse(&content).map_err(|e| Error::manifest(path, e.to_string()))
    }
}

/// A successfully carved block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarveOutcome {
    /// Destination as written, with relative manifest paths resolved.
    pub dest: PathBuf,
    /// Encoding that decoded the source.
    pub encoding: Encoding,
    /// Bytes written (always UTF-8).
    pub bytes: usize,
}

/// A job that failed, with its cause.
#[derive(Debug)]
pub struct CarveFailure {
    pub dest: PathBuf,
    pub error: Error,
}

/// Result of running every job in a manifest.
#[derive(Debug, Default)]
pub struct CarveReport {
    pub outcomes: Vec<CarveOutcome>,
    pub failures: Vec<CarveFailure>,
}

impl CarveReport {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run a single carve job.
///
/// Reads the source under the job's candidate encodings, locates the
/// marker span, and writes prelude + prefix + block to the destination as
/// UTF-8. Relative job paths resolve against `base`.
pub fn carve_job(job: &CarveJob, base: &Path, dry_run: bool) -> Result<CarveOutcome> {
    let source = resolve(base, &job.source);
    let dest = resolve(base, &job.dest);

    let candidates: &[Encoding] = if job.encodings.is_empty() {
        &[Encoding::Utf8]
    } else {
        &job.encodings
    };

    let (text, encoding) = io::read_text_with_fallback(&source, candidates)?;
    let span = marker::locate(&text, &job.start_marker, &job.end_marker)?;

    let block = span.text_in(&text);
    let mut content = String::with_capacity(job.prelude.len() + job.prefix.len() + block.len());
    content.push_str(&job.prelude);
    content.push_str(&job.prefix);
    content.push_str(block);

    if !dry_run {
        io::write_atomic(&dest, &content)?;
    }

    debug!(dest = %dest.display(), bytes = content.len(), "carved block");
    Ok(CarveOutcome {
        dest,
        encoding,
        bytes: content.len(),
    })
}

/// Run every job in the manifest, collecting failures instead of stopping
/// at the first one.
pub fn carve_all(manifest: &CarveManifest, base: &Path, dry_run: bool) -> CarveReport {
    let mut report = CarveReport::default();
    for job in &manifest.jobs {
        match carve_job(job, base, dry_run) {
            Ok(outcome) => report.outcomes.push(outcome),
            Err(error) => report.failures.push(CarveFailure {
                dest: resolve(base, &job.dest),
                error,
            }),
        }
    }
    report
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
