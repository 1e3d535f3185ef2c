//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// splice - Slice, splice, and carve text files during manual refactors
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Extract a line range into a new file
    ///
    /// Copies lines START through END (1-based, both inclusive) of SOURCE
    /// into DEST, replacing whatever DEST held before. SOURCE is never
    /// modified.
    ///
    /// Examples:
    ///   splice extract App.tsx 120 480 components/ReportsPanel.tsx
    ///   splice extract notes.txt 3 5 excerpt.txt --dry-run
    Extract {
        /// File to read
        source: PathBuf,

        /// First line to copy (1-based)
        start: usize,

        /// Last line to copy (inclusive)
        end: usize,

        /// File to write, replaced if it already exists
        dest: PathBuf,

        /// Encoding of the source file (utf-8 or utf-16)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Validate and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Append a line range to the end of a file
    ///
    /// Reads lines START through END of SOURCE and appends them to DEST,
    /// creating DEST when it does not exist. Used after 'extract' to move
    /// a large file over in slices.
    ///
    /// Examples:
    ///   splice append App.tsx 481 900 components/ReportsPanel.tsx
    Append {
        /// File to read
        source: PathBuf,

        /// First line to copy (1-based)
        start: usize,

        /// Last line to copy (inclusive)
        end: usize,

        /// File to append to
        dest: PathBuf,

        /// Encoding of the source file (utf-8 or utf-16)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Validate and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove a line range from a file in place
    ///
    /// Deletes lines START through END and joins what precedes the range
    /// to what follows it. The file is rewritten atomically.
    ///
    /// Examples:
    ///   splice remove App.tsx 120 900
    Remove {
        /// File to edit in place
        file: PathBuf,

        /// First line to remove (1-based)
        start: usize,

        /// Last line to remove (inclusive)
        end: usize,

        /// Encoding of the file (utf-8 or utf-16)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Validate and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Replace the first lines of a file with other content
    ///
    /// Drops the first SKIP lines of TARGET and splices the full content
    /// of HEADER in their place. Typically used to swap an import block
    /// after components moved out.
    ///
    /// Examples:
    ///   splice replace-header App.tsx new_imports.txt 12
    ReplaceHeader {
        /// File to edit in place
        target: PathBuf,

        /// File holding the replacement header
        header: PathBuf,

        /// Number of leading lines to drop from TARGET
        skip: usize,

        /// Encoding of both files (utf-8 or utf-16)
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Validate and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Carve marker-delimited blocks listed in a TOML manifest
    ///
    /// Runs every extraction job in the manifest: read a source file, find
    /// the block between two literal markers, and write it to a
    /// destination with an optional prelude and prefix. Jobs run
    /// independently; failures are collected and reported at the end.
    ///
    /// Examples:
    ///   splice carve carve.toml
    ///   splice carve carve.toml --dry-run
    Carve {
        /// Manifest file listing the extraction jobs
        manifest: PathBuf,

        /// Locate every block and report without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Probe which encoding decodes a file
    ///
    /// Tries each candidate encoding in order and reports the first one
    /// that decodes the whole file, along with a short preview. Without
    /// --encoding the candidates are utf-16 then utf-8.
    ///
    /// Examples:
    ///   splice probe legacy/App.tsx
    ///   splice probe data.txt --encoding utf-8
    Probe {
        /// File to probe
        file: PathBuf,

        /// Candidate encoding; may repeat, tried in the given order
        #[arg(long = "encoding", value_name = "ENCODING")]
        encodings: Vec<String>,
    },
}
