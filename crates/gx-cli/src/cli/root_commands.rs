use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Export every assignment score, student email, and final grade of a
    /// course to CSV.
    Export(ExportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Course id or Canvas course URL (e.g. https://school.instructure.com/courses/1234/gradebook)
    pub course: String,

    /// File to write (defaults to <export.output_dir>/canvas_assignment_submissions.csv)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the CSV to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Keep students that have no recorded score
    #[arg(long)]
    pub include_ungraded: bool,
}
