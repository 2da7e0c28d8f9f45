use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, ProgressMode};
pub use root_commands::{Commands, ExportArgs};

/// Top-level CLI parser for the `gx` binary.
#[derive(Debug, Parser)]
#[command(name = "gx", version, about = "Gradex - Canvas grade export with student emails")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Progress bar: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,

    /// Canvas instance root, overriding `canvas.base_url`
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            progress: self.progress,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, ProgressMode};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn export_parses_course_and_output() {
        let cli = Cli::try_parse_from(["gx", "export", "1234", "-o", "grades.csv"])
            .expect("cli should parse");

        let Commands::Export(args) = cli.command;
        assert_eq!(args.course, "1234");
        assert_eq!(args.output, Some(PathBuf::from("grades.csv")));
        assert!(!args.stdout);
        assert!(!args.include_ungraded);
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gx",
            "--verbose",
            "export",
            "https://school.instructure.com/courses/1/gradebook",
            "--progress",
            "off",
            "--base-url",
            "https://school.instructure.com",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        assert_eq!(cli.progress, ProgressMode::Off);
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.base_url.as_deref(), Some("https://school.instructure.com"));
    }

    #[test]
    fn output_conflicts_with_stdout() {
        let parsed = Cli::try_parse_from(["gx", "export", "1", "--stdout", "-o", "x.csv"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn progress_mode_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gx", "--progress", "sometimes", "export", "1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn export_requires_course() {
        assert!(Cli::try_parse_from(["gx", "export"]).is_err());
    }
}
