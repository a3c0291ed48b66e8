use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl LogLevel {
    /// Directive value understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "quire")]
#[command(about = "quire - discover workspace instruction documents and inspect prompt attachments")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses the config file value
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (skips global and workspace config resolution)
    #[arg(short = 'C', long, global = true, env = "QUIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Workspace folder; repeat for a multi-root workspace (defaults to the current directory)
    #[arg(short = 'w', long = "folder", global = true)]
    pub folders: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Log level override from flags, if any
    pub fn level_override(&self) -> Option<LogLevel> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level),
            (None, true) => Some(LogLevel::Debug),
            (None, false) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List instruction documents found in the workspace folders
    List {
        /// Also print candidate locations that could not be resolved
        #[arg(long)]
        show_unresolved: bool,
    },

    /// Attach an instructions document and show its attachment view
    Inspect {
        /// Instructions document to attach
        file: PathBuf,

        /// Toggle the enabled state before printing
        #[arg(long)]
        toggle: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_folders() {
        let cli = Cli::parse_from(["quire", "list", "-w", "a", "--folder", "b"]);
        assert_eq!(cli.folders, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(matches!(cli.command, Commands::List { show_unresolved: false }));
    }

    #[test]
    fn verbose_maps_to_debug_unless_level_given() {
        let cli = Cli::parse_from(["quire", "-v", "list"]);
        assert_eq!(cli.level_override(), Some(LogLevel::Debug));

        let cli = Cli::parse_from(["quire", "-v", "--log-level", "trace", "list"]);
        assert_eq!(cli.level_override(), Some(LogLevel::Trace));

        let cli = Cli::parse_from(["quire", "list"]);
        assert_eq!(cli.level_override(), None);
    }

    #[test]
    fn inspect_takes_file_and_toggle() {
        let cli = Cli::parse_from(["quire", "inspect", "x.md", "--toggle", "-f", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Inspect { file, toggle } => {
                assert_eq!(file, PathBuf::from("x.md"));
                assert!(toggle);
            }
            _ => panic!("expected inspect"),
        }
    }
}
