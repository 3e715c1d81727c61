//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// A small modal text editor
#[derive(Parser, Debug)]
#[command(name = "rsedit", version, about = "A small modal text editor")]
pub struct CliArgs {
    /// File to edit; created on the first save if it does not exist
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to PATH instead of the daily log in the data directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::try_parse_from(["rsedit"]).unwrap();
        assert_eq!(args.file, None);
        assert_eq!(args.config, None);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn test_file_and_options() {
        let args = CliArgs::try_parse_from([
            "rsedit",
            "notes.txt",
            "--config",
            "/tmp/rsedit.yaml",
            "--log-file",
            "/tmp/rsedit.log",
        ])
        .unwrap();
        assert_eq!(args.file.as_deref(), Some("notes.txt"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/rsedit.yaml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/rsedit.log")));
    }

    #[test]
    fn test_rejects_second_file() {
        assert!(CliArgs::try_parse_from(["rsedit", "a.txt", "b.txt"]).is_err());
    }
}
