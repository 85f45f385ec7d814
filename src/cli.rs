use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render form-field schemas into HTML tables
#[derive(Parser, Debug, Clone)]
#[command(name = "formtable", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMTABLE_CONFIG", default_value = "formtable.toml", global = true)]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMTABLE_HOST", global = true)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMTABLE_PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the page (or just the table) once and exit
    Render {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the <table> fragment, without the page around it
        #[arg(long)]
        fragment: bool,
    },
    /// Validate the configuration and print a summary of the schema
    Check,
    /// Serve the rendered page over HTTP, reloading on config changes
    Serve,
}

impl Cli {
    /// The command to run; serving is the default
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formtable"]);
        assert_eq!(cli.config, PathBuf::from("formtable.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formtable",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "serve",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_render_command() {
        let cli = Cli::parse_from(["formtable", "render", "--fragment", "-o", "out.html"]);
        assert_eq!(
            cli.command(),
            Command::Render {
                output: Some(PathBuf::from("out.html")),
                fragment: true,
            }
        );
    }
}
