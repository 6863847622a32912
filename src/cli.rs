use clap::Parser;
use std::path::PathBuf;

/// Schema-driven mock JSON data service
#[derive(Parser, Debug, Clone)]
#[command(name = "tyche", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "TYCHE_CONFIG", default_value = "tyche.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "TYCHE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "TYCHE_PORT")]
    pub port: Option<u16>,

    /// File user-saved templates are persisted to
    #[arg(long, env = "TYCHE_TEMPLATES_PATH")]
    pub templates_path: Option<PathBuf>,

    /// Upper clamp for the per-request record count
    #[arg(long, env = "TYCHE_MAX_RECORDS")]
    pub max_records: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tyche"]);
        assert_eq!(cli.config, PathBuf::from("tyche.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.templates_path.is_none());
        assert!(cli.max_records.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "tyche",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--templates-path",
            "/var/lib/tyche/templates.json",
            "--max-records",
            "50",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(
            cli.templates_path,
            Some(PathBuf::from("/var/lib/tyche/templates.json"))
        );
        assert_eq!(cli.max_records, Some(50));
    }
}
