use std::path::PathBuf;

use clap::Parser;
use interstellar_config::Config;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "interstellar-backend",
    version,
    about = "Serves model and field validation responses as JSON"
)]
pub struct CliArgs {
    /// Path to configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config-path", env = "INTERSTELLAR_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Bind host, overrides config and environment
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overrides config and environment
    #[arg(long)]
    pub port: Option<u16>,
}

impl CliArgs {
    /// Command-line flags take precedence over file and environment values.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(host) = &self.host {
            cfg.server.host = host.clone();
        }
        if let Some(port) = self.port {
            cfg.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = CliArgs::try_parse_from([
            "interstellar-backend",
            "-c",
            "cfg.toml",
            "--host",
            "127.0.0.1",
            "--port",
            "9999",
        ])
        .expect("parse");
        assert_eq!(args.config_path.as_deref(), Some(std::path::Path::new("cfg.toml")));

        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9999);
        assert_eq!(cfg.logging, Config::default().logging);
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(CliArgs::try_parse_from(["interstellar-backend", "--port", "70000"]).is_err());
    }
}
