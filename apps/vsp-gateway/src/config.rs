//! Gateway configuration: a YAML file layered with `VSP__` environment variables.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use api_auth::{ApiAuthConfig, TicketSourceConfig};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use vote_prefs::VotePrefsConfig;

pub const ENV_PREFIX: &str = "VSP__";

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

const fn default_body_limit_bytes() -> usize {
    64 * 1024
}

const fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
    pub request_timeout_secs: u64,
    pub api_auth: ApiAuthConfig,
    pub tickets: TicketSourceConfig,
    pub vote_prefs: VotePrefsConfig,
    pub logging: LoggingConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
            api_auth: ApiAuthConfig::default(),
            tickets: TicketSourceConfig::default(),
            vote_prefs: VotePrefsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl GatewayConfig {
    /// Load from an optional YAML file, then apply environment overrides.
    ///
    /// `VSP__API_AUTH__PATH_PREFIX=/v` sets `api_auth.path_prefix`.
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or any value has the wrong shape.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        figment
            .extract()
            .context("invalid gateway configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use api_auth::Network;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn empty_sources_give_defaults() {
        let cfg = GatewayConfig::from_figment(Figment::new()).unwrap();

        assert_eq!(cfg.bind_addr, default_bind_addr());
        assert_eq!(cfg.api_auth.path_prefix, "/api");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.tickets.tickets.is_empty());
    }

    #[test]
    fn yaml_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
bind_addr: "0.0.0.0:9000"
api_auth:
  static_token: "svc-token"
  network: testnet
tickets:
  tickets:
    - ticket_hash: "aa"
      owner_fee_address: "TsFee"
      multisig_address: "TcVote"
vote_prefs:
  agenda_mask: 14
  users:
    - id: 1
      multisig_address: "TcVote"
logging:
  json: true
"#
        )
        .unwrap();

        let cfg = GatewayConfig::from_figment(Figment::new().merge(Yaml::file(file.path()))).unwrap();

        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(
            cfg.api_auth.static_token.as_ref().map(ExposeSecret::expose_secret),
            Some("svc-token")
        );
        assert_eq!(cfg.api_auth.network, Network::Testnet);
        assert_eq!(cfg.tickets.tickets.len(), 1);
        assert_eq!(cfg.vote_prefs.agenda_mask, 14);
        assert!(cfg.logging.json);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_auth:\n  prefix: /x").unwrap();

        let result = GatewayConfig::from_figment(Figment::new().merge(Yaml::file(file.path())));
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = GatewayConfig::load(Some(Path::new("/nonexistent/vsp-gateway.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("gw.yaml", "api_auth:\n  path_prefix: /api\n")?;
            jail.set_env("VSP__API_AUTH__PATH_PREFIX", "/v");

            let cfg = GatewayConfig::load(Some(Path::new("gw.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(cfg.api_auth.path_prefix, "/v");
            Ok(())
        });
    }
}
