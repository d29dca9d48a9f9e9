use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use counter_dapp_core::CounterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("invalid boolean flag: {0}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Devnet,
    #[default]
    Testnet,
    Mainnet,
    Localnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::Mainnet => "mainnet",
            Network::Localnet => "localnet",
        }
    }

    pub fn fullnode_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet" => Ok(Network::Mainnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(ConfigError::UnknownNetwork(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub network: Network,
    /// Published counter package, shown next to the network.
    pub package_id: Option<CounterId>,
    /// Auxiliary login path offered on the connect prompt. May be relative
    /// to `base_url`.
    pub zklogin_url: String,
    /// Origin the web build is served from.
    pub base_url: String,
    pub dev_wallet_seed: String,
    pub auto_connect: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            package_id: None,
            zklogin_url: "/zklogin".to_owned(),
            base_url: "http://localhost:3000".to_owned(),
            dev_wallet_seed: "counter-dapp-dev".to_owned(),
            auto_connect: false,
        }
    }
}

impl AppConfig {
    pub const NETWORK_VAR: &'static str = "COUNTER_DAPP_NETWORK";
    pub const PACKAGE_ID_VAR: &'static str = "COUNTER_DAPP_PACKAGE_ID";
    pub const ZKLOGIN_URL_VAR: &'static str = "COUNTER_DAPP_ZKLOGIN_URL";
    pub const BASE_URL_VAR: &'static str = "COUNTER_DAPP_BASE_URL";
    pub const WALLET_SEED_VAR: &'static str = "COUNTER_DAPP_WALLET_SEED";
    pub const AUTO_CONNECT_VAR: &'static str = "COUNTER_DAPP_AUTO_CONNECT";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, keeping defaults for unset or
    /// unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::NETWORK_VAR) {
            match raw.parse() {
                Ok(network) => config.network = network,
                Err(e) => warn!(error = %e, "keeping default network"),
            }
        }
        if let Some(raw) = lookup(Self::PACKAGE_ID_VAR).filter(|v| !v.trim().is_empty()) {
            match CounterId::parse(raw.trim()) {
                Ok(id) => config.package_id = Some(id),
                Err(e) => warn!(error = %e, "ignoring invalid package id"),
            }
        }
        if let Some(url) = lookup(Self::ZKLOGIN_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.zklogin_url = url.trim().to_owned();
        }
        if let Some(url) = lookup(Self::BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_owned();
        }
        if let Some(seed) = lookup(Self::WALLET_SEED_VAR).filter(|v| !v.is_empty()) {
            config.dev_wallet_seed = seed;
        }
        if let Some(raw) = lookup(Self::AUTO_CONNECT_VAR) {
            match parse_flag(&raw) {
                Ok(flag) => config.auto_connect = flag,
                Err(e) => warn!(error = %e, "keeping default auto-connect"),
            }
        }

        config
    }

    /// `zklogin_url` made absolute against `base_url`, for launching outside
    /// a browser page.
    pub fn absolute_zklogin_url(&self) -> String {
        if self.zklogin_url.contains("://") {
            return self.zklogin_url.clone();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.zklogin_url.trim_start_matches('/')
        )
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidFlag(other.to_owned())),
    }
}
