//! TOML configuration for generation runs.
//!
//! A config file names the contracts to generate for, where their ABI JSON
//! lives, their per-network deployment addresses, and the generator options
//! for the run:
//!
//! ```toml
//! [generator]
//! mode = "full"
//! hooks = true
//! out_dir = "src/generated"
//! networks = ["mainnet", "testnet"]
//!
//! [contracts.dao-contract]
//! abi = "abis/dao-contract.json"
//! contract_name = "dao-v2"
//!
//! [contracts.dao-contract.addresses]
//! mainnet = "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9"
//! testnet = "ST2PABAF9FTAJYNFZH93XENAJ8FVY99RRM5FMRNJ5"
//! ```

use claritygen_abi::Network;
use claritygen_codegen::RuntimeMode;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Errors raised while loading or validating a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unrecognized runtime mode name.
    #[error("Unknown runtime mode '{mode}' (expected 'minimal' or 'full')")]
    UnknownMode {
        /// Offending mode name.
        mode: String,
    },

    /// Unrecognized network name.
    #[error("Unknown network '{network}' in {context}")]
    UnknownNetwork {
        /// Offending network name.
        network: String,
        /// Config section the name appeared in.
        context: String,
    },

    /// Contract section with an empty address table.
    #[error("Contract '{name}' declares no addresses")]
    NoAddresses {
        /// Contract name.
        name: String,
    },
}

/// The `[generator]` section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Runtime mode name; defaults to "full".
    pub mode: Option<String>,
    /// Emit hook modules.
    #[serde(default)]
    pub hooks: bool,
    /// Output directory for generated files.
    pub out_dir: Option<PathBuf>,
    /// Networks to resolve variants for; defaults to all.
    pub networks: Option<Vec<String>>,
    /// Generic hook names to include; omitted means the full catalog.
    pub include_hooks: Option<Vec<String>>,
}

/// One `[contracts.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractSection {
    /// Path to the contract's ABI JSON, relative to the config file.
    pub abi: PathBuf,
    /// On-chain contract name; defaults to the section key.
    pub contract_name: Option<String>,
    /// Deployment address per network.
    pub addresses: BTreeMap<String, String>,
}

/// A loaded generation config.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorSection,
    pub contracts: BTreeMap<String, ContractSection>,
}

impl Config {
    /// Loads and validates a config file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or names an unknown mode or network.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(mode) = &self.generator.mode
            && RuntimeMode::parse(mode).is_none()
        {
            return Err(ConfigError::UnknownMode { mode: mode.clone() });
        }
        if let Some(networks) = &self.generator.networks {
            for network in networks {
                if Network::parse(network).is_none() {
                    return Err(ConfigError::UnknownNetwork {
                        network: network.clone(),
                        context: "[generator].networks".to_string(),
                    });
                }
            }
        }
        for (name, contract) in &self.contracts {
            if contract.addresses.is_empty() {
                return Err(ConfigError::NoAddresses { name: name.clone() });
            }
            for network in contract.addresses.keys() {
                if Network::parse(network).is_none() {
                    return Err(ConfigError::UnknownNetwork {
                        network: network.clone(),
                        context: format!("[contracts.{name}].addresses"),
                    });
                }
            }
        }
        Ok(())
    }

    /// The configured runtime mode. Validation guarantees the name parses.
    #[must_use]
    pub fn mode(&self) -> RuntimeMode {
        self.generator
            .mode
            .as_deref()
            .and_then(RuntimeMode::parse)
            .unwrap_or_default()
    }

    /// The networks to resolve variants for.
    #[must_use]
    pub fn networks(&self) -> Vec<Network> {
        match &self.generator.networks {
            Some(names) => names
                .iter()
                .filter_map(|name| Network::parse(name))
                .collect(),
            None => Network::ALL.to_vec(),
        }
    }
}
