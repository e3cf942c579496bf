//! Resolved contract representation for code generation.
//!
//! This module turns configured contracts (an ABI plus one address per
//! deployed network) into the flat list of [`ResolvedContract`] values the
//! code generator consumes, and hosts the identifier-case utilities the
//! emitters share.

use crate::types::ContractAbi;
use std::collections::BTreeMap;

/// A Stacks network a contract can be deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Public test network.
    Testnet,
    /// Local development network.
    Devnet,
    /// Simulated network used by unit-test harnesses.
    Simnet,
}

impl Network {
    /// All known networks, in emission order.
    pub const ALL: [Self; 4] = [Self::Mainnet, Self::Testnet, Self::Devnet, Self::Simnet];

    /// Returns the lowercase network name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Simnet => "simnet",
        }
    }

    /// Parses a network from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mainnet" => Some(Self::Mainnet),
            "testnet" => Some(Self::Testnet),
            "devnet" => Some(Self::Devnet),
            "simnet" => Some(Self::Simnet),
            _ => None,
        }
    }
}

/// Provenance of a contract's ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractSource {
    /// Fetched from a node or indexer API.
    Api,
    /// Read from a local file.
    Local,
}

/// A contract ready for code generation.
///
/// Constructed once per generation run by the resolution step, immutable
/// thereafter, and consumed read-only by every emitter. The `name` is a
/// valid TypeScript identifier, already camelCased and disambiguated across
/// network variants.
#[derive(Debug, Clone)]
pub struct ResolvedContract {
    /// Generated export name (camelCase TypeScript identifier).
    pub name: String,
    /// Deployer address on the target network.
    pub address: String,
    /// On-chain contract name.
    pub contract_name: String,
    /// Parsed ABI.
    pub abi: ContractAbi,
    /// ABI provenance.
    pub source: ContractSource,
}

/// A configured contract with one address per deployed network.
#[derive(Debug, Clone)]
pub struct ContractVariants {
    /// Base contract name (kebab-case).
    pub base_name: String,
    /// On-chain contract name.
    pub contract_name: String,
    /// Deployer address per network.
    pub addresses: BTreeMap<Network, String>,
    /// Parsed ABI, shared by all variants.
    pub abi: ContractAbi,
    /// ABI provenance.
    pub source: ContractSource,
}

impl ContractVariants {
    /// Resolves one [`ResolvedContract`] per requested network.
    ///
    /// The mainnet variant keeps the base name; every other network's
    /// variant is renamed to `{network}{CapitalizedBase}` (for example
    /// `testnetDaoContract`). A network with no configured address is
    /// silently skipped.
    #[must_use]
    pub fn resolve(&self, networks: &[Network]) -> Vec<ResolvedContract> {
        let base = to_camel_case(&self.base_name);

        networks
            .iter()
            .filter_map(|network| {
                let address = self.addresses.get(network)?;
                let name = if *network == Network::Mainnet {
                    base.clone()
                } else {
                    format!("{}{}", network.as_str(), capitalize(&base))
                };
                Some(ResolvedContract {
                    name,
                    address: address.clone(),
                    contract_name: self.contract_name.clone(),
                    abi: self.abi.clone(),
                    source: self.source,
                })
            })
            .collect()
    }
}

/// Converts a kebab-case domain identifier to camelCase.
///
/// Each `-x` becomes uppercase `X`; `?` and `!` suffixes allowed in Clarity
/// names are dropped since they are not valid in TypeScript identifiers.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut uppercase_next = false;

    for c in s.chars() {
        if c == '-' {
            uppercase_next = true;
        } else if c == '?' || c == '!' {
            // dropped: not valid in the target language
        } else if uppercase_next {
            result.push(c.to_ascii_uppercase());
            uppercase_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Uppercases the first character of an identifier.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_abi;

    fn sample_abi() -> ContractAbi {
        parse_abi(
            r#"{"functions": [
                {"name": "get-balance", "access": "read_only",
                 "args": [{"name": "account", "type": "principal"}],
                 "outputs": {"type": "uint128"}}
            ]}"#,
        )
        .expect("Failed to parse")
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("get-token-uri"), "getTokenUri");
        assert_eq!(to_camel_case("transfer"), "transfer");
        assert_eq!(to_camel_case("dao-contract"), "daoContract");
        assert_eq!(to_camel_case("is-owner?"), "isOwner");
        assert_eq!(to_camel_case("set-v2-pool"), "setV2Pool");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("daoContract"), "DaoContract");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_network_parse_round_trip() {
        for network in Network::ALL {
            assert_eq!(Network::parse(network.as_str()), Some(network));
        }
        assert_eq!(Network::parse("regtest"), None);
    }

    #[test]
    fn test_resolve_mainnet_keeps_base_name() {
        let variants = ContractVariants {
            base_name: "dao-contract".to_string(),
            contract_name: "dao-test".to_string(),
            addresses: BTreeMap::from([
                (Network::Mainnet, "SP000".to_string()),
                (Network::Testnet, "ST000".to_string()),
            ]),
            abi: sample_abi(),
            source: ContractSource::Local,
        };

        let resolved = variants.resolve(&Network::ALL);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].name, "daoContract");
        assert_eq!(resolved[0].address, "SP000");
        assert_eq!(resolved[1].name, "testnetDaoContract");
        assert_eq!(resolved[1].address, "ST000");
        assert_eq!(resolved[1].contract_name, "dao-test");
    }

    #[test]
    fn test_resolve_devnet_naming() {
        let variants = ContractVariants {
            base_name: "counter".to_string(),
            contract_name: "counter".to_string(),
            addresses: BTreeMap::from([(Network::Devnet, "ST999".to_string())]),
            abi: sample_abi(),
            source: ContractSource::Local,
        };

        let resolved = variants.resolve(&Network::ALL);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "devnetCounter");
    }

    #[test]
    fn test_resolve_skips_unconfigured_networks() {
        let variants = ContractVariants {
            base_name: "counter".to_string(),
            contract_name: "counter".to_string(),
            addresses: BTreeMap::from([(Network::Mainnet, "SP000".to_string())]),
            abi: sample_abi(),
            source: ContractSource::Api,
        };

        let resolved = variants.resolve(&[Network::Testnet, Network::Simnet]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_resolve_respects_requested_network_filter() {
        let variants = ContractVariants {
            base_name: "counter".to_string(),
            contract_name: "counter".to_string(),
            addresses: BTreeMap::from([
                (Network::Mainnet, "SP000".to_string()),
                (Network::Testnet, "ST000".to_string()),
            ]),
            abi: sample_abi(),
            source: ContractSource::Local,
        };

        let resolved = variants.resolve(&[Network::Testnet]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "testnetCounter");
    }
}
