//! Command-line interface for the TypeScript client generator.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use claritygen_abi::{
    ContractSource, ContractVariants, Network, ResolvedContract, parse_abi_file, validate_abi,
};
use claritygen_codegen::{Generator, GeneratorOptions, RuntimeMode};
use config::Config;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "claritygen", version, about = "Generate typed TypeScript clients from Clarity contract ABIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript modules from a config file
    Generate {
        /// Path to the config file
        #[arg(short, long, default_value = "claritygen.toml")]
        config: PathBuf,

        /// Override the configured runtime mode (minimal or full)
        #[arg(short, long)]
        mode: Option<String>,

        /// Override the configured output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Validate a config file and its ABIs without writing output
    Check {
        /// Path to the config file
        #[arg(short, long, default_value = "claritygen.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate { config, mode, out } => run_generate(&config, mode.as_deref(), out),
        Commands::Check { config } => run_check(&config),
    }
}

fn run_generate(config_path: &Path, mode: Option<&str>, out: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let mode = match mode {
        Some(name) => RuntimeMode::parse(name)
            .with_context(|| format!("unknown runtime mode '{name}'"))?,
        None => config.mode(),
    };
    let out_dir = out
        .or_else(|| config.generator.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let contracts = resolve_contracts(&config, config_path)?;
    info!(
        contracts = contracts.len(),
        mode = mode.as_str(),
        "resolved contracts"
    );

    let options = GeneratorOptions {
        mode,
        hooks: config.generator.hooks,
        include_hooks: config.generator.include_hooks.clone(),
        ..GeneratorOptions::default()
    };
    let outputs = Generator::new(&contracts, options).generate()?;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    for output in &outputs {
        let path = out_dir.join(&output.path);
        std::fs::write(&path, &output.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = output.content.len(), "wrote output");
    }

    Ok(())
}

fn run_check(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    let contracts = resolve_contracts(&config, config_path)?;

    info!(
        contracts = contracts.len(),
        "config and ABIs are valid"
    );
    Ok(())
}

/// Loads and validates every configured ABI, then resolves one contract per
/// configured network. ABI paths are taken relative to the config file.
fn resolve_contracts(config: &Config, config_path: &Path) -> Result<Vec<ResolvedContract>> {
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    let networks = config.networks();
    let mut contracts = Vec::new();

    for (name, section) in &config.contracts {
        let abi_path = base_dir.join(&section.abi);
        let abi = parse_abi_file(&abi_path)
            .with_context(|| format!("failed to parse ABI {}", abi_path.display()))?;
        validate_abi(&abi).with_context(|| format!("invalid ABI for contract '{name}'"))?;

        let addresses: BTreeMap<Network, String> = section
            .addresses
            .iter()
            .filter_map(|(network, address)| {
                Network::parse(network).map(|n| (n, address.clone()))
            })
            .collect();

        let variants = ContractVariants {
            base_name: name.clone(),
            contract_name: section
                .contract_name
                .clone()
                .unwrap_or_else(|| name.clone()),
            addresses,
            abi,
            source: ContractSource::Local,
        };
        contracts.extend(variants.resolve(&networks));
    }

    Ok(contracts)
}
