//! Contracts-module assembly.
//!
//! Concatenates per-contract output blocks under a single file header and
//! the import set the selected runtime mode needs.

use super::contracts::ContractEmitter;
use crate::error::CodegenError;
use crate::generator::RuntimeMode;
use claritygen_abi::ResolvedContract;

/// Header prepended to every generated module.
pub const FILE_HEADER: &str = "// This file was generated by claritygen. Do not edit by hand.\n\n";

/// Assembles the contracts module for a generation run.
///
/// Contracts are emitted in input order; empty blocks (contracts with no
/// public or read-only functions) are skipped.
///
/// # Errors
/// Returns `CodegenError` if any contract block fails to serialize.
pub fn assemble(
    contracts: &[ResolvedContract],
    mode: RuntimeMode,
) -> Result<String, CodegenError> {
    let mut out = String::from(FILE_HEADER);
    out.push_str(&imports(mode));

    for contract in contracts {
        let block = ContractEmitter::new(contract, mode).generate()?;
        if !block.is_empty() {
            out.push_str(&block);
            out.push('\n');
        }
    }

    Ok(out)
}

/// Selects the module's import statements.
///
/// Minimal mode declares only the type names and the value-constructor
/// namespace; full mode adds the read/transaction primitives and the
/// wallet-flow primitive.
fn imports(mode: RuntimeMode) -> String {
    let mut out = String::from(
        "import type { ClarityAbi, ClarityValue, ContractCallPayload, PostCondition } from '@stacks/types';\n\
         import * as cv from '@stacks/transactions';\n",
    );
    if mode == RuntimeMode::Full {
        out.push_str(
            "import { callReadOnlyFunction, makeContractCall } from '@stacks/transactions';\n\
             import { openContractCall } from '@stacks/connect';\n",
        );
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claritygen_abi::{ContractSource, parse_abi};

    fn contract(name: &str, address: &str) -> ResolvedContract {
        ResolvedContract {
            name: name.to_string(),
            address: address.to_string(),
            contract_name: "test-contract".to_string(),
            abi: parse_abi(
                r#"{"functions": [
                    {"name": "transfer", "access": "public",
                     "args": [{"name": "amount", "type": "uint128"}],
                     "outputs": {"type": "bool"}},
                    {"name": "get-balance", "access": "read_only",
                     "args": [{"name": "account", "type": "principal"}],
                     "outputs": {"type": "uint128"}}
                ]}"#,
            )
            .expect("Failed to parse"),
            source: ContractSource::Local,
        }
    }

    #[test]
    fn test_minimal_imports() {
        let contracts = [contract("testContract", "SP000")];
        let out = assemble(&contracts, RuntimeMode::Minimal).expect("assemble");

        assert!(out.starts_with(FILE_HEADER));
        assert!(out.contains(
            "import type { ClarityAbi, ClarityValue, ContractCallPayload, PostCondition } from '@stacks/types';"
        ));
        assert!(out.contains("import * as cv from '@stacks/transactions';"));
        assert!(!out.contains("makeContractCall } from"));
        assert!(!out.contains("@stacks/connect"));
    }

    #[test]
    fn test_full_imports() {
        let contracts = [contract("testContract", "SP000")];
        let out = assemble(&contracts, RuntimeMode::Full).expect("assemble");

        assert!(out.contains(
            "import { callReadOnlyFunction, makeContractCall } from '@stacks/transactions';"
        ));
        assert!(out.contains("import { openContractCall } from '@stacks/connect';"));
    }

    #[test]
    fn test_contracts_emitted_in_input_order() {
        let contracts = [
            contract("daoContract", "SP000"),
            contract("testnetDaoContract", "ST000"),
        ];
        let out = assemble(&contracts, RuntimeMode::Minimal).expect("assemble");

        let first = out.find("export const daoContract = {").expect("first");
        let second = out
            .find("export const testnetDaoContract = {")
            .expect("second");
        assert!(first < second);
        // Each variant embeds its own ABI constant.
        assert!(out.contains("export const daoContractAbi = {"));
        assert!(out.contains("export const testnetDaoContractAbi = {"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let contracts = [
            contract("daoContract", "SP000"),
            contract("testnetDaoContract", "ST000"),
        ];
        let first = assemble(&contracts, RuntimeMode::Full).expect("assemble");
        let second = assemble(&contracts, RuntimeMode::Full).expect("assemble");
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_members_are_superset_of_minimal() {
        let contracts = [contract("testContract", "SP000")];
        let minimal = assemble(&contracts, RuntimeMode::Minimal).expect("assemble");
        let full = assemble(&contracts, RuntimeMode::Full).expect("assemble");

        for line in minimal.lines() {
            // Every emitted member declaration survives into full mode.
            if line.ends_with("): ContractCallPayload {") || line.starts_with("export const") {
                assert!(full.contains(line), "missing in full mode: {line}");
            }
        }
    }
}
