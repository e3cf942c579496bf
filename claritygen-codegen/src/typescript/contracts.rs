//! Per-contract output block assembly.
//!
//! One [`ContractEmitter`] produces a contract's full output block: the
//! embedded ABI constant and the exported object literal with all methods,
//! grouped by runtime mode.

use super::functions::FunctionEmitter;
use crate::error::CodegenError;
use crate::generator::RuntimeMode;
use claritygen_abi::{FunctionAccess, ResolvedContract};

/// Emitter for one resolved contract.
pub struct ContractEmitter<'a> {
    contract: &'a ResolvedContract,
    mode: RuntimeMode,
}

impl<'a> ContractEmitter<'a> {
    /// Creates an emitter for one contract.
    #[must_use]
    pub fn new(contract: &'a ResolvedContract, mode: RuntimeMode) -> Self {
        Self { contract, mode }
    }

    /// Generates the contract's output block.
    ///
    /// A contract with no public or read-only functions produces an empty
    /// string rather than an error.
    ///
    /// # Errors
    /// Returns `CodegenError` if the embedded ABI constant cannot be
    /// serialized.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let callable: Vec<_> = self.contract.abi.callable_functions().collect();
        if callable.is_empty() {
            return Ok(String::new());
        }

        let name = &self.contract.name;
        let mut out = String::new();

        // Embedded ABI constant for downstream introspection. Private
        // functions are stripped here too; no generated artifact may
        // reference them.
        let mut abi_value = self.contract.abi.raw().clone();
        if let Some(functions) = abi_value
            .get_mut("functions")
            .and_then(serde_json::Value::as_array_mut)
        {
            functions.retain(|f| {
                f.get("access").and_then(serde_json::Value::as_str) != Some("private")
            });
        }
        let abi_json = serde_json::to_string_pretty(&abi_value)?;
        out.push_str(&format!("export const {name}Abi = {abi_json} as const;\n\n"));

        out.push_str(&format!("export const {name} = {{\n"));
        out.push_str(&format!("  address: '{}',\n", self.contract.address));
        out.push_str(&format!(
            "  contractName: '{}',\n",
            self.contract.contract_name
        ));

        for function in &callable {
            out.push_str(&FunctionEmitter::new(self.contract, function).minimal_method());
        }

        if self.mode == RuntimeMode::Full {
            for function in &callable {
                if function.access == FunctionAccess::Public {
                    out.push_str(&FunctionEmitter::new(self.contract, function).fetch_helper());
                }
            }
            out.push_str(&self.group(&callable, FunctionAccess::ReadOnly));
            out.push_str(&self.group(&callable, FunctionAccess::Public));
        }

        out.push_str("} as const;\n");
        Ok(out)
    }

    /// Emits the `read:` or `write:` helper group. An empty group is
    /// omitted entirely.
    fn group(
        &self,
        callable: &[&claritygen_abi::ClarityFunction],
        access: FunctionAccess,
    ) -> String {
        let members: Vec<_> = callable.iter().filter(|f| f.access == access).collect();
        if members.is_empty() {
            return String::new();
        }

        let label = match access {
            FunctionAccess::ReadOnly => "read",
            _ => "write",
        };
        let mut out = format!("  {label}: {{\n");
        for function in members {
            let emitter = FunctionEmitter::new(self.contract, function);
            out.push_str(&match access {
                FunctionAccess::ReadOnly => emitter.read_helper(),
                _ => emitter.write_helper(),
            });
        }
        out.push_str("  },\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claritygen_abi::{ContractSource, parse_abi};

    fn test_contract(functions: &str) -> ResolvedContract {
        ResolvedContract {
            name: "testContract".to_string(),
            address: "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9".to_string(),
            contract_name: "test-contract".to_string(),
            abi: parse_abi(&format!(r#"{{"functions": {functions}}}"#))
                .expect("Failed to parse"),
            source: ContractSource::Local,
        }
    }

    const MIXED_FUNCTIONS: &str = r#"[
        {"name": "transfer", "access": "public",
         "args": [
            {"name": "amount", "type": "uint128"},
            {"name": "sender", "type": "principal"},
            {"name": "recipient", "type": "principal"}
         ],
         "outputs": {"type": {"response": {"ok": "bool", "error": "uint128"}}}},
        {"name": "get-balance", "access": "read_only",
         "args": [{"name": "account", "type": "principal"}],
         "outputs": {"type": "uint128"}},
        {"name": "mint-internal", "access": "private",
         "args": [{"name": "amount", "type": "uint128"}],
         "outputs": {"type": "bool"}}
    ]"#;

    #[test]
    fn test_minimal_mode_block() {
        let contract = test_contract(MIXED_FUNCTIONS);
        let out = ContractEmitter::new(&contract, RuntimeMode::Minimal)
            .generate()
            .expect("generate");

        assert!(out.contains("export const testContract = {"));
        assert!(out.contains("export const testContractAbi = {"));
        assert!(out.contains(" as const;"));
        assert!(out.contains("transfer(args:"));
        assert!(out.contains("getBalance(args:"));
        assert!(!out.contains("read: {"));
        assert!(!out.contains("write: {"));
        assert!(!out.contains("fetchTransfer"));
    }

    #[test]
    fn test_full_mode_block() {
        let contract = test_contract(MIXED_FUNCTIONS);
        let out = ContractEmitter::new(&contract, RuntimeMode::Full)
            .generate()
            .expect("generate");

        assert!(out.contains("read: {"));
        assert!(out.contains("write: {"));
        assert!(out.contains("async fetchTransfer("));
        assert!(out.contains("validateWithAbi: true"));
    }

    #[test]
    fn test_full_mode_is_superset_of_minimal() {
        let contract = test_contract(MIXED_FUNCTIONS);
        let minimal = ContractEmitter::new(&contract, RuntimeMode::Minimal)
            .generate()
            .expect("generate");
        let full = ContractEmitter::new(&contract, RuntimeMode::Full)
            .generate()
            .expect("generate");

        for member in ["transfer(args:", "getBalance(args:", "address:", "contractName:"] {
            assert!(minimal.contains(member));
            assert!(full.contains(member));
        }
    }

    #[test]
    fn test_private_functions_never_referenced() {
        let contract = test_contract(MIXED_FUNCTIONS);
        for mode in [RuntimeMode::Minimal, RuntimeMode::Full] {
            let out = ContractEmitter::new(&contract, mode)
                .generate()
                .expect("generate");
            // Stripped from the embedded ABI constant as well.
            assert!(!out.contains("mintInternal"));
            assert!(!out.contains("mint-internal"));
        }
    }

    #[test]
    fn test_read_group_omitted_without_read_only_functions() {
        let contract = test_contract(
            r#"[{"name": "set-owner", "access": "public",
                "args": [{"name": "owner", "type": "principal"}],
                "outputs": {"type": "bool"}}]"#,
        );
        let out = ContractEmitter::new(&contract, RuntimeMode::Full)
            .generate()
            .expect("generate");

        assert!(!out.contains("read: {"));
        assert!(out.contains("write: {"));
    }

    #[test]
    fn test_write_group_omitted_without_public_functions() {
        let contract = test_contract(
            r#"[{"name": "get-owner", "access": "read_only",
                "args": [],
                "outputs": {"type": "principal"}}]"#,
        );
        let out = ContractEmitter::new(&contract, RuntimeMode::Full)
            .generate()
            .expect("generate");

        assert!(out.contains("read: {"));
        assert!(!out.contains("write: {"));
        assert!(!out.contains("fetch"));
    }

    #[test]
    fn test_contract_without_callable_functions_is_empty() {
        let contract = test_contract(
            r#"[{"name": "helper", "access": "private",
                "args": [],
                "outputs": {"type": "bool"}}]"#,
        );
        for mode in [RuntimeMode::Minimal, RuntimeMode::Full] {
            let out = ContractEmitter::new(&contract, mode)
                .generate()
                .expect("generate");
            assert!(out.is_empty());
        }
    }
}
