//! Clarity ABI JSON parser.
//!
//! This module provides functionality to parse contract ABI documents, as
//! returned by a Stacks node or stored alongside local contract sources,
//! into the internal ABI representation.

use crate::error::ParseError;
use crate::types::ContractAbi;
use serde_json::Value;

/// Parses a contract ABI from a JSON string.
///
/// # Arguments
/// * `json` - ABI document content
///
/// # Returns
/// Parsed ABI or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or the `functions` section
/// is missing. Unrecognized type shapes inside function signatures do not
/// error; they map to the opaque fallback type.
pub fn parse_abi(json: &str) -> Result<ContractAbi, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    ContractAbi::from_value(value)
}

/// Parses a contract ABI from a JSON file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_abi_file(path: &std::path::Path) -> Result<ContractAbi, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_abi(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClarityType, FunctionAccess};

    const SIP010_FRAGMENT: &str = r#"{
        "functions": [
            {
                "name": "transfer",
                "access": "public",
                "args": [
                    {"name": "amount", "type": "uint128"},
                    {"name": "sender", "type": "principal"},
                    {"name": "recipient", "type": "principal"},
                    {"name": "memo", "type": {"optional": {"buffer": {"length": 34}}}}
                ],
                "outputs": {"type": {"response": {"ok": "bool", "error": "uint128"}}}
            },
            {
                "name": "get-balance",
                "access": "read_only",
                "args": [{"name": "account", "type": "principal"}],
                "outputs": {"type": {"response": {"ok": "uint128", "error": "none"}}}
            },
            {
                "name": "get-token-uri",
                "access": "read_only",
                "args": [],
                "outputs": {"type": {"response": {"ok": {"optional": {"string-utf8": {"length": 256}}}, "error": "none"}}}
            }
        ],
        "fungible_tokens": [{"name": "example-token"}],
        "variables": []
    }"#;

    #[test]
    fn test_parse_abi() {
        let abi = parse_abi(SIP010_FRAGMENT).expect("Failed to parse");

        assert_eq!(abi.functions.len(), 3);

        let transfer = &abi.functions[0];
        assert_eq!(transfer.name, "transfer");
        assert_eq!(transfer.access, FunctionAccess::Public);
        assert_eq!(transfer.args.len(), 4);
        assert_eq!(
            transfer.args[3].ty,
            ClarityType::Optional(Box::new(ClarityType::Buffer { length: 34 }))
        );

        let get_balance = &abi.functions[1];
        assert_eq!(get_balance.access, FunctionAccess::ReadOnly);
        assert_eq!(get_balance.args[0].ty, ClarityType::Principal);
    }

    #[test]
    fn test_parse_abi_keeps_raw_document() {
        let abi = parse_abi(SIP010_FRAGMENT).expect("Failed to parse");
        assert!(abi.raw().get("fungible_tokens").is_some());
    }

    #[test]
    fn test_parse_abi_invalid_json() {
        assert!(parse_abi("not json").is_err());
    }

    #[test]
    fn test_parse_abi_missing_functions() {
        assert!(parse_abi(r#"{"maps": []}"#).is_err());
    }

    #[test]
    fn test_parse_abi_unknown_output_shape_is_opaque() {
        let abi = parse_abi(
            r#"{"functions": [{
                "name": "do-thing",
                "access": "public",
                "args": [],
                "outputs": {"type": "trait_reference"}
            }]}"#,
        )
        .expect("Failed to parse");
        assert!(abi.functions[0].outputs.ty.is_opaque());
    }
}
