//! ABI validation utilities.
//!
//! This module provides validation functions for parsed contract ABIs to
//! ensure the invariants code generation relies on actually hold.

use crate::error::AbiError;
use crate::types::ContractAbi;

/// Validates a parsed contract ABI.
///
/// Checks that function names are unique within the contract, argument
/// names are unique within each function, and every surfaced identifier is
/// a well-formed kebab-case Clarity name.
///
/// # Errors
/// Returns `AbiError` describing the first violation found.
pub fn validate_abi(abi: &ContractAbi) -> Result<(), AbiError> {
    use std::collections::HashSet;

    let mut seen_functions = HashSet::new();

    for function in &abi.functions {
        validate_identifier(&function.name)?;

        if !seen_functions.insert(&function.name) {
            return Err(AbiError::DuplicateFunction {
                name: function.name.clone(),
            });
        }

        let mut seen_args = HashSet::new();
        for arg in &function.args {
            validate_identifier(&arg.name)?;

            if !seen_args.insert(&arg.name) {
                return Err(AbiError::DuplicateArgument {
                    function: function.name.clone(),
                    argument: arg.name.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Validates a Clarity domain identifier.
///
/// Clarity names are kebab-case: lowercase ASCII letters and digits joined
/// by single hyphens, optionally ending in `?` or `!`.
fn validate_identifier(name: &str) -> Result<(), AbiError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(AbiError::invalid_identifier(name, "empty name"));
    };
    if !first.is_ascii_lowercase() {
        return Err(AbiError::invalid_identifier(
            name,
            "must start with a lowercase letter",
        ));
    }

    for c in chars {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '?' || c == '!') {
            return Err(AbiError::invalid_identifier(
                name,
                format!("unexpected character '{c}'"),
            ));
        }
    }

    if name.ends_with('-') || name.contains("--") {
        return Err(AbiError::invalid_identifier(name, "malformed hyphenation"));
    }

    Ok(())
}
