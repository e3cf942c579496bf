//! TypeScript client generation from parsed Clarity contract ABIs.
//!
//! This crate turns resolved contracts from `claritygen-abi` into typed
//! TypeScript modules: a contracts module with call-object methods and
//! optional read/write/broadcast helpers, plus optional React hook modules.
//!
//! # Example
//!
//! ```
//! use claritygen_abi::{ContractSource, ResolvedContract, parse_abi};
//! use claritygen_codegen::{RuntimeMode, generate_contracts};
//!
//! let abi = parse_abi(
//!     r#"{"functions": [
//!         {"name": "get-count", "access": "read_only",
//!          "args": [],
//!          "outputs": {"type": "uint128"}}
//!     ]}"#,
//! )?;
//! let contracts = [ResolvedContract {
//!     name: "counter".to_string(),
//!     address: "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9".to_string(),
//!     contract_name: "counter".to_string(),
//!     abi,
//!     source: ContractSource::Local,
//! }];
//!
//! let module = generate_contracts(&contracts, RuntimeMode::Minimal)?;
//! assert!(module.contains("export const counter = {"));
//! # Ok::<(), claritygen_codegen::CodegenError>(())
//! ```

pub mod error;
pub mod generator;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{GeneratedOutput, Generator, GeneratorOptions, OutputKind, RuntimeMode};
pub use typescript::{ContractEmitter, FunctionEmitter, HookEmitter};

use claritygen_abi::ResolvedContract;

/// Generates the contracts module for a resolved contract list.
///
/// Convenience wrapper over [`Generator`] for callers that only need the
/// contracts module text.
///
/// # Errors
/// Returns `CodegenError` if any contract block fails to serialize.
pub fn generate_contracts(
    contracts: &[ResolvedContract],
    mode: RuntimeMode,
) -> Result<String, CodegenError> {
    typescript::module::assemble(contracts, mode)
}
