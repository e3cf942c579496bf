//! # Claritygen
//!
//! Typed TypeScript client generation from Clarity smart-contract ABIs.
//!
//! Claritygen reads the ABI JSON a Clarity contract publishes and emits a
//! TypeScript module with one typed client object per contract: call-object
//! methods for every public and read-only function, optional read/write and
//! wallet-broadcast helpers, and optional React data-fetching hooks.
//!
//! ## Quick Start
//!
//! ```
//! use claritygen::prelude::*;
//!
//! let abi = parse_abi(
//!     r#"{"functions": [
//!         {"name": "get-count", "access": "read_only",
//!          "args": [],
//!          "outputs": {"type": "uint128"}}
//!     ]}"#,
//! )?;
//!
//! let contracts = [ResolvedContract {
//!     name: "counter".to_string(),
//!     address: "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9".to_string(),
//!     contract_name: "counter".to_string(),
//!     abi,
//!     source: ContractSource::Local,
//! }];
//!
//! let module = generate_contracts(&contracts, RuntimeMode::Full)?;
//! assert!(module.contains("export const counter = {"));
//! # Ok::<(), claritygen::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`abi`] - ABI JSON parsing, validation, and contract resolution
//! - [`codegen`] - TypeScript module, helper, and hook generation

pub mod prelude;

/// ABI parsing, validation, and contract resolution.
pub mod abi {
    pub use claritygen_abi::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use claritygen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use claritygen_abi::{
    ClarityFunction, ClarityType, ContractAbi, ContractSource, ContractVariants, FunctionAccess,
    Network, ResolvedContract, parse_abi, parse_abi_file, validate_abi,
};

pub use claritygen_codegen::{
    GeneratedOutput, Generator, GeneratorOptions, OutputKind, RuntimeMode, generate_contracts,
};
