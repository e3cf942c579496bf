//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use claritygen::prelude::*;
//! ```

// ABI types
pub use claritygen_abi::{
    AbiError, ClarityFunction, ClarityType, ContractAbi, FunctionAccess, FunctionArg, ParseError,
    parse_abi, parse_abi_file, validate_abi,
};

// Resolution types
pub use claritygen_abi::{ContractSource, ContractVariants, Network, ResolvedContract};

// Generation types
pub use claritygen_codegen::{
    CodegenError, GeneratedOutput, Generator, GeneratorOptions, OutputKind, RuntimeMode,
    generate_contracts,
};
