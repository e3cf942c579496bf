//! # Claritygen ABI
//!
//! Clarity contract ABI parser and type definitions.
//!
//! This crate provides:
//! - JSON ABI parsing for Clarity smart contracts
//! - Type definitions for the Clarity type language
//! - ABI validation
//! - Contract resolution for multi-network deployments

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{AbiError, ParseError};
pub use ir::{ContractSource, ContractVariants, Network, ResolvedContract, capitalize, to_camel_case};
pub use parser::{parse_abi, parse_abi_file};
pub use types::{ClarityFunction, ClarityType, ContractAbi, FunctionAccess, FunctionArg, FunctionOutput, TupleField};
pub use validation::validate_abi;
