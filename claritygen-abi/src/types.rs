//! ABI type definitions.
//!
//! This module contains the data structures representing a Clarity contract
//! ABI: the type language, function signatures, and the contract ABI itself.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A Clarity type description.
///
/// Contract ABIs are finite first-order type trees: every value is immutable
/// and fully self-describing, with no forward references and no cycles.
/// Type shapes the generator does not recognize map to [`ClarityType::Opaque`]
/// rather than failing, so generation degrades to untyped output instead of
/// aborting on future extensions of the type language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityType {
    /// Unsigned 128-bit integer (`uint128`).
    UInt128,
    /// Signed 128-bit integer (`int128`).
    Int128,
    /// Boolean (`bool`).
    Bool,
    /// Standard or contract principal (`principal`).
    Principal,
    /// Fixed-capacity byte buffer (`(buff n)`).
    Buffer {
        /// Maximum length in bytes.
        length: u64,
    },
    /// ASCII string with maximum length (`(string-ascii n)`).
    StringAscii {
        /// Maximum length in bytes.
        length: u64,
    },
    /// UTF-8 string with maximum length (`(string-utf8 n)`).
    StringUtf8 {
        /// Maximum length in bytes.
        length: u64,
    },
    /// Optional value (`(optional T)`).
    Optional(Box<ClarityType>),
    /// Response value (`(response ok err)`).
    Response {
        /// Ok branch type.
        ok: Box<ClarityType>,
        /// Err branch type.
        err: Box<ClarityType>,
    },
    /// Tuple with named, ordered fields (`(tuple ...)`).
    Tuple(Vec<TupleField>),
    /// Homogeneous list with maximum length (`(list n T)`).
    List {
        /// Maximum number of elements.
        length: u64,
        /// Element type.
        element: Box<ClarityType>,
    },
    /// Fallback for unrecognized type shapes (`none`, trait references,
    /// or future extensions of the ABI type language).
    Opaque,
}

impl ClarityType {
    /// Converts a JSON type description into a `ClarityType`.
    ///
    /// This is total: anything that does not match a known shape becomes
    /// [`ClarityType::Opaque`].
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => match s.as_str() {
                "uint128" => Self::UInt128,
                "int128" => Self::Int128,
                "bool" => Self::Bool,
                "principal" => Self::Principal,
                _ => Self::Opaque,
            },
            Value::Object(map) => {
                if let Some(inner) = map.get("buffer") {
                    Self::Buffer {
                        length: length_of(inner),
                    }
                } else if let Some(inner) = map.get("string-ascii") {
                    Self::StringAscii {
                        length: length_of(inner),
                    }
                } else if let Some(inner) = map.get("string-utf8") {
                    Self::StringUtf8 {
                        length: length_of(inner),
                    }
                } else if let Some(inner) = map.get("optional") {
                    Self::Optional(Box::new(Self::from_json(inner)))
                } else if let Some(inner) = map.get("response") {
                    Self::Response {
                        ok: Box::new(inner.get("ok").map_or(Self::Opaque, |v| Self::from_json(v))),
                        err: Box::new(
                            inner
                                .get("error")
                                .map_or(Self::Opaque, |v| Self::from_json(v)),
                        ),
                    }
                } else if let Some(inner) = map.get("tuple") {
                    let fields = inner
                        .as_array()
                        .map(|entries| {
                            entries
                                .iter()
                                .map(|entry| TupleField {
                                    name: entry
                                        .get("name")
                                        .and_then(Value::as_str)
                                        .unwrap_or_default()
                                        .to_string(),
                                    ty: entry
                                        .get("type")
                                        .map_or(Self::Opaque, |v| Self::from_json(v)),
                                })
                                .collect()
                        })
                        .unwrap_or_default();
                    Self::Tuple(fields)
                } else if let Some(inner) = map.get("list") {
                    Self::List {
                        length: length_of(inner),
                        element: Box::new(
                            inner
                                .get("type")
                                .map_or(Self::Opaque, |v| Self::from_json(v)),
                        ),
                    }
                } else {
                    Self::Opaque
                }
            }
            _ => Self::Opaque,
        }
    }

    /// Returns true if this is the opaque fallback type.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque)
    }

    /// Returns true if this is a buffer type.
    #[must_use]
    pub const fn is_buffer(&self) -> bool {
        matches!(self, Self::Buffer { .. })
    }
}

/// Reads a `length` attribute from a JSON type body, defaulting to zero.
fn length_of(value: &Value) -> u64 {
    value.get("length").and_then(Value::as_u64).unwrap_or(0)
}

impl<'de> Deserialize<'de> for ClarityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// A named field within a tuple type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleField {
    /// Field name (kebab-case domain identifier).
    pub name: String,
    /// Field type.
    pub ty: ClarityType,
}

/// Function access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionAccess {
    /// State-mutating function, callable in a transaction.
    Public,
    /// Side-effect-free function, callable without a transaction.
    ReadOnly,
    /// Internal function, never surfaced in generated output.
    Private,
}

impl FunctionAccess {
    /// Parses an access level from its ABI string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "read_only" => Some(Self::ReadOnly),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// A typed function argument.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionArg {
    /// Argument name (kebab-case, unique within the function).
    pub name: String,
    /// Argument type.
    #[serde(rename = "type")]
    pub ty: ClarityType,
}

/// A function's output type.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionOutput {
    /// Output type.
    #[serde(rename = "type")]
    pub ty: ClarityType,
}

/// A single contract function signature.
#[derive(Debug, Clone, Deserialize)]
pub struct ClarityFunction {
    /// Function name (kebab-case, unique within the contract).
    pub name: String,
    /// Access level.
    pub access: FunctionAccess,
    /// Ordered argument list.
    pub args: Vec<FunctionArg>,
    /// Output type.
    pub outputs: FunctionOutput,
}

impl ClarityFunction {
    /// Returns true if the function is surfaced in generated output.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.access != FunctionAccess::Private
    }
}

/// A parsed contract ABI.
///
/// The original JSON document is kept verbatim so generated output can embed
/// the full ABI constant without re-serialization losses; sections other than
/// `functions` are tolerated and carried through opaquely.
#[derive(Debug, Clone)]
pub struct ContractAbi {
    /// Parsed function signatures.
    pub functions: Vec<ClarityFunction>,
    raw: Value,
}

impl ContractAbi {
    /// Builds a `ContractAbi` from a parsed JSON document.
    ///
    /// # Errors
    /// Returns an error if the `functions` section is missing or malformed.
    pub fn from_value(value: Value) -> Result<Self, crate::error::ParseError> {
        let functions = value
            .get("functions")
            .ok_or_else(|| crate::error::ParseError::missing_field("functions"))?;
        let functions: Vec<ClarityFunction> = serde_json::from_value(functions.clone())?;
        Ok(Self {
            raw: value,
            functions,
        })
    }

    /// Returns the original JSON document.
    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Iterates over the functions surfaced in generated output
    /// (public and read-only; private functions are filtered here,
    /// at the boundary).
    pub fn callable_functions(&self) -> impl Iterator<Item = &ClarityFunction> {
        self.functions.iter().filter(|f| f.is_callable())
    }
}
