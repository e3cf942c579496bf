//! Argument and call-signature synthesis.
//!
//! For one function's argument list this produces every piece of signature
//! text the emitters splice in: the object-typed form, the positional tuple
//! form, the union of both, the destructuring statement reconciling them,
//! and the wire-argument array converting each value in declaration order.

use super::types::{ts_type, wire_expr};
use claritygen_abi::{FunctionArg, to_camel_case};

/// Synthesized signature fragments for one argument list.
#[derive(Debug, Clone)]
pub struct SynthesizedArgs {
    /// camelCased parameter names, in declaration order.
    pub names: Vec<String>,
    object_type: String,
    tuple_type: String,
    /// Comma-joined wire conversion expressions, in declaration order.
    pub wire_args: String,
}

impl SynthesizedArgs {
    /// Synthesizes signature fragments from a function's argument list.
    #[must_use]
    pub fn from_args(args: &[FunctionArg]) -> Self {
        let names: Vec<String> = args.iter().map(|a| to_camel_case(&a.name)).collect();
        let types: Vec<String> = args.iter().map(|a| ts_type(&a.ty)).collect();

        let object_fields = names
            .iter()
            .zip(&types)
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join("; ");
        let object_type = format!("{{ {object_fields} }}");

        let tuple_fields = names
            .iter()
            .zip(&types)
            .map(|(name, ty)| format!("{name}: {ty}"))
            .collect::<Vec<_>>()
            .join(", ");
        let tuple_type = format!("[{tuple_fields}]");

        let wire_args = args
            .iter()
            .zip(&names)
            .map(|(arg, name)| wire_expr(&arg.ty, name))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            names,
            object_type,
            tuple_type,
            wire_args,
        }
    }

    /// Returns true for a zero-argument function.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The union call signature accepting either an argument object or a
    /// positional tuple. `None` for zero-argument functions, which get an
    /// empty parameter list instead of a single-branch union.
    #[must_use]
    pub fn union_type(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("{} | {}", self.object_type, self.tuple_type))
        }
    }

    /// The `args` parameter declaration, if the function takes arguments.
    #[must_use]
    pub fn args_param(&self) -> Option<String> {
        self.union_type().map(|union| format!("args: {union}"))
    }

    /// The statement normalizing the object-or-tuple `args` value into
    /// positional locals.
    #[must_use]
    pub fn destructure(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let locals = self.names.join(", ");
        let object_reads = self
            .names
            .iter()
            .map(|name| format!("args.{name}"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "const [{locals}] = Array.isArray(args) ? args : [{object_reads}];"
        ))
    }
}
