//! Top-level generation driver.
//!
//! A [`Generator`] turns a resolved contract list and a set of options into
//! the generated output files. The whole pipeline is pure and synchronous:
//! identical inputs produce byte-identical outputs, and no IO happens here.

use crate::error::CodegenError;
use crate::typescript;
use claritygen_abi::ResolvedContract;
use tracing::debug;

/// Runtime surface emitted for every contract in one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuntimeMode {
    /// Only call-object-returning methods.
    Minimal,
    /// Adds read/write/fetch helpers, and hooks if separately enabled.
    #[default]
    Full,
}

impl RuntimeMode {
    /// Parses a runtime mode from its lowercase name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "minimal" => Some(Self::Minimal),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// Returns the lowercase mode name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

/// Kind tag for a generated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// The typed contracts module.
    Contracts,
    /// Per-contract hooks module.
    Hooks,
    /// Generic, contract-independent hooks module.
    Provider,
}

/// One generated output file. Never mutated after production.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Relative output path.
    pub path: String,
    /// Generated source text.
    pub content: String,
    /// Output kind tag.
    pub kind: OutputKind,
}

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Runtime surface to emit.
    pub mode: RuntimeMode,
    /// Emit hook modules (full mode only).
    pub hooks: bool,
    /// Restricts which generic hooks are emitted; `None` emits the whole
    /// catalog.
    pub include_hooks: Option<Vec<String>>,
    /// Output path of the contracts module.
    pub contracts_path: String,
    /// Output path of the per-contract hooks module.
    pub hooks_path: String,
    /// Output path of the generic hooks module.
    pub provider_path: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::Full,
            hooks: false,
            include_hooks: None,
            contracts_path: "contracts.ts".to_string(),
            hooks_path: "hooks.ts".to_string(),
            provider_path: "stacks-hooks.ts".to_string(),
        }
    }
}

/// Code generator for a resolved contract list.
pub struct Generator<'a> {
    contracts: &'a [ResolvedContract],
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator over an already-resolved contract list.
    #[must_use]
    pub fn new(contracts: &'a [ResolvedContract], options: GeneratorOptions) -> Self {
        Self { contracts, options }
    }

    /// Generates all output files for this run.
    ///
    /// # Errors
    /// Returns `CodegenError` if hooks are requested in minimal mode or a
    /// contract block fails to serialize.
    pub fn generate(&self) -> Result<Vec<GeneratedOutput>, CodegenError> {
        if self.options.hooks && self.options.mode == RuntimeMode::Minimal {
            return Err(CodegenError::generation(
                "hook generation requires the full runtime mode",
            ));
        }

        for contract in self.contracts {
            debug!(
                contract = %contract.name,
                functions = contract.abi.callable_functions().count(),
                "emitting contract"
            );
        }

        let mut outputs = vec![GeneratedOutput {
            path: self.options.contracts_path.clone(),
            content: typescript::module::assemble(self.contracts, self.options.mode)?,
            kind: OutputKind::Contracts,
        }];

        if self.options.hooks {
            outputs.push(GeneratedOutput {
                path: self.options.hooks_path.clone(),
                content: typescript::hooks::contract_hooks_module(self.contracts),
                kind: OutputKind::Hooks,
            });
            outputs.push(GeneratedOutput {
                path: self.options.provider_path.clone(),
                content: typescript::hooks::generic_hooks_module(
                    self.options.include_hooks.as_deref(),
                ),
                kind: OutputKind::Provider,
            });
        }

        Ok(outputs)
    }
}
