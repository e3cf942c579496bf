//! TypeScript code generation modules.

pub mod args;
pub mod contracts;
pub mod functions;
pub mod hooks;
pub mod module;
pub mod types;

pub use args::SynthesizedArgs;
pub use contracts::ContractEmitter;
pub use functions::FunctionEmitter;
pub use hooks::HookEmitter;
