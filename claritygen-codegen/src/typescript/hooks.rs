//! React hook emission.
//!
//! Two independent modules come out of here for full-mode runs with hooks
//! enabled: per-contract data-fetching and mutation hooks derived from the
//! ABIs, and a fixed catalog of generic, contract-independent hooks. The
//! catalog is a static registry queried by name, so inclusion-list
//! filtering is a table scan.

use super::args::SynthesizedArgs;
use super::module::FILE_HEADER;
use claritygen_abi::{ClarityFunction, FunctionAccess, ResolvedContract, capitalize, to_camel_case};

/// Emitter for one contract's hooks.
pub struct HookEmitter<'a> {
    contract: &'a ResolvedContract,
}

impl<'a> HookEmitter<'a> {
    /// Creates a hook emitter for one resolved contract.
    #[must_use]
    pub fn new(contract: &'a ResolvedContract) -> Self {
        Self { contract }
    }

    /// `use{Contract}{Function}` hook name.
    fn hook_name(&self, function: &ClarityFunction) -> String {
        format!(
            "use{}{}",
            capitalize(&self.contract.name),
            capitalize(&to_camel_case(&function.name))
        )
    }

    /// Emits the data-fetching hook for a read-only function.
    ///
    /// The cache key is the function name, contract address, and argument
    /// values; the query stays disabled until every argument is defined.
    #[must_use]
    pub fn query_hook(&self, function: &ClarityFunction) -> String {
        let hook = self.hook_name(function);
        let contract = &self.contract.name;
        let method = to_camel_case(&function.name);
        let args = SynthesizedArgs::from_args(&function.args);
        let options =
            "options: { network?: 'mainnet' | 'testnet' | 'devnet'; senderAddress?: string } = {}";
        let mut out = String::new();

        match args.union_type() {
            Some(union) => {
                let object_reads = args
                    .names
                    .iter()
                    .map(|name| format!("args.{name}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "export function {hook}(args: {union} | undefined, {options}) {{\n"
                ));
                out.push_str(&format!(
                    "  const values = args === undefined ? undefined : Array.isArray(args) ? args : [{object_reads}];\n"
                ));
                out.push_str("  return useQuery({\n");
                out.push_str(&format!(
                    "    queryKey: ['{}', {contract}.address, values],\n",
                    function.name
                ));
                out.push_str(&format!(
                    "    queryFn: () => {contract}.read.{method}(args as NonNullable<typeof args>, options),\n"
                ));
                out.push_str(
                    "    enabled: values !== undefined && values.every((v) => v !== undefined),\n",
                );
                out.push_str("  });\n");
            }
            None => {
                out.push_str(&format!("export function {hook}({options}) {{\n"));
                out.push_str("  return useQuery({\n");
                out.push_str(&format!(
                    "    queryKey: ['{}', {contract}.address],\n",
                    function.name
                ));
                out.push_str(&format!(
                    "    queryFn: () => {contract}.read.{method}(options),\n"
                ));
                out.push_str("  });\n");
            }
        }

        out.push_str("}\n\n");
        out
    }

    /// Emits the mutation hook for a public function, wrapping the wallet
    /// broadcast flow. Pending/error/success state comes from the mutation
    /// result.
    #[must_use]
    pub fn mutation_hook(&self, function: &ClarityFunction) -> String {
        let hook = self.hook_name(function);
        let contract = &self.contract.name;
        let fetch = format!("fetch{}", capitalize(&to_camel_case(&function.name)));
        let args = SynthesizedArgs::from_args(&function.args);
        let mut out = String::new();

        out.push_str(&format!("export function {hook}() {{\n"));
        out.push_str("  return useMutation({\n");
        match args.union_type() {
            Some(union) => out.push_str(&format!(
                "    mutationFn: (args: {union}) => {contract}.{fetch}(args),\n"
            )),
            None => out.push_str(&format!("    mutationFn: () => {contract}.{fetch}(),\n")),
        }
        out.push_str("  });\n");
        out.push_str("}\n\n");
        out
    }

    /// Emits all hooks for this contract.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut out = String::new();
        for function in self.contract.abi.callable_functions() {
            match function.access {
                FunctionAccess::ReadOnly => out.push_str(&self.query_hook(function)),
                FunctionAccess::Public => out.push_str(&self.mutation_hook(function)),
                FunctionAccess::Private => {}
            }
        }
        out
    }
}

/// Assembles the per-contract hooks module.
#[must_use]
pub fn contract_hooks_module(contracts: &[ResolvedContract]) -> String {
    let mut out = String::from(FILE_HEADER);

    // Contracts with no callable functions get no export in the contracts
    // module, so they must not appear in the import list either.
    let exported: Vec<_> = contracts
        .iter()
        .filter(|c| c.abi.callable_functions().next().is_some())
        .collect();

    out.push_str("import { useMutation, useQuery } from '@tanstack/react-query';\n");
    if !exported.is_empty() {
        let names = exported
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("import {{ {names} }} from './contracts';\n"));
    }
    out.push('\n');

    for contract in &exported {
        out.push_str(&HookEmitter::new(contract).generate());
    }

    out
}

/// Emitter for one generic hook's source text.
pub type GenericHookEmitter = fn() -> String;

/// Static catalog of generic, contract-independent hooks.
///
/// These are fixed domain knowledge, not derived from any ABI. The table is
/// queried by hook name when a caller supplies an inclusion list.
pub const GENERIC_HOOKS: &[(&str, GenericHookEmitter)] = &[
    ("useConnect", use_connect),
    ("useDisconnect", use_disconnect),
    ("useNetwork", use_network),
    ("useOpenContractCall", use_open_contract_call),
    ("useReadOnlyCall", use_read_only_call),
    ("useTransaction", use_transaction),
    ("useBlock", use_block),
    ("useWaitForTransaction", use_wait_for_transaction),
];

/// Assembles the generic-hooks module, optionally restricted to an
/// inclusion list of hook names. Unknown names in the list are ignored.
#[must_use]
pub fn generic_hooks_module(include: Option<&[String]>) -> String {
    let mut out = String::from(FILE_HEADER);

    out.push_str("import { useCallback, useEffect, useState } from 'react';\n");
    out.push_str("import { useQuery } from '@tanstack/react-query';\n");
    out.push_str("import { disconnect, openContractCall, showConnect } from '@stacks/connect';\n");
    out.push_str("import { callReadOnlyFunction } from '@stacks/transactions';\n\n");

    for (name, emitter) in GENERIC_HOOKS {
        let selected = include.is_none_or(|list| list.iter().any(|entry| entry == name));
        if selected {
            out.push_str(&emitter());
        }
    }

    out
}

fn use_connect() -> String {
    r"export function useConnect() {
  const [isConnected, setIsConnected] = useState(false);
  const connect = useCallback(() => {
    showConnect({
      appDetails: { name: document.title, icon: `${window.location.origin}/favicon.ico` },
      onFinish: () => setIsConnected(true),
    });
  }, []);
  return { connect, isConnected };
}

"
    .to_string()
}

fn use_disconnect() -> String {
    r"export function useDisconnect() {
  return useCallback(() => disconnect(), []);
}

"
    .to_string()
}

fn use_network() -> String {
    r"export function useNetwork() {
  return useQuery({
    queryKey: ['network-info'],
    queryFn: async () => {
      const res = await fetch('/v2/info');
      if (!res.ok) throw new Error(`Failed to fetch network info: ${res.status}`);
      return res.json();
    },
  });
}

"
    .to_string()
}

fn use_open_contract_call() -> String {
    r"export function useOpenContractCall() {
  const [isPending, setIsPending] = useState(false);
  const call = useCallback((options: Parameters<typeof openContractCall>[0]) => {
    setIsPending(true);
    return openContractCall({
      ...options,
      onFinish: (data) => {
        setIsPending(false);
        options.onFinish?.(data);
      },
      onCancel: () => {
        setIsPending(false);
        options.onCancel?.();
      },
    });
  }, []);
  return { call, isPending };
}

"
    .to_string()
}

fn use_read_only_call() -> String {
    r"export function useReadOnlyCall(options: Parameters<typeof callReadOnlyFunction>[0] | undefined) {
  return useQuery({
    queryKey: ['read-only-call', options?.contractAddress, options?.contractName, options?.functionName],
    queryFn: () => callReadOnlyFunction(options as NonNullable<typeof options>),
    enabled: options !== undefined,
  });
}

"
    .to_string()
}

fn use_transaction() -> String {
    r"export function useTransaction(txId: string | undefined) {
  return useQuery({
    queryKey: ['transaction', txId],
    queryFn: async () => {
      const res = await fetch(`/extended/v1/tx/${txId}`);
      if (!res.ok) throw new Error(`Failed to fetch transaction ${txId}: ${res.status}`);
      return res.json();
    },
    enabled: txId !== undefined,
  });
}

"
    .to_string()
}

fn use_block() -> String {
    r"export function useBlock(hash: string | undefined) {
  return useQuery({
    queryKey: ['block', hash],
    queryFn: async () => {
      const res = await fetch(`/extended/v1/block/${hash}`);
      if (!res.ok) throw new Error(`Failed to fetch block ${hash}: ${res.status}`);
      return res.json();
    },
    enabled: hash !== undefined,
  });
}

"
    .to_string()
}

fn use_wait_for_transaction() -> String {
    r"export function useWaitForTransaction(txId: string | undefined) {
  const [confirmed, setConfirmed] = useState(false);
  const query = useQuery({
    queryKey: ['wait-for-transaction', txId],
    queryFn: async () => {
      const res = await fetch(`/extended/v1/tx/${txId}`);
      if (!res.ok) throw new Error(`Failed to fetch transaction ${txId}: ${res.status}`);
      return res.json();
    },
    enabled: txId !== undefined && !confirmed,
    refetchInterval: 5_000,
  });
  useEffect(() => {
    if (query.data?.tx_status === 'success') setConfirmed(true);
  }, [query.data]);
  return { ...query, confirmed };
}

"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claritygen_abi::{ContractSource, parse_abi};

    fn test_contract() -> ResolvedContract {
        ResolvedContract {
            name: "testContract".to_string(),
            address: "SP2PABAF9FTAJYNFZH93XENAJ8FVY99RRM50D2JG9".to_string(),
            contract_name: "test-contract".to_string(),
            abi: parse_abi(
                r#"{"functions": [
                    {"name": "transfer", "access": "public",
                     "args": [{"name": "amount", "type": "uint128"}],
                     "outputs": {"type": "bool"}},
                    {"name": "get-balance", "access": "read_only",
                     "args": [{"name": "account", "type": "principal"}],
                     "outputs": {"type": "uint128"}},
                    {"name": "get-total-supply", "access": "read_only",
                     "args": [],
                     "outputs": {"type": "uint128"}},
                    {"name": "mint-internal", "access": "private",
                     "args": [],
                     "outputs": {"type": "bool"}}
                ]}"#,
            )
            .expect("Failed to parse"),
            source: ContractSource::Local,
        }
    }

    #[test]
    fn test_query_hook_with_args() {
        let contract = test_contract();
        let out = HookEmitter::new(&contract).generate();

        assert!(out.contains("export function useTestContractGetBalance(args:"));
        assert!(out.contains("queryKey: ['get-balance', testContract.address, values],"));
        assert!(out.contains("testContract.read.getBalance("));
        assert!(
            out.contains("enabled: values !== undefined && values.every((v) => v !== undefined),")
        );
    }

    #[test]
    fn test_query_hook_zero_args_has_no_enabled_guard() {
        let contract = test_contract();
        let out = HookEmitter::new(&contract).generate();

        assert!(out.contains("export function useTestContractGetTotalSupply(options:"));
        assert!(out.contains("queryKey: ['get-total-supply', testContract.address],"));
    }

    #[test]
    fn test_mutation_hook_wraps_broadcast_flow() {
        let contract = test_contract();
        let out = HookEmitter::new(&contract).generate();

        assert!(out.contains("export function useTestContractTransfer() {"));
        assert!(out.contains("return useMutation({"));
        assert!(out.contains("testContract.fetchTransfer(args)"));
    }

    #[test]
    fn test_private_functions_have_no_hooks() {
        let contract = test_contract();
        let out = HookEmitter::new(&contract).generate();
        assert!(!out.contains("MintInternal"));
    }

    #[test]
    fn test_contract_hooks_module_imports() {
        let contracts = [test_contract()];
        let out = contract_hooks_module(&contracts);

        assert!(out.starts_with(FILE_HEADER));
        assert!(out.contains("import { useMutation, useQuery } from '@tanstack/react-query';"));
        assert!(out.contains("import { testContract } from './contracts';"));
    }

    #[test]
    fn test_module_skips_contracts_without_exports() {
        let mut internal = test_contract();
        internal.name = "internalOnly".to_string();
        internal.abi = parse_abi(
            r#"{"functions": [
                {"name": "helper", "access": "private",
                 "args": [],
                 "outputs": {"type": "bool"}}
            ]}"#,
        )
        .expect("Failed to parse");
        let contracts = [test_contract(), internal];
        let out = contract_hooks_module(&contracts);

        // The contracts module exports nothing for a private-only contract,
        // so importing its name would not compile.
        assert!(out.contains("import { testContract } from './contracts';"));
        assert!(!out.contains("internalOnly"));
    }

    #[test]
    fn test_module_without_exported_contracts_has_no_contracts_import() {
        let mut internal = test_contract();
        internal.abi = parse_abi(
            r#"{"functions": [
                {"name": "helper", "access": "private",
                 "args": [],
                 "outputs": {"type": "bool"}}
            ]}"#,
        )
        .expect("Failed to parse");
        let out = contract_hooks_module(&[internal]);

        assert!(!out.contains("from './contracts';"));
        assert!(!out.contains("export function"));
    }

    #[test]
    fn test_generic_catalog_is_complete_by_default() {
        let out = generic_hooks_module(None);
        for (name, _) in GENERIC_HOOKS {
            assert!(
                out.contains(&format!("export function {name}")),
                "missing generic hook {name}"
            );
        }
        assert_eq!(GENERIC_HOOKS.len(), 8);
    }

    #[test]
    fn test_generic_catalog_inclusion_list() {
        let include = vec!["useConnect".to_string(), "useBlock".to_string()];
        let out = generic_hooks_module(Some(&include));

        assert!(out.contains("export function useConnect"));
        assert!(out.contains("export function useBlock"));
        assert!(!out.contains("export function useTransaction"));
        assert!(!out.contains("export function useNetwork"));
    }

    #[test]
    fn test_generic_catalog_ignores_unknown_names() {
        let include = vec!["useUnknown".to_string()];
        let out = generic_hooks_module(Some(&include));
        assert!(!out.contains("export function use"));
    }

    #[test]
    fn test_confirmation_polling_hook() {
        let out = generic_hooks_module(None);
        assert!(out.contains("refetchInterval: 5_000,"));
        assert!(out.contains("tx_status === 'success'"));
    }
}
