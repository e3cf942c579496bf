//! Per-function method and helper emission.
//!
//! One [`FunctionEmitter`] covers a single contract function and produces,
//! depending on access level and runtime mode: the minimal
//! call-object-returning method, a read helper (read-only functions), a
//! write helper, and a wallet fetch/broadcast helper (public functions).

use super::args::SynthesizedArgs;
use claritygen_abi::{ClarityFunction, ResolvedContract, capitalize, to_camel_case};

/// Placeholder sender for read-only calls made without a real signer.
pub const BURN_ADDRESS: &str = "SP000000000000000000002Q6VF78";

/// TypeScript union of networks accepted by the generated option bags.
const NETWORK_TS_TYPE: &str = "'mainnet' | 'testnet' | 'devnet'";

/// Emitter for one contract function.
pub struct FunctionEmitter<'a> {
    contract: &'a ResolvedContract,
    function: &'a ClarityFunction,
    args: SynthesizedArgs,
}

impl<'a> FunctionEmitter<'a> {
    /// Creates an emitter for one function of a resolved contract.
    #[must_use]
    pub fn new(contract: &'a ResolvedContract, function: &'a ClarityFunction) -> Self {
        Self {
            contract,
            function,
            args: SynthesizedArgs::from_args(&function.args),
        }
    }

    /// The generated method name (camelCase of the domain name).
    #[must_use]
    pub fn method_name(&self) -> String {
        to_camel_case(&self.function.name)
    }

    /// The generated broadcast helper name (`fetch` + capitalized method).
    #[must_use]
    pub fn fetch_name(&self) -> String {
        format!("fetch{}", capitalize(&self.method_name()))
    }

    /// The call-object fields shared by every emission. The wire call uses
    /// the original kebab-case function name; it must match the on-chain
    /// signature exactly.
    fn call_fields(&self, indent: &str) -> String {
        format!(
            "{indent}contractAddress: '{}',\n\
             {indent}contractName: '{}',\n\
             {indent}functionName: '{}',\n\
             {indent}functionArgs: [{}],\n",
            self.contract.address, self.contract.contract_name, self.function.name, self.args.wire_args
        )
    }

    /// Emits the minimal call-object-returning method.
    #[must_use]
    pub fn minimal_method(&self) -> String {
        let name = self.method_name();
        let mut out = String::new();

        match self.args.args_param() {
            Some(param) => {
                out.push_str(&format!("  {name}({param}): ContractCallPayload {{\n"));
                if let Some(destructure) = self.args.destructure() {
                    out.push_str(&format!("    {destructure}\n"));
                }
            }
            None => out.push_str(&format!("  {name}(): ContractCallPayload {{\n")),
        }

        out.push_str("    return {\n");
        out.push_str(&self.call_fields("      "));
        out.push_str("    };\n");
        out.push_str("  },\n");
        out
    }

    /// Emits the asynchronous read helper (full mode, read-only functions).
    #[must_use]
    pub fn read_helper(&self) -> String {
        let name = self.method_name();
        let options =
            format!("options: {{ network?: {NETWORK_TS_TYPE}; senderAddress?: string }} = {{}}");
        let mut out = String::new();

        match self.args.args_param() {
            Some(param) => out.push_str(&format!(
                "    async {name}({param}, {options}): Promise<ClarityValue> {{\n"
            )),
            None => out.push_str(&format!(
                "    async {name}({options}): Promise<ClarityValue> {{\n"
            )),
        }
        if let Some(destructure) = self.args.destructure() {
            out.push_str(&format!("      {destructure}\n"));
        }

        out.push_str("      return callReadOnlyFunction({\n");
        out.push_str(&self.call_fields("        "));
        out.push_str("        network: options.network,\n");
        out.push_str(&format!(
            "        senderAddress: options.senderAddress ?? '{BURN_ADDRESS}',\n"
        ));
        out.push_str("      });\n");
        out.push_str("    },\n");
        out
    }

    /// Emits the asynchronous write helper (full mode, public functions).
    /// The options bag is required since a transaction needs a signing key.
    #[must_use]
    pub fn write_helper(&self) -> String {
        let name = self.method_name();
        let options = format!(
            "options: {{ senderKey: string; network?: {NETWORK_TS_TYPE}; fee?: string | number; \
             nonce?: bigint; anchorMode?: 1 | 2 | 3; postConditions?: PostCondition[]; \
             validateWithAbi?: boolean }}"
        );
        let mut out = String::new();

        match self.args.args_param() {
            Some(param) => out.push_str(&format!("    async {name}({param}, {options}) {{\n")),
            None => out.push_str(&format!("    async {name}({options}) {{\n")),
        }
        if let Some(destructure) = self.args.destructure() {
            out.push_str(&format!("      {destructure}\n"));
        }

        out.push_str("      return makeContractCall({\n");
        out.push_str(&self.call_fields("        "));
        out.push_str("        senderKey: options.senderKey,\n");
        out.push_str("        network: options.network,\n");
        out.push_str("        fee: options.fee,\n");
        out.push_str("        nonce: options.nonce,\n");
        out.push_str("        anchorMode: options.anchorMode,\n");
        out.push_str("        postConditions: options.postConditions,\n");
        out.push_str("        validateWithAbi: true,\n");
        out.push_str("      });\n");
        out.push_str("    },\n");
        out
    }

    /// Emits the wallet fetch/broadcast helper (full mode, public
    /// functions). Drives the external wallet-approval flow; cancellation
    /// surfaces through the `onCancel` callback.
    #[must_use]
    pub fn fetch_helper(&self) -> String {
        let name = self.fetch_name();
        let options = "options: { onFinish?: (data: unknown) => void; onCancel?: () => void; \
                       fee?: string | number; anchorMode?: 1 | 2 | 3; \
                       postConditions?: PostCondition[] } = {}";
        let mut out = String::new();

        match self.args.args_param() {
            Some(param) => out.push_str(&format!("  async {name}({param}, {options}) {{\n")),
            None => out.push_str(&format!("  async {name}({options}) {{\n")),
        }
        if let Some(destructure) = self.args.destructure() {
            out.push_str(&format!("    {destructure}\n"));
        }

        out.push_str("    return openContractCall({\n");
        out.push_str(&self.call_fields("      "));
        out.push_str("      ...options,\n");
        out.push_str("    });\n");
        out.push_str("  },\n");
        out
    }
}
