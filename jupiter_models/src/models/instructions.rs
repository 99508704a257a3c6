use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub program_id: String,
    /// Order matters, it is the account order of the instruction
    pub accounts: Vec<AccountMeta>,
    /// Base64 instruction data
    pub data: String,
}

/// Response of `POST /swap-instructions`: the swap split into instruction groups, for
/// callers that assemble the transaction themselves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapInstructionsResponse {
    pub token_ledger_instruction: Option<Instruction>,
    #[serde(default)]
    pub compute_budget_instructions: Vec<Instruction>,
    #[serde(default)]
    pub setup_instructions: Vec<Instruction>,
    pub swap_instruction: Instruction,
    pub cleanup_instruction: Option<Instruction>,
    #[serde(default)]
    pub other_instructions: Vec<Instruction>,
    #[serde(default)]
    pub address_lookup_table_addresses: Vec<String>,
    #[serde(default)]
    pub prioritization_fee_lamports: u64,
    pub compute_unit_limit: Option<u32>,
}

impl SwapInstructionsResponse {
    /// All instructions in transaction order: compute budget, setup, token ledger, swap,
    /// cleanup, then the remaining ones.
    pub fn ordered_instructions(&self) -> Vec<&Instruction> {
        self.compute_budget_instructions
            .iter()
            .chain(self.setup_instructions.iter())
            .chain(self.token_ledger_instruction.iter())
            .chain(std::iter::once(&self.swap_instruction))
            .chain(self.cleanup_instruction.iter())
            .chain(self.other_instructions.iter())
            .collect()
    }
}
