use crate::error::{Error, ModelResult};
use crate::models::quote::QuoteResponse;
use crate::models::version::{ApiVersion, WRAP_AND_UNWRAP_SOL_FIELD, ensure_supported_fields};
use error_stack::ResultExt;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityLevel {
    Medium,
    High,
    VeryHigh,
}

/// Every shape `prioritizationFeeLamports` accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrioritizationFee {
    /// Exact fee in lamports
    Lamports(u64),
    /// Server picks the fee
    Auto,
    /// Multiplier applied to the server's auto fee
    AutoMultiplier(u64),
    /// Adds a Jito tip instruction instead of a priority fee
    JitoTip(u64),
    PriorityLevelWithMaxLamports {
        priority_level: PriorityLevel,
        max_lamports: u64,
        global: bool,
    },
}

impl Serialize for PrioritizationFee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrioritizationFee::Lamports(lamports) => serializer.serialize_u64(*lamports),
            PrioritizationFee::Auto => serializer.serialize_str("auto"),
            PrioritizationFee::AutoMultiplier(multiplier) => {
                json!({ "autoMultiplier": multiplier }).serialize(serializer)
            }
            PrioritizationFee::JitoTip(lamports) => {
                json!({ "jitoTipLamports": lamports }).serialize(serializer)
            }
            PrioritizationFee::PriorityLevelWithMaxLamports {
                priority_level,
                max_lamports,
                global,
            } => json!({
                "priorityLevelWithMaxLamports": {
                    "priorityLevel": priority_level,
                    "maxLamports": max_lamports,
                    "global": global,
                }
            })
            .serialize(serializer),
        }
    }
}

// SWAP REQUEST
/// Body of `POST /swap` and `POST /swap-instructions`.
///
/// Unset toggles are left out of the body so the server applies its own defaults.
/// Nothing here is cross-checked client side.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapParams {
    pub quote_response: QuoteResponse,
    pub user_public_key: String,

    /// Server default is true. Ignored when `destination_token_account` is set.
    pub wrap_and_unwrap_sol: Option<bool>,
    /// Server default is true. Avoids creating intermediate token accounts.
    pub use_shared_accounts: Option<bool>,
    /// Token account collecting the platform fee
    #[serde(skip_serializing_if = "crate::models::is_unset_string")]
    pub fee_account: Option<String>,
    /// Any public key used to track the integrator's transactions
    #[serde(skip_serializing_if = "crate::models::is_unset_string")]
    pub tracking_account: Option<String>,
    pub compute_unit_price_micro_lamports: Option<u64>,
    /// Mutually exclusive with `compute_unit_price_micro_lamports`
    pub prioritization_fee_lamports: Option<PrioritizationFee>,
    /// Must match the `as_legacy_transaction` used for the quote
    pub as_legacy_transaction: Option<bool>,
    pub use_token_ledger: Option<bool>,
    /// Receiving token account, assumed to be initialized
    #[serde(skip_serializing_if = "crate::models::is_unset_string")]
    pub destination_token_account: Option<String>,
    /// Simulates the swap to size the compute unit limit. One extra RPC call.
    pub dynamic_compute_unit_limit: Option<bool>,
    pub skip_user_accounts_rpc_calls: Option<bool>,
}

impl SwapParams {
    pub fn new(quote_response: QuoteResponse, user_public_key: impl Into<String>) -> Self {
        Self {
            quote_response,
            user_public_key: user_public_key.into(),
            wrap_and_unwrap_sol: None,
            use_shared_accounts: None,
            fee_account: None,
            tracking_account: None,
            compute_unit_price_micro_lamports: None,
            prioritization_fee_lamports: None,
            as_legacy_transaction: None,
            use_token_ledger: None,
            destination_token_account: None,
            dynamic_compute_unit_limit: None,
            skip_user_accounts_rpc_calls: None,
        }
    }

    pub fn with_wrap_and_unwrap_sol(mut self, wrap_and_unwrap_sol: bool) -> Self {
        self.wrap_and_unwrap_sol = Some(wrap_and_unwrap_sol);
        self
    }

    pub fn with_fee_account(mut self, fee_account: impl Into<String>) -> Self {
        self.fee_account = Some(fee_account.into());
        self
    }

    pub fn with_prioritization_fee(mut self, fee: PrioritizationFee) -> Self {
        self.prioritization_fee_lamports = Some(fee);
        self
    }

    pub fn with_compute_unit_price_micro_lamports(mut self, price: u64) -> Self {
        self.compute_unit_price_micro_lamports = Some(price);
        self
    }

    pub fn with_destination_token_account(mut self, account: impl Into<String>) -> Self {
        self.destination_token_account = Some(account.into());
        self
    }

    pub fn with_dynamic_compute_unit_limit(mut self, dynamic: bool) -> Self {
        self.dynamic_compute_unit_limit = Some(dynamic);
        self
    }

    /// Serializes the request body for `version`.
    pub fn to_body(&self, version: ApiVersion) -> ModelResult<Value> {
        let mut body = serde_json::to_value(self).change_context(Error::EncodingError(
            "Failed to serialize swap params".to_string(),
        ))?;
        ensure_supported_fields(&body, version.unsupported_swap_fields(), version)?;

        if let Value::Object(map) = &mut body {
            if let Some(wrap) = map.remove(WRAP_AND_UNWRAP_SOL_FIELD) {
                map.insert(version.wrap_sol_field().to_string(), wrap);
            }
        }
        Ok(body)
    }
}

// SWAP RESPONSE
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    /// Base64 serialized, unsigned transaction
    pub swap_transaction: String,
    #[serde(default)]
    pub last_valid_block_height: u64,
    #[serde(default)]
    pub prioritization_fee_lamports: u64,
    pub compute_unit_limit: Option<u32>,
}
