use crate::constants::dexes::Dex;
use crate::error::{Error, ModelResult};
use crate::models::version::{ApiVersion, ensure_supported_fields};
use crate::network::http::value_to_sorted_query_pairs;
use error_stack::ResultExt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwapMode {
    #[default]
    ExactIn,
    ExactOut,
}

impl SwapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwapMode::ExactIn => "ExactIn",
            SwapMode::ExactOut => "ExactOut",
        }
    }
}

// QUOTE REQUEST
/// Query parameters of `GET /quote`.
///
/// `input_mint`, `output_mint` and `amount` are always sent. Every other field is sent
/// only when set. Fields that only one [`ApiVersion`] understands are rejected when
/// encoding for the other one.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    /// Input token mint address
    pub input_mint: String,
    /// Output token mint address
    pub output_mint: String,
    /// Raw amount in base units: input amount for ExactIn, output amount for ExactOut
    pub amount: u64,

    /// Server default is ExactIn. For ExactOut the slippage applies to the input token.
    pub swap_mode: Option<SwapMode>,
    pub slippage_bps: Option<u64>,
    /// Single hop routes only
    pub only_direct_routes: Option<bool>,
    /// Only routes that fit in a legacy transaction
    pub as_legacy_transaction: Option<bool>,

    // Legacy schema
    pub fee_bps: Option<u64>,
    /// Only needed to get deposit and fee info back, slows the query down
    #[serde(skip_serializing_if = "crate::models::is_unset_string")]
    pub user_public_key: Option<String>,

    // V6 schema
    /// Fee taken out of the output token
    pub platform_fee_bps: Option<u64>,
    /// Only route through these AMM labels
    pub dexes: Option<Vec<String>>,
    pub exclude_dexes: Option<Vec<String>>,
    /// Keep intermediate hops within a stable, liquid token set
    pub restrict_intermediate_tokens: Option<bool>,
    /// Rough upper bound on accounts used by the route
    pub max_accounts: Option<u64>,
    pub auto_slippage: Option<bool>,
    pub max_auto_slippage_bps: Option<u64>,
    pub auto_slippage_collision_usd_value: Option<u64>,
}

impl QuoteParams {
    pub fn new(input_mint: impl Into<String>, output_mint: impl Into<String>, amount: u64) -> Self {
        Self {
            input_mint: input_mint.into(),
            output_mint: output_mint.into(),
            amount,
            ..Default::default()
        }
    }

    pub fn with_swap_mode(mut self, swap_mode: SwapMode) -> Self {
        self.swap_mode = Some(swap_mode);
        self
    }

    pub fn with_slippage_bps(mut self, slippage_bps: u64) -> Self {
        self.slippage_bps = Some(slippage_bps);
        self
    }

    pub fn with_only_direct_routes(mut self, only_direct_routes: bool) -> Self {
        self.only_direct_routes = Some(only_direct_routes);
        self
    }

    pub fn with_as_legacy_transaction(mut self, as_legacy_transaction: bool) -> Self {
        self.as_legacy_transaction = Some(as_legacy_transaction);
        self
    }

    pub fn with_platform_fee_bps(mut self, platform_fee_bps: u64) -> Self {
        self.platform_fee_bps = Some(platform_fee_bps);
        self
    }

    pub fn with_dexes(mut self, dexes: impl IntoIterator<Item = Dex>) -> Self {
        self.dexes = Some(dexes.into_iter().map(|dex| dex.to_string()).collect());
        self
    }

    pub fn with_excluded_dexes(mut self, dexes: impl IntoIterator<Item = Dex>) -> Self {
        self.exclude_dexes = Some(dexes.into_iter().map(|dex| dex.to_string()).collect());
        self
    }

    pub fn with_restrict_intermediate_tokens(mut self, restrict: bool) -> Self {
        self.restrict_intermediate_tokens = Some(restrict);
        self
    }

    pub fn with_max_accounts(mut self, max_accounts: u64) -> Self {
        self.max_accounts = Some(max_accounts);
        self
    }

    /// Lets the server suggest the slippage, optionally capped at `max_auto_slippage_bps`.
    pub fn with_auto_slippage(mut self, max_auto_slippage_bps: Option<u64>) -> Self {
        self.auto_slippage = Some(true);
        self.max_auto_slippage_bps = max_auto_slippage_bps;
        self
    }

    /// Encodes the params as query pairs sorted by key.
    pub fn to_query_pairs(&self, version: ApiVersion) -> ModelResult<Vec<(String, String)>> {
        let value = serde_json::to_value(self).change_context(Error::EncodingError(
            "Failed to serialize quote params".to_string(),
        ))?;
        ensure_supported_fields(&value, version.unsupported_quote_fields(), version)?;
        value_to_sorted_query_pairs(&value)
    }
}

// QUOTE RESPONSE
/// Opaque `platformFee` payload. The server does not pin its shape, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformFee(pub Value);

impl PlatformFee {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Fee amount, when the payload has the usual `{ "amount": "..", "feeBps": .. }` shape.
    pub fn amount(&self) -> Option<&str> {
        self.0.get("amount").and_then(Value::as_str)
    }

    pub fn fee_bps(&self) -> Option<u64> {
        self.0.get("feeBps").and_then(Value::as_u64)
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapInfo {
    pub amm_key: String,
    pub label: Option<String>,
    pub input_mint: String,
    pub output_mint: String,
    pub in_amount: String,
    pub out_amount: String,
    pub fee_amount: Option<String>,
    pub fee_mint: Option<String>,
}

/// One hop of the route.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub swap_info: SwapInfo,
    pub percent: u64,
    pub bps: Option<u64>,
}

/// Response of `GET /quote`. Amounts are decimal strings.
///
/// Fields this struct does not name are kept in `extra`, so posting a decoded quote back
/// to the swap endpoints sends the server everything it returned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub input_mint: String,
    pub in_amount: String,
    pub output_mint: String,
    pub out_amount: String,
    /// Minimum out (ExactIn) or maximum in (ExactOut) after slippage
    pub other_amount_threshold: String,
    pub swap_mode: SwapMode,
    pub slippage_bps: u64,
    #[serde(default)]
    pub platform_fee: Option<PlatformFee>,
    pub price_impact_pct: String,
    /// Hops in execution order
    pub route_plan: Vec<RoutePlan>,
    #[serde(default)]
    pub context_slot: u64,
    /// Server time spent on the quote, in seconds
    #[serde(default)]
    pub time_taken: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteResponse {
    /// AMM labels of the route, in hop order.
    pub fn route_labels(&self) -> Vec<&str> {
        self.route_plan
            .iter()
            .map(|hop| hop.swap_info.label.as_deref().unwrap_or(&hop.swap_info.amm_key))
            .collect()
    }
}
