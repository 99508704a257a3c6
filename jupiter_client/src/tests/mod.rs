use jupiter_models::constants::mints::{USDC_MINT_ADDRESS, WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS};
use jupiter_models::models::quote::QuoteResponse;
use serde_json::{Value, json};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const USER_PUBLIC_KEY: &str = "8HwPMNxtFDrvxXn1fJsAYB258TnA6Ydr1DWCtVYgRW4W";
pub const JUPITER_PROGRAM_ID: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";
pub const COMPUTE_BUDGET_PROGRAM_ID: &str = "ComputeBudget111111111111111111111111111111";

#[cfg(test)]
pub fn init_tracing_in_tests() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().pretty().with_ansi(true))
        .try_init()
        .ok();
}

/// 0.0001 SOL to USDC over a single Meteora DLMM hop.
pub fn quote_response_json() -> Value {
    json!({
        "inputMint": WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS,
        "inAmount": "100000",
        "outputMint": USDC_MINT_ADDRESS,
        "outAmount": "17236",
        "otherAmountThreshold": "17150",
        "swapMode": "ExactIn",
        "slippageBps": 50,
        "platformFee": null,
        "priceImpactPct": "0",
        "routePlan": [
            {
                "swapInfo": {
                    "ammKey": "5BKxfWMbmYBAEWvyPZS9esPducUba9GqyMjtLCfbaqyF",
                    "label": "Meteora DLMM",
                    "inputMint": WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS,
                    "outputMint": USDC_MINT_ADDRESS,
                    "inAmount": "100000",
                    "outAmount": "17236",
                    "feeAmount": "10",
                    "feeMint": WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS
                },
                "percent": 100
            }
        ],
        "contextSlot": 299283763,
        "timeTaken": 0.015257836,
        "swapUsdValue": "0.0172"
    })
}

pub fn quote_response() -> QuoteResponse {
    serde_json::from_value(quote_response_json()).unwrap()
}

pub fn swap_response_json() -> Value {
    json!({
        "swapTransaction": "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        "lastValidBlockHeight": 279632475
    })
}

fn instruction_json(program_id: &str, data: &str) -> Value {
    json!({
        "programId": program_id,
        "accounts": [
            { "pubkey": USER_PUBLIC_KEY, "isSigner": true, "isWritable": true }
        ],
        "data": data
    })
}

pub fn swap_instructions_json() -> Value {
    json!({
        "tokenLedgerInstruction": null,
        "computeBudgetInstructions": [
            instruction_json(COMPUTE_BUDGET_PROGRAM_ID, "AsBcFQA="),
            instruction_json(COMPUTE_BUDGET_PROGRAM_ID, "AwQXAQAAAAAA")
        ],
        "setupInstructions": [
            instruction_json("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL", "AQ==")
        ],
        "swapInstruction": instruction_json(JUPITER_PROGRAM_ID, "5RfLl3rjrSo="),
        "cleanupInstruction": instruction_json("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA", "CQ=="),
        "addressLookupTableAddresses": ["GxS6FiQ3mNnAar9HGQ6mxP7t6FcwmHkU7peSeQDUHmpN"],
        "prioritizationFeeLamports": 5000,
        "computeUnitLimit": 1400000
    })
}
