pub const WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS: &str = "So11111111111111111111111111111111111111112";

pub const NATIVE_TOKEN_SOLANA_ADDRESS: &str = "So11111111111111111111111111111111111111111";

pub const NATIVE_TOKEN_SOLANA_ADDRESSES: [&str; 2] = [
    NATIVE_TOKEN_SOLANA_ADDRESS,
    "11111111111111111111111111111111",
];

pub const USDC_MINT_ADDRESS: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

pub fn is_native_token_solana_address(address: &str) -> bool {
    NATIVE_TOKEN_SOLANA_ADDRESSES.contains(&address)
}

/// Replaces native SOL aliases with the wSOL mint. The aggregator only routes mints.
pub fn jupiter_token_mint(token_mint: &str) -> String {
    if is_native_token_solana_address(token_mint) {
        WRAPPED_NATIVE_TOKEN_SOLANA_ADDRESS.to_string()
    } else {
        token_mint.to_string()
    }
}
