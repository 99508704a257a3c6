use std::process;

use error_stack::Report;
use jupiter_client::client::JupiterClient;
use jupiter_client::config::ClientConfig;
use jupiter_client::error::{Error, ReportDisplayExt};
use jupiter_models::constants::mints::jupiter_token_mint;
use jupiter_models::log::init_tracing;
use jupiter_models::models::quote::QuoteParams;

const USAGE: &str = "usage: jupiter_quote <input_mint> <output_mint> <amount> [slippage_bps]";

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("jupiter_quote error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    dotenv::dotenv().ok();
    init_tracing(false);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        return Err(USAGE.to_string());
    }

    let amount = args[2]
        .parse::<u64>()
        .map_err(|e| format!("invalid amount {}: {e}", args[2]))?;
    let mut params = QuoteParams::new(
        jupiter_token_mint(&args[0]),
        jupiter_token_mint(&args[1]),
        amount,
    );
    if let Some(slippage) = args.get(3) {
        let slippage_bps = slippage
            .parse::<u64>()
            .map_err(|e| format!("invalid slippage_bps {slippage}: {e}"))?;
        params = params.with_slippage_bps(slippage_bps);
    }

    let config = ClientConfig::from_env().map_err(|e| describe(&e))?;
    let client = JupiterClient::new(config).map_err(|e| describe(&e))?;

    let quote = client.quote(&params).await.map_err(|e| describe(&e))?;

    println!("Route: {}", quote.route_labels().join(" -> "));
    let pretty = serde_json::to_string_pretty(&quote).map_err(|e| e.to_string())?;
    println!("{pretty}");
    Ok(())
}

fn describe(report: &Report<Error>) -> String {
    format!("{}: {}", report.current_context(), report.format())
}
