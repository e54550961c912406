/*
[INPUT]:  Symbol identifier (e.g., "btcusd")
[OUTPUT]: Market data (symbols, ticker, depth, trades, candles)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use gemini_adapter::*;

/// Example: Query market data against the sandbox (no credentials required)
#[tokio::main]
async fn main() {
    println!("=== Gemini Market Data Example ===\n");

    let client = match GeminiClient::new(ClientConfig::sandbox()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    let symbol = "btcusd";

    println!("Listing symbols...");
    match client.symbols().await {
        Ok(symbols) => println!("✓ {} symbols, first few: {:?}", symbols.len(), &symbols[..symbols.len().min(5)]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", symbol);
    match client.ticker(symbol).await {
        Ok(ticker) => println!("✓ Close {} (bid {:?} / ask {:?})", ticker.close, ticker.bid, ticker.ask),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying top of book for {}...", symbol);
    match client.order_book(&OrderBookRequest::new(symbol).with_limits(5, 5)).await {
        Ok(book) => {
            for level in &book.bids {
                println!("  bid {} x {}", level.price, level.amount);
            }
            for level in &book.asks {
                println!("  ask {} x {}", level.price, level.amount);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", symbol);
    match client.public_trades(&PublicTradesRequest::new(symbol).limit(10)).await {
        Ok(trades) => println!("✓ {} trades", trades.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying hourly candles for {}...", symbol);
    match client.candles(symbol, TimeFrame::OneHour).await {
        Ok(candles) => println!("✓ {} candles", candles.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
