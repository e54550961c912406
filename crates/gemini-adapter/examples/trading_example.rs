/*
[INPUT]:  GEMINI_API_KEY / GEMINI_API_SECRET for a sandbox account
[OUTPUT]: Balances, a resting maker order and its cancellation
[POS]:    Examples - authenticated trading flow
[UPDATE]: When order endpoints or parameters change
*/

use std::str::FromStr;

use gemini_adapter::*;
use rust_decimal::Decimal;

/// Example: place and cancel a maker-or-cancel order on the sandbox
#[tokio::main]
async fn main() {
    println!("=== Gemini Trading Example ===\n");

    let Some(credentials) = Credentials::from_env() else {
        eprintln!("Set GEMINI_API_KEY and GEMINI_API_SECRET to run this example");
        return;
    };

    let client = match GeminiClient::with_credentials(ClientConfig::sandbox(), credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Querying balances...");
    match client.balances().await {
        Ok(balances) => {
            for balance in balances {
                println!("  {} available {}", balance.currency, balance.available);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Far below market so it rests on the book
    let (Ok(amount), Ok(price)) = (Decimal::from_str("0.001"), Decimal::from_str("1000.00")) else {
        return;
    };
    let request = NewOrderRequest::limit("btcusd", Side::Buy, amount, price)
        .with_generated_client_order_id()
        .with_option(OrderOption::MakerOrCancel);

    println!("\nPlacing order...");
    let order = match client.new_order(&request).await {
        Ok(order) => {
            println!("✓ Order {} live={} remaining={}", order.order_id, order.is_live, order.remaining_amount);
            order
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nCancelling order {}...", order.order_id);
    match client.cancel_order(&order.order_id).await {
        Ok(cancelled) => println!("✓ Cancelled: {}", cancelled.is_cancelled),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
