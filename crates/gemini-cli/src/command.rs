/*
[INPUT]:  Parsed subcommand and a configured GeminiClient
[OUTPUT]: JSON result of one API call, or the request plan in dry-run mode
[POS]:    Command layer - maps CLI subcommands onto adapter endpoints
[UPDATE]: When adding subcommands or new endpoints
*/

use anyhow::{Context, Result};
use clap::Subcommand;
use gemini_adapter::{
    AccountDetailRequest, Access, ActiveOrdersRequest, BalancesRequest, CancelAllRequest,
    CancelOrderRequest, CandlesRequest, Endpoint, GeminiClient, HeartbeatRequest,
    ListAccountsRequest, NewOrderRequest, OrderBookRequest, OrderOption, OrderStatusRequest,
    PublicTradesRequest, RolesRequest, Side, SymbolsRequest, TickerRequest, TimeFrame,
};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List tradable symbols
    Symbols,
    /// 24h ticker for a symbol
    Ticker { symbol: String },
    /// Candles for a symbol
    Candles {
        symbol: String,
        /// 1m, 5m, 15m, 30m, 1hr, 6hr or 1day
        #[arg(long, default_value = "1hr", value_parser = parse_time_frame)]
        time_frame: TimeFrame,
    },
    /// Order book snapshot
    Book {
        symbol: String,
        #[arg(long)]
        limit_bids: Option<u32>,
        #[arg(long)]
        limit_asks: Option<u32>,
    },
    /// Recent public trades
    Trades {
        symbol: String,
        #[arg(long)]
        since: Option<i64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Account balances
    Balances,
    /// Active orders
    Orders,
    /// Status of one order
    OrderStatus {
        order_id: String,
        #[arg(long)]
        include_trades: bool,
    },
    /// Place an exchange limit order
    PlaceOrder {
        symbol: String,
        #[arg(value_parser = parse_side)]
        side: Side,
        amount: Decimal,
        price: Decimal,
        /// Add the maker-or-cancel option
        #[arg(long)]
        maker_only: bool,
        #[arg(long)]
        client_order_id: Option<String>,
    },
    /// Cancel one order
    Cancel { order_id: String },
    /// Cancel every open order on the account
    CancelAll,
    /// Send a session heartbeat
    Heartbeat,
    /// Roles granted to the API key
    Roles,
    /// Account detail and sub-accounts
    Accounts {
        /// List sub-accounts instead of showing the key's own account
        #[arg(long)]
        list: bool,
    },
}

fn parse_wire<T: serde::de::DeserializeOwned>(value: &str) -> std::result::Result<T, String> {
    serde_json::from_value(Value::String(value.to_string())).map_err(|e| e.to_string())
}

fn parse_time_frame(value: &str) -> std::result::Result<TimeFrame, String> {
    parse_wire(value)
}

fn parse_side(value: &str) -> std::result::Result<Side, String> {
    parse_wire(&value.to_ascii_lowercase())
}

/// Binds `$endpoint` to the request a command maps to and evaluates `$body` with it
macro_rules! with_endpoint {
    ($command:expr, $endpoint:ident => $body:expr) => {
        match $command {
            Command::Symbols => {
                let $endpoint = SymbolsRequest;
                $body
            }
            Command::Ticker { symbol } => {
                let $endpoint = TickerRequest { symbol: symbol.clone() };
                $body
            }
            Command::Candles { symbol, time_frame } => {
                let $endpoint = CandlesRequest {
                    symbol: symbol.clone(),
                    time_frame: *time_frame,
                };
                $body
            }
            Command::Book { symbol, limit_bids, limit_asks } => {
                let $endpoint = OrderBookRequest {
                    symbol: symbol.clone(),
                    limit_bids: *limit_bids,
                    limit_asks: *limit_asks,
                };
                $body
            }
            Command::Trades { symbol, since, limit } => {
                let $endpoint = PublicTradesRequest {
                    symbol: symbol.clone(),
                    since: *since,
                    limit_trades: *limit,
                    include_breaks: None,
                };
                $body
            }
            Command::Balances => {
                let $endpoint = BalancesRequest::default();
                $body
            }
            Command::Orders => {
                let $endpoint = ActiveOrdersRequest::default();
                $body
            }
            Command::OrderStatus { order_id, include_trades } => {
                let mut $endpoint = OrderStatusRequest::by_order_id(order_id.clone());
                if *include_trades {
                    $endpoint = $endpoint.with_trades();
                }
                $body
            }
            Command::PlaceOrder {
                symbol,
                side,
                amount,
                price,
                maker_only,
                client_order_id,
            } => {
                let mut $endpoint = NewOrderRequest::limit(symbol.clone(), *side, *amount, *price);
                if *maker_only {
                    $endpoint = $endpoint.with_option(OrderOption::MakerOrCancel);
                }
                $endpoint = match client_order_id {
                    Some(id) => $endpoint.with_client_order_id(id.clone()),
                    None => $endpoint.with_generated_client_order_id(),
                };
                $body
            }
            Command::Cancel { order_id } => {
                let $endpoint = CancelOrderRequest::new(order_id.clone());
                $body
            }
            Command::CancelAll => {
                let $endpoint = CancelAllRequest::default();
                $body
            }
            Command::Heartbeat => {
                let $endpoint = HeartbeatRequest;
                $body
            }
            Command::Roles => {
                let $endpoint = RolesRequest;
                $body
            }
            Command::Accounts { list: true } => {
                let $endpoint = ListAccountsRequest::default();
                $body
            }
            Command::Accounts { list: false } => {
                let $endpoint = AccountDetailRequest::default();
                $body
            }
        }
    };
}

fn plan_of<E: Endpoint>(endpoint: &E) -> Value {
    let access = match E::ACCESS {
        Access::Public => "public",
        Access::Private => "private",
    };
    json!({
        "access": access,
        "path": endpoint.path(),
        "params": endpoint.params(),
    })
}

async fn call<E>(client: &GeminiClient, endpoint: &E) -> Result<Value>
where
    E: Endpoint,
    E::Response: Serialize,
{
    let path = endpoint.path().into_owned();
    let response = client
        .execute(endpoint)
        .await
        .with_context(|| format!("call {path}"))?;
    serde_json::to_value(response).context("render response")
}

impl Command {
    /// Whether the command needs signed requests
    pub fn is_private(&self) -> bool {
        with_endpoint!(self, endpoint => is_private_endpoint(&endpoint))
    }

    /// Describe the request without sending it. The nonce is assigned only at send time.
    pub fn plan(&self) -> Value {
        with_endpoint!(self, endpoint => plan_of(&endpoint))
    }

    /// Dry-run plan plus the `url` the request would go to; public plans carry their query
    pub fn plan_for(&self, client: &GeminiClient) -> Result<Value> {
        let mut plan = self.plan();
        let path = plan["path"].as_str().unwrap_or_default();
        let mut url = client.url(path).with_context(|| format!("build url for {path}"))?;

        if plan["access"] == "public" {
            if let Some(params) = plan["params"].as_object().filter(|params| !params.is_empty()) {
                let mut query = url.query_pairs_mut();
                for (key, value) in params {
                    query.append_pair(key, value.as_str().unwrap_or_default());
                }
            }
        }

        plan["url"] = url.to_string().into();
        Ok(plan)
    }

    pub async fn run(&self, client: &GeminiClient) -> Result<Value> {
        info!(command = ?self, "running command");
        with_endpoint!(self, endpoint => call(client, &endpoint).await)
    }
}

fn is_private_endpoint<E: Endpoint>(_endpoint: &E) -> bool {
    E::ACCESS == Access::Private
}
