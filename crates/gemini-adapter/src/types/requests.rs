/*
[INPUT]:  Caller-supplied endpoint arguments
[OUTPUT]: Typed request structs consumed by the endpoint descriptors
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use uuid::Uuid;

use super::enums::{AccountType, Network, OrderOption, OrderType, Side, TimeFrame};

// ---------------------------------------------------------------------------
// Market data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolsRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDetailsRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandlesRequest {
    pub symbol: String,
    pub time_frame: TimeFrame,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBookRequest {
    pub symbol: String,
    /// `0` returns the full side
    pub limit_bids: Option<u32>,
    pub limit_asks: Option<u32>,
}

impl OrderBookRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_limits(mut self, bids: u32, asks: u32) -> Self {
        self.limit_bids = Some(bids);
        self.limit_asks = Some(asks);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicTradesRequest {
    pub symbol: String,
    /// Only trades after this timestamp (seconds or milliseconds)
    pub since: Option<i64>,
    pub limit_trades: Option<u32>,
    pub include_breaks: Option<bool>,
}

impl PublicTradesRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit_trades = Some(limit);
        self
    }

    pub fn include_breaks(mut self, include: bool) -> Self {
        self.include_breaks = Some(include);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentAuctionRequest {
    pub symbol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuctionHistoryRequest {
    pub symbol: String,
    pub since: Option<i64>,
    pub limit_auction_results: Option<u32>,
    pub include_indicative: Option<bool>,
}

impl AuctionHistoryRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderRequest {
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub side: Side,
    pub order_type: OrderType,
    pub client_order_id: Option<String>,
    /// Required for stop-limit orders
    pub stop_price: Option<Decimal>,
    pub options: Vec<OrderOption>,
    /// Sub-account name (master API keys only)
    pub account: Option<String>,
}

impl NewOrderRequest {
    /// Exchange limit order
    pub fn limit(symbol: impl Into<String>, side: Side, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            price,
            side,
            order_type: OrderType::ExchangeLimit,
            client_order_id: None,
            stop_price: None,
            options: Vec::new(),
            account: None,
        }
    }

    pub fn stop_limit(
        symbol: impl Into<String>,
        side: Side,
        amount: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::ExchangeStopLimit,
            stop_price: Some(stop_price),
            ..Self::limit(symbol, side, amount, price)
        }
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Tag the order with a random UUID v4 client id
    pub fn with_generated_client_order_id(self) -> Self {
        self.with_client_order_id(Uuid::new_v4().to_string())
    }

    pub fn with_option(mut self, option: OrderOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn for_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub order_id: String,
    pub account: Option<String>,
}

impl CancelOrderRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            account: None,
        }
    }
}

/// Cancels every order opened by this API session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelSessionRequest {
    pub account: Option<String>,
}

/// Cancels every order on the account, including UI orders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelAllRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStatusRequest {
    pub order_id: Option<String>,
    pub client_order_id: Option<String>,
    pub include_trades: Option<bool>,
    pub account: Option<String>,
}

impl OrderStatusRequest {
    pub fn by_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        }
    }

    pub fn by_client_order_id(client_order_id: impl Into<String>) -> Self {
        Self {
            client_order_id: Some(client_order_id.into()),
            ..Self::default()
        }
    }

    pub fn with_trades(mut self) -> Self {
        self.include_trades = Some(true);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveOrdersRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastTradesRequest {
    pub symbol: String,
    pub limit_trades: Option<u32>,
    /// Only trades at or after this timestamp
    pub timestamp: Option<i64>,
    pub account: Option<String>,
}

impl PastTradesRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeVolumeRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotionalVolumeRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeartbeatRequest;

// ---------------------------------------------------------------------------
// Funds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancesRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionalBalancesRequest {
    /// Notional currency, e.g. `usd`
    pub currency: String,
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransfersRequest {
    pub timestamp: Option<i64>,
    pub limit_transfers: Option<u32>,
    pub show_completed_deposit_advances: Option<bool>,
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositAddressesRequest {
    pub network: Network,
    pub timestamp: Option<i64>,
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepositAddressRequest {
    pub network: Network,
    pub label: Option<String>,
    /// Litecoin only: request a legacy P2SH address
    pub legacy: Option<bool>,
    pub account: Option<String>,
}

impl NewDepositAddressRequest {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            label: None,
            legacy: None,
            account: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub currency: String,
    pub address: String,
    pub amount: Decimal,
    pub account: Option<String>,
}

impl WithdrawRequest {
    pub fn new(currency: impl Into<String>, address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            address: address.into(),
            amount,
            account: None,
        }
    }
}

/// Move funds between two sub-accounts of the same master account
#[derive(Debug, Clone, PartialEq)]
pub struct InternalTransferRequest {
    pub currency: String,
    pub source_account: String,
    pub target_account: String,
    pub amount: Decimal,
    pub client_transfer_id: Option<String>,
}

impl InternalTransferRequest {
    pub fn new(
        currency: impl Into<String>,
        source_account: impl Into<String>,
        target_account: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            currency: currency.into(),
            source_account: source_account.into(),
            target_account: target_account.into(),
            amount,
            client_transfer_id: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethodsRequest {
    pub account: Option<String>,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RolesRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDetailRequest {
    pub account: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub name: String,
    pub account_type: Option<AccountType>,
}

impl CreateAccountRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAccountsRequest {
    pub limit_accounts: Option<u32>,
    pub timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn stop_limit_builds_on_limit() {
        let amount = Decimal::from_str("0.5").unwrap();
        let price = Decimal::from_str("30000").unwrap();
        let stop = Decimal::from_str("30100").unwrap();

        let order = NewOrderRequest::stop_limit("btcusd", Side::Buy, amount, price, stop)
            .with_client_order_id("cid-1")
            .with_option(OrderOption::MakerOrCancel);

        assert_eq!(order.order_type, OrderType::ExchangeStopLimit);
        assert_eq!(order.stop_price, Some(stop));
        assert_eq!(order.client_order_id.as_deref(), Some("cid-1"));
        assert_eq!(order.options, vec![OrderOption::MakerOrCancel]);
        assert!(order.account.is_none());
    }

    #[test]
    fn generated_client_order_ids_are_unique() {
        let a = NewOrderRequest::limit("btcusd", Side::Sell, Decimal::ONE, Decimal::TEN)
            .with_generated_client_order_id();
        let b = a.clone().with_generated_client_order_id();

        let a_id = a.client_order_id.unwrap();
        assert!(Uuid::parse_str(&a_id).is_ok());
        assert_ne!(Some(a_id), b.client_order_id);
    }
}
