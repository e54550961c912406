/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Side;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolDetails {
    pub symbol: String,
    pub base_currency: String,
    pub quote_currency: String,
    #[serde(with = "serde_helpers::decimal")]
    pub tick_size: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub quote_increment: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub min_order_size: Decimal,
    pub status: String,
    #[serde(default)]
    pub wrap_enabled: bool,
}

/// 24h ticker (v2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub open: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub close: Decimal,
    /// Hourly closes for the last 24 hours, newest first
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_decimal_vec",
        serialize_with = "serde_helpers::serialize_decimal_vec"
    )]
    pub changes: Vec<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub bid: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub ask: Option<Decimal>,
}

/// `[time_ms, open, high, low, close, volume]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle(
    pub i64,
    #[serde(with = "serde_helpers::decimal")] pub Decimal,
    #[serde(with = "serde_helpers::decimal")] pub Decimal,
    #[serde(with = "serde_helpers::decimal")] pub Decimal,
    #[serde(with = "serde_helpers::decimal")] pub Decimal,
    #[serde(with = "serde_helpers::decimal")] pub Decimal,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<BookEntry>,
    pub asks: Vec<BookEntry>,
}

/// Trade from the public trade history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicTrade {
    pub timestamp: i64,
    pub timestampms: i64,
    pub tid: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub exchange: String,
    /// `buy`, `sell`, `auction` or `block`
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAuction {
    #[serde(default)]
    pub closed_until_ms: Option<i64>,
    #[serde(default)]
    pub last_auction_eid: Option<i64>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_auction_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_auction_quantity: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_highest_bid_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_lowest_ask_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub last_collar_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub most_recent_indicative_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub most_recent_indicative_quantity: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub most_recent_highest_bid_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub most_recent_lowest_ask_price: Option<Decimal>,
    #[serde(default)]
    pub next_update_ms: Option<i64>,
    #[serde(default)]
    pub next_auction_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionEvent {
    pub timestamp: i64,
    pub timestampms: i64,
    pub auction_id: i64,
    pub eid: i64,
    pub event_type: String,
    pub auction_result: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub auction_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub auction_quantity: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub highest_bid_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub lowest_ask_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub collar_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(with = "serde_helpers::id")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    pub symbol: String,
    pub exchange: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub avg_execution_price: Decimal,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub timestampms: i64,
    pub is_live: bool,
    pub is_cancelled: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub was_forced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remaining_amount: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub original_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trades: Option<Vec<Trade>>,
}

/// Fill from the account's own trade history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub timestamp: i64,
    pub timestampms: i64,
    #[serde(rename = "type")]
    pub trade_type: String,
    pub aggressor: bool,
    pub fee_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee_amount: Decimal,
    pub tid: i64,
    #[serde(with = "serde_helpers::id")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub is_auction_fill: bool,
    #[serde(default, rename = "break", skip_serializing_if = "Option::is_none")]
    pub break_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeVolume {
    #[serde(default, with = "serde_helpers::id_option")]
    pub account_id: Option<String>,
    pub symbol: String,
    pub base_currency: String,
    pub notional_currency: String,
    pub data_date: String,
    #[serde(with = "serde_helpers::decimal")]
    pub total_volume_base: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub maker_buy_sell_ratio: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub buy_maker_base: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub buy_maker_notional: Decimal,
    pub buy_maker_count: i64,
    #[serde(with = "serde_helpers::decimal")]
    pub sell_maker_base: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub sell_maker_notional: Decimal,
    pub sell_maker_count: i64,
    #[serde(with = "serde_helpers::decimal")]
    pub buy_taker_base: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub buy_taker_notional: Decimal,
    pub buy_taker_count: i64,
    #[serde(with = "serde_helpers::decimal")]
    pub sell_taker_base: Decimal,
    #[serde(with = "serde_helpers::decimal")]
    pub sell_taker_notional: Decimal,
    pub sell_taker_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    pub date: String,
    #[serde(with = "serde_helpers::decimal")]
    pub notional_volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionalVolume {
    pub date: String,
    pub last_updated_ms: i64,
    pub web_maker_fee_bps: i64,
    pub web_taker_fee_bps: i64,
    pub api_maker_fee_bps: i64,
    pub api_taker_fee_bps: i64,
    #[serde(with = "serde_helpers::decimal")]
    pub notional_30d_volume: Decimal,
    #[serde(default)]
    pub notional_1d_volume: Vec<DailyVolume>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(rename = "type")]
    pub balance_type: String,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    #[serde(rename = "availableForWithdrawal", with = "rust_decimal::serde::str")]
    pub available_for_withdrawal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionalBalance {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_notional: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_notional: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_for_withdrawal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_for_withdrawal_notional: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub status: String,
    pub timestampms: i64,
    pub eid: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_eid: Option<i64>,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_idx: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub bank: String,
    #[serde(rename = "bankId")]
    pub bank_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethods {
    #[serde(default)]
    pub balances: Vec<NotionalBalance>,
    #[serde(default)]
    pub banks: Vec<Bank>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roles {
    pub is_auditor: bool,
    pub is_fund_manager: bool,
    pub is_trader: bool,
    #[serde(default, rename = "counterparty_id", skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,
}

/// Sub-account as returned by account listing and creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub name: String,
    pub account: String,
    #[serde(rename = "type")]
    pub account_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub account_name: String,
    pub short_name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub last_sign_in: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    pub account: AccountInfo,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub memo_reference_code: Option<String>,
}

pub(crate) mod serde_helpers {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    fn decimal_from_value<E: serde::de::Error>(value: &Value) -> Result<Decimal, E> {
        let raw = match value {
            Value::String(text) => text.trim().to_string(),
            Value::Number(number) => number.to_string(),
            _ => return Err(E::custom("expected decimal as string or number")),
        };
        Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(E::custom)
    }

    fn id_from_value<E: serde::de::Error>(value: Value) -> Result<String, E> {
        match value {
            Value::String(text) => Ok(text),
            Value::Number(number) => Ok(number.to_string()),
            _ => Err(E::custom("expected id as string or number")),
        }
    }

    /// Decimal that may arrive as a JSON string or number (including `1e-8`)
    pub mod decimal {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            decimal_from_value(&value)
        }

        pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&value.to_string())
        }
    }

    /// Identifier that may arrive as a JSON string or number
    pub mod id {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
        where
            D: Deserializer<'de>,
        {
            id_from_value(Value::deserialize(deserializer)?)
        }

        pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(value)
        }
    }

    pub mod id_option {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Value::deserialize(deserializer)? {
                Value::Null => Ok(None),
                value => id_from_value(value).map(Some),
            }
        }

        pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.serialize(serializer)
        }
    }

    pub mod id_vec {
        use super::*;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<Value>::deserialize(deserializer)?
                .into_iter()
                .map(id_from_value)
                .collect()
        }

        pub fn serialize<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            values.serialize(serializer)
        }
    }

    pub fn deserialize_decimal_vec<'de, D>(deserializer: D) -> Result<Vec<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Value>::deserialize(deserializer)?
            .iter()
            .map(decimal_from_value)
            .collect()
    }

    pub fn serialize_decimal_vec<S>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings: Vec<String> = values.iter().map(Decimal::to_string).collect();
        strings.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn order_accepts_numeric_and_string_ids() {
        let mut value = json!({
            "order_id": 106817811,
            "client_order_id": "20190110-4738721",
            "symbol": "btcusd",
            "exchange": "gemini",
            "price": "3633.00",
            "avg_execution_price": "3632.8508430064554",
            "side": "buy",
            "type": "exchange limit",
            "timestampms": 1547220404836_i64,
            "is_live": false,
            "is_cancelled": false,
            "is_hidden": false,
            "was_forced": false,
            "executed_amount": "3.7567928949",
            "remaining_amount": "0",
            "options": [],
            "original_amount": "3.7567928949"
        });

        let order: Order = serde_json::from_value(value.clone()).expect("numeric id");
        assert_eq!(order.order_id, "106817811");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.price, Some(dec("3633.00")));

        value["order_id"] = json!("106817811");
        let order: Order = serde_json::from_value(value).expect("string id");
        assert_eq!(order.order_id, "106817811");
        assert!(order.trades.is_none());
    }

    #[test]
    fn symbol_details_accept_scientific_numbers() {
        let details: SymbolDetails = serde_json::from_value(json!({
            "symbol": "BTCUSD",
            "base_currency": "BTC",
            "quote_currency": "USD",
            "tick_size": 1e-8,
            "quote_increment": 0.01,
            "min_order_size": "0.00001",
            "status": "open",
            "wrap_enabled": false
        }))
        .expect("symbol details");

        assert_eq!(details.tick_size, dec("0.00000001"));
        assert_eq!(details.quote_increment, dec("0.01"));
        assert_eq!(details.min_order_size, dec("0.00001"));
    }

    #[test]
    fn candles_decode_from_number_arrays() {
        let candles: Vec<Candle> = serde_json::from_value(json!([
            [1559755800000_i64, 7781.6, 7820.23, 7776.56, 7819.39, 34.7624802159],
            [1559755500000_i64, 7787.76, 7789.35, 7778.01, 7781.6, 9.4138778839]
        ]))
        .expect("candles");

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].0, 1_559_755_800_000);
        assert_eq!(candles[0].4, dec("7819.39"));
    }

    #[test]
    fn balance_uses_camel_case_withdrawal_field() {
        let balance: Balance = serde_json::from_value(json!({
            "type": "exchange",
            "currency": "BTC",
            "amount": "1154.62034001",
            "available": "1129.10517279",
            "availableForWithdrawal": "1129.10517279"
        }))
        .expect("balance");

        assert_eq!(balance.balance_type, "exchange");
        assert_eq!(balance.available_for_withdrawal, dec("1129.10517279"));
    }
}
