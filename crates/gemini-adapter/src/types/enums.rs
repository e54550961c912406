/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    #[serde(rename = "exchange stop limit")]
    ExchangeStopLimit,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::ExchangeLimit => "exchange limit",
            OrderType::ExchangeStopLimit => "exchange stop limit",
        }
    }
}

/// Execution options for limit orders; at most one is accepted per order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderOption {
    MakerOrCancel,
    ImmediateOrCancel,
    FillOrKill,
    AuctionOnly,
    IndicationOfInterest,
}

impl OrderOption {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderOption::MakerOrCancel => "maker-or-cancel",
            OrderOption::ImmediateOrCancel => "immediate-or-cancel",
            OrderOption::FillOrKill => "fill-or-kill",
            OrderOption::AuctionOnly => "auction-only",
            OrderOption::IndicationOfInterest => "indication-of-interest",
        }
    }
}

/// Blockchain used for deposit addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Bitcoin,
    Ethereum,
    BitcoinCash,
    Litecoin,
    Zcash,
    Filecoin,
}

impl Network {
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Bitcoin => "bitcoin",
            Network::Ethereum => "ethereum",
            Network::BitcoinCash => "bitcoincash",
            Network::Litecoin => "litecoin",
            Network::Zcash => "zcash",
            Network::Filecoin => "filecoin",
        }
    }
}

/// Candle resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrame {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1hr")]
    OneHour,
    #[serde(rename = "6hr")]
    SixHours,
    #[serde(rename = "1day")]
    OneDay,
}

impl TimeFrame {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFrame::OneMinute => "1m",
            TimeFrame::FiveMinutes => "5m",
            TimeFrame::FifteenMinutes => "15m",
            TimeFrame::ThirtyMinutes => "30m",
            TimeFrame::OneHour => "1hr",
            TimeFrame::SixHours => "6hr",
            TimeFrame::OneDay => "1day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Exchange,
    Custody,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountType::Exchange => "exchange",
            AccountType::Custody => "custody",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for option in [
            OrderOption::MakerOrCancel,
            OrderOption::ImmediateOrCancel,
            OrderOption::FillOrKill,
            OrderOption::AuctionOnly,
            OrderOption::IndicationOfInterest,
        ] {
            let json = serde_json::to_string(&option).unwrap();
            assert_eq!(json.trim_matches('"'), option.as_str());
        }

        let json = serde_json::to_string(&OrderType::ExchangeStopLimit).unwrap();
        assert_eq!(json, "\"exchange stop limit\"");
        assert_eq!(serde_json::to_string(&TimeFrame::OneHour).unwrap(), "\"1hr\"");
        assert_eq!(serde_json::to_string(&Network::BitcoinCash).unwrap(), "\"bitcoincash\"");
    }
}
