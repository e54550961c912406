/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (symbols, ticker, candles, depth, trades, auctions)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use std::borrow::Cow;

use crate::http::endpoint::segment;
use crate::http::{Access, Endpoint, GeminiClient, Params, Result};
use crate::types::{
    AuctionEvent, AuctionHistoryRequest, Candle, CandlesRequest, CurrentAuction,
    CurrentAuctionRequest, OrderBook, OrderBookRequest, PublicTrade, PublicTradesRequest,
    SymbolDetails, SymbolDetailsRequest, SymbolsRequest, Ticker, TickerRequest, TimeFrame,
};

/// Query strings only carry text; numbers and flags are rendered here
fn text<T: ToString>(value: Option<T>) -> Option<String> {
    value.map(|v| v.to_string())
}

impl Endpoint for SymbolsRequest {
    type Response = Vec<String>;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/symbols")
    }
}

impl Endpoint for SymbolDetailsRequest {
    type Response = SymbolDetails;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/symbols/details/{}", segment(&self.symbol)))
    }
}

impl Endpoint for TickerRequest {
    type Response = Ticker;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v2/ticker/{}", segment(&self.symbol)))
    }
}

impl Endpoint for CandlesRequest {
    type Response = Vec<Candle>;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v2/candles/{}/{}", segment(&self.symbol), self.time_frame.as_str()))
    }
}

impl Endpoint for OrderBookRequest {
    type Response = OrderBook;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/book/{}", segment(&self.symbol)))
    }

    fn params(&self) -> Params {
        Params::new()
            .with_opt("limit_bids", text(self.limit_bids))
            .with_opt("limit_asks", text(self.limit_asks))
    }
}

impl Endpoint for PublicTradesRequest {
    type Response = Vec<PublicTrade>;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/trades/{}", segment(&self.symbol)))
    }

    fn params(&self) -> Params {
        Params::new()
            .with_opt("since", text(self.since))
            .with_opt("limit_trades", text(self.limit_trades))
            .with_opt("include_breaks", text(self.include_breaks))
    }
}

impl Endpoint for CurrentAuctionRequest {
    type Response = CurrentAuction;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/auction/{}", segment(&self.symbol)))
    }
}

impl Endpoint for AuctionHistoryRequest {
    type Response = Vec<AuctionEvent>;
    const ACCESS: Access = Access::Public;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/auction/{}/history", segment(&self.symbol)))
    }

    fn params(&self) -> Params {
        Params::new()
            .with_opt("since", text(self.since))
            .with_opt("limit_auction_results", text(self.limit_auction_results))
            .with_opt("include_indicative", text(self.include_indicative))
    }
}

impl GeminiClient {
    /// List tradable symbols
    ///
    /// GET /v1/symbols
    pub async fn symbols(&self) -> Result<Vec<String>> {
        self.execute(&SymbolsRequest).await
    }

    /// GET /v1/symbols/details/{symbol}
    pub async fn symbol_details(&self, symbol: &str) -> Result<SymbolDetails> {
        self.execute(&SymbolDetailsRequest {
            symbol: symbol.to_string(),
        })
        .await
    }

    /// 24h ticker with hourly closes
    ///
    /// GET /v2/ticker/{symbol}
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker> {
        self.execute(&TickerRequest {
            symbol: symbol.to_string(),
        })
        .await
    }

    /// GET /v2/candles/{symbol}/{time_frame}
    pub async fn candles(&self, symbol: &str, time_frame: TimeFrame) -> Result<Vec<Candle>> {
        self.execute(&CandlesRequest {
            symbol: symbol.to_string(),
            time_frame,
        })
        .await
    }

    /// Current order book
    ///
    /// GET /v1/book/{symbol}?limit_bids={n}&limit_asks={n}
    pub async fn order_book(&self, request: &OrderBookRequest) -> Result<OrderBook> {
        self.execute(request).await
    }

    /// GET /v1/trades/{symbol}?since={ts}&limit_trades={n}&include_breaks={bool}
    pub async fn public_trades(&self, request: &PublicTradesRequest) -> Result<Vec<PublicTrade>> {
        self.execute(request).await
    }

    /// GET /v1/auction/{symbol}
    pub async fn current_auction(&self, symbol: &str) -> Result<CurrentAuction> {
        self.execute(&CurrentAuctionRequest {
            symbol: symbol.to_string(),
        })
        .await
    }

    /// GET /v1/auction/{symbol}/history
    pub async fn auction_history(&self, request: &AuctionHistoryRequest) -> Result<Vec<AuctionEvent>> {
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Endpoint, GeminiClient};
    use crate::types::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn public_client(server: &MockServer) -> GeminiClient {
        GeminiClient::with_base_url(ClientConfig::default(), None, &server.uri()).unwrap()
    }

    #[test]
    fn test_public_params_are_strings() {
        let request = PublicTradesRequest::new("btcusd")
            .since(1_700_000_000)
            .limit(50)
            .include_breaks(true);
        let params = request.params();

        let pairs = params.to_query_pairs().expect("all values are text");
        assert_eq!(
            pairs,
            vec![
                ("include_breaks", "true"),
                ("limit_trades", "50"),
                ("since", "1700000000"),
            ]
        );
    }

    #[tokio::test]
    async fn test_symbol_is_escaped_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"bids":[],"asks":[]}"#))
            .mount(&server)
            .await;

        let request = OrderBookRequest::new("btcusd?limit_bids=1");
        assert_eq!(request.path(), "/v1/book/btcusd%3Flimit_bids%3D1");

        public_client(&server).order_book(&request).await.unwrap();
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.path(), "/v1/book/btcusd%3Flimit_bids%3D1");
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_symbols() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/symbols"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"["btcusd","ethusd"]"#))
            .expect(1)
            .mount(&server)
            .await;

        let symbols = public_client(&server).symbols().await.unwrap();
        assert_eq!(symbols, vec!["btcusd", "ethusd"]);
    }

    #[tokio::test]
    async fn test_ticker() {
        let server = MockServer::start().await;
        let body = r#"{
            "symbol": "BTCUSD",
            "open": "9121.76",
            "high": "9440.66",
            "low": "9106.51",
            "close": "9347.66",
            "changes": ["9365.1", "9386.16", "9373.41"],
            "bid": "9345.70",
            "ask": "9347.67"
        }"#;
        Mock::given(method("GET"))
            .and(path("/v2/ticker/btcusd"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let ticker = public_client(&server).ticker("btcusd").await.unwrap();
        assert_eq!(ticker.symbol, "BTCUSD");
        assert_eq!(ticker.close, Decimal::from_str("9347.66").unwrap());
        assert_eq!(ticker.changes.len(), 3);
        assert_eq!(ticker.ask, Some(Decimal::from_str("9347.67").unwrap()));
    }

    #[tokio::test]
    async fn test_candles_path_uses_time_frame() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/candles/ethusd/15m"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                "[[1559755800000,246.5,246.9,246.1,246.8,120.5]]",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let candles = public_client(&server)
            .candles("ethusd", TimeFrame::FifteenMinutes)
            .await
            .unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].5, Decimal::from_str("120.5").unwrap());
    }

    #[tokio::test]
    async fn test_order_book_with_limits() {
        let server = MockServer::start().await;
        let body = r#"{
            "bids": [{"price": "3607.85", "amount": "6.643373", "timestamp": "1547147541"}],
            "asks": [{"price": "3607.86", "amount": "14.68205084", "timestamp": "1547147541"}]
        }"#;
        Mock::given(method("GET"))
            .and(path("/v1/book/btcusd"))
            .and(query_param("limit_bids", "1"))
            .and(query_param("limit_asks", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let book = public_client(&server)
            .order_book(&OrderBookRequest::new("btcusd").with_limits(1, 1))
            .await
            .unwrap();
        assert_eq!(book.bids[0].price, Decimal::from_str("3607.85").unwrap());
        assert_eq!(book.asks[0].amount, Decimal::from_str("14.68205084").unwrap());
    }

    #[tokio::test]
    async fn test_public_trades() {
        let server = MockServer::start().await;
        let body = r#"[{
            "timestamp": 1547146811,
            "timestampms": 1547146811357,
            "tid": 5335307668,
            "price": "3610.85",
            "amount": "0.27413495",
            "exchange": "gemini",
            "type": "buy"
        }]"#;
        Mock::given(method("GET"))
            .and(path("/v1/trades/btcusd"))
            .and(query_param("limit_trades", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let trades = public_client(&server)
            .public_trades(&PublicTradesRequest::new("btcusd").limit(1))
            .await
            .unwrap();
        assert_eq!(trades[0].tid, 5_335_307_668);
        assert_eq!(trades[0].trade_type, "buy");
        assert!(trades[0].broken.is_none());
    }

    #[tokio::test]
    async fn test_current_auction_uses_auction_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/auction/btcusd"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"last_auction_eid":109929,"last_auction_price":"629.92","next_auction_ms":1474567782895}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let auction = public_client(&server).current_auction("btcusd").await.unwrap();
        assert_eq!(auction.last_auction_eid, Some(109_929));
        assert_eq!(auction.last_auction_price, Some(Decimal::from_str("629.92").unwrap()));
        assert!(auction.closed_until_ms.is_none());
    }

    #[tokio::test]
    async fn test_auction_history_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/auction/btcusd/history"))
            .and(query_param("limit_auction_results", "2"))
            .and(query_param("include_indicative", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let request = AuctionHistoryRequest {
            limit_auction_results: Some(2),
            include_indicative: Some(false),
            ..AuctionHistoryRequest::new("btcusd")
        };
        let events = public_client(&server).auction_history(&request).await.unwrap();
        assert!(events.is_empty());
    }
}
