/*
[INPUT]:  Order placement and query requests
[OUTPUT]: Orders, fills, volume statistics and cancel results
[POS]:    HTTP layer - order management endpoints (signed POST)
[UPDATE]: When adding new trading endpoints or order parameters
*/

use std::borrow::Cow;

use crate::http::endpoint::account_params;
use crate::http::{Access, Endpoint, GeminiClient, Params, Result};
use crate::types::{
    ActiveOrdersRequest, CancelAllRequest, CancelAllResult, CancelOrderRequest,
    CancelSessionRequest, HeartbeatRequest, HeartbeatResponse, NewOrderRequest,
    NotionalVolume, NotionalVolumeRequest, Order, OrderStatusRequest, PastTradesRequest, Trade,
    TradeVolume, TradeVolumeRequest,
};

impl Endpoint for NewOrderRequest {
    type Response = Order;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/order/new")
    }

    fn params(&self) -> Params {
        let mut params = account_params(&self.account)
            .with("symbol", &self.symbol)
            .with("amount", self.amount.to_string())
            .with("price", self.price.to_string())
            .with("side", self.side.as_str())
            .with("type", self.order_type.as_str())
            .with_opt("client_order_id", self.client_order_id.as_ref())
            .with_opt("stop_price", self.stop_price.map(|p| p.to_string()));

        if !self.options.is_empty() {
            let options: Vec<String> = self.options.iter().map(|o| o.as_str().to_string()).collect();
            params.insert("options", options);
        }
        params
    }
}

impl Endpoint for CancelOrderRequest {
    type Response = Order;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/order/cancel")
    }

    fn params(&self) -> Params {
        account_params(&self.account).with("order_id", &self.order_id)
    }
}

impl Endpoint for CancelSessionRequest {
    type Response = CancelAllResult;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/order/cancel/session")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for CancelAllRequest {
    type Response = CancelAllResult;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/order/cancel/all")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for OrderStatusRequest {
    type Response = Order;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/order/status")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
            .with_opt("order_id", self.order_id.as_ref())
            .with_opt("client_order_id", self.client_order_id.as_ref())
            .with_opt("include_trades", self.include_trades)
    }
}

impl Endpoint for ActiveOrdersRequest {
    type Response = Vec<Order>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/orders")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for PastTradesRequest {
    type Response = Vec<Trade>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/mytrades")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
            .with("symbol", &self.symbol)
            .with_opt("limit_trades", self.limit_trades)
            .with_opt("timestamp", self.timestamp)
    }
}

impl Endpoint for TradeVolumeRequest {
    /// One inner list per account
    type Response = Vec<Vec<TradeVolume>>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/tradevolume")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for NotionalVolumeRequest {
    type Response = NotionalVolume;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/notionalvolume")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for HeartbeatRequest {
    type Response = HeartbeatResponse;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/heartbeat")
    }
}

impl GeminiClient {
    /// Place a new order
    ///
    /// POST /v1/order/new
    pub async fn new_order(&self, request: &NewOrderRequest) -> Result<Order> {
        self.execute(request).await
    }

    /// Cancel a single order by id
    ///
    /// POST /v1/order/cancel
    pub async fn cancel_order(&self, order_id: &str) -> Result<Order> {
        self.execute(&CancelOrderRequest::new(order_id)).await
    }

    /// POST /v1/order/cancel/session
    pub async fn cancel_session(&self) -> Result<CancelAllResult> {
        self.execute(&CancelSessionRequest::default()).await
    }

    /// POST /v1/order/cancel/all
    pub async fn cancel_all(&self) -> Result<CancelAllResult> {
        self.execute(&CancelAllRequest::default()).await
    }

    /// POST /v1/order/status
    pub async fn order_status(&self, request: &OrderStatusRequest) -> Result<Order> {
        self.execute(request).await
    }

    /// POST /v1/orders
    pub async fn active_orders(&self) -> Result<Vec<Order>> {
        self.execute(&ActiveOrdersRequest::default()).await
    }

    /// POST /v1/mytrades
    pub async fn past_trades(&self, request: &PastTradesRequest) -> Result<Vec<Trade>> {
        self.execute(request).await
    }

    /// POST /v1/tradevolume
    pub async fn trade_volume(&self) -> Result<Vec<Vec<TradeVolume>>> {
        self.execute(&TradeVolumeRequest::default()).await
    }

    /// POST /v1/notionalvolume
    pub async fn notional_volume(&self) -> Result<NotionalVolume> {
        self.execute(&NotionalVolumeRequest::default()).await
    }

    /// Keep a heartbeat-enabled session alive
    ///
    /// POST /v1/heartbeat
    pub async fn heartbeat(&self) -> Result<HeartbeatResponse> {
        self.execute(&HeartbeatRequest).await
    }
}
