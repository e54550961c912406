/*
[INPUT]:  Balance, transfer and withdrawal requests
[OUTPUT]: Balances, transfer history, deposit addresses and movement results
[POS]:    HTTP layer - fund management endpoints (signed POST)
[UPDATE]: When adding new fund endpoints or changing response format
*/

use std::borrow::Cow;

use crate::http::endpoint::{account_params, segment};
use crate::http::{Access, Endpoint, GeminiClient, Params, Result};
use crate::types::{
    Balance, BalancesRequest, DepositAddress, DepositAddressesRequest, InternalTransferRequest,
    InternalTransferResult, Network, NewDepositAddressRequest, NotionalBalance,
    NotionalBalancesRequest, PaymentMethods, PaymentMethodsRequest, Transfer, TransfersRequest,
    WithdrawRequest, WithdrawalResult,
};

impl Endpoint for BalancesRequest {
    type Response = Vec<Balance>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/balances")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for NotionalBalancesRequest {
    type Response = Vec<NotionalBalance>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/notionalbalances/{}", segment(&self.currency)))
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for TransfersRequest {
    type Response = Vec<Transfer>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/transfers")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
            .with_opt("timestamp", self.timestamp)
            .with_opt("limit_transfers", self.limit_transfers)
            .with_opt("show_completed_deposit_advances", self.show_completed_deposit_advances)
    }
}

impl Endpoint for DepositAddressesRequest {
    type Response = Vec<DepositAddress>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/addresses/{}", self.network.as_str()))
    }

    fn params(&self) -> Params {
        account_params(&self.account).with_opt("timestamp", self.timestamp)
    }
}

impl Endpoint for NewDepositAddressRequest {
    type Response = DepositAddress;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/deposit/{}/newAddress", self.network.as_str()))
    }

    fn params(&self) -> Params {
        account_params(&self.account)
            .with_opt("label", self.label.as_ref())
            .with_opt("legacy", self.legacy)
    }
}

impl Endpoint for WithdrawRequest {
    type Response = WithdrawalResult;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/withdraw/{}", segment(&self.currency)))
    }

    fn params(&self) -> Params {
        account_params(&self.account)
            .with("address", &self.address)
            .with("amount", self.amount.to_string())
    }
}

impl Endpoint for InternalTransferRequest {
    type Response = InternalTransferResult;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Owned(format!("/v1/account/transfer/{}", segment(&self.currency)))
    }

    fn params(&self) -> Params {
        Params::new()
            .with("sourceAccount", &self.source_account)
            .with("targetAccount", &self.target_account)
            .with("amount", self.amount.to_string())
            .with_opt("clientTransferId", self.client_transfer_id.as_ref())
    }
}

impl Endpoint for PaymentMethodsRequest {
    type Response = PaymentMethods;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/payments/methods")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl GeminiClient {
    /// Available balances per currency
    ///
    /// POST /v1/balances
    pub async fn balances(&self) -> Result<Vec<Balance>> {
        self.execute(&BalancesRequest::default()).await
    }

    /// Balances valued in a notional currency
    ///
    /// POST /v1/notionalbalances/{currency}
    pub async fn notional_balances(&self, currency: &str) -> Result<Vec<NotionalBalance>> {
        self.execute(&NotionalBalancesRequest {
            currency: currency.to_string(),
            account: None,
        })
        .await
    }

    /// POST /v1/transfers
    pub async fn transfers(&self, request: &TransfersRequest) -> Result<Vec<Transfer>> {
        self.execute(request).await
    }

    /// POST /v1/addresses/{network}
    pub async fn deposit_addresses(&self, network: Network) -> Result<Vec<DepositAddress>> {
        self.execute(&DepositAddressesRequest {
            network,
            timestamp: None,
            account: None,
        })
        .await
    }

    /// POST /v1/deposit/{network}/newAddress
    pub async fn new_deposit_address(&self, request: &NewDepositAddressRequest) -> Result<DepositAddress> {
        self.execute(request).await
    }

    /// Withdraw crypto to an external address
    ///
    /// POST /v1/withdraw/{currency}
    pub async fn withdraw(&self, request: &WithdrawRequest) -> Result<WithdrawalResult> {
        self.execute(request).await
    }

    /// POST /v1/account/transfer/{currency}
    pub async fn internal_transfer(&self, request: &InternalTransferRequest) -> Result<InternalTransferResult> {
        self.execute(request).await
    }

    /// POST /v1/payments/methods
    pub async fn payment_methods(&self) -> Result<PaymentMethods> {
        self.execute(&PaymentMethodsRequest::default()).await
    }
}
