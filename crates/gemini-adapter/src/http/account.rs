/*
[INPUT]:  Authenticated account requests
[OUTPUT]: Key roles, account details and sub-account listings
[POS]:    HTTP layer - account administration endpoints (signed POST)
[UPDATE]: When adding new account endpoints or changing response format
*/

use std::borrow::Cow;

use crate::http::endpoint::account_params;
use crate::http::{Access, Endpoint, GeminiClient, Params, Result};
use crate::types::{
    Account, AccountDetail, AccountDetailRequest, AccountType, CreateAccountRequest,
    ListAccountsRequest, Roles, RolesRequest,
};

impl Endpoint for RolesRequest {
    type Response = Roles;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/roles")
    }
}

impl Endpoint for AccountDetailRequest {
    type Response = AccountDetail;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/account")
    }

    fn params(&self) -> Params {
        account_params(&self.account)
    }
}

impl Endpoint for CreateAccountRequest {
    type Response = Account;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/account/create")
    }

    fn params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with_opt("type", self.account_type.map(AccountType::as_str))
    }
}

impl Endpoint for ListAccountsRequest {
    type Response = Vec<Account>;
    const ACCESS: Access = Access::Private;

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed("/v1/account/list")
    }

    fn params(&self) -> Params {
        Params::new()
            .with_opt("limit_accounts", self.limit_accounts)
            .with_opt("timestamp", self.timestamp)
    }
}

impl GeminiClient {
    /// Roles granted to the API key
    ///
    /// POST /v1/roles
    pub async fn roles(&self) -> Result<Roles> {
        self.execute(&RolesRequest).await
    }

    /// POST /v1/account
    pub async fn account_detail(&self, request: &AccountDetailRequest) -> Result<AccountDetail> {
        self.execute(request).await
    }

    /// Create a sub-account (master API keys only)
    ///
    /// POST /v1/account/create
    pub async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account> {
        self.execute(request).await
    }

    /// POST /v1/account/list
    pub async fn list_accounts(&self, request: &ListAccountsRequest) -> Result<Vec<Account>> {
        self.execute(request).await
    }
}
