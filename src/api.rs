//! Client for the remote finance API.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::config::FinanceConfig;
use crate::error::FinanceError;
use crate::models::{NewTransaction, Transaction};
use crate::session::Session;

/// The three calls the dashboard makes. Futures are not `Send` because
/// browser fetches are not.
#[async_trait(?Send)]
pub trait FinanceApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, FinanceError>;

    async fn create_transaction(&self, payload: &NewTransaction) -> Result<(), FinanceError>;

    async fn delete_transaction(&self, id: i64) -> Result<(), FinanceError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpFinanceApi {
    config: FinanceConfig,
    session: Session,
}

impl HttpFinanceApi {
    pub fn new(config: FinanceConfig, session: Session) -> Self {
        Self { config, session }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .header("Authorization", &self.session.bearer())
    }
}

fn check(resp: Response) -> Result<Response, FinanceError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(FinanceError::from_status(resp.status()))
    }
}

#[async_trait(?Send)]
impl FinanceApi for HttpFinanceApi {
    async fn list_transactions(&self) -> Result<Vec<Transaction>, FinanceError> {
        let url = self.config.endpoint("/finance/transactions");
        let resp = self.authorize(Request::get(&url)).send().await?;
        let list = check(resp)?.json::<Vec<Transaction>>().await?;
        log::debug!("fetched {} transactions", list.len());
        Ok(list)
    }

    async fn create_transaction(&self, payload: &NewTransaction) -> Result<(), FinanceError> {
        let url = self.config.endpoint("/finance/transaction");
        let resp = self
            .authorize(Request::post(&url))
            .json(payload)?
            .send()
            .await?;
        check(resp)?;
        Ok(())
    }

    async fn delete_transaction(&self, id: i64) -> Result<(), FinanceError> {
        let url = self.config.endpoint(&format!("/finance/transaction/{}", id));
        let resp = self.authorize(Request::delete(&url)).send().await?;
        check(resp)?;
        Ok(())
    }
}
