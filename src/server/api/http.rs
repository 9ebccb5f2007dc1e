use anyhow::Context;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::server::api::{FetchError, ProxyApi};
use crate::server::model::config::ProxyApiConfig;
use crate::server::model::menu_item::{MenuItem, MenuItemDraft};
use crate::server::model::order::{Order, OrderDraft};

const MENU_ITEMS_PATH: &str = "menu-items";
const ORDERS_PATH: &str = "orders";

/// reqwest backed proxy api client
#[derive(Debug, Clone)]
pub(crate) struct HttpProxyApi {
    client: Client,
    base_url: String,
}

impl HttpProxyApi {
    pub fn new(config: &ProxyApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to create proxy api client")?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(FetchError::Network)?;
        read_json(res).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, FetchError> {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(FetchError::Network)?;
        read_json(res).await
    }
}

/// Non-2xx is a failure whatever the code, the body is decoded separately from the read.
async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, FetchError> {
    let status = res.status();
    if !status.is_success() {
        debug!("proxy api answered {} for {}", status, res.url());
        return Err(FetchError::Status(status));
    }
    let body = res.bytes().await.map_err(FetchError::Network)?;
    serde_json::from_slice(&body).map_err(FetchError::Decode)
}

impl ProxyApi for HttpProxyApi {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, FetchError> {
        self.get(MENU_ITEMS_PATH).await
    }

    async fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, FetchError> {
        self.post(MENU_ITEMS_PATH, draft).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        self.get(ORDERS_PATH).await
    }

    async fn place_order(&self, draft: &OrderDraft) -> Result<Order, FetchError> {
        self.post(ORDERS_PATH, draft).await
    }
}
