//! Boundary to the proxy api serving menu items and orders

pub(crate) mod http;

#[cfg(test)]
pub(crate) mod fake;

use derive_more::{Display, Error};
use reqwest::StatusCode;
use crate::server::model::menu_item::{MenuItem, MenuItemDraft};
use crate::server::model::order::{Order, OrderDraft};

/// Why a call to the proxy api failed
#[derive(Debug, Display, Error)]
pub(crate) enum FetchError {
    /// the request never produced a response (connect, timeout, body read)
    #[display("network failure: {_0}")]
    Network(#[error(source)] reqwest::Error),
    /// any non-2xx status
    #[display("unexpected status code {_0}")]
    Status(#[error(not(source))] StatusCode),
    #[display("failed to decode response: {_0}")]
    Decode(#[error(source)] serde_json::Error),
}

pub(crate) trait ProxyApi {
    /// `GET /menu-items`
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, FetchError>;
    /// `POST /menu-items`
    async fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, FetchError>;
    /// `GET /orders`
    async fn list_orders(&self) -> Result<Vec<Order>, FetchError>;
    /// `POST /orders`
    async fn place_order(&self, draft: &OrderDraft) -> Result<Order, FetchError>;
}
