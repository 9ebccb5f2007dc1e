//! for test

use std::collections::VecDeque;
use std::sync::Mutex;
use reqwest::StatusCode;
use crate::server::api::{FetchError, ProxyApi};
use crate::server::model::menu_item::{MenuItem, MenuItemDraft};
use crate::server::model::order::{Order, OrderDraft};

/// Proxy api answering from queued responses, an empty queue answers 500.
#[derive(Default)]
pub(crate) struct FakeProxyApi {
    pub menu_items: Mutex<VecDeque<Result<Vec<MenuItem>, FetchError>>>,
    pub created_menu_items: Mutex<VecDeque<Result<MenuItem, FetchError>>>,
    pub orders: Mutex<VecDeque<Result<Vec<Order>, FetchError>>>,
    pub placed_orders: Mutex<VecDeque<Result<Order, FetchError>>>,
    pub posted_menu_items: Mutex<Vec<MenuItemDraft>>,
    pub posted_orders: Mutex<Vec<OrderDraft>>,
}

impl FakeProxyApi {
    pub fn with_menu_items(self, res: Result<Vec<MenuItem>, FetchError>) -> Self {
        self.menu_items.lock().unwrap().push_back(res);
        self
    }

    pub fn with_created_menu_item(self, res: Result<MenuItem, FetchError>) -> Self {
        self.created_menu_items.lock().unwrap().push_back(res);
        self
    }

    pub fn with_orders(self, res: Result<Vec<Order>, FetchError>) -> Self {
        self.orders.lock().unwrap().push_back(res);
        self
    }

    pub fn with_placed_order(self, res: Result<Order, FetchError>) -> Self {
        self.placed_orders.lock().unwrap().push_back(res);
        self
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, FetchError>>>) -> Result<T, FetchError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)))
}

impl ProxyApi for FakeProxyApi {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, FetchError> {
        next(&self.menu_items)
    }

    async fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, FetchError> {
        self.posted_menu_items.lock().unwrap().push(draft.clone());
        next(&self.created_menu_items)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        next(&self.orders)
    }

    async fn place_order(&self, draft: &OrderDraft) -> Result<Order, FetchError> {
        self.posted_orders.lock().unwrap().push(draft.clone());
        next(&self.placed_orders)
    }
}

pub(crate) fn latte() -> MenuItem {
    MenuItem {
        menu_id: 1,
        name: "Latte".to_string(),
        description: "Hot coffee".to_string(),
        price: 3.5,
        available: true,
    }
}

pub(crate) fn pending_order(order_id: i64) -> Order {
    Order {
        order_id,
        table_number: 2,
        menu_item: "Latte".to_string(),
        quantity: 3,
        status: "pending".to_string(),
    }
}

/// a transport error without touching the network
pub(crate) fn network_error() -> FetchError {
    let err = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    FetchError::Network(err)
}
