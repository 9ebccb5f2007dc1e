use log::{debug, error, warn};
use tokio::sync::Mutex;
use crate::server::api::{FetchError, ProxyApi};
use crate::server::model::menu_item::MenuItem;
use crate::server::model::order::{clamp_count, Order, OrderDraft};
use crate::server::view::{Epoch, Liveness, RequestToken, SubmitGuard, Submission, ViewError};

/// State behind the `/` page
#[derive(Debug, Default)]
pub(crate) struct OrderingView {
    /// options of the menu item selector
    menu_items: Vec<MenuItem>,
    orders: Vec<Order>,
    draft: OrderDraft,
    error: Option<ViewError>,
    submit: SubmitGuard,
    liveness: Liveness,
}

impl OrderingView {
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<ViewError> {
        self.error
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_in_flight()
    }

    pub fn is_mounted(&self) -> bool {
        self.liveness.is_mounted()
    }

    pub fn begin_mount(&mut self) -> Epoch {
        self.menu_items.clear();
        self.orders.clear();
        self.draft = OrderDraft::default();
        self.error = None;
        self.submit.reset();
        self.liveness.mount()
    }

    pub fn finish_menu_items(&mut self, epoch: Epoch, res: Result<Vec<MenuItem>, FetchError>) {
        if !self.liveness.accepts(epoch) {
            debug!("discarding menu items fetched for a stale page");
            return;
        }
        match res {
            Ok(items) => self.menu_items = items,
            Err(e) => self.fail(ViewError::FetchMenuItems, e),
        }
    }

    pub fn finish_orders(&mut self, epoch: Epoch, res: Result<Vec<Order>, FetchError>) {
        if !self.liveness.accepts(epoch) {
            debug!("discarding orders fetched for a stale page");
            return;
        }
        match res {
            Ok(orders) => self.orders = orders,
            Err(e) => self.fail(ViewError::FetchOrders, e),
        }
    }

    pub fn unmount(&mut self) {
        self.submit.reset();
        self.liveness.unmount();
    }

    pub fn set_table_number_input(&mut self, raw: &str) {
        self.draft.table_number = clamp_count(raw);
    }

    pub fn set_menu_item(&mut self, name: &str) {
        self.draft.menu_item = name.to_string();
    }

    pub fn set_quantity_input(&mut self, raw: &str) {
        self.draft.quantity = clamp_count(raw);
    }

    pub fn begin_submit(&mut self) -> Option<Submission<OrderDraft>> {
        if !self.liveness.is_mounted() {
            warn!("order submitted to an unmounted page, ignoring");
            return None;
        }
        if !self.draft.is_complete() {
            debug!("order draft has no menu item selected");
            return None;
        }
        let Some(token) = self.submit.begin(self.liveness.current()) else {
            warn!("order submission already in flight, ignoring");
            return None;
        };
        self.error = None;
        Some(Submission {
            token,
            draft: self.draft.clone(),
        })
    }

    pub fn finish_submit(&mut self, token: RequestToken, res: Result<Order, FetchError>) {
        if !self.submit.finish(token) || !self.liveness.accepts(token.epoch()) {
            debug!("discarding stale order submission result");
            return;
        }
        match res {
            Ok(order) => {
                self.orders.insert(0, order);
                self.draft = OrderDraft::default();
            }
            Err(e) => self.fail(ViewError::PlaceOrder, e),
        }
    }

    fn fail(&mut self, kind: ViewError, cause: FetchError) {
        error!("{}, {}", kind, cause);
        self.error = Some(kind);
    }
}

/// Mounts the page, menu items and orders are fetched independently.
pub(crate) async fn mount<A: ProxyApi>(view: &Mutex<OrderingView>, api: &A) {
    let epoch = view.lock().await.begin_mount();
    let menu_items = async {
        let res = api.list_menu_items().await;
        view.lock().await.finish_menu_items(epoch, res);
    };
    let orders = async {
        let res = api.list_orders().await;
        view.lock().await.finish_orders(epoch, res);
    };
    tokio::join!(menu_items, orders);
}

/// Posts the current draft, returns false when nothing was sent.
pub(crate) async fn place_order<A: ProxyApi>(view: &Mutex<OrderingView>, api: &A) -> bool {
    let Some(Submission { token, draft }) = view.lock().await.begin_submit() else {
        return false;
    };
    let res = api.place_order(&draft).await;
    view.lock().await.finish_submit(token, res);
    true
}

#[cfg(test)]
mod test {
    use reqwest::StatusCode;
    use super::*;
    use crate::server::api::fake::{latte, network_error, pending_order, FakeProxyApi};

    async fn mounted(api: &FakeProxyApi) -> Mutex<OrderingView> {
        let view = Mutex::new(OrderingView::default());
        mount(&view, api).await;
        view
    }

    #[actix_web::test]
    async fn mount_fills_both_lists() {
        let api = FakeProxyApi::default()
            .with_menu_items(Ok(vec![latte()]))
            .with_orders(Ok(vec![pending_order(3)]));
        let view = mounted(&api).await;
        let v = view.lock().await;
        assert_eq!(v.menu_items(), &[latte()]);
        assert_eq!(v.orders(), &[pending_order(3)]);
        assert_eq!(v.error(), None);
    }

    #[actix_web::test]
    async fn failed_orders_fetch_does_not_block_menu_items() {
        let api = FakeProxyApi::default()
            .with_menu_items(Ok(vec![latte()]))
            .with_orders(Err(network_error()));
        let view = mounted(&api).await;
        let v = view.lock().await;
        assert_eq!(v.menu_items(), &[latte()]);
        assert!(v.orders().is_empty());
        assert_eq!(v.error(), Some(ViewError::FetchOrders));
    }

    #[actix_web::test]
    async fn failed_menu_items_fetch_does_not_block_orders() {
        let api = FakeProxyApi::default()
            .with_menu_items(Err(FetchError::Status(StatusCode::NOT_FOUND)))
            .with_orders(Ok(vec![pending_order(3)]));
        let view = mounted(&api).await;
        let v = view.lock().await;
        assert!(v.menu_items().is_empty());
        assert_eq!(v.orders(), &[pending_order(3)]);
        assert_eq!(v.error(), Some(ViewError::FetchMenuItems));
    }

    #[actix_web::test]
    async fn placed_order_goes_first_and_draft_resets() {
        let api = FakeProxyApi::default()
            .with_menu_items(Ok(vec![latte()]))
            .with_orders(Ok(vec![pending_order(3)]))
            .with_placed_order(Ok(pending_order(10)));
        let view = mounted(&api).await;
        {
            let mut v = view.lock().await;
            v.set_table_number_input("2");
            v.set_menu_item("Latte");
            v.set_quantity_input("3");
        }

        assert!(place_order(&view, &api).await);

        let v = view.lock().await;
        assert_eq!(v.orders()[0].cells(), ["10", "2", "Latte", "3", "pending"]);
        assert_eq!(v.orders().len(), 2);
        assert_eq!(v.draft(), &OrderDraft::default());
        assert!(!v.is_submitting());
        assert_eq!(
            api.posted_orders.lock().unwrap().as_slice(),
            &[OrderDraft {
                table_number: 2,
                menu_item: "Latte".to_string(),
                quantity: 3,
            }]
        );
    }

    #[actix_web::test]
    async fn failed_order_keeps_list() {
        let api = FakeProxyApi::default()
            .with_menu_items(Ok(vec![latte()]))
            .with_orders(Ok(vec![pending_order(3)]))
            .with_placed_order(Err(FetchError::Status(StatusCode::UNPROCESSABLE_ENTITY)));
        let view = mounted(&api).await;
        view.lock().await.set_menu_item("Latte");

        assert!(place_order(&view, &api).await);

        let v = view.lock().await;
        assert_eq!(v.orders(), &[pending_order(3)]);
        assert_eq!(v.error(), Some(ViewError::PlaceOrder));
        assert!(!v.is_submitting());
        assert_eq!(v.draft().menu_item, "Latte");
    }

    #[actix_web::test]
    async fn empty_selection_is_never_posted() {
        let api = FakeProxyApi::default()
            .with_menu_items(Ok(vec![latte()]))
            .with_orders(Ok(vec![]));
        let view = mounted(&api).await;

        assert!(!place_order(&view, &api).await);
        assert!(api.posted_orders.lock().unwrap().is_empty());
    }

    #[test]
    fn counts_below_one_are_clamped() {
        let mut view = OrderingView::default();
        view.set_table_number_input("0");
        view.set_quantity_input("0");
        assert_eq!(view.draft().table_number, 1);
        assert_eq!(view.draft().quantity, 1);
        view.set_table_number_input("-7");
        view.set_quantity_input("abc");
        assert_eq!(view.draft().table_number, 1);
        assert_eq!(view.draft().quantity, 1);
    }

    #[test]
    fn duplicate_submit_is_refused() {
        let mut view = OrderingView::default();
        view.begin_mount();
        view.set_menu_item("Latte");
        let first = view.begin_submit().unwrap();
        assert!(view.begin_submit().is_none());
        view.finish_submit(first.token, Ok(pending_order(10)));
        assert_eq!(view.orders().len(), 1);
        assert!(!view.is_submitting());
    }

    #[test]
    fn submission_from_previous_mount_is_discarded() {
        let mut view = OrderingView::default();
        view.begin_mount();
        view.set_menu_item("Latte");
        let stale = view.begin_submit().unwrap();
        let epoch = view.begin_mount();
        view.finish_orders(epoch, Ok(vec![]));

        view.finish_submit(stale.token, Ok(pending_order(10)));
        assert!(view.orders().is_empty());
        assert!(!view.is_submitting());
    }

    #[test]
    fn fetch_after_unmount_is_discarded() {
        let mut view = OrderingView::default();
        let epoch = view.begin_mount();
        view.unmount();
        view.finish_menu_items(epoch, Ok(vec![latte()]));
        view.finish_orders(epoch, Err(network_error()));
        assert!(view.menu_items().is_empty());
        assert_eq!(view.error(), None);
    }
}
