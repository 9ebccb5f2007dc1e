use log::{debug, error, warn};
use tokio::sync::Mutex;
use crate::server::api::{FetchError, ProxyApi};
use crate::server::model::menu_item::{clamp_price, MenuItem, MenuItemDraft};
use crate::server::view::{Epoch, Liveness, RequestToken, SubmitGuard, Submission, ViewError};

/// State behind the `/menu-management` page
#[derive(Debug, Default)]
pub(crate) struct MenuManagementView {
    /// most recent first once items get added
    menu_items: Vec<MenuItem>,
    draft: MenuItemDraft,
    error: Option<ViewError>,
    submit: SubmitGuard,
    liveness: Liveness,
}

impl MenuManagementView {
    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn draft(&self) -> &MenuItemDraft {
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

    /// Starts a fresh page, anything still in flight for the previous one is dropped.
    pub fn begin_mount(&mut self) -> Epoch {
        self.menu_items.clear();
        self.draft = MenuItemDraft::default();
        self.error = None;
        self.submit.reset();
        self.liveness.mount()
    }

    pub fn finish_mount(&mut self, epoch: Epoch, res: Result<Vec<MenuItem>, FetchError>) {
        if !self.liveness.accepts(epoch) {
            debug!("discarding menu items fetched for a stale page");
            return;
        }
        match res {
            Ok(items) => self.menu_items = items,
            Err(e) => self.fail(ViewError::FetchMenuItems, e),
        }
    }

    pub fn unmount(&mut self) {
        self.submit.reset();
        self.liveness.unmount();
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
    }

    pub fn set_price_input(&mut self, raw: &str) {
        self.draft.price = clamp_price(raw);
    }

    pub fn set_available(&mut self, available: bool) {
        self.draft.available = available;
    }

    /// Hands out the draft to post, None when the form may not be submitted now.
    pub fn begin_submit(&mut self) -> Option<Submission<MenuItemDraft>> {
        if !self.liveness.is_mounted() {
            warn!("menu item submitted to an unmounted page, ignoring");
            return None;
        }
        if !self.draft.is_complete() {
            debug!("menu item draft is missing name or description");
            return None;
        }
        let Some(token) = self.submit.begin(self.liveness.current()) else {
            warn!("menu item submission already in flight, ignoring");
            return None;
        };
        self.error = None;
        Some(Submission {
            token,
            draft: self.draft.clone(),
        })
    }

    pub fn finish_submit(&mut self, token: RequestToken, res: Result<MenuItem, FetchError>) {
        if !self.submit.finish(token) || !self.liveness.accepts(token.epoch()) {
            debug!("discarding stale menu item submission result");
            return;
        }
        match res {
            Ok(item) => {
                self.menu_items.insert(0, item);
                self.draft = MenuItemDraft::default();
            }
            Err(e) => self.fail(ViewError::AddMenuItem, e),
        }
    }

    fn fail(&mut self, kind: ViewError, cause: FetchError) {
        error!("{}, {}", kind, cause);
        self.error = Some(kind);
    }
}

/// Mounts the page: fetches the menu items.
pub(crate) async fn mount<A: ProxyApi>(view: &Mutex<MenuManagementView>, api: &A) {
    let epoch = view.lock().await.begin_mount();
    let res = api.list_menu_items().await;
    view.lock().await.finish_mount(epoch, res);
}

/// Posts the current draft, returns false when nothing was sent.
pub(crate) async fn add_menu_item<A: ProxyApi>(view: &Mutex<MenuManagementView>, api: &A) -> bool {
    let Some(Submission { token, draft }) = view.lock().await.begin_submit() else {
        return false;
    };
    let res = api.create_menu_item(&draft).await;
    view.lock().await.finish_submit(token, res);
    true
}
