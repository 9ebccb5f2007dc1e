use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::debug;
use rand::Rng;
use tokio::sync::Mutex;
use crate::server::api::http::HttpProxyApi;
use crate::server::render::Templates;
use crate::server::view::menu_management::MenuManagementView;
use crate::server::view::ordering::OrderingView;

/// cookie carrying the session id
pub(crate) const SESSION_COOKIE: &str = "cafe_session";
/// sessions idle longer than this are dropped when a new one is created
const SESSION_IDLE_TTL: Duration = Duration::from_secs(60 * 60);

/// State of both pages for one browser.
#[derive(Debug, Default)]
pub(crate) struct Session {
    ordering: Mutex<OrderingView>,
    menu_management: Mutex<MenuManagementView>,
}

impl Session {
    pub fn ordering(&self) -> &Mutex<OrderingView> {
        &self.ordering
    }

    pub fn menu_management(&self) -> &Mutex<MenuManagementView> {
        &self.menu_management
    }
}

struct SessionEntry {
    session: Arc<Session>,
    last_seen: Instant,
}

pub(crate) struct AppState {
    api: HttpProxyApi,
    templates: Templates,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl AppState {
    pub fn new(api: HttpProxyApi, templates: Templates) -> Self {
        Self {
            api,
            templates,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn api(&self) -> &HttpProxyApi {
        &self.api
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Looks up the session `id`, or starts a new one when absent or unknown.
    pub async fn session(&self, id: Option<&str>) -> (String, Arc<Session>) {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = now;
                return (id.to_string(), entry.session.clone());
            }
        }

        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < SESSION_IDLE_TTL);
        let id = new_session_id();
        let session = Arc::new(Session::default());
        sessions.insert(
            id.clone(),
            SessionEntry {
                session: session.clone(),
                last_seen: now,
            },
        );
        debug!("started session, {} active", sessions.len());
        (id, session)
    }
}

fn new_session_id() -> String {
    format!("{:032x}", rand::thread_rng().gen::<u128>())
}
