use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use crate::server::controller::error::CustomError;
use crate::server::controller::{html, session_for};
use crate::server::render;
use crate::server::state::{AppState, Session};
use crate::server::view::menu_management::{add_menu_item, mount};

/// Raw inputs of the add menu item form, an unchecked checkbox is absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AddMenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: Option<String>,
}

async fn rendered(data: &AppState, session_id: String, session: &Session) -> Result<HttpResponse, CustomError> {
    let page = render::menu_management::render(data.templates(), &*session.menu_management().lock().await);
    html(session_id, page)
}

#[get("/menu-management")]
/// menu management page, fetches menu items
pub(crate) async fn get_menu_management_page(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let (session_id, session) = session_for(&req, &data).await;
    session.ordering().lock().await.unmount();
    mount(session.menu_management(), data.api()).await;
    rendered(&data, session_id, &session).await
}

#[post("/menu-management")]
/// add a menu item from the submitted form
pub(crate) async fn post_menu_item_form(
    req: HttpRequest,
    form: web::Form<AddMenuItemForm>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
    let (session_id, session) = session_for(&req, &data).await;
    session.ordering().lock().await.unmount();
    if !session.menu_management().lock().await.is_mounted() {
        mount(session.menu_management(), data.api()).await;
    }
    {
        let mut view = session.menu_management().lock().await;
        // a submission in flight keeps its draft
        if !view.is_submitting() {
            view.set_name(&form.name);
            view.set_description(&form.description);
            view.set_price_input(&form.price);
            view.set_available(form.available.is_some());
        }
    }
    add_menu_item(session.menu_management(), data.api()).await;
    rendered(&data, session_id, &session).await
}
