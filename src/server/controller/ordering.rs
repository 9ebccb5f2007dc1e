use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use crate::server::controller::error::CustomError;
use crate::server::controller::{html, session_for};
use crate::server::render;
use crate::server::state::{AppState, Session};
use crate::server::view::ordering::{mount, place_order};

/// Raw inputs of the place order form, clamped by the view.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PlaceOrderForm {
    pub table_number: String,
    pub menu_item: String,
    pub quantity: String,
}

async fn rendered(data: &AppState, session_id: String, session: &Session) -> Result<HttpResponse, CustomError> {
    let page = render::ordering::render(data.templates(), &*session.ordering().lock().await);
    html(session_id, page)
}

#[get("/")]
/// ordering page, fetches menu items and orders
pub(crate) async fn get_ordering_page(req: HttpRequest, data: web::Data<AppState>) -> Result<HttpResponse, CustomError> {
    let (session_id, session) = session_for(&req, &data).await;
    session.menu_management().lock().await.unmount();
    mount(session.ordering(), data.api()).await;
    rendered(&data, session_id, &session).await
}

#[post("/")]
/// place an order from the submitted form
pub(crate) async fn post_order_form(
    req: HttpRequest,
    form: web::Form<PlaceOrderForm>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
    let (session_id, session) = session_for(&req, &data).await;
    session.menu_management().lock().await.unmount();
    if !session.ordering().lock().await.is_mounted() {
        mount(session.ordering(), data.api()).await;
    }
    {
        let mut view = session.ordering().lock().await;
        // a submission in flight keeps its draft
        if !view.is_submitting() {
            view.set_table_number_input(&form.table_number);
            view.set_menu_item(&form.menu_item);
            view.set_quantity_input(&form.quantity);
        }
    }
    place_order(session.ordering(), data.api()).await;
    rendered(&data, session_id, &session).await
}
