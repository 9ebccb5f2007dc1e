use actix_web::web;
use crate::server::controller::error::form_error_handler;
use crate::server::controller::menu_management::{get_menu_management_page, post_menu_item_form};
use crate::server::controller::ordering::{get_ordering_page, post_order_form};

/// `/` ordering page and `/menu-management` page, each accepts its own form
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(get_ordering_page)
        .service(post_order_form)
        .service(get_menu_management_page)
        .service(post_menu_item_form);
}
