//! main file for the server

pub(crate) mod api;
mod controller;
pub mod model;
mod render;
mod routes;
mod state;
mod view;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use crate::server::api::http::HttpProxyApi;
use crate::server::model::config::ServerConfig;
use crate::server::render::Templates;
use crate::server::state::AppState;

/// Run the server
pub async fn run(ServerConfig { addr, proxy_api }: ServerConfig) -> anyhow::Result<()> {
    let api = HttpProxyApi::new(&proxy_api)?;
    let templates = Templates::new()?;
    let state = web::Data::new(AppState::new(api, templates));
    info!("serving pages on {}, proxy api at {}", addr, proxy_api.base_url);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
        .bind(addr)?
        .run()
        .await?;
    Ok(())
}
