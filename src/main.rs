//! application entry point

use crate::server::model::config::{ProxyApiConfig, ServerConfig};
use anyhow::Context;
use log::info;
use std::env;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use derive_more::Display;

mod server;

const DOTENV_LOADING_FAILED_MSG: &str = "failed to load envs from dotenv files, aborting";
const HOST_PARSING_FAILED_MSG: &str = "failed to parse HOST, aborting";
const TIMEOUT_PARSING_FAILED_MSG: &str = "failed to parse PROXY_API_TIMEOUT_SECS, aborting";
const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_PROXY_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_PROXY_API_TIMEOUT_SECS: u64 = 10;

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    match env {
        Env::Prod | Env::Stg => {} // load in CI
        Env::Dev => {
            dotenvy::from_path(Path::new(".env.dev")).context(DOTENV_LOADING_FAILED_MSG)?;
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let config = config_from_env()?;

    info!("App is starting in env={}", env);

    server::run(config).await
}

fn config_from_env() -> anyhow::Result<ServerConfig> {
    let addr = SocketAddrV4::from_str(
        env::var("HOST")
            .unwrap_or(DEFAULT_HOST_ADDR.to_string())
            .as_str(),
    )
    .context(HOST_PARSING_FAILED_MSG)?;
    let timeout = match env::var("PROXY_API_TIMEOUT_SECS") {
        Ok(secs) => secs.parse::<u64>().context(TIMEOUT_PARSING_FAILED_MSG)?,
        Err(_) => DEFAULT_PROXY_API_TIMEOUT_SECS,
    };
    let proxy_api = ProxyApiConfig::new(
        env::var("PROXY_API_URL").unwrap_or(DEFAULT_PROXY_API_URL.to_string()),
        Duration::from_secs(timeout),
    );
    Ok(ServerConfig::new(addr, proxy_api))
}

#[derive(Debug, Display, PartialEq)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
