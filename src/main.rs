//! application entry point

use crate::server::model::config::ServerConfig;
use log::{info, warn};
use std::env;
use std::io;
use std::net::SocketAddrV4;
use std::path::Path;
use std::str::FromStr;
use derive_more::Display;

mod server;

const DOTENV_PATH: &str = ".env.dev";
const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";

#[actix_web::main()]
async fn main() -> io::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => None, // load in CI
        Env::Dev => Some(dotenvy::from_path(Path::new(DOTENV_PATH))),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Some(Err(e)) = dotenv {
        warn!("failed to load envs from {}, using process env only, {}", DOTENV_PATH, e);
    }

    // c. run app
    let host = env::var("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
    let addr = SocketAddrV4::from_str(host.as_str()).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("failed to parse HOST={host}, {e}"))
    })?;
    let config = ServerConfig::new(addr, env::var("DB_CONN_STR").ok());

    info!("App is starting in env={}", env);

    server::run(config).await
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
