use anyhow::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;

mod config;
mod demo;
mod hosts;
mod routes;

use crate::config::PageConfig;
use crate::routes::Route;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("pinkkush", LevelFilter::Info)
        .filter_module("pinkkush_core", LevelFilter::Debug)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = PageConfig::load()?;
    log::info!("[Shell] config: {config:?}");

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    match Route::resolve(&path) {
        Route::Page => demo::run(config).await,
        Route::NotFound => {
            log::warn!("[Shell] no route for {path:?}");
            println!("404: nothing grows here");
            Ok(())
        }
    }
}
