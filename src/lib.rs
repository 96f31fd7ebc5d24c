pub mod app;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod shared;

use clap::Parser;

pub use domain::skin::{
    entry::SkinEntry, pack::SkinPack, shape::ShapeVariant, texture_grid::TextureGrid,
};
pub use services::{
    compositor::composite, pack_deserializer::deserialize, pack_serializer::serialize,
};
pub use shared::{error::SkinPackError, result::AppResult};

pub fn run() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = app::cli::Cli::parse();
    let config = infrastructure::filesystem::config::load_config().unwrap_or_else(|err| {
        log::warn!("Ignoring configuration: {err}");
        Default::default()
    });

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|err| format!("Could not start async runtime: {err}"))?;
    runtime.block_on(app::cli::execute(cli, config))
}
