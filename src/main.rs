mod model;
mod server;

use dotenvy::dotenv;
use tracing::info;

use crate::server::{
    config::Config, scheduler::deletion::DeletionScheduler, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cache = startup::connect_to_cache(&config).await;
    let mailer = startup::setup_mailer(&config)?;
    let item_api = startup::setup_item_api(&config);
    let tokens = server::token::TokenCodec::new(&config.jwt_secret);

    let scheduler = DeletionScheduler::start(db.clone()).await?;

    info!("Starting server on {}", config.listen_addr);

    let state = AppState::new(db, cache, mailer, item_api, tokens, scheduler, config.clone());
    let router = server::router::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| server::error::AppError::InternalError(e.to_string()))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| server::error::AppError::InternalError(e.to_string()))?;

    Ok(())
}
