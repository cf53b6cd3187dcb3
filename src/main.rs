use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use vayro_shop::config::config_loader;
use vayro_shop::domain::repositories::checkout_gateway::CheckoutGateway;
use vayro_shop::infrastructure::axum_http::http_serve;
use vayro_shop::infrastructure::postgres::postgres_connection;
use vayro_shop::infrastructure::stripe::stripe_client::StripeClient;
use vayro_shop::observability;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("backend")?;

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    let stripe = &dotenvy_env.stripe;
    let checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync> = Arc::new(StripeClient::new(
        stripe.secret_key.clone(),
        stripe.webhook_secret.clone(),
        stripe.success_url.clone(),
        stripe.cancel_url.clone(),
    ));

    http_serve::start(
        Arc::new(dotenvy_env),
        Arc::new(postgres_pool),
        checkout_gateway,
    )
    .await?;

    Ok(())
}
