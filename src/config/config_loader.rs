use anyhow::{Ok, Result};

use super::config_model::{Database, DotEnvyConfig, Server, Shop, Stripe};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let stripe = Stripe {
        secret_key: std::env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY is invalid"),
        webhook_secret: std::env::var("STRIPE_WEBHOOK_SECRET")
            .expect("STRIPE_WEBHOOK_SECRET is invalid"),
        success_url: std::env::var("CHECKOUT_SUCCESS_URL").expect("CHECKOUT_SUCCESS_URL is invalid"),
        cancel_url: std::env::var("CHECKOUT_CANCEL_URL").expect("CHECKOUT_CANCEL_URL is invalid"),
    };

    let shop = Shop {
        recent_purchases_limit: std::env::var("RECENT_PURCHASES_LIMIT")
            .expect("RECENT_PURCHASES_LIMIT is invalid")
            .parse()?,
    };

    Ok(DotEnvyConfig {
        server,
        database,
        stripe,
        shop,
    })
}
