use std::{collections::HashMap, sync::Arc};

use anyhow::Result;
use tracing::info;

use crate::domain::{
    repositories::checkout_gateway::CheckoutGateway,
    value_objects::{checkout::CreateCheckoutSessionModel, enums::products::Product},
};

pub struct CheckoutUseCase {
    checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>,
}

impl CheckoutUseCase {
    pub fn new(checkout_gateway: Arc<dyn CheckoutGateway + Send + Sync>) -> Self {
        Self { checkout_gateway }
    }

    /// Passthrough to the gateway's hosted checkout. The `{nick, product}`
    /// metadata attached here is what correlates the later webhook events.
    pub async fn create_session(&self, product: Product, nick: &str, email: &str) -> Result<String> {
        let mut metadata = HashMap::new();
        metadata.insert("nick".to_string(), nick.to_string());
        metadata.insert("product".to_string(), product.key().to_string());

        let session = CreateCheckoutSessionModel {
            product_name: format!("{} (Nick: {})", product.display_name(), nick),
            amount_minor: product.price_minor(),
            currency: "pln".to_string(),
            customer_email: email.to_string(),
            metadata,
        };

        let url = self.checkout_gateway.create_checkout_session(session).await?;
        info!(nick, product = product.key(), "checkout: session created");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::checkout_gateway::MockCheckoutGateway;

    #[tokio::test]
    async fn create_session_attaches_correlation_metadata() {
        let mut gateway = MockCheckoutGateway::new();
        gateway
            .expect_create_checkout_session()
            .withf(|session| {
                session.metadata.get("nick").map(String::as_str) == Some("Gracz1")
                    && session.metadata.get("product").map(String::as_str) == Some("VIP_7D")
                    && session.product_name == "Ranga VIP na 7 dni (Nick: Gracz1)"
                    && session.amount_minor == 1500
                    && session.currency == "pln"
                    && session.customer_email == "gracz1@example.com"
            })
            .returning(|_| Ok("https://checkout.stripe.com/c/pay/cs_test_123".to_string()));

        let usecase = CheckoutUseCase::new(Arc::new(gateway));
        let url = usecase
            .create_session(Product::Vip7d, "Gracz1", "gracz1@example.com")
            .await
            .unwrap();

        assert_eq!(url, "https://checkout.stripe.com/c/pay/cs_test_123");
    }

    #[tokio::test]
    async fn create_session_propagates_gateway_failure() {
        let mut gateway = MockCheckoutGateway::new();
        gateway
            .expect_create_checkout_session()
            .returning(|_| Err(anyhow::anyhow!("stripe is down")));

        let usecase = CheckoutUseCase::new(Arc::new(gateway));
        let result = usecase
            .create_session(Product::PremiumCase, "Gracz2", "gracz2@example.com")
            .await;

        assert!(result.is_err());
    }
}
