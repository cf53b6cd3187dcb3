use super::*;
use crate::domain::repositories::{
    checkout_gateway::MockCheckoutGateway, purchases::MockPurchaseRepository,
};
use serde_json::json;
use std::collections::HashMap;

fn event(event_type: &str, object: serde_json::Value) -> StripeEvent {
    serde_json::from_value(json!({
        "id": "evt_test_1",
        "type": event_type,
        "data": { "object": object }
    }))
    .unwrap()
}

fn session_object() -> serde_json::Value {
    json!({
        "id": "cs_test_1",
        "customer_email": "gracz1@example.com",
        "metadata": { "nick": "Gracz1", "product": "VIP_7D" }
    })
}

fn usecase(
    repository: MockPurchaseRepository,
    gateway: MockCheckoutGateway,
) -> StripeWebhookUseCase<MockPurchaseRepository> {
    StripeWebhookUseCase::new(Arc::new(repository), Arc::new(gateway))
}

#[tokio::test]
async fn checkout_completed_records_one_succeeded_purchase() {
    let mut repository = MockPurchaseRepository::new();
    repository
        .expect_record_purchase()
        .times(1)
        .withf(|entity| {
            entity.nick == "Gracz1"
                && entity.product == "VIP_7D"
                && entity.email.as_deref() == Some("gracz1@example.com")
                && entity.quantity == 1
                && entity.payment_status == "succeeded"
                && !entity.processed
                && entity.stripe_event_id == "evt_test_1"
        })
        .returning(|_| Ok(Some(42)));

    let usecase = usecase(repository, MockCheckoutGateway::new());
    let outcome = usecase
        .process_event(event(CHECKOUT_COMPLETED, session_object()))
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::Recorded(42));
}

#[tokio::test]
async fn async_payment_failed_records_failed_purchase() {
    let mut repository = MockPurchaseRepository::new();
    repository
        .expect_record_purchase()
        .withf(|entity| entity.payment_status == "failed" && entity.nick == "Gracz1")
        .returning(|_| Ok(Some(7)));

    let usecase = usecase(repository, MockCheckoutGateway::new());
    let outcome = usecase
        .process_event(event(ASYNC_PAYMENT_FAILED, session_object()))
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::Recorded(7));
}

#[tokio::test]
async fn missing_product_metadata_writes_nothing() {
    // No expectations registered: any ledger call would panic the mock.
    let usecase = usecase(MockPurchaseRepository::new(), MockCheckoutGateway::new());

    let object = json!({
        "id": "cs_test_1",
        "customer_email": "gracz1@example.com",
        "metadata": { "nick": "Gracz1" }
    });
    let result = usecase.process_event(event(CHECKOUT_COMPLETED, object)).await;

    assert!(matches!(result, Err(WebhookError::MissingMetadata("product"))));
}

#[tokio::test]
async fn blank_nick_metadata_is_treated_as_missing() {
    let usecase = usecase(MockPurchaseRepository::new(), MockCheckoutGateway::new());

    let object = json!({
        "metadata": { "nick": "   ", "product": "VIP_7D" }
    });
    let result = usecase
        .process_event(event(ASYNC_PAYMENT_FAILED, object))
        .await;

    assert!(matches!(result, Err(WebhookError::MissingMetadata("nick"))));
}

#[tokio::test]
async fn payment_intent_failed_recovers_session_and_records_failure() {
    let mut gateway = MockCheckoutGateway::new();
    gateway
        .expect_find_session_by_payment_intent()
        .withf(|payment_intent_id| payment_intent_id == "pi_test_1")
        .returning(|_| {
            Ok(Some(CheckoutSessionObject {
                id: Some("cs_test_1".to_string()),
                customer_email: Some("gracz1@example.com".to_string()),
                payment_intent: Some("pi_test_1".to_string()),
                metadata: HashMap::from([
                    ("nick".to_string(), "Gracz1".to_string()),
                    ("product".to_string(), "VIP_7D".to_string()),
                ]),
            }))
        });

    let mut repository = MockPurchaseRepository::new();
    repository
        .expect_record_purchase()
        .withf(|entity| entity.payment_status == "failed" && entity.product == "VIP_7D")
        .returning(|_| Ok(Some(9)));

    let usecase = usecase(repository, gateway);
    let outcome = usecase
        .process_event(event(PAYMENT_INTENT_FAILED, json!({ "id": "pi_test_1" })))
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::Recorded(9));
}

#[tokio::test]
async fn payment_intent_without_session_fails_upstream_lookup() {
    let mut gateway = MockCheckoutGateway::new();
    gateway
        .expect_find_session_by_payment_intent()
        .returning(|_| Ok(None));

    let usecase = usecase(MockPurchaseRepository::new(), gateway);
    let result = usecase
        .process_event(event(PAYMENT_INTENT_FAILED, json!({ "id": "pi_test_1" })))
        .await;

    assert!(
        matches!(result, Err(WebhookError::UpstreamLookupFailure(id)) if id == "pi_test_1")
    );
}

#[tokio::test]
async fn duplicate_delivery_is_acknowledged_without_second_row() {
    let mut repository = MockPurchaseRepository::new();
    repository.expect_record_purchase().returning(|_| Ok(None));

    let usecase = usecase(repository, MockCheckoutGateway::new());
    let outcome = usecase
        .process_event(event(CHECKOUT_COMPLETED, session_object()))
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::DuplicateDelivery);
}

#[tokio::test]
async fn unrecognized_event_type_is_a_no_op() {
    let usecase = usecase(MockPurchaseRepository::new(), MockCheckoutGateway::new());
    let outcome = usecase
        .process_event(event("invoice.paid", json!({})))
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::Ignored);
}

#[tokio::test]
async fn store_failure_surfaces_as_internal_error() {
    let mut repository = MockPurchaseRepository::new();
    repository
        .expect_record_purchase()
        .returning(|_| Err(anyhow::anyhow!("connection pool exhausted")));

    let usecase = usecase(repository, MockCheckoutGateway::new());
    let result = usecase
        .process_event(event(CHECKOUT_COMPLETED, session_object()))
        .await;

    assert!(matches!(result, Err(WebhookError::Internal(_))));
}

#[tokio::test]
async fn invalid_signature_aborts_before_any_dispatch() {
    let mut gateway = MockCheckoutGateway::new();
    gateway
        .expect_verify_webhook_signature()
        .returning(|_, _| Err(anyhow::anyhow!("invalid webhook signature")));

    let usecase = usecase(MockPurchaseRepository::new(), gateway);
    let result = usecase.verify_and_process(b"{}", "t=1,v1=bad").await;

    assert!(matches!(result, Err(WebhookError::InvalidSignature(_))));
}

#[tokio::test]
async fn verify_and_process_dispatches_the_verified_event() {
    let mut gateway = MockCheckoutGateway::new();
    gateway
        .expect_verify_webhook_signature()
        .withf(|payload, signature_header| {
            payload == b"raw-payload" && signature_header.starts_with("t=")
        })
        .returning(|_, _| Ok(event(CHECKOUT_COMPLETED, session_object())));

    let mut repository = MockPurchaseRepository::new();
    repository.expect_record_purchase().returning(|_| Ok(Some(1)));

    let usecase = usecase(repository, gateway);
    let outcome = usecase
        .verify_and_process(b"raw-payload", "t=123,v1=abc")
        .await
        .unwrap();

    assert_eq!(outcome, WebhookOutcome::Recorded(1));
}
