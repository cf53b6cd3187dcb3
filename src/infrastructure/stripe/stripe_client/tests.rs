use super::*;

const WEBHOOK_SECRET: &str = "whsec_test_secret";
const TIMESTAMP: &str = "1700000000";

const PAYLOAD: &[u8] = br#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"id":"cs_1","customer_email":"gracz1@example.com","metadata":{"nick":"Gracz1","product":"VIP_7D"}}}}"#;

fn client() -> StripeClient {
    StripeClient::new(
        "sk_test_123".to_string(),
        WEBHOOK_SECRET.to_string(),
        "https://sklep.example/sukces".to_string(),
        "https://sklep.example/anulowano".to_string(),
    )
}

fn sign(secret: &str, timestamp: &str, payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

fn signature_header(payload: &[u8]) -> String {
    format!(
        "t={},v1={}",
        TIMESTAMP,
        sign(WEBHOOK_SECRET, TIMESTAMP, payload)
    )
}

#[test]
fn valid_signature_verifies_and_parses_the_event() {
    let event = client()
        .verify_webhook_signature(PAYLOAD, &signature_header(PAYLOAD))
        .unwrap();

    assert_eq!(event.id, "evt_1");
    assert_eq!(event.type_, "checkout.session.completed");

    let session = event.checkout_session().unwrap();
    assert_eq!(session.metadata.get("nick").unwrap(), "Gracz1");
    assert_eq!(session.metadata.get("product").unwrap(), "VIP_7D");
    assert_eq!(session.customer_email.as_deref(), Some("gracz1@example.com"));
}

#[test]
fn single_byte_change_in_payload_is_rejected() {
    let header = signature_header(PAYLOAD);

    let mut tampered = PAYLOAD.to_vec();
    tampered[10] ^= 0x01;

    let result = client().verify_webhook_signature(&tampered, &header);
    assert!(result.is_err());
}

#[test]
fn single_character_change_in_signature_is_rejected() {
    let mut header = signature_header(PAYLOAD);
    let last = header.pop().unwrap();
    header.push(if last == '0' { '1' } else { '0' });

    let result = client().verify_webhook_signature(PAYLOAD, &header);
    assert!(result.is_err());
}

#[test]
fn signature_computed_with_another_secret_is_rejected() {
    let header = format!(
        "t={},v1={}",
        TIMESTAMP,
        sign("whsec_other_secret", TIMESTAMP, PAYLOAD)
    );

    let result = client().verify_webhook_signature(PAYLOAD, &header);
    assert!(result.is_err());
}

#[test]
fn header_without_timestamp_is_rejected() {
    let header = format!("v1={}", sign(WEBHOOK_SECRET, TIMESTAMP, PAYLOAD));
    assert!(client().verify_webhook_signature(PAYLOAD, &header).is_err());
}

#[test]
fn header_without_v1_signature_is_rejected() {
    let header = format!("t={}", TIMESTAMP);
    assert!(client().verify_webhook_signature(PAYLOAD, &header).is_err());
}

#[test]
fn correctly_signed_garbage_payload_is_still_rejected() {
    let payload = b"not a json payload";
    let result = client().verify_webhook_signature(payload, &signature_header(payload));
    assert!(result.is_err());
}
