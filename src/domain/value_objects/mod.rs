pub mod checkout;
pub mod enums;
pub mod purchases;
pub mod stripe_webhook;
pub mod vouchers;
