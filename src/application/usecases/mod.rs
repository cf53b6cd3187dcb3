pub mod checkout;
pub mod purchases;
pub mod stripe_webhook;
pub mod vouchers;
