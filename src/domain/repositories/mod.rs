pub mod checkout_gateway;
pub mod purchases;
pub mod vouchers;
