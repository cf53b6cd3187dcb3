pub mod purchases;
pub mod vouchers;
