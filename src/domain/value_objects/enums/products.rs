use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Items sold through the checkout endpoints. Prices are minor units (grosze).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Product {
    Vip7d,
    Svip7d,
    PremiumCase,
}

impl Product {
    /// Catalog key carried in checkout metadata and purchase rows.
    pub fn key(&self) -> &'static str {
        match self {
            Product::Vip7d => "VIP_7D",
            Product::Svip7d => "SVIP_7D",
            Product::PremiumCase => "PREMIUM_CASE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Product::Vip7d => "Ranga VIP na 7 dni",
            Product::Svip7d => "Ranga SVIP na 7 dni",
            Product::PremiumCase => "Premium Case",
        }
    }

    pub fn price_minor(&self) -> i64 {
        match self {
            Product::Vip7d => 1500,
            Product::Svip7d => 3000,
            Product::PremiumCase => 1000,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
