use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Percentage discount granted to an account for a promo code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Discount {
    /// Expected in `0..=100`; not range-checked
    pub percentage: u32,
}

impl Discount {
    pub fn new(percentage: u32) -> Self {
        Self { percentage }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiscountError {
    #[error("Invalid discount code: {0}")]
    InvalidCode(String),

    #[error("Discount service unavailable: {0}")]
    Unavailable(String),
}

/// Looks up promo code discounts
#[async_trait]
pub trait DiscountService: Send + Sync {
    /// `Ok(None)` when the code is valid but grants nothing to this account
    async fn get_discount_percentage(
        &self,
        account_id: i64,
        code: &str,
    ) -> Result<Option<Discount>, DiscountError>;
}
