use async_trait::async_trait;
use crate::ServiceError;

/// External payment gateway
#[async_trait]
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` whole currency units to the account
    async fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError>;
}
