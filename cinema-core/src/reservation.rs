use async_trait::async_trait;
use crate::ServiceError;

/// External seat booking system
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for the account
    async fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError>;
}
