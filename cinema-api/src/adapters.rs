//! Stand-ins for the external seat booking and payment systems. They accept
//! every request and log it.

use async_trait::async_trait;
use cinema_core::{SeatReservationService, ServiceError, TicketPaymentService};
use tracing::info;

pub struct LoggingSeatReservation;

#[async_trait]
impl SeatReservationService for LoggingSeatReservation {
    async fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError> {
        info!(account_id, seat_count, "Seats reserved");
        Ok(())
    }
}

pub struct LoggingPaymentGateway;

#[async_trait]
impl TicketPaymentService for LoggingPaymentGateway {
    async fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError> {
        info!(account_id, amount, "Payment taken");
        Ok(())
    }
}
