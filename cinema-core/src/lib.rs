pub mod request;
pub mod reservation;
pub mod payment;
pub mod discount;

pub use request::{PurchaseRequest, TicketLine, TicketType};
pub use discount::{Discount, DiscountError, DiscountService};
pub use payment::TicketPaymentService;
pub use reservation::SeatReservationService;

/// Error type returned by external collaborators (reservation, payment)
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    /// Business rule violation. The reason is rendered verbatim.
    #[error("{0}")]
    InvalidPurchase(String),
    #[error("Seat reservation failed: {0}")]
    Reservation(ServiceError),
    #[error("Payment failed: {0}")]
    Payment(ServiceError),
    #[error("Discount lookup failed: {0}")]
    Discount(DiscountError),
}

impl PurchaseError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        PurchaseError::InvalidPurchase(reason.into())
    }

    /// Reason string when this is a rule violation
    pub fn reason(&self) -> Option<&str> {
        match self {
            PurchaseError::InvalidPurchase(reason) => Some(reason),
            _ => None,
        }
    }
}

pub type PurchaseResult<T> = Result<T, PurchaseError>;
