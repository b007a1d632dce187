use cinema_core::{PurchaseError, PurchaseRequest, PurchaseResult, TicketType};
use serde::{Deserialize, Serialize};

/// Seat-occupying tickets allowed in a single purchase
pub const MAX_SEAT_TICKETS: u32 = 20;
pub const ADULT_FEE: u32 = 20;
pub const CHILD_FEE: u32 = 10;
pub const INFANT_FEE: u32 = 0;

const FEE_OVERFLOW_REASON: &str = "Total fee exceeds the maximum chargeable amount";

/// Fee schedule and purchase limits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConfig {
    pub max_seat_tickets: u32,
    pub adult_fee: u32,
    pub child_fee: u32,
    pub infant_fee: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            max_seat_tickets: MAX_SEAT_TICKETS,
            adult_fee: ADULT_FEE,
            child_fee: CHILD_FEE,
            infant_fee: INFANT_FEE,
        }
    }
}

impl PricingConfig {
    pub fn fee_for(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_fee,
            TicketType::Child => self.child_fee,
            TicketType::Infant => self.infant_fee,
        }
    }
}

/// Seat and fee accounting for purchase requests.
///
/// Both calculations are pure: they read the request and nothing else.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Seats to reserve: adults and children only, infants share a seat
    pub fn seat_count(&self, request: &PurchaseRequest) -> u32 {
        request
            .lines()
            .iter()
            .filter(|line| line.ticket_type().occupies_seat())
            .fold(0u32, |total, line| total.saturating_add(line.quantity()))
    }

    /// Sum of quantity x fee over every line, before any discount.
    ///
    /// Fails rather than undercharging when the total does not fit in a `u32`.
    pub fn gross_fee(&self, request: &PurchaseRequest) -> PurchaseResult<u32> {
        // Infants are priced too, so a non-zero infant fee only needs a config change
        request.lines().iter().try_fold(0u32, |total, line| {
            line.quantity()
                .checked_mul(self.config.fee_for(line.ticket_type()))
                .and_then(|line_fee| total.checked_add(line_fee))
                .ok_or_else(|| PurchaseError::invalid(FEE_OVERFLOW_REASON))
        })
    }
}

/// Net amount after taking `percentage` off `gross`.
///
/// The reduction is `gross * percentage / 100` truncated toward zero, so the
/// customer never receives a fraction of a unit more than advertised.
pub fn apply_discount(gross: u32, percentage: u32) -> u32 {
    let reduction = u64::from(gross) * u64::from(percentage) / 100;
    let reduction = u32::try_from(reduction).unwrap_or(u32::MAX);
    gross.saturating_sub(reduction)
}
