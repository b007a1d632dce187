use cinema_catalog::MAX_SEAT_TICKETS;
use cinema_core::{PurchaseError, PurchaseRequest, PurchaseResult, TicketType};

/// Business rules a purchase must pass before anything is reserved or charged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRule {
    /// Account id must be strictly positive
    ValidAccount,
    /// Adults plus children may not exceed the seat cap
    SeatLimit,
    /// A non-empty purchase needs an adult line
    AdultPresent,
}

impl PurchaseRule {
    /// Evaluation order. The first failing rule decides the reported reason.
    pub const ORDER: [PurchaseRule; 3] = [
        PurchaseRule::ValidAccount,
        PurchaseRule::SeatLimit,
        PurchaseRule::AdultPresent,
    ];
}

/// Rule bank for purchase requests
#[derive(Debug, Clone, Copy)]
pub struct RuleValidator {
    max_seat_tickets: u32,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new(MAX_SEAT_TICKETS)
    }
}

impl RuleValidator {
    pub fn new(max_seat_tickets: u32) -> Self {
        Self { max_seat_tickets }
    }

    /// Run every rule in [`PurchaseRule::ORDER`]
    pub fn validate(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        for rule in PurchaseRule::ORDER {
            self.check(rule, request)?;
        }
        Ok(())
    }

    pub fn check(&self, rule: PurchaseRule, request: &PurchaseRequest) -> PurchaseResult<()> {
        match rule {
            PurchaseRule::ValidAccount => self.validate_account(request),
            PurchaseRule::SeatLimit => self.validate_seat_limit(request),
            PurchaseRule::AdultPresent => self.validate_adult_present(request),
        }
    }

    pub fn validate_account(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        if request.account_id() <= 0 {
            return Err(PurchaseError::invalid(format!(
                "Invalid account id of {}",
                request.account_id()
            )));
        }
        Ok(())
    }

    pub fn validate_seat_limit(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        let mut seats: u32 = 0;
        for line in request.lines() {
            if line.ticket_type().occupies_seat() {
                seats = seats.saturating_add(line.quantity());
            }
            // Stop at the first line that tips us over
            if seats > self.max_seat_tickets {
                return Err(PurchaseError::invalid(format!(
                    "Total tickets exceeded {}",
                    self.max_seat_tickets
                )));
            }
        }
        Ok(())
    }

    /// Checks for an adult *line*; an adult line with quantity zero still counts.
    pub fn validate_adult_present(&self, request: &PurchaseRequest) -> PurchaseResult<()> {
        let has_adult = request
            .lines()
            .iter()
            .any(|line| line.ticket_type() == TicketType::Adult);

        if !has_adult && !request.lines().is_empty() {
            return Err(PurchaseError::invalid(
                "At least one adult is required when purchasing tickets",
            ));
        }
        Ok(())
    }
}
