use serde::{Deserialize, Serialize};

/// Ticket categories sold at the box office
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    /// Sits on an adult's lap, so never occupies a seat
    Infant,
}

impl TicketType {
    /// Whether a ticket of this type needs its own seat
    pub fn occupies_seat(self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }
}

/// One `(type, quantity)` pair within a purchase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketLine {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketLine {
    pub fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self { ticket_type, quantity }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Immutable purchase request from an (already authenticated) account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRequest {
    account_id: i64,
    #[serde(rename = "tickets", default)]
    lines: Vec<TicketLine>,
    #[serde(default)]
    discount_code: Option<String>,
}

impl PurchaseRequest {
    pub fn new(account_id: i64, lines: Vec<TicketLine>) -> Self {
        Self {
            account_id,
            lines,
            discount_code: None,
        }
    }

    pub fn with_discount_code(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }

    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    /// Lines in the order the caller supplied them
    pub fn lines(&self) -> &[TicketLine] {
        &self.lines
    }

    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref()
    }
}
