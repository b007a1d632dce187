//! In-memory collaborators that record every call, for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cinema_core::{
    Discount, DiscountError, DiscountService, SeatReservationService, ServiceError,
    TicketPaymentService,
};

/// A call made to one of the external collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Reserve { account_id: i64, seats: u32 },
    Pay { account_id: i64, amount: u32 },
    DiscountLookup { account_id: i64, code: String },
}

/// Shared, ordered record of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn reservations(&self) -> Vec<(i64, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reserve { account_id, seats } => Some((account_id, seats)),
                _ => None,
            })
            .collect()
    }

    pub fn payments(&self) -> Vec<(i64, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Pay { account_id, amount } => Some((account_id, amount)),
                _ => None,
            })
            .collect()
    }
}

pub struct MockSeatReservation {
    log: CallLog,
    fail: bool,
}

impl MockSeatReservation {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    /// Records the call, then reports a booking system outage
    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

#[async_trait]
impl SeatReservationService for MockSeatReservation {
    async fn reserve_seat(&self, account_id: i64, seat_count: u32) -> Result<(), ServiceError> {
        self.log.push(Call::Reserve { account_id, seats: seat_count });
        if self.fail {
            return Err("Simulated seat booking failure".into());
        }
        Ok(())
    }
}

pub struct MockPayment {
    log: CallLog,
    fail: bool,
}

impl MockPayment {
    pub fn new(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    /// Records the call, then declines the payment
    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

#[async_trait]
impl TicketPaymentService for MockPayment {
    async fn make_payment(&self, account_id: i64, amount: u32) -> Result<(), ServiceError> {
        self.log.push(Call::Pay { account_id, amount });
        if self.fail {
            return Err("Simulated payment gateway failure".into());
        }
        Ok(())
    }
}

/// Discount lookup backed by a fixed code table. Unknown codes are invalid.
pub struct MockDiscountService {
    log: CallLog,
    codes: HashMap<String, Option<Discount>>,
    unavailable: bool,
}

impl MockDiscountService {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            codes: HashMap::new(),
            unavailable: false,
        }
    }

    pub fn with_code(mut self, code: &str, percentage: u32) -> Self {
        self.codes.insert(code.to_string(), Some(Discount::new(percentage)));
        self
    }

    /// A known code that grants nothing
    pub fn with_absent_code(mut self, code: &str) -> Self {
        self.codes.insert(code.to_string(), None);
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

#[async_trait]
impl DiscountService for MockDiscountService {
    async fn get_discount_percentage(
        &self,
        account_id: i64,
        code: &str,
    ) -> Result<Option<Discount>, DiscountError> {
        self.log.push(Call::DiscountLookup {
            account_id,
            code: code.to_string(),
        });
        if self.unavailable {
            return Err(DiscountError::Unavailable("discount service timed out".to_string()));
        }
        self.codes
            .get(code)
            .copied()
            .ok_or_else(|| DiscountError::InvalidCode(code.to_string()))
    }
}
