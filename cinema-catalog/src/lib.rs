pub mod pricing;

pub use pricing::{
    apply_discount, PricingConfig, PricingEngine, ADULT_FEE, CHILD_FEE, INFANT_FEE,
    MAX_SEAT_TICKETS,
};
