pub mod rules;
pub mod discount;
pub mod orchestrator;
pub mod mock;

pub use rules::{PurchaseRule, RuleValidator};
pub use discount::{DiscountApplier, DiscountOutcome};
pub use orchestrator::{PurchaseCoordinator, PurchaseSummary};
