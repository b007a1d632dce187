use std::sync::Arc;

use cinema_catalog::apply_discount;
use cinema_core::{Discount, DiscountError, DiscountService, PurchaseError, PurchaseResult};
use tracing::{debug, warn};

/// Result of running a gross fee through the discount applier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountOutcome {
    pub net: u32,
    /// Percentage actually applied, if any
    pub percentage: Option<u32>,
}

impl DiscountOutcome {
    fn full_price(gross: u32) -> Self {
        Self { net: gross, percentage: None }
    }
}

/// Applies promo code discounts to a gross fee.
///
/// A bad promo code never fails the purchase: the customer pays full price and
/// a warning is logged instead.
#[derive(Clone, Default)]
pub struct DiscountApplier {
    service: Option<Arc<dyn DiscountService>>,
}

impl DiscountApplier {
    pub fn new(service: Arc<dyn DiscountService>) -> Self {
        Self { service: Some(service) }
    }

    /// An applier that always charges full price
    pub fn disabled() -> Self {
        Self { service: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.service.is_some()
    }

    pub async fn apply(
        &self,
        gross: u32,
        account_id: i64,
        code: Option<&str>,
    ) -> PurchaseResult<DiscountOutcome> {
        let (service, code) = match (&self.service, code) {
            (Some(service), Some(code)) => (service, code),
            _ => return Ok(DiscountOutcome::full_price(gross)),
        };

        let discount = service
            .get_discount_percentage(account_id, code)
            .await
            .or_else(|err| recover_invalid_code(err, account_id, code))
            .map_err(PurchaseError::Discount)?;

        match discount {
            Some(Discount { percentage }) => {
                let net = apply_discount(gross, percentage);
                debug!(account_id, code, percentage, gross, net, "Discount applied");
                Ok(DiscountOutcome { net, percentage: Some(percentage) })
            }
            None => {
                debug!(account_id, code, "No discount for account");
                Ok(DiscountOutcome::full_price(gross))
            }
        }
    }
}

/// Turns an invalid code into "no discount"; every other lookup error is kept.
fn recover_invalid_code(
    err: DiscountError,
    account_id: i64,
    code: &str,
) -> Result<Option<Discount>, DiscountError> {
    match err {
        DiscountError::InvalidCode(reason) => {
            warn!(account_id, code, %reason, "Invalid discount code ignored, charging full price");
            Ok(None)
        }
        other => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{CallLog, MockDiscountService};

    fn applier_with(service: MockDiscountService) -> DiscountApplier {
        DiscountApplier::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_no_service_means_full_price() {
        let applier = DiscountApplier::disabled();
        let outcome = applier.apply(100, 1, Some("X")).await.unwrap();

        assert_eq!(outcome, DiscountOutcome { net: 100, percentage: None });
        assert!(!applier.is_enabled());
    }

    #[tokio::test]
    async fn test_no_code_skips_lookup() {
        let log = CallLog::default();
        let applier = applier_with(MockDiscountService::new(log.clone()).with_code("X", 50));

        let outcome = applier.apply(100, 1, None).await.unwrap();

        assert_eq!(outcome.net, 100);
        assert!(log.calls().is_empty());
    }

    #[tokio::test]
    async fn test_percentage_applied_with_truncation() {
        let log = CallLog::default();
        let applier = applier_with(MockDiscountService::new(log).with_code("X", 15));

        let outcome = applier.apply(70, 1, Some("X")).await.unwrap();

        assert_eq!(outcome, DiscountOutcome { net: 60, percentage: Some(15) });
    }

    #[tokio::test]
    async fn test_invalid_code_is_swallowed() {
        let log = CallLog::default();
        let applier = applier_with(MockDiscountService::new(log.clone()));

        let outcome = applier.apply(20, 1, Some("BAD")).await.unwrap();

        assert_eq!(outcome.net, 20);
        assert_eq!(log.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_absent_discount_is_full_price() {
        let log = CallLog::default();
        let applier = applier_with(MockDiscountService::new(log).with_absent_code("MEMBERS"));

        let outcome = applier.apply(40, 9, Some("MEMBERS")).await.unwrap();

        assert_eq!(outcome, DiscountOutcome { net: 40, percentage: None });
    }

    #[tokio::test]
    async fn test_unavailable_service_propagates() {
        let log = CallLog::default();
        let applier = applier_with(MockDiscountService::new(log).unavailable());

        let err = applier.apply(20, 1, Some("X")).await.unwrap_err();

        assert!(matches!(err, PurchaseError::Discount(DiscountError::Unavailable(_))));
    }
}
