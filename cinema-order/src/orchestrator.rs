use std::sync::Arc;

use cinema_catalog::{PricingConfig, PricingEngine};
use cinema_core::{
    DiscountService, PurchaseError, PurchaseRequest, PurchaseResult, SeatReservationService,
    TicketPaymentService,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::discount::DiscountApplier;
use crate::rules::RuleValidator;

/// What a completed purchase reserved and charged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub account_id: i64,
    pub seats_reserved: u32,
    pub gross_fee: u32,
    pub net_fee: u32,
    pub discount_percentage: Option<u32>,
}

/// Entry point for ticket purchases.
///
/// Validates the request, prices it, then reserves seats and takes payment, in
/// that order. Holds no mutable state, so one instance can serve concurrent
/// purchases. A payment failure after a successful reservation leaves the
/// reservation in place.
#[derive(Clone)]
pub struct PurchaseCoordinator {
    reservation: Arc<dyn SeatReservationService>,
    payment: Arc<dyn TicketPaymentService>,
    discounts: DiscountApplier,
    validator: RuleValidator,
    pricing: PricingEngine,
}

impl PurchaseCoordinator {
    pub fn new(
        reservation: Arc<dyn SeatReservationService>,
        payment: Arc<dyn TicketPaymentService>,
    ) -> Self {
        Self {
            reservation,
            payment,
            discounts: DiscountApplier::disabled(),
            validator: RuleValidator::default(),
            pricing: PricingEngine::default(),
        }
    }

    pub fn with_discount_service(mut self, service: Arc<dyn DiscountService>) -> Self {
        self.discounts = DiscountApplier::new(service);
        self
    }

    /// Replace the default fee schedule and seat cap
    pub fn with_pricing(mut self, config: PricingConfig) -> Self {
        self.validator = RuleValidator::new(config.max_seat_tickets);
        self.pricing = PricingEngine::new(config);
        self
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    #[tracing::instrument(skip_all, fields(account_id = request.account_id()))]
    pub async fn purchase(&self, request: &PurchaseRequest) -> PurchaseResult<PurchaseSummary> {
        if let Err(err) = self.validator.validate(request) {
            warn!(reason = %err, "Purchase rejected");
            return Err(err);
        }

        let account_id = request.account_id();
        let seats = self.pricing.seat_count(request);
        let gross = self
            .pricing
            .gross_fee(request)
            .inspect_err(|err| warn!(reason = %err, "Purchase rejected"))?;
        let discount = self
            .discounts
            .apply(gross, account_id, request.discount_code())
            .await?;

        self.reservation
            .reserve_seat(account_id, seats)
            .await
            .map_err(PurchaseError::Reservation)?;

        self.payment
            .make_payment(account_id, discount.net)
            .await
            .map_err(|err| {
                warn!(seats, amount = discount.net, "Payment failed after seats were reserved");
                PurchaseError::Payment(err)
            })?;

        info!(seats, gross, net = discount.net, "Purchase completed");

        Ok(PurchaseSummary {
            account_id,
            seats_reserved: seats,
            gross_fee: gross,
            net_fee: discount.net,
            discount_percentage: discount.percentage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Call, CallLog, MockDiscountService, MockPayment, MockSeatReservation};
    use cinema_core::{TicketLine, TicketType};

    fn coordinator(log: &CallLog) -> PurchaseCoordinator {
        PurchaseCoordinator::new(
            Arc::new(MockSeatReservation::new(log.clone())),
            Arc::new(MockPayment::new(log.clone())),
        )
    }

    #[tokio::test]
    async fn test_reserves_before_paying() {
        let log = CallLog::default();
        let request = PurchaseRequest::new(3, vec![TicketLine::new(TicketType::Adult, 2)]);

        coordinator(&log).purchase(&request).await.unwrap();

        assert_eq!(
            log.calls(),
            vec![
                Call::Reserve { account_id: 3, seats: 2 },
                Call::Pay { account_id: 3, amount: 40 },
            ]
        );
    }

    #[tokio::test]
    async fn test_summary_reports_discount() {
        let log = CallLog::default();
        let service = MockDiscountService::new(log.clone()).with_code("HALF", 50);
        let coordinator = coordinator(&log).with_discount_service(Arc::new(service));
        let request = PurchaseRequest::new(
            8,
            vec![
                TicketLine::new(TicketType::Adult, 1),
                TicketLine::new(TicketType::Child, 1),
            ],
        )
        .with_discount_code("HALF");

        let summary = coordinator.purchase(&request).await.unwrap();

        assert_eq!(
            summary,
            PurchaseSummary {
                account_id: 8,
                seats_reserved: 2,
                gross_fee: 30,
                net_fee: 15,
                discount_percentage: Some(50),
            }
        );
    }

    #[tokio::test]
    async fn test_custom_pricing_changes_fees_and_cap() {
        let log = CallLog::default();
        let coordinator = coordinator(&log).with_pricing(PricingConfig {
            max_seat_tickets: 2,
            adult_fee: 30,
            child_fee: 12,
            infant_fee: 5,
        });

        let ok = PurchaseRequest::new(
            1,
            vec![
                TicketLine::new(TicketType::Adult, 1),
                TicketLine::new(TicketType::Infant, 1),
            ],
        );
        let summary = coordinator.purchase(&ok).await.unwrap();
        assert_eq!(summary.net_fee, 35);

        let too_many = PurchaseRequest::new(1, vec![TicketLine::new(TicketType::Adult, 3)]);
        let err = coordinator.purchase(&too_many).await.unwrap_err();
        assert_eq!(err.reason(), Some("Total tickets exceeded 2"));
    }

    #[tokio::test]
    async fn test_unchargeable_total_stops_before_side_effects() {
        let log = CallLog::default();
        let coordinator = coordinator(&log).with_pricing(PricingConfig {
            infant_fee: 1_000,
            ..PricingConfig::default()
        });
        let request = PurchaseRequest::new(
            1,
            vec![
                TicketLine::new(TicketType::Adult, 1),
                TicketLine::new(TicketType::Infant, 5_000_000),
            ],
        );

        let err = coordinator.purchase(&request).await.unwrap_err();

        assert_eq!(err.reason(), Some("Total fee exceeds the maximum chargeable amount"));
        assert!(log.calls().is_empty());
    }

    #[tokio::test]
    async fn test_discount_outage_stops_before_side_effects() {
        let log = CallLog::default();
        let service = MockDiscountService::new(log.clone()).unavailable();
        let coordinator = coordinator(&log).with_discount_service(Arc::new(service));
        let request = PurchaseRequest::new(1, vec![TicketLine::new(TicketType::Adult, 1)])
            .with_discount_code("X");

        let err = coordinator.purchase(&request).await.unwrap_err();

        assert!(matches!(err, PurchaseError::Discount(_)));
        assert!(log.reservations().is_empty());
        assert!(log.payments().is_empty());
    }
}
