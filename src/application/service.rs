use crate::domain::identity::Identity;
use crate::domain::money::Amount;
use crate::domain::ports::PaymentProcessor;

/// Stub payment processor.
///
/// Every operation succeeds; the only side effect is an observational log
/// line. Holds no state, so successive calls are independent of each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentService;

impl PaymentService {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentProcessor for PaymentService {
    fn process(&self, identity: &Identity, amount: Amount) -> bool {
        tracing::info!(amount = %amount, name = identity.name(), "processing payment");
        true
    }

    fn refund(&self, identity: &Identity, amount: Amount) -> bool {
        tracing::info!(amount = %amount, name = identity.name(), "refunding payment");
        true
    }
}
