use super::identity::Identity;
use super::money::Amount;

/// Capability for charging and refunding against an identity.
///
/// Implementations are stateless and synchronous: every call is independent,
/// and the processor only ever borrows the identity.
pub trait PaymentProcessor {
    /// Reports the outcome of charging `amount` against `identity`.
    fn process(&self, identity: &Identity, amount: Amount) -> bool;

    /// Reports the outcome of returning `amount` to `identity`.
    fn refund(&self, identity: &Identity, amount: Amount) -> bool;
}

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
