//! Domain layer: pure value types and capability traits (no IO).

pub mod compute;
pub mod identity;
pub mod money;
pub mod ports;
