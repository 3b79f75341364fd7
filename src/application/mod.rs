//! Application layer containing the payment service implementation.

pub mod service;
