//! Application layer containing the payment flow orchestration.
//!
//! This module defines the `CheckoutController`, which drives a single
//! payment attempt from user intent to terminal status: request
//! construction, capability probe, sheet presentation raced against the
//! client-side timeout, and outcome classification.

pub mod controller;
