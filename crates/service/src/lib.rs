//! Service layer providing the ad operations on top of models.
//! - Every operation takes the connection it runs on, so callers decide
//!   whether it is the pool or a per-request transaction.
//! - Errors are flattened into [`errors::ServiceError`].

pub mod errors;
pub mod ad_service;
#[cfg(test)]
pub mod test_support;
