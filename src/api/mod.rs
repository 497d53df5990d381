//! Backend API failure policy
//!
//! The backend is an opaque JSON service. This module holds only the parts of
//! talking to it that are ours to decide: how an HTTP status maps onto a
//! user-facing failure and when a request is worth retrying.

pub mod failure;
pub mod retry;

pub use failure::ApiFailure;
pub use retry::RetryPolicy;
