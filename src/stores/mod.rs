//! In-memory state containers
//!
//! Each store owns one immutable snapshot. Transitions are pure methods on the
//! snapshot that return the next one; the store wrapper applies actions and
//! is passed explicitly to the code that needs it. Derived fields are
//! recomputed from the new snapshot rather than patched.

pub mod etf;
pub mod notifications;

pub use etf::{EtfAction, EtfState, EtfStore};
pub use notifications::{NotificationAction, NotificationState, NotificationStore};
