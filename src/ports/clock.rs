//! Clock port - injectable time source.
//!
//! Formation timestamps, TTL arithmetic, and quota windows all read time
//! through this trait so tests can control it deterministically instead of
//! sleeping against the wall clock.

use crate::domain::foundation::Timestamp;

/// Source of the current moment.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
