//! Process-wide "last range" slot
//!
//! Chained formatting code often wants "the range I produced last" without
//! threading it through every call. Recording is opt-in: nothing in this crate
//! writes to the slot unless the caller uses [`remember`] or
//! [`RangeAddress::tracked`].
//!
//! The slot is behind a mutex, so it is safe to touch from several threads,
//! but concurrent producers overwrite each other. Treat it as advisory.

use crate::RangeAddress;
use lazy_static::lazy_static;
use std::sync::{Mutex, MutexGuard};

lazy_static! {
    static ref LAST_RANGE: Mutex<Option<RangeAddress>> = Mutex::new(None);
}

fn slot() -> MutexGuard<'static, Option<RangeAddress>> {
    // The slot holds a plain value, so a poisoned lock is still usable
    LAST_RANGE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Record `range` as the most recent one
pub fn remember(range: &RangeAddress) {
    *slot() = Some(range.clone());
}

/// A copy of the most recently recorded range
pub fn last_range() -> Option<RangeAddress> {
    slot().clone()
}

/// Clear the slot, returning what it held
pub fn forget() -> Option<RangeAddress> {
    slot().take()
}

impl RangeAddress {
    /// Record this range in the last-range slot and hand it back
    ///
    /// # Examples
    /// ```
    /// use sheet_range::{last, RangeAddress};
    ///
    /// let header = RangeAddress::parse("Sheet1!A1:F1").unwrap().tracked();
    /// assert_eq!(last::last_range(), Some(header));
    /// ```
    pub fn tracked(self) -> Self {
        remember(&self);
        self
    }
}
