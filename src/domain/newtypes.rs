// SPDX-License-Identifier: MPL-2.0
//! Display newtypes.

use crate::config::{DEFAULT_OTHER_WORKS_LIMIT, MAX_OTHER_WORKS_LIMIT, MIN_OTHER_WORKS_LIMIT};

/// Number of works listed in the "other works" strip of a detail page.
///
/// Always within 1–12; out-of-range values are clamped.
///
/// # Example
///
/// ```
/// use folio_index::domain::OtherWorksLimit;
///
/// assert_eq!(OtherWorksLimit::default().value(), 3);
/// assert_eq!(OtherWorksLimit::new(0).value(), 1);
/// assert_eq!(OtherWorksLimit::new(50).value(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtherWorksLimit(usize);

impl OtherWorksLimit {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_OTHER_WORKS_LIMIT, MAX_OTHER_WORKS_LIMIT))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for OtherWorksLimit {
    fn default() -> Self {
        Self(DEFAULT_OTHER_WORKS_LIMIT)
    }
}
