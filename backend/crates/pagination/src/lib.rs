//! Offset pagination primitives shared by gateway endpoints.
//!
//! Pagination here is deliberately plain: a clamped `skip`/`limit` pair, a
//! contiguous sub-range of an already-materialised collection, and a
//! [`PageInfo`] record describing what was returned. There are no cursors
//! and no failure modes; requests outside the valid range are clamped, not
//! rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bounds applied when clamping page requests.
///
/// The default limit is used when a request omits `limit`; the maximum caps
/// whatever the caller asked for. Both bounds must be at least 1 and the
/// default must not exceed the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    default_limit: usize,
    max_limit: usize,
}

/// Validation errors returned by [`PageLimits::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageLimitsError {
    /// One of the bounds is zero.
    #[error("page limits must be at least 1")]
    ZeroLimit,
    /// The default limit is larger than the maximum.
    #[error("default page limit {default} exceeds maximum {max}")]
    DefaultExceedsMax {
        /// Configured default limit.
        default: usize,
        /// Configured maximum limit.
        max: usize,
    },
}

impl PageLimits {
    /// Default page size applied when a request omits `limit`.
    pub const DEFAULT_LIMIT: usize = 10;
    /// Default upper bound on the page size.
    pub const DEFAULT_MAX_LIMIT: usize = 100;

    /// Construct validated limits.
    ///
    /// # Errors
    ///
    /// Returns [`PageLimitsError`] when either bound is zero or the default
    /// exceeds the maximum.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageLimits;
    ///
    /// let limits = PageLimits::new(10, 100)?;
    /// assert_eq!(limits.default_limit(), 10);
    /// assert_eq!(limits.max_limit(), 100);
    /// # Ok::<(), pagination::PageLimitsError>(())
    /// ```
    pub const fn new(default_limit: usize, max_limit: usize) -> Result<Self, PageLimitsError> {
        if default_limit == 0 || max_limit == 0 {
            return Err(PageLimitsError::ZeroLimit);
        }
        if default_limit > max_limit {
            return Err(PageLimitsError::DefaultExceedsMax {
                default: default_limit,
                max: max_limit,
            });
        }
        Ok(Self {
            default_limit,
            max_limit,
        })
    }

    /// Page size applied when a request omits `limit`.
    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Upper bound on the page size.
    #[must_use]
    pub const fn max_limit(&self) -> usize {
        self.max_limit
    }
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::DEFAULT_MAX_LIMIT,
        }
    }
}

/// A page request after boundary clamping.
///
/// Invariants: `limit` is within `[1, max_limit]`; `skip` is non-negative by
/// construction. Instances are only produced by [`PageRequest::clamped`], so
/// downstream slicing never needs to re-validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: usize,
    limit: usize,
}

impl PageRequest {
    /// Clamp raw query values into a valid request.
    ///
    /// Negative `skip` becomes 0. A missing `limit` falls back to the
    /// configured default; anything below 1 is raised to 1 and anything
    /// above the maximum is capped.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageLimits, PageRequest};
    ///
    /// let limits = PageLimits::default();
    /// let request = PageRequest::clamped(-3, Some(1000), &limits);
    /// assert_eq!(request.skip(), 0);
    /// assert_eq!(request.limit(), limits.max_limit());
    /// ```
    #[must_use]
    pub fn clamped(skip: i64, limit: Option<i64>, limits: &PageLimits) -> Self {
        let clamped_skip = usize::try_from(skip).unwrap_or(0);
        let clamped_limit = limit.map_or_else(
            || limits.default_limit(),
            |raw| usize::try_from(raw).unwrap_or(0).clamp(1, limits.max_limit()),
        );
        Self {
            skip: clamped_skip,
            limit: clamped_limit,
        }
    }

    /// Number of leading items skipped.
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.skip
    }

    /// Maximum number of items returned.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

/// Counts describing one returned page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Number of leading items skipped.
    pub skip: usize,
    /// Requested page size after clamping.
    pub limit: usize,
    /// Size of the full collection before slicing.
    pub total: usize,
    /// Number of items actually returned; always
    /// `min(limit, total.saturating_sub(skip))`.
    pub returned: usize,
}

/// Slice a collection into one contiguous page.
///
/// Returns the items in `[skip, skip + limit)` (clipped to the collection)
/// together with the matching [`PageInfo`]. The slice is empty when `skip`
/// reaches past the end; order is preserved.
///
/// # Examples
/// ```
/// use pagination::{PageLimits, PageRequest, paginate};
///
/// let limits = PageLimits::default();
/// let request = PageRequest::clamped(1, Some(1), &limits);
/// let (page, info) = paginate(vec!["a", "b"], &request);
/// assert_eq!(page, vec!["b"]);
/// assert_eq!(info.total, 2);
/// assert_eq!(info.returned, 1);
/// ```
#[must_use]
pub fn paginate<T>(mut items: Vec<T>, request: &PageRequest) -> (Vec<T>, PageInfo) {
    let total = items.len();
    let start = request.skip().min(total);
    let end = request.skip().saturating_add(request.limit()).min(total);
    items.truncate(end);
    let page = items.split_off(start);
    let info = PageInfo {
        skip: request.skip(),
        limit: request.limit(),
        total,
        returned: page.len(),
    };
    (page, info)
}
