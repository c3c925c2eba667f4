//! Uniform response envelope and its wrap rules.
//!
//! Every collection endpoint answers with the same four fields; the filtered
//! endpoint extends them with pagination counts. The code decides the HTTP
//! status at the inbound boundary, so the rules here are the whole error
//! surface: 500 when the fetch failed, 404 when the upstream held no
//! records, 200 otherwise.

use pagination::{PageInfo, PageRequest, paginate};
use serde::{Deserialize, Serialize};

const MESSAGE_OK: &str = "ok";
const MESSAGE_NOT_FOUND: &str = "not found";
const MESSAGE_INTERNAL_ERROR: &str = "internal error";

/// Uniform wrapper around response data.
///
/// Invariant: `success == false` implies `data` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request produced data.
    pub success: bool,
    /// HTTP-style status code: 200, 404, or 500.
    pub code: u16,
    /// Human-readable outcome message.
    pub message: String,
    /// Payload records; empty unless `success`.
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data` unchanged in order.
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            code: 200,
            message: MESSAGE_OK.to_owned(),
            data,
        }
    }

    /// Envelope for an upstream that returned zero records.
    pub fn not_found() -> Self {
        Self {
            success: false,
            code: 404,
            message: MESSAGE_NOT_FOUND.to_owned(),
            data: Vec::new(),
        }
    }

    /// Envelope for a failed fetch or mapping.
    pub fn internal_error() -> Self {
        Self {
            success: false,
            code: 500,
            message: MESSAGE_INTERNAL_ERROR.to_owned(),
            data: Vec::new(),
        }
    }

    /// Apply the wrap rules to a mapped collection.
    ///
    /// `fetch_failed` wins over everything and discards `records`; an empty
    /// collection maps to 404; anything else is served as-is with 200.
    pub fn wrap(records: Vec<T>, fetch_failed: bool) -> Self {
        if fetch_failed {
            Self::internal_error()
        } else if records.is_empty() {
            Self::not_found()
        } else {
            Self::ok(records)
        }
    }

    /// Slice `data` into one page and attach the counts.
    ///
    /// The code and message are kept from the full collection, so a `skip`
    /// past the end of a non-empty collection stays 200 with `returned`
    /// zero.
    pub fn paged(self, request: &PageRequest) -> PagedEnvelope<T> {
        let Self {
            success,
            code,
            message,
            data,
        } = self;
        let (page, pagination) = paginate(data, request);
        PagedEnvelope {
            success,
            code,
            message,
            data: page,
            pagination,
        }
    }
}

/// Envelope extended with pagination counts, served by the filtered
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedEnvelope<T> {
    /// Whether the request produced data.
    pub success: bool,
    /// HTTP-style status code: 200, 404, or 500.
    pub code: u16,
    /// Human-readable outcome message.
    pub message: String,
    /// The requested page of records.
    pub data: Vec<T>,
    /// Counts describing the page.
    pub pagination: PageInfo,
}
