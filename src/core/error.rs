use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum JqError {
    /// An authenticated operation was attempted without a session token.
    ///
    /// Raised locally, before any request is sent.
    #[error("not authenticated: acquire a token first")]
    Unauthenticated,

    /// An error occurred during an HTTP request (connection failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The first line of a tabular response is not the expected column header.
    ///
    /// The service reports business errors as plain text with a 200 status, so `found`
    /// is usually its human-readable error message.
    #[error("unexpected response header (expected `{expected}`): {found}")]
    HeaderMismatch {
        /// The header the endpoint is documented to return.
        expected: String,
        /// The first line actually received.
        found: String,
    },

    /// A data row does not have as many fields as the header has columns.
    #[error("row {line} has {found} fields, header has {expected}")]
    RowArityMismatch {
        /// 1-based line number within the response body.
        line: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },

    /// A field declared numeric could not be parsed.
    #[error("column `{column}` on row {line}: cannot parse `{value}` as a number")]
    NumericConversion {
        /// Column name from the header.
        column: String,
        /// The raw field text.
        value: String,
        /// 1-based line number within the response body.
        line: usize,
    },

    /// The method name is not in the endpoint table.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// A parameter the endpoint requires was not supplied.
    #[error("method `{method}` requires parameter `{param}`")]
    MissingParam {
        /// The remote method name.
        method: String,
        /// The parameter that was not supplied.
        param: String,
    },

    /// The requested decoding does not fit the endpoint's declared response shape.
    #[error("method `{method}`: {reason}")]
    ShapeMismatch {
        /// The remote method name.
        method: String,
        /// What did not line up.
        reason: String,
    },

    /// A scalar response could not be interpreted.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request envelope could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JqError {
    /// Returns `true` for failures of the network round-trip itself
    /// (connection, timeout, or non-success HTTP status).
    pub fn is_transport(&self) -> bool {
        matches!(self, JqError::Http(_) | JqError::Status { .. })
    }

    /// Returns `true` when the error was caused by the shape or content of a response body.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            JqError::HeaderMismatch { .. }
                | JqError::RowArityMismatch { .. }
                | JqError::NumericConversion { .. }
                | JqError::Data(_)
        )
    }
}
