//! Static catalog of the remote methods.
//!
//! Every operation the service offers is the same POST with a different `method` name,
//! so an operation is fully described by its parameter vocabulary and response shape.
//! Adding a method means adding a row to [`ENDPOINTS`].

use crate::core::{JqError, Params};

/// Column header of the securities listing and security-info responses.
pub const SECURITY_HEADER: &str = "code,display_name,name,start_date,end_date,type";
/// Column header of OHLCV bar responses.
pub const BAR_HEADER: &str = "date,open,close,high,low,volume,money";
/// Column header of the current-price response.
pub const PRICE_HEADER: &str = "code,current";

/// What a method's response body looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// CSV text whose first line is exactly this header.
    Table(&'static str),
    /// Opaque text (a scalar, or a table whose columns are not fixed), passed through untouched.
    Text,
}

/// Metadata for one remote method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Value of the `method` field.
    pub method: &'static str,
    /// Parameters that must be present (possibly empty) in every call.
    pub params: &'static [&'static str],
    pub shape: Shape,
    /// `false` only for the token-acquisition methods.
    pub authenticated: bool,
}

impl Endpoint {
    const fn auth(method: &'static str, params: &'static [&'static str], shape: Shape) -> Self {
        Self {
            method,
            params,
            shape,
            authenticated: true,
        }
    }

    const fn anon(method: &'static str, params: &'static [&'static str]) -> Self {
        Self {
            method,
            params,
            shape: Shape::Text,
            authenticated: false,
        }
    }

    /// The fixed header, for tabular methods.
    pub fn header(&self) -> Option<&'static str> {
        match self.shape {
            Shape::Table(h) => Some(h),
            Shape::Text => None,
        }
    }

    /// Checks that every required parameter was supplied.
    pub fn check_params(&self, params: &Params) -> Result<(), JqError> {
        match self.params.iter().find(|p| !params.contains(p)) {
            Some(missing) => Err(JqError::MissingParam {
                method: self.method.to_string(),
                param: (*missing).to_string(),
            }),
            None => Ok(()),
        }
    }
}

use Shape::{Table, Text};

pub static ENDPOINTS: &[Endpoint] = &[
    // session
    Endpoint::anon("get_token", &["mob", "pwd"]),
    Endpoint::anon("get_current_token", &["mob", "pwd"]),
    Endpoint::auth("get_query_count", &[], Text),
    // securities
    Endpoint::auth("get_all_securities", &["code", "date"], Table(SECURITY_HEADER)),
    Endpoint::auth("get_security_info", &["code"], Table(SECURITY_HEADER)),
    Endpoint::auth("get_index_stocks", &["code", "date"], Text),
    Endpoint::auth("get_index_weights", &["code", "date"], Text),
    Endpoint::auth("get_industries", &["code"], Text),
    Endpoint::auth("get_industry", &["code", "date"], Text),
    Endpoint::auth("get_industry_stocks", &["code", "date"], Text),
    Endpoint::auth("get_concepts", &[], Text),
    Endpoint::auth("get_concept_stocks", &["code", "date"], Text),
    Endpoint::auth("get_fund_info", &["code", "date"], Text),
    // prices
    Endpoint::auth(
        "get_price",
        &["code", "count", "unit", "end_date", "fq_ref_date"],
        Table(BAR_HEADER),
    ),
    Endpoint::auth(
        "get_bars",
        &["code", "count", "unit", "end_date", "fq_ref_date"],
        Table(BAR_HEADER),
    ),
    Endpoint::auth(
        "get_price_period",
        &["code", "unit", "date", "end_date", "fq_ref_date"],
        Table(BAR_HEADER),
    ),
    Endpoint::auth(
        "get_bars_period",
        &["code", "unit", "date", "end_date", "fq_ref_date"],
        Table(BAR_HEADER),
    ),
    Endpoint::auth("get_current_price", &["code"], Table(PRICE_HEADER)),
    Endpoint::auth("get_fq_factor", &["code", "fq", "date", "end_date"], Text),
    Endpoint::auth("get_pause_stocks", &["date"], Text),
    Endpoint::auth("get_call_auction", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_current_tick", &["code"], Text),
    Endpoint::auth("get_current_ticks", &["code"], Text),
    Endpoint::auth("get_ticks", &["code", "count", "end_date"], Text),
    Endpoint::auth("get_ticks_period", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_extras", &["code", "date", "end_date"], Text),
    // margin, flows, calendars
    Endpoint::auth("get_money_flow", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_billboard_list", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_mtss", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_margincash_stocks", &["date"], Text),
    Endpoint::auth("get_marginsec_stocks", &["date"], Text),
    Endpoint::auth("get_locked_shares", &["code", "date", "end_date"], Text),
    Endpoint::auth("get_trade_days", &["date", "end_date"], Text),
    Endpoint::auth("get_all_trade_days", &[], Text),
    // futures
    Endpoint::auth("get_future_contracts", &["code", "date"], Text),
    Endpoint::auth("get_dominant_future", &["code", "date"], Text),
    // queries and factors
    Endpoint::auth("run_query", &["table", "columns", "conditions", "count"], Text),
    Endpoint::auth("get_fundamentals", &["table", "columns", "code", "date", "count"], Text),
    Endpoint::auth("get_all_factors", &[], Text),
    Endpoint::auth("get_factor_values", &["code", "columns", "date", "end_date"], Text),
    Endpoint::auth("get_alpha101", &["code", "func_name", "date"], Text),
    Endpoint::auth("get_alpha191", &["code", "func_name", "date"], Text),
];

/// Looks up a method by name.
pub fn lookup(method: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.method == method)
}

/// Like [`lookup`], failing with [`JqError::UnknownMethod`].
pub fn require(method: &str) -> Result<&'static Endpoint, JqError> {
    lookup(method).ok_or_else(|| JqError::UnknownMethod(method.to_string()))
}
