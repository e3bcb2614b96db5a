//! Futures helpers.

use chrono::NaiveDate;

use crate::core::{JqClient, JqError, Params};

/// Dominant contract code for a product on a date (`get_dominant_future`).
///
/// `product` is the product prefix such as `AU` or `RB`. The body is returned as sent
/// (normally a single code like `AU1906.XSGE`, empty when there is none).
///
/// # Errors
///
/// Fails on transport errors or when no token is held.
pub fn dominant_future(
    client: &mut JqClient,
    product: &str,
    date: NaiveDate,
) -> Result<String, JqError> {
    client.invoke_text(
        "get_dominant_future",
        Params::new().with("code", product).with("date", date),
    )
}

/// Contracts of a product tradable on a date, one code per element (`get_future_contracts`).
///
/// # Errors
///
/// As [`dominant_future`].
pub fn future_contracts(
    client: &mut JqClient,
    product: &str,
    date: NaiveDate,
) -> Result<Vec<String>, JqError> {
    let body = client.invoke_text(
        "get_future_contracts",
        Params::new().with("code", product).with("date", date),
    )?;
    Ok(body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
