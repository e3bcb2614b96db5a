mod model;

pub use model::{STILL_LISTED, Security, SecurityType};

use chrono::NaiveDate;

use crate::core::{JqClient, JqError, Params};

/// A builder for the securities listing (`get_all_securities`).
///
/// Without a date the listing covers every security ever listed; with a date, only
/// those listed on that day.
pub struct SecuritiesBuilder<'a> {
    client: &'a mut JqClient,
    kind: SecurityType,
    date: Option<NaiveDate>,
}

impl<'a> SecuritiesBuilder<'a> {
    /// Creates a listing request for stocks on all dates.
    pub fn new(client: &'a mut JqClient) -> Self {
        Self {
            client,
            kind: SecurityType::Stock,
            date: None,
        }
    }

    /// Which category to list.
    #[must_use]
    pub fn kind(mut self, kind: SecurityType) -> Self {
        self.kind = kind;
        self
    }

    /// Restrict to securities listed on `date`.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Fetches the listing.
    ///
    /// # Errors
    ///
    /// Returns `HeaderMismatch` carrying the service's message when it answers with text
    /// instead of a table.
    pub fn fetch(self) -> Result<Vec<Security>, JqError> {
        let params = Params::new()
            .with("code", self.kind.as_str())
            .with("date", self.date);
        self.client.invoke_records("get_all_securities", params)
    }
}

/// Fetches a single security by code (`get_security_info`).
///
/// Returns `None` when the service answers with a header and no row.
///
/// # Errors
///
/// As [`SecuritiesBuilder::fetch`].
pub fn security_info(client: &mut JqClient, code: &str) -> Result<Option<Security>, JqError> {
    let recs: Vec<Security> =
        client.invoke_records("get_security_info", Params::new().with("code", code))?;
    Ok(recs.into_iter().next())
}
