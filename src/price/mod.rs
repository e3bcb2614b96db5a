mod model;

pub use model::{Bar, Price, Unit};

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::core::{JqClient, JqError, Params};

/// Exchange time (UTC+8), which decides the trading day.
const MARKET_UTC_OFFSET_SECS: i32 = 8 * 3600;

/// The trading-calendar date at `now` in exchange time.
fn market_date(now: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(MARKET_UTC_OFFSET_SECS) {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.date_naive(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    /// The last `n` bars up to `end_date` (`get_price`).
    Count(u32),
    /// Every bar from `start` to `end_date` (`get_price_period`).
    Since(NaiveDate),
}

/// A builder for bar queries.
///
/// Defaults: daily bars, the single latest bar up to today, no price adjustment.
///
/// ```no_run
/// # use jqdata_rs::{JqClient, PriceBuilder, Unit};
/// # use chrono::NaiveDate;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = JqClient::builder().token("my-token").build()?;
/// let bars = PriceBuilder::new(&mut client, "000001.XSHE")
///     .unit(Unit::M5)
///     .count(48)
///     .end_date(NaiveDate::from_ymd_opt(2019, 3, 18).unwrap())
///     .fetch()?;
/// println!("{} bars", bars.len());
/// # Ok(())
/// # }
/// ```
pub struct PriceBuilder<'a> {
    client: &'a mut JqClient,
    code: String,
    unit: Unit,
    span: Span,
    end_date: Option<NaiveDate>,
    fq_ref_date: Option<NaiveDate>,
}

impl<'a> PriceBuilder<'a> {
    pub fn new(client: &'a mut JqClient, code: impl Into<String>) -> Self {
        Self {
            client,
            code: code.into(),
            unit: Unit::D1,
            span: Span::Count(1),
            end_date: None,
            fq_ref_date: None,
        }
    }

    /// Bar period.
    #[must_use]
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Fetch the last `n` bars ending at `end_date`.
    #[must_use]
    pub fn count(mut self, n: u32) -> Self {
        self.span = Span::Count(n);
        self
    }

    /// Fetch every bar from `start` through `end_date` instead of a fixed count.
    #[must_use]
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.span = Span::Since(start);
        self
    }

    /// Last day included. Defaults to today in exchange time (UTC+8).
    #[must_use]
    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Adjust prices relative to this date. Unset means raw prices.
    #[must_use]
    pub fn fq_ref_date(mut self, date: NaiveDate) -> Self {
        self.fq_ref_date = Some(date);
        self
    }

    /// Fetches the bars, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `HeaderMismatch` carrying the service's message when it answers with text
    /// instead of a table, and `NumericConversion` for malformed prices.
    pub fn fetch(self) -> Result<Vec<Bar>, JqError> {
        let end_date = self
            .end_date
            .unwrap_or_else(|| market_date(Utc::now()));
        let params = Params::new()
            .with("code", self.code)
            .with("unit", self.unit.as_str())
            .with("end_date", end_date)
            .with("fq_ref_date", self.fq_ref_date);

        match self.span {
            Span::Count(n) => self
                .client
                .invoke_records("get_price", params.with("count", n)),
            Span::Since(start) => self
                .client
                .invoke_records("get_price_period", params.with("date", start)),
        }
    }
}

/// Latest price for each code (`get_current_price`).
///
/// # Errors
///
/// As [`PriceBuilder::fetch`].
pub fn current_price<S: AsRef<str>>(
    client: &mut JqClient,
    codes: &[S],
) -> Result<Vec<Price>, JqError> {
    let code = codes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    client.invoke_records("get_current_price", Params::new().with("code", code))
}
