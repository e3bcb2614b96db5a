use std::fmt;

use serde::Serialize;

use crate::core::endpoint::{BAR_HEADER, PRICE_HEADER};
use crate::core::{FromRow, JqError, Row};

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    /// Bar time as sent: `YYYY-MM-DD` for daily units, `YYYY-MM-DD HH:MM` intraday.
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    /// Traded volume (shares or contracts).
    pub volume: f64,
    /// Traded value.
    pub money: f64,
}

impl FromRow for Bar {
    const HEADER: &'static str = BAR_HEADER;

    fn from_row(row: &Row<'_>) -> Result<Self, JqError> {
        Ok(Self {
            date: row.text(0).to_string(),
            open: row.number(1)?,
            close: row.number(2)?,
            high: row.number(3)?,
            low: row.number(4)?,
            volume: row.number(5)?,
            money: row.number(6)?,
        })
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.date, self.open, self.close, self.high, self.low, self.volume, self.money
        )
    }
}

/// Latest price of one security.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub code: String,
    pub current: f64,
}

impl FromRow for Price {
    const HEADER: &'static str = PRICE_HEADER;

    fn from_row(row: &Row<'_>) -> Result<Self, JqError> {
        Ok(Self {
            code: row.text(0).to_string(),
            current: row.number(1)?,
        })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.code, self.current)
    }
}

/// Bar period accepted by the price endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    M1,
    M5,
    M15,
    M30,
    M60,
    M120,
    D1,
    W1,
    /// One calendar month.
    Mo1,
}

impl Unit {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Unit::M1 => "1m",
            Unit::M5 => "5m",
            Unit::M15 => "15m",
            Unit::M30 => "30m",
            Unit::M60 => "60m",
            Unit::M120 => "120m",
            Unit::D1 => "1d",
            Unit::W1 => "1w",
            Unit::Mo1 => "1M",
        }
    }
}
