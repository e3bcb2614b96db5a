use std::fmt;

use serde::Serialize;

use crate::core::endpoint::SECURITY_HEADER;
use crate::core::{FromRow, JqError, Row};
use crate::exchange;

/// `end_date` of securities that are still listed.
pub const STILL_LISTED: &str = "2200-01-01";

/// One security from the listing or info endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Security {
    /// Code with exchange suffix, e.g. `000001.XSHE`.
    pub code: String,
    /// Display name (usually Chinese).
    pub display_name: String,
    /// Short pinyin abbreviation.
    pub name: String,
    /// Listing date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Delisting date, `YYYY-MM-DD`; [`STILL_LISTED`] when not delisted.
    pub end_date: String,
    /// Security type as sent by the service (`stock`, `index`, `etf`, `futures`, ...).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Security {
    /// Short futures exchange name derived from the code suffix, if it is a futures venue.
    pub fn exchange(&self) -> Option<&'static str> {
        exchange::split_code(&self.code).and_then(|(_, suffix)| exchange::short_name(suffix))
    }

    pub fn is_listed(&self) -> bool {
        self.end_date == STILL_LISTED
    }
}

impl FromRow for Security {
    const HEADER: &'static str = SECURITY_HEADER;

    fn from_row(row: &Row<'_>) -> Result<Self, JqError> {
        Ok(Self {
            code: row.text(0).to_string(),
            display_name: row.text(1).to_string(),
            name: row.text(2).to_string(),
            start_date: row.text(3).to_string(),
            end_date: row.text(4).to_string(),
            kind: row.text(5).to_string(),
        })
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.code, self.display_name, self.name, self.start_date, self.end_date, self.kind
        )
    }
}

/// Security categories accepted by `get_all_securities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityType {
    Stock,
    Fund,
    Index,
    Futures,
    Etf,
    Lof,
    /// Structured fund, class A.
    Fja,
    /// Structured fund, class B.
    Fjb,
    Options,
    OpenFund,
    BondFund,
    StockFund,
    QdiiFund,
    MoneyMarketFund,
    MixtureFund,
}

impl SecurityType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SecurityType::Stock => "stock",
            SecurityType::Fund => "fund",
            SecurityType::Index => "index",
            SecurityType::Futures => "futures",
            SecurityType::Etf => "etf",
            SecurityType::Lof => "lof",
            SecurityType::Fja => "fja",
            SecurityType::Fjb => "fjb",
            SecurityType::Options => "options",
            SecurityType::OpenFund => "open_fund",
            SecurityType::BondFund => "bond_fund",
            SecurityType::StockFund => "stock_fund",
            SecurityType::QdiiFund => "QDII_fund",
            SecurityType::MoneyMarketFund => "money_market_fund",
            SecurityType::MixtureFund => "mixture_fund",
        }
    }
}
