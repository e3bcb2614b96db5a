//! jqdata-rs: blocking client for the JQData HTTP API.
//!
//! Every remote operation is a POST of a JSON envelope (`method`, `token`, parameters) to a
//! single endpoint, answered with CSV-like text. [`JqClient`] runs that pipeline: it guards
//! on the session token, builds the envelope, spaces requests by the service's minimum
//! interval, and decodes tabular responses into typed records.
//!
//! ```no_run
//! use jqdata_rs::{JqClient, PriceBuilder, SecuritiesBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = JqClient::default();
//! if client.acquire_token("13800000000", "password").is_empty() {
//!     return Err("token request failed".into());
//! }
//!
//! let stocks = SecuritiesBuilder::new(&mut client).fetch()?;
//! let bars = PriceBuilder::new(&mut client, "000001.XSHE").count(5).fetch()?;
//! println!("{} stocks, {} bars", stocks.len(), bars.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod exchange;
pub mod futures;
pub mod price;
pub mod securities;

pub use crate::core::{
    Endpoint, FromRow, JqClient, JqClientBuilder, JqError, ParamValue, Params, RequestEnvelope,
    Row, Session, Shape, Table,
};
pub use price::{Bar, Price, PriceBuilder, Unit};
pub use securities::{SecuritiesBuilder, Security, SecurityType};

/// Install an env-filtered fmt subscriber (`RUST_LOG`), ignoring a second install.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
