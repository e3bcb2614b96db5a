//! Public client surface + builder.
//! Internals are split into `auth` (session token), `throttle` (request spacing)
//! and `constants` (UA + defaults).

mod auth;
mod constants;
mod throttle;

pub use auth::Session;

use crate::core::endpoint::{self, Endpoint, Shape};
use crate::core::net::Transport;
use crate::core::table::{FromRow, Table};
use crate::core::{JqError, Params, RequestEnvelope};
use constants::{DEFAULT_BASE_URL, DEFAULT_MIN_INTERVAL, DEFAULT_TIMEOUT, USER_AGENT};
use std::time::Duration;
use throttle::Throttle;
use url::Url;

/// Blocking client for the JQData HTTP API.
///
/// One client owns one session token and one connection pool. Every call takes
/// `&mut self`, so requests are strictly sequential and spaced by the configured
/// minimum interval.
///
/// # Example
///
/// ```no_run
/// # use jqdata_rs::{JqClient, Params};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = JqClient::default();
/// client.acquire_token("13800000000", "password");
///
/// let body = client.invoke_text("get_trade_days", Params::new()
///     .with("date", "2019-01-01")
///     .with("end_date", "2019-01-31"))?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JqClient {
    transport: Transport,
    session: Session,
    throttle: Throttle,
}

impl Default for JqClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl JqClient {
    /// Create a new builder.
    pub fn builder() -> JqClientBuilder {
        JqClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    pub fn min_interval(&self) -> Duration {
        self.throttle.min_interval()
    }

    /* ---------------- generic pipeline ---------------- */

    /// Calls `method` and returns the response body untouched.
    ///
    /// # Errors
    ///
    /// Fails if the method is unknown, a required parameter is missing, no token is held
    /// for an authenticated method, or the HTTP round-trip fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub fn invoke_text(&mut self, method: &str, params: Params) -> Result<String, JqError> {
        let ep = endpoint::require(method)?;
        self.send(ep, params)
    }

    /// Calls `method` and splits the response into a [`Table`].
    ///
    /// Methods with a fixed header are validated against it; for pass-through methods the
    /// first line of the body is taken as the header.
    ///
    /// # Errors
    ///
    /// As [`JqClient::invoke_text`], plus `HeaderMismatch` and `RowArityMismatch`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub fn invoke_table(&mut self, method: &str, params: Params) -> Result<Table, JqError> {
        let ep = endpoint::require(method)?;
        let body = self.send(ep, params)?;
        match ep.shape {
            Shape::Table(header) => Table::parse(&body, header),
            Shape::Text => Table::parse_any(&body),
        }
    }

    /// Calls a tabular `method` and decodes each row as `R`.
    ///
    /// # Errors
    ///
    /// As [`JqClient::invoke_table`], plus `NumericConversion`. Fails with `ShapeMismatch`
    /// before sending anything if the method's header is not `R::HEADER`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub fn invoke_records<R: FromRow>(
        &mut self,
        method: &str,
        params: Params,
    ) -> Result<Vec<R>, JqError> {
        let ep = endpoint::require(method)?;
        match ep.shape {
            Shape::Table(header) if header == R::HEADER => {}
            Shape::Table(header) => {
                return Err(JqError::ShapeMismatch {
                    method: method.to_string(),
                    reason: format!("returns `{header}`, record expects `{}`", R::HEADER),
                });
            }
            Shape::Text => {
                return Err(JqError::ShapeMismatch {
                    method: method.to_string(),
                    reason: "response has no fixed header".into(),
                });
            }
        }
        let body = self.send(ep, params)?;
        Table::parse(&body, R::HEADER)?.records()
    }

    /// Number of rows the account may still query today.
    ///
    /// # Errors
    ///
    /// Fails with `Data` if the body is not an integer (typically an error message).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn query_count(&mut self) -> Result<i64, JqError> {
        let body = self.invoke_text("get_query_count", Params::new())?;
        body.trim()
            .parse()
            .map_err(|_| JqError::Data(format!("query count: {}", body.trim())))
    }

    /// Guard, envelope, throttle, dispatch.
    pub(crate) fn send(&mut self, ep: &Endpoint, params: Params) -> Result<String, JqError> {
        let token = if ep.authenticated {
            self.ensure_authenticated()?;
            self.session.token()
        } else {
            None
        };
        ep.check_params(&params)?;
        let envelope = RequestEnvelope::build(ep.method, token, params);

        self.throttle.wait();
        let result = self.transport.dispatch(&envelope);
        self.throttle.mark();
        result
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct JqClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    min_interval: Option<Duration>,
    token: Option<String>,
}

impl JqClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API endpoint (e.g., `https://dataapi.joinquant.com/apis`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Minimum spacing between the end of one request and the start of the next. Default: 2s.
    pub fn min_interval(mut self, dur: Duration) -> Self {
        self.min_interval = Some(dur);
        self
    }

    /// Start with a token obtained earlier (tokens stay valid for the rest of the day).
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<JqClient, JqError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        let mut session = Session::default();
        if let Some(t) = self.token {
            session.set(t);
        }

        Ok(JqClient {
            transport: Transport::new(http, base_url),
            session,
            throttle: Throttle::new(self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL)),
        })
    }
}
