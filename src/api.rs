//! Synchronous client for **Banco de México's SIE REST API**.
//!
//! Wraps the `series/{selector}[/suffix]` endpoint family and returns the
//! decoded JSON body verbatim; pair with [`crate::models::SieResponse`] for
//! a typed view of the payload.

use crate::error::{Error, Result};
use crate::models::{Language, PctChange, Selector};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Header carrying the query token on every request.
const TOKEN_HEADER: &str = "Bmx-Token";

// Allow -, _, ., and the joining comma unescaped in path segments
// (ids like SF43718, ranges like SF311408-SF311410, dates like 2020-01-01).
const SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b',');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

/// Query parameters for one request, assembled fresh every call so nothing
/// from a prior request can leak into the next.
fn request_params(
    language: Language,
    pct: Option<PctChange>,
) -> Vec<(&'static str, &'static str)> {
    let mut params = vec![("locale", language.to_query_param())];
    if let Some(p) = pct {
        params.push(("incremento", p.to_query_param()));
    }
    params
}

/// Client for the SIE series endpoints.
///
/// Holds the query token, the series selector, and the response language;
/// each fetch method issues one blocking GET and returns the parsed JSON
/// body unchanged.
///
/// ### Notes
/// - Requests need a query token, issued at
///   <https://www.banxico.org.mx/SieAPIRest/service/v1/token?locale=en>.
/// - The series catalogue lives at
///   <https://www.banxico.org.mx/SieAPIRest/service/v1/doc/catalogoSeries?locale=en>.
///
/// Typical usage:
/// ```no_run
/// # use sie_rs::{Client, Language};
/// let client = Client::new("your-token", ["SF43718"], Language::En);
/// let body = client.fetch_latest(None)?;
/// # Ok::<(), sie_rs::Error>(())
/// ```
#[derive(Clone)]
pub struct Client {
    /// Base endpoint, overridable so tests can point at a local server.
    pub base_url: String,
    token: String,
    selector: Selector,
    language: Language,
    http: HttpClient,
}

impl Client {
    /// Build a client for the given token, series selection, and language.
    ///
    /// `series` accepts a single id, a range expression like
    /// `"SF311408-SF311410"`, or any slice/array/`Vec` of ids (joined with
    /// `,` in input order).
    pub fn new(token: impl Into<String>, series: impl Into<Selector>, language: Language) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("sie_rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://www.banxico.org.mx/SieAPIRest/service/v1/series".into(),
            token: token.into(),
            selector: series.into(),
            language,
            http,
        }
    }

    /// Replace the query token. Takes effect on the next request.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Replace the series selection wholesale, ranges included.
    ///
    /// To add ids to the current selection use
    /// [`append_series_ids`](Client::append_series_ids) instead.
    pub fn set_series_ids(&mut self, series: impl Into<Selector>) {
        self.selector = series.into();
    }

    /// Append ids to the current selection.
    ///
    /// Range expressions (e.g. `"SF311408-SF311410"`) are not valid here;
    /// use [`set_series_ids`](Client::set_series_ids) for those.
    pub fn append_series_ids<S: AsRef<str>>(&mut self, ids: &[S]) {
        self.selector.append(ids);
    }

    /// The current series selection.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Fetch metadata for the selected series.
    ///
    /// `GET {base}/{selector}`; never sends `incremento`.
    pub fn fetch_metadata(&self) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, enc(self.selector.as_str()));
        self.get_json(&url, None, "the token or series id")
    }

    /// Fetch the most recently published observation of each selected series.
    ///
    /// `GET {base}/{selector}/datos/oportuno`. `pct` of `None` requests
    /// levels; otherwise the chosen rate-of-change transform.
    pub fn fetch_latest(&self, pct: Option<PctChange>) -> Result<Value> {
        let url = format!(
            "{}/{}/datos/oportuno",
            self.base_url,
            enc(self.selector.as_str())
        );
        self.get_json(&url, pct, "the token or series id")
    }

    /// Fetch the full time series, covering each series' whole published
    /// period.
    ///
    /// `GET {base}/{selector}/datos`.
    pub fn fetch_time_series(&self, pct: Option<PctChange>) -> Result<Value> {
        let url = format!("{}/{}/datos", self.base_url, enc(self.selector.as_str()));
        self.get_json(&url, pct, "the token or series id")
    }

    /// Fetch observations between `init_date` and `end_date`, both
    /// `yyyy-mm-dd`.
    ///
    /// `GET {base}/{selector}/datos/{init}/{end}`. Dates are passed through
    /// as-is: the remote API clamps anything outside a series' coverage to
    /// its oldest/most recent observation, and this client performs no local
    /// date validation.
    pub fn fetch_time_series_range(
        &self,
        init_date: &str,
        end_date: &str,
        pct: Option<PctChange>,
    ) -> Result<Value> {
        let url = format!(
            "{}/{}/datos/{}/{}",
            self.base_url,
            enc(self.selector.as_str()),
            enc(init_date),
            enc(end_date)
        );
        self.get_json(&url, pct, "the token, series id or date format")
    }

    fn get_json(&self, url: &str, pct: Option<PctChange>, hint: &'static str) -> Result<Value> {
        let params = request_params(self.language, pct);
        debug!("GET {url}");
        let resp = self
            .http
            .get(url)
            .header(TOKEN_HEADER, self.token.as_str())
            .query(&params)
            .send()?;
        let status = resp.status();
        debug!("{url} -> HTTP {status}");
        if !status.is_success() {
            return Err(Error::Status { status, hint });
        }
        Ok(resp.json()?)
    }
}

impl fmt::Debug for Client {
    // Token stays out of Debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("selector", &self.selector)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
