//! sie-rs
//!
//! A lightweight Rust client for the Economic Information System (SIE) REST
//! API of Banco de México: query economic time series, their metadata, and
//! rate-of-change transforms.
//!
//! ### Features
//! - Fetch metadata, the latest observation, the full series, or a date
//!   range for one or more series ids (or an id range expression)
//! - English or Spanish responses (`locale`)
//! - Optional percent-change transforms (`incremento`)
//! - Raw `serde_json::Value` bodies, plus typed models and tidy
//!   per-observation rows
//!
//! ### Example
//! ```no_run
//! use sie_rs::{Client, Language, SieResponse};
//!
//! let client = Client::new("your-token", ["SF43718"], Language::En);
//! let body = client.fetch_time_series_range("2020-01-01", "2020-12-31", None)?;
//! let typed: SieResponse = serde_json::from_value(body)?;
//! for row in typed.data_points() {
//!     println!("{:?} {:?}", row.date, row.value);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Notes
//! - Every query needs a token, issued at
//!   <https://www.banxico.org.mx/SieAPIRest/service/v1/token?locale=en>.
//! - Each series has a unique id; the full catalogue is at
//!   <https://www.banxico.org.mx/SieAPIRest/service/v1/doc/catalogoSeries?locale=en>.
//! - Full API documentation:
//!   <https://www.banxico.org.mx/SieAPIRest/service/v1/?locale=en>.

pub mod api;
pub mod error;
pub mod models;

pub use api::Client;
pub use error::{Error, Result};
pub use models::{DataPoint, Language, PctChange, Selector, SieResponse};
