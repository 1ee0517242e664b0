//! Request vocabulary (`Language`, `PctChange`, `Selector`) and response
//! models for the SIE API. Wire structs keep the API's Spanish field names
//! (`idSerie`, `datos`, …); [`DataPoint`] is the tidy per-observation form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Language of titles and metadata in responses, sent as the `locale`
/// query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// English (`locale=en`).
    #[default]
    #[serde(rename = "en")]
    En,
    /// Spanish (`locale=es`).
    #[serde(rename = "es")]
    Es,
}

impl Language {
    /// Value sent under the `locale` query key.
    pub fn to_query_param(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(Error::InvalidLanguage(other.to_string())),
        }
    }
}

/// Transformation of raw levels into a rate of change, sent as the
/// `incremento` query parameter.
///
/// Passing `None` to the fetch methods requests levels and omits the
/// parameter entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PctChange {
    /// Change rate vs. the previous observation (`PorcObsAnt`).
    #[serde(rename = "PorcObsAnt")]
    PrevObs,
    /// Annual (year-over-year) change rate (`PorcAnual`).
    #[serde(rename = "PorcAnual")]
    Annual,
    /// Annual accumulated change rate (`PorcAcumAnual`).
    #[serde(rename = "PorcAcumAnual")]
    AnnualAccum,
}

impl PctChange {
    /// Value sent under the `incremento` query key.
    pub fn to_query_param(self) -> &'static str {
        match self {
            PctChange::PrevObs => "PorcObsAnt",
            PctChange::Annual => "PorcAnual",
            PctChange::AnnualAccum => "PorcAcumAnual",
        }
    }
}

impl FromStr for PctChange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PorcObsAnt" => Ok(PctChange::PrevObs),
            "PorcAnual" => Ok(PctChange::Annual),
            "PorcAcumAnual" => Ok(PctChange::AnnualAccum),
            other => Err(Error::InvalidPctChange(other.to_string())),
        }
    }
}

/// One or more series ids in the form the SIE API expects in the URL path:
/// ids joined with `,`, or a range expression like `"SF311408-SF311410"`.
///
/// Range syntax is owned by the remote API and is never parsed here; a
/// range passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// The selector exactly as it will appear in the request path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append `,` plus the joined ids to the current selector.
    pub fn append<S: AsRef<str>>(&mut self, ids: &[S]) {
        for id in ids {
            self.0.push(',');
            self.0.push_str(id.as_ref());
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single id or a range expression, taken verbatim.
impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        Selector(s.to_string())
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        Selector(s)
    }
}

/// Ids joined with `,` in input order.
impl<S: AsRef<str>> From<&[S]> for Selector {
    fn from(ids: &[S]) -> Self {
        Selector(
            ids.iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Selector {
    fn from(ids: [S; N]) -> Self {
        Selector::from(&ids[..])
    }
}

impl<S: AsRef<str>, const N: usize> From<&[S; N]> for Selector {
    fn from(ids: &[S; N]) -> Self {
        Selector::from(&ids[..])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Selector {
    fn from(ids: Vec<S>) -> Self {
        Selector::from(ids.as_slice())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Selector(
            iter.into_iter()
                .map(|s| s.as_ref().to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Top-level envelope of every SIE response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieResponse {
    pub bmx: Bmx,
}

/// Payload under the `bmx` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bmx {
    #[serde(default)]
    pub series: Vec<Series>,
}

/// One series as shipped by the API.
///
/// Metadata responses carry `fechaInicio`/`fechaFin`/`periodicidad`/… and no
/// `datos`; data responses carry `datos` and no metadata fields. Everything
/// beyond the id is optional so one struct covers both shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id_serie: String,
    pub titulo: Option<String>,
    pub datos: Option<Vec<Obs>>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub periodicidad: Option<String>,
    pub cifra: Option<String>,
    pub unidad: Option<String>,
    pub versionada: Option<bool>,
}

/// One observation, wire strings exactly as shipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Obs {
    pub fecha: String,
    pub dato: String,
}

impl Obs {
    /// Observation date; the wire format is `dd/mm/yyyy`.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.fecha.trim(), "%d/%m/%Y").ok()
    }

    /// Numeric value. `"N/E"` (no existe) and anything else non-numeric
    /// map to `None`; thousands separators are stripped before parsing.
    pub fn value(&self) -> Option<f64> {
        let raw = self.dato.trim();
        if raw.is_empty() || raw == "N/E" {
            return None;
        }
        raw.replace(',', "").parse::<f64>().ok()
    }
}

/// Tidy structure used by this crate (one row = one observation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub series_id: String,
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
}

impl Series {
    /// Flatten this series into one [`DataPoint`] per observation.
    pub fn data_points(&self) -> Vec<DataPoint> {
        self.datos
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|obs| DataPoint {
                series_id: self.id_serie.clone(),
                title: self.titulo.clone(),
                date: obs.date(),
                value: obs.value(),
            })
            .collect()
    }
}

impl SieResponse {
    /// Flatten every series into tidy rows, in response order.
    pub fn data_points(&self) -> Vec<DataPoint> {
        self.bmx
            .series
            .iter()
            .flat_map(Series::data_points)
            .collect()
    }
}
