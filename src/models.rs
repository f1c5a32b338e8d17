use crate::render::{format_currency, format_percent, format_share};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Numeric fields read off an upstream response. Absent or non-numeric
/// fields read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultValues {
    values: BTreeMap<String, f64>,
}

impl ResultValues {
    pub fn from_json(fields: &[&str], body: &Map<String, Value>) -> Self {
        let values = fields
            .iter()
            .map(|name| {
                let value = body.get(*name).and_then(Value::as_f64).unwrap_or(0.0);
                (name.to_string(), value)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLine {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

impl ResultLine {
    pub fn currency(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format_currency(value),
            share: None,
        }
    }

    pub fn percent(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format_percent(value),
            share: None,
        }
    }

    pub fn with_share(mut self, part: f64, total: f64) -> Self {
        self.share = Some(format_share(part, total));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// One dataset shared by the pie and bar renderings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: &'static str,
    pub slices: Vec<ChartSlice>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown chart kind '{0}'")]
pub struct ParseChartKindError(String);

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(ChartKind::Pie),
            "bar" => Ok(ChartKind::Bar),
            _ => Err(ParseChartKindError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    pub pie: String,
    pub bar: String,
}

/// Everything a calculator page displays for its current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub calculator: &'static str,
    pub title: &'static str,
    pub lines: Vec<ResultLine>,
    pub error: Option<String>,
    pub loading: bool,
    pub chart: ChartKind,
    pub charts: Option<ChartSet>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub fields: HashMap<String, String>,
    #[serde(default)]
    pub chart: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    pub chart: Option<String>,
}

impl ChartQuery {
    /// Unrecognized values fall back to the default chart.
    pub fn kind(&self) -> ChartKind {
        chart_or_default(self.chart.as_deref())
    }
}

pub fn chart_or_default(value: Option<&str>) -> ChartKind {
    value.and_then(|raw| raw.parse().ok()).unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream: String,
}
