//! ETF explorer navigation entities

use serde::{Deserialize, Serialize};

/// Level of the drill-down a breadcrumb points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrumbKind {
    Home,
    EtfList,
    Etf,
}

/// One entry of the drill-down path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(rename = "type")]
    pub kind: CrumbKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl Breadcrumb {
    pub fn home() -> Self {
        Self {
            kind: CrumbKind::Home,
            label: "Home".to_string(),
            symbol: None,
        }
    }

    pub fn etf_list() -> Self {
        Self {
            kind: CrumbKind::EtfList,
            label: "ETFs".to_string(),
            symbol: None,
        }
    }

    pub fn etf(symbol: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: CrumbKind::Etf,
            label: label.into(),
            symbol: Some(symbol.into()),
        }
    }
}

/// A constituent of an ETF as returned by the holdings endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    /// Portfolio weight in percent
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            weight,
            sector: None,
        }
    }
}
