//! ETF explorer navigation state
//!
//! Tracks the drill-down breadcrumb path, the selected ETF and a holdings
//! cache keyed by symbol. `selected_etf` is derived from the path on every
//! transition: it is the symbol of the last `Etf` breadcrumb, or `None`.
//! Cached holdings never expire; callers clear them explicitly.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Breadcrumb, CrumbKind, Holding};

/// Immutable snapshot of the ETF explorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfState {
    selected_etf: Option<String>,
    drill_down_path: Vec<Breadcrumb>,
    holdings_cache: BTreeMap<String, Vec<Holding>>,
}

impl EtfState {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_path(path: Vec<Breadcrumb>, holdings_cache: BTreeMap<String, Vec<Holding>>) -> Self {
        let selected_etf = path
            .iter()
            .rev()
            .find(|crumb| crumb.kind == CrumbKind::Etf)
            .and_then(|crumb| crumb.symbol.clone());
        Self {
            selected_etf,
            drill_down_path: path,
            holdings_cache,
        }
    }

    pub fn selected_etf(&self) -> Option<&str> {
        self.selected_etf.as_deref()
    }

    pub fn drill_down_path(&self) -> &[Breadcrumb] {
        &self.drill_down_path
    }

    /// Cached holdings for `symbol`, if any
    pub fn holdings(&self, symbol: &str) -> Option<&[Holding]> {
        self.holdings_cache.get(symbol).map(Vec::as_slice)
    }

    pub fn cached_symbols(&self) -> impl Iterator<Item = &str> {
        self.holdings_cache.keys().map(String::as_str)
    }

    /// Open an ETF: path becomes Home > ETFs > `name` (or the symbol)
    pub fn select_etf(&self, symbol: &str, name: Option<&str>) -> Self {
        let label = name.filter(|n| !n.trim().is_empty()).unwrap_or(symbol);
        let path = vec![
            Breadcrumb::home(),
            Breadcrumb::etf_list(),
            Breadcrumb::etf(symbol, label),
        ];
        Self::with_path(path, self.holdings_cache.clone())
    }

    /// Drop the last breadcrumb. An empty path is left unchanged.
    pub fn navigate_back(&self) -> Self {
        let mut path = self.drill_down_path.clone();
        path.pop();
        Self::with_path(path, self.holdings_cache.clone())
    }

    /// Jump to the breadcrumb at `index`, dropping everything after it.
    /// Out-of-range indices leave the state unchanged.
    pub fn navigate_to(&self, index: usize) -> Self {
        if index >= self.drill_down_path.len() {
            return self.clone();
        }
        let path = self.drill_down_path[..=index].to_vec();
        Self::with_path(path, self.holdings_cache.clone())
    }

    /// Clear the path and selection; cached holdings are kept
    pub fn navigate_to_home(&self) -> Self {
        Self::with_path(Vec::new(), self.holdings_cache.clone())
    }

    /// Insert or replace cached holdings for `symbol`
    pub fn cache_holdings(&self, symbol: &str, holdings: Vec<Holding>) -> Self {
        let mut cache = self.holdings_cache.clone();
        cache.insert(symbol.to_string(), holdings);
        Self::with_path(self.drill_down_path.clone(), cache)
    }

    pub fn clear_cache(&self) -> Self {
        Self::with_path(self.drill_down_path.clone(), BTreeMap::new())
    }
}

/// Transitions accepted by [`EtfStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum EtfAction {
    SelectEtf {
        symbol: String,
        name: Option<String>,
    },
    NavigateBack,
    NavigateTo(usize),
    NavigateToHome,
    CacheHoldings {
        symbol: String,
        holdings: Vec<Holding>,
    },
    ClearCache,
}

/// Owner of the current ETF snapshot, handed to whoever needs it
#[derive(Debug, Default)]
pub struct EtfStore {
    state: EtfState,
}

impl EtfStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EtfState {
        &self.state
    }

    /// Apply an action and return the new snapshot
    pub fn dispatch(&mut self, action: EtfAction) -> &EtfState {
        tracing::debug!(?action, "etf store transition");
        self.state = match action {
            EtfAction::SelectEtf { symbol, name } => {
                self.state.select_etf(&symbol, name.as_deref())
            }
            EtfAction::NavigateBack => self.state.navigate_back(),
            EtfAction::NavigateTo(index) => self.state.navigate_to(index),
            EtfAction::NavigateToHome => self.state.navigate_to_home(),
            EtfAction::CacheHoldings { symbol, holdings } => {
                self.state.cache_holdings(&symbol, holdings)
            }
            EtfAction::ClearCache => self.state.clear_cache(),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holdings() -> Vec<Holding> {
        vec![
            Holding::new("BHP", "BHP Group", 9.8),
            Holding::new("CBA", "Commonwealth Bank", 8.7),
        ]
    }

    #[test]
    fn test_select_etf_builds_three_crumbs() {
        let state = EtfState::new().select_etf("VAS", Some("Vanguard Australian Shares"));

        assert_eq!(state.selected_etf(), Some("VAS"));
        let kinds: Vec<CrumbKind> = state.drill_down_path().iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![CrumbKind::Home, CrumbKind::EtfList, CrumbKind::Etf]);
        assert_eq!(state.drill_down_path()[2].label, "Vanguard Australian Shares");
    }

    #[test]
    fn test_select_without_name_uses_symbol() {
        let state = EtfState::new().select_etf("IVV", None);
        assert_eq!(state.drill_down_path()[2].label, "IVV");
        assert_eq!(state.drill_down_path()[2].symbol.as_deref(), Some("IVV"));
    }

    #[test]
    fn test_navigate_back_clears_selection() {
        let selected = EtfState::new().select_etf("X", None);
        let back = selected.navigate_back();

        assert_eq!(back.selected_etf(), None);
        assert_eq!(back.drill_down_path().len(), selected.drill_down_path().len() - 1);
        assert_eq!(back.drill_down_path().last().unwrap().kind, CrumbKind::EtfList);
    }

    #[test]
    fn test_navigate_back_on_empty_path() {
        let state = EtfState::new().navigate_back();
        assert!(state.drill_down_path().is_empty());
        assert_eq!(state.selected_etf(), None);
    }

    #[test]
    fn test_navigate_home_from_any_state() {
        let states = [
            EtfState::new(),
            EtfState::new().select_etf("VGS", None),
            EtfState::new().select_etf("VGS", None).navigate_back(),
        ];
        for state in states {
            let home = state.cache_holdings("VGS", holdings()).navigate_to_home();
            assert_eq!(home.selected_etf(), None);
            assert!(home.drill_down_path().is_empty());
            // cache survives navigation
            assert!(home.holdings("VGS").is_some());
        }
    }

    #[test]
    fn test_navigate_to_breadcrumb() {
        let state = EtfState::new().select_etf("A200", None);

        let list = state.navigate_to(1);
        assert_eq!(list.drill_down_path().len(), 2);
        assert_eq!(list.selected_etf(), None);

        let same = state.navigate_to(2);
        assert_eq!(same, state);

        let unchanged = state.navigate_to(9);
        assert_eq!(unchanged, state);
    }

    #[test]
    fn test_selecting_again_replaces_selection() {
        let state = EtfState::new().select_etf("VAS", None).select_etf("VGS", None);
        assert_eq!(state.selected_etf(), Some("VGS"));
        assert_eq!(state.drill_down_path().len(), 3);
    }

    #[test]
    fn test_cache_upsert_and_clear() {
        let state = EtfState::new().cache_holdings("VAS", holdings());
        assert_eq!(state.holdings("VAS").unwrap().len(), 2);

        let replaced = state.cache_holdings("VAS", vec![Holding::new("CSL", "CSL Ltd", 5.0)]);
        assert_eq!(replaced.holdings("VAS").unwrap().len(), 1);
        assert_eq!(replaced.cached_symbols().count(), 1);

        let cleared = replaced.clear_cache();
        assert!(cleared.holdings("VAS").is_none());
    }

    #[test]
    fn test_transitions_leave_previous_snapshot_untouched() {
        let before = EtfState::new().select_etf("VAS", None);
        let _after = before.navigate_to_home();
        assert_eq!(before.selected_etf(), Some("VAS"));
    }

    #[test]
    fn test_store_dispatch() {
        let mut store = EtfStore::new();
        store.dispatch(EtfAction::SelectEtf {
            symbol: "NDQ".into(),
            name: Some("Nasdaq 100".into()),
        });
        store.dispatch(EtfAction::CacheHoldings {
            symbol: "NDQ".into(),
            holdings: holdings(),
        });
        assert_eq!(store.state().selected_etf(), Some("NDQ"));

        let state = store.dispatch(EtfAction::NavigateBack);
        assert_eq!(state.selected_etf(), None);
        assert_eq!(state.drill_down_path().len(), 2);

        store.dispatch(EtfAction::ClearCache);
        let state = store.dispatch(EtfAction::NavigateToHome);
        assert!(state.drill_down_path().is_empty());
        assert!(state.holdings("NDQ").is_none());
    }
}
