//! Strategy selection: heuristic vs delegated.
//!
//! The demo-key sentinel comes from the reference UI contract: an absent key,
//! the literal `demo`, or any `demo-` prefixed key means "no reasoning
//! service", which selects the local heuristic.

use crate::classification::{Classification, ItemSnapshot};
use crate::delegated::DelegatedClassifier;
use crate::heuristic;

/// Classifier configuration, consumed as plain values.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Reasoning-service API key, or a demo sentinel forcing heuristic mode.
    pub api_key: Option<String>,
}

impl ClassifierConfig {
    pub fn heuristic() -> Self {
        Self { api_key: None }
    }

    pub fn delegated(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
        }
    }

    fn delegation_key(&self) -> Option<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() && key != "demo" && !key.starts_with("demo-") => Some(key),
            _ => None,
        }
    }
}

/// The selected classification strategy.
#[derive(Debug, Clone)]
pub enum Classifier {
    Heuristic,
    Delegated(DelegatedClassifier),
}

impl Classifier {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        match config.delegation_key() {
            Some(key) => Self::Delegated(DelegatedClassifier::new(key)),
            None => Self::Heuristic,
        }
    }

    pub fn is_heuristic(&self) -> bool {
        matches!(self, Self::Heuristic)
    }

    /// Classify a flagged item.
    ///
    /// Infallible: always returns a fully populated classification. Delegated
    /// failures degrade to the heuristic internally.
    pub async fn classify(&self, item: &ItemSnapshot) -> Classification {
        match self {
            Self::Heuristic => heuristic::classify(item),
            Self::Delegated(delegated) => delegated.classify(item).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_selects_heuristic() {
        let c = Classifier::from_config(&ClassifierConfig::heuristic());
        assert!(c.is_heuristic());
    }

    #[test]
    fn demo_sentinels_select_heuristic() {
        for key in ["demo", "demo-123", ""] {
            let c = Classifier::from_config(&ClassifierConfig::delegated(key));
            assert!(c.is_heuristic(), "key {key:?} should force heuristic mode");
        }
    }

    #[test]
    fn real_key_selects_delegation() {
        let c = Classifier::from_config(&ClassifierConfig::delegated("sk-live-abc"));
        assert!(!c.is_heuristic());
    }
}
