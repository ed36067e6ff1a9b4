use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::predicates::PredicateKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Predicate missing from evaluation order: {0}")]
    MissingPredicate(PredicateKind),
    #[error("Predicate listed twice in evaluation order: {0}")]
    DuplicatePredicate(PredicateKind),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub version: String,
    /// Evaluation order of the predicates. Must name every predicate once.
    pub predicate_order: Vec<PredicateKind>,
}

impl FilterConfig {
    /// Cheapest predicate first.
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            predicate_order: vec![PredicateKind::Tab, PredicateKind::Facets, PredicateKind::Text],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (pos, kind) in self.predicate_order.iter().enumerate() {
            if self.predicate_order[..pos].contains(kind) {
                return Err(ConfigError::DuplicatePredicate(*kind));
            }
        }

        match PredicateKind::ALL
            .into_iter()
            .find(|kind| !self.predicate_order.contains(kind))
        {
            Some(missing) => Err(ConfigError::MissingPredicate(missing)),
            None => Ok(()),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::v0()
    }
}
