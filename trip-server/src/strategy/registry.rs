//! Name-keyed strategy registry.

use std::collections::HashMap;
use std::sync::Arc;

use super::RankingStrategy;

/// Errors from building the strategy registry.
///
/// Both variants are misconfigurations: the registry is built once at startup
/// and a failure here aborts planner construction entirely.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// Two strategies registered under the same name
    #[error("duplicate ranking strategy name: {0}")]
    DuplicateName(String),

    /// The mandatory default strategy is absent
    #[error("no default '{}' ranking strategy registered", StrategyRegistry::DEFAULT)]
    MissingDefault,
}

/// An immutable mapping from strategy name to implementation.
///
/// Built once from an explicit list of strategies. Duplicate names and a
/// missing `"cheapest"` entry are rejected at construction, so a registry
/// that exists always resolves the default.
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn RankingStrategy>>,
}

impl StrategyRegistry {
    /// Name of the mandatory default strategy.
    pub const DEFAULT: &'static str = "cheapest";

    /// Builds the registry from a list of strategy instances.
    ///
    /// # Errors
    ///
    /// Returns `Err` if two strategies share a name or no strategy is named
    /// [`StrategyRegistry::DEFAULT`].
    pub fn new(strategies: Vec<Arc<dyn RankingStrategy>>) -> Result<Self, StrategyError> {
        let mut map: HashMap<String, Arc<dyn RankingStrategy>> =
            HashMap::with_capacity(strategies.len());

        for strategy in strategies {
            let name = strategy.name().to_string();
            if map.insert(name.clone(), strategy).is_some() {
                return Err(StrategyError::DuplicateName(name));
            }
        }

        if !map.contains_key(Self::DEFAULT) {
            return Err(StrategyError::MissingDefault);
        }

        Ok(StrategyRegistry { strategies: map })
    }

    /// Looks up a strategy by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn RankingStrategy>> {
        self.strategies.get(name).cloned()
    }

    /// Returns the default strategy.
    pub fn default_strategy(&self) -> Arc<dyn RankingStrategy> {
        // Present by construction
        self.strategies[Self::DEFAULT].clone()
    }

    /// All registered names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always false: construction requires the default entry.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
