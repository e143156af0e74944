//! Planner configuration.

/// Tunables for query derivation.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Maximum number of transport candidates requested per search.
    /// Stay and activity searches are uncapped.
    pub transport_max_results: usize,
}

impl PlanConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transport_max_results: usize) -> Self {
        Self {
            transport_max_results,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            transport_max_results: 10,
        }
    }
}
