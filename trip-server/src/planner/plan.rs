//! Trip planning orchestration.
//!
//! The [`TravelPlanner`] coordinates the search provider, the active ranking
//! strategy, and the itinerary builder: it runs one search per option
//! category, selects a candidate combination, scores it, and assembles the
//! itinerary. Results of the latest pass are cached so the itinerary can be
//! rebuilt under a different strategy without re-querying.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::builder::ItineraryBuilder;
use crate::domain::{
    ActivityOption, ActivityQuery, Itinerary, LuggageOption, StayOption, StayQuery,
    TransportOption, TransportQuery, TripQuery,
};
use crate::strategy::{RankingStrategy, StrategyError, StrategyRegistry};

use super::config::PlanConfig;

/// The option category a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchCategory {
    Transport,
    Stay,
    Activity,
}

impl fmt::Display for SearchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchCategory::Transport => "transport",
            SearchCategory::Stay => "stay",
            SearchCategory::Activity => "activity",
        };
        f.write_str(label)
    }
}

/// Failure of a category search at the provider boundary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("searching {category} options failed: {message}")]
pub struct SearchError {
    /// Which category search failed.
    pub category: SearchCategory,
    /// Provider-supplied description of the failure.
    pub message: String,
}

impl SearchError {
    /// Creates a search error for the given category.
    pub fn new(category: SearchCategory, message: impl Into<String>) -> Self {
        SearchError {
            category,
            message: message.into(),
        }
    }
}

/// Source of candidate options, one operation per category.
///
/// Implementations return candidates ordered most-relevant-first; the planner
/// trusts that ordering and never re-sorts. An empty list is a valid answer.
/// This abstraction also allows the planner to be tested with mock data.
pub trait SearchProvider {
    /// Searches transport legs matching the query.
    fn search_transports(&self, query: &TransportQuery)
    -> Result<Vec<TransportOption>, SearchError>;

    /// Searches stays matching the query.
    fn search_stays(&self, query: &StayQuery) -> Result<Vec<StayOption>, SearchError>;

    /// Searches activities matching the query.
    fn search_activities(&self, query: &ActivityQuery)
    -> Result<Vec<ActivityOption>, SearchError>;
}

/// Error from planner operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Strategy name not present in the registry; the active strategy is
    /// unchanged.
    #[error("unknown ranking strategy: {0}")]
    UnknownStrategy(String),

    /// The latest search found no transport or no stay candidate. The result
    /// cache still holds whatever was found, so a caller can inspect what was
    /// missing.
    #[error("no viable trip combination: found {transports} transport and {stays} stay options")]
    NoViableCombination { transports: usize, stays: usize },

    /// A preview was requested before any trip was planned.
    #[error("no trip planned yet; call plan_trip first")]
    PlanNotYetExecuted,

    /// A category search failed; the pass was aborted without touching the
    /// result cache.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Search results cached from the most recent planning pass.
///
/// The luggage sequence exists for shape parity with the itinerary but is
/// never populated: luggage is not searched automatically.
#[derive(Debug, Clone)]
struct SearchResults {
    transports: Vec<TransportOption>,
    stays: Vec<StayOption>,
    activities: Vec<ActivityOption>,
    luggage: Vec<LuggageOption>,
}

/// Orchestrates searching, ranking, and itinerary assembly.
///
/// The planner owns its builder and result cache; a shared instance must be
/// externally serialized (the web layer holds it behind a mutex), since a
/// planning pass is a read-modify-write of the cache.
pub struct TravelPlanner<P> {
    provider: P,
    registry: StrategyRegistry,
    active: Arc<dyn RankingStrategy>,
    builder: ItineraryBuilder,
    cache: Option<SearchResults>,
    last_score: Option<i64>,
    config: PlanConfig,
}

impl<P: SearchProvider> TravelPlanner<P> {
    /// Creates a planner with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the strategy set contains duplicate names or lacks
    /// the mandatory `"cheapest"` default.
    pub fn new(
        provider: P,
        strategies: Vec<Arc<dyn RankingStrategy>>,
    ) -> Result<Self, StrategyError> {
        Self::with_config(provider, strategies, PlanConfig::default())
    }

    /// Creates a planner with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TravelPlanner::new`].
    pub fn with_config(
        provider: P,
        strategies: Vec<Arc<dyn RankingStrategy>>,
        config: PlanConfig,
    ) -> Result<Self, StrategyError> {
        let registry = StrategyRegistry::new(strategies)?;
        let active = registry.default_strategy();

        Ok(TravelPlanner {
            provider,
            registry,
            active,
            builder: ItineraryBuilder::new(),
            cache: None,
            last_score: None,
            config,
        })
    }

    /// Replaces the active ranking strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownStrategy`] if no strategy with that name
    /// is registered; the active strategy is left unchanged.
    pub fn set_ranking_strategy(&mut self, name: &str) -> Result<(), PlanError> {
        match self.registry.get(name) {
            Some(strategy) => {
                info!(strategy = name, "active ranking strategy changed");
                self.active = strategy;
                Ok(())
            }
            None => Err(PlanError::UnknownStrategy(name.to_string())),
        }
    }

    /// Name of the currently active strategy.
    pub fn active_strategy_name(&self) -> &str {
        self.active.name()
    }

    /// All registered strategy names, sorted.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Score of the most recently built combination, if any.
    pub fn last_score(&self) -> Option<i64> {
        self.last_score
    }

    /// Plans a trip end to end.
    ///
    /// Derives one query per category from `query`, runs the three searches,
    /// caches the full result lists (overwriting any previous pass), selects
    /// the first transport and first stay candidate, scores the selection
    /// with the active strategy, and assembles the itinerary with every found
    /// activity included. Luggage is never searched or auto-selected.
    ///
    /// The score does not influence selection; the provider's ordering is
    /// trusted and the first candidate of each list is taken.
    ///
    /// # Errors
    ///
    /// - [`PlanError::Search`] if any category search fails; the cache keeps
    ///   the results of the previous successful pass.
    /// - [`PlanError::NoViableCombination`] if the transport or stay search
    ///   came back empty; the cache holds what was found.
    pub fn plan_trip(&mut self, query: &TripQuery) -> Result<Itinerary, PlanError> {
        info!(
            origin = query.origin(),
            destination = query.destination(),
            passengers = query.passengers(),
            "planning trip"
        );

        let transport_query = query.transport_query(self.config.transport_max_results);
        let stay_query = query.stay_query();
        let activity_query = query.activity_query();

        // All three searches must succeed before the cache is touched, so a
        // failed pass leaves the previous results intact.
        let transports = self.provider.search_transports(&transport_query)?;
        debug!(count = transports.len(), "transport search complete");

        let stays = self.provider.search_stays(&stay_query)?;
        debug!(count = stays.len(), "stay search complete");

        let activities = self.provider.search_activities(&activity_query)?;
        debug!(count = activities.len(), "activity search complete");

        self.cache = Some(SearchResults {
            transports,
            stays,
            activities,
            luggage: Vec::new(),
        });

        self.select_and_build()
    }

    /// Rebuilds the itinerary from the cached search results.
    ///
    /// Repeats selection, scoring, and assembly against the most recent
    /// pass's results using the *currently* active strategy, without invoking
    /// the search provider. Changing the strategy between `plan_trip` and
    /// `preview` therefore changes the reported score, but not the selected
    /// options, since selection always takes the first candidate.
    ///
    /// # Errors
    ///
    /// - [`PlanError::PlanNotYetExecuted`] if no pass has run yet.
    /// - [`PlanError::NoViableCombination`] if the cached pass found no
    ///   transport or no stay.
    pub fn preview(&mut self) -> Result<Itinerary, PlanError> {
        if self.cache.is_none() {
            return Err(PlanError::PlanNotYetExecuted);
        }

        debug!(
            strategy = self.active.name(),
            "rebuilding itinerary from cached results"
        );
        self.select_and_build()
    }

    /// Selects the best candidates from the cache, scores them, and builds
    /// the itinerary. Shared tail of `plan_trip` and `preview`.
    fn select_and_build(&mut self) -> Result<Itinerary, PlanError> {
        let Some(results) = &self.cache else {
            return Err(PlanError::PlanNotYetExecuted);
        };

        // First candidate per category: the provider's ordering is trusted.
        if results.transports.is_empty() || results.stays.is_empty() {
            return Err(PlanError::NoViableCombination {
                transports: results.transports.len(),
                stays: results.stays.len(),
            });
        }
        let transport = results.transports[0].clone();
        let stay = results.stays[0].clone();

        let score = self.active.score(&transport, &stay, &results.activities);
        info!(
            strategy = self.active.name(),
            score, "scored selected combination"
        );

        self.builder.reset();
        self.builder.add_transport(transport);
        self.builder.add_stay(stay);
        for activity in &results.activities {
            self.builder.add_activity(activity.clone());
        }
        for luggage in &results.luggage {
            self.builder.add_luggage(luggage.clone());
        }

        self.last_score = Some(score);
        Ok(self.builder.result())
    }
}
