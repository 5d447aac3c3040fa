use serde::Serialize;

use crate::catalog::index::{CatalogIndex, DEFAULT_NEAREST};
use crate::core::record::{ColorQuery, SearchableRecord};
use crate::format::template::FormatData;

/// How a query was resolved against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// The query's hex is in the catalog
    Exact,
    /// No exact hex; closest records by RGB distance
    Nearest,
}

/// A single catalog record matched to a query
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a SearchableRecord,

    /// RGB distance from the query (0 for exact matches)
    pub distance: f64,
}

impl MatchResult<'_> {
    /// Renderer input for this record, carrying the query's alpha
    pub fn format_data(&self, alpha: Option<f64>) -> FormatData {
        FormatData::from_record(self.record).with_alpha(alpha)
    }
}

/// Result of resolving a query: exact records, or nearest suggestions
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome<'a> {
    pub kind: MatchKind,

    /// Query hex, lowercase `#rrggbb`
    pub query: String,

    /// Query alpha, carried for formatting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    pub matches: Vec<MatchResult<'a>>,
}

impl<'a> MatchOutcome<'a> {
    /// First match, if any
    pub fn best(&self) -> Option<&MatchResult<'a>> {
        self.matches.first()
    }

    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Number of nearest records suggested when there is no exact match
    pub suggestions: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            suggestions: DEFAULT_NEAREST,
        }
    }
}

/// Resolves color queries against an index: exact hex first, nearest as fallback
pub struct MatchingEngine<'a> {
    index: &'a CatalogIndex,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(index: &'a CatalogIndex) -> Self {
        Self {
            index,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(index: &'a CatalogIndex, config: MatchingConfig) -> Self {
        Self { index, config }
    }

    /// Resolve a query: every record sharing its hex, otherwise the nearest records
    pub fn resolve(&self, query: &ColorQuery) -> MatchOutcome<'a> {
        let hex = query.hex();

        // Step 1: exact hex match
        let exact = self.index.find_by_hex(&hex);
        if !exact.is_empty() {
            return MatchOutcome {
                kind: MatchKind::Exact,
                query: hex,
                alpha: query.alpha,
                matches: exact
                    .into_iter()
                    .map(|record| MatchResult {
                        record,
                        distance: 0.0,
                    })
                    .collect(),
            };
        }

        // Step 2: nearest suggestions
        let matches = self
            .index
            .find_nearest_with_distance(query, self.config.suggestions)
            .into_iter()
            .map(|(record, distance)| MatchResult { record, distance })
            .collect();

        MatchOutcome {
            kind: MatchKind::Nearest,
            query: hex,
            alpha: query.alpha,
            matches,
        }
    }

    /// Renderer input for the best match, or for the raw query when nothing matched
    pub fn format_data(&self, query: &ColorQuery) -> FormatData {
        let outcome = self.resolve(query);
        match outcome.best() {
            Some(best) => best.format_data(query.alpha),
            None => FormatData::from_query(query),
        }
    }
}
