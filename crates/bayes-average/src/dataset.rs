//! Rated items and the rank lookups that feed the median-count heuristic.
//!
//! The calculator does not sort anything itself. [`RankedCounts`] is one
//! ready-made ranking facility for callers that hold their ratings in
//! memory: it sorts rating counts ascending and answers the two supplier
//! queries [`BayesianAverage::derive_confidence_weight`] asks.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median};

use crate::calculator::BayesianAverage;

/// One rated element: its individual ratings and how many ratings it has.
///
/// `ratings_count` is kept separately from `ratings.len()` because sources
/// often report a count without shipping every rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    pub name: String,
    pub ratings: Vec<f64>,
    pub ratings_count: u64,
}

impl RatedItem {
    pub fn new(name: impl Into<String>, ratings: Vec<f64>, ratings_count: u64) -> Self {
        Self {
            name: name.into(),
            ratings,
            ratings_count,
        }
    }

    /// Build an item whose count is the number of ratings given.
    pub fn from_ratings(name: impl Into<String>, ratings: Vec<f64>) -> Self {
        let count = ratings.len() as u64;
        Self::new(name, ratings, count)
    }

    /// Sum of the individual ratings.
    pub fn sum(&self) -> f64 {
        self.ratings.iter().sum()
    }

    /// Mean of the individual ratings, `0` when there are none.
    pub fn average(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        self.sum() / self.ratings.len() as f64
    }
}

/// A dataset of rated items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSet {
    items: Vec<RatedItem>,
}

impl RatingSet {
    pub fn new(items: Vec<RatedItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: RatedItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[RatedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of ratings across all items, from the declared counts.
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|i| i.ratings_count).sum()
    }

    /// Sum of every rating of every item.
    pub fn total_sum(&self) -> f64 {
        self.items.iter().map(RatedItem::sum).sum()
    }

    /// Rating counts ranked ascending.
    pub fn ranked_counts(&self) -> RankedCounts {
        RankedCounts::new(self.items.iter().map(|i| i.ratings_count).collect())
    }

    /// Calculator primed with this dataset's prior mean and a confidence
    /// weight derived by the median-count heuristic.
    pub fn calculator(&self) -> BayesianAverage {
        let mut calc = BayesianAverage::new(self.total_count() as f64, self.total_sum());
        self.derive_weight_into(&mut calc);
        calc
    }

    pub(crate) fn derive_weight_into(&self, calc: &mut BayesianAverage) {
        let ranked = self.ranked_counts();
        calc.derive_confidence_weight(
            self.len() as i64,
            |p| ranked.even_supplier(p),
            |p| ranked.odd_supplier(p),
        );
    }

    /// Textbook median of the rating counts, `None` for an empty set.
    ///
    /// Diagnostic only. The heuristic deliberately does not use it.
    pub fn median_count(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        let counts: Vec<f64> = self.items.iter().map(|i| i.ratings_count as f64).collect();
        Some(Data::new(counts).median())
    }
}

impl FromIterator<RatedItem> for RatingSet {
    fn from_iter<I: IntoIterator<Item = RatedItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Rating counts sorted ascending, indexed by rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCounts {
    counts: Vec<u64>,
}

impl RankedCounts {
    pub fn new(mut counts: Vec<u64>) -> Self {
        counts.sort_unstable();
        Self { counts }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    /// Count at `rank`. Ranks outside the dataset read as `0`.
    pub fn count_at(&self, rank: i64) -> f64 {
        match usize::try_from(rank).ok().and_then(|r| self.counts.get(r)) {
            Some(&count) => count as f64,
            None => {
                tracing::warn!(rank, len = self.counts.len(), "rank outside dataset, reading 0");
                0.0
            }
        }
    }

    /// Count at rank `position / 2`.
    pub fn even_supplier(&self, position: i64) -> f64 {
        self.count_at(position / 2)
    }

    /// Mean of the counts at ranks `(position + 1) / 2` and `(position - 1) / 2`.
    ///
    /// Saturates at the `i64` bounds; those ranks are out of range anyway.
    pub fn odd_supplier(&self, position: i64) -> f64 {
        let upper = position.saturating_add(1) / 2;
        let lower = position.saturating_sub(1) / 2;
        (self.count_at(upper) + self.count_at(lower)) / 2.0
    }
}
