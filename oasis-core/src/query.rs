//! Filtering and ranking over a published dataset.

use std::collections::BTreeSet;

use crate::{Category, CoolIsland};

/// Default minimum comfort score of a query.
pub const DEFAULT_MIN_COMFORT: f64 = 5.0;
/// Default number of islands returned by [`DatasetQuery::coolest`].
pub const DEFAULT_LIMIT: usize = 5;

/// Selects and ranks cool islands the way the dashboard does.
///
/// Without a category set every category matches. An explicit empty set
/// matches nothing.
///
/// # Examples
/// ```
/// use oasis_core::{Category, DatasetQuery};
///
/// let query = DatasetQuery::default()
///     .with_categories([Category::ParkGarden])
///     .with_min_comfort(7.0)
///     .with_limit(3);
/// assert_eq!(query.limit(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetQuery {
    categories: Option<BTreeSet<Category>>,
    min_comfort: f64,
    limit: usize,
}

impl Default for DatasetQuery {
    fn default() -> Self {
        Self {
            categories: None,
            min_comfort: DEFAULT_MIN_COMFORT,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl DatasetQuery {
    /// Restrict matches to `categories`.
    #[must_use]
    pub fn with_categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    /// Selected categories, or `None` when every category matches.
    #[must_use]
    pub const fn categories(&self) -> Option<&BTreeSet<Category>> {
        self.categories.as_ref()
    }

    /// Require a comfort score of at least `min_comfort`.
    #[must_use]
    pub const fn with_min_comfort(mut self, min_comfort: f64) -> Self {
        self.min_comfort = min_comfort;
        self
    }

    /// Cap the ranked list at `limit` entries.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Maximum number of ranked islands.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Minimum comfort score.
    #[must_use]
    pub const fn min_comfort(&self) -> f64 {
        self.min_comfort
    }

    /// Report whether `island` passes the category and comfort filters.
    #[must_use]
    pub fn matches(&self, island: &CoolIsland) -> bool {
        let category_ok = self
            .categories
            .as_ref()
            .is_none_or(|selected| selected.contains(&island.category));
        category_ok && island.comfort_score >= self.min_comfort
    }

    /// Every matching island, in input order.
    #[must_use]
    pub fn filter<'a>(&self, islands: &'a [CoolIsland]) -> Vec<&'a CoolIsland> {
        islands.iter().filter(|i| self.matches(i)).collect()
    }

    /// Matching islands ranked coolest first, truncated to the limit.
    ///
    /// Ties keep input order.
    #[must_use]
    pub fn coolest<'a>(&self, islands: &'a [CoolIsland]) -> Vec<&'a CoolIsland> {
        let mut ranked = self.filter(islands);
        ranked.sort_by(|a, b| a.temp_diff.total_cmp(&b.temp_diff));
        ranked.truncate(self.limit);
        ranked
    }
}
