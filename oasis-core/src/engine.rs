//! The cool-island engine: catalog, enrichment and aggregation in one pass.

use chrono::NaiveDateTime;
use log::{debug, info};
use rand::Rng;

use crate::{
    Aggregator, AmbientConditions, Clock, ComfortScorer, CoolIsland, Dataset,
    HeuristicComfortScorer, Location, LocationCatalog, TemperatureDifferential, assign_amenities,
    estimate_crowd,
};

/// Generates a fresh [`Dataset`] from ambient conditions.
///
/// The engine never fails: configuration is validated when the catalog is
/// built and every enrichment step is total.
///
/// # Examples
/// ```
/// use chrono::DateTime;
/// use oasis_core::{AmbientConditions, CoolIslandEngine, FixedClock, LocationCatalog};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let clock = FixedClock::new(DateTime::parse_from_rfc3339("2025-07-16T13:00:00+02:00").expect("valid"));
/// let dataset = CoolIslandEngine::new(LocationCatalog::default()).run(
///     AmbientConditions::fallback(),
///     &clock,
///     &mut StdRng::seed_from_u64(3),
/// );
/// assert_eq!(dataset.cool_islands.len(), 27);
/// assert!(dataset.cool_islands.iter().all(|i| i.temp_diff <= 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct CoolIslandEngine<S = HeuristicComfortScorer> {
    catalog: LocationCatalog,
    aggregator: Aggregator,
    scorer: S,
}

impl Default for CoolIslandEngine {
    fn default() -> Self {
        Self::new(LocationCatalog::default())
    }
}

impl CoolIslandEngine {
    /// Build an engine with the default scorer.
    #[must_use]
    pub fn new(catalog: LocationCatalog) -> Self {
        Self::with_scorer(catalog, HeuristicComfortScorer::default())
    }
}

impl<S: ComfortScorer> CoolIslandEngine<S> {
    /// Build an engine around a custom scorer.
    #[must_use]
    pub fn with_scorer(catalog: LocationCatalog, scorer: S) -> Self {
        Self {
            catalog,
            aggregator: Aggregator::default(),
            scorer,
        }
    }

    /// Replace the aggregator, e.g. to change the source label.
    #[must_use]
    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// The catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// The scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Enrich one location.
    ///
    /// Draws the differential, then the amenities, from `rng`; the crowd
    /// level and comfort score are deterministic given those draws.
    pub fn enrich<R: Rng + ?Sized>(
        &self,
        location: Location,
        ambient: f64,
        moment: NaiveDateTime,
        rng: &mut R,
    ) -> CoolIsland {
        let category = location.category;
        let differential = TemperatureDifferential::sample(category, ambient, rng);
        let amenities = assign_amenities(category, rng);
        let crowd = estimate_crowd(moment, category, ambient);
        let comfort = self.scorer.score(differential.temp_diff, &amenities, crowd);
        debug!(
            "{}: {} °C ({:+}), crowd {crowd}, comfort {comfort}",
            location.name, differential.local_temp, differential.temp_diff
        );
        CoolIsland::from_parts(location, differential, amenities, crowd, comfort)
    }

    /// Generate and enrich every catalog location, in catalog order.
    pub fn generate_islands<R: Rng + ?Sized>(
        &self,
        ambient: f64,
        moment: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<CoolIsland> {
        self.catalog
            .generate(rng)
            .into_iter()
            .map(|location| self.enrich(location, ambient, moment, rng))
            .collect()
    }

    /// Run the engine once.
    ///
    /// The clock is read a single time; the same instant drives crowd
    /// estimation and stamps the dataset.
    pub fn run<R: Rng + ?Sized>(
        &self,
        conditions: AmbientConditions,
        clock: &dyn Clock,
        rng: &mut R,
    ) -> Dataset {
        let now = clock.now();
        let ambient = conditions.ambient_temperature();
        let islands = self.generate_islands(ambient, now.naive_local(), rng);
        info!("generated {} cool islands at {ambient} °C", islands.len());
        self.aggregator.assemble(conditions, islands, now)
    }
}
