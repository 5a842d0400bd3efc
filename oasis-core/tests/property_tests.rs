//! Property tests for the enrichment components.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use oasis_core::{
    Amenities, Amenity, AMENITY_POOL, AmbientConditions, Category, ComfortScorer, CoolIslandEngine,
    CrowdLevel, FixedClock, HeuristicComfortScorer, LocationCatalog, TemperatureDifferential,
    WeatherSnapshot, crowd_level_at, estimate_crowd, round_to_tenth,
};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn category() -> impl Strategy<Value = Category> {
    select(Category::ALL.to_vec())
}

fn crowd() -> impl Strategy<Value = CrowdLevel> {
    select(CrowdLevel::ALL.to_vec())
}

fn amenities() -> impl Strategy<Value = Amenities> {
    subsequence(AMENITY_POOL.to_vec(), 0..=AMENITY_POOL.len())
        .prop_map(|tags| tags.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn crowd_level_stays_on_scale(
        hour in 0_u32..48,
        weekend in any::<bool>(),
        category in category(),
        ambient in -20.0_f64..50.0,
    ) {
        let level = crowd_level_at(hour, weekend, category, ambient);
        prop_assert!(level.index() <= 2);
    }

    #[test]
    fn worship_is_never_busier_than_base(hour in 0_u32..24, weekend in any::<bool>(), ambient in -20.0_f64..50.0) {
        let level = crowd_level_at(hour, weekend, Category::PlaceOfWorship, ambient);
        prop_assert!(level <= oasis_core::time_of_day_base(hour));
    }

    #[test]
    fn hot_cultural_sites_are_always_busy(
        day in 1_u32..=31,
        hour in 0_u32..24,
        ambient in 30.01_f64..50.0,
    ) {
        let moment = NaiveDate::from_ymd_opt(2025, 7, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid July moment");
        prop_assert_eq!(estimate_crowd(moment, Category::CulturalSite, ambient), CrowdLevel::High);
    }

    #[test]
    fn comfort_is_bounded_and_tenth_precise(
        temp_diff in -20.0_f64..=0.0,
        tags in amenities(),
        level in crowd(),
    ) {
        let score = HeuristicComfortScorer::default().score(temp_diff, &tags, level);
        prop_assert!((1.0..=10.0).contains(&score));
        prop_assert_eq!(score, round_to_tenth(score));
    }

    #[test]
    fn air_conditioning_never_lowers_comfort(
        temp_diff in -10.0_f64..=0.0,
        tags in amenities(),
        level in crowd(),
    ) {
        let scorer = HeuristicComfortScorer::default();
        let mut cooled = tags.clone();
        cooled.insert(Amenity::AirConditioning);
        prop_assert!(scorer.score(temp_diff, &cooled, level) >= scorer.score(temp_diff, &tags, level));
    }

    #[test]
    fn local_temp_matches_rounded_sum(
        category in category(),
        ambient in -10.0_f64..45.0,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let diff = TemperatureDifferential::sample(category, ambient, &mut rng);
        prop_assert!(diff.temp_diff <= 0.0);
        prop_assert_eq!(diff.local_temp, round_to_tenth(ambient + diff.temp_diff));
    }

    #[test]
    fn generated_records_honour_invariants(
        ambient in 15.0_f64..42.0,
        hour in 0_u32..24,
        seed in any::<u64>(),
    ) {
        let offset = FixedOffset::east_opt(7200).expect("valid offset");
        let now: DateTime<FixedOffset> = offset
            .with_ymd_and_hms(2025, 7, 12, hour, 30, 0)
            .single()
            .expect("unambiguous moment");
        let conditions = AmbientConditions {
            weather: WeatherSnapshot { temperature: ambient, ..WeatherSnapshot::fallback() },
            ..AmbientConditions::fallback()
        };
        let dataset = CoolIslandEngine::new(LocationCatalog::default()).run(
            conditions,
            &FixedClock::new(now),
            &mut ChaCha8Rng::seed_from_u64(seed),
        );
        for island in &dataset.cool_islands {
            prop_assert!(island.temp_diff <= 0.0);
            prop_assert!((1.0..=10.0).contains(&island.comfort_score));
            prop_assert!(!island.amenities.is_empty());
            match island.category {
                Category::WaterFeature => prop_assert!(island.amenities.contains(Amenity::DrinkingWater)),
                Category::CulturalSite => prop_assert!(island.amenities.contains(Amenity::AirConditioning)),
                _ => {}
            }
        }
    }
}
