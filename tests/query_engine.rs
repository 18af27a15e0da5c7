//! Query Engine Property Tests
//!
//! Checks the predicate builder, ordering and pager against generated
//! rosters through the in-memory store:
//! - Empty criteria match everything
//! - Inverted ranges match nothing
//! - Explicit banned=false differs from an omitted flag
//! - Pages partition the result set
//! - Results are ascending in the resolved field

use std::collections::HashMap;

use playerbase::player::{NewPlayer, Player, Profession, Race};
use playerbase::query::{Criteria, ListQuery, PageSpec, PlayerOrder, Predicate};
use playerbase::storage::{InMemoryPlayerStore, PlayerStore};

// =============================================================================
// Helper Functions
// =============================================================================

/// Small deterministic generator so rosters are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn roster(seed: u64, size: usize) -> Vec<NewPlayer> {
    let mut rng = Lcg(seed);
    let syllables = ["ka", "ri", "mo", "el", "th", "ur", "an", "go"];

    (0..size)
        .map(|_| {
            let name: String = (0..3)
                .map(|_| syllables[rng.below(syllables.len() as u64) as usize])
                .collect();
            NewPlayer {
                name,
                title: format!("title {}", rng.below(10)),
                race: Some(Race::ALL[rng.below(Race::ALL.len() as u64) as usize]),
                profession: Some(
                    Profession::ALL[rng.below(Profession::ALL.len() as u64) as usize],
                ),
                birthday: Some(rng.below(1_000_000) as i64),
                banned: rng.below(3) == 0,
                experience: rng.below(200_000) as i64,
            }
        })
        .collect()
}

fn store(seed: u64, size: usize) -> InMemoryPlayerStore {
    InMemoryPlayerStore::with_players(roster(seed, size)).unwrap()
}

fn all(store: &InMemoryPlayerStore, predicate: &Predicate) -> Vec<Player> {
    store
        .fetch_page(
            predicate,
            PlayerOrder::Id.resolve(),
            PageSpec {
                number: 0,
                size: usize::MAX,
            },
        )
        .unwrap()
}

fn params(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// =============================================================================
// Predicate Properties
// =============================================================================

#[test]
fn test_empty_criteria_match_every_record() {
    for seed in 1..6 {
        let store = store(seed, 40);
        let predicate = Predicate::from_criteria(&Criteria::default());
        assert_eq!(store.count(&predicate).unwrap(), 40);
    }
}

#[test]
fn test_inverted_experience_range_matches_nothing() {
    let store = store(7, 60);
    let mut rng = Lcg(99);

    for _ in 0..50 {
        let max = rng.below(200_000) as i64;
        let min = max + 1 + rng.below(1_000) as i64;
        let criteria = Criteria::parse(&params(&[
            ("minExperience", min.to_string()),
            ("maxExperience", max.to_string()),
        ]))
        .unwrap();

        assert_eq!(store.count(&Predicate::from_criteria(&criteria)).unwrap(), 0);
    }
}

#[test]
fn test_explicit_false_differs_from_omitted() {
    let store = store(11, 60);

    let omitted = Predicate::from_criteria(&Criteria::default());
    let only_false = Predicate::from_criteria(&Criteria {
        banned: Some(false),
        ..Default::default()
    });

    let everyone = all(&store, &omitted);
    let clean = all(&store, &only_false);

    assert_eq!(everyone.len(), 60);
    assert!(clean.iter().all(|p| !p.banned));
    assert_eq!(clean.len(), everyone.iter().filter(|p| !p.banned).count());
    assert!(clean.len() < everyone.len());
}

#[test]
fn test_count_agrees_with_listing() {
    let store = store(13, 80);
    let criteria_sets = [
        vec![("race", "ELF".to_string())],
        vec![("profession", "NAZGUL".to_string()), ("banned", "true".to_string())],
        vec![("minLevel", "5".to_string()), ("maxLevel", "40".to_string())],
        vec![("after", "250000".to_string()), ("before", "750000".to_string())],
        vec![("name", "ka".to_string()), ("title", "title 3".to_string())],
    ];

    for pairs in criteria_sets {
        let criteria = Criteria::parse(&params(&pairs)).unwrap();
        let predicate = Predicate::from_criteria(&criteria);
        let listed = all(&store, &predicate);

        assert_eq!(store.count(&predicate).unwrap(), listed.len() as u64);
        assert!(listed.iter().all(|p| predicate.matches(p)));
    }
}

// =============================================================================
// Ordering and Paging Properties
// =============================================================================

#[test]
fn test_pages_partition_results() {
    let store = store(17, 47);

    for size in [1usize, 2, 3, 5, 10, 47, 100] {
        let mut seen = Vec::new();
        let mut number = 0;
        loop {
            let query = ListQuery::parse(&params(&[
                ("pageNumber", number.to_string()),
                ("pageSize", size.to_string()),
                ("order", "EXPERIENCE".to_string()),
            ]))
            .unwrap();
            let page = store
                .fetch_page(&Predicate::match_all(), query.order.resolve(), query.page)
                .unwrap();

            assert!(page.len() <= size);
            if page.is_empty() {
                break;
            }
            seen.extend(page.into_iter().map(|p| p.id));
            number += 1;
        }

        let mut sorted = seen.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(seen.len(), 47, "page size {size}");
        assert_eq!(sorted.len(), 47, "page size {size}");
    }
}

#[test]
fn test_results_ascend_in_resolved_field() {
    let store = store(19, 50);

    for order in PlayerOrder::ALL {
        let sort = order.resolve();
        let players = store
            .fetch_page(
                &Predicate::match_all(),
                sort,
                PageSpec {
                    number: 0,
                    size: 50,
                },
            )
            .unwrap();

        for pair in players.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                sort.field.value_of(a) <= sort.field.value_of(b),
                "{order} not ascending between {} and {}",
                a.id,
                b.id
            );
        }
    }
}
