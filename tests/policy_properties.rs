//! Property tests over randomly generated traces.

use std::collections::{HashMap, HashSet, VecDeque};

use pagesim::{run_all, run_with, AccessTrace, Capacity, MissKind, PageId, PolicyKind, RunResult};
use proptest::prelude::*;

fn trace_strategy(max_page: u32, max_len: usize) -> impl Strategy<Value = AccessTrace> {
    prop::collection::vec(0..max_page, 0..max_len)
        .prop_map(|pages| pages.into_iter().collect::<AccessTrace>())
}

fn capacity_strategy(max: usize) -> impl Strategy<Value = Capacity> {
    (1..=max).prop_map(|n| Capacity::new(n).unwrap())
}

/// Fewest misses any eviction schedule can achieve, by exhaustive search.
fn optimal_misses(trace: &[PageId], capacity: usize) -> u64 {
    fn go(
        trace: &[PageId],
        index: usize,
        cache: Vec<PageId>,
        capacity: usize,
        memo: &mut HashMap<(usize, Vec<PageId>), u64>,
    ) -> u64 {
        let Some(&page) = trace.get(index) else {
            return 0;
        };
        if let Some(&known) = memo.get(&(index, cache.clone())) {
            return known;
        }

        let best = if cache.contains(&page) {
            go(trace, index + 1, cache.clone(), capacity, memo)
        } else if cache.len() < capacity {
            let mut next = cache.clone();
            next.push(page);
            next.sort();
            1 + go(trace, index + 1, next, capacity, memo)
        } else {
            (0..cache.len())
                .map(|victim| {
                    let mut next = cache.clone();
                    next[victim] = page;
                    next.sort();
                    1 + go(trace, index + 1, next, capacity, memo)
                })
                .min()
                .unwrap_or(0)
        };

        memo.insert((index, cache), best);
        best
    }

    go(trace, 0, Vec::new(), capacity, &mut HashMap::new())
}

fn check_common_invariants(result: &RunResult, trace: &AccessTrace) {
    let capacity = result.capacity.get();
    assert_eq!(result.outcomes.len(), trace.len());
    assert_eq!(result.total_hits + result.total_misses, trace.len() as u64);

    let mut seen = HashSet::new();
    let mut previous_len = 0;
    for (outcome, &page) in result.outcomes.iter().zip(trace.iter()) {
        seen.insert(page);

        assert_eq!(outcome.page, page);
        assert_eq!(outcome.miss_kind.is_none(), outcome.hit);
        assert_eq!(
            outcome.evicted.is_some(),
            outcome.miss_kind == Some(MissKind::Capacity)
        );
        match outcome.miss_kind {
            Some(MissKind::Compulsory) => assert!(previous_len < capacity),
            Some(MissKind::Capacity) => assert_eq!(previous_len, capacity),
            None => {}
        }

        assert!(outcome.cache.len() <= capacity);
        assert!(outcome.cache.len() <= seen.len());
        assert!(outcome.cache.contains(&page));
        let distinct: HashSet<_> = outcome.cache.iter().collect();
        assert_eq!(distinct.len(), outcome.cache.len());
        if let Some(evicted) = outcome.evicted {
            assert!(!outcome.cache.contains(&evicted));
        }

        previous_len = outcome.cache.len();
    }

    let hits = result.outcomes.iter().filter(|o| o.hit).count() as u64;
    assert_eq!(hits, result.total_hits);
}

proptest! {
    /// Counts, classifications and snapshots are consistent for every policy.
    #[test]
    fn prop_outcome_invariants(
        trace in trace_strategy(12, 60),
        capacity in capacity_strategy(6),
    ) {
        for result in run_all(&trace, capacity) {
            check_common_invariants(&result, &trace);
        }
    }

    /// Same inputs, same result.
    #[test]
    fn prop_runs_are_idempotent(
        trace in trace_strategy(10, 40),
        capacity in capacity_strategy(5),
    ) {
        for kind in PolicyKind::ALL {
            prop_assert_eq!(
                run_with(kind, &trace, capacity),
                run_with(kind, &trace, capacity)
            );
        }
    }

    /// FIFO always evicts the page that has been resident longest.
    #[test]
    fn prop_fifo_evicts_longest_resident(
        trace in trace_strategy(10, 60),
        capacity in capacity_strategy(5),
    ) {
        let result = run_with(PolicyKind::Fifo, &trace, capacity);
        let mut arrivals: VecDeque<PageId> = VecDeque::new();

        for outcome in &result.outcomes {
            if let Some(evicted) = outcome.evicted {
                prop_assert_eq!(arrivals.pop_front(), Some(evicted));
            }
            if !outcome.hit {
                arrivals.push_back(outcome.page);
            }
            prop_assert_eq!(arrivals.iter().copied().collect::<Vec<_>>(), outcome.cache.clone());
        }
    }

    /// LRU always evicts the resident with the oldest last access.
    #[test]
    fn prop_lru_evicts_least_recent(
        trace in trace_strategy(10, 60),
        capacity in capacity_strategy(5),
    ) {
        let result = run_with(PolicyKind::Lru, &trace, capacity);
        let mut last_access: HashMap<PageId, usize> = HashMap::new();
        let mut residents: Vec<PageId> = Vec::new();

        for (index, outcome) in result.outcomes.iter().enumerate() {
            if let Some(evicted) = outcome.evicted {
                let oldest = residents
                    .iter()
                    .min_by_key(|page| last_access[*page])
                    .copied();
                prop_assert_eq!(oldest, Some(evicted));
            }
            last_access.insert(outcome.page, index);
            residents = outcome.cache.clone();
        }
    }

    /// MIN matches the exhaustive optimum and no policy beats it.
    #[test]
    fn prop_min_is_optimal(
        trace in trace_strategy(6, 14),
        capacity in capacity_strategy(3),
    ) {
        let results = run_all(&trace, capacity);
        let min = results
            .iter()
            .find(|r| r.policy == PolicyKind::Min)
            .map(|r| r.total_misses)
            .unwrap();

        prop_assert_eq!(min, optimal_misses(&trace, capacity.get()));
        for result in &results {
            prop_assert!(result.total_misses >= min, "{} beat MIN", result.policy);
        }
    }

    /// Enough slots for every page: only compulsory misses, one per page.
    #[test]
    fn prop_large_cache_never_evicts(trace in trace_strategy(8, 40)) {
        let capacity = Capacity::new(8).unwrap();
        for result in run_all(&trace, capacity) {
            prop_assert_eq!(result.evictions().count(), 0);
            prop_assert_eq!(result.total_misses, trace.distinct_pages() as u64);
        }
    }

    /// Text traces parse back to the same pages.
    #[test]
    fn prop_trace_text_parses(trace in trace_strategy(1000, 30)) {
        let text = trace
            .iter()
            .map(|page| page.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        prop_assert_eq!(text.parse::<AccessTrace>().unwrap(), trace);
    }
}
