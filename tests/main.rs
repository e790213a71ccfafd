use list_sort_research::counter::ComparisonCounter;
use list_sort_research::iterative::{bottom_up, doubling};
use list_sort_research::list::{Layout, Link, NodeArena, NodeId};
use list_sort_research::merge::merge;
use list_sort_research::recursion::{
    ownstack_array, ownstack_linked, ownstack_pool, recursive, recursive_alternating,
    recursive_counted, recursive_rhs,
};
use list_sort_research::split::{split, split_at};
use list_sort_research::verify::{check_reset, check_sorted, is_sorted, VerifyError};
use list_sort_research::{engine_by_name, ListSort, ENGINES};
use list_test_tools::lists::{self, Placement};
use list_test_tools::patterns;

mod recursive_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::recursion::recursive::SortImpl);
}

mod recursive_counted_tests {
    list_test_tools::instantiate_sort_tests!(
        list_sort_research::recursion::recursive_counted::SortImpl
    );
}

mod recursive_rhs_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::recursion::recursive_rhs::SortImpl);
}

mod recursive_alternating_tests {
    list_test_tools::instantiate_sort_tests!(
        list_sort_research::recursion::recursive_alternating::SortImpl
    );
}

mod ownstack_linked_tests {
    list_test_tools::instantiate_sort_tests!(
        list_sort_research::recursion::ownstack_linked::SortImpl
    );
}

mod ownstack_array_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::recursion::ownstack_array::SortImpl);
}

mod ownstack_pool_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::recursion::ownstack_pool::SortImpl);
}

mod bottom_up_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::iterative::bottom_up::SortImpl);
}

mod doubling_tests {
    list_test_tools::instantiate_sort_tests!(list_sort_research::iterative::doubling::SortImpl);
}

fn list(keys: &[u64]) -> (NodeArena, Link) {
    NodeArena::from_keys(keys, Layout::AddressOrdered)
}

fn ids(arena: &NodeArena, head: Link) -> Vec<NodeId> {
    arena.iter(head).collect()
}

fn tags(arena: &NodeArena, head: Link) -> Vec<u32> {
    arena.keys(head).into_iter().map(lists::tag_of).collect()
}

#[test]
fn split_odd_length() {
    let (mut arena, head) = list(&[10, 11, 12, 13, 14, 15, 16]);
    let original = ids(&arena, head);

    let (left, right) = split(&mut arena, head.unwrap());

    assert_eq!(Some(left), head);
    assert_eq!(ids(&arena, Some(left)), original[..4]);
    assert_eq!(ids(&arena, right), original[4..]);
    assert_eq!(arena.keys(Some(left)), [10, 11, 12, 13]);
    assert_eq!(arena.keys(right), [14, 15, 16]);
}

#[test]
fn split_lengths() {
    for len in 1..40usize {
        let keys: Vec<u64> = (0..len as u64).collect();
        let (mut arena, head) = list(&keys);
        let (left, right) = split(&mut arena, head.unwrap());
        assert_eq!(arena.list_len(Some(left)), len - len / 2, "len {len}");
        assert_eq!(arena.list_len(right), len / 2, "len {len}");

        let (mut arena, head) = list(&keys);
        let (left, right) = split_at(&mut arena, head.unwrap(), len - len / 2);
        assert_eq!(arena.keys(Some(left)), keys[..len - len / 2]);
        assert_eq!(arena.keys(right), keys[len - len / 2..]);
    }
}

#[test]
fn split_single() {
    let (mut arena, head) = list(&[5]);
    let (left, right) = split(&mut arena, head.unwrap());
    assert_eq!(Some(left), head);
    assert_eq!(right, None);
    assert_eq!(arena[left].next(), None);
}

/// Builds two lists in one arena, with tags 0.. on the left and 100.. on the right.
fn two_lists(left: &[u32], right: &[u32]) -> (NodeArena, Link, Link) {
    let keys: Vec<u64> = left
        .iter()
        .enumerate()
        .map(|(i, &k)| lists::tagged(k, i as u32))
        .chain(
            right
                .iter()
                .enumerate()
                .map(|(i, &k)| lists::tagged(k, 100 + i as u32)),
        )
        .collect();
    let (mut arena, head) = list(&keys);

    let right_head = match left.len() {
        0 => head,
        n => split_at(&mut arena, head.unwrap(), n).1,
    };
    let left_head = if left.is_empty() { None } else { head };
    (arena, left_head, right_head)
}

#[test]
fn merge_left_wins_ties() {
    // [(1,a), (1,b)] merged with [(1,c)] is [(1,a), (1,b), (1,c)].
    let (mut arena, left, right) = two_lists(&[1, 1], &[1]);
    let merged = merge(&mut arena, left, right, &mut |a, b| {
        lists::cmp_key(a, b) == std::cmp::Ordering::Less
    });
    assert_eq!(tags(&arena, merged), [0, 1, 100]);
}

#[test]
fn merge_interleaves() {
    let (mut arena, left, right) = two_lists(&[1, 3, 5, 7], &[2, 3, 4, 8, 9]);
    let merged = merge(&mut arena, left, right, &mut |a, b| {
        lists::cmp_key(a, b) == std::cmp::Ordering::Less
    });
    let keys: Vec<u32> = arena.keys(merged).into_iter().map(lists::key_of).collect();
    assert_eq!(keys, [1, 2, 3, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tags(&arena, merged), [0, 100, 1, 101, 102, 2, 3, 103, 104]);
}

#[test]
fn merge_with_empty_side() {
    let (mut arena, head) = list(&[1, 2, 3]);
    let mut calls = 0;
    let mut is_less = |a: &u64, b: &u64| {
        calls += 1;
        a < b
    };

    assert_eq!(merge(&mut arena, head, None, &mut is_less), head);
    assert_eq!(merge(&mut arena, None, head, &mut is_less), head);
    assert_eq!(merge(&mut arena, None, None, &mut is_less), None);
    assert_eq!(calls, 0);
    assert_eq!(arena.keys(head), [1, 2, 3]);
}

#[test]
fn merge_comparison_bounds() {
    let mut rng_keys = patterns::random_uniform(200, 0..=50);
    for (m, k) in [(1, 1), (1, 7), (7, 1), (5, 5), (13, 40), (64, 3)] {
        let mut left: Vec<u32> = rng_keys.drain(..m).map(|k| k as u32).collect();
        let mut right: Vec<u32> = rng_keys.drain(..k).map(|k| k as u32).collect();
        left.sort();
        right.sort();

        let (mut arena, l, r) = two_lists(&left, &right);
        let counter = ComparisonCounter::new();
        let mut compare = counter.wrap(lists::cmp_key);
        let merged = merge(&mut arena, l, r, &mut |a, b| {
            compare(a, b) == std::cmp::Ordering::Less
        });

        let count = counter.count() as usize;
        assert!(count >= m.min(k), "{m} + {k}: {count}");
        assert!(count <= m + k - 1, "{m} + {k}: {count}");
        assert_eq!(arena.list_len(merged), m + k);

        rng_keys.extend(patterns::random_uniform(m + k, 0..=50));
    }
}

#[test]
fn merge_disjoint_ranges_needs_min_comparisons() {
    let (mut arena, l, r) = two_lists(&[1, 2, 3], &[10, 11, 12, 13, 14]);
    let counter = ComparisonCounter::new();
    let mut compare = counter.wrap(lists::cmp_key);
    merge(&mut arena, l, r, &mut |a, b| {
        compare(a, b) == std::cmp::Ordering::Less
    });
    assert_eq!(counter.count(), 3);
}

#[test]
fn bottom_up_example() {
    let (mut arena, head) = NodeArena::from_keys(&[5, 3, 8, 1], Layout::Prepended);
    let sorted = bottom_up::sort(&mut arena, head);
    assert_eq!(arena.keys(sorted), [1, 3, 5, 8]);
}

#[test]
fn doubling_example() {
    let (mut arena, head) = NodeArena::from_keys(&[9, 2, 7, 2, 0, 5, 1], Layout::Prepended);
    let sorted = doubling::sort(&mut arena, head);
    assert_eq!(arena.keys(sorted), [0, 1, 2, 2, 5, 7, 9]);
}

fn stable_tags<S: ListSort>(len: usize) {
    let keys: Vec<u64> = patterns::random_uniform(len, 0..=6)
        .into_iter()
        .enumerate()
        .map(|(i, k)| lists::tagged(k as u32, i as u32))
        .collect();
    let (mut arena, head) = lists::from_keys(&keys, Placement::Scattered);
    let sorted = S::sort_by(&mut arena, head, lists::cmp_key);

    let mut expected = keys.clone();
    expected.sort_by(lists::cmp_key);
    assert_eq!(arena.keys(sorted), expected, "{} is not stable", S::name());
}

#[test]
fn stable_engines() {
    for len in [0, 1, 2, 3, 17, 100, 1_000] {
        stable_tags::<recursive::SortImpl>(len);
        stable_tags::<recursive_counted::SortImpl>(len);
        stable_tags::<ownstack_linked::SortImpl>(len);
        stable_tags::<ownstack_array::SortImpl>(len);
        stable_tags::<ownstack_pool::SortImpl>(len);
        stable_tags::<bottom_up::SortImpl>(len);
        stable_tags::<doubling::SortImpl>(len);
    }
}

#[test]
fn rhs_puts_right_half_first_on_ties() {
    let keys: Vec<u64> = (0..4).map(|i| lists::tagged(7, i)).collect();
    let (mut arena, head) = list(&keys);
    let sorted = recursive_rhs::sort_by(&mut arena, head, lists::cmp_key);
    assert_eq!(tags(&arena, sorted), [3, 2, 1, 0]);
}

#[test]
fn alternating_swaps_ties_on_every_other_level() {
    // Top level keeps half order, the level below puts its second half first.
    let keys: Vec<u64> = (0..4).map(|i| lists::tagged(7, i)).collect();
    let (mut arena, head) = list(&keys);
    let sorted = recursive_alternating::sort_by(&mut arena, head, lists::cmp_key);
    assert_eq!(tags(&arena, sorted), [1, 0, 3, 2]);

    // Eight nodes add a third level, which keeps half order again.
    let keys: Vec<u64> = (0..8).map(|i| lists::tagged(7, i)).collect();
    let (mut arena, head) = list(&keys);
    let sorted = recursive_alternating::sort_by(&mut arena, head, lists::cmp_key);
    assert_eq!(tags(&arena, sorted), [2, 3, 0, 1, 6, 7, 4, 5]);
}

#[test]
fn explicit_stacks_match_recursion_node_for_node() {
    for len in [2, 3, 5, 31, 64, 333] {
        let keys = patterns::random_dense(len);
        let (mut expected_arena, head) = list(&keys);
        let expected = recursive::sort(&mut expected_arena, head);
        let expected = ids(&expected_arena, expected);

        for sort in [ownstack_linked::sort, ownstack_array::sort, ownstack_pool::sort] {
            let (mut arena, head) = list(&keys);
            let sorted = sort(&mut arena, head);
            assert_eq!(ids(&arena, sorted), expected, "len {len}");
        }
    }
}

#[test]
fn explicit_stacks_count_like_recursion() {
    let keys = patterns::random(1_000);
    let count = |sort: fn(&mut NodeArena, Link, &ComparisonCounter) -> Link| {
        let (mut arena, head) = list(&keys);
        let counter = ComparisonCounter::new();
        sort(&mut arena, head, &counter);
        counter.count()
    };

    let reference = count(|a, h, c| recursive::sort_by(a, h, c.compare()));
    assert_eq!(count(|a, h, c| ownstack_linked::sort_by(a, h, c.compare())), reference);
    assert_eq!(count(|a, h, c| ownstack_array::sort_by(a, h, c.compare())), reference);
    assert_eq!(count(|a, h, c| ownstack_pool::sort_by(a, h, c.compare())), reference);
    assert_eq!(count(|a, h, c| recursive_counted::sort_by(a, h, c.compare())), reference);
}

#[test]
fn frame_pool_is_reusable() {
    let mut pool = ownstack_pool::FramePool::new();
    assert_eq!(pool.available(), list_sort_research::recursion::MAX_DEPTH);

    for len in [0, 1, 10, 4_097] {
        let (mut arena, head) = lists::build(len, patterns::random, Placement::Scattered);
        let sorted = ownstack_pool::sort_by_in(&mut arena, head, &mut pool, |a, b| a.cmp(b));
        assert_eq!(check_sorted(&arena, sorted, len), Ok(len));
        assert_eq!(pool.available(), list_sort_research::recursion::MAX_DEPTH);
    }
}

#[test]
fn explicit_stack_depth_is_ceil_log2() {
    // Single node halves never get a frame, so 32 frames are enough for 2^32 nodes.
    for (len, depth) in [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (1_024, 10), (1_025, 11)] {
        let mut pool = ownstack_pool::FramePool::new();
        let (mut arena, head) = lists::build(len, patterns::random, Placement::Prepended);
        let sorted = ownstack_pool::sort_by_in(&mut arena, head, &mut pool, |a, b| a.cmp(b));
        assert_eq!(check_sorted(&arena, sorted, len), Ok(len));
        assert_eq!(pool.high_water(), depth, "{len} nodes");
    }
}

#[test]
fn counter_accumulates_until_reset() {
    let counter = ComparisonCounter::new();

    let (mut arena, head) = list(&[3, 1, 2]);
    bottom_up::sort_by(&mut arena, head, counter.compare());
    let first = counter.count();
    assert!(first > 0);

    let (mut arena, head) = list(&[3, 1, 2]);
    bottom_up::sort_by(&mut arena, head, counter.compare());
    assert_eq!(counter.count(), 2 * first);

    counter.reset();
    assert_eq!(counter.count(), 0);
}

#[test]
fn verify_reports_position_and_length() {
    let (arena, head) = list(&[1, 2, 5, 4, 6]);
    assert_eq!(is_sorted(&arena, head), (3, false));
    assert_eq!(
        check_sorted(&arena, head, 5),
        Err(VerifyError::NotSorted { len: 5, at: 3 })
    );

    let (arena, head) = list(&[1, 2, 3]);
    assert_eq!(is_sorted(&arena, head), (3, true));
    assert_eq!(is_sorted(&arena, None), (0, true));
    let err = check_sorted(&arena, head, 4).unwrap_err();
    assert_eq!(err, VerifyError::WrongLength { expected: 4, found: 3 });
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        err.to_string(),
        "list of size 4 had 3 elements after sort"
    );
}

#[test]
fn reset_restores_build_order() {
    let keys = patterns::random(300);
    for placement in Placement::ALL {
        let (mut arena, head) = lists::from_keys(&keys, placement);
        let original = ids(&arena, head);

        let sorted = recursive::sort(&mut arena, head);
        assert_ne!(ids(&arena, sorted), original);

        assert_eq!(check_reset(&mut arena, head, keys.len()), Ok(head));
        assert_eq!(ids(&arena, head), original);
        assert_eq!(arena.keys(head), keys);

        assert_eq!(
            check_reset(&mut arena, head, keys.len() + 1),
            Err(VerifyError::ResetLength {
                expected: keys.len() + 1,
                found: keys.len()
            })
        );
    }
}

#[test]
fn layouts_place_nodes() {
    let keys = [10u64, 20, 30, 40];
    let index = |layout| {
        let (arena, head) = NodeArena::from_keys(&keys, layout);
        assert_eq!(arena.keys(head), keys);
        arena.iter(head).map(NodeId::index).collect::<Vec<_>>()
    };

    assert_eq!(index(Layout::Prepended), [3, 2, 1, 0]);
    assert_eq!(index(Layout::AddressOrdered), [0, 1, 2, 3]);
    assert_eq!(index(Layout::Placed(vec![2, 0, 3, 1])), [2, 0, 3, 1]);
}

#[test]
fn engines_by_name() {
    let names: Vec<&str> = ENGINES.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        [
            "recursive",
            "recursive_counted",
            "recursive_rhs",
            "recursive_alternating",
            "ownstack_linked",
            "ownstack_array",
            "ownstack_pool",
            "bottom_up",
            "doubling",
        ]
    );
    assert!(engine_by_name("quicksort").is_none());

    let keys = patterns::saw_mixed(257);
    let mut expected = keys.clone();
    expected.sort();
    for engine in &ENGINES {
        assert_eq!(engine_by_name(engine.name).map(|e| e.name), Some(engine.name));

        let (mut arena, head) = list(&keys);
        let sorted = (engine.sort)(&mut arena, head);
        assert_eq!(arena.keys(sorted), expected, "{}", engine.name);

        let (mut arena, head) = list(&keys);
        let sorted = (engine.sort_by)(&mut arena, head, &mut |a: &u64, b: &u64| b.cmp(a));
        assert_eq!(arena.keys(sorted), expected.iter().rev().copied().collect::<Vec<_>>());
    }
}
