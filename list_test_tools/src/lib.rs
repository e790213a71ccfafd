pub mod lists;
pub mod patterns;

pub use paste;

#[macro_export]
macro_rules! instantiate_sort_test_inner {
    ($sort_impl:ty, $test_fn_name:ident) => {
        #[test]
        fn $test_fn_name() {
            $crate::tests::$test_fn_name::<$sort_impl>();
        }
    };
}

/// Emits one test per pattern and placement, e.g. `random_dense_scattered`.
#[macro_export]
macro_rules! instantiate_pattern_tests {
    ($sort_impl:ty, [$($pattern:ident),* $(,)?]) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<$pattern _prepended>]() {
                    $crate::tests::sort_pattern::<$sort_impl>(
                        $crate::patterns::$pattern,
                        $crate::lists::Placement::Prepended,
                    );
                }

                #[test]
                fn [<$pattern _address_ordered>]() {
                    $crate::tests::sort_pattern::<$sort_impl>(
                        $crate::patterns::$pattern,
                        $crate::lists::Placement::AddressOrdered,
                    );
                }

                #[test]
                fn [<$pattern _scattered>]() {
                    $crate::tests::sort_pattern::<$sort_impl>(
                        $crate::patterns::$pattern,
                        $crate::lists::Placement::Scattered,
                    );
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_inner!($sort_impl, empty);
        $crate::instantiate_sort_test_inner!($sort_impl, single);
        $crate::instantiate_sort_test_inner!($sort_impl, two);
        $crate::instantiate_sort_test_inner!($sort_impl, small_permutations);
        $crate::instantiate_sort_test_inner!($sort_impl, idempotent);
        $crate::instantiate_sort_test_inner!($sort_impl, matches_recursive);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_reversed);
        $crate::instantiate_sort_test_inner!($sort_impl, sort_by_partial_key);
        $crate::instantiate_sort_test_inner!($sort_impl, comparison_count);
        $crate::instantiate_sort_test_inner!($sort_impl, keys_stay_with_nodes);
        $crate::instantiate_sort_test_inner!($sort_impl, resort_after_reset);
        $crate::instantiate_sort_test_inner!($sort_impl, reuse_with_fresh_keys);

        $crate::instantiate_pattern_tests!(
            $sort_impl,
            [
                random,
                random_dense,
                random_zipf_1,
                all_equal,
                ascending,
                descending,
                saw_mixed,
                ascending_then_min,
            ]
        );
    };
}
