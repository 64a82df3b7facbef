mod algorithms;
mod comparators;

use std::cmp::Ordering;

pub use algorithms::merge::merge;
pub use algorithms::merge_sort::merge_sorted;
pub use algorithms::quick_sort_copying::quick_sorted;
pub use algorithms::quick_sort_in_place::quick_sort;
pub use comparators::{
    by_sign, compare_ascending, compare_descending, compare_last_digit, is_sorted_by,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    MergeSort,
    QuickSortCopying,
    QuickSortInPlace,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 3] = [
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSortCopying,
    SortAlgorithm::QuickSortInPlace,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSortCopying => "quick_sort_copying",
        SortAlgorithm::QuickSortInPlace => "quick_sort_in_place",
    }
}

/// Sorts a copy of `xs` with `algo`. `xs` itself is never modified.
pub fn sorted_by<T, F>(algo: SortAlgorithm, xs: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    match algo {
        SortAlgorithm::MergeSort => merge_sorted(xs, compare),
        SortAlgorithm::QuickSortCopying => quick_sorted(xs, compare),
        SortAlgorithm::QuickSortInPlace => {
            let mut sorted = xs.to_vec();
            quick_sort(&mut sorted, compare);
            sorted
        }
    }
}
