pub mod merge;
pub mod merge_sort;
pub mod quick_sort_copying;
pub mod quick_sort_in_place;
