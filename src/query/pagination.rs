/// Slice out page `page_index` (0-indexed) of `items`.
///
/// Pages past the end, and any page when `page_size` is zero, are empty.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total_items`; zero when `page_size` is zero
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<usize> = (0..40).collect();
        assert_eq!(paginate(&items, 1, 36), &[36, 37, 38, 39]);
        assert!(paginate(&items, 2, 36).is_empty());
        assert_eq!(page_count(40, 36), 2);
    }

    #[test]
    fn test_first_page() {
        let items: Vec<usize> = (0..40).collect();
        assert_eq!(paginate(&items, 0, 36).len(), 36);
        assert_eq!(paginate(&items, 0, 36)[0], 0);
    }

    #[test]
    fn test_exact_fit() {
        let items: Vec<usize> = (0..72).collect();
        assert_eq!(page_count(72, 36), 2);
        assert_eq!(paginate(&items, 1, 36).len(), 36);
        assert!(paginate(&items, 2, 36).is_empty());
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<usize> = Vec::new();
        assert!(paginate(&items, 0, 36).is_empty());
        assert_eq!(page_count(0, 36), 0);
    }

    #[test]
    fn test_zero_page_size() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, 0, 0).is_empty());
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_huge_page_index_does_not_overflow() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, usize::MAX, 36).is_empty());
        assert_eq!(paginate(&items, 0, usize::MAX), &[0, 1, 2, 3, 4]);
    }

    // Property: concatenating every page in order reproduces the input
    // exactly, with no gaps or repeats.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_pages_cover_sequence_once(len in 0usize..200, page_size in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(len, page_size);

            let joined: Vec<usize> = (0..pages)
                .flat_map(|page| paginate(&items, page, page_size).iter().copied())
                .collect();

            prop_assert_eq!(joined, items.clone());
            prop_assert!(paginate(&items, pages, page_size).is_empty());
        }

        #[test]
        fn prop_every_page_before_last_is_full(len in 1usize..200, page_size in 1usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let pages = page_count(len, page_size);

            for page in 0..pages.saturating_sub(1) {
                prop_assert_eq!(paginate(&items, page, page_size).len(), page_size);
            }
            prop_assert!(!paginate(&items, pages - 1, page_size).is_empty());
        }
    }
}
