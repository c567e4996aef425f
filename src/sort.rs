use log::debug;

use crate::heap::MaxHeap;

/// Sorts a slice ascending, in place, by loading every element into a
/// max-heap and popping the greatest remaining element into each position
/// from the back. O(n log n) time, O(n) auxiliary space for the heap.
pub fn heap_sort<T: Ord + Clone>(items: &mut [T]) {
    debug!("heap_sort: {} items", items.len());
    let mut heap = MaxHeap::new();
    for item in items.iter() {
        heap.push(item.clone());
    }

    let mut i = items.len();
    while let Some(greatest) = heap.pop() {
        i -= 1;
        items[i] = greatest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn sorts_ascending() {
        init_test();
        let mut items = vec![5, 3, 8, 1];
        heap_sort(&mut items);
        assert_eq!(items, vec![1, 3, 5, 8]);
    }

    #[test]
    fn empty_and_singleton() {
        init_test();
        let mut empty: Vec<i32> = vec![];
        heap_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        heap_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn duplicates_and_presorted() {
        init_test();
        let mut items = vec![2, 2, 1, 3, 1, 2];
        heap_sort(&mut items);
        assert_eq!(items, vec![1, 1, 2, 2, 2, 3]);

        let mut sorted = vec![1, 2, 3, 4];
        heap_sort(&mut sorted);
        assert_eq!(sorted, vec![1, 2, 3, 4]);

        let mut reversed: Vec<i64> = (0..100).rev().collect();
        heap_sort(&mut reversed);
        let expected: Vec<i64> = (0..100).collect();
        assert_eq!(reversed, expected);
    }

    #[test]
    fn matches_std_sort() {
        init_test();
        // deterministic scramble, large enough to exercise deep percolation
        let mut items: Vec<u32> = (0..500).map(|i| (i * 7919) % 263).collect();
        let mut expected = items.clone();
        expected.sort();
        heap_sort(&mut items);
        assert_eq!(items, expected);
    }
}
