//! In-place heap sort.
//!
//! [`heap_sort`] sorts a slice in `O(n log n)` comparisons in every case,
//! including inputs that are already sorted, reversed, or adversarial. The
//! standard library's `sort_unstable` is usually faster in practice; reach
//! for this when the worst-case bound matters more than the average case,
//! or when the allocation-free guarantee does.
//!
//! ```
//! let mut data = [5, 3, 8, 1, 9, 2];
//! heapsort::heap_sort(&mut data);
//! assert_eq!(data, [1, 2, 3, 5, 8, 9]);
//! ```

/// Sorts `data` in ascending order, in place.
///
/// Runs in `O(n log n)` time and `O(log n)` stack space (the sift recursion),
/// allocating nothing. The sort is not stable: equal elements may end up in
/// a different relative order than they started in.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();

    // Arrange the slice into a max-heap, deepest parent first. Leaves are
    // one-element heaps already.
    for root in (0..len / 2).rev() {
        sift_down(data, len, root);
    }

    // Swap the maximum behind the shrinking heap, then restore the heap
    // property for the remainder. The suffix grows sorted.
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

/// Restores the max-heap property for the subtree rooted at `root`, assuming
/// both child subtrees already satisfy it. Only the first `heap_len`
/// elements of `data` belong to the heap.
fn sift_down<T: Ord>(data: &mut [T], heap_len: usize, root: usize) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut largest = root;

    if left < heap_len && data[left] > data[largest] {
        largest = left;
    }
    if right < heap_len && data[right] > data[largest] {
        largest = right;
    }
    if largest != root {
        data.swap(root, largest);
        sift_down(data, heap_len, largest);
    }
}
