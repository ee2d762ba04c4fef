use crate::list::{connect, Node};
use crate::List;
use std::ptr::NonNull;

/// Ranges at most this long are insertion-sorted instead of split further.
const INSERTION_SORT_THRESHOLD: usize = 8;

/// Sort the list by relinking its nodes, leaving every element in its
/// original node. `less` must be a strict weak ordering; nodes that compare
/// equal keep their relative order.
pub(super) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let (start, end) = (list.front_node(), list.ghost_node());
    if list.len() <= INSERTION_SORT_THRESHOLD {
        unsafe { insertion_sort_range(start, end, &mut less) };
    } else {
        unsafe { merge_sort_range(start, end, &mut less) };
    }
}

/// Walk `start..end` once with two cursors of different strides, yielding
/// the middle node and the length of the range.
unsafe fn mid_of_range<T>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
) -> (NonNull<Node<T>>, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = start.as_ref().next;
        if start != end {
            len += 1;
            start = start.as_ref().next;
            mid = mid.as_ref().next;
        }
    }
    (mid, len)
}

/// Sort `start..end` and return the new front of the range.
///
/// The caller must guarantee that `start..end` is a valid range of the
/// list; both bounds keep denoting the same nodes, but the nodes in
/// between are relinked.
unsafe fn merge_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = mid_of_range(start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(start, end, less);
    }

    // Recurse into the two halves unless a half holds fewer than two nodes.
    if start != mid && start.as_ref().next != mid {
        start = merge_sort_range(start, mid, less);
    }
    if mid != end && mid.as_ref().next != end {
        mid = merge_sort_range(mid, end, less);
    }

    if start != mid && mid != end {
        start = merge_range(start, mid, end, less);
    }
    start
}

/// Merge the two sorted sub-ranges `start..mid` and `mid..end` into one
/// sorted range, and return its new front.
unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `start..mid` plays the role of the merged range and `mid..end` of the
    // unmerged one; nodes migrate from the latter into the former.
    let (mut merged, merged_back, mut to_merge) = (start, mid.as_ref().prev, mid);
    // Once the back of the merged range <= the front of the unmerged range,
    // the whole range is sorted and the merge stops.
    while to_merge != end && less(&to_merge.as_ref().element, &merged_back.as_ref().element) {
        // Advance `merged` to the first node whose element is greater than
        // the element to merge. Using `!less` keeps equal elements of the
        // merged range in front, which is what stability requires.
        while merged != to_merge && !less(&to_merge.as_ref().element, &merged.as_ref().element) {
            merged = merged.as_ref().next;
        }
        if merged == to_merge {
            break;
        }

        // Grow the move to a maximal run `to_merge..next_to_merge` whose
        // elements all sort before `*merged`, so the run is spliced in one go.
        let mut next_to_merge = to_merge.as_ref().next;
        while next_to_merge != end
            && less(&next_to_merge.as_ref().element, &merged.as_ref().element)
        {
            next_to_merge = next_to_merge.as_ref().next;
        }
        if merged == start {
            start = to_merge;
        }
        move_nodes(to_merge, next_to_merge.as_ref().prev, merged);
        to_merge = next_to_merge;
    }
    start
}

/// Insertion sort for short ranges; returns the new front of the range.
unsafe fn insertion_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut sorted_back, mut to_sort) = (start, start.as_ref().next);
    loop {
        // Skip over nodes that are already in place behind the sorted back.
        while to_sort != end && !less(&to_sort.as_ref().element, &sorted_back.as_ref().element) {
            sorted_back = to_sort;
            to_sort = to_sort.as_ref().next;
        }
        if to_sort == end {
            break;
        }
        // Search the sorted prefix for the first node that sorts after the
        // node to insert.
        let mut sorted = start;
        while sorted != to_sort && !less(&to_sort.as_ref().element, &sorted.as_ref().element) {
            sorted = sorted.as_ref().next;
        }
        if sorted == start {
            start = to_sort;
        }
        let next = to_sort.as_ref().next;
        move_node(std::mem::replace(&mut to_sort, next), sorted);
    }
    start
}

unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(from, from, to);
}

/// Unlink the range `from_front..=from_back` and relink it right before
/// `to`. The range must not contain `to`.
unsafe fn move_nodes<T>(
    from_front: NonNull<Node<T>>,
    from_back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    connect(from_front.as_ref().prev, from_back.as_ref().next);
    connect(to.as_ref().prev, from_front);
    connect(from_back, to);
}

#[cfg(test)]
mod tests {
    use crate::List;
    use rand::prelude::*;
    use std::iter::FromIterator;

    #[test]
    fn sort_random_lists_match_slice_sort() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [0, 1, 2, 7, 8, 9, 63, 64, 500] {
            let values = Vec::from_iter((0..len).map(|_| rng.gen_range(0..100)));
            let mut list = List::from_iter(values.iter().copied());

            list.sort();

            let mut expected = values;
            expected.sort_unstable();
            assert_eq!(Vec::from_iter(list), expected);
        }
    }

    #[test]
    fn sort_keeps_length_and_endpoints_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut list = List::from_iter((0..200).map(|_| rng.gen::<i16>()));
        list.sort();
        assert_eq!(list.len(), 200);
        assert_eq!(list.front(), list.iter().min().ok_or(crate::Error::Empty));
        assert_eq!(list.back(), list.iter().max().ok_or(crate::Error::Empty));
        // Popping from both ends still works after the relink.
        let front = list.pop_front();
        let back = list.pop_back();
        assert!(front.unwrap() <= back.unwrap());
        assert_eq!(list.len(), 198);
    }
}
