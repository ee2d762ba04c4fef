use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::list::List;

mod sort;

use sort::merge_sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep copy: a fresh list whose nodes share no identity with the
    /// source. The source is iterated front-to-back, so order is
    /// preserved.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Assignment first empties `self`, then refills it from `other`.
    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a naive merge sort that reorders the list
    /// by relinking its nodes. No element is copied or moved, and no
    /// temporary storage is used during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn't implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn't contain a `NaN`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    /// let mut floats = List::from_iter([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m* \* *n* \* log(*n*)) time
    /// and *O*(1) memory, where the key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merge `other` into `self`, assuming both lists are already sorted
    /// in ascending order. After the merge `self` is a single ascending
    /// sequence and `other` is empty.
    ///
    /// The precondition is not checked; merging unsorted lists produces
    /// an unspecified (but memory-safe) order.
    ///
    /// Nodes are relinked, never copied: for elements that compare equal,
    /// those of `self` precede those of `other`, and the relative order
    /// within each source list is preserved. Positions previously issued
    /// by `self` stay valid and keep denoting the same elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3, 5]);
    /// let mut other = List::from_iter([2, 4, 6]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b));
    }

    /// Merge `other` into `self` with a custom less-than predicate. See
    /// [`List::merge`].
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.is_empty() {
            return;
        }
        let this_end = self.ghost_node();
        let that_end = other.ghost_node();
        let mut this = self.front_node();
        let mut that = other.front_node();
        unsafe {
            while this != this_end && that != that_end {
                if less(&that.as_ref().element, &this.as_ref().element) {
                    // Transfer one node of `other`: unlink it (keeping its
                    // storage) and splice it right before `this`. Both
                    // length counters are adjusted by the primitives.
                    let next = that.as_ref().next;
                    other.unlink_node(that);
                    self.attach_node(this.as_ref().prev, this, that);
                    that = next;
                } else {
                    this = this.as_ref().next;
                }
            }
            if that != that_end {
                // `self` is exhausted; hand the whole remaining range of
                // `other` over in one splice.
                let remaining = other.len;
                let detached = other.detach_nodes(that, other.back_node(), remaining);
                self.attach_nodes(self.back_node(), self.ghost_node(), detached);
            }
        }
    }

    /// Reverse the order of the elements in place.
    ///
    /// Every node, the ghost included, has its two link fields swapped;
    /// no element is copied or moved and every node keeps its storage
    /// address, so previously issued positions keep denoting the same
    /// elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: every link of the cycle is valid, and each node is
            // visited exactly once (after the swap the old `next` sits in
            // `prev`, which is how the walk advances).
            let next = unsafe {
                let node = &mut *node.as_ptr();
                std::mem::swap(&mut node.next, &mut node.prev);
                node.prev
            };
            node = next;
            if node == ghost {
                break;
            }
        }
    }

    /// Remove all but the first element of every run of consecutive
    /// elements that compare equal (via `==`).
    ///
    /// Non-adjacent duplicates are untouched.
    ///
    /// # Complexity
    ///
    /// This operation performs *O*(*n*) comparisons and destroys one node
    /// per removed element.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 1]);
    /// list.unique();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 1]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return;
        }
        let end = self.ghost_node();
        let mut kept = self.front_node();
        unsafe {
            let mut candidate = kept.as_ref().next;
            while candidate != end {
                let next = candidate.as_ref().next;
                if candidate.as_ref().element == kept.as_ref().element {
                    // Equal to the head of the current run; destroy it.
                    drop(self.detach_node(candidate));
                } else {
                    kept = candidate;
                }
                candidate = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, List};
    use std::iter::FromIterator;

    #[test]
    fn sort_unsorted_list() {
        let mut list = List::from_iter([3, 1, 2]);
        list.sort();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sort_sorted_list_is_noop() {
        let mut list = List::from_iter(0..20);
        list.sort();
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..20));
    }

    #[test]
    fn sort_trivial_lists() {
        let mut empty = List::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = List::from_iter([7]);
        single.sort();
        assert_eq!(Vec::from_iter(single), vec![7]);
    }

    #[test]
    fn sort_is_stable() {
        // Sort by the first component only; the second records insertion
        // order and must survive for equal keys.
        let mut list = List::from_iter([(2, 0), (1, 0), (2, 1), (1, 1), (2, 2)]);
        list.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            Vec::from_iter(list),
            vec![(1, 0), (1, 1), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn sort_by_key_and_large_input() {
        let mut list = List::from_iter((0..100).rev());
        list.sort_by_key(|x| *x);
        assert_eq!(Vec::from_iter(&list).len(), 100);
        assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a <= b));
    }

    #[test]
    fn merge_interleaves_and_empties_other() {
        let mut list = List::from_iter([1, 3, 3]);
        let mut other = List::from_iter([2, 3, 4]);
        list.merge(&mut other);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &3, &3, &4]);
        assert_eq!(list.len(), 6);
        assert!(other.is_empty());
        assert_eq!(other.len(), 0);
        // The emptied list is still usable.
        other.push_back(9);
        assert_eq!(other.front(), Ok(&9));
    }

    #[test]
    fn merge_ties_favor_receiver_and_keep_source_order() {
        // Keys collide on 3; the tags record which list each element came
        // from and its original rank there.
        let mut list = List::from_iter([(1, "a1"), (3, "a2"), (3, "a3")]);
        let mut other = List::from_iter([(2, "b1"), (3, "b2"), (4, "b3")]);

        list.merge_by(&mut other, |a, b| a.0 < b.0);

        assert_eq!(
            Vec::from_iter(list),
            vec![(1, "a1"), (2, "b1"), (3, "a2"), (3, "a3"), (3, "b2"), (4, "b3")]
        );
        assert!(other.is_empty());
    }

    #[test]
    fn merge_with_empty_lists() {
        let mut list = List::from_iter([1, 2]);
        let mut empty = List::new();
        list.merge(&mut empty);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2]);

        let mut empty = List::new();
        empty.merge(&mut list);
        assert_eq!(Vec::from_iter(&empty), vec![&1, &2]);
        assert!(list.is_empty());
    }

    #[test]
    fn merge_keeps_positions_of_receiver_valid() {
        let mut list = List::from_iter([1, 5, 9]);
        let pos = list.next(list.start()).unwrap();
        assert_eq!(list.get(pos), Ok(&5));

        let mut other = List::from_iter([2, 6, 10]);
        list.merge(&mut other);
        assert_eq!(list.get(pos), Ok(&5));
        assert_eq!(Vec::from_iter(list), vec![1, 2, 5, 6, 9, 10]);
    }

    #[test]
    fn reverse_list() {
        let mut list = List::from_iter([1, 2, 3]);
        list.reverse();
        assert_eq!(Vec::from_iter(&list), vec![&3, &2, &1]);

        // Reversing twice restores the original order.
        list.reverse();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);

        let mut empty = List::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = List::from_iter([1]);
        single.reverse();
        assert_eq!(single.front(), Ok(&1));
    }

    #[test]
    fn reverse_keeps_positions_valid() {
        let mut list = List::from_iter([1, 2, 3]);
        let pos = list.next(list.start()).unwrap();
        assert_eq!(list.get(pos), Ok(&2));
        list.reverse();
        assert_eq!(list.get(pos), Ok(&2));
        assert_eq!(list.next(pos).and_then(|p| list.get(p)), Ok(&1));
    }

    #[test]
    fn unique_removes_consecutive_runs_only() {
        let mut list = List::from_iter([1, 1, 2, 1]);
        list.unique();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &1]);
        assert_eq!(list.len(), 3);

        let mut list = List::from_iter([4, 4, 4, 4]);
        list.unique();
        assert_eq!(Vec::from_iter(&list), vec![&4]);

        let mut list = List::from_iter([1, 2, 3]);
        list.unique();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);

        let mut empty = List::<i32>::new();
        empty.unique();
        assert!(empty.is_empty());
    }

    #[test]
    fn clone_is_deep() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        // Handles of the original must not be honored by the copy.
        let pos = original.next(original.start()).unwrap();
        assert_eq!(copy.get(pos), Err(Error::InvalidPosition));

        *copy.front_mut().unwrap() = 10;
        copy.push_back(4);
        assert_eq!(Vec::from_iter(&original), vec![&1, &2, &3]);
        assert_eq!(Vec::from_iter(&copy), vec![&10, &2, &3, &4]);
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = List::from_iter([7, 8]);
        let mut target = List::from_iter(0..10);
        target.clone_from(&source);
        assert_eq!(Vec::from_iter(&target), vec![&7, &8]);
        assert_eq!(target.len(), 2);
    }

    #[test]
    fn list_comparisons_and_contains() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(a.contains(&2));
        assert!(!a.contains(&5));
    }
}
