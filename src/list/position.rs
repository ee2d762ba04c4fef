use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

use crate::list::{Error, List, Node, BOUNDARY_TAG};

/// A checked handle to one location of a [`List`].
///
/// A `Position` is a plain `Copy` token, not a borrow: it can be stored,
/// passed around and handed back to the list later. Every list operation
/// that consumes a `Position` first verifies that the handle belongs to
/// that very list, and fails with [`Error::InvalidPosition`] otherwise, so
/// a handle created on one list can never silently mutate another.
///
/// In a list with length *n* there are *n* + 1 locations: one per element,
/// plus the past-the-end location returned by [`List::end`]. The end
/// location holds no element; dereferencing it, advancing beyond it or
/// removing at it is rejected.
///
/// The owner token is the address of the list's ghost node, which is
/// allocated once per list lifetime and therefore stays stable even when
/// the `List` value itself is moved.
///
/// A `Position` whose element has been removed from the list (by
/// [`List::remove`], [`List::pop_front`], [`List::clear`], ...) is *stale*:
/// every operation rejects it with [`Error::InvalidPosition`]. Each handle
/// carries the tag the node was registered under, and validation compares it
/// against the list's live-node registry instead of reading the node, so a
/// stale handle stays dead even if the allocator reuses the node's address
/// for a later element. Handles to *other* elements stay valid across
/// insertions and removals, and across `merge`, `reverse`, `sort` and
/// `unique`, which relink nodes without destroying them.
///
/// # Examples
///
/// ```
/// use checked_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
///
/// let second = list.next(list.start()).unwrap();
/// assert_eq!(list.get(second), Ok(&2));
///
/// let inserted = list.insert(second, 10).unwrap();
/// assert_eq!(list.get(inserted), Ok(&10));
/// assert_eq!(Vec::from_iter(list), vec![1, 10, 2, 3]);
/// ```
pub struct Position<T> {
    pub(crate) node: NonNull<Node<T>>,
    /// The ghost node of the owning list, used purely as an identity token.
    pub(crate) owner: NonNull<Node<T>>,
    /// The registry tag of the node when this handle was issued.
    pub(crate) tag: u64,
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

/// Positions compare by the node they denote (address and tag), never by
/// element value. A stale handle is unequal to a handle of a newer element
/// that happens to reuse the same address.
impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.tag == other.tag
    }
}

impl<T> Eq for Position<T> {}

impl<T> fmt::Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("node", &self.node)
            .finish()
    }
}

impl<T> List<T> {
    fn position(&self, node: NonNull<Node<T>>) -> Position<T> {
        let tag = if node == self.ghost_node() {
            BOUNDARY_TAG
        } else {
            // Real nodes handed out here are always live, so the lookup
            // cannot miss.
            self.registry
                .get(&node.cast())
                .copied()
                .unwrap_or(BOUNDARY_TAG)
        };
        Position {
            node,
            owner: self.ghost_node(),
            tag,
        }
    }

    /// Return `Err(Error::InvalidPosition)` unless `pos` was issued by this
    /// list and its node is still registered as live. The node's memory is
    /// never read during validation, so a handle to a freed node fails here
    /// instead of dereferencing a dangling pointer.
    fn check_valid(&self, pos: Position<T>) -> Result<(), Error> {
        if pos.owner != self.ghost_node() {
            return Err(Error::InvalidPosition);
        }
        if pos.node != self.ghost_node()
            && self.registry.get(&pos.node.cast()).copied() != Some(pos.tag)
        {
            return Err(Error::InvalidPosition);
        }
        Ok(())
    }

    fn is_end(&self, pos: Position<T>) -> bool {
        pos.node == self.ghost_node()
    }

    /// The position of the first element, or [`List::end`] if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(list.start()), Ok(&1));
    ///
    /// let empty = List::<i32>::new();
    /// assert_eq!(empty.start(), empty.end());
    /// ```
    pub fn start(&self) -> Position<T> {
        self.position(self.front_node())
    }

    /// The past-the-end position. It holds no element and never changes
    /// over the lifetime of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(list.end()), Err(Error::InvalidPosition));
    /// ```
    pub fn end(&self) -> Position<T> {
        self.position(self.ghost_node())
    }

    /// Provides a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` belongs to another list, is
    /// stale, or is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.get(list.start()), Ok(&1));
    /// assert_eq!(list.get(list.end()), Err(Error::InvalidPosition));
    ///
    /// let other = List::from_iter([4, 5]);
    /// assert_eq!(list.get(other.start()), Err(Error::InvalidPosition));
    /// ```
    pub fn get(&self, pos: Position<T>) -> Result<&T, Error> {
        self.check_valid(pos)?;
        if self.is_end(pos) {
            return Err(Error::InvalidPosition);
        }
        // SAFETY: `pos` belongs to this list and is not the ghost, so its
        // node is a live real node holding a valid element.
        unsafe { Ok(&(*pos.node.as_ptr()).element) }
    }

    /// Provides a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` belongs to another list, is
    /// stale, or is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// *list.get_mut(list.start()).unwrap() = 5;
    /// assert_eq!(Vec::from_iter(list), vec![5, 2, 3]);
    /// ```
    pub fn get_mut(&mut self, pos: Position<T>) -> Result<&mut T, Error> {
        self.check_valid(pos)?;
        if self.is_end(pos) {
            return Err(Error::InvalidPosition);
        }
        // SAFETY: as in `get`, plus the `&mut self` receiver guarantees
        // exclusive access to the node.
        unsafe { Ok(&mut (*pos.node.as_ptr()).element) }
    }

    /// The position one step after `pos`. Stepping from the last element
    /// yields [`List::end`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` belongs to another list, is
    /// stale, or is already the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let second = list.next(list.start()).unwrap();
    /// assert_eq!(list.get(second), Ok(&2));
    ///
    /// let end = list.next(second).unwrap();
    /// assert_eq!(end, list.end());
    /// assert_eq!(list.next(end), Err(Error::InvalidPosition));
    /// ```
    pub fn next(&self, pos: Position<T>) -> Result<Position<T>, Error> {
        self.check_valid(pos)?;
        if self.is_end(pos) {
            return Err(Error::InvalidPosition);
        }
        // SAFETY: `pos.node` is a live node of this cyclic list, so its
        // `next` link is always valid.
        unsafe { Ok(self.position(pos.node.as_ref().next)) }
    }

    /// The position one step before `pos`. Stepping back from the end
    /// position yields the last element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` belongs to another list, is
    /// stale, or is the position of the first element (there is nothing
    /// before it).
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2]);
    /// let last = list.prev(list.end()).unwrap();
    /// assert_eq!(list.get(last), Ok(&2));
    /// assert_eq!(list.prev(list.start()), Err(Error::InvalidPosition));
    /// ```
    pub fn prev(&self, pos: Position<T>) -> Result<Position<T>, Error> {
        self.check_valid(pos)?;
        if pos.node == self.front_node() {
            return Err(Error::InvalidPosition);
        }
        // SAFETY: `pos.node` is a live node of this cyclic list, so its
        // `prev` link is always valid.
        unsafe { Ok(self.position(pos.node.as_ref().prev)) }
    }

    /// Splices a new element in right before `pos` and returns its
    /// position. Inserting before [`List::end`] appends.
    ///
    /// The list is untouched when an error is returned.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` belongs to another list or is
    /// stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    ///
    /// let third = list.next(list.start()).unwrap();
    /// let second = list.insert(third, 2).unwrap();
    /// assert_eq!(list.get(second), Ok(&2));
    ///
    /// list.insert(list.end(), 4).unwrap();
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, pos: Position<T>, value: T) -> Result<Position<T>, Error> {
        self.check_valid(pos)?;
        let node = Node::new_detached(value);
        // SAFETY: `pos.node` is a live node of this list and `pos.node.prev`
        // is its neighbor, so they are valid and adjacent.
        unsafe { self.attach_node(pos.node.as_ref().prev, pos.node, node) };
        Ok(self.position(node))
    }

    /// Removes the element at `pos`, returning it together with the
    /// position of the following element ([`List::end`] if the removed
    /// element was the last one).
    ///
    /// The list is untouched when an error is returned. The removed
    /// position becomes stale and is rejected from then on.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if the list holds no elements;
    /// - [`Error::InvalidPosition`] if `pos` belongs to another list, is
    ///   stale, or is the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let (value, after) = list.remove(list.start()).unwrap();
    /// assert_eq!(value, 1);
    /// assert_eq!(list.get(after), Ok(&2));
    ///
    /// assert_eq!(list.remove(list.end()), Err(Error::InvalidPosition));
    /// assert_eq!(Vec::from_iter(list), vec![2, 3]);
    /// ```
    pub fn remove(&mut self, pos: Position<T>) -> Result<(T, Position<T>), Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        self.check_valid(pos)?;
        if self.is_end(pos) {
            return Err(Error::InvalidPosition);
        }
        // SAFETY: `pos` belongs to this list and is not the ghost, so it is
        // a live real node; `next` is read before the node is detached.
        let next = unsafe { pos.node.as_ref().next };
        let node = unsafe { self.detach_node(pos.node) };
        Ok((Node::into_element(node), self.position(next)))
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{Error, List};
    use std::iter::FromIterator;

    #[test]
    fn position_navigation() {
        let list = List::from_iter([1, 2, 3]);

        let mut pos = list.start();
        assert_eq!(list.get(pos), Ok(&1));
        pos = list.next(pos).unwrap();
        assert_eq!(list.get(pos), Ok(&2));
        pos = list.next(pos).unwrap();
        assert_eq!(list.get(pos), Ok(&3));
        pos = list.next(pos).unwrap();
        assert_eq!(pos, list.end());

        // Walking backwards visits the same nodes.
        pos = list.prev(pos).unwrap();
        assert_eq!(list.get(pos), Ok(&3));
        pos = list.prev(pos).unwrap();
        pos = list.prev(pos).unwrap();
        assert_eq!(pos, list.start());
    }

    #[test]
    fn position_boundaries() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(list.get(list.end()), Err(Error::InvalidPosition));
        assert_eq!(list.next(list.end()), Err(Error::InvalidPosition));
        assert_eq!(list.prev(list.start()), Err(Error::InvalidPosition));

        let empty = List::<i32>::new();
        assert_eq!(empty.start(), empty.end());
        assert_eq!(empty.get(empty.start()), Err(Error::InvalidPosition));
        assert_eq!(empty.next(empty.end()), Err(Error::InvalidPosition));
        assert_eq!(empty.prev(empty.end()), Err(Error::InvalidPosition));
    }

    #[test]
    fn position_identity_equality() {
        let mut list = List::from_iter([1, 1]);
        let first = list.start();
        let second = list.next(first).unwrap();
        // Equal elements, distinct nodes.
        assert_ne!(first, second);
        assert_eq!(first, list.start());
        assert_eq!(list.get_mut(second).map(|v| *v), Ok(1));
    }

    #[test]
    fn position_foreign_handles_rejected() {
        let mut a = List::from_iter([1, 2, 3]);
        let mut b = List::from_iter([4, 5, 6]);

        let from_b = b.start();
        assert_eq!(a.get(from_b), Err(Error::InvalidPosition));
        assert_eq!(a.insert(from_b, 0), Err(Error::InvalidPosition));
        assert_eq!(a.remove(from_b), Err(Error::InvalidPosition));
        assert_eq!(a.next(from_b), Err(Error::InvalidPosition));
        assert_eq!(a.prev(from_b), Err(Error::InvalidPosition));

        // The failed calls must not have mutated either list.
        assert_eq!(Vec::from_iter(a.iter().copied()), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(b.iter().copied()), vec![4, 5, 6]);
        let _ = b.remove(from_b).unwrap();
    }

    #[test]
    fn owner_token_survives_list_move() {
        let list = List::from_iter([1, 2, 3]);
        let second = list.next(list.start()).unwrap();
        // Moving the `List` value must not invalidate issued handles.
        let mut moved = list;
        assert_eq!(moved.get(second), Ok(&2));
        let (value, _) = moved.remove(second).unwrap();
        assert_eq!(value, 2);
    }

    #[test]
    fn insert_then_remove_restores_sequence() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        let mut pos = list.start();
        pos = list.next(pos).unwrap();
        pos = list.next(pos).unwrap();

        let inserted = list.insert(pos, 99).unwrap();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 99, 3, 4]);

        let (value, after) = list.remove(inserted).unwrap();
        assert_eq!(value, 99);
        assert_eq!(list.get(after), Ok(&3));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4]);
    }

    #[test]
    fn remove_last_element_yields_end() {
        let mut list = List::from_iter([1]);
        let (value, after) = list.remove(list.start()).unwrap();
        assert_eq!(value, 1);
        assert_eq!(after, list.end());
        assert!(list.is_empty());
        assert_eq!(list.remove(list.end()), Err(Error::Empty));
    }

    #[test]
    fn remove_checks_empty_before_position() {
        let empty = List::<i32>::new();
        let end = empty.end();
        let mut empty = empty;
        // An empty list reports `Empty` even for its own end position.
        assert_eq!(empty.remove(end), Err(Error::Empty));
    }

    #[test]
    fn stale_position_rejected_after_removal() {
        let mut list = List::from_iter([10, 20]);
        let stale = list.next(list.start()).unwrap();
        assert_eq!(list.get(stale), Ok(&20));

        assert_eq!(list.pop_back(), Ok(20));
        assert_eq!(list.get(stale), Err(Error::InvalidPosition));
        assert_eq!(list.get_mut(stale), Err(Error::InvalidPosition));
        assert_eq!(list.next(stale), Err(Error::InvalidPosition));
        assert_eq!(list.prev(stale), Err(Error::InvalidPosition));
        assert_eq!(list.insert(stale, 0), Err(Error::InvalidPosition));
        assert_eq!(list.remove(stale), Err(Error::InvalidPosition));
        // The failed calls left the list untouched.
        assert_eq!(Vec::from_iter(&list), vec![&10]);
    }

    #[test]
    fn stale_position_not_resurrected_by_address_reuse() {
        let mut list = List::from_iter([1]);
        let stale = list.start();
        assert_eq!(list.remove(stale).map(|(v, _)| v), Ok(1));
        // The allocator may hand the freed node's address right back to the
        // next push; the old handle must stay dead either way.
        list.push_front(2);
        assert_eq!(list.get(stale), Err(Error::InvalidPosition));
        assert_ne!(stale, list.start());
        assert_eq!(list.get(list.start()), Ok(&2));
    }

    #[test]
    fn positions_staled_by_clear() {
        let mut list = List::from_iter([1, 2, 3]);
        let pos = list.next(list.start()).unwrap();
        list.clear();
        assert_eq!(list.get(pos), Err(Error::InvalidPosition));
        // Refilling the list does not revive old handles.
        list.extend([4, 5, 6]);
        assert_eq!(list.get(pos), Err(Error::InvalidPosition));
    }
}
