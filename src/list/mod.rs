use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::{IntoIter, Iter, IterMut};

pub mod iterator;
pub mod position;

mod algorithms;

/// The error kind raised by the checked operations of a [`List`].
///
/// Both variants signal a violated calling contract, not a transient
/// condition: the list is left exactly as it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A [`Position`] does not belong to this list, is stale (its element
    /// was removed), denotes a boundary that cannot be dereferenced, or a
    /// move across a boundary was attempted.
    ///
    /// [`Position`]: crate::Position
    InvalidPosition,
    /// An element was requested from an empty list.
    Empty,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPosition => f.write_str("position is invalid for this list"),
            Error::Empty => f.write_str("list is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// The `List` is a doubly-linked list with owned nodes, implemented as a
/// cyclic list. It allows inserting and removing elements at any given
/// position in constant time; accessing an element at an arbitrary position
/// takes *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` that points to the ghost node, the single boundary
///   node that holds no element and closes the cycle in both directions;
/// - a length field `len` that always mirrors the number of real nodes in
///   the cycle;
/// - a registry of the addresses of all live real nodes, each mapped to the
///   tag stamped into handles issued for it.
///
/// Positional access and mutation go through [`Position`] handles, which are
/// validated against the owning list on every use. A node leaves the
/// registry when it is freed or transferred away, so a stale handle is
/// recognized without reading the node's memory, even if the allocator has
/// reused its address for a newer node. See the [`position`] module for the
/// checked operations.
///
/// [`Position`]: crate::Position
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    pub(crate) len: usize,
    pub(crate) registry: HashMap<NonNull<Node<Erased>>, u64>,
    tags: u64,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Tag carried by handles to the boundary position; real nodes are always
/// tagged starting from 1.
pub(crate) const BOUNDARY_TAG: u64 = 0;

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
pub(crate) struct Erased;

/// Nodes fragment detached from a list, used when a whole range of nodes
/// changes its owning list at once (the tail hand-off of `merge`).
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link `prev` and `next` to each other, in both directions.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the
        // first element of the cycle).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() }).cast()
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the
        // last element of the cycle).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() }).cast()
    }

    /// Unlink a single node from the cycle without freeing its storage.
    ///
    /// The node keeps its element and its (now stale) link fields, so the
    /// same primitive serves both "remove and free" ([`detach_node`]) and
    /// "remove and re-link into another list" (`merge`).
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this call will make both lists ill-formed.
    ///
    /// [`detach_node`]: List::detach_node
    pub(crate) unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) {
        self.len -= 1;
        self.registry.remove(&node.cast());
        connect(node.as_ref().prev, node.as_ref().next);
    }

    /// Issue a fresh tag for a node entering the registry. Tags are never
    /// reused within one list, so a handle to a freed node stays dead even
    /// when its address is recycled.
    fn issue_tag(&mut self) -> u64 {
        self.tags += 1;
        self.tags
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this function call will make the list
    /// ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.unlink_node(node);
        Box::from_raw(node.as_ptr())
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent nodes, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        let tag = self.issue_tag();
        self.registry.insert(node.cast(), tag);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a range of nodes `front..=back` of length `len` from the
    /// list, and return the detached nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a
    /// valid range of exactly `len` nodes belonging to the list. If it is
    /// not, this function call will make the list ill-formed.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        let mut cursor = front;
        loop {
            self.registry.remove(&cursor.cast());
            if cursor == back {
                break;
            }
            cursor = cursor.as_ref().next;
        }
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a range of detached nodes to the list, between `prev` and
    /// `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
        let mut cursor = detached.front;
        loop {
            let tag = self.issue_tag();
            self.registry.insert(cursor.cast(), tag);
            if cursor == detached.back {
                break;
            }
            cursor = cursor.as_ref().next;
        }
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, detached.front);
            assert_adjacent(detached.back, next);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use checked_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        let _marker = PhantomData;
        Self {
            ghost,
            len: 0,
            registry: HashMap::new(),
            tags: 0,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert!(list.front().is_err());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or `Err(Error::Empty)`
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.next` is a real node
        // holding a valid element.
        unsafe { Ok(&(*self.front_node().as_ptr()).element) }
    }

    /// Provides a mutable reference to the front element, or
    /// `Err(Error::Empty)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// *list.front_mut().unwrap() = 5;
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.next` is a real node
        // holding a valid element.
        unsafe { Ok(&mut (*self.front_node().as_ptr()).element) }
    }

    /// Provides a reference to the back element, or `Err(Error::Empty)`
    /// if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), Err(Error::Empty));
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.prev` is a real node
        // holding a valid element.
        unsafe { Ok(&(*self.back_node().as_ptr()).element) }
    }

    /// Provides a mutable reference to the back element, or
    /// `Err(Error::Empty)` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    ///
    /// *list.back_mut().unwrap() = 5;
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.prev` is a real node
        // holding a valid element.
        unsafe { Ok(&mut (*self.back_node().as_ptr()).element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `ghost` and `ghost.next` are valid adjacent nodes.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
    }

    /// Removes the first element and returns it, or `Err(Error::Empty)`
    /// if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert_eq!(list.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.next` is a real node of
        // this list.
        let node = unsafe { self.detach_node(self.front_node()) };
        Ok(Node::into_element(node))
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: `ghost.prev` and `ghost` are valid adjacent nodes.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }

    /// Removes the last element from the list and returns it, or
    /// `Err(Error::Empty)` if it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use checked_list::{Error, List};
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), Err(Error::Empty));
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        // SAFETY: the list is not empty, so `ghost.prev` is a real node of
        // this list.
        let node = unsafe { self.detach_node(self.back_node()) };
        Ok(Node::into_element(node))
    }

    /// Provides a forward iterator.
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
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
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
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        // SAFETY:
        // - `node.element` is manually written, so it is safe;
        // - `node.prev` and `node.next` are dangling, but need unsafe blocks
        //   for dereference, so it is also safe.
        NonNull::from(unsafe {
            // `node.prev` and `node.next` will not be read, so it is ok to be
            // uninitialized. `node.element` is initialized manually by `ptr::write`.
            #[allow(invalid_value, clippy::uninit_assumed_init)]
            let node = Box::<Node<T>>::leak(Box::new(MaybeUninit::uninit().assume_init()));
            std::ptr::write(&mut node.element, element);
            node
        })
    }

    /// Take the element out of a detached node, releasing the node storage.
    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range of exactly `len` nodes.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        let _marker = PhantomData;
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker,
        }
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY:
    // - `ghost.next`, `ghost.prev` are initialized immediately after creating `ghost`.
    // - `ghost.element` is never read, so it is erased out.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{Error, List};
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(Error::Empty));
        assert_eq!(list.back(), Err(Error::Empty));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_len_tracks_pushes_and_pops() {
        let mut list = List::new();
        let mut expected = 0_usize;
        for round in 0..4 {
            for i in 0..8 {
                if i % 2 == 0 {
                    list.push_back(i);
                } else {
                    list.push_front(i);
                }
                expected += 1;
                assert_eq!(list.len(), expected);
            }
            for i in 0..(4 + round) {
                let popped = if i % 2 == 0 {
                    list.pop_back()
                } else {
                    list.pop_front()
                };
                if popped.is_ok() {
                    expected -= 1;
                }
                assert_eq!(list.len(), expected);
            }
        }
        // Failed pops must not disturb the count.
        list.clear();
        assert_eq!(list.pop_front(), Err(Error::Empty));
        assert_eq!(list.pop_back(), Err(Error::Empty));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn list_front_back_mut() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(Vec::from_iter(list), vec![10, 2, 30]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), Err(Error::Empty));
        assert_eq!(empty.back_mut(), Err(Error::Empty));
    }

    #[test]
    fn list_clear() {
        let mut list = List::from_iter(0..10);
        assert_eq!(list.len(), 10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(Error::Empty));
        // Clearing an empty list is a no-op.
        list.clear();
        assert!(list.is_empty());
    }
}
