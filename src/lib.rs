//! This crate provides a doubly-linked list with owned nodes and checked
//! position handles, implemented as a cyclic list.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. In compromise, reaching an arbitrary position takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use checked_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let second = list.next(list.start()).unwrap();
//! assert_eq!(list.get(second), Ok(&2));
//!
//! list.insert(second, 0).unwrap(); // insert 0 right before the 2
//! assert_eq!(Vec::from_iter(&list), vec![&1, &0, &2, &3, &4]);
//!
//! let (removed, after) = list.remove(second).unwrap();
//! assert_eq!(removed, 2);
//! assert_eq!(list.get(after), Ok(&3));
//! assert_eq!(Vec::from_iter(list), vec![1, 0, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the ghost node if it
//!   is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the ghost node if
//!   it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list, except
//!   the ghost node.
//!
//! Note that the ghost node has *NO* payload to save memory.
//!
//! Initially, there is a ghost node in an empty list, of which the `next` and `prev`
//! pointer point to itself.
//!
//! As elements are inserted into the list, `ghost.next` points to the first element,
//! and `ghost.prev` points to the last element of the list.
//!
//! # Positions
//!
//! Positional access goes through [`Position`] handles. A `Position` is a
//! `Copy` token denoting one location of one particular list: in a list with
//! length *n* there are *n* + 1 locations, the last one being the past-the-end
//! location [`List::end`], which holds no element.
//!
//! Unlike a cursor, a `Position` does not borrow the list, so it can be stored
//! and used later. In exchange, every operation taking a `Position` is checked
//! and fallible: handles of another list, stale handles whose element has
//! since been removed, the end location where an element is required, and
//! moves across a boundary are all rejected with an [`Error`] before the list
//! is touched.
//!
//! ## Examples
//!
//! ```
//! use checked_list::{Error, List};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let other = List::from_iter([4, 5, 6]);
//!
//! // Handles of `other` are useless against `list`.
//! assert_eq!(list.get(other.start()), Err(Error::InvalidPosition));
//! assert_eq!(list.remove(other.start()), Err(Error::InvalidPosition));
//!
//! // The end location holds no element.
//! assert_eq!(list.get(list.end()), Err(Error::InvalidPosition));
//! assert_eq!(list.next(list.end()), Err(Error::InvalidPosition));
//!
//! // A handle goes stale when its element is removed.
//! let last = list.prev(list.end()).unwrap();
//! assert_eq!(list.pop_back(), Ok(3));
//! assert_eq!(list.get(last), Err(Error::InvalidPosition));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list).
//!
//! ## Examples
//!
//! ```
//! use checked_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Algorithms
//!
//! The structural algorithms ([`sort`], [`merge`], [`reverse`], [`unique`])
//! all work by relinking nodes and never copy or move an element. Because a
//! node keeps its address for as long as its element is in a list, positions
//! held across these calls stay valid and keep denoting the same elements.
//!
//! ## Examples
//!
//! ```
//! use checked_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([3, 1, 2, 2]);
//! let mut other = List::from_iter([0, 4]);
//!
//! list.sort();
//! list.unique();
//! list.merge(&mut other);
//! assert!(other.is_empty());
//! assert_eq!(Vec::from_iter(&list), vec![&0, &1, &2, &3, &4]);
//!
//! list.reverse();
//! assert_eq!(Vec::from_iter(list), vec![4, 3, 2, 1, 0]);
//! ```
//!
//! [`sort`]: crate::List::sort
//! [`merge`]: crate::List::merge
//! [`reverse`]: crate::List::reverse
//! [`unique`]: crate::List::unique

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::position::Position;
#[doc(inline)]
pub use list::{Error, List};

pub mod list;

mod experiments;
