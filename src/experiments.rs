//! A fully-safe doubly-linked deque built on [`GhostCell`] and [`StaticRc`],
//! kept as an experiment next to the pointer-based [`List`](crate::List).
//!
//! Every node is owned by exactly two [`StaticRc`] halves, one reaching it
//! from each direction; popping a node joins the halves back into full
//! ownership, so no `unsafe` is needed anywhere in this module. The price is
//! that all access is threaded through a [`GhostToken`].

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

use crate::Error;

pub struct TokenList<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    /// `links[side]` holds a half of the neighboring node on that side, or
    /// `None` at an end of the list.
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

const FRONT: usize = 0;
const BACK: usize = 1;

impl<'id, T> Node<'id, T> {
    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { links, elem }
    }
}

impl<'id, T> Default for TokenList<'id, T> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends, len: 0 }
    }
}

// The two ends are symmetric, so pushing and popping are written once and
// parameterized by the side index.
impl<'id, T> TokenList<'id, T> {
    fn push_at(&mut self, side: usize, elem: T, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.ends[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[side] = Some(inner);
                outer.deref().borrow_mut(token).links[oppo] = Some(old_end);
            }
            None => self.ends[oppo] = Some(inner),
        }
        self.ends[side] = Some(outer);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Result<T, Error> {
        let oppo = 1 - side;
        let outer = self.ends[side].take().ok_or(Error::Empty)?;
        let inner = match outer.deref().borrow_mut(token).links[oppo].take() {
            Some(neighbor) => {
                // The neighbor becomes the new end; its link on this side is
                // the second half of the node being popped.
                let inner = neighbor.deref().borrow_mut(token).links[side]
                    .take()
                    .unwrap();
                self.ends[side] = Some(neighbor);
                inner
            }
            None => self.ends[oppo].take().unwrap(),
        };
        self.len -= 1;
        Ok(Full::into_box(Full::join(inner, outer)).into_inner().elem)
    }

    fn peek_at<'a>(&'a self, side: usize, token: &'a GhostToken<'id>) -> Result<&'a T, Error> {
        self.ends[side]
            .as_ref()
            .map(|node| &node.deref().borrow(token).elem)
            .ok_or(Error::Empty)
    }
}

impl<'id, T> TokenList<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Result<&'a T, Error> {
        self.peek_at(FRONT, token)
    }
    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Result<&'a T, Error> {
        self.peek_at(BACK, token)
    }
    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, elem, token);
    }
    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, elem, token);
    }
    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Result<T, Error> {
        self.pop_at(FRONT, token)
    }
    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Result<T, Error> {
        self.pop_at(BACK, token)
    }
    /// Drains the list. Nodes are only released by joining their halves, so
    /// a list should be cleared before its token scope ends to avoid leaks.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_ok() {}
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::TokenList;
    use crate::Error;
    use ghost_cell::GhostToken;

    #[test]
    fn token_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            assert!(list.is_empty());
            assert_eq!(list.pop_front(&mut token), Err(Error::Empty));
            assert_eq!(list.pop_back(&mut token), Err(Error::Empty));

            list.push_back(1, &mut token);
            list.push_front(2, &mut token);
            list.push_back(3, &mut token);
            assert_eq!(list.len(), 3);
            assert_eq!(list.front(&token), Ok(&2));
            assert_eq!(list.back(&token), Ok(&3));

            assert_eq!(list.pop_back(&mut token), Ok(3));
            assert_eq!(list.pop_front(&mut token), Ok(2));
            assert_eq!(list.pop_front(&mut token), Ok(1));
            assert!(list.is_empty());
            assert_eq!(list.front(&token), Err(Error::Empty));
        })
    }

    #[test]
    fn token_list_clear() {
        GhostToken::new(|mut token| {
            let mut list = TokenList::new();
            for i in 0..10 {
                list.push_back(i, &mut token);
            }
            assert_eq!(list.len(), 10);
            list.clear(&mut token);
            assert!(list.is_empty());
            // Still usable after a clear.
            list.push_front(7, &mut token);
            assert_eq!(list.pop_back(&mut token), Ok(7));
            list.clear(&mut token);
        })
    }
}
