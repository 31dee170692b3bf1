// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::list::arena::Arena;
use crate::list::err::NotAMemberError;
use crate::list::index::NodeIndex;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeIndex>,
    prev: Option<NodeIndex>,
}

impl<T> Node<T> {
    #[inline]
    fn detached(value: T) -> Self {
        Self {
            value,
            next: None,
            prev: None,
        }
    }
}

/// Doubly linked list over an index arena.
///
/// The list owns every node; `next`/`prev` are navigation indices, never a
/// second owner. `NodeIndex` handles returned by `push_*`, `find` and
/// `find_all` stay valid until the next mutating call on the same list;
/// freed slots may be reused by later insertions.
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
}

impl<T> DoublyLinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Every occupied arena slot is on the chain, so the slab count is the
    /// list length.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn head_index(&self) -> Option<NodeIndex> {
        self.head
    }

    #[inline]
    pub fn tail_index(&self) -> Option<NodeIndex> {
        self.tail
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|index| self.value(index))
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|index| self.value(index))
    }

    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        self.nodes.contains(node)
    }

    #[inline]
    pub fn value(&self, node: NodeIndex) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    #[inline]
    pub fn value_mut(&mut self, node: NodeIndex) -> Option<&mut T> {
        self.nodes.get_mut(node).map(|n| &mut n.value)
    }

    #[inline]
    pub fn next_index(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node).and_then(|n| n.next)
    }

    #[inline]
    pub fn prev_index(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node).and_then(|n| n.prev)
    }

    #[inline]
    fn node(&self, index: NodeIndex) -> &Node<T> {
        self.nodes.get(index).expect("chain link names a live node")
    }

    #[inline]
    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        self.nodes
            .get_mut(index)
            .expect("chain link names a live node")
    }

    pub fn push_front(&mut self, value: T) -> NodeIndex {
        let node = self.nodes.insert(Node::detached(value));
        match self.head {
            Some(old_head) => {
                self.node_mut(old_head).prev = Some(node);
                self.node_mut(node).next = Some(old_head);
                self.head = Some(node);
            }
            None => {
                debug_assert!(self.tail.is_none(), "tail set on an empty list");
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        node
    }

    pub fn push_back(&mut self, value: T) -> NodeIndex {
        let node = self.nodes.insert(Node::detached(value));
        match self.tail {
            Some(old_tail) => {
                self.node_mut(old_tail).next = Some(node);
                self.node_mut(node).prev = Some(old_tail);
                self.tail = Some(node);
            }
            None => {
                debug_assert!(self.head.is_none(), "head set on an empty list");
                self.head = Some(node);
                self.tail = Some(node);
            }
        }
        node
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self
            .nodes
            .remove(head)
            .expect("head names a live node");
        match node.next {
            Some(next) => {
                self.node_mut(next).prev = None;
                self.head = Some(next);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        Some(node.value)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        let node = self
            .nodes
            .remove(tail)
            .expect("tail names a live node");
        match node.prev {
            Some(prev) => {
                self.node_mut(prev).next = None;
                self.tail = Some(prev);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        Some(node.value)
    }

    /// Splices a new node directly after `anchor`.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` does not name a live node of this list.
    pub fn insert_after(&mut self, anchor: NodeIndex, value: T) -> NodeIndex {
        assert!(
            self.nodes.contains(anchor),
            "{}",
            NotAMemberError::new(anchor)
        );
        let anchor_next = self.node(anchor).next;
        match anchor_next {
            None => self.push_back(value),
            Some(successor) => {
                let node = self.nodes.insert(Node {
                    value,
                    next: Some(successor),
                    prev: Some(anchor),
                });
                self.node_mut(anchor).next = Some(node);
                self.node_mut(successor).prev = Some(node);
                node
            }
        }
    }

    /// Splices a new node directly before `anchor`.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` does not name a live node of this list.
    pub fn insert_before(&mut self, anchor: NodeIndex, value: T) -> NodeIndex {
        assert!(
            self.nodes.contains(anchor),
            "{}",
            NotAMemberError::new(anchor)
        );
        let anchor_prev = self.node(anchor).prev;
        match anchor_prev {
            None => self.push_front(value),
            Some(predecessor) => self.insert_after(predecessor, value),
        }
    }

    /// Unlinks `node` in O(1): the two neighbors are rewired to each other
    /// and head/tail are adjusted when an endpoint is removed.
    ///
    /// Returns `Err` when the index does not name a live node of this list;
    /// the list is left untouched in that case.
    pub fn try_remove_node(&mut self, node: NodeIndex) -> Result<T, NotAMemberError> {
        let Some(removed) = self.nodes.remove(node) else {
            return Err(NotAMemberError::new(node));
        };
        match removed.prev {
            Some(prev) => self.node_mut(prev).next = removed.next,
            None => self.head = removed.next,
        }
        match removed.next {
            Some(next) => self.node_mut(next).prev = removed.prev,
            None => self.tail = removed.prev,
        }
        Ok(removed.value)
    }

    /// Unlinks `node` in O(1) and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not name a live node of this list. Callers
    /// must only pass handles obtained from this list's own `push_*`,
    /// `find` or `find_all`, and must not retain them across mutations.
    pub fn remove_node(&mut self, node: NodeIndex) -> T {
        match self.try_remove_node(node) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    fn matches(&self, value: &T, first_only: bool) -> Vec<NodeIndex>
    where
        T: PartialEq,
    {
        let mut found = Vec::new();
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index);
            if node.value == *value {
                found.push(index);
                if first_only {
                    break;
                }
            }
            cursor = node.next;
        }
        found
    }

    /// First node holding `value`, scanning head to tail.
    #[inline]
    pub fn find(&self, value: &T) -> Option<NodeIndex>
    where
        T: PartialEq,
    {
        self.matches(value, true).into_iter().next()
    }

    /// Every node holding `value`, in traversal order.
    #[inline]
    pub fn find_all(&self, value: &T) -> Vec<NodeIndex>
    where
        T: PartialEq,
    {
        self.matches(value, false)
    }

    /// Removes the first node holding `value`; reports whether one existed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Some(index) => {
                self.remove_node(index);
                true
            }
            None => false,
        }
    }

    /// Removes every node holding `value` and returns how many were
    /// removed. Unlinking one match does not disturb the handles of the
    /// remaining matches, so the collected handles stay valid throughout.
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let matches = self.find_all(value);
        let removed = matches.len();
        for index in matches {
            self.remove_node(index);
        }
        removed
    }

    /// Reverses the list in place: one pass swapping `next`/`prev` on every
    /// node, then head and tail trade places. No-op below two nodes.
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node_mut(index);
            std::mem::swap(&mut node.next, &mut node.prev);
            // After the swap, `prev` holds the old successor.
            cursor = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Drops all current nodes, then pushes each item to the back in input
    /// order.
    pub fn assign<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(items);
    }

    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Head-to-tail value iterator. Restartable: every call begins a fresh
    /// traversal from the head.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            steps_left: self.len(),
            forward: true,
        }
    }

    /// Tail-to-head value iterator.
    #[inline]
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.tail,
            steps_left: self.len(),
            forward: false,
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Lists are equal when they hold equal values at every position; node
/// identity plays no part. Short-circuits on the first mismatch.
impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: std::fmt::Display> std::fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, " <-> ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Iter<'list, T> {
    list: &'list DoublyLinkedList<T>,
    cursor: Option<NodeIndex>,
    steps_left: usize,
    forward: bool,
}

impl<'list, T> Iterator for Iter<'list, T> {
    type Item = &'list T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.steps_left == 0 {
            return None;
        }
        let index = self.cursor?;
        self.steps_left -= 1;
        let node = self.list.nodes.get(index)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.steps_left, Some(self.steps_left))
    }
}

impl<'list, T> ExactSizeIterator for Iter<'list, T> {}
