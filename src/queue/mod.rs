use std::convert::TryFrom;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{QueueError, Result};
use crate::{IntoIter, Iter};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// A doubly-linked queue with owned nodes, addressable by index.
///
/// The `LinkedQueue` is a FIFO queue (enqueue at the back, dequeue at the
/// front) that also allows reading, inserting, removing, moving and swapping
/// elements at any index. Accessing a position other than the two ends takes
/// *O*(*n*) time.
///
/// The `LinkedQueue` contains:
/// - a pointer `front` to the first node, which is the root of ownership: each
///   node owns its successor;
/// - a pointer `back` to the last node;
/// - a pointer `cursor` to some node of the chain, or nothing. It is moved by
///   [`move_next`], [`move_prev`] and [`restart`], and never affects `front`,
///   `back` or the length;
/// - a length field `len`.
///
/// The `prev` link of a node is an observation pointer only; it never decides
/// when a node is released.
///
/// [`move_next`]: LinkedQueue::move_next
/// [`move_prev`]: LinkedQueue::move_prev
/// [`restart`]: LinkedQueue::restart
pub struct LinkedQueue<T> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    cursor: Option<NonNull<Node<T>>>,
    /// the number of nodes reachable from `front`
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) id: NodeId,
    pub(crate) element: T,
}

/// An opaque handle naming one node of a [`LinkedQueue`].
///
/// Handles are unique for the lifetime of the process, so a handle to a
/// removed node never matches a node allocated later.
///
/// # Examples
///
/// ```
/// use linked_queue::LinkedQueue;
/// use std::convert::TryFrom;
///
/// let mut queue = LinkedQueue::try_from(vec!["a", "b", "c"]).unwrap();
/// let b = queue.node(1).unwrap();
///
/// assert_eq!(queue.remove_node(b), Some("b"));
/// assert_eq!(queue.remove_node(b), None);
/// assert_eq!(queue.to_vec(), vec!["a", "c"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        NodeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// private methods
impl<T> LinkedQueue<T> {
    /// Link a detached `node` between `prev` and `next`, where `None` stands
    /// for the outside of the front or the back.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the queue, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
        mut node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        node.as_mut().prev = prev;
        node.as_mut().next = next;
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.front = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.back = Some(node),
        }
        self.len += 1;
    }

    /// Unlink `node` from the queue and return it, still allocated, with both
    /// links cleared.
    ///
    /// A cursor resting on `node` moves to its successor.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// queue. If it does not, this call makes the queue ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, mut node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        let (prev, next) = {
            let node = node.as_ref();
            (node.prev, node.next)
        };
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.front = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.back = prev,
        }
        if self.cursor == Some(node) {
            self.cursor = next;
        }
        node.as_mut().prev = None;
        node.as_mut().next = None;
        self.len -= 1;
        node
    }

    /// Returns the node at `index`.
    ///
    /// Index `0` and index `len - 1` are answered in *O*(1) time, any other
    /// index walks forward from the front.
    pub(crate) fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>> {
        let (front, back) = match (self.front, self.back) {
            (Some(front), Some(back)) => (front, back),
            _ => return Err(QueueError::Empty),
        };
        if index >= self.len {
            return Err(QueueError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(front);
        }
        if index == self.len - 1 {
            return Ok(back);
        }
        let mut node = front;
        for _ in 0..index {
            // SAFETY: `node` is reachable from `front`, so it is a live node.
            node = match unsafe { node.as_ref().next } {
                Some(next) => next,
                None => {
                    return Err(QueueError::IndexOutOfBounds {
                        index,
                        len: self.len,
                    })
                }
            };
        }
        Ok(node)
    }

    /// Find the node named by `id`, together with its index.
    pub(crate) fn find_node(&self, id: NodeId) -> Option<(usize, NonNull<Node<T>>)> {
        let mut node = self.front;
        let mut index = 0;
        while let Some(current) = node {
            // SAFETY: `current` is reachable from `front`.
            let current_ref = unsafe { current.as_ref() };
            if current_ref.id == id {
                return Some((index, current));
            }
            node = current_ref.next;
            index += 1;
        }
        None
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let back = self.back?;
        // SAFETY: `back` belongs to the queue, and it is released right after
        // being unlinked.
        unsafe { Some(Node::into_element(self.detach_node(back))) }
    }

    #[cfg(debug_assertions)]
    unsafe fn assert_adjacent(
        &self,
        prev: Option<NonNull<Node<T>>>,
        next: Option<NonNull<Node<T>>>,
    ) {
        match prev {
            Some(prev) => assert_eq!(prev.as_ref().next, next),
            None => assert_eq!(self.front, next),
        }
        match next {
            Some(next) => assert_eq!(next.as_ref().prev, prev),
            None => assert_eq!(self.back, prev),
        }
    }

    /// Walk the whole chain and assert the structural invariants of the queue.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut node = self.front;
        let mut cursor_found = self.cursor.is_none();
        while let Some(current) = node {
            let current_ref = unsafe { current.as_ref() };
            assert_eq!(current_ref.prev, prev, "broken `prev` link at index {}", count);
            if self.cursor == Some(current) {
                cursor_found = true;
            }
            count += 1;
            prev = node;
            node = current_ref.next;
        }
        assert_eq!(self.back, prev, "`back` is not the end of the chain");
        assert_eq!(self.len, count, "`len` disagrees with the chain");
        assert!(cursor_found, "cursor points outside of the chain");
    }
}

/// Log a rejected positional operation and hand the error back.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn reject(operation: &'static str, err: QueueError) -> QueueError {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, error = %err, "rejected positional operation");
    err
}

impl<T> LinkedQueue<T> {
    /// Create an empty `LinkedQueue`, with no cursor.
    ///
    /// # Examples
    /// ```
    /// use linked_queue::LinkedQueue;
    /// let queue: LinkedQueue<&str> = LinkedQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            front: None,
            back: None,
            cursor: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Build a queue holding the elements of `iter` in order, with the cursor
    /// at the front.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyConstruction`] if `iter` yields nothing. An
    /// empty input is not a valid zero-length queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::{LinkedQueue, QueueError};
    ///
    /// let queue = LinkedQueue::try_from_iter(["a", "b"]).unwrap();
    /// assert_eq!(queue.current(), Some(&"a"));
    ///
    /// let err = LinkedQueue::<&str>::try_from_iter(None).unwrap_err();
    /// assert_eq!(err, QueueError::EmptyConstruction);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        let mut queue = Self::new();
        queue.extend(iter);
        if queue.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("rejected queue construction from an empty sequence");
            return Err(QueueError::EmptyConstruction);
        }
        queue.cursor = queue.front;
        Ok(queue)
    }

    /// Returns `true` if the `LinkedQueue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the `LinkedQueue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements and unsets the cursor.
    ///
    /// The queue itself is reset in *O*(1) time; the detached chain is then
    /// released front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec![1, 2, 3]).unwrap();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.current(), None);
    /// ```
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "clearing queue");
        let front = self.front.take();
        self.back = None;
        self.cursor = None;
        self.len = 0;
        release_chain(front);
    }

    /// Provides a reference to the front element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// assert_eq!(queue.peek(), None);
    ///
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `front` is a live node of the queue.
        self.front.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a reference to the back element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `back` is a live node of the queue.
        self.back.map(|node| unsafe { &node.as_ref().element })
    }

    /// Appends an element to the back of the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue("a");
    /// queue.enqueue("b");
    /// assert_eq!(queue.to_vec(), vec!["a", "b"]);
    /// ```
    pub fn enqueue(&mut self, element: T) {
        let node = Node::new_detached(element);
        // SAFETY: `back` and the outside of the back are adjacent.
        unsafe { self.attach_node(self.back, None, node) }
    }

    /// Removes the front element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// queue.enqueue(1);
    /// queue.enqueue(3);
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(3));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let front = self.front?;
        // SAFETY: `front` belongs to the queue, and it is released right after
        // being unlinked.
        unsafe { Some(Node::into_element(self.detach_node(front))) }
    }

    /// Provides a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] on an empty queue, and
    /// [`QueueError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Complexity
    ///
    /// *O*(1) for the front and the back, *O*(`index`) otherwise.
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns live nodes of the queue.
        Ok(unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Same as [`LinkedQueue::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let mut node = self.node_at(index)?;
        // SAFETY: `node_at` only returns live nodes, and `self` is borrowed
        // mutably for the lifetime of the reference.
        Ok(unsafe { &mut node.as_mut().element })
    }

    /// Returns a handle to the node at `index`, usable with
    /// [`LinkedQueue::remove_node`].
    pub fn node(&self, index: usize) -> Result<NodeId> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns live nodes of the queue.
        Ok(unsafe { node.as_ref().id })
    }

    /// Returns the index of the node named by `id`, or `None` if it is not in
    /// the queue.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.find_node(id).map(|(index, _)| index)
    }

    /// Inserts `element` so that it becomes the element at `index`, shifting
    /// the following elements back.
    ///
    /// `index == 0` makes it the new front and `index == len` is the same as
    /// [`LinkedQueue::enqueue`].
    ///
    /// # Errors
    ///
    /// [`QueueError::IndexOutOfBounds`] if `index > len`. The queue is left
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// *O*(1) at either end, *O*(`index`) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec!["b", "c"]).unwrap();
    /// queue.insert(0, "a").unwrap();
    /// queue.insert(3, "d").unwrap();
    /// queue.insert(2, "x").unwrap();
    /// assert_eq!(queue.to_vec(), vec!["a", "b", "x", "c", "d"]);
    ///
    /// assert!(queue.insert(9, "z").is_err());
    /// assert_eq!(queue.len(), 5);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.len {
            return Err(reject(
                "insert",
                QueueError::IndexOutOfBounds {
                    index,
                    len: self.len,
                },
            ));
        }
        if index == self.len {
            self.enqueue(element);
            return Ok(());
        }
        let next = self.node_at(index).map_err(|err| reject("insert", err))?;
        // SAFETY: `next` is a live node, and its `prev` is adjacent to it.
        unsafe {
            let prev = next.as_ref().prev;
            self.attach_node(prev, Some(next), Node::new_detached(element));
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] on an empty queue, and
    /// [`QueueError::IndexOutOfBounds`] if `index >= len`. The queue is left
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// *O*(1) at either end, *O*(`index`) otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(queue.remove(1), Ok(2));
    /// assert_eq!(queue.remove(2), Ok(4));
    /// assert_eq!(queue.remove(0), Ok(1));
    /// assert_eq!(queue.to_vec(), vec![3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index).map_err(|err| reject("remove", err))?;
        // SAFETY: `node_at` only returns nodes of the queue, and the node is
        // released right after being unlinked.
        Ok(unsafe { Node::into_element(self.detach_node(node)) })
    }

    /// Removes the node named by `id` and returns its element, or `None` if
    /// the node is not in the queue.
    ///
    /// # Complexity
    ///
    /// This operation scans from the front, in *O*(*n*) time.
    pub fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let (_, node) = self.find_node(id)?;
        // SAFETY: `find_node` only returns nodes of the queue, and the node is
        // released right after being unlinked.
        Some(unsafe { Node::into_element(self.detach_node(node)) })
    }

    /// Returns all elements from front to back. An empty queue gives an empty
    /// vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Provides a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue(0);
    /// queue.enqueue(1);
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T> TryFrom<Vec<T>> for LinkedQueue<T> {
    type Error = QueueError;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::try_from_iter(elements)
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.enqueue(element));
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a node with no links, owned by the caller until it is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            id: NodeId::fresh(),
            element,
        })))
    }

    /// Release a detached node and return its element.
    ///
    /// It is unsafe because `node` must come from [`Node::new_detached`] and
    /// must no longer be reachable from any queue.
    pub(crate) unsafe fn into_element(node: NonNull<Node<T>>) -> T {
        Box::from_raw(node.as_ptr()).element
    }
}

/// Release every node from `front` onwards, one at a time.
fn release_chain<T>(mut node: Option<NonNull<Node<T>>>) {
    while let Some(current) = node {
        // SAFETY: the chain was detached from its queue, and each node is only
        // owned by its predecessor.
        let boxed = unsafe { Box::from_raw(current.as_ptr()) };
        node = boxed.next;
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for LinkedQueue<T> {}

unsafe impl<T: Sync> Sync for LinkedQueue<T> {}
