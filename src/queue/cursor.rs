//! The traversal cursor of a [`LinkedQueue`].
//!
//! The cursor is a position inside the queue that is independent of the front
//! and the back. It is either *unset* or resting on a node. Building a queue
//! from a sequence places it at the front; [`restart`] puts it back there;
//! [`move_next`] and [`move_prev`] step along the chain and unset it when they
//! walk past either end; [`clear`] unsets it.
//!
//! The cursor never changes the length, the front or the back. When the node
//! under the cursor is removed, the cursor moves on to that node's successor
//! (or becomes unset if there is none).
//!
//! # Examples
//!
//! ```
//! use linked_queue::LinkedQueue;
//! use std::convert::TryFrom;
//!
//! let mut queue = LinkedQueue::try_from(vec!['A', 'B', 'C']).unwrap();
//! assert_eq!(queue.current(), Some(&'A'));
//!
//! queue.move_next();
//! queue.move_next();
//! assert_eq!(queue.current(), Some(&'C'));
//!
//! // Walking past the back unsets the cursor.
//! queue.move_next();
//! assert_eq!(queue.current(), None);
//!
//! queue.restart();
//! assert_eq!(queue.current(), Some(&'A'));
//! ```
//!
//! [`LinkedQueue`]: crate::LinkedQueue
//! [`restart`]: crate::LinkedQueue::restart
//! [`move_next`]: crate::LinkedQueue::move_next
//! [`move_prev`]: crate::LinkedQueue::move_prev
//! [`clear`]: crate::LinkedQueue::clear

use crate::queue::{LinkedQueue, Node, NodeId};

impl<T> LinkedQueue<T> {
    /// Provides a reference to the element under the cursor, or `None` if the
    /// cursor is unset.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        // SAFETY: the cursor always rests on a live node of the queue.
        self.cursor.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the element under the cursor, or
    /// `None` if the cursor is unset.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the cursor always rests on a live node of the queue, and
        // `self` is borrowed mutably for the lifetime of the reference.
        self.cursor
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Returns a handle to the node under the cursor.
    #[inline]
    pub fn current_node(&self) -> Option<NodeId> {
        // SAFETY: the cursor always rests on a live node of the queue.
        self.cursor.map(|node| unsafe { node.as_ref().id })
    }

    /// Returns the index of the node under the cursor.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn current_index(&self) -> Option<usize> {
        self.position(self.current_node()?)
    }

    /// Moves the cursor to the following node. Moving past the back, or
    /// moving an unset cursor, leaves the cursor unset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn move_next(&mut self) {
        // SAFETY: the cursor always rests on a live node of the queue.
        self.cursor = self.cursor.and_then(|node| unsafe { node.as_ref().next });
    }

    /// Moves the cursor to the preceding node. Moving past the front, or
    /// moving an unset cursor, leaves the cursor unset.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn move_prev(&mut self) {
        // SAFETY: the cursor always rests on a live node of the queue.
        self.cursor = self.cursor.and_then(|node| unsafe { node.as_ref().prev });
    }

    /// Puts the cursor back at the front. On an empty queue the cursor stays
    /// unset.
    #[inline]
    pub fn restart(&mut self) {
        self.cursor = self.front;
    }

    /// Inserts `element` right after the node under the cursor. The cursor
    /// itself does not move.
    ///
    /// On an empty queue the element simply becomes the only element. When the
    /// cursor is unset or rests on the back, this is the same as
    /// [`LinkedQueue::enqueue`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec![1, 3]).unwrap();
    /// queue.enqueue_next(2);
    /// assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    /// assert_eq!(queue.current(), Some(&1));
    /// ```
    pub fn enqueue_next(&mut self, element: T) {
        if self.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("queue was empty, element inserted as first item");
            return self.enqueue(element);
        }
        let cursor = match self.cursor {
            Some(cursor) => cursor,
            None => return self.enqueue(element),
        };
        // SAFETY: the cursor rests on a live node, and its `next` is adjacent
        // to it (or it is the back).
        unsafe {
            let next = cursor.as_ref().next;
            self.attach_node(Some(cursor), next, Node::new_detached(element));
        }
    }
}
