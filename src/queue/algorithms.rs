use crate::error::{QueueError, Result};
use crate::queue::{reject, LinkedQueue};
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: Hash> Hash for LinkedQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// The clone holds copies of the elements, with its cursor at the same index.
impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(self.iter().cloned());
        if let Some(index) = self.current_index() {
            queue.cursor = queue.node_at(index).ok();
        }
        queue
    }
}

impl<T> LinkedQueue<T> {
    /// Returns `true` if the queue contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let queue = LinkedQueue::try_from(vec!["a", "b"]).unwrap();
    /// assert!(queue.contains(&"b"));
    /// assert!(!queue.contains(&"z"));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Exchanges the elements at indices `i` and `j`.
    ///
    /// Only the elements move; the nodes, their handles and the cursor stay
    /// where they are.
    ///
    /// # Errors
    ///
    /// Fails like [`LinkedQueue::get`] if either index is not a position of
    /// the queue, in which case nothing is exchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec!['B', 'X', 'C']).unwrap();
    /// queue.swap(0, 2).unwrap();
    /// assert_eq!(queue.to_vec(), vec!['C', 'X', 'B']);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let a = self.node_at(i).map_err(|err| reject("swap", err))?;
        let b = self.node_at(j).map_err(|err| reject("swap", err))?;
        if a != b {
            // SAFETY: `a` and `b` are two distinct live nodes of the queue.
            unsafe { std::mem::swap(&mut (*a.as_ptr()).element, &mut (*b.as_ptr()).element) }
        }
        Ok(())
    }

    /// Moves the element at index `from` so that it ends up at index `to`,
    /// shifting the elements in between by one.
    ///
    /// The node is relinked rather than reallocated: its [`NodeId`] stays
    /// valid, and a cursor resting on it follows it.
    ///
    /// # Errors
    ///
    /// Fails like [`LinkedQueue::get`] if either index is not a position of
    /// the queue, in which case nothing moves.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`from` + `to`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_queue::LinkedQueue;
    /// use std::convert::TryFrom;
    ///
    /// let mut queue = LinkedQueue::try_from(vec![0, 1, 2, 3]).unwrap();
    /// queue.move_to(0, 2).unwrap();
    /// assert_eq!(queue.to_vec(), vec![1, 2, 0, 3]);
    ///
    /// queue.move_to(3, 0).unwrap();
    /// assert_eq!(queue.to_vec(), vec![3, 1, 2, 0]);
    /// ```
    ///
    /// [`NodeId`]: crate::NodeId
    pub fn move_to(&mut self, from: usize, to: usize) -> Result<()> {
        let node = self.node_at(from).map_err(|err| reject("move", err))?;
        if to >= self.len {
            return Err(reject(
                "move",
                QueueError::IndexOutOfBounds {
                    index: to,
                    len: self.len,
                },
            ));
        }
        if from == to {
            return Ok(());
        }
        let cursor = self.cursor;
        // SAFETY: `node` belongs to the queue and is attached again right away.
        // Once it is detached, `to <= len`, so the lookup below cannot fail.
        unsafe {
            let node = self.detach_node(node);
            let (prev, next) = if to == self.len {
                (self.back, None)
            } else {
                let next = self.node_at(to)?;
                (next.as_ref().prev, Some(next))
            };
            self.attach_node(prev, next, node);
        }
        self.cursor = cursor;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{LinkedQueue, QueueError};
    use std::collections::hash_map::DefaultHasher;
    use std::convert::TryFrom;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn swap_is_self_inverse() {
        let mut queue = LinkedQueue::try_from((0..6).collect::<Vec<_>>()).unwrap();
        let original = queue.to_vec();
        for &(i, j) in &[(0, 5), (1, 3), (4, 4), (5, 0), (2, 3)] {
            queue.swap(i, j).unwrap();
            queue.check_links();
            assert_eq!(queue.get(i), Ok(&original[j]));
            assert_eq!(queue.get(j), Ok(&original[i]));
            queue.swap(i, j).unwrap();
            assert_eq!(queue.to_vec(), original);
        }
    }

    #[test]
    fn swap_keeps_nodes() {
        let mut queue = LinkedQueue::try_from(vec!["a", "b", "c"]).unwrap();
        let front = queue.node(0).unwrap();
        queue.swap(0, 2).unwrap();
        assert_eq!(queue.node(0), Ok(front));
        assert_eq!(queue.current(), Some(&"c"));
    }

    #[test]
    fn swap_out_of_bounds() {
        let mut queue = LinkedQueue::try_from(vec![1, 2]).unwrap();
        assert_eq!(
            queue.swap(0, 2),
            Err(QueueError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(queue.to_vec(), vec![1, 2]);
        assert_eq!(LinkedQueue::<i32>::new().swap(0, 0), Err(QueueError::Empty));
    }

    #[test]
    fn move_lands_on_target() {
        let original: Vec<_> = (0..5).collect();
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut queue = LinkedQueue::try_from(original.clone()).unwrap();
                queue.move_to(from, to).unwrap();
                queue.check_links();
                assert_eq!(queue.len(), original.len());
                assert_eq!(queue.get(to), Ok(&original[from]), "move {} -> {}", from, to);

                let mut expected = original.clone();
                let moved = expected.remove(from);
                expected.insert(to, moved);
                assert_eq!(queue.to_vec(), expected, "move {} -> {}", from, to);
            }
        }
    }

    #[test]
    fn move_keeps_handle_and_cursor() {
        let mut queue = LinkedQueue::try_from(vec!["a", "b", "c", "d"]).unwrap();
        let a = queue.node(0).unwrap();
        queue.move_to(0, 3).unwrap();
        queue.check_links();
        assert_eq!(queue.position(a), Some(3));
        assert_eq!(queue.current(), Some(&"a"));
        assert_eq!(queue.current_index(), Some(3));
        assert_eq!(queue.back(), Some(&"a"));
        assert_eq!(queue.peek(), Some(&"b"));
    }

    #[test]
    fn move_out_of_bounds() {
        let mut queue = LinkedQueue::try_from(vec![1, 2, 3]).unwrap();
        assert_eq!(
            queue.move_to(3, 0),
            Err(QueueError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            queue.move_to(0, 3),
            Err(QueueError::IndexOutOfBounds { index: 3, len: 3 })
        );
        queue.check_links();
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn queue_eq_and_hash() {
        let a = LinkedQueue::try_from(vec![1, 2, 3]).unwrap();
        let mut b = LinkedQueue::new();
        b.extend(1..4);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.enqueue(4);
        assert_ne!(a, b);
    }

    #[test]
    fn queue_clone() {
        let mut queue = LinkedQueue::try_from(vec![1, 2, 3]).unwrap();
        queue.move_next();
        let mut cloned = queue.clone();
        cloned.check_links();
        assert_eq!(cloned, queue);
        assert_eq!(cloned.current(), Some(&2));
        assert_ne!(cloned.node(0), queue.node(0));

        cloned.enqueue(4);
        assert_eq!(queue.len(), 3);
    }
}
