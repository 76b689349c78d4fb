use crate::queue::{LinkedQueue, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `LinkedQueue`, front to back.
///
/// It uses a pair of nodes `head..=tail` and the number of elements left
/// between them.
///
/// Though the `Iter` does not hold a reference to the queue, it actually
/// *borrows* (immutably) from it, so a phantom marker of `&'a LinkedQueue<T>`
/// is added to protect the queue from being written.
///
/// # Examples
///
/// ```compile_fail
/// use linked_queue::LinkedQueue;
/// use std::convert::TryFrom;
///
/// let mut queue = LinkedQueue::try_from(vec![1, 2, 3]).unwrap();
/// let mut iter = queue.iter();
///
/// // Won't compile, because queue is already borrowed immutably.
/// queue.enqueue(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a LinkedQueue<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(queue: &'a LinkedQueue<T>) -> Self {
        Self {
            head: queue.front,
            tail: queue.back,
            len: queue.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*head` and advance `head`, or return `None` if no element is
    /// left.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `head` is a live node of the borrowed queue.
        let current = unsafe { self.head?.as_ref() };
        self.head = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*tail` and step `tail` back, or return `None` if no element is
    /// left.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `tail` is a live node of the borrowed queue.
        let current = unsafe { self.tail?.as_ref() };
        self.tail = current.prev;
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `LinkedQueue`.
///
/// This `struct` is created by the [`into_iter`] method on [`LinkedQueue`]
/// (provided by the `IntoIterator` trait). Going forward dequeues from the
/// front.
///
/// [`into_iter`]: LinkedQueue::into_iter
pub struct IntoIter<T> {
    queue: LinkedQueue<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(queue: LinkedQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.queue.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::LinkedQueue;
    use std::convert::TryFrom;

    #[test]
    fn iter_both_ends() {
        let queue = LinkedQueue::try_from(vec![1, 2, 3, 4]).unwrap();
        let mut iter = queue.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        assert_eq!(queue.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!(queue.iter().last(), Some(&4));
        assert_eq!((&queue).into_iter().count(), 4);
    }

    #[test]
    fn iter_empty() {
        let queue = LinkedQueue::<u8>::new();
        assert_eq!(queue.iter().next(), None);
        assert_eq!(queue.iter().next_back(), None);
        assert_eq!(queue.iter().len(), 0);
    }

    #[test]
    fn into_iter() {
        let queue = LinkedQueue::try_from(vec!["a", "b", "c"]).unwrap();
        let mut iter = queue.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some("c"));
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn extend_enqueues() {
        let mut queue = LinkedQueue::new();
        queue.extend(vec![1, 2]);
        queue.extend(3..5);
        queue.check_links();
        assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(queue.len(), 4);
    }
}
