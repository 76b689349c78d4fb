//! This crate provides a doubly-linked queue with owned nodes that can also be
//! addressed by index, plus a traversal cursor that is independent of the
//! queue's ends.
//!
//! The [`LinkedQueue`] works as a FIFO queue: enqueuing, dequeuing and peeking
//! take constant time. It also works as a list: elements can be read, inserted,
//! removed, moved or swapped at any index, in *O*(*n*) time.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use linked_queue::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("A");
//! queue.enqueue("B");
//! queue.enqueue("C");
//! assert_eq!(queue.to_vec(), vec!["A", "B", "C"]);
//!
//! assert_eq!(queue.dequeue(), Some("A"));
//! assert_eq!(queue.len(), 2);
//!
//! queue.insert(1, "X").unwrap(); // X becomes the element at index 1
//! assert_eq!(queue.to_vec(), vec!["B", "X", "C"]);
//!
//! queue.swap(0, 2).unwrap();
//! assert_eq!(queue.to_vec(), vec!["C", "X", "B"]);
//!
//! assert_eq!(queue.remove(0), Ok("C"));
//! assert_eq!(queue.to_vec(), vec!["X", "B"]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!                  front                                          back
//!                    │                                              │
//!                    ↓                                              ↓
//!             ╔═══════════╗           ╔═══════════╗          ╔═══════════╗
//!             ║   next    ║ ────────→ ║   next    ║ ──→ ┄┄ ─→║   next    ║ ──→ None
//!             ╟───────────╢           ╟───────────╢          ╟───────────╢
//!   None ←┄┄┄ ║   prev    ║ ←┄┄┄┄┄┄┄┄ ║   prev    ║ ←┄ ┄┄ ┄┄ ║   prev    ║
//!             ╟───────────╢           ╟───────────╢          ╟───────────╢
//!             ║    id     ║           ║    id     ║          ║    id     ║
//!             ╟───────────╢           ╟───────────╢          ╟───────────╢
//!             ║ element T ║           ║ element T ║          ║ element T ║
//!             ╚═══════════╝           ╚═══════════╝          ╚═══════════╝
//!                Node 0                  Node 1 ↑               Node n-1
//!                                               │
//!                                             cursor
//! ```
//! - `front` is the root of ownership, and every `next` link owns the node it
//!   points to (solid arrows);
//! - `prev` links and the `cursor` only observe nodes (dotted arrows);
//! - every node carries a [`NodeId`], a handle that names it for
//!   [`LinkedQueue::remove_node`].
//!
//! # Errors
//!
//! Positional operations return a [`Result`] and never change the queue when
//! they fail. Dequeuing, peeking and reading the cursor return `None` instead,
//! because an empty queue is a normal state.
//!
//! ```
//! use linked_queue::{LinkedQueue, QueueError};
//!
//! let mut queue = LinkedQueue::new();
//! assert_eq!(queue.dequeue(), None::<u32>);
//! assert_eq!(queue.remove(0), Err(QueueError::Empty));
//!
//! queue.enqueue(7);
//! assert_eq!(
//!     queue.insert(3, 8),
//!     Err(QueueError::IndexOutOfBounds { index: 3, len: 1 })
//! );
//! assert_eq!(queue.len(), 1);
//! ```
//!
//! # Cursor
//!
//! See the [`cursor`](crate::queue::cursor) module.
//!
//! # Logging
//!
//! With the default `tracing` feature, rejected operations are reported as
//! [`tracing`] events. The feature can be disabled in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! linked_queue = { default-features = false }
//! ```
//!
//! [`tracing`]: https://docs.rs/tracing

#[doc(inline)]
pub use error::{QueueError, Result};
#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use queue::{LinkedQueue, NodeId};

pub mod queue;

mod error;
