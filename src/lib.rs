//! A generic LIFO stack that is safe to share between threads.
//!
//! [`Stack`] keeps its elements in a singly linked list guarded by a
//! single `parking_lot` mutex, and exposes the usual operations:
//! [`push`](Stack::push), [`pop`](Stack::pop), [`peek`](Stack::peek),
//! [`size`](Stack::size) and [`is_empty`](Stack::is_empty).
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use syncstack::Stack;
//!
//! let stack = Arc::new(Stack::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|x| {
//!         let stack = Arc::clone(&stack);
//!         thread::spawn(move || stack.push(x))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(stack.size(), 4);
//! ```

pub mod stack;

pub use stack::Stack;
