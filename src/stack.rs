use parking_lot::Mutex;
use std::fmt;
use tracing::trace;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

struct Inner<T> {
    top: Link<T>,
    size: usize,
}

/// A LIFO stack which can be shared between threads. Similar to
/// `Mutex<Vec<T>>`, except that the elements are kept in a singly linked
/// chain of nodes, so pushing never has to reallocate the whole buffer.
///
/// Every operation takes the lock for its entire duration, which makes
/// each call atomic with respect to every other call on the same stack.
///
/// # Examples
///
/// ```
/// use syncstack::Stack;
///
/// let stack = Stack::new();
/// stack.push(77);
/// stack.push(66);
///
/// assert_eq!(stack.peek(), Some(66));
/// assert_eq!(stack.pop(), Some(66));
/// assert_eq!(stack.pop(), Some(77));
/// assert_eq!(stack.pop(), None);
/// assert!(stack.is_empty());
/// ```
pub struct Stack<T> {
    inner: Mutex<Inner<T>>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack.
    pub fn new() -> Stack<T> {
        Stack {
            inner: Mutex::new(Inner { top: None, size: 0 }),
        }
    }

    /// Returns `true` if the stack has no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().size == 0
    }

    /// Returns the number of elements on the stack.
    pub fn size(&self) -> usize {
        self.inner.lock().size
    }

    /// Pushes an element onto the top of the stack.
    pub fn push(&self, value: T) {
        // allocate before taking the lock.
        let mut node = Box::new(Node { value, next: None });

        let size = {
            let mut inner = self.inner.lock();
            node.next = inner.top.take();
            inner.top = Some(node);
            inner.size += 1;
            inner.size
        };

        trace!(size, "pushed onto stack");
    }

    /// Removes the top element of the stack and returns it, or
    /// `None` if the stack is empty.
    pub fn pop(&self) -> Option<T> {
        let (node, size) = {
            let mut inner = self.inner.lock();
            let mut node = inner.top.take()?;
            inner.top = node.next.take();
            inner.size -= 1;
            (node, inner.size)
        };

        trace!(size, "popped from stack");
        Some(node.value)
    }
}

impl<T: Clone> Stack<T> {
    /// Returns a copy of the top element without removing it, or `None`
    /// if the stack is empty.
    pub fn peek(&self) -> Option<T> {
        self.inner
            .lock()
            .top
            .as_ref()
            .map(|node| node.value.clone())
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("size", &self.size()).finish()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        // Unlink one node at a time. Letting the top `Box` drop on its own
        // would recurse once per node and can overflow on long chains.
        let mut link = self.inner.get_mut().top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
