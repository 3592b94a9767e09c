use alloc::alloc::Global;
use alloc::boxed::Box;
use core::alloc::Allocator;
use core::fmt;
use core::iter::FusedIterator;

use crate::errors::PushError;
use crate::item_handler::{Comparator, Destructor, Printer};

///
/// LIFO stack of items kept in a singly-linked chain.
///
/// The header points straight at the top node; there is no placeholder node.
/// Every node exclusively owns its successor, so the chain is always finite
/// and acyclic, and `count` always equals the number of reachable nodes.
///
/// Items are owned by the stack from `push` until they are either returned by
/// `pop` or handed to a [Destructor] by `clear`/`destroy`. Dropping the stack
/// without calling `destroy` drops the remaining items in place.
///
pub struct StackLinkedList<T, A: Allocator + Clone = Global> {
    head: Option<Box<Node<T, A>, A>>,
    count: usize,
    alloc: A,
}

struct Node<T, A: Allocator + Clone> {
    value: T,
    next: Option<Box<Node<T, A>, A>>,
}

impl<T> StackLinkedList<T, Global> {
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T> Default for StackLinkedList<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator + Clone> StackLinkedList<T, A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            count: 0,
            alloc,
        }
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of items on the stack.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn top(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    ///
    /// Places `value` on top of the stack.
    ///
    /// Node storage is requested from the allocator without aborting: if it
    /// can't be provided the stack is left as it was and the item is returned
    /// inside the error.
    ///
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        let mut slot = match Box::<Node<T, A>, A>::try_new_uninit_in(self.alloc.clone()) {
            Ok(slot) => slot,
            Err(e) => {
                log::trace!("stack push failed at count = {}", self.count);
                return Err(PushError {
                    item: value,
                    error: e.into(),
                });
            }
        };
        slot.write(Node {
            value,
            next: self.head.take(),
        });
        // Safety: the node was written just above.
        self.head = Some(unsafe { slot.assume_init() });
        self.count += 1;
        log::trace!("stack push, count = {}", self.count);

        Ok(())
    }

    /// Removes the top item and hands it to the caller.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head.take()?;
        let Node { value, next } = Box::into_inner(head);
        self.head = next;
        self.count -= 1;
        log::trace!("stack pop, count = {}", self.count);

        Some(value)
    }

    /// Iterates over the items from top to bottom.
    pub fn iter(&self) -> StackLinkedListIter<'_, T, A> {
        StackLinkedListIter {
            next: self.head.as_deref(),
            remaining: self.count,
        }
    }

    /// Visits every item from top to bottom.
    pub fn print<P: Printer<T> + ?Sized>(&self, printer: &mut P) {
        for item in self.iter() {
            printer.print(item);
        }
    }

    ///
    /// Returns the topmost item the comparator reports equal to `target`.
    /// Items below the first match are not inspected.
    ///
    pub fn search<Q: ?Sized, C: Comparator<T, Q> + ?Sized>(
        &self,
        target: &Q,
        comparator: &C,
    ) -> Option<&T> {
        let found = self
            .iter()
            .find(|candidate| comparator.matches(target, candidate));
        log::trace!("stack search, hit = {}", found.is_some());

        found
    }

    ///
    /// Removes every item, top to bottom, passing each to `destructor`.
    /// Returns the number of items destroyed.
    ///
    pub fn clear<D: Destructor<T> + ?Sized>(&mut self, destructor: &mut D) -> usize {
        let mut destroyed = 0;
        while let Some(item) = self.pop() {
            destructor.destroy(item);
            destroyed += 1;
        }

        destroyed
    }

    ///
    /// Tears the stack down. Every item still on it goes to `destructor`
    /// exactly once, top to bottom. Items popped earlier are not touched.
    ///
    pub fn destroy<D: Destructor<T> + ?Sized>(mut self, destructor: &mut D) -> usize {
        let destroyed = self.clear(destructor);
        log::trace!("stack destroyed, {} items released", destroyed);

        destroyed
    }
}

impl<T, A: Allocator + Clone> Drop for StackLinkedList<T, A> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for StackLinkedList<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct StackLinkedListIter<'a, T, A: Allocator + Clone> {
    next: Option<&'a Node<T, A>>,
    remaining: usize,
}

impl<'a, T, A: Allocator + Clone> IntoIterator for &'a StackLinkedList<T, A> {
    type Item = &'a T;

    type IntoIter = StackLinkedListIter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator + Clone> Iterator for StackLinkedListIter<'a, T, A> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Some(x) => {
                self.next = x.next.as_deref();
                self.remaining -= 1;
                Some(&x.value)
            }
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, A: Allocator + Clone> ExactSizeIterator for StackLinkedListIter<'_, T, A> {}

impl<T, A: Allocator + Clone> FusedIterator for StackLinkedListIter<'_, T, A> {}
