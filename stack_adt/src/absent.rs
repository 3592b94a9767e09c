//!
//! Stack operations over a handle that may be absent.
//!
//! An absent stack reads as an empty one: it counts zero items, has no top,
//! pops and finds nothing, and prints nothing.
//!

use core::alloc::Allocator;

use crate::item_handler::{Comparator, Printer};
use crate::stack_linked_list::StackLinkedList;

pub fn count<T, A: Allocator + Clone>(stack: Option<&StackLinkedList<T, A>>) -> usize {
    stack.map_or(0, StackLinkedList::count)
}

pub fn is_empty<T, A: Allocator + Clone>(stack: Option<&StackLinkedList<T, A>>) -> bool {
    stack.map_or(true, StackLinkedList::is_empty)
}

pub fn top<'a, T, A: Allocator + Clone>(stack: Option<&'a StackLinkedList<T, A>>) -> Option<&'a T> {
    stack.and_then(StackLinkedList::top)
}

pub fn pop<T, A: Allocator + Clone>(stack: Option<&mut StackLinkedList<T, A>>) -> Option<T> {
    stack.and_then(StackLinkedList::pop)
}

pub fn print<T, A: Allocator + Clone, P: Printer<T> + ?Sized>(
    stack: Option<&StackLinkedList<T, A>>,
    printer: &mut P,
) {
    if let Some(stack) = stack {
        stack.print(printer);
    }
}

pub fn search<'a, T, A: Allocator + Clone, Q: ?Sized, C: Comparator<T, Q> + ?Sized>(
    stack: Option<&'a StackLinkedList<T, A>>,
    target: &Q,
    comparator: &C,
) -> Option<&'a T> {
    stack.and_then(|stack| stack.search(target, comparator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn eq(target: &u32, candidate: &u32) -> bool {
        target == candidate
    }

    #[test]
    fn absent_stack_reads_as_empty() {
        let mut printed = Vec::new();

        assert_eq!(count::<u32, _>(None::<&StackLinkedList<u32>>), 0);
        assert!(is_empty(None::<&StackLinkedList<u32>>));
        assert_eq!(top(None::<&StackLinkedList<u32>>), None);
        assert_eq!(pop(None::<&mut StackLinkedList<u32>>), None);
        assert_eq!(search(None::<&StackLinkedList<u32>>, &1, &eq), None);
        print(None::<&StackLinkedList<u32>>, &mut |item: &u32| printed.push(*item));

        assert!(printed.is_empty());
    }

    #[test]
    fn present_stack_is_forwarded() {
        let mut stack = StackLinkedList::new();
        stack.push(1u32).unwrap();
        stack.push(2u32).unwrap();

        let mut printed = Vec::new();
        print(Some(&stack), &mut |item: &u32| printed.push(*item));

        assert_eq!(printed, [2, 1]);
        assert_eq!(count(Some(&stack)), 2);
        assert!(!is_empty(Some(&stack)));
        assert_eq!(top(Some(&stack)), Some(&2));
        assert_eq!(search(Some(&stack), &1, &eq), Some(&1));
        assert_eq!(pop(Some(&mut stack)), Some(2));
        assert_eq!(count(Some(&stack)), 1);
    }
}
