//!
//! Capabilities a caller hands to the stack so that it can dispose of, render
//! and compare items it otherwise treats as opaque.
//!
//! Every trait has a blanket implementation for the matching closure shape,
//! so ad-hoc callbacks need no named type.
//!

///
/// Disposes of one item. Called at most once per item, and only for items the
/// stack still owns when it is cleared or destroyed.
///
pub trait Destructor<T> {
    fn destroy(&mut self, item: T);
}

///
/// Renders one item. Must not assume it is called a fixed number of times.
///
pub trait Printer<T> {
    fn print(&mut self, item: &T);
}

///
/// Equality judgement used by search. The argument order is fixed:
/// the search target first, the stored candidate second.
///
/// Implementations must be free of side effects.
///
pub trait Comparator<T, Q: ?Sized = T> {
    fn matches(&self, target: &Q, candidate: &T) -> bool;
}

impl<T, F: FnMut(T)> Destructor<T> for F {
    #[inline(always)]
    fn destroy(&mut self, item: T) {
        self(item)
    }
}

impl<T, F: FnMut(&T)> Printer<T> for F {
    #[inline(always)]
    fn print(&mut self, item: &T) {
        self(item)
    }
}

impl<T, Q: ?Sized, F: Fn(&Q, &T) -> bool> Comparator<T, Q> for F {
    #[inline(always)]
    fn matches(&self, target: &Q, candidate: &T) -> bool {
        self(target, candidate)
    }
}

/// Destructor that simply drops the item.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropItem;

impl<T> Destructor<T> for DropItem {
    #[inline(always)]
    fn destroy(&mut self, item: T) {
        drop(item)
    }
}

///
/// Lifts a handler for `T` to nullable items (`Option<T>`).
///
/// `None` items are never passed to the inner handler: they are not
/// destroyed, not printed, and never match a search target.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct SkipNone<H>(pub H);

impl<H> SkipNone<H> {
    pub fn into_inner(self) -> H {
        self.0
    }
}

impl<T, H: Destructor<T>> Destructor<Option<T>> for SkipNone<H> {
    fn destroy(&mut self, item: Option<T>) {
        if let Some(item) = item {
            self.0.destroy(item);
        }
    }
}

impl<T, H: Printer<T>> Printer<Option<T>> for SkipNone<H> {
    fn print(&mut self, item: &Option<T>) {
        if let Some(item) = item {
            self.0.print(item);
        }
    }
}

impl<T, Q: ?Sized, H: Comparator<T, Q>> Comparator<Option<T>, Q> for SkipNone<H> {
    fn matches(&self, target: &Q, candidate: &Option<T>) -> bool {
        match candidate {
            Some(candidate) => self.0.matches(target, candidate),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn skip_none_destroys_only_present_items() {
        let mut destroyed = Vec::new();
        let mut destructor = SkipNone(|item: u32| destroyed.push(item));

        destructor.destroy(Some(1));
        destructor.destroy(None);
        destructor.destroy(Some(3));

        assert_eq!(destroyed, vec![1, 3]);
    }

    #[test]
    fn skip_none_never_matches_absent_candidate() {
        let comparator = SkipNone(|target: &u32, candidate: &u32| target == candidate);

        assert!(comparator.matches(&7, &Some(7)));
        assert!(!comparator.matches(&7, &Some(8)));
        assert!(!comparator.matches(&7, &None));
    }

    #[test]
    fn skip_none_prints_only_present_items() {
        let mut seen = Vec::new();
        {
            let mut printer = SkipNone(|item: &u32| seen.push(*item));
            printer.print(&None);
            printer.print(&Some(5));
        }
        assert_eq!(seen, vec![5]);
    }
}
