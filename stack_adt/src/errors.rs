use core::alloc::AllocError;
use core::fmt;

///
/// Errors raised by the stack.
///
/// Reading from an empty stack is not an error: `top`, `pop` and `search`
/// return `None` for it.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    /// Storage for a new node could not be obtained from the allocator.
    ResourceExhaustion,
}

impl From<AllocError> for StackError {
    fn from(_: AllocError) -> Self {
        StackError::ResourceExhaustion
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackError::ResourceExhaustion => f.write_str("out of memory: cannot allocate a stack node"),
        }
    }
}

impl core::error::Error for StackError {}

///
/// A rejected push. The stack is left unchanged and the item goes back to the caller.
///
pub struct PushError<T> {
    pub item: T,
    pub error: StackError,
}

impl<T> PushError<T> {
    pub fn into_item(self) -> T {
        self.item
    }
}

impl<T> From<PushError<T>> for StackError {
    fn from(e: PushError<T>) -> Self {
        e.error
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push rejected: {}", self.error)
    }
}

impl<T> core::error::Error for PushError<T> {}
