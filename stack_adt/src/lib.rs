#![cfg_attr(not(feature = "std"), no_std)]
#![feature(allocator_api)]
#![feature(box_into_inner)]
//!
//! Generic LIFO stack over a singly-linked chain of exclusively owned nodes.
//!
//! Items are moved into the stack on push and moved back out on pop. Whatever
//! is still on the stack when it is destroyed is handed to a caller supplied
//! [Destructor]; printing and searching are driven by [Printer] and
//! [Comparator] implementations (closures work too).
//!

extern crate alloc;

pub mod absent;
pub mod errors;
pub mod item_handler;
pub mod stack_linked_list;

pub use self::errors::*;
pub use self::item_handler::*;
pub use self::stack_linked_list::*;
