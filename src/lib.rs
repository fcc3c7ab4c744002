//! A skip list backed ordered set.
//!
//! The purpose of this crate is to provide a simple, single threaded ordered set that stays
//! balanced through randomization instead of rotations. Searching, adding and erasing a key all
//! take expected logarithmic time.
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut list = SkipList::new();
//! list.add(3);
//! list.add(6);
//!
//! assert!(list.search(&3));
//! assert!(list.erase(&3));
//! assert!(!list.search(&3));
//! ```
#![warn(
    // missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
pub mod config;
pub mod error;
pub mod key;
pub mod skiplist;

mod internal;

pub use config::{Config, DEFAULT_MAX_LEVEL};
pub use error::{Result, SkipListError};
pub use internal::skiplist::SkipList;
pub use internal::utils::{CoinFlip, GeneratesHeight, MAX_HEIGHT};
pub use key::MinValue;
pub use skiplist::OrderedSet;
