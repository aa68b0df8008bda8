//! Cohort provides the [`SplitTest`] struct, which assigns the current user
//! to one of several experiment groups and remembers that assignment across
//! sessions through a key-value storage backend you provide.
//!
//! Let's imagine that we are rolling out a redesigned paywall and want to
//! compare three copy variants, but only on half of our users. We build a
//! `SplitTest` named after the experiment, hand it the storage our app
//! already persists settings in, and read the user's group. The first read
//! draws a group at random and writes it to storage; every read after that
//! returns the same group, even from a freshly constructed object or after
//! an app restart. Users outside the rollout get the sentinel group `0`.
//!
//! ```
//! use cohort::{MemoryStorage, SplitTest};
//!
//! # fn main() -> Result<(), cohort::ConfigError> {
//! let storage = MemoryStorage::new();
//!
//! let test = SplitTest::with_exposure("paywall_copy", 3, &storage, 0.5)?;
//! match test.user_group() {
//!     0 => { /* user is not part of the experiment */ }
//!     1 => { /* control copy */ }
//!     2 => { /* shorter copy */ }
//!     _ => { /* benefit-led copy */ }
//! }
//!
//! // The assignment is persisted under the test's name: a fresh object
//! // backed by the same storage resolves to the same group.
//! let again = SplitTest::with_exposure("paywall_copy", 3, &storage, 0.5)?;
//! assert_eq!(test.user_group(), again.user_group());
//! # Ok(())
//! # }
//! ```
//!
//! The two-variant case is common enough to get its own entry point,
//! [`ab_test`]. For analytics, attach [`Hooks`] to a test: the started and
//! skipped handlers fire exactly once per test name, at the moment the
//! group is first resolved, and never on the memoized reads that follow.

pub mod ab;
pub mod error;
pub mod hooks;
pub mod rollout;
pub mod storage;

pub use ab::ab_test;
pub use error::ConfigError;
pub use hooks::{Hooks, Outcome};
pub use rollout::Exposure;
pub use split_test::{Builder, SplitTest};
pub use storage::{MemoryStorage, Storage};
