//! Interchangeable sequence containers with explicit ownership models.
//!
//! This crate provides three implementations of one ordered, indexable
//! sequence contract. They differ only in how they own their storage, so
//! code written against the [`Sequence`] trait runs unchanged on any of
//! them.
//!
//! # Design Philosophy
//!
//! Every container defect class a sequence can have — leaks, double frees,
//! dangling cursors, destruction cycles — is an ownership question. Each
//! implementation answers it differently, and the answer is visible in the
//! types:
//!
//! ```text
//! DynArray<T>    - one raw buffer, owned by the container
//! SinglyList<T>  - Box per node: the owning edge IS the forward link
//! DoublyList<T>  - arena owns every node; links are indices, never owners
//! ```
//!
//! The doubly-linked case is where a naive design goes wrong: if both link
//! directions owned their target, every adjacent pair would form a cycle a
//! reference-counted design can never reclaim. Here the arena is the only
//! owner, so a backward index can go stale without keeping anything alive,
//! and the mutation paths repair both directions before returning.
//!
//! # Quick Start
//!
//! ```
//! use uniseq::{DoublyList, DynArray, Sequence, SinglyList};
//!
//! fn middle_insert<S: Sequence<u64> + Default>() -> Vec<u64> {
//!     let mut seq = S::default();
//!     for i in 0..4 {
//!         seq.push_back(i);
//!     }
//!     seq.insert(seq.len() / 2, 99).unwrap();
//!     seq.iter().copied().collect()
//! }
//!
//! // Same call sites, any container.
//! assert_eq!(middle_insert::<DynArray<u64>>(), vec![0, 1, 99, 2, 3]);
//! assert_eq!(middle_insert::<SinglyList<u64>>(), vec![0, 1, 99, 2, 3]);
//! assert_eq!(middle_insert::<DoublyList<u64>>(), vec![0, 1, 99, 2, 3]);
//! ```
//!
//! # Containers
//!
//! | Container | Backing | `get(i)` | insert/remove at `i` | append |
//! |-----------|---------|----------|----------------------|--------|
//! | [`DynArray`] | contiguous buffer, doubling growth | O(1) | O(n) shift | amortized O(1) |
//! | [`SinglyList`] | `Box`-owned chain | O(i) | O(i) relink | O(n) walk |
//! | [`DoublyList`] | slab arena, index links | O(min(i, n-i)) | O(min(i, n-i)) relink | O(1) |
//!
//! # Contract
//!
//! - `insert(index, value)` accepts `index == len()` (append-at-end) and
//!   returns the rejected value inside [`IndexOutOfRange`] past that.
//! - `remove(index)` requires `index < len()` and returns the element.
//! - Bounds are checked before any mutation: a failed call leaves the
//!   container exactly as it was.
//! - `Clone` is a deep copy; no storage is shared with the source. For
//!   `DynArray` the clone's buffer matches the source's capacity.
//! - Moves follow Rust semantics; `mem::take` leaves the source in the
//!   empty default state.
//! - Iterators borrow the container, so mutation during iteration is
//!   rejected at compile time rather than being a runtime hazard.
//!
//! # Display
//!
//! All containers implement `Display` (elements space separated) and the
//! contract's `display()` prints that plus a trailing newline:
//!
//! ```
//! use uniseq::DynArray;
//!
//! let arr: DynArray<u64> = (0..4).collect();
//! assert_eq!(arr.to_string(), "0 1 2 3");
//! ```

#![warn(missing_docs)]

pub mod array;
pub mod doubly;
pub mod error;
pub mod seq;
pub mod singly;

pub use array::DynArray;
pub use doubly::DoublyList;
pub use error::IndexOutOfRange;
pub use seq::Sequence;
pub use singly::SinglyList;
