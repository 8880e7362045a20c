//! # brkalloc - A single-threaded, `sbrk`-backed first-fit allocator
//!
//! This crate provides a drop-in [`GlobalAlloc`](std::alloc::GlobalAlloc)
//! implementation that manages memory as one contiguous, monotonically
//! growing arena obtained from the OS via `sbrk(2)`.
//!
//! ## Overview
//!
//! Unlike a bump allocator, which never reclaims space, this allocator keeps
//! an in-band, address-ordered, doubly-linked list of block descriptors
//! threaded through the arena itself:
//!
//! ```text
//!   Arena layout:
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         HEAP MEMORY                                  │
//!   │                                                                      │
//!   │   ┌───┬─────┬───┬─────────┬───┬─────┬───┬───────────────────────┐    │
//!   │   │ D │  A  │ D │ (free)  │ D │  B  │ D │      wilderness       │    │
//!   │   └───┴─────┴───┴─────────┴───┴─────┴───┴───────────────────────┘    │
//!   │                                                         ▲            │
//!   │                                                    Program Break     │
//!   └──────────────────────────────────────────────────────────────────────┘
//!
//!   D = block descriptor (metadata), immediately preceding its payload.
//! ```
//!
//! Freeing a block never shrinks the break; instead the block is marked
//! free and becomes eligible for first-fit reuse, splitting, and coalescing
//! with its neighbors on both sides.
//!
//! ## Crate Structure
//!
//! ```text
//!   brkalloc
//!   ├── align      - alignment macro and size-policy constants
//!   ├── arena      - the sole `sbrk` touchpoint
//!   ├── block      - the descriptor type and its raw linked-list operations
//!   ├── error      - internal error type
//!   └── allocator  - placement, split, coalesce, resize, GlobalAlloc impl
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use brkalloc::HeapAllocator;
//!
//! #[global_allocator]
//! static ALLOCATOR: HeapAllocator = HeapAllocator::new();
//!
//! fn main() {
//!     let v: Vec<u32> = vec![1, 2, 3];
//!     println!("{:?}", v);
//!     println!("free blocks: {}", ALLOCATOR.count_free_blocks());
//! }
//! ```
//!
//! ## How It Works
//!
//! Allocation walks the descriptor list first-fit; if nothing free is large
//! enough, the wilderness block (the rightmost block, if free) is extended
//! in place, or a new block is appended past the current break. Freeing
//! coalesces with both neighbors before relinking. Resizing prefers, in
//! order: shrinking in place via split, growing the wilderness in place,
//! donation from a free right neighbor, and finally copy-and-free.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: `Sync` is asserted, not enforced; callers
//!   sharing one [`HeapAllocator`] across real OS threads without external
//!   synchronization will race.
//! - **4-byte alignment ceiling**: requests needing a stricter alignment are
//!   rejected outright.
//! - **Never returns memory to the OS**: the program break only grows.
//!
//! ## Safety
//!
//! This crate is inherently unsafe as it deals with raw memory management
//! and a `sbrk`-extended arena shared with the rest of the process. All
//! public entry points are safe to call; the `unsafe` lives entirely inside
//! [`allocator`].

pub mod align;
mod arena;
mod block;
mod error;
mod allocator;

pub use allocator::HeapAllocator;
pub use error::AllocError;
