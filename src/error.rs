//! Internal error type.
//!
//! [`GlobalAlloc`](std::alloc::GlobalAlloc) has no room for a real error —
//! every fallible entry point collapses to a null pointer. Internally,
//! though, every fallible helper in [`crate::allocator`] returns a
//! [`Result<_, AllocError>`] so failures are distinguishable in tests and can
//! be logged precisely at the point they occur.

use thiserror::Error;

/// Why an allocator operation failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
  /// The requested size was zero or exceeded
  /// [`MAX_REQUEST_SIZE`](crate::align::MAX_REQUEST_SIZE).
  #[error("invalid allocation request of {size} bytes")]
  InvalidRequest {
    /// The rejected, pre-alignment size.
    size: usize,
  },

  /// The requested alignment is stricter than this allocator supports.
  #[error("alignment {align} exceeds the {} byte ceiling", crate::align::ALIGN)]
  UnsupportedAlignment {
    /// The rejected alignment.
    align: usize,
  },

  /// The OS refused to extend the program break.
  #[error("out of memory: the OS refused to extend the program break")]
  OutOfMemory,
}
