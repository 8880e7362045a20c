//! The single primitive through which this allocator ever touches the
//! operating system: extending the program break.
//!
//! Everything above this module works in terms of `*mut u8` pointers into
//! one contiguous, monotonically-growing region; nothing above this module
//! is allowed to call into `libc` directly.

use libc::{c_void, intptr_t, sbrk};
use tracing::trace;

use crate::error::AllocError;

/// Extends the program break by `delta` bytes (which may be negative, though
/// this allocator never shrinks it, or zero to simply read the current
/// break) and returns the break *before* the extension.
///
/// On failure the break is left untouched and [`AllocError::OutOfMemory`] is
/// returned.
pub fn extend(delta: isize) -> Result<*mut u8, AllocError> {
  // Safety: `sbrk` has no preconditions beyond single-threaded use, which is
  // this whole crate's contract.
  let previous = unsafe { sbrk(delta as intptr_t) };

  if previous == usize::MAX as *mut c_void {
    trace!(delta, "sbrk failed");
    return Err(AllocError::OutOfMemory);
  }

  trace!(delta, previous = ?previous, "sbrk succeeded");
  Ok(previous as *mut u8)
}

/// Reads the current program break without moving it.
pub fn current_break() -> Result<*mut u8, AllocError> {
  extend(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_delta_reads_without_moving() {
    let before = current_break().unwrap();
    let after = current_break().unwrap();
    assert_eq!(before, after);
  }

  #[test]
  fn positive_delta_moves_break_forward() {
    let before = current_break().unwrap();
    let returned = extend(64).unwrap();
    let after = current_break().unwrap();

    assert_eq!(returned, before);
    assert_eq!(after as usize, before as usize + 64);
  }
}
