use std::{alloc::Layout, io::Read, ptr};

use brkalloc::HeapAllocator;
use libc::sbrk;

#[global_allocator]
static ALLOCATOR: HeapAllocator = HeapAllocator::new();

/// Waits until the user presses ENTER.
/// Useful when you want to inspect memory state with tools like `pmap`,
/// `htop`, `gdb`, or just visually track how the allocations change the
/// program break.
fn block_until_enter_pressed() {
  println!("\n>>> Press ENTER to continue...");
  let _ = std::io::stdin().bytes().next();
}

/// Prints the current program break using `sbrk(0)`.
unsafe fn print_program_break(label: &str) {
  println!(
    "[{}] PID = {}, program break (sbrk(0)) = {:?}",
    label,
    std::process::id(),
    unsafe { sbrk(0) },
  );
}

fn print_counters() {
  println!(
    "    blocks: {} total ({} free), bytes: {} total ({} free), metadata: {} bytes",
    ALLOCATOR.count_all_blocks(),
    ALLOCATOR.count_free_blocks(),
    ALLOCATOR.sum_all_bytes(),
    ALLOCATOR.sum_free_bytes(),
    ALLOCATOR.metadata_bytes_total(),
  );
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  unsafe {
    print_program_break("start");
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 1) Allocate a u64, write through it, and show the running counters.
    // --------------------------------------------------------------------
    let layout_u64 = Layout::new::<u64>();
    let first_block = std::alloc::alloc(layout_u64) as *mut u64;
    first_block.write(0x1122334455667788);
    println!("\n[1] Allocated u64 at {:?} = 0x{:X}", first_block, first_block.read());
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 2) Allocate a 12-byte block right after it.
    // --------------------------------------------------------------------
    let layout_12 = Layout::array::<u8>(12).unwrap();
    let second_block = std::alloc::alloc(layout_12);
    ptr::write_bytes(second_block, 0xAB, 12);
    println!("\n[2] Allocated [u8; 12] at {:?}", second_block);
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 3) Free the first block; it should become free but not vanish, and
    //    nothing coalesces yet because its only neighbor is still live.
    // --------------------------------------------------------------------
    std::alloc::dealloc(first_block as *mut u8, layout_u64);
    println!("\n[3] Freed the u64 block");
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 4) Allocate something small enough to reuse the freed block via
    //    first-fit instead of growing the break.
    // --------------------------------------------------------------------
    print_program_break("before reuse alloc");
    let layout_small = Layout::array::<u8>(4).unwrap();
    let third_block = std::alloc::alloc(layout_small);
    println!(
      "\n[4] Allocated [u8; 4] at {:?} (reused freed block? {})",
      third_block,
      third_block as usize == first_block as usize
    );
    print_program_break("after reuse alloc");
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 5) Grow the second block in place via realloc, then shrink it back.
    // --------------------------------------------------------------------
    let grown = std::alloc::realloc(second_block, layout_12, 256);
    println!("\n[5] Grew the 12-byte block to 256 bytes at {:?}", grown);
    print_counters();
    let shrunk = std::alloc::realloc(grown, Layout::array::<u8>(256).unwrap(), 16);
    println!("[5] Shrank it back down to 16 bytes at {:?}", shrunk);
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 6) Zero-allocate a small array and confirm every byte reads back 0.
    // --------------------------------------------------------------------
    let layout_zeroed = Layout::array::<u8>(32).unwrap();
    let zeroed = std::alloc::alloc_zeroed(layout_zeroed);
    let all_zero = std::slice::from_raw_parts(zeroed, 32).iter().all(|&b| b == 0);
    println!("\n[6] alloc_zeroed([u8; 32]) all zero? {all_zero}");
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 7) Allocate a large block to observe wilderness growth of the break.
    // --------------------------------------------------------------------
    print_program_break("before large alloc");
    let layout_big = Layout::array::<u8>(64 * 1024).unwrap();
    let big_block = std::alloc::alloc(layout_big);
    println!("\n[7] Allocated large 64 KiB block at {:?}", big_block);
    print_program_break("after large alloc");
    print_counters();
    block_until_enter_pressed();

    // --------------------------------------------------------------------
    // 8) Free everything still outstanding and show the final counters.
    // --------------------------------------------------------------------
    std::alloc::dealloc(third_block, layout_small);
    std::alloc::dealloc(shrunk, Layout::array::<u8>(16).unwrap());
    std::alloc::dealloc(zeroed, layout_zeroed);
    std::alloc::dealloc(big_block, layout_big);
    println!("\n[8] Freed everything. Final state:");
    print_counters();
    println!("\nEnd of demo. Process will exit and the OS will reclaim all memory.");
  }
}
