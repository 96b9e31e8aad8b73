/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Legacy Calling Convention Example
//!
//! Demonstrates the ordering-free legacy functions over `VolatilePtr`.

use prism3_atomic_ops::atomic::legacy::{
    atomic_compare_exchange,
    atomic_compare_exchange_strong,
    atomic_fetch_add,
    atomic_increment,
    atomic_max_fetch,
    memory_fence,
    volatile_load,
    VolatilePtr,
};
use std::thread;

fn main() {
    println!("=== Legacy Calling Convention Example ===\n");

    // Example 1: Fetch operations with implied ordering
    println!("1. Fetch Operations:");
    let mut value = 10i64;
    let ptr = VolatilePtr::new(&mut value as *mut i64);
    unsafe {
        let old = atomic_fetch_add(ptr, 5);
        println!("   fetch_add(5) - old: {}, new: {}", old, volatile_load(ptr));
        let new = atomic_max_fetch(ptr, 100);
        println!("   max_fetch(100) - new: {}", new);
    }

    // Example 2: Compare-exchange forms
    println!("\n2. Compare-Exchange:");
    unsafe {
        let previous = atomic_compare_exchange(ptr, 100, 7);
        println!(
            "   compare_exchange(100, 7) - previous: {}, swapped: {}",
            previous,
            previous == 100
        );
        let swapped = atomic_compare_exchange_strong(ptr, 100, 8);
        println!("   compare_exchange_strong(100, 8) - swapped: {}", swapped);
    }

    // Example 3: Shared counter
    println!("\n3. Multi-threaded Increment:");
    let mut counter = 0u32;
    let addr = &mut counter as *mut u32 as usize;
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(move || {
                let ptr = VolatilePtr::new(addr as *mut u32);
                for _ in 0..250 {
                    unsafe { atomic_increment(ptr) };
                }
            });
        }
    });
    memory_fence();
    println!("   Final count: {} (expected: 1000)", counter);

    println!("\n=== Example completed ===");
}
