/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Counter Example
//!
//! Demonstrates `AtomicRef` and `AtomicView` as thread-safe counters over
//! ordinary memory.

use prism3_atomic_ops::atomic::{
    atomic_fetch_update,
    atomic_load,
    AcqRel,
    Acquire,
    AtomicRef,
    AtomicView,
    MaxOp,
};
use std::thread;

fn main() {
    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic proxy operations
    println!("1. Basic Proxy Operations:");
    let mut value = 0i32;
    let mut counter = AtomicRef::new(&mut value);
    println!("   Initial value: {}", counter.load());

    counter.increment();
    println!("   After increment: {}", counter.load());

    counter += 5;
    println!("   After adding 5: {}", counter.load());

    counter.decrement();
    println!("   After decrement: {}", counter.load());

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let num_threads = 10;
    let increments_per_thread = 1000;
    let mut hits = 0u64;
    let counter = AtomicRef::new(&mut hits);
    thread::scope(|s| {
        for i in 0..num_threads {
            s.spawn(move || {
                for _ in 0..increments_per_thread {
                    counter.inc();
                }
                println!("   Thread {} completed", i);
            });
        }
    });
    println!(
        "   Final count: {} (expected: {})",
        hits,
        num_threads * increments_per_thread
    );

    // Example 3: Compare-and-swap
    println!("\n3. Compare-and-Swap:");
    let mut value = 10i32;
    let counter = AtomicRef::new(&mut value);
    for desired in [20, 30] {
        match counter.compare_exchange(10, desired) {
            Ok(_) => println!("   CAS succeeded: value is now {}", counter.load()),
            Err(actual) => println!("   CAS failed: actual value was {}", actual),
        }
    }

    // Example 4: Functional updates and named operations
    println!("\n4. Functional Updates:");
    let mut value = 5i32;
    let old = unsafe { atomic_fetch_update(&mut value, |x| x * 2, AcqRel) };
    println!(
        "   After doubling - old: {}, new: {}",
        old,
        unsafe { atomic_load(&mut value, Acquire) }
    );
    let counter = AtomicRef::new(&mut value);
    let peak = counter.apply_fetch::<MaxOp, _>(42);
    println!("   After max with 42 - new: {}", peak);

    // Example 5: Per-bucket counters over a buffer
    println!("\n5. Histogram over a Buffer:");
    let mut buckets = [0u32; 4];
    let view = AtomicView::new(&mut buckets);
    thread::scope(|s| {
        for t in 0..8usize {
            let view = &view;
            s.spawn(move || {
                for i in 0..100 {
                    view.at((t + i) % 4).inc();
                }
            });
        }
    });
    println!("   Buckets: {:?}", buckets);

    println!("\n=== Example completed ===");
}
