/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-ops
//!
//! Memory-order checked atomic read-modify-write primitives.
//!
//! Every operation works on a caller-owned target and takes its memory
//! order as a zero-sized marker value (`Relaxed`, `Acquire`, `Release`,
//! `AcqRel`, `SeqCst`). Orders that make no sense for an operation, such as
//! a `Release` load, are rejected at compile time.
//!
//! ## Design Goals
//!
//! - **Checked Orders**: Illegal memory orders are compile errors
//! - **Any Payload**: Integers, floats, pointers and padding-free structs
//! - **Hardware First**: Native instructions wherever the platform has them
//! - **Zero Cost**: Orders and dispatch are resolved at compile time
//!
//! ## Features
//!
//! - Primitives: `atomic_load`, `atomic_store`, `atomic_exchange`,
//!   `atomic_compare_exchange[_weak]`, `atomic_thread_fence`
//! - Catalog: `atomic_fetch_<op>` and `atomic_<op>_fetch` for add, sub, mul,
//!   div, mod, and, or, xor, nand, min, max, lshift, rshift
//! - Proxies: `AtomicRef` and `AtomicView` with operator syntax
//! - Legacy calling convention without ordering arguments (`legacy`
//!   feature)
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_ops::{atomic_fetch_add, atomic_load, AcqRel, Acquire};
//! use std::thread;
//!
//! let mut counter = 0u64;
//! let target = &mut counter as *mut u64 as usize;
//!
//! thread::scope(|s| {
//!     for _ in 0..10 {
//!         s.spawn(move || {
//!             for _ in 0..100 {
//!                 unsafe { atomic_fetch_add(target as *mut u64, 1, AcqRel) };
//!             }
//!         });
//!     }
//! });
//!
//! assert_eq!(unsafe { atomic_load(target as *mut u64, Acquire) }, 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export the everyday surface
pub use atomic::{
    atomic_compare_exchange,
    atomic_compare_exchange_weak,
    atomic_exchange,
    atomic_fetch_add,
    atomic_fetch_sub,
    atomic_fetch_update,
    atomic_load,
    atomic_store,
    atomic_thread_fence,
    AcqRel,
    Acquire,
    AtomicRef,
    AtomicValue,
    AtomicView,
    Generic,
    Operation,
    Relaxed,
    Release,
    SeqCst,
};
