/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Compare-and-Swap Loop
//!
//! The retry loop shared by every read-modify-write operation without a
//! dedicated hardware instruction. It reads the target relaxed, computes
//! the new value, and publishes it with a weak compare-exchange at the
//! requested order, recomputing from the observed value on each failure.
//!
//! The loop is lock-free but not wait-free: a thread can retry for as long
//! as others keep winning the race.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::Ordering;

use crossbeam_utils::Backoff;

use crate::atomic::dispatch::{
    AtomicPath,
    AtomicValue,
};
use crate::atomic::operation::Operation;

/// Replaces the value at `ptr` with `f(current)` atomically.
///
/// `f` may run several times and must be free of side effects.
///
/// # Returns
///
/// `(previous, new)`: the value that was replaced and the value stored.
///
/// # Safety
///
/// `ptr` must satisfy the atomic target contract of
/// [`crate::atomic::primitives`].
#[inline]
pub(crate) unsafe fn update<T, F>(ptr: *mut T, mut f: F, order: Ordering) -> (T, T)
where
    T: AtomicValue,
    F: FnMut(T) -> T,
{
    let backoff = Backoff::new();
    let mut current = unsafe { <T::Path as AtomicPath<T>>::load(ptr, Ordering::Relaxed) };
    loop {
        let new = f(current);
        match unsafe {
            <T::Path as AtomicPath<T>>::compare_exchange_weak(
                ptr,
                current,
                new,
                order,
                Ordering::Relaxed,
            )
        } {
            Ok(_) => return (current, new),
            Err(actual) => {
                current = actual;
                backoff.spin();
            }
        }
    }
}

/// Applies `O` through the loop and returns the value before the update.
///
/// # Safety
///
/// See [`update`].
#[inline]
pub(crate) unsafe fn fetch_op<T, V, O>(ptr: *mut T, operand: V, order: Ordering) -> T
where
    T: AtomicValue,
    V: Copy,
    O: Operation<T, V>,
{
    unsafe { update(ptr, |current| O::apply(current, operand), order) }.0
}

/// Applies `O` through the loop and returns the value after the update.
///
/// # Safety
///
/// See [`update`].
#[inline]
pub(crate) unsafe fn op_fetch<T, V, O>(ptr: *mut T, operand: V, order: Ordering) -> T
where
    T: AtomicValue,
    V: Copy,
    O: Operation<T, V>,
{
    unsafe { update(ptr, |current| O::apply(current, operand), order) }.1
}
