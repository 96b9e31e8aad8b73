/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Primitives
//!
//! Load, store, exchange, compare-exchange and fence on raw targets. The
//! memory order is a marker value whose type is bounded by the validity
//! trait of the operation, so an illegal order never compiles.
//!
//! # Safety
//!
//! Every function taking a `*mut T` requires the target to be non-null,
//! aligned to [`required_alignment::<T>()`](crate::atomic::required_alignment),
//! valid for reads and writes for the duration of the call, and never
//! accessed non-atomically while other threads may access it.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    fence,
    Ordering,
};

use crate::atomic::dispatch::{
    AtomicPath,
    AtomicValue,
};
use crate::atomic::memory_order::{
    CompareExchangeOrder,
    FenceOrder,
    LoadOrder,
    MemoryOrder,
    RmwOrder,
    StoreOrder,
};

/// Atomically loads the value at `ptr`.
///
/// # Parameters
///
/// * `ptr` - The atomic target.
/// * `_order` - `Relaxed`, `Acquire` or `SeqCst`.
///
/// # Returns
///
/// The current value.
///
/// # Safety
///
/// See the [module documentation](self).
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{atomic_load, Acquire};
///
/// let mut value = 42i32;
/// assert_eq!(unsafe { atomic_load(&mut value, Acquire) }, 42);
/// ```
#[inline]
pub unsafe fn atomic_load<T, O>(ptr: *mut T, _order: O) -> T
where
    T: AtomicValue,
    O: LoadOrder,
{
    unsafe { <T::Path as AtomicPath<T>>::load(ptr, O::ORDERING) }
}

/// Atomically stores `value` at `ptr`.
///
/// # Parameters
///
/// * `ptr` - The atomic target.
/// * `value` - The value to store.
/// * `_order` - `Relaxed`, `Release` or `SeqCst`.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_store<T, O>(ptr: *mut T, value: T, _order: O)
where
    T: AtomicValue,
    O: StoreOrder,
{
    unsafe { <T::Path as AtomicPath<T>>::store(ptr, value, O::ORDERING) }
}

/// Atomically replaces the value at `ptr` with `value`.
///
/// # Returns
///
/// The value held immediately before the exchange.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_exchange<T, O>(ptr: *mut T, value: T, _order: O) -> T
where
    T: AtomicValue,
    O: RmwOrder,
{
    unsafe { <T::Path as AtomicPath<T>>::exchange(ptr, value, O::ORDERING) }
}

#[inline(always)]
fn settle<T>(result: Result<T, T>, expected: &mut T) -> bool {
    match result {
        Ok(_) => true,
        Err(actual) => {
            *expected = actual;
            false
        }
    }
}

/// Strong compare-exchange: stores `desired` if the value at `ptr` equals
/// `*expected`.
///
/// Equality is `==` for the explicit path and byte equality for the
/// generic path.
///
/// # Parameters
///
/// * `ptr` - The atomic target.
/// * `expected` - The value the target must hold. Overwritten with the
///   actual value when the exchange fails.
/// * `desired` - The value to store on success.
/// * `_success` - Order of the read-modify-write on success.
/// * `_failure` - Order of the load on failure; `Relaxed` or `Acquire`, and
///   no stronger than `_success`.
///
/// # Returns
///
/// `true` if the exchange happened. Never fails spuriously.
///
/// # Safety
///
/// See the [module documentation](self).
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{atomic_compare_exchange, AcqRel, Relaxed};
///
/// let mut value = 5u64;
/// let mut expected = 4;
/// let ok = unsafe { atomic_compare_exchange(&mut value, &mut expected, 9, AcqRel, Relaxed) };
/// assert!(!ok);
/// assert_eq!(expected, 5);
/// ```
#[inline]
pub unsafe fn atomic_compare_exchange<T, S, F>(
    ptr: *mut T,
    expected: &mut T,
    desired: T,
    _success: S,
    _failure: F,
) -> bool
where
    T: AtomicValue,
    S: CompareExchangeOrder<F>,
    F: MemoryOrder,
{
    let result = unsafe {
        <T::Path as AtomicPath<T>>::compare_exchange(
            ptr,
            *expected,
            desired,
            S::ORDERING,
            F::ORDERING,
        )
    };
    settle(result, expected)
}

/// Weak compare-exchange: like [`atomic_compare_exchange`] but may fail
/// even when the values are equal. Use it inside a retry loop.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_compare_exchange_weak<T, S, F>(
    ptr: *mut T,
    expected: &mut T,
    desired: T,
    _success: S,
    _failure: F,
) -> bool
where
    T: AtomicValue,
    S: CompareExchangeOrder<F>,
    F: MemoryOrder,
{
    let result = unsafe {
        <T::Path as AtomicPath<T>>::compare_exchange_weak(
            ptr,
            *expected,
            desired,
            S::ORDERING,
            F::ORDERING,
        )
    };
    settle(result, expected)
}

/// Issues a memory fence of the given order. A `Relaxed` fence does
/// nothing.
#[inline]
pub fn atomic_thread_fence<O: FenceOrder>(_order: O) {
    if O::ORDERING != Ordering::Relaxed {
        fence(O::ORDERING);
    }
}
