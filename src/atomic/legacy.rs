/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Legacy Calling Convention
//!
//! The older interface without an ordering argument. Targets are wrapped
//! in [`VolatilePtr`], which marks call sites written against the old
//! convention; the wrapper is stripped here and every call is forwarded
//! to the ordering-aware functions with a fixed order:
//!
//! | Function                                   | Order              |
//! |--------------------------------------------|--------------------|
//! | `atomic_compare_exchange[_strong]`         | `AcqRel`/`Relaxed` |
//! | `atomic_exchange`                          | `AcqRel`           |
//! | `atomic_assign`                            | `Relaxed`          |
//! | increment, decrement, add, sub, and, or    | `AcqRel`           |
//! | every `atomic_fetch_<op>`, `atomic_<op>_fetch` | `AcqRel`       |
//! | `memory_fence` / `store_fence` / `load_fence`  | `AcqRel` / `Release` / `Acquire` |
//! | `volatile_load`                            | `Relaxed`          |
//!
//! Only available with the `legacy` feature (enabled by default).
//!
//! # Safety
//!
//! Every `unsafe fn` here requires the wrapped pointer to satisfy the
//! atomic target contract of [`crate::atomic::primitives`].
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::dispatch::AtomicValue;
use crate::atomic::fetch_ops;
use crate::atomic::memory_order::{
    AcqRel,
    Acquire,
    Relaxed,
    Release,
};
use crate::atomic::operation::{
    AddOp,
    Additive,
    AndOp,
    Bitwise,
    DivOp,
    LShiftOp,
    MaxOp,
    MinOp,
    ModOp,
    MulOp,
    Operation,
    OrOp,
    RShiftOp,
    SubOp,
    XorOp,
};
use crate::atomic::primitives;

/// A target pointer in the legacy calling convention.
///
/// Carries no semantics of its own; it only tags values handed to this
/// module so that old call sites keep compiling.
#[repr(transparent)]
pub struct VolatilePtr<T> {
    ptr: *mut T,
}

impl<T> VolatilePtr<T> {
    /// Wraps `ptr`.
    #[inline]
    pub const fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// Returns the wrapped pointer.
    #[inline]
    pub const fn as_ptr(self) -> *mut T {
        self.ptr
    }
}

impl<T> Clone for VolatilePtr<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VolatilePtr<T> {}

impl<T> fmt::Debug for VolatilePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VolatilePtr").field(&self.ptr).finish()
    }
}

impl<T> From<*mut T> for VolatilePtr<T> {
    #[inline]
    fn from(ptr: *mut T) -> Self {
        Self::new(ptr)
    }
}

/// Stores `val` if the target equals `compare`.
///
/// # Returns
///
/// The value held before the call; the exchange happened exactly when it
/// equals `compare`.
///
/// The old interface returned `val` on success and the current value on
/// failure.
/// Callers that tested `result == val` to detect success must test
/// `result == compare` instead, or use [`atomic_compare_exchange_strong`].
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_compare_exchange<T: AtomicValue>(
    ptr: VolatilePtr<T>,
    compare: T,
    val: T,
) -> T {
    let mut expected = compare;
    let exchanged = unsafe {
        primitives::atomic_compare_exchange(ptr.as_ptr(), &mut expected, val, AcqRel, Relaxed)
    };
    if exchanged {
        compare
    } else {
        expected
    }
}

/// Stores `val` if the target equals `expected`, returning whether it did.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_compare_exchange_strong<T: AtomicValue>(
    ptr: VolatilePtr<T>,
    expected: T,
    val: T,
) -> bool {
    let mut expected = expected;
    unsafe {
        primitives::atomic_compare_exchange(ptr.as_ptr(), &mut expected, val, AcqRel, Relaxed)
    }
}

/// Replaces the target with `val`, returning the previous value.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_exchange<T: AtomicValue>(ptr: VolatilePtr<T>, val: T) -> T {
    unsafe { primitives::atomic_exchange(ptr.as_ptr(), val, AcqRel) }
}

/// Stores `val` with relaxed ordering.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_assign<T: AtomicValue>(ptr: VolatilePtr<T>, val: T) {
    unsafe { primitives::atomic_store(ptr.as_ptr(), val, Relaxed) }
}

/// Adds one to the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_increment<T: Additive>(ptr: VolatilePtr<T>) {
    unsafe { fetch_ops::atomic_increment(ptr.as_ptr(), AcqRel) }
}

/// Subtracts one from the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_decrement<T: Additive>(ptr: VolatilePtr<T>) {
    unsafe { fetch_ops::atomic_decrement(ptr.as_ptr(), AcqRel) }
}

/// Adds `val` to the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_add<T: Additive>(ptr: VolatilePtr<T>, val: T) {
    unsafe { fetch_ops::atomic_add(ptr.as_ptr(), val, AcqRel) }
}

/// Subtracts `val` from the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_sub<T: Additive>(ptr: VolatilePtr<T>, val: T) {
    unsafe { fetch_ops::atomic_sub(ptr.as_ptr(), val, AcqRel) }
}

/// Ands `val` into the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_and<T: Bitwise>(ptr: VolatilePtr<T>, val: T) {
    unsafe { fetch_ops::atomic_and(ptr.as_ptr(), val, AcqRel) }
}

/// Ors `val` into the target.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_or<T: Bitwise>(ptr: VolatilePtr<T>, val: T) {
    unsafe { fetch_ops::atomic_or(ptr.as_ptr(), val, AcqRel) }
}

macro_rules! forward_legacy {
    ($($name:ident => $op:ident, $operand:ty;)+) => {$(
        #[doc = concat!("Legacy form of [`fetch_ops::", stringify!($name), "`] with `AcqRel` ordering.")]
        ///
        /// # Safety
        ///
        /// See the [module documentation](self).
        #[inline]
        pub unsafe fn $name<T>(ptr: VolatilePtr<T>, val: $operand) -> T
        where
            T: AtomicValue,
            $op: Operation<T, $operand>,
        {
            unsafe { fetch_ops::$name(ptr.as_ptr(), val, AcqRel) }
        }
    )+};
}

forward_legacy! {
    atomic_fetch_add => AddOp, T;
    atomic_fetch_sub => SubOp, T;
    atomic_fetch_max => MaxOp, T;
    atomic_fetch_min => MinOp, T;
    atomic_fetch_mul => MulOp, T;
    atomic_fetch_div => DivOp, T;
    atomic_fetch_mod => ModOp, T;
    atomic_fetch_and => AndOp, T;
    atomic_fetch_or => OrOp, T;
    atomic_fetch_xor => XorOp, T;
    atomic_fetch_lshift => LShiftOp, u32;
    atomic_fetch_rshift => RShiftOp, u32;
    atomic_max_fetch => MaxOp, T;
    atomic_min_fetch => MinOp, T;
    atomic_mul_fetch => MulOp, T;
    atomic_div_fetch => DivOp, T;
    atomic_mod_fetch => ModOp, T;
    atomic_and_fetch => AndOp, T;
    atomic_or_fetch => OrOp, T;
    atomic_xor_fetch => XorOp, T;
    atomic_lshift_fetch => LShiftOp, u32;
    atomic_rshift_fetch => RShiftOp, u32;
}

/// Full acquire-release fence.
#[inline]
pub fn memory_fence() {
    primitives::atomic_thread_fence(AcqRel);
}

/// Release fence: earlier writes are ordered before later stores.
#[inline]
pub fn store_fence() {
    primitives::atomic_thread_fence(Release);
}

/// Acquire fence: later reads are ordered after earlier loads.
#[inline]
pub fn load_fence() {
    primitives::atomic_thread_fence(Acquire);
}

/// Loads the target with relaxed ordering.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn volatile_load<T: AtomicValue>(ptr: VolatilePtr<T>) -> T {
    unsafe { primitives::atomic_load(ptr.as_ptr(), Relaxed) }
}
