/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fetch Operations
//!
//! The public read-modify-write catalog. Every operation comes in two
//! forms: `atomic_fetch_<op>` returns the value before the update and
//! `atomic_<op>_fetch` the value after it. For the caller's own call,
//! `atomic_<op>_fetch(p, v) == op(atomic_fetch_<op>(p, v), v)`.
//!
//! # Safety
//!
//! All functions share the atomic target contract of
//! [`crate::atomic::primitives`].
//!
//! # Example
//!
//! ```rust
//! use prism3_atomic_ops::atomic::{atomic_fetch_max, atomic_mul_fetch, AcqRel, Relaxed};
//!
//! let mut value = 3i64;
//! unsafe {
//!     assert_eq!(atomic_fetch_max(&mut value, 10, AcqRel), 3);
//!     assert_eq!(atomic_mul_fetch(&mut value, 4, Relaxed), 40);
//! }
//! ```
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::cas_loop;
use crate::atomic::dispatch::AtomicValue;
use crate::atomic::memory_order::RmwOrder;
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
    NandOp,
    Operation,
    OrOp,
    RShiftOp,
    SubOp,
    XorOp,
};

macro_rules! define_fetch_op {
    ($fetch_name:ident, $op_fetch_name:ident, $op:ident, $operand:ty, $formula:literal) => {
        #[doc = concat!("Atomically replaces `*ptr` with `", $formula, "` and returns the previous value.")]
        ///
        /// # Safety
        ///
        /// See the [module documentation](self).
        #[inline]
        pub unsafe fn $fetch_name<T, O>(ptr: *mut T, operand: $operand, _order: O) -> T
        where
            T: AtomicValue,
            O: RmwOrder,
            $op: Operation<T, $operand>,
        {
            unsafe { <$op as Operation<T, $operand>>::fetch_apply(ptr, operand, O::ORDERING) }
        }

        #[doc = concat!("Atomically replaces `*ptr` with `", $formula, "` and returns the new value.")]
        ///
        /// # Safety
        ///
        /// See the [module documentation](self).
        #[inline]
        pub unsafe fn $op_fetch_name<T, O>(ptr: *mut T, operand: $operand, _order: O) -> T
        where
            T: AtomicValue,
            O: RmwOrder,
            $op: Operation<T, $operand>,
        {
            unsafe { <$op as Operation<T, $operand>>::apply_fetch(ptr, operand, O::ORDERING) }
        }
    };
}

define_fetch_op!(atomic_fetch_add, atomic_add_fetch, AddOp, T, "*ptr + operand");
define_fetch_op!(atomic_fetch_sub, atomic_sub_fetch, SubOp, T, "*ptr - operand");
define_fetch_op!(atomic_fetch_mul, atomic_mul_fetch, MulOp, T, "*ptr * operand");
define_fetch_op!(atomic_fetch_div, atomic_div_fetch, DivOp, T, "*ptr / operand");
define_fetch_op!(atomic_fetch_mod, atomic_mod_fetch, ModOp, T, "*ptr % operand");
define_fetch_op!(atomic_fetch_and, atomic_and_fetch, AndOp, T, "*ptr & operand");
define_fetch_op!(atomic_fetch_or, atomic_or_fetch, OrOp, T, "*ptr | operand");
define_fetch_op!(atomic_fetch_xor, atomic_xor_fetch, XorOp, T, "*ptr ^ operand");
define_fetch_op!(atomic_fetch_nand, atomic_nand_fetch, NandOp, T, "!(*ptr & operand)");
define_fetch_op!(atomic_fetch_min, atomic_min_fetch, MinOp, T, "min(*ptr, operand)");
define_fetch_op!(atomic_fetch_max, atomic_max_fetch, MaxOp, T, "max(*ptr, operand)");
define_fetch_op!(atomic_fetch_lshift, atomic_lshift_fetch, LShiftOp, u32, "*ptr << operand");
define_fetch_op!(atomic_fetch_rshift, atomic_rshift_fetch, RShiftOp, u32, "*ptr >> operand");

/// Atomically adds `operand` to `*ptr`, discarding the result.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_add<T: Additive, O: RmwOrder>(ptr: *mut T, operand: T, _order: O) {
    unsafe { T::fetch_add_raw(ptr, operand, O::ORDERING) };
}

/// Atomically subtracts `operand` from `*ptr`, discarding the result.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_sub<T: Additive, O: RmwOrder>(ptr: *mut T, operand: T, _order: O) {
    unsafe { T::fetch_sub_raw(ptr, operand, O::ORDERING) };
}

/// Atomically ands `operand` into `*ptr`, discarding the result.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_and<T, O>(ptr: *mut T, operand: T, _order: O)
where
    T: Bitwise,
    O: RmwOrder,
{
    unsafe { T::fetch_and_raw(ptr, operand, O::ORDERING) };
}

/// Atomically ors `operand` into `*ptr`, discarding the result.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_or<T, O>(ptr: *mut T, operand: T, _order: O)
where
    T: Bitwise,
    O: RmwOrder,
{
    unsafe { T::fetch_or_raw(ptr, operand, O::ORDERING) };
}

/// Atomically adds [`Additive::ONE`] to `*ptr`.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_increment<T: Additive, O: RmwOrder>(ptr: *mut T, _order: O) {
    unsafe { T::fetch_add_raw(ptr, T::ONE, O::ORDERING) };
}

/// Atomically subtracts [`Additive::ONE`] from `*ptr`.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_decrement<T: Additive, O: RmwOrder>(ptr: *mut T, _order: O) {
    unsafe { T::fetch_sub_raw(ptr, T::ONE, O::ORDERING) };
}

/// Atomically replaces `*ptr` with `f(*ptr)` and returns the previous
/// value.
///
/// `f` runs inside the compare-and-swap loop and may be called more than
/// once; it must not have side effects.
///
/// # Parameters
///
/// * `ptr` - The atomic target.
/// * `f` - Computes the new value from the current one.
/// * `_order` - Order of the successful exchange.
///
/// # Returns
///
/// The value that `f` was last applied to.
///
/// # Safety
///
/// See the [module documentation](self).
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{atomic_fetch_update, AcqRel};
///
/// let mut value = 7u32;
/// let old = unsafe { atomic_fetch_update(&mut value, |x| x.saturating_sub(10), AcqRel) };
/// assert_eq!((old, value), (7, 0));
/// ```
#[inline]
pub unsafe fn atomic_fetch_update<T, F, O>(ptr: *mut T, f: F, _order: O) -> T
where
    T: AtomicValue,
    F: FnMut(T) -> T,
    O: RmwOrder,
{
    unsafe { cas_loop::update(ptr, f, O::ORDERING) }.0
}

/// Atomically replaces `*ptr` with `f(*ptr)` and returns the new value.
///
/// # Safety
///
/// See the [module documentation](self).
#[inline]
pub unsafe fn atomic_update_fetch<T, F, O>(ptr: *mut T, f: F, _order: O) -> T
where
    T: AtomicValue,
    F: FnMut(T) -> T,
    O: RmwOrder,
{
    unsafe { cas_loop::update(ptr, f, O::ORDERING) }.1
}
