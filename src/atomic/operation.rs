/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Operation Catalog
//!
//! The named read-modify-write operations and the value capabilities they
//! need.
//!
//! Each operation is a zero-sized descriptor implementing [`Operation`]
//! with a pure `apply(current, operand)`. Whether the update is done by a
//! single hardware instruction or by the compare-and-swap loop is decided
//! by the value type: the capability traits ([`Additive`], [`Bitwise`])
//! carry `*_raw` hooks that default to the loop and are overridden with
//! `fetch_add`, `fetch_and`, ... for integers on the explicit path.
//!
//! | Descriptor   | Capability       | Hardware hook for        |
//! |--------------|------------------|--------------------------|
//! | [`AddOp`]    | [`Additive`]     | explicit integers        |
//! | [`SubOp`]    | [`Additive`]     | explicit integers        |
//! | [`MulOp`]    | [`Multiplicative`] | never                  |
//! | [`DivOp`]    | [`Multiplicative`] | never                  |
//! | [`ModOp`]    | [`Multiplicative`] | never                  |
//! | [`AndOp`]    | [`Bitwise`]      | explicit integers, bool  |
//! | [`OrOp`]     | [`Bitwise`]      | explicit integers, bool  |
//! | [`XorOp`]    | [`Bitwise`]      | explicit integers, bool  |
//! | [`NandOp`]   | [`Bitwise`]      | explicit integers, bool  |
//! | [`LShiftOp`] | [`Shift`]        | never                    |
//! | [`RShiftOp`] | [`Shift`]        | never                    |
//! | [`MinOp`]    | `PartialOrd`     | never                    |
//! | [`MaxOp`]    | `PartialOrd`     | never                    |
//!
//! Integer arithmetic wraps. Division or remainder by zero and shift
//! amounts of at least the bit width are passed straight to Rust
//! arithmetic.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::Ordering;
use std::sync::atomic::{
    AtomicBool,
    AtomicI16,
    AtomicI32,
    AtomicI8,
    AtomicIsize,
    AtomicU16,
    AtomicU32,
    AtomicU8,
    AtomicUsize,
};
#[cfg(target_has_atomic = "64")]
use std::sync::atomic::{
    AtomicI64,
    AtomicU64,
};

use crate::atomic::cas_loop;
use crate::atomic::dispatch::AtomicValue;

/// A named read-modify-write operation on values of type `T` with an
/// operand of type `V`.
///
/// Implementors only need [`apply`](Operation::apply); the two atomic
/// forms default to the compare-and-swap loop.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::Operation;
///
/// /// Saturating add.
/// struct SatAdd;
///
/// impl Operation<u8> for SatAdd {
///     fn apply(current: u8, operand: u8) -> u8 {
///         current.saturating_add(operand)
///     }
/// }
/// ```
///
/// # Author
///
/// Haixing Hu
pub trait Operation<T: AtomicValue, V: Copy = T>: Sized {
    /// Computes the value that replaces `current`. Must be pure: the
    /// compare-and-swap loop may call it more than once.
    fn apply(current: T, operand: V) -> T;

    /// Atomically applies the operation and returns the value before it.
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy the atomic target contract of
    /// [`crate::atomic::primitives`].
    #[inline]
    unsafe fn fetch_apply(ptr: *mut T, operand: V, order: Ordering) -> T {
        unsafe { cas_loop::fetch_op::<T, V, Self>(ptr, operand, order) }
    }

    /// Atomically applies the operation and returns the value after it.
    ///
    /// # Safety
    ///
    /// Same as [`fetch_apply`](Operation::fetch_apply).
    #[inline]
    unsafe fn apply_fetch(ptr: *mut T, operand: V, order: Ordering) -> T {
        unsafe { cas_loop::op_fetch::<T, V, Self>(ptr, operand, order) }
    }
}

/// Values supporting addition and subtraction.
pub trait Additive: AtomicValue {
    /// The unit used by increment and decrement.
    const ONE: Self;

    /// `self + rhs`.
    fn add_value(self, rhs: Self) -> Self;

    /// `self - rhs`.
    fn sub_value(self, rhs: Self) -> Self;

    /// Atomic fetch-add. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy the atomic target contract of
    /// [`crate::atomic::primitives`].
    #[inline]
    unsafe fn fetch_add_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.add_value(operand), order) }.0
    }

    /// Atomic fetch-sub. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// Same as [`fetch_add_raw`](Additive::fetch_add_raw).
    #[inline]
    unsafe fn fetch_sub_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.sub_value(operand), order) }.0
    }
}

/// Values supporting multiplication, division and remainder.
pub trait Multiplicative: AtomicValue {
    /// `self * rhs`.
    fn mul_value(self, rhs: Self) -> Self;

    /// `self / rhs`.
    fn div_value(self, rhs: Self) -> Self;

    /// `self % rhs`.
    fn rem_value(self, rhs: Self) -> Self;
}

/// Values supporting bitwise logic.
pub trait Bitwise: AtomicValue {
    /// `self & rhs`.
    fn and_value(self, rhs: Self) -> Self;

    /// `self | rhs`.
    fn or_value(self, rhs: Self) -> Self;

    /// `self ^ rhs`.
    fn xor_value(self, rhs: Self) -> Self;

    /// `!(self & rhs)`.
    fn nand_value(self, rhs: Self) -> Self;

    /// Atomic fetch-and. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy the atomic target contract of
    /// [`crate::atomic::primitives`].
    #[inline]
    unsafe fn fetch_and_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.and_value(operand), order) }.0
    }

    /// Atomic fetch-or. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// Same as [`fetch_and_raw`](Bitwise::fetch_and_raw).
    #[inline]
    unsafe fn fetch_or_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.or_value(operand), order) }.0
    }

    /// Atomic fetch-xor. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// Same as [`fetch_and_raw`](Bitwise::fetch_and_raw).
    #[inline]
    unsafe fn fetch_xor_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.xor_value(operand), order) }.0
    }

    /// Atomic fetch-nand. Defaults to the compare-and-swap loop.
    ///
    /// # Safety
    ///
    /// Same as [`fetch_and_raw`](Bitwise::fetch_and_raw).
    #[inline]
    unsafe fn fetch_nand_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { cas_loop::update(ptr, |current| current.nand_value(operand), order) }.0
    }
}

/// Values supporting bit shifts by a `u32` amount.
pub trait Shift: AtomicValue {
    /// `self << amount`.
    fn shl_value(self, amount: u32) -> Self;

    /// `self >> amount`.
    fn shr_value(self, amount: u32) -> Self;
}

macro_rules! impl_integer_arithmetic {
    ($value_type:ty) => {
        impl Multiplicative for $value_type {
            #[inline]
            fn mul_value(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div_value(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline]
            fn rem_value(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }
        }

        impl Shift for $value_type {
            #[inline]
            fn shl_value(self, amount: u32) -> Self {
                self << amount
            }

            #[inline]
            fn shr_value(self, amount: u32) -> Self {
                self >> amount
            }
        }
    };
}

macro_rules! impl_explicit_integer {
    ($($value_type:ty => $atomic_type:ty),+ $(,)?) => {$(
        impl Additive for $value_type {
            const ONE: Self = 1;

            #[inline]
            fn add_value(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_value(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            unsafe fn fetch_add_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_add(operand, order)
            }

            #[inline]
            unsafe fn fetch_sub_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_sub(operand, order)
            }
        }

        impl Bitwise for $value_type {
            #[inline]
            fn and_value(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn or_value(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn xor_value(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn nand_value(self, rhs: Self) -> Self {
                !(self & rhs)
            }

            #[inline]
            unsafe fn fetch_and_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_and(operand, order)
            }

            #[inline]
            unsafe fn fetch_or_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_or(operand, order)
            }

            #[inline]
            unsafe fn fetch_xor_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_xor(operand, order)
            }

            #[inline]
            unsafe fn fetch_nand_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
                unsafe { <$atomic_type>::from_ptr(ptr) }.fetch_nand(operand, order)
            }
        }

        impl_integer_arithmetic!($value_type);
    )+};
}

impl_explicit_integer!(
    i8 => AtomicI8,
    u8 => AtomicU8,
    i16 => AtomicI16,
    u16 => AtomicU16,
    i32 => AtomicI32,
    u32 => AtomicU32,
    isize => AtomicIsize,
    usize => AtomicUsize,
);

#[cfg(target_has_atomic = "64")]
impl_explicit_integer!(
    i64 => AtomicI64,
    u64 => AtomicU64,
);

// Integers without a hardware atomic keep the loop-based hooks.
macro_rules! impl_generic_integer {
    ($($value_type:ty),+ $(,)?) => {$(
        impl Additive for $value_type {
            const ONE: Self = 1;

            #[inline]
            fn add_value(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_value(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        }

        impl Bitwise for $value_type {
            #[inline]
            fn and_value(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn or_value(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn xor_value(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn nand_value(self, rhs: Self) -> Self {
                !(self & rhs)
            }
        }

        impl_integer_arithmetic!($value_type);
    )+};
}

impl_generic_integer!(i128, u128);

#[cfg(not(target_has_atomic = "64"))]
impl_generic_integer!(i64, u64);

macro_rules! impl_float {
    ($($value_type:ty),+ $(,)?) => {$(
        impl Additive for $value_type {
            const ONE: Self = 1.0;

            #[inline]
            fn add_value(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub_value(self, rhs: Self) -> Self {
                self - rhs
            }
        }

        impl Multiplicative for $value_type {
            #[inline]
            fn mul_value(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn div_value(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn rem_value(self, rhs: Self) -> Self {
                self % rhs
            }
        }
    )+};
}

impl_float!(f32, f64);

impl Bitwise for bool {
    #[inline]
    fn and_value(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline]
    fn or_value(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn xor_value(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline]
    fn nand_value(self, rhs: Self) -> Self {
        !(self & rhs)
    }

    #[inline]
    unsafe fn fetch_and_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { AtomicBool::from_ptr(ptr) }.fetch_and(operand, order)
    }

    #[inline]
    unsafe fn fetch_or_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { AtomicBool::from_ptr(ptr) }.fetch_or(operand, order)
    }

    #[inline]
    unsafe fn fetch_xor_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { AtomicBool::from_ptr(ptr) }.fetch_xor(operand, order)
    }

    #[inline]
    unsafe fn fetch_nand_raw(ptr: *mut Self, operand: Self, order: Ordering) -> Self {
        unsafe { AtomicBool::from_ptr(ptr) }.fetch_nand(operand, order)
    }
}

macro_rules! define_operation {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;
    };
}

define_operation!(
    /// `current + operand`.
    AddOp
);
define_operation!(
    /// `current - operand`.
    SubOp
);
define_operation!(
    /// `current * operand`.
    MulOp
);
define_operation!(
    /// `current / operand`.
    DivOp
);
define_operation!(
    /// `current % operand`.
    ModOp
);
define_operation!(
    /// `current & operand`.
    AndOp
);
define_operation!(
    /// `current | operand`.
    OrOp
);
define_operation!(
    /// `current ^ operand`.
    XorOp
);
define_operation!(
    /// `!(current & operand)`.
    NandOp
);
define_operation!(
    /// `current << operand`.
    LShiftOp
);
define_operation!(
    /// `current >> operand`.
    RShiftOp
);
define_operation!(
    /// The smaller of `current` and `operand`; keeps `current` on ties.
    MinOp
);
define_operation!(
    /// The larger of `current` and `operand`; keeps `current` on ties.
    MaxOp
);

// Operations whose atomic forms go through a value-type hook.
macro_rules! impl_hooked_operation {
    ($op:ident: $capability:ident, $apply:ident, $hook:ident) => {
        impl<T: $capability> Operation<T> for $op {
            #[inline]
            fn apply(current: T, operand: T) -> T {
                current.$apply(operand)
            }

            #[inline]
            unsafe fn fetch_apply(ptr: *mut T, operand: T, order: Ordering) -> T {
                unsafe { T::$hook(ptr, operand, order) }
            }

            #[inline]
            unsafe fn apply_fetch(ptr: *mut T, operand: T, order: Ordering) -> T {
                unsafe { T::$hook(ptr, operand, order) }.$apply(operand)
            }
        }
    };
}

impl_hooked_operation!(AddOp: Additive, add_value, fetch_add_raw);
impl_hooked_operation!(SubOp: Additive, sub_value, fetch_sub_raw);
impl_hooked_operation!(AndOp: Bitwise, and_value, fetch_and_raw);
impl_hooked_operation!(OrOp: Bitwise, or_value, fetch_or_raw);
impl_hooked_operation!(XorOp: Bitwise, xor_value, fetch_xor_raw);
impl_hooked_operation!(NandOp: Bitwise, nand_value, fetch_nand_raw);

impl<T: Multiplicative> Operation<T> for MulOp {
    #[inline]
    fn apply(current: T, operand: T) -> T {
        current.mul_value(operand)
    }
}

impl<T: Multiplicative> Operation<T> for DivOp {
    #[inline]
    fn apply(current: T, operand: T) -> T {
        current.div_value(operand)
    }
}

impl<T: Multiplicative> Operation<T> for ModOp {
    #[inline]
    fn apply(current: T, operand: T) -> T {
        current.rem_value(operand)
    }
}

impl<T: Shift> Operation<T, u32> for LShiftOp {
    #[inline]
    fn apply(current: T, operand: u32) -> T {
        current.shl_value(operand)
    }
}

impl<T: Shift> Operation<T, u32> for RShiftOp {
    #[inline]
    fn apply(current: T, operand: u32) -> T {
        current.shr_value(operand)
    }
}

impl<T: AtomicValue + PartialOrd> Operation<T> for MinOp {
    #[inline]
    fn apply(current: T, operand: T) -> T {
        if operand < current {
            operand
        } else {
            current
        }
    }
}

impl<T: AtomicValue + PartialOrd> Operation<T> for MaxOp {
    #[inline]
    fn apply(current: T, operand: T) -> T {
        if operand > current {
            operand
        } else {
            current
        }
    }
}
