/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! A non-owning proxy bound to one value that performs every access
//! atomically at `Relaxed` order, so that plain operator syntax on shared
//! data stays free of data races.
//!
//! # Author
//!
//! Haixing Hu

use std::cmp::Ordering as CmpOrdering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    Add,
    AddAssign,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Div,
    DivAssign,
    Mul,
    MulAssign,
    Not,
    Rem,
    RemAssign,
    Shl,
    ShlAssign,
    Shr,
    ShrAssign,
    Sub,
    SubAssign,
};
use std::ptr::NonNull;

use crate::atomic::dispatch::{
    required_alignment,
    AtomicValue,
};
use crate::atomic::fetch_ops::{
    atomic_add_fetch,
    atomic_and_fetch,
    atomic_decrement,
    atomic_div_fetch,
    atomic_fetch_add,
    atomic_fetch_sub,
    atomic_increment,
    atomic_lshift_fetch,
    atomic_mod_fetch,
    atomic_mul_fetch,
    atomic_or_fetch,
    atomic_rshift_fetch,
    atomic_sub_fetch,
    atomic_xor_fetch,
};
use crate::atomic::memory_order::{
    MemoryOrder,
    Relaxed,
};
use crate::atomic::operation::{
    AddOp,
    Additive,
    AndOp,
    DivOp,
    LShiftOp,
    ModOp,
    MulOp,
    Operation,
    OrOp,
    RShiftOp,
    SubOp,
    XorOp,
};
use crate::atomic::primitives::{
    atomic_compare_exchange,
    atomic_exchange,
    atomic_load,
    atomic_store,
};

/// Atomic proxy for a single value of type `T`.
///
/// An `AtomicRef` holds only the address of its target. Copying it copies
/// the binding, so any number of proxies (in any number of threads) may
/// refer to the same value. Every operation, including the operators, is
/// a single atomic step with `Relaxed` ordering; use the free functions in
/// [`crate::atomic`] when a stronger order is needed.
///
/// The binary operators (`+`, `*`, `<<`, ...) do not modify the target:
/// they load the current value and compute the result from it.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::AtomicRef;
/// use std::thread;
///
/// let mut hits = 0u32;
/// let counter = AtomicRef::new(&mut hits);
/// thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(move || {
///             let mut counter = counter;
///             for _ in 0..1000 {
///                 counter += 1;
///             }
///         });
///     }
/// });
/// assert_eq!(counter.load(), 4000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRef<'a, T: AtomicValue> {
    ptr: NonNull<T>,
    _marker: PhantomData<&'a mut T>,
}

// Every access through the proxy is atomic.
unsafe impl<T: AtomicValue + Send> Send for AtomicRef<'_, T> {}
unsafe impl<T: AtomicValue + Send> Sync for AtomicRef<'_, T> {}

impl<T: AtomicValue> Clone for AtomicRef<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: AtomicValue> Copy for AtomicRef<'_, T> {}

impl<'a, T: AtomicValue> AtomicRef<'a, T> {
    /// Binds a proxy to `target`.
    ///
    /// The exclusive borrow guarantees that nothing accesses the value
    /// non-atomically while proxies exist.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not aligned to
    /// [`required_alignment::<T>()`](required_alignment). This can only
    /// happen for 8-byte integers on targets where they are 4-byte aligned.
    #[inline]
    pub fn new(target: &'a mut T) -> Self {
        let ptr = NonNull::from(target);
        assert!(
            ptr.as_ptr() as usize % required_alignment::<T>() == 0,
            "atomic target at {:p} is not aligned to {} bytes",
            ptr,
            required_alignment::<T>()
        );
        Self {
            ptr,
            _marker: PhantomData,
        }
    }

    /// Binds a proxy to a raw target.
    ///
    /// # Safety
    ///
    /// `ptr` must satisfy the atomic target contract of
    /// [`crate::atomic::primitives`] for the whole lifetime `'a`.
    #[inline]
    pub unsafe fn from_ptr(ptr: *mut T) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            _marker: PhantomData,
        }
    }

    /// Returns the bound address.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Loads the current value.
    #[inline]
    pub fn load(&self) -> T {
        unsafe { atomic_load(self.as_ptr(), Relaxed) }
    }

    /// Stores `value` and returns it, like an assignment expression.
    #[inline]
    pub fn store(&self, value: T) -> T {
        unsafe { atomic_store(self.as_ptr(), value, Relaxed) };
        value
    }

    /// Replaces the value, returning the previous one.
    #[inline]
    pub fn exchange(&self, value: T) -> T {
        unsafe { atomic_exchange(self.as_ptr(), value, Relaxed) }
    }

    /// Stores `new` if the value equals `current`.
    ///
    /// # Returns
    ///
    /// `Ok(previous)` on success, or `Err(actual)` with the value found.
    #[inline]
    pub fn compare_exchange(&self, current: T, new: T) -> Result<T, T> {
        let mut expected = current;
        if unsafe { atomic_compare_exchange(self.as_ptr(), &mut expected, new, Relaxed, Relaxed) }
        {
            Ok(current)
        } else {
            Err(expected)
        }
    }

    /// Applies `Op` atomically and returns the value before it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_ops::atomic::{AtomicRef, MaxOp};
    ///
    /// let mut peak = 5i32;
    /// let peak = AtomicRef::new(&mut peak);
    /// assert_eq!(peak.fetch_apply::<MaxOp, _>(9), 5);
    /// assert_eq!(peak.load(), 9);
    /// ```
    #[inline]
    pub fn fetch_apply<Op, V>(&self, operand: V) -> T
    where
        Op: Operation<T, V>,
        V: Copy,
    {
        unsafe { Op::fetch_apply(self.as_ptr(), operand, Relaxed::ORDERING) }
    }

    /// Applies `Op` atomically and returns the value after it.
    #[inline]
    pub fn apply_fetch<Op, V>(&self, operand: V) -> T
    where
        Op: Operation<T, V>,
        V: Copy,
    {
        unsafe { Op::apply_fetch(self.as_ptr(), operand, Relaxed::ORDERING) }
    }
}

impl<T: Additive> AtomicRef<'_, T> {
    /// Pre-increment: adds one and returns the new value.
    #[inline]
    pub fn increment(&self) -> T {
        unsafe { atomic_add_fetch(self.as_ptr(), T::ONE, Relaxed) }
    }

    /// Pre-decrement: subtracts one and returns the new value.
    #[inline]
    pub fn decrement(&self) -> T {
        unsafe { atomic_sub_fetch(self.as_ptr(), T::ONE, Relaxed) }
    }

    /// Post-increment: adds one and returns the previous value.
    #[inline]
    pub fn post_increment(&self) -> T {
        unsafe { atomic_fetch_add(self.as_ptr(), T::ONE, Relaxed) }
    }

    /// Post-decrement: subtracts one and returns the previous value.
    #[inline]
    pub fn post_decrement(&self) -> T {
        unsafe { atomic_fetch_sub(self.as_ptr(), T::ONE, Relaxed) }
    }

    /// Adds one, discarding the result.
    #[inline]
    pub fn inc(&self) {
        unsafe { atomic_increment(self.as_ptr(), Relaxed) }
    }

    /// Subtracts one, discarding the result.
    #[inline]
    pub fn dec(&self) {
        unsafe { atomic_decrement(self.as_ptr(), Relaxed) }
    }
}

macro_rules! define_op_fetch_methods {
    ($($(#[$doc:meta])* $method:ident => $function:ident, $op:ident, $operand:ty;)+) => {
        impl<T: AtomicValue> AtomicRef<'_, T> {$(
            $(#[$doc])*
            #[inline]
            pub fn $method(&self, operand: $operand) -> T
            where
                $op: Operation<T, $operand>,
            {
                unsafe { $function(self.as_ptr(), operand, Relaxed) }
            }
        )+}
    };
}

define_op_fetch_methods! {
    /// `*self += operand`, returning the new value.
    add_fetch => atomic_add_fetch, AddOp, T;
    /// `*self -= operand`, returning the new value.
    sub_fetch => atomic_sub_fetch, SubOp, T;
    /// `*self *= operand`, returning the new value.
    mul_fetch => atomic_mul_fetch, MulOp, T;
    /// `*self /= operand`, returning the new value.
    div_fetch => atomic_div_fetch, DivOp, T;
    /// `*self %= operand`, returning the new value.
    mod_fetch => atomic_mod_fetch, ModOp, T;
    /// `*self &= operand`, returning the new value.
    and_fetch => atomic_and_fetch, AndOp, T;
    /// `*self |= operand`, returning the new value.
    or_fetch => atomic_or_fetch, OrOp, T;
    /// `*self ^= operand`, returning the new value.
    xor_fetch => atomic_xor_fetch, XorOp, T;
    /// `*self <<= amount`, returning the new value.
    shl_fetch => atomic_lshift_fetch, LShiftOp, u32;
    /// `*self >>= amount`, returning the new value.
    shr_fetch => atomic_rshift_fetch, RShiftOp, u32;
}

macro_rules! impl_ref_operators {
    ($($assign_trait:ident::$assign_fn:ident, $binary_trait:ident::$binary_fn:ident
        => $op:ident, $operand:ty;)+) => {$(
        impl<T: AtomicValue> $assign_trait<$operand> for AtomicRef<'_, T>
        where
            $op: Operation<T, $operand>,
        {
            #[inline]
            fn $assign_fn(&mut self, operand: $operand) {
                unsafe { $op::fetch_apply(self.as_ptr(), operand, Relaxed::ORDERING) };
            }
        }

        impl<T: AtomicValue> $binary_trait<$operand> for AtomicRef<'_, T>
        where
            $op: Operation<T, $operand>,
        {
            type Output = T;

            #[inline]
            fn $binary_fn(self, operand: $operand) -> T {
                $op::apply(self.load(), operand)
            }
        }
    )+};
}

impl_ref_operators! {
    AddAssign::add_assign, Add::add => AddOp, T;
    SubAssign::sub_assign, Sub::sub => SubOp, T;
    MulAssign::mul_assign, Mul::mul => MulOp, T;
    DivAssign::div_assign, Div::div => DivOp, T;
    RemAssign::rem_assign, Rem::rem => ModOp, T;
    BitAndAssign::bitand_assign, BitAnd::bitand => AndOp, T;
    BitOrAssign::bitor_assign, BitOr::bitor => OrOp, T;
    BitXorAssign::bitxor_assign, BitXor::bitxor => XorOp, T;
    ShlAssign::shl_assign, Shl::shl => LShiftOp, u32;
    ShrAssign::shr_assign, Shr::shr => RShiftOp, u32;
}

impl<T> Not for AtomicRef<'_, T>
where
    T: AtomicValue + Not<Output = T>,
{
    type Output = T;

    #[inline]
    fn not(self) -> T {
        !self.load()
    }
}

impl<T: AtomicValue + PartialEq> PartialEq<T> for AtomicRef<'_, T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.load() == *other
    }
}

impl<T: AtomicValue + PartialOrd> PartialOrd<T> for AtomicRef<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<CmpOrdering> {
        self.load().partial_cmp(other)
    }
}

impl<T: AtomicValue + fmt::Debug> fmt::Debug for AtomicRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicRef").field(&self.load()).finish()
    }
}
