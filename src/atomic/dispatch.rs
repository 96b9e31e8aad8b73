/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Primitive Dispatch
//!
//! Decides, per value type and at compile time, how the four primitive
//! operations (load, store, exchange, compare-exchange) reach the
//! hardware.
//!
//! - [`Explicit`]: pointers, `bool` and integers up to
//!   [`MAX_ATOMIC_INTEGER_SIZE`] bytes map 1:1 onto the matching
//!   `std::sync::atomic` type.
//! - [`Generic`]: any other `Copy` type without padding bytes. The whole
//!   object is moved and compared as raw bytes. Objects of 1, 2, 4 or 8
//!   bytes whose alignment is at least their size go through the
//!   same-sized unsigned integer atomic and stay lock-free; larger or
//!   under-aligned objects are serialized by an address-keyed lock that
//!   is held only for the duration of one call.
//!
//! # Author
//!
//! Haixing Hu

use std::mem;
use std::sync::atomic::Ordering;
use std::sync::atomic::{
    AtomicBool,
    AtomicI16,
    AtomicI32,
    AtomicI8,
    AtomicIsize,
    AtomicPtr,
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

use zerocopy::AsBytes;

use crate::atomic::lock_table;

/// Widest integer, in bytes, that the explicit path maps onto a hardware
/// atomic instruction.
///
/// Stable Rust exposes no 16-byte atomic integer, so `i128` and `u128`
/// always take the generic path.
#[cfg(target_has_atomic = "64")]
pub const MAX_ATOMIC_INTEGER_SIZE: usize = 8;

/// Widest integer, in bytes, that the explicit path maps onto a hardware
/// atomic instruction.
#[cfg(not(target_has_atomic = "64"))]
pub const MAX_ATOMIC_INTEGER_SIZE: usize = 4;

/// A value type usable as the target of the atomic primitives.
///
/// The associated `Path` selects how the primitives reach the hardware.
/// The crate implements this trait for `bool`, every integer type, `f32`,
/// `f64` and raw pointers. Other types opt in through the generic path,
/// which requires `zerocopy::AsBytes` so that the object has no padding
/// and can be copied and compared byte by byte.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{AtomicValue, Generic};
/// use zerocopy::AsBytes;
///
/// #[derive(Debug, Clone, Copy, PartialEq, AsBytes)]
/// #[repr(C)]
/// struct Extent {
///     lower: u64,
///     upper: u64,
/// }
///
/// impl AtomicValue for Extent {
///     type Path = Generic;
/// }
/// ```
///
/// # Author
///
/// Haixing Hu
pub trait AtomicValue: Copy {
    /// The dispatch path used for this type.
    type Path: AtomicPath<Self>;
}

/// The four primitive operations, implemented once per dispatch path.
///
/// All methods take a raw target and share the same safety contract.
///
/// # Safety
///
/// For every method, `ptr` must be non-null, aligned to
/// [`required_alignment::<T>()`](required_alignment), valid for reads and
/// writes, and must not be accessed non-atomically while the call is in
/// progress. The orderings must be legal for the operation; the public
/// functions in [`crate::atomic`] enforce this at compile time.
pub trait AtomicPath<T: Copy> {
    /// Whether this is the hardware-instruction path.
    const IS_EXPLICIT: bool;

    /// Whether operations on `T` never take the internal address lock.
    const IS_LOCK_FREE: bool;

    /// Atomically loads `*ptr`.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn load(ptr: *mut T, order: Ordering) -> T;

    /// Atomically stores `value` into `*ptr`.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn store(ptr: *mut T, value: T, order: Ordering);

    /// Atomically replaces `*ptr` with `value`, returning the old value.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn exchange(ptr: *mut T, value: T, order: Ordering) -> T;

    /// Stores `new` if `*ptr` equals `current`. Never fails spuriously.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` otherwise.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn compare_exchange(
        ptr: *mut T,
        current: T,
        new: T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<T, T>;

    /// Like [`compare_exchange`](AtomicPath::compare_exchange) but may fail
    /// spuriously; intended for retry loops.
    ///
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn compare_exchange_weak(
        ptr: *mut T,
        current: T,
        new: T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<T, T>;
}

/// Hardware path: one `std::sync::atomic` instruction per primitive.
#[derive(Debug, Clone, Copy)]
pub enum Explicit {}

/// Whole-object path for any padding-free `Copy` type.
#[derive(Debug, Clone, Copy)]
pub enum Generic {}

macro_rules! impl_explicit_path {
    ($($value_type:ty => $atomic_type:ty),+ $(,)?) => {$(
        impl AtomicPath<$value_type> for Explicit {
            const IS_EXPLICIT: bool = true;
            const IS_LOCK_FREE: bool = true;

            #[inline(always)]
            unsafe fn load(ptr: *mut $value_type, order: Ordering) -> $value_type {
                unsafe { <$atomic_type>::from_ptr(ptr) }.load(order)
            }

            #[inline(always)]
            unsafe fn store(ptr: *mut $value_type, value: $value_type, order: Ordering) {
                unsafe { <$atomic_type>::from_ptr(ptr) }.store(value, order);
            }

            #[inline(always)]
            unsafe fn exchange(
                ptr: *mut $value_type,
                value: $value_type,
                order: Ordering,
            ) -> $value_type {
                unsafe { <$atomic_type>::from_ptr(ptr) }.swap(value, order)
            }

            #[inline(always)]
            unsafe fn compare_exchange(
                ptr: *mut $value_type,
                current: $value_type,
                new: $value_type,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$value_type, $value_type> {
                unsafe { <$atomic_type>::from_ptr(ptr) }
                    .compare_exchange(current, new, success, failure)
            }

            #[inline(always)]
            unsafe fn compare_exchange_weak(
                ptr: *mut $value_type,
                current: $value_type,
                new: $value_type,
                success: Ordering,
                failure: Ordering,
            ) -> Result<$value_type, $value_type> {
                unsafe { <$atomic_type>::from_ptr(ptr) }
                    .compare_exchange_weak(current, new, success, failure)
            }
        }

        impl AtomicValue for $value_type {
            type Path = Explicit;
        }
    )+};
}

impl_explicit_path!(
    bool => AtomicBool,
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
impl_explicit_path!(
    i64 => AtomicI64,
    u64 => AtomicU64,
);

macro_rules! impl_generic_value {
    ($($value_type:ty),+ $(,)?) => {$(
        impl AtomicValue for $value_type {
            type Path = Generic;
        }
    )+};
}

impl_generic_value!(i128, u128, f32, f64);

#[cfg(not(target_has_atomic = "64"))]
impl_generic_value!(i64, u64);

impl<P> AtomicPath<*mut P> for Explicit {
    const IS_EXPLICIT: bool = true;
    const IS_LOCK_FREE: bool = true;

    #[inline(always)]
    unsafe fn load(ptr: *mut *mut P, order: Ordering) -> *mut P {
        unsafe { AtomicPtr::from_ptr(ptr) }.load(order)
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut *mut P, value: *mut P, order: Ordering) {
        unsafe { AtomicPtr::from_ptr(ptr) }.store(value, order);
    }

    #[inline(always)]
    unsafe fn exchange(ptr: *mut *mut P, value: *mut P, order: Ordering) -> *mut P {
        unsafe { AtomicPtr::from_ptr(ptr) }.swap(value, order)
    }

    #[inline(always)]
    unsafe fn compare_exchange(
        ptr: *mut *mut P,
        current: *mut P,
        new: *mut P,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*mut P, *mut P> {
        unsafe { AtomicPtr::from_ptr(ptr) }.compare_exchange(current, new, success, failure)
    }

    #[inline(always)]
    unsafe fn compare_exchange_weak(
        ptr: *mut *mut P,
        current: *mut P,
        new: *mut P,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*mut P, *mut P> {
        unsafe { AtomicPtr::from_ptr(ptr) }.compare_exchange_weak(current, new, success, failure)
    }
}

impl<P> AtomicValue for *mut P {
    type Path = Explicit;
}

// `*const P` shares the representation of `*mut P`; only the constness of
// the pointee differs.
impl<P> AtomicPath<*const P> for Explicit {
    const IS_EXPLICIT: bool = true;
    const IS_LOCK_FREE: bool = true;

    #[inline(always)]
    unsafe fn load(ptr: *mut *const P, order: Ordering) -> *const P {
        unsafe { <Explicit as AtomicPath<*mut P>>::load(ptr.cast(), order) }
    }

    #[inline(always)]
    unsafe fn store(ptr: *mut *const P, value: *const P, order: Ordering) {
        unsafe { <Explicit as AtomicPath<*mut P>>::store(ptr.cast(), value.cast_mut(), order) }
    }

    #[inline(always)]
    unsafe fn exchange(ptr: *mut *const P, value: *const P, order: Ordering) -> *const P {
        unsafe { <Explicit as AtomicPath<*mut P>>::exchange(ptr.cast(), value.cast_mut(), order) }
    }

    #[inline(always)]
    unsafe fn compare_exchange(
        ptr: *mut *const P,
        current: *const P,
        new: *const P,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*const P, *const P> {
        unsafe {
            <Explicit as AtomicPath<*mut P>>::compare_exchange(
                ptr.cast(),
                current.cast_mut(),
                new.cast_mut(),
                success,
                failure,
            )
        }
        .map(<*mut P>::cast_const)
        .map_err(<*mut P>::cast_const)
    }

    #[inline(always)]
    unsafe fn compare_exchange_weak(
        ptr: *mut *const P,
        current: *const P,
        new: *const P,
        success: Ordering,
        failure: Ordering,
    ) -> Result<*const P, *const P> {
        unsafe {
            <Explicit as AtomicPath<*mut P>>::compare_exchange_weak(
                ptr.cast(),
                current.cast_mut(),
                new.cast_mut(),
                success,
                failure,
            )
        }
        .map(<*mut P>::cast_const)
        .map_err(<*mut P>::cast_const)
    }
}

impl<P> AtomicValue for *const P {
    type Path = Explicit;
}

/// Size of the unsigned integer atomic that can carry `T` whole, or `0`
/// when `T` needs the address lock.
const fn word_size<T>() -> usize {
    let size = mem::size_of::<T>();
    let has_word = match size {
        1 | 2 | 4 => true,
        8 => cfg!(target_has_atomic = "64"),
        _ => false,
    };
    if has_word && mem::align_of::<T>() >= size {
        size
    } else {
        0
    }
}

#[inline(always)]
unsafe fn to_word<T: Copy, W: Copy>(value: T) -> W {
    // Sizes match and `T: AsBytes` has no uninitialized bytes.
    unsafe { mem::transmute_copy::<T, W>(&value) }
}

#[inline(always)]
unsafe fn from_word<W: Copy, T: Copy>(bits: W) -> T {
    // The bits were last written as a `T`.
    unsafe { mem::transmute_copy::<W, T>(&bits) }
}

#[inline(always)]
unsafe fn word_load<T: Copy, W: Copy>(ptr: *mut T, order: Ordering) -> T
where
    Explicit: AtomicPath<W>,
{
    unsafe { from_word(<Explicit as AtomicPath<W>>::load(ptr.cast::<W>(), order)) }
}

#[inline(always)]
unsafe fn word_store<T: Copy, W: Copy>(ptr: *mut T, value: T, order: Ordering)
where
    Explicit: AtomicPath<W>,
{
    unsafe { <Explicit as AtomicPath<W>>::store(ptr.cast::<W>(), to_word(value), order) }
}

#[inline(always)]
unsafe fn word_exchange<T: Copy, W: Copy>(ptr: *mut T, value: T, order: Ordering) -> T
where
    Explicit: AtomicPath<W>,
{
    unsafe {
        from_word(<Explicit as AtomicPath<W>>::exchange(
            ptr.cast::<W>(),
            to_word(value),
            order,
        ))
    }
}

#[inline(always)]
unsafe fn word_compare_exchange<T: Copy, W: Copy>(
    ptr: *mut T,
    current: T,
    new: T,
    success: Ordering,
    failure: Ordering,
    weak: bool,
) -> Result<T, T>
where
    Explicit: AtomicPath<W>,
{
    let ptr = ptr.cast::<W>();
    let (current, new) = unsafe { (to_word::<T, W>(current), to_word::<T, W>(new)) };
    let result = if weak {
        unsafe {
            <Explicit as AtomicPath<W>>::compare_exchange_weak(ptr, current, new, success, failure)
        }
    } else {
        unsafe { <Explicit as AtomicPath<W>>::compare_exchange(ptr, current, new, success, failure) }
    };
    match result {
        Ok(previous) => Ok(unsafe { from_word(previous) }),
        Err(actual) => Err(unsafe { from_word(actual) }),
    }
}

/// Picks the word-sized implementation for `T`, or evaluates `$locked`.
/// `word_size` is a constant, so the match folds away.
macro_rules! by_word_size {
    ($value_type:ty, $word_fn:ident($($arg:expr),*), $locked:expr) => {
        match word_size::<$value_type>() {
            1 => unsafe { $word_fn::<$value_type, u8>($($arg),*) },
            2 => unsafe { $word_fn::<$value_type, u16>($($arg),*) },
            4 => unsafe { $word_fn::<$value_type, u32>($($arg),*) },
            #[cfg(target_has_atomic = "64")]
            8 => unsafe { $word_fn::<$value_type, u64>($($arg),*) },
            _ => $locked,
        }
    };
}

impl<T: Copy + AsBytes> AtomicPath<T> for Generic {
    const IS_EXPLICIT: bool = false;
    const IS_LOCK_FREE: bool = word_size::<T>() != 0;

    #[inline]
    unsafe fn load(ptr: *mut T, order: Ordering) -> T {
        by_word_size!(T, word_load(ptr, order), unsafe {
            lock_table::load(ptr, order)
        })
    }

    #[inline]
    unsafe fn store(ptr: *mut T, value: T, order: Ordering) {
        by_word_size!(T, word_store(ptr, value, order), unsafe {
            lock_table::store(ptr, value, order)
        })
    }

    #[inline]
    unsafe fn exchange(ptr: *mut T, value: T, order: Ordering) -> T {
        by_word_size!(T, word_exchange(ptr, value, order), unsafe {
            lock_table::exchange(ptr, value, order)
        })
    }

    #[inline]
    unsafe fn compare_exchange(
        ptr: *mut T,
        current: T,
        new: T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<T, T> {
        by_word_size!(
            T,
            word_compare_exchange(ptr, current, new, success, failure, false),
            unsafe { lock_table::compare_exchange(ptr, current, new, success) }
        )
    }

    #[inline]
    unsafe fn compare_exchange_weak(
        ptr: *mut T,
        current: T,
        new: T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<T, T> {
        // The locked fallback never fails spuriously.
        by_word_size!(
            T,
            word_compare_exchange(ptr, current, new, success, failure, true),
            unsafe { lock_table::compare_exchange(ptr, current, new, success) }
        )
    }
}

/// Returns whether `T` is dispatched to the hardware-instruction path.
#[inline]
pub const fn uses_explicit_path<T: AtomicValue>() -> bool {
    <T::Path as AtomicPath<T>>::IS_EXPLICIT
}

/// Returns whether atomic operations on `T` never take the internal
/// address lock.
#[inline]
pub const fn is_lock_free<T: AtomicValue>() -> bool {
    <T::Path as AtomicPath<T>>::IS_LOCK_FREE
}

/// Returns the alignment an atomic target of type `T` must have.
///
/// Hardware atomics need natural alignment (the size of the value); the
/// generic path only needs the alignment of `T` itself.
#[inline]
pub const fn required_alignment<T: AtomicValue>() -> usize {
    if uses_explicit_path::<T>() {
        mem::size_of::<T>()
    } else {
        mem::align_of::<T>()
    }
}
