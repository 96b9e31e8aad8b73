/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/


//! # Pointer Arithmetic
//!
//! Atomic byte offsets on pointer-valued targets. The offset is a raw byte
//! count, never scaled by the pointee size, and the address wraps on
//! overflow. The target is only ever accessed as a pointer, so both the
//! stored and the returned pointer keep the provenance of the original.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::Ordering;

use crate::atomic::cas_loop;
use crate::atomic::dispatch::AtomicValue;
use crate::atomic::memory_order::RmwOrder;

mod sealed {
    pub trait Sealed {}

    impl<P> Sealed for *mut P {}
    impl<P> Sealed for *const P {}
}

/// Raw pointer types that can be moved atomically by a byte count.
///
/// Implemented for `*mut P` and `*const P` with sized `P`. Sealed.
pub trait AtomicPointer: AtomicValue + sealed::Sealed {
    /// `self` moved forward by `bytes`, wrapping.
    fn byte_forward(self, bytes: usize) -> Self;

    /// `self` moved back by `bytes`, wrapping.
    fn byte_backward(self, bytes: usize) -> Self;
}

impl<P> AtomicPointer for *mut P {
    #[inline]
    fn byte_forward(self, bytes: usize) -> Self {
        self.wrapping_byte_add(bytes)
    }

    #[inline]
    fn byte_backward(self, bytes: usize) -> Self {
        self.wrapping_byte_sub(bytes)
    }
}

impl<P> AtomicPointer for *const P {
    #[inline]
    fn byte_forward(self, bytes: usize) -> Self {
        self.wrapping_byte_add(bytes)
    }

    #[inline]
    fn byte_backward(self, bytes: usize) -> Self {
        self.wrapping_byte_sub(bytes)
    }
}

#[inline(always)]
unsafe fn shift<T: AtomicPointer>(
    ptr: *mut T,
    bytes: usize,
    backward: bool,
    order: Ordering,
) -> (T, T) {
    unsafe {
        cas_loop::update(
            ptr,
            |current| {
                if backward {
                    current.byte_backward(bytes)
                } else {
                    current.byte_forward(bytes)
                }
            },
            order,
        )
    }
}

/// Atomically moves the pointer at `ptr` forward by `bytes` and returns
/// the previous pointer.
///
/// # Safety
///
/// `ptr` must satisfy the atomic target contract of
/// [`crate::atomic::primitives`].
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{atomic_fetch_byte_add, Relaxed};
///
/// let buffer = [0u32; 4];
/// let mut cursor = buffer.as_ptr();
/// let old = unsafe { atomic_fetch_byte_add(&mut cursor, 4, Relaxed) };
/// assert_eq!(old, buffer.as_ptr());
/// assert_eq!(cursor, buffer[1..].as_ptr());
/// ```
#[inline]
pub unsafe fn atomic_fetch_byte_add<T: AtomicPointer, O: RmwOrder>(
    ptr: *mut T,
    bytes: usize,
    _order: O,
) -> T {
    unsafe { shift(ptr, bytes, false, O::ORDERING) }.0
}

/// Atomically moves the pointer at `ptr` forward by `bytes` and returns
/// the new pointer.
///
/// # Safety
///
/// See [`atomic_fetch_byte_add`].
#[inline]
pub unsafe fn atomic_byte_add_fetch<T: AtomicPointer, O: RmwOrder>(
    ptr: *mut T,
    bytes: usize,
    _order: O,
) -> T {
    unsafe { shift(ptr, bytes, false, O::ORDERING) }.1
}

/// Atomically moves the pointer at `ptr` back by `bytes` and returns the
/// previous pointer.
///
/// # Safety
///
/// See [`atomic_fetch_byte_add`].
#[inline]
pub unsafe fn atomic_fetch_byte_sub<T: AtomicPointer, O: RmwOrder>(
    ptr: *mut T,
    bytes: usize,
    _order: O,
) -> T {
    unsafe { shift(ptr, bytes, true, O::ORDERING) }.0
}

/// Atomically moves the pointer at `ptr` back by `bytes` and returns the
/// new pointer.
///
/// # Safety
///
/// See [`atomic_fetch_byte_add`].
#[inline]
pub unsafe fn atomic_byte_sub_fetch<T: AtomicPointer, O: RmwOrder>(
    ptr: *mut T,
    bytes: usize,
    _order: O,
) -> T {
    unsafe { shift(ptr, bytes, true, O::ORDERING) }.1
}
