/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic View
//!
//! Atomic access to an ordinary buffer: the view borrows the slice
//! exclusively and hands out a fresh [`AtomicRef`] for every element
//! access, so many threads can update the same buffer concurrently.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::atomic::atomic_ref::AtomicRef;
use crate::atomic::dispatch::{
    required_alignment,
    AtomicValue,
};

/// Atomic view over a slice.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::AtomicView;
/// use std::thread;
///
/// let mut histogram = [0u64; 4];
/// let view = AtomicView::new(&mut histogram);
/// thread::scope(|s| {
///     for t in 0..8u64 {
///         let view = &view;
///         s.spawn(move || view.at((t % 4) as usize).inc());
///     }
/// });
/// assert_eq!(histogram, [2, 2, 2, 2]);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicView<'a, T: AtomicValue> {
    ptr: NonNull<T>,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: AtomicValue + Send> Send for AtomicView<'_, T> {}
unsafe impl<T: AtomicValue + Send> Sync for AtomicView<'_, T> {}

impl<'a, T: AtomicValue> AtomicView<'a, T> {
    /// Creates a view over `data`.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty slice is not aligned to
    /// [`required_alignment::<T>()`](required_alignment).
    pub fn new(data: &'a mut [T]) -> Self {
        let len = data.len();
        let ptr = NonNull::from(data).cast::<T>();
        assert!(
            len == 0 || ptr.as_ptr() as usize % required_alignment::<T>() == 0,
            "atomic view at {:p} is not aligned to {} bytes",
            ptr,
            required_alignment::<T>()
        );
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a proxy for element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn at(&self, index: usize) -> AtomicRef<'_, T> {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }

    /// Returns a proxy for element `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<AtomicRef<'_, T>> {
        if index < self.len {
            // In bounds, and every element shares the base alignment.
            Some(unsafe { AtomicRef::from_ptr(self.ptr.as_ptr().add(index)) })
        } else {
            None
        }
    }

    /// Iterates over proxies for all elements.
    pub fn iter(&self) -> impl Iterator<Item = AtomicRef<'_, T>> + '_ {
        (0..self.len).map(move |index| self.at(index))
    }

    /// Base address of the viewed buffer.
    #[inline]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T: AtomicValue + fmt::Debug> fmt::Debug for AtomicView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|element| element.load()))
            .finish()
    }
}
