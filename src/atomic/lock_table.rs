/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Address Lock Table
//!
//! Backing store for generic-path objects that no hardware atomic can
//! carry. A fixed table of cache-padded spin locks is indexed by the
//! target address; a stripe is held only for the few instructions of one
//! primitive and never across calls.
//!
//! # Author
//!
//! Haixing Hu

use std::ptr;
use std::sync::atomic::{
    fence,
    AtomicBool,
    Ordering,
};

use crossbeam_utils::{
    Backoff,
    CachePadded,
};
use zerocopy::AsBytes;

/// Number of lock stripes. Prime, so that addresses with a common stride
/// still spread across the table.
pub(crate) const STRIPE_COUNT: usize = 67;

struct Stripe {
    locked: AtomicBool,
}

struct StripeGuard<'a> {
    stripe: &'a Stripe,
}

impl Stripe {
    #[allow(clippy::declare_interior_mutable_const)]
    const UNLOCKED: CachePadded<Stripe> = CachePadded::new(Stripe {
        locked: AtomicBool::new(false),
    });

    #[inline]
    fn lock(&self) -> StripeGuard<'_> {
        let backoff = Backoff::new();
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            backoff.spin();
        }
        StripeGuard { stripe: self }
    }
}

impl Drop for StripeGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        self.stripe.locked.store(false, Ordering::Release);
    }
}

static STRIPES: [CachePadded<Stripe>; STRIPE_COUNT] = [Stripe::UNLOCKED; STRIPE_COUNT];

/// Returns the stripe index guarding `addr`.
#[inline]
pub(crate) fn stripe_index(addr: usize) -> usize {
    addr % STRIPE_COUNT
}

/// Runs `f` with the stripe for `ptr` held.
///
/// `SeqCst` requests are bracketed by sequentially consistent fences so the
/// locked path is never weaker than the requested order; every weaker order
/// is already satisfied by the lock's own acquire/release pair.
#[inline]
fn with_stripe<T, R>(ptr: *mut T, order: Ordering, f: impl FnOnce() -> R) -> R {
    let seq_cst = order == Ordering::SeqCst;
    if seq_cst {
        fence(Ordering::SeqCst);
    }
    let result = {
        let _guard = STRIPES[stripe_index(ptr as usize)].lock();
        f()
    };
    if seq_cst {
        fence(Ordering::SeqCst);
    }
    result
}

/// # Safety
///
/// `ptr` must be aligned, valid for reads, and accessed only through this
/// table while other threads may touch it.
pub(crate) unsafe fn load<T: Copy>(ptr: *mut T, order: Ordering) -> T {
    with_stripe(ptr, order, || unsafe { ptr::read(ptr) })
}

/// # Safety
///
/// Same as [`load`], plus valid for writes.
pub(crate) unsafe fn store<T: Copy>(ptr: *mut T, value: T, order: Ordering) {
    with_stripe(ptr, order, || unsafe { ptr::write(ptr, value) })
}

/// # Safety
///
/// Same as [`store`].
pub(crate) unsafe fn exchange<T: Copy>(ptr: *mut T, value: T, order: Ordering) -> T {
    with_stripe(ptr, order, || unsafe { ptr::replace(ptr, value) })
}

/// Byte-wise compare-exchange. Never fails spuriously.
///
/// # Safety
///
/// Same as [`store`].
pub(crate) unsafe fn compare_exchange<T: Copy + AsBytes>(
    ptr: *mut T,
    current: T,
    new: T,
    order: Ordering,
) -> Result<T, T> {
    with_stripe(ptr, order, || {
        let actual = unsafe { ptr::read(ptr) };
        if actual.as_bytes() == current.as_bytes() {
            unsafe { ptr::write(ptr, new) };
            Ok(actual)
        } else {
            Err(actual)
        }
    })
}
