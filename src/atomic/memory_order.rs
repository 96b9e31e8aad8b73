/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Orders
//!
//! Compile-time memory order markers and the tables restricting which
//! orders each atomic operation accepts.
//!
//! Every ordering level is a distinct zero-sized type, so an illegal
//! combination (for example a `Release` load) is a missing trait
//! implementation and is rejected by the compiler instead of being
//! silently promoted at run time. The marker's `ORDERING` constant is
//! threaded straight into the `std::sync::atomic` instruction, so choosing
//! an order costs nothing at run time.
//!
//! # Validity Tables
//!
//! | Operation        | Accepted orders                               |
//! |------------------|-----------------------------------------------|
//! | load             | `Relaxed`, `Acquire`, `SeqCst`                |
//! | store            | `Relaxed`, `Release`, `SeqCst`                |
//! | exchange / fetch | all five                                      |
//! | fence            | all five (a `Relaxed` fence is a no-op)       |
//! | compare-exchange | failure in {`Relaxed`, `Acquire`}, failure no |
//! |                  | stronger than success                         |
//!
//! # Author
//!
//! Haixing Hu

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::Ordering;

mod sealed {
    pub trait Sealed {}
}

/// A compile-time memory order marker.
///
/// Implemented only by [`Relaxed`], [`Acquire`], [`Release`], [`AcqRel`]
/// and [`SeqCst`]. The trait is sealed.
///
/// # Author
///
/// Haixing Hu
pub trait MemoryOrder:
    sealed::Sealed + Copy + Default + Debug + Eq + Hash + Send + Sync + 'static
{
    /// The ordering handed to the underlying atomic instruction.
    const ORDERING: Ordering;

    /// The C11 numeric identifier of this order (relaxed 0, acquire 2,
    /// release 3, acq-rel 4, seq-cst 5).
    const ID: i32;

    /// Human readable name, used in diagnostics and `Debug` output.
    const NAME: &'static str;
}

macro_rules! define_memory_order {
    ($(#[$doc:meta])* $name:ident => $ordering:ident, $id:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl sealed::Sealed for $name {}

        impl MemoryOrder for $name {
            const ORDERING: Ordering = Ordering::$ordering;
            const ID: i32 = $id;
            const NAME: &'static str = stringify!($name);
        }
    };
}

define_memory_order!(
    /// No inter-thread ordering constraint; only atomicity is guaranteed.
    Relaxed => Relaxed, 0
);

define_memory_order!(
    /// Creates a happens-before edge from the release (or stronger) store
    /// this load reads from. Later accesses cannot be hoisted above it.
    Acquire => Acquire, 2
);

define_memory_order!(
    /// Creates a happens-before edge to acquire (or stronger) loads that
    /// read from this store. Earlier accesses cannot sink below it.
    Release => Release, 3
);

define_memory_order!(
    /// Combines [`Acquire`] and [`Release`].
    AcqRel => AcqRel, 4
);

define_memory_order!(
    /// Participates in the single total order of all `SeqCst` operations.
    SeqCst => SeqCst, 5
);

/// Order implied when an atomic load does not name one.
pub type DefaultLoadOrder = Acquire;

/// Order implied when an atomic store does not name one.
pub type DefaultStoreOrder = Release;

/// Order implied for exchange and fetch-op calls that do not name one.
pub type DefaultRmwOrder = AcqRel;

/// Success order implied for compare-exchange calls that do not name one.
pub type DefaultSuccessOrder = AcqRel;

/// Failure order implied for compare-exchange calls that do not name one.
pub type DefaultFailureOrder = Relaxed;

/// Order implied for a thread fence that does not name one.
pub type DefaultFenceOrder = AcqRel;

/// The kinds of atomic operation that constrain their memory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `atomic_load`.
    Load,
    /// `atomic_store`.
    Store,
    /// `atomic_exchange`.
    Exchange,
    /// Every `atomic_fetch_<op>` / `atomic_<op>_fetch`.
    FetchOp,
    /// Success order of `atomic_compare_exchange[_weak]`.
    CompareExchange,
    /// `atomic_thread_fence`.
    Fence,
}

/// Returns the C11 numeric identifier of `order`.
///
/// Larger identifiers are stronger, except that `Acquire` and `Release`
/// are unrelated; the compare-exchange table only ever compares a
/// `Relaxed` or `Acquire` failure order against the success order, where
/// the numeric comparison is exact.
#[inline]
pub const fn order_id(order: Ordering) -> i32 {
    match order {
        Ordering::Relaxed => Relaxed::ID,
        Ordering::Acquire => Acquire::ID,
        Ordering::Release => Release::ID,
        Ordering::AcqRel => AcqRel::ID,
        _ => SeqCst::ID,
    }
}

/// Returns whether `order` is legal for an operation of kind `kind`.
///
/// For [`OperationKind::CompareExchange`] this checks the success order
/// alone; use [`is_valid_compare_exchange_order`] for the pair.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::atomic::{is_valid_order, OperationKind};
/// use std::sync::atomic::Ordering;
///
/// assert!(is_valid_order(OperationKind::Load, Ordering::Acquire));
/// assert!(!is_valid_order(OperationKind::Load, Ordering::Release));
/// ```
#[inline]
pub const fn is_valid_order(kind: OperationKind, order: Ordering) -> bool {
    match kind {
        OperationKind::Load => {
            matches!(order, Ordering::Relaxed | Ordering::Acquire | Ordering::SeqCst)
        }
        OperationKind::Store => {
            matches!(order, Ordering::Relaxed | Ordering::Release | Ordering::SeqCst)
        }
        OperationKind::Exchange
        | OperationKind::FetchOp
        | OperationKind::CompareExchange
        | OperationKind::Fence => matches!(
            order,
            Ordering::Relaxed
                | Ordering::Acquire
                | Ordering::Release
                | Ordering::AcqRel
                | Ordering::SeqCst
        ),
    }
}

/// Returns whether `(success, failure)` is a legal compare-exchange pair.
///
/// The failure order must be `Relaxed` or `Acquire` and may not be
/// stronger than the success order.
#[inline]
pub const fn is_valid_compare_exchange_order(success: Ordering, failure: Ordering) -> bool {
    is_valid_order(OperationKind::CompareExchange, success)
        && matches!(failure, Ordering::Relaxed | Ordering::Acquire)
        && order_id(failure) <= order_id(success)
}

/// Memory orders accepted by `atomic_load`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid memory order for atomic_load",
    label = "atomic_load accepts Relaxed, Acquire or SeqCst"
)]
pub trait LoadOrder: MemoryOrder {}

/// Memory orders accepted by `atomic_store`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid memory order for atomic_store",
    label = "atomic_store accepts Relaxed, Release or SeqCst"
)]
pub trait StoreOrder: MemoryOrder {}

/// Memory orders accepted by `atomic_exchange` and the fetch-op catalog.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid memory order for an atomic read-modify-write"
)]
pub trait RmwOrder: MemoryOrder {}

/// Memory orders accepted by `atomic_thread_fence`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid memory order for atomic_thread_fence"
)]
pub trait FenceOrder: MemoryOrder {}

/// Legal `(Self, F)` = `(success, failure)` pairs for
/// `atomic_compare_exchange` and `atomic_compare_exchange_weak`.
#[diagnostic::on_unimplemented(
    message = "`({Self}, {F})` is not a valid (success, failure) memory order pair for atomic_compare_exchange",
    label = "the failure order must be Relaxed or Acquire and no stronger than the success order"
)]
pub trait CompareExchangeOrder<F: MemoryOrder>: MemoryOrder {}

macro_rules! allow_orders {
    ($trait_name:ident for $kind:ident: $($order:ty),+) => {$(
        impl $trait_name for $order {}

        const _: () = assert!(is_valid_order(
            OperationKind::$kind,
            <$order as MemoryOrder>::ORDERING
        ));
    )+};
}

allow_orders!(LoadOrder for Load: Relaxed, Acquire, SeqCst);
allow_orders!(StoreOrder for Store: Relaxed, Release, SeqCst);
allow_orders!(RmwOrder for FetchOp: Relaxed, Acquire, Release, AcqRel, SeqCst);
allow_orders!(FenceOrder for Fence: Relaxed, Acquire, Release, AcqRel, SeqCst);

macro_rules! allow_compare_exchange_orders {
    ($(($success:ty, $failure:ty)),+ $(,)?) => {$(
        impl CompareExchangeOrder<$failure> for $success {}

        const _: () = assert!(is_valid_compare_exchange_order(
            <$success as MemoryOrder>::ORDERING,
            <$failure as MemoryOrder>::ORDERING
        ));
    )+};
}

allow_compare_exchange_orders!(
    (Relaxed, Relaxed),
    (Acquire, Relaxed),
    (Release, Relaxed),
    (AcqRel, Relaxed),
    (SeqCst, Relaxed),
    (Acquire, Acquire),
    (Release, Acquire),
    (AcqRel, Acquire),
    (SeqCst, Acquire),
);
