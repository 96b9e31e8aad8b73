/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Operations
//!
//! Memory-order checked atomic read-modify-write primitives on raw
//! targets, the operation catalog built on them, and the reference and
//! view proxies.
//!
//! # Features
//!
//! - Memory orders as zero-sized markers; illegal orders do not compile
//! - Hardware instructions for pointers, `bool` and integers, with a
//!   whole-object fallback for any padding-free `Copy` type
//! - Fetch-then-op and op-then-fetch forms of thirteen operations
//! - Operator syntax through [`AtomicRef`] and [`AtomicView`]
//!
//! # Author
//!
//! Haixing Hu

mod atomic_ref;
mod atomic_view;
mod cas_loop;
mod dispatch;
mod fetch_ops;
mod lock_table;
mod memory_order;
mod operation;
mod pointer;
mod primitives;

#[cfg(feature = "legacy")]
pub mod legacy;

pub use atomic_ref::AtomicRef;
pub use atomic_view::AtomicView;
pub use dispatch::{
    is_lock_free,
    required_alignment,
    uses_explicit_path,
    AtomicPath,
    AtomicValue,
    Explicit,
    Generic,
    MAX_ATOMIC_INTEGER_SIZE,
};
pub use fetch_ops::{
    atomic_add,
    atomic_add_fetch,
    atomic_and,
    atomic_and_fetch,
    atomic_decrement,
    atomic_div_fetch,
    atomic_fetch_add,
    atomic_fetch_and,
    atomic_fetch_div,
    atomic_fetch_lshift,
    atomic_fetch_max,
    atomic_fetch_min,
    atomic_fetch_mod,
    atomic_fetch_mul,
    atomic_fetch_nand,
    atomic_fetch_or,
    atomic_fetch_rshift,
    atomic_fetch_sub,
    atomic_fetch_update,
    atomic_fetch_xor,
    atomic_increment,
    atomic_lshift_fetch,
    atomic_max_fetch,
    atomic_min_fetch,
    atomic_mod_fetch,
    atomic_mul_fetch,
    atomic_nand_fetch,
    atomic_or,
    atomic_or_fetch,
    atomic_rshift_fetch,
    atomic_sub,
    atomic_sub_fetch,
    atomic_update_fetch,
    atomic_xor_fetch,
};
pub use memory_order::{
    is_valid_compare_exchange_order,
    is_valid_order,
    order_id,
    AcqRel,
    Acquire,
    CompareExchangeOrder,
    DefaultFailureOrder,
    DefaultFenceOrder,
    DefaultLoadOrder,
    DefaultRmwOrder,
    DefaultStoreOrder,
    DefaultSuccessOrder,
    FenceOrder,
    LoadOrder,
    MemoryOrder,
    OperationKind,
    Relaxed,
    Release,
    RmwOrder,
    SeqCst,
    StoreOrder,
};
pub use operation::{
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
    Multiplicative,
    NandOp,
    Operation,
    OrOp,
    RShiftOp,
    Shift,
    SubOp,
    XorOp,
};
pub use pointer::{
    atomic_byte_add_fetch,
    atomic_byte_sub_fetch,
    atomic_fetch_byte_add,
    atomic_fetch_byte_sub,
    AtomicPointer,
};
pub use primitives::{
    atomic_compare_exchange,
    atomic_compare_exchange_weak,
    atomic_exchange,
    atomic_load,
    atomic_store,
    atomic_thread_fence,
};
