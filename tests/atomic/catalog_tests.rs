/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::atomic::{
    atomic_add_fetch,
    atomic_and,
    atomic_byte_add_fetch,
    atomic_byte_sub_fetch,
    atomic_decrement,
    atomic_div_fetch,
    atomic_fetch_add,
    atomic_fetch_and,
    atomic_fetch_byte_add,
    atomic_fetch_byte_sub,
    atomic_fetch_max,
    atomic_fetch_min,
    atomic_fetch_mod,
    atomic_fetch_mul,
    atomic_fetch_nand,
    atomic_fetch_or,
    atomic_fetch_sub,
    atomic_fetch_xor,
    atomic_increment,
    atomic_load,
    atomic_max_fetch,
    atomic_min_fetch,
    atomic_or_fetch,
    atomic_sub_fetch,
    AcqRel,
    Acquire,
    Additive,
    AtomicRef,
    AtomicValue,
    Generic,
    Operation,
    Relaxed,
    SeqCst,
};
use std::sync::atomic::Ordering;
use zerocopy::AsBytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsBytes)]
#[repr(C)]
struct Money {
    cents: i64,
    currency: u32,
    reserved: u32,
}

impl AtomicValue for Money {
    type Path = Generic;
}

impl Additive for Money {
    const ONE: Self = Money {
        cents: 1,
        currency: 0,
        reserved: 0,
    };

    fn add_value(self, rhs: Self) -> Self {
        Money {
            cents: self.cents + rhs.cents,
            ..self
        }
    }

    fn sub_value(self, rhs: Self) -> Self {
        Money {
            cents: self.cents - rhs.cents,
            ..self
        }
    }
}

fn euros(cents: i64) -> Money {
    Money {
        cents,
        currency: 978,
        reserved: 0,
    }
}

/// Adds but never exceeds 100.
struct CappedAdd;

impl Operation<u32> for CappedAdd {
    fn apply(current: u32, operand: u32) -> u32 {
        current.saturating_add(operand).min(100)
    }
}

#[test]
fn test_float_arithmetic() {
    let mut value = 1.5f64;
    unsafe {
        assert_eq!(atomic_fetch_add(&mut value, 2.0, AcqRel), 1.5);
        assert_eq!(atomic_sub_fetch(&mut value, 0.5, AcqRel), 3.0);
        assert_eq!(atomic_fetch_mul(&mut value, 4.0, SeqCst), 3.0);
        assert_eq!(atomic_div_fetch(&mut value, 8.0, Relaxed), 1.5);
        assert_eq!(atomic_fetch_mod(&mut value, 1.0, AcqRel), 1.5);
        assert_eq!(atomic_load(&mut value, Acquire), 0.5);
    }
}

#[test]
fn test_float_increment_and_min_max() {
    let mut value = -1.0f32;
    unsafe {
        atomic_increment(&mut value, AcqRel);
        atomic_increment(&mut value, AcqRel);
        assert_eq!(atomic_load(&mut value, Acquire), 1.0);
        assert_eq!(atomic_fetch_max(&mut value, 7.5, AcqRel), 1.0);
        assert_eq!(atomic_min_fetch(&mut value, -2.0, AcqRel), -2.0);
    }
}

#[test]
fn test_float_division_by_zero_follows_ieee() {
    let mut value = 1.0f64;
    unsafe {
        assert_eq!(atomic_div_fetch(&mut value, 0.0, AcqRel), f64::INFINITY);
    }
}

#[test]
fn test_bool_bitwise() {
    let mut flag = true;
    unsafe {
        assert!(atomic_fetch_and(&mut flag, false, AcqRel));
        assert!(!atomic_fetch_or(&mut flag, true, AcqRel));
        assert!(atomic_fetch_xor(&mut flag, true, AcqRel));
        assert!(!atomic_fetch_nand(&mut flag, true, AcqRel));
        assert!(atomic_load(&mut flag, Acquire));
        atomic_and(&mut flag, false, Relaxed);
        assert!(atomic_or_fetch(&mut flag, true, Relaxed));
    }
}

#[test]
fn test_pointer_min_max() {
    let buffer = [0u16; 8];
    let low = buffer.as_ptr();
    let high = buffer[5..].as_ptr();
    let mut slot = high;
    unsafe {
        assert_eq!(atomic_fetch_min(&mut slot, low, AcqRel), high);
        assert_eq!(atomic_max_fetch(&mut slot, high, AcqRel), high);
    }
}

#[test]
fn test_pointer_byte_arithmetic_is_unscaled() {
    let mut buffer = [0u32; 4];
    let base = buffer.as_mut_ptr();
    let mut cursor = base;
    unsafe {
        assert_eq!(atomic_fetch_byte_add(&mut cursor, 4, AcqRel), base);
        assert_eq!(cursor, base.add(1));
        assert_eq!(atomic_byte_add_fetch(&mut cursor, 8, AcqRel), base.add(3));
        assert_eq!(atomic_fetch_byte_sub(&mut cursor, 12, AcqRel), base.add(3));
        assert_eq!(cursor, base);
        assert_eq!(
            atomic_byte_sub_fetch(&mut cursor, 1, Relaxed) as usize,
            base as usize - 1
        );
    }
}

#[test]
fn test_moved_pointers_stay_dereferenceable() {
    let mut buffer = [10u32, 20, 30, 40];
    let mut cursor = buffer.as_mut_ptr();
    unsafe {
        let moved = atomic_byte_add_fetch(&mut cursor, 4, AcqRel);
        assert_eq!(*moved, 20);
        assert_eq!(*cursor, 20);

        let previous = atomic_fetch_byte_add(&mut cursor, 8, AcqRel);
        assert_eq!(*previous, 20);
        assert_eq!(*cursor, 40);

        *cursor = 41;
        let back = atomic_byte_sub_fetch(&mut cursor, 12, AcqRel);
        assert_eq!(*back, 10);
        let previous = atomic_fetch_byte_sub(&mut cursor, 0, AcqRel);
        assert_eq!(*previous, 10);
    }
    assert_eq!(buffer, [10, 20, 30, 41]);
}

#[test]
fn test_user_type_goes_through_cas_loop() {
    let mut balance = euros(100);
    unsafe {
        assert_eq!(atomic_fetch_add(&mut balance, euros(50), AcqRel), euros(100));
        assert_eq!(atomic_add_fetch(&mut balance, euros(25), AcqRel), euros(175));
        assert_eq!(atomic_fetch_sub(&mut balance, euros(75), SeqCst), euros(175));
        atomic_decrement(&mut balance, AcqRel);
    }
    assert_eq!(balance, euros(99));
}

#[test]
fn test_user_operation() {
    let mut level = 90u32;
    unsafe {
        assert_eq!(CappedAdd::fetch_apply(&mut level, 5, Ordering::AcqRel), 90);
        assert_eq!(CappedAdd::apply_fetch(&mut level, 50, Ordering::AcqRel), 100);
    }
    let level = AtomicRef::new(&mut level);
    assert_eq!(level.apply_fetch::<CappedAdd, _>(1), 100);
}
