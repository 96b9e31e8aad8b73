/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::atomic::{
    AtomicRef,
    MaxOp,
    MinOp,
    XorOp,
};

#[test]
fn test_new_and_load() {
    let mut value = 42i32;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.load(), 42);
    assert_eq!(atomic.as_ptr() as usize % std::mem::align_of::<i32>(), 0);
}

#[test]
fn test_from_ptr() {
    let mut value = 7u16;
    let atomic = unsafe { AtomicRef::from_ptr(&mut value as *mut u16) };
    assert_eq!(atomic.exchange(8), 7);
    assert_eq!(value, 8);
}

#[test]
fn test_store_returns_value() {
    let mut value = 0u8;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.store(5), 5);
    assert_eq!(atomic.load(), 5);
}

#[test]
fn test_copies_share_the_target() {
    let mut value = 0i64;
    let first = AtomicRef::new(&mut value);
    let second = first;
    first.inc();
    second.inc();
    assert_eq!(first.load(), 2);
    assert_eq!(second.as_ptr(), first.as_ptr());
}

#[test]
fn test_compare_exchange() {
    let mut value = 10u32;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.compare_exchange(10, 20), Ok(10));
    assert_eq!(atomic.compare_exchange(10, 30), Err(20));
    assert_eq!(atomic.load(), 20);
}

#[test]
fn test_increment_and_decrement_forms() {
    let mut value = 10i32;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.increment(), 11);
    assert_eq!(atomic.post_increment(), 11);
    assert_eq!(atomic.decrement(), 11);
    assert_eq!(atomic.post_decrement(), 11);
    atomic.dec();
    assert_eq!(atomic.load(), 9);
}

#[test]
fn test_compound_assignment() {
    let mut value = 10i32;
    let mut atomic = AtomicRef::new(&mut value);
    atomic += 5;
    assert_eq!(atomic.load(), 15);
    atomic -= 3;
    atomic *= 4;
    atomic /= 6;
    atomic %= 5;
    assert_eq!(atomic.load(), 3);
    atomic <<= 4;
    assert_eq!(atomic.load(), 48);
    atomic >>= 2;
    atomic &= 0b1110;
    atomic |= 0b0001;
    atomic ^= 0b1000;
    assert_eq!(atomic.load(), 0b0101);
}

#[test]
fn test_op_fetch_methods() {
    let mut value = 12u64;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.add_fetch(3), 15);
    assert_eq!(atomic.sub_fetch(5), 10);
    assert_eq!(atomic.mul_fetch(3), 30);
    assert_eq!(atomic.div_fetch(4), 7);
    assert_eq!(atomic.mod_fetch(4), 3);
    assert_eq!(atomic.shl_fetch(2), 12);
    assert_eq!(atomic.shr_fetch(1), 6);
    assert_eq!(atomic.and_fetch(0b0100), 0b0100);
    assert_eq!(atomic.or_fetch(0b0011), 0b0111);
    assert_eq!(atomic.xor_fetch(0b0001), 0b0110);
}

#[test]
fn test_generic_apply() {
    let mut value = 5i16;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic.fetch_apply::<MaxOp, _>(9), 5);
    assert_eq!(atomic.apply_fetch::<MinOp, _>(-3), -3);
    assert_eq!(atomic.apply_fetch::<XorOp, _>(-1), 2);
}

#[test]
fn test_binary_operators_do_not_modify() {
    let mut value = 12i32;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(atomic + 1, 13);
    assert_eq!(atomic - 2, 10);
    assert_eq!(atomic * 2, 24);
    assert_eq!(atomic / 5, 2);
    assert_eq!(atomic % 5, 2);
    assert_eq!(atomic & 4, 4);
    assert_eq!(atomic | 1, 13);
    assert_eq!(atomic ^ 12, 0);
    assert_eq!(atomic << 1, 24);
    assert_eq!(atomic >> 2, 3);
    assert_eq!(!atomic, !12);
    assert_eq!(atomic.load(), 12);
}

#[test]
fn test_comparisons() {
    let mut value = 2.5f32;
    let atomic = AtomicRef::new(&mut value);
    assert!(atomic == 2.5);
    assert!(atomic != 1.0);
    assert!(atomic < 3.0);
    assert!(atomic <= 2.5);
    assert!(atomic > 2.0);
    assert!(atomic >= 2.5);
}

#[test]
fn test_float_proxy() {
    let mut value = 1.0f64;
    let mut atomic = AtomicRef::new(&mut value);
    atomic += 0.5;
    atomic *= 4.0;
    assert_eq!(atomic.increment(), 7.0);
    assert_eq!(atomic - 1.0, 6.0);
}

#[test]
fn test_bool_proxy() {
    let mut flag = false;
    let mut atomic = AtomicRef::new(&mut flag);
    atomic |= true;
    assert!(atomic.load());
    atomic ^= true;
    assert!(!atomic.load());
    assert!(!atomic);
}

#[test]
fn test_debug() {
    let mut value = 17u8;
    let atomic = AtomicRef::new(&mut value);
    assert_eq!(format!("{:?}", atomic), "AtomicRef(17)");
}

static GREETING: &str = "hello";
static FAREWELL: &str = "goodbye";

#[test]
fn test_pointer_to_reference_payload() {
    let mut slot: *const &'static str = &GREETING;
    let atomic = AtomicRef::new(&mut slot);
    assert_eq!(unsafe { *atomic.load() }, "hello");
    assert_eq!(atomic.exchange(&FAREWELL), &GREETING as *const &'static str);
    assert_eq!(unsafe { *atomic.load() }, "goodbye");
}
