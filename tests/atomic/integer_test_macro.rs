/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the catalog tests for one integer type.
#[macro_export]
macro_rules! test_atomic_integer {
    ($value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_ops::atomic::{
                atomic_add,
                atomic_add_fetch,
                atomic_and,
                atomic_and_fetch,
                atomic_compare_exchange,
                atomic_decrement,
                atomic_div_fetch,
                atomic_exchange,
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
                atomic_load,
                atomic_lshift_fetch,
                atomic_max_fetch,
                atomic_min_fetch,
                atomic_mod_fetch,
                atomic_mul_fetch,
                atomic_nand_fetch,
                atomic_or,
                atomic_or_fetch,
                atomic_rshift_fetch,
                atomic_store,
                atomic_sub,
                atomic_sub_fetch,
                atomic_update_fetch,
                atomic_xor_fetch,
                AcqRel,
                Acquire,
                AtomicRef,
                Relaxed,
                Release,
                SeqCst,
            };
            use std::thread;

            type Value = $value_type;

            #[test]
            fn test_load_store() {
                let mut value: Value = 0;
                unsafe {
                    atomic_store(&mut value, 42, Release);
                    assert_eq!(atomic_load(&mut value, Acquire), 42);
                    atomic_store(&mut value, Value::MAX, SeqCst);
                    assert_eq!(atomic_load(&mut value, Relaxed), Value::MAX);
                }
            }

            #[test]
            fn test_exchange() {
                let mut value: Value = 10;
                unsafe {
                    assert_eq!(atomic_exchange(&mut value, 20, AcqRel), 10);
                    assert_eq!(atomic_load(&mut value, Acquire), 20);
                }
            }

            #[test]
            fn test_compare_exchange_success() {
                let mut value: Value = 10;
                let mut expected: Value = 10;
                unsafe {
                    assert!(atomic_compare_exchange(&mut value, &mut expected, 20, AcqRel, Relaxed));
                }
                assert_eq!(expected, 10);
                assert_eq!(value, 20);
            }

            #[test]
            fn test_compare_exchange_failure() {
                let mut value: Value = 10;
                let mut expected: Value = 15;
                unsafe {
                    assert!(!atomic_compare_exchange(&mut value, &mut expected, 20, SeqCst, Acquire));
                }
                assert_eq!(expected, 10);
                assert_eq!(value, 10);
            }

            #[test]
            fn test_fetch_add_and_add_fetch() {
                let mut value: Value = 10;
                unsafe {
                    assert_eq!(atomic_fetch_add(&mut value, 5, AcqRel), 10);
                    assert_eq!(atomic_add_fetch(&mut value, 5, Relaxed), 20);
                }
                assert_eq!(value, 20);
            }

            #[test]
            fn test_add_wraps_at_max() {
                let mut value = Value::MAX;
                unsafe {
                    assert_eq!(atomic_fetch_add(&mut value, 1, SeqCst), Value::MAX);
                }
                assert_eq!(value, Value::MIN);
            }

            #[test]
            fn test_fetch_sub_and_sub_fetch() {
                let mut value: Value = 10;
                unsafe {
                    assert_eq!(atomic_fetch_sub(&mut value, 3, AcqRel), 10);
                    assert_eq!(atomic_sub_fetch(&mut value, 3, Release), 4);
                }
            }

            #[test]
            fn test_sub_wraps_at_min() {
                let mut value = Value::MIN;
                unsafe {
                    assert_eq!(atomic_sub_fetch(&mut value, 1, AcqRel), Value::MAX);
                }
            }

            #[test]
            fn test_mul_div_mod() {
                let mut value: Value = 6;
                unsafe {
                    assert_eq!(atomic_fetch_mul(&mut value, 7, AcqRel), 6);
                    assert_eq!(atomic_mul_fetch(&mut value, 1, AcqRel), 42);
                    assert_eq!(atomic_fetch_div(&mut value, 5, AcqRel), 42);
                    assert_eq!(atomic_div_fetch(&mut value, 2, AcqRel), 4);
                    assert_eq!(atomic_fetch_mod(&mut value, 3, AcqRel), 4);
                    assert_eq!(atomic_mod_fetch(&mut value, 3, AcqRel), 1);
                }
            }

            #[test]
            #[should_panic]
            fn test_div_by_zero_is_not_guarded() {
                let mut value: Value = 6;
                unsafe {
                    atomic_fetch_div(&mut value, 0, AcqRel);
                }
            }

            #[test]
            fn test_bitwise() {
                let mut value: Value = 0b1111;
                unsafe {
                    assert_eq!(atomic_fetch_and(&mut value, 0b1100, AcqRel), 0b1111);
                    assert_eq!(atomic_and_fetch(&mut value, 0b0100, AcqRel), 0b0100);
                    assert_eq!(atomic_fetch_or(&mut value, 0b0011, AcqRel), 0b0100);
                    assert_eq!(atomic_or_fetch(&mut value, 0b1000, AcqRel), 0b1111);
                    assert_eq!(atomic_fetch_xor(&mut value, 0b0110, AcqRel), 0b1111);
                    assert_eq!(atomic_xor_fetch(&mut value, 0b0001, AcqRel), 0b1000);
                    assert_eq!(atomic_fetch_nand(&mut value, 0b1000, AcqRel), 0b1000);
                    assert_eq!(atomic_load(&mut value, Relaxed), !(0b1000 as Value));
                    assert_eq!(atomic_nand_fetch(&mut value, 0, AcqRel), !(0 as Value));
                }
            }

            #[test]
            fn test_shifts() {
                let mut value: Value = 1;
                unsafe {
                    assert_eq!(atomic_fetch_lshift(&mut value, 3, AcqRel), 1);
                    assert_eq!(atomic_lshift_fetch(&mut value, 1, AcqRel), 16);
                    assert_eq!(atomic_fetch_rshift(&mut value, 2, AcqRel), 16);
                    assert_eq!(atomic_rshift_fetch(&mut value, 1, AcqRel), 2);
                }
            }

            #[test]
            fn test_min_max() {
                let mut value: Value = 10;
                unsafe {
                    assert_eq!(atomic_fetch_min(&mut value, 20, AcqRel), 10);
                    assert_eq!(atomic_min_fetch(&mut value, 3, AcqRel), 3);
                    assert_eq!(atomic_fetch_max(&mut value, 2, AcqRel), 3);
                    assert_eq!(atomic_max_fetch(&mut value, 50, AcqRel), 50);
                }
            }

            #[test]
            fn test_no_result_forms() {
                let mut value: Value = 10;
                unsafe {
                    atomic_add(&mut value, 5, AcqRel);
                    atomic_sub(&mut value, 3, AcqRel);
                    atomic_increment(&mut value, Relaxed);
                    atomic_decrement(&mut value, Relaxed);
                    atomic_decrement(&mut value, Relaxed);
                    atomic_and(&mut value, 0b1110, SeqCst);
                    atomic_or(&mut value, 0b0001, SeqCst);
                }
                assert_eq!(value, 11);
            }

            #[test]
            fn test_update_closures() {
                let mut value: Value = 10;
                unsafe {
                    assert_eq!(atomic_fetch_update(&mut value, |x| x * 2, AcqRel), 10);
                    assert_eq!(atomic_update_fetch(&mut value, |x| x - 5, AcqRel), 15);
                }
            }

            #[test]
            fn test_concurrent_fetch_add() {
                const THREADS: usize = 4;
                const ITERATIONS: usize = 1000;

                let mut value: Value = 0;
                let target = AtomicRef::new(&mut value);
                thread::scope(|s| {
                    for _ in 0..THREADS {
                        s.spawn(move || {
                            for _ in 0..ITERATIONS {
                                unsafe { atomic_fetch_add(target.as_ptr(), 1, AcqRel) };
                            }
                        });
                    }
                });
                assert_eq!(value, (THREADS * ITERATIONS) as Value);
            }
        }
    };
}
