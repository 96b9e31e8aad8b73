/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(i8, i8_tests);
test_atomic_integer!(u8, u8_tests);
test_atomic_integer!(i16, i16_tests);
test_atomic_integer!(u16, u16_tests);
test_atomic_integer!(i32, i32_tests);
test_atomic_integer!(u32, u32_tests);
test_atomic_integer!(i64, i64_tests);
test_atomic_integer!(u64, u64_tests);
test_atomic_integer!(i128, i128_tests);
test_atomic_integer!(u128, u128_tests);
test_atomic_integer!(isize, isize_tests);
test_atomic_integer!(usize, usize_tests);
