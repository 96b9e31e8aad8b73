/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::atomic::AtomicView;
use std::thread;

#[test]
fn test_len_and_empty() {
    let mut data = [1u32, 2, 3];
    let view = AtomicView::new(&mut data);
    assert_eq!(view.len(), 3);
    assert!(!view.is_empty());

    let mut nothing: [u32; 0] = [];
    assert!(AtomicView::new(&mut nothing).is_empty());
}

#[test]
fn test_at_and_get() {
    let mut data = [10i64, 20, 30];
    let view = AtomicView::new(&mut data);
    assert_eq!(view.at(1).load(), 20);
    view.at(2).store(33);
    assert!(view.get(3).is_none());
    assert_eq!(view.get(2).map(|element| element.load()), Some(33));
    assert_eq!(view.as_ptr(), view.at(0).as_ptr());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_at_panics_out_of_bounds() {
    let mut data = [0u8; 2];
    let view = AtomicView::new(&mut data);
    view.at(2);
}

#[test]
fn test_iter_and_debug() {
    let mut data = [1.0f32, 2.0, 3.0];
    let view = AtomicView::new(&mut data);
    for element in view.iter() {
        element.store(element.load() * 2.0);
    }
    assert_eq!(format!("{:?}", view), "[2.0, 4.0, 6.0]");
}

#[test]
fn test_concurrent_histogram() {
    const THREADS: usize = 8;
    const SAMPLES: usize = 1000;

    let mut buckets = [0u32; 4];
    let view = AtomicView::new(&mut buckets);
    thread::scope(|s| {
        for t in 0..THREADS {
            let view = &view;
            s.spawn(move || {
                for i in 0..SAMPLES {
                    let mut bucket = view.at((t + i) % 4);
                    bucket += 1;
                }
            });
        }
    });

    assert_eq!(buckets.iter().sum::<u32>(), (THREADS * SAMPLES) as u32);
    assert_eq!(buckets, [2000; 4]);
}
