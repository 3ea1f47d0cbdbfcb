//! Integration tests for frame builders

mod common;
use common::*;

use rgb_strip::{Frame, FrameError, hsv_to_rgb, percent_frame, solid_frame};

#[test]
fn solid_red_frame_for_twenty_leds() {
    let frame = solid_frame::<20>(rgb_strip::rgb(255, 0, 0), 20).unwrap();

    assert_eq!(frame.len(), 20);
    assert!(frame.iter().all(|color| color.packed() == 0xFF0000));
}

#[test]
fn solid_frame_has_requested_length() {
    for count in [0, 1, 7, 64] {
        let frame = solid_frame::<64>(BLUE, count).unwrap();
        assert_eq!(frame.len(), count);
        assert!(frame.iter().all(|&color| color == BLUE));
    }
}

#[test]
fn empty_solid_frame_is_allowed() {
    let frame = solid_frame::<8>(RED, 0).unwrap();
    assert!(frame.is_empty());
}

#[test]
fn solid_frame_rejects_count_above_capacity() {
    let result = solid_frame::<8>(RED, 9);
    assert_eq!(
        result,
        Err(FrameError::CapacityExceeded {
            requested: 9,
            capacity: 8
        })
    );
}

#[test]
fn solid_frame_from_hsv_is_deterministic() {
    let first = solid_frame::<16>(hsv_to_rgb(0.3, 0.9, 0.7), 16).unwrap();
    let second = solid_frame::<16>(hsv_to_rgb(0.3, 0.9, 0.7), 16).unwrap();
    assert_eq!(first, second);
}

#[test]
fn off_frame_is_black() {
    let frame = Frame::<10>::off(10).unwrap();
    assert!(frame.iter().all(|&color| color == BLACK));
}

#[test]
fn from_fn_preserves_led_order() {
    let frame = Frame::<4>::from_fn(4, |index| rgb_strip::rgb(index as u8, 0, 0)).unwrap();
    let reds: Vec<u8> = frame.iter().map(|color| color.red()).collect();
    assert_eq!(reds, vec![0, 1, 2, 3]);
}

#[test]
fn percent_frame_lights_leading_leds() {
    let frame = percent_frame::<24>(GREEN, 24, 50).unwrap();

    assert_eq!(frame.len(), 24);
    assert!(frame[..12].iter().all(|&color| color == GREEN));
    assert!(frame[12..].iter().all(|&color| color == BLACK));
}

#[test]
fn percent_frame_extremes() {
    let none = percent_frame::<10>(RED, 10, 0).unwrap();
    assert!(none.iter().all(|&color| color == BLACK));

    let all = percent_frame::<10>(RED, 10, 100).unwrap();
    assert!(all.iter().all(|&color| color == RED));

    let clamped = percent_frame::<10>(RED, 10, 200).unwrap();
    assert_eq!(clamped, all);
}

#[test]
fn percent_frame_rejects_huge_count_without_overflow() {
    let result = percent_frame::<8>(RED, usize::MAX / 10, 100);

    assert_eq!(
        result,
        Err(FrameError::CapacityExceeded {
            requested: usize::MAX / 10,
            capacity: 8
        })
    );
}
