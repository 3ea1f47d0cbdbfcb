//! Integration tests for RainbowWave

mod common;
use common::*;

use rgb_strip::{ConfigError, Frame, HueScale, RainbowWave, StripConfig, hsv_to_rgb};

fn config(led_count: usize, wave_length: usize, hue_scale: HueScale) -> StripConfig {
    StripConfig::builder()
        .led_count(led_count)
        .wave_length(wave_length)
        .hue_scale(hue_scale)
        .build()
        .unwrap()
}

#[test]
fn frame_has_one_color_per_led() {
    let mut wave = RainbowWave::<32>::new(&config(20, 3, HueScale::Raw)).unwrap();
    assert_eq!(wave.next_frame().len(), 20);
}

#[test]
fn raw_hue_scale_renders_solid_red() {
    let mut wave = RainbowWave::<32>::new(&StripConfig::default()).unwrap();

    for _ in 0..5 {
        let frame = wave.next_frame();
        assert!(frame.iter().all(|&color| color == RED));
    }
}

#[test]
fn degrees_hue_scale_follows_led_position() {
    let mut wave = RainbowWave::<32>::new(&config(20, 3, HueScale::Degrees)).unwrap();
    let frame = wave.next_frame();

    for (index, &color) in frame.iter().enumerate() {
        let hue = ((index * 3) % 360) as f64;
        assert_eq!(color, hsv_to_rgb(hue / 360.0, 1.0, 1.0));
    }
    assert_eq!(frame[0], RED);
    assert_ne!(frame[0], frame[19]);
}

#[test]
fn offsets_advance_in_order_and_wrap_after_full_rotation() {
    let mut wave = RainbowWave::<8>::new(&config(8, 3, HueScale::Degrees)).unwrap();

    for expected in 0..360u16 {
        assert_eq!(wave.offset(), expected);
        wave.next_frame();
    }
    assert_eq!(wave.offset(), 0);
}

#[test]
fn frame_after_full_rotation_repeats_first_frame() {
    let mut wave = RainbowWave::<8>::new(&config(8, 7, HueScale::Degrees)).unwrap();

    let frames: Vec<Frame<8>> = wave.by_ref().take(360).collect();
    let frame_361 = wave.next_frame();

    assert_eq!(frame_361, frames[0]);
    assert_ne!(frames[1], frames[0]);
}

#[test]
fn successive_frames_shift_by_one_hue_step() {
    let mut wave = RainbowWave::<8>::new(&config(8, 3, HueScale::Degrees)).unwrap();
    let first = wave.next_frame();
    let second = wave.next_frame();

    assert_eq!(first[0], hsv_to_rgb(0.0, 1.0, 1.0));
    assert_eq!(second[0], hsv_to_rgb(1.0 / 360.0, 1.0, 1.0));
}

#[test]
fn independent_generators_do_not_share_offset() {
    let cfg = config(4, 3, HueScale::Degrees);
    let mut a = RainbowWave::<4>::new(&cfg).unwrap();
    let mut b = RainbowWave::<4>::new(&cfg).unwrap();

    a.next_frame();
    a.next_frame();
    assert_eq!(a.offset(), 2);
    assert_eq!(b.offset(), 0);
    assert_eq!(b.next_frame(), RainbowWave::<4>::new(&cfg).unwrap().next_frame());
}

#[test]
fn construction_rejects_capacity_overflow() {
    let result = RainbowWave::<16>::new(&config(20, 3, HueScale::Raw));
    assert_eq!(
        result.err(),
        Some(ConfigError::LedCountExceedsCapacity {
            led_count: 20,
            capacity: 16
        })
    );
}
