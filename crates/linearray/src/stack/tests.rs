//! Stacker behaviour on the reference hall and on each stop condition.

use super::*;
use crate::venue::presets::k2;
use crate::venue::SpeakerSpec;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn k2_with(vdisp: f64, box_height: f64) -> SpeakerSpec {
    let mut s = k2();
    s.vert_dispersion_deg = vdisp;
    s.box_height = box_height;
    s
}

fn cfg(base_height: f64, max_per_array: usize) -> StackCfg {
    StackCfg {
        base_height,
        target_floor: 0.1,
        max_per_array,
    }
}

fn assert_tiles(layout: &ArrayLayout, depth: f64) {
    let s = &layout.speakers;
    assert!(!s.is_empty());
    assert_eq!(s[0].coverage_end, depth);
    for w in s.windows(2) {
        assert_eq!(w[1].coverage_end, w[0].coverage_start);
        assert!(w[1].height < w[0].height);
        assert!(w[1].coverage_start < w[0].coverage_start);
    }
    for (k, sp) in s.iter().enumerate() {
        assert_eq!(sp.index, k + 1);
        assert!(sp.coverage_start > 0.0);
        assert!(sp.coverage_start < sp.coverage_end);
        assert!(sp.coverage_end <= depth);
    }
}

#[test]
fn reference_hall_stack() {
    let layout = stack_array(50.0, &k2(), 1, 15.0, StackCfg::with_base_height(14.0));
    assert_eq!(layout.stop, StopReason::Coverage);
    assert_eq!(layout.count(), 8);
    assert_tiles(&layout, 50.0);

    let top = &layout.speakers[0];
    let expected_tilt = (50.0f64 / 14.0).atan().to_degrees() - 5.0;
    assert!((top.tilt_deg - expected_tilt).abs() < 1e-9);
    assert!((top.mouth_height - (14.0 - 0.5 * expected_tilt.to_radians().sin())).abs() < 1e-9);
    assert!((top.coverage_start - 29.8614).abs() < 1e-3);

    let heights: Vec<f64> = layout.speakers.iter().map(|s| s.height).collect();
    assert_eq!(heights, vec![14.0, 13.5, 13.0, 12.5, 12.0, 11.5, 11.0, 10.5]);
    assert!(layout.speakers.iter().all(|s| s.array_id == 1 && s.x_position == 15.0));
    assert!((layout.speakers.last().unwrap().coverage_start - 0.6051).abs() < 1e-3);
}

#[test]
fn base_at_floor_places_nothing() {
    let layout = stack_array(50.0, &k2(), 1, 0.0, cfg(0.1, 20));
    assert_eq!(layout.stop, StopReason::Floor);
    assert!(layout.speakers.is_empty());

    let below = stack_array(50.0, &k2(), 1, 0.0, cfg(0.05, 20));
    assert_eq!(below.stop, StopReason::Floor);
    assert_eq!(below.count(), 0);
}

#[test]
fn low_rig_in_deep_room_hits_floor() {
    let layout = stack_array(200.0, &k2(), 2, 3.0, cfg(1.0, 20));
    assert_eq!(layout.stop, StopReason::Floor);
    assert_eq!(layout.count(), 2);
    assert_tiles(&layout, 200.0);
}

#[test]
fn mouth_below_floor_stops_at_floor() {
    // rig clears target_floor, but a 0.5 m box tilted ~68° drops its mouth below 0
    let layout = stack_array(1.0, &k2(), 1, 0.0, cfg(0.3, 20));
    assert_eq!(layout.stop, StopReason::Floor);
    assert!(layout.speakers.is_empty());
}

#[test]
fn footprint_without_progress_stops_at_coverage() {
    // both cone edges sit past the saturation angle, so the footprint has no depth
    let layout = stack_array(1.0e5, &k2_with(0.001, 0.5), 1, 0.0, cfg(1.0, 20));
    assert_eq!(layout.stop, StopReason::Coverage);
    assert!(layout.speakers.is_empty());
}

#[test]
fn saturated_top_cabinet_stays_finite() {
    let layout = stack_array(1.0e4, &k2_with(10.0, 0.1), 1, 0.0, cfg(1.0, 20));
    assert_eq!(layout.stop, StopReason::Floor);
    assert_eq!(layout.count(), 9);
    assert_tiles(&layout, 1.0e4);

    let top = &layout.speakers[0];
    assert!(top.saturated);
    assert!(top.coverage_start.is_finite());
    assert!((top.coverage_start - 4846.298).abs() < 1e-2);
    assert!(layout.speakers[1..].iter().all(|s| !s.saturated));

    // 170° vertical: the near edge saturates and the first segment overshoots the stage
    let wide = stack_array(50.0, &k2_with(170.0, 0.5), 1, 0.0, cfg(14.0, 20));
    assert_eq!(wide.stop, StopReason::Coverage);
    assert!(wide.speakers.is_empty());
}

#[test]
fn device_limit_caps_stack() {
    let layout = stack_array(50.0, &k2(), 1, 0.0, cfg(14.0, 3));
    assert_eq!(layout.stop, StopReason::DeviceLimit);
    assert_eq!(layout.count(), 3);

    let narrow = stack_array(50.0, &k2_with(1.0, 0.1), 1, 0.0, cfg(14.0, 20));
    assert_eq!(narrow.stop, StopReason::DeviceLimit);
    assert_eq!(narrow.count(), 20);
    assert_tiles(&narrow, 50.0);
}

#[test]
fn zero_limit_places_nothing() {
    let layout = stack_array(50.0, &k2(), 1, 0.0, cfg(14.0, 0));
    assert_eq!(layout.stop, StopReason::DeviceLimit);
    assert!(layout.speakers.is_empty());
}

#[test]
fn randomized_stacks_terminate_and_tile() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let depth = rng.gen_range(5.0..300.0);
        let vdisp = rng.gen_range(0.5..60.0);
        let box_h = rng.gen_range(0.05..1.5);
        let base = rng.gen_range(0.5..30.0);
        let limit = rng.gen_range(0..30usize);
        let layout = stack_array(depth, &k2_with(vdisp, box_h), 1, 0.0, cfg(base, limit));
        assert!(layout.count() <= limit);
        if layout.count() > 0 {
            assert_tiles(&layout, depth);
        }
        if layout.count() < limit {
            assert_ne!(layout.stop, StopReason::DeviceLimit);
        }
    }
}
