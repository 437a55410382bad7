use super::*;
use crate::stack::StopReason;
use crate::venue::presets::{hall, k2};

#[test]
fn reference_hall_spacing() {
    let plan = plan_layout(&hall(), &k2(), &PlanCfg::default()).unwrap();
    assert_eq!(plan.base_height, 14.0);
    // 90° horizontal → top footprint width is 2 * 14 m, half of it is the step.
    assert!((plan.step() - 14.0).abs() < 1e-9);
    assert_eq!(plan.spacing.num_arrays, 3);
    assert_eq!(plan.arrays.len(), 3);
    assert!((plan.start_x() - 1.0).abs() < 1e-9);

    let xs: Vec<f64> = plan.arrays.iter().map(|a| a.x_position).collect();
    for (x, expected) in xs.iter().zip([1.0, 15.0, 29.0]) {
        assert!((x - expected).abs() < 1e-9);
    }
    let ids: Vec<usize> = plan.arrays.iter().map(|a| a.array_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn reference_hall_arrays_share_vertical_solution() {
    let plan = plan_layout(&hall(), &k2(), &PlanCfg::default()).unwrap();
    assert_eq!(plan.total_speakers(), 24);
    let first = &plan.arrays[0];
    assert_eq!(first.stop, StopReason::Coverage);
    assert_eq!(first.speakers[0].coverage_end, 50.0);
    for arr in &plan.arrays[1..] {
        assert_eq!(arr.count(), first.count());
        for (a, b) in arr.speakers.iter().zip(&first.speakers) {
            assert_eq!(a.height, b.height);
            assert_eq!(a.tilt_deg, b.tilt_deg);
            assert_eq!(a.coverage_start, b.coverage_start);
            assert_eq!(a.array_id, arr.array_id);
        }
    }
    let order: Vec<(usize, usize)> = plan.speakers().map(|s| (s.array_id, s.index)).collect();
    assert_eq!(order.len(), 24);
    assert_eq!(order[0], (1, 1));
    assert_eq!(order[8], (2, 1));
}

#[test]
fn planning_is_repeatable() {
    let cfg = PlanCfg::default();
    let a = plan_layout(&hall(), &k2(), &cfg).unwrap();
    let b = plan_layout(&hall(), &k2(), &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn total_budget_truncates_later_arrays() {
    let cfg = PlanCfg {
        max_total: Some(10),
        ..PlanCfg::default()
    };
    let plan = plan_layout(&hall(), &k2(), &cfg).unwrap();
    assert_eq!(plan.total_speakers(), 10);
    assert_eq!(plan.arrays[0].count(), 8);
    assert_eq!(plan.arrays[1].count(), 2);
    assert_eq!(plan.arrays[1].stop, StopReason::DeviceLimit);
    assert_eq!(plan.arrays[2].count(), 0);
    assert_eq!(plan.arrays[2].stop, StopReason::DeviceLimit);
}

#[test]
fn base_below_floor_places_nothing() {
    let cfg = PlanCfg {
        base_height: Some(0.08),
        ..PlanCfg::default()
    };
    let plan = plan_layout(&hall(), &k2(), &cfg).unwrap();
    assert!(!plan.arrays.is_empty());
    assert_eq!(plan.total_speakers(), 0);
    assert!(plan.arrays.iter().all(|a| a.stop == StopReason::Floor));
}

#[test]
fn overlap_factor_scales_array_count() {
    let tight = PlanCfg {
        overlap_factor: 0.25,
        ..PlanCfg::default()
    };
    let plan = plan_layout(&hall(), &k2(), &tight).unwrap();
    // step 7 m → ceil(30 / 7) = 5 arrays centred on 15 m
    assert_eq!(plan.spacing.num_arrays, 5);
    let mid = &plan.arrays[2];
    assert!((mid.x_position - 15.0).abs() < 1e-9);
}

#[test]
fn rejects_bad_inputs() {
    let bad_venue = VenueDimensions::new(0.0, 15.0, 50.0);
    assert!(matches!(
        plan_layout(&bad_venue, &k2(), &PlanCfg::default()),
        Err(PlanError::Input(_))
    ));

    let mut bad_speaker = k2();
    bad_speaker.vert_dispersion_deg = 0.0;
    assert!(matches!(
        plan_layout(&hall(), &bad_speaker, &PlanCfg::default()),
        Err(PlanError::Input(_))
    ));

    let bad_cfg = PlanCfg {
        overlap_factor: 0.0,
        ..PlanCfg::default()
    };
    assert!(matches!(
        plan_layout(&hall(), &k2(), &bad_cfg),
        Err(PlanError::InvalidConfig { .. })
    ));
}

#[test]
fn non_positive_base_height_is_degenerate_spacing() {
    let cfg = PlanCfg {
        base_height: Some(0.0),
        ..PlanCfg::default()
    };
    let err = plan_layout(&hall(), &k2(), &cfg).unwrap_err();
    assert!(matches!(err, PlanError::DegenerateSpacing { .. }));
    assert!(err.to_string().contains("spacing"));
}

#[test]
fn hairline_spacing_is_rejected_before_allocating() {
    let mut narrow = k2();
    narrow.horiz_dispersion_deg = 1e-12;
    assert!(narrow.validate().is_ok());
    assert!(matches!(
        plan_layout(&hall(), &narrow, &PlanCfg::default()),
        Err(PlanError::DegenerateSpacing { .. })
    ));

    let tiny_overlap = PlanCfg {
        overlap_factor: 1e-15,
        ..PlanCfg::default()
    };
    assert!(matches!(
        plan_layout(&hall(), &k2(), &tiny_overlap),
        Err(PlanError::DegenerateSpacing { .. })
    ));
}

#[test]
fn array_count_at_cap_is_accepted() {
    // the step is a hair under 14 m, so 999 steps of width round up to the cap
    let wide = VenueDimensions::new(14.0 * (MAX_ARRAYS - 1) as f64, 15.0, 50.0);
    let spacing = array_spacing(&wide, &k2(), 14.0, 0.5).unwrap();
    assert_eq!(spacing.num_arrays, MAX_ARRAYS);

    let wider = VenueDimensions::new(14.0 * (MAX_ARRAYS + 2) as f64, 15.0, 50.0);
    assert!(matches!(
        array_spacing(&wider, &k2(), 14.0, 0.5),
        Err(PlanError::DegenerateSpacing { .. })
    ));
}
