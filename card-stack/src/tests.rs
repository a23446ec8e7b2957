use crate::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn input(
    item_index: usize,
    first_visible_index: usize,
    first_visible_offset: f32,
    size: f32,
    spacing: f32,
) -> StackInput {
    StackInput::new(
        item_index,
        ScrollState::new(first_visible_index, first_visible_offset),
        ItemGeometry::from_size(size),
        spacing,
        AnimationFactors::default(),
        Orientation::Vertical,
    )
}

#[test]
fn defaults_match_documented_values() {
    let f = AnimationFactors::default();
    assert_eq!(f.scale_factor, 0.05);
    assert_eq!(f.translation_factor, 0.95);
    assert_eq!(f.alpha_factor, 10.0);
    assert_eq!(f.shadow_alpha_factor, 0.2);
    assert!(f.is_default());
    for factor in Factor::ALL {
        assert_eq!(f.get(factor), factor.default_value());
        assert!(factor.range().contains(factor.default_value()));
    }
}

#[test]
fn with_replaces_a_single_factor() {
    let f = AnimationFactors::default().with(Factor::Alpha, 3.0);
    assert_eq!(f.alpha_factor, 3.0);
    assert_eq!(f.scale_factor, AnimationFactors::DEFAULT_SCALE_FACTOR);
    assert!(!f.is_default());
    assert_eq!(Factor::Alpha.range(), FactorRange::new(0.0, 20.0));
}

#[test]
fn factor_range_fraction_round_trips_inside_range() {
    let r = Factor::Alpha.range();
    assert_close(r.fraction_of(5.0), 0.25);
    assert_close(r.value_at(0.25), 5.0);
    assert_eq!(r.clamp(25.0), 20.0);
    assert_eq!(r.clamp(f32::NAN), 0.0);
    assert_eq!(r.value_at(2.0), 20.0);
}

#[test]
fn items_after_first_visible_are_untouched() {
    for item in 6..10 {
        let t = stack_transform(&input(item, 5, 40.0, 200.0, 8.0));
        assert_eq!(t.offset, 0.0);
        assert!(t.is_identity());
    }
}

#[test]
fn unmeasured_items_are_untouched() {
    let t = stack_transform(&input(3, 5, 40.0, 0.0, 8.0));
    assert!(t.is_identity());
    assert_eq!(t.shadow_overlay(ShadowShape::Bounds), None);
}

#[test]
fn first_visible_item_depth_is_its_scroll_fraction() {
    let t = stack_transform(&input(5, 5, 52.0, 200.0, 8.0));
    assert_close(t.offset, 0.25);
    assert_eq!(t.alpha, 1.0);
    assert_close(t.shadow_alpha, 0.05);
}

#[test]
fn concrete_scenario() {
    let t = stack_transform(&input(3, 5, 40.0, 200.0, 8.0));
    assert_close(t.offset, 2.0 + 40.0 / 208.0);
    assert_close(t.scale, 1.0 - t.offset * 0.05);
    assert_close(t.scale, 0.890_385);
    assert_eq!(t.translate_x, 0.0);
    assert!((t.translate_y - 433.2).abs() < 1e-2);
    assert_eq!(t.alpha, 0.0);
    assert_close(t.shadow_alpha, 0.438_461_5);
}

#[test]
fn depth_is_monotonic_in_scroll_offset() {
    let mut prev = -1.0f32;
    for px in 0..=208 {
        let d = stack_depth(3, ScrollState::new(5, px as f32), 200.0, 8.0);
        assert!(d >= 0.0);
        assert!(d >= prev);
        prev = d;
    }
    // Continuous across the item boundary.
    let before = stack_depth(3, ScrollState::new(5, 207.999), 200.0, 8.0);
    let after = stack_depth(3, ScrollState::new(6, 0.0), 200.0, 8.0);
    assert!((after - before).abs() < 1e-3);
}

#[test]
fn alpha_has_a_one_unit_grace_period() {
    let f = AnimationFactors::default();
    assert_eq!(LayerTransform::from_depth(0.0, 100.0, &f, Orientation::Vertical).alpha, 1.0);
    assert_eq!(LayerTransform::from_depth(0.99, 100.0, &f, Orientation::Vertical).alpha, 1.0);
    assert_eq!(LayerTransform::from_depth(1.0, 100.0, &f, Orientation::Vertical).alpha, 1.0);
    assert_close(
        LayerTransform::from_depth(1.05, 100.0, &f, Orientation::Vertical).alpha,
        0.5,
    );
    let fade_end = 1.0 + 1.0 / f.alpha_factor;
    let at_zero = LayerTransform::from_depth(fade_end, 100.0, &f, Orientation::Vertical);
    assert_close(at_zero.alpha, 0.0);
    let buried = LayerTransform::from_depth(4.0, 100.0, &f, Orientation::Vertical);
    assert_eq!(buried.alpha, 0.0);
    assert!(buried.is_invisible());
    assert!(!LayerTransform::from_depth(1.0, 100.0, &f, Orientation::Vertical).is_invisible());
}

#[test]
fn shadow_alpha_saturates() {
    let f = AnimationFactors::default();
    let t = |d| LayerTransform::from_depth(d, 100.0, &f, Orientation::Vertical).shadow_alpha;
    assert_eq!(t(0.0), 0.0);
    assert_close(t(1.0 / f.shadow_alpha_factor), 1.0);
    assert_eq!(t(12.0), 1.0);
}

#[test]
fn scale_is_not_clamped_for_deep_stacks() {
    let f = AnimationFactors::default();
    let t = LayerTransform::from_depth(30.0, 100.0, &f, Orientation::Vertical);
    assert_close(t.scale, -0.5);
}

#[test]
fn transform_is_deterministic() {
    let i = input(3, 5, 40.0, 200.0, 8.0);
    let bits = |t: LayerTransform| {
        [
            t.offset,
            t.scale,
            t.translate_x,
            t.translate_y,
            t.alpha,
            t.shadow_alpha,
        ]
        .map(f32::to_bits)
    };
    assert_eq!(bits(stack_transform(&i)), bits(stack_transform(&i)));

    let mut h = i;
    h.orientation = Orientation::Horizontal;
    assert_eq!(bits(stack_transform(&h)), bits(stack_transform(&h)));
}

#[test]
fn horizontal_orientation_routes_translation_to_x() {
    let mut i = input(3, 5, 40.0, 200.0, 8.0);
    let vertical = stack_transform(&i);
    i.orientation = Orientation::Horizontal;
    let horizontal = stack_transform(&i);
    assert_eq!(horizontal.offset, vertical.offset);
    assert_eq!(horizontal.translate_x, vertical.translate_y);
    assert_eq!(horizontal.translate_y, 0.0);
    assert_eq!(horizontal.scale, vertical.scale);
}

#[test]
fn apply_scales_about_center_then_translates() {
    let t = LayerTransform {
        offset: 1.0,
        scale: 0.5,
        translate_x: 0.0,
        translate_y: 10.0,
        alpha: 1.0,
        shadow_alpha: 0.2,
    };
    let r = t.apply(LayerRect::new(0.0, 0.0, 100.0, 40.0));
    assert_eq!(r, LayerRect::new(25.0, 20.0, 50.0, 20.0));
    assert_eq!((r.right(), r.bottom()), (75.0, 40.0));
    assert_eq!(r.center(), (50.0, 30.0));
    assert_eq!(LayerTransform::IDENTITY.apply(r), r);
}

#[test]
fn shadow_overlay_is_black_at_shadow_alpha() {
    let f = AnimationFactors::default();
    let t = LayerTransform::from_depth(2.5, 100.0, &f, Orientation::Vertical);
    let overlay = t.shadow_overlay(ShadowShape::Outline).unwrap();
    assert_eq!(overlay.shape, ShadowShape::Outline);
    assert_eq!(overlay.rgba(), [0.0, 0.0, 0.0, 0.5]);
    assert_eq!(overlay.rgba8(), [0, 0, 0, 128]);
}

#[test]
fn geometry_state_machine() {
    let mut g = ItemGeometry::default();
    assert!(!g.is_measured());
    assert_eq!(g.main_axis_size(), 0.0);
    assert!(!g.record(0.0));
    assert!(!g.record(f32::NAN));
    assert!(g.record(120.0));
    assert_eq!(g, ItemGeometry::Measured(120.0));
    assert!(!g.record(120.0));
    assert!(g.record(-1.0));
    assert_eq!(g, ItemGeometry::Unmeasured);
}

#[test]
fn memo_reuses_until_inputs_change() {
    let mut memo = TransformMemo::new();
    let mut i = input(3, 5, 40.0, 200.0, 8.0);
    let first = memo.get_or_compute(&i);
    let second = memo.get_or_compute(&i);
    assert_eq!(first, second);
    assert_eq!((memo.hits(), memo.misses()), (1, 1));

    i.factors = i.factors.with_scale_factor(0.1);
    let third = memo.get_or_compute(&i);
    assert_eq!(memo.misses(), 2);
    assert_eq!(third, stack_transform(&i));

    // A different scroll position with the same depth is still a hit.
    let mut j = input(7, 5, 40.0, 200.0, 8.0);
    let mut memo = TransformMemo::new();
    memo.get_or_compute(&j);
    j.scroll = ScrollState::new(6, 10.0);
    memo.get_or_compute(&j);
    assert_eq!(memo.hits(), 1);

    memo.invalidate();
    assert_eq!(memo.last(), None);
}
