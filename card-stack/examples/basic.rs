// Example: stacking transforms for a few cards at a fixed scroll position.
use card_stack::{
    AnimationFactors, ItemGeometry, Orientation, ScrollState, ShadowShape, StackInput,
    stack_transform,
};

fn main() {
    let scroll = ScrollState::new(5, 40.0);
    let factors = AnimationFactors::default();

    for index in 2..8 {
        let input = StackInput::new(
            index,
            scroll,
            ItemGeometry::Measured(200.0),
            8.0,
            factors,
            Orientation::Vertical,
        );
        let t = stack_transform(&input);
        println!(
            "card {index}: offset={:.4} scale={:.4} ty={:.1} alpha={:.2} shadow={:?}",
            t.offset,
            t.scale,
            t.translate_y,
            t.alpha,
            t.shadow_overlay(ShadowShape::Bounds).map(|s| s.alpha)
        );
    }

    // An item laid out for the first time has no size yet and renders unanimated.
    let first_frame = stack_transform(&StackInput::new(
        3,
        scroll,
        ItemGeometry::Unmeasured,
        8.0,
        factors,
        Orientation::Vertical,
    ));
    println!("unmeasured card 3: identity={}", first_frame.is_identity());
}
