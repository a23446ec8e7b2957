// Example: rendering the settings sheet and routing its callbacks.
use card_stack_adapter::card_stack::{Factor, Orientation};
use card_stack_adapter::{Rect, StackedCards, StackedListOptions};

fn main() {
    let mut cards = StackedCards::new(
        StackedListOptions::new(100, |_| 120).with_initial_rect(Some(Rect {
            main: 800,
            cross: 400,
        })),
    );

    cards.open_settings();
    if let Some(panel) = cards.settings_panel() {
        println!("== {} ==", panel.title());
        for slider in panel.sliders() {
            println!(
                "{}  [{:.0}..{:.0}] thumb={:.2}\n  {}",
                slider.caption(),
                slider.range.min,
                slider.range.max,
                slider.fraction(),
                slider.description
            );
        }
    }

    // User drags two sliders, flips orientation, then hits reset.
    cards.on_slider_change(Factor::Scale, 0.12);
    cards.on_slider_change(Factor::Alpha, 4.0);
    println!("after drag: {:?}", cards.factors());

    cards.on_orientation_toggle();
    assert_eq!(cards.orientation(), Orientation::Horizontal);
    println!("orientation: {:?}", cards.list().orientation());

    cards.on_reset_click();
    println!("after reset: {:?} (default={})", cards.factors(), cards.factors().is_default());
    cards.dismiss_settings();
}
