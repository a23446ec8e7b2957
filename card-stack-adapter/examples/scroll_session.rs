// Example: an adapter driving a stacked list through a simulated scroll session.
use card_stack_adapter::{Rect, StackedItem, StackedList, StackedListOptions};

// Pretend layout engine: cards get taller every few indexes.
fn laid_out_height(index: usize) -> u32 {
    160 + (index % 3) as u32 * 20
}

fn main() {
    let opts = StackedListOptions::new(50, |_| 180)
        .with_spacing(8)
        .with_initial_rect(Some(Rect {
            main: 640,
            cross: 360,
        }));
    let mut list = StackedList::new(opts);

    let mut items: Vec<StackedItem> = Vec::new();
    for frame in 0..12 {
        // Each frame: the host scrolls, draws, then reports sizes after layout.
        list.scroll_by(45);
        list.collect_stacked_items(&mut items);

        let state = list.scroll_state();
        println!(
            "frame {frame}: first={} +{:.1}px laid_out={:?}",
            state.first_visible_index,
            state.first_visible_offset,
            list.laid_out_range()
        );
        for item in &items {
            let t = item.transform;
            // Fully faded cards are skipped, like a renderer would.
            if t.is_identity() || t.is_invisible() {
                continue;
            }
            let visual = item.visual_bounds();
            println!(
                "  card {:>2}: depth={:.3} scale={:.3} ty={:.1} alpha={:.2} shadow={:.2}",
                item.index, t.offset, t.scale, t.translate_y, t.alpha, t.shadow_alpha,
            );
            println!(
                "           ({:.1}, {:.1}) .. ({:.1}, {:.1})",
                visual.x,
                visual.y,
                visual.right(),
                visual.bottom()
            );
        }

        for item in &items {
            list.on_item_measured(item.index, laid_out_height(item.index));
        }
    }

    let stats = list.memo_stats();
    println!("memo: hits={} misses={}", stats.hits, stats.misses);
}
