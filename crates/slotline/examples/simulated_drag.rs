//! Simulated Drag - a scripted gesture over a headless stack
//!
//! Drags the first of five items down past the third with a fixed frame step,
//! printing the visual layout after every frame, then lets the snap animation
//! run and prints the committed order.
//!
//! Run with `RUST_LOG=slotline=trace` to see every reflow step.

use slotline::{
    Axis, ItemId, ListView, Release, ReorderList, SlotId, StackView, TweenAnimator, Vec2,
};
use slotline_core::logging;
use slotline_core::profiling::{ProfilingBackend, init_profiling, new_frame};

const ITEM_SIZE: Vec2 = Vec2::new(240.0, 32.0);
const FRAME_TIME: f32 = 1.0 / 60.0;

fn print_layout(view: &StackView, names: &[(ItemId, &str)]) {
    let name = |item: ItemId| {
        names
            .iter()
            .find(|(id, _)| *id == item)
            .map(|(_, name)| *name)
            .unwrap_or("?")
    };

    let mut line = String::new();
    for slot in view.slots() {
        let rect = view.visual_rect(*slot).unwrap_or_default();
        let label = match slot {
            SlotId::Placeholder => "[ ]",
            SlotId::Item(item) => name(*item),
        };
        line.push_str(&format!("{label}@{:.0} ", rect.y));
    }
    for (item, _) in names {
        if let Some(rect) = view.floating(*item) {
            line.push_str(&format!("| dragging {}@{:.0}", name(*item), rect.y));
        }
    }
    println!("{line}");
}

fn main() {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let names: Vec<(ItemId, &str)> = ["alpha", "bravo", "charlie", "delta", "echo"]
        .into_iter()
        .map(|name| (ItemId::new(name), name))
        .collect();
    let items: Vec<ItemId> = names.iter().map(|(id, _)| *id).collect();

    let mut list = ReorderList::new(items.clone()).expect("items are unique");
    let mut view = StackView::new(Vec2::ZERO, ITEM_SIZE, Axis::Vertical, items);
    let mut animator = TweenAnimator::new();

    let start = Vec2::new(ITEM_SIZE.x / 2.0, ITEM_SIZE.y / 2.0);
    list.pointer_down(start, &mut view);
    print_layout(&view, &names);

    // Drag down three and a half slots over 30 frames
    let travel = ITEM_SIZE.y * 3.5;
    for frame in 1..=30 {
        new_frame();
        let pointer = start + Vec2::new(0.0, travel * frame as f32 / 30.0);
        if let Some(shift) = list.pointer_move(pointer, &mut view) {
            println!(
                "frame {frame}: reflow {:?}, {} item(s) moved",
                shift.direction,
                shift.moved.len()
            );
            print_layout(&view, &names);
        }
    }

    let Some(Release::Animating(handle)) = list.pointer_up(&mut view, &mut animator) else {
        println!("released without animation: {:?}", list.order());
        return;
    };

    while animator.is_animating() {
        new_frame();
        let finished = animator.update(FRAME_TIME);
        if let Some(position) = animator.position(handle) {
            if let Some(item) = list.phase().dragged_item() {
                view.set_absolute_position(item, position);
            }
        }
        for done in finished {
            if let Some(reordered) = list.animation_finished(done, &mut view) {
                println!("moved from {} to {}", reordered.from, reordered.to);
            }
        }
    }

    print_layout(&view, &names);
    let order: Vec<&str> = list
        .order()
        .into_iter()
        .filter_map(|item| names.iter().find(|(id, _)| *id == item).map(|(_, name)| *name))
        .collect();
    println!("final order: {order:?}");
}
