//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for reordering flat lists in Leptos.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dragged row will land
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Take the index of this row
    Row(u32),
    /// Move to the end of the list
    End,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Move the element whose key is `dragged` to the position described by
/// `target`. Returns false when nothing moved.
pub fn reorder<T, F>(items: &mut Vec<T>, key: F, dragged: u32, target: DropTarget) -> bool
where
    F: Fn(&T) -> u32,
{
    let Some(from) = items.iter().position(|item| key(item) == dragged) else {
        return false;
    };

    let to = match target {
        DropTarget::Row(id) if id == dragged => return false,
        DropTarget::Row(id) => match items.iter().position(|item| key(item) == id) {
            Some(idx) => idx,
            None => return false,
        },
        DropTarget::End => items.len() - 1,
    };

    if from == to {
        return false;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
    true
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            let _ = clear.try_set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore presses on form controls inside the row
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(row_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for rows
pub fn make_on_row_mouseenter(dnd: DndSignals, row_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            if dragging != row_id {
                dnd.drop_target_write.set(Some(DropTarget::Row(row_id)));
            }
        }
    }
}

/// Create mouseenter handler for the trailing drop zone
pub fn make_on_end_mouseenter(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::End));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Mousemove body: promote a pending press to a drag once the pointer
/// moves past the threshold. No-op once the signals are disposed.
pub fn track_pointer(dnd: DndSignals, x: i32, y: i32) {
    let Some(Some(pending)) = dnd.pending_id_read.try_get_untracked() else {
        return;
    };
    if dnd.dragging_id_read.try_get_untracked() != Some(None) {
        return;
    }
    let (Some(start_x), Some(start_y)) = (dnd.start_x_read.try_get_untracked(), dnd.start_y_read.try_get_untracked()) else {
        return;
    };

    if (x - start_x).abs() > DRAG_THRESHOLD_PX || (y - start_y).abs() > DRAG_THRESHOLD_PX {
        dnd.dragging_id_write.set(Some(pending));
    }
}

/// Mouseup body: clear drag state and return the completed drop, if any.
/// Returns `None` without touching anything once the signals are disposed.
pub fn release_drag(dnd: DndSignals) -> Option<(u32, DropTarget)> {
    let dragging = dnd.dragging_id_read.try_get_untracked()?;
    let target = dnd.drop_target_read.try_get_untracked()?;
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dragging.zip(target)
}

type MouseClosure = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MouseEvent)>;

/// Document listeners installed by `bind_global_mouseup`.
/// Dropping the guard removes them.
#[must_use = "listeners are removed as soon as the guard is dropped"]
pub struct GlobalListeners {
    mousemove: MouseClosure,
    mouseup: MouseClosure,
}

impl GlobalListeners {
    fn each(&self) -> [(&'static str, &MouseClosure); 2] {
        [("mousemove", &self.mousemove), ("mouseup", &self.mouseup)]
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            for (event, closure) in self.each() {
                let _ = doc.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }
    }
}

/// Bind document mousemove (drag start) and mouseup (drop detection).
/// Keep the returned guard for as long as the list is mounted.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F) -> GlobalListeners
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    let mousemove = MouseClosure::new(move |ev: web_sys::MouseEvent| {
        track_pointer(dnd, ev.client_x(), ev.client_y());
    });

    let mouseup = MouseClosure::new(move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.try_get_untracked().is_none() {
            return;
        }
        let dropped = release_drag(dnd);
        end_drag(&dnd);

        // Plain clicks fall through to the element's own click handler
        if let Some((dragged, target)) = dropped {
            on_drop(dragged, target);
        }
    });

    let listeners = GlobalListeners { mousemove, mouseup };
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        for (event, closure) in listeners.each() {
            let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_signals() -> (Owner, DndSignals) {
        let owner = Owner::new();
        let dnd = owner.with(create_dnd_signals);
        (owner, dnd)
    }

    fn ids(items: &[(u32, &str)]) -> Vec<u32> {
        items.iter().map(|(id, _)| *id).collect()
    }

    #[test]
    fn test_reorder_moves_down() {
        let mut items = vec![(1, "a"), (2, "b"), (3, "c"), (4, "d")];
        assert!(reorder(&mut items, |i| i.0, 1, DropTarget::Row(3)));
        assert_eq!(ids(&items), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_reorder_moves_up() {
        let mut items = vec![(1, "a"), (2, "b"), (3, "c"), (4, "d")];
        assert!(reorder(&mut items, |i| i.0, 4, DropTarget::Row(2)));
        assert_eq!(ids(&items), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_reorder_to_end() {
        let mut items = vec![(1, "a"), (2, "b"), (3, "c")];
        assert!(reorder(&mut items, |i| i.0, 1, DropTarget::End));
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut items = vec![(1, "a"), (2, "b")];
        assert!(!reorder(&mut items, |i| i.0, 1, DropTarget::Row(1)));
        assert!(!reorder(&mut items, |i| i.0, 9, DropTarget::Row(1)));
        assert!(!reorder(&mut items, |i| i.0, 1, DropTarget::Row(9)));
        assert!(!reorder(&mut items, |i| i.0, 2, DropTarget::End));
        assert_eq!(ids(&items), vec![1, 2]);
    }

    #[test]
    fn test_pointer_starts_drag_past_threshold() {
        let (_owner, dnd) = live_signals();
        dnd.pending_id_write.set(Some(7));
        dnd.start_x_write.set(100);
        dnd.start_y_write.set(100);

        track_pointer(dnd, 103, 102);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);

        track_pointer(dnd, 110, 100);
        assert_eq!(dnd.dragging_id_read.get_untracked(), Some(7));
    }

    #[test]
    fn test_release_returns_drop_and_clears_state() {
        let (_owner, dnd) = live_signals();
        dnd.pending_id_write.set(Some(2));
        dnd.dragging_id_write.set(Some(2));
        dnd.drop_target_write.set(Some(DropTarget::Row(5)));

        assert_eq!(release_drag(dnd), Some((2, DropTarget::Row(5))));
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
    }

    #[test]
    fn test_release_without_target_is_plain_click() {
        let (_owner, dnd) = live_signals();
        dnd.pending_id_write.set(Some(2));
        assert_eq!(release_drag(dnd), None);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
    }

    #[test]
    fn test_handlers_after_unmount_do_nothing() {
        let (owner, dnd) = live_signals();
        dnd.pending_id_write.set(Some(3));
        dnd.dragging_id_write.set(Some(3));
        dnd.drop_target_write.set(Some(DropTarget::End));
        owner.cleanup();

        track_pointer(dnd, 500, 500);
        assert_eq!(release_drag(dnd), None);
    }
}
