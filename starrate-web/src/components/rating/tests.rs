use std::cell::RefCell;
use std::rc::Rc;

use starrate_core::Key;
use yew::{AttrValue, Callback, Children, Classes};

use super::{RatingProps, apply_rating, apply_size, build_accessor, next_id};

fn baseline_props() -> RatingProps {
    RatingProps {
        size: 5,
        rating: None,
        readonly: false,
        disabled: false,
        show_cancel_icon: false,
        icon: AttrValue::Static("★"),
        cancel_icon: AttrValue::Static("⊘"),
        id: None,
        aria_label: AttrValue::Static("star"),
        aria_labelledby: AttrValue::Static("Star rating"),
        class: Classes::new(),
        on_rate_change: Callback::noop(),
        on_rate_cancel: Callback::noop(),
        on_touched: Callback::noop(),
        render_star: None,
        children: Children::default(),
    }
}

#[test]
fn apply_size_resizes_and_clamps_zero_to_one() {
    let mut accessor = build_accessor(&baseline_props());
    apply_size(&mut accessor, 8);
    assert_eq!(accessor.state().size(), 8);
    apply_size(&mut accessor, 0);
    assert_eq!(accessor.state().size(), 1);
}

#[test]
fn zero_size_prop_builds_single_slot_widget() {
    let mut props = baseline_props();
    props.size = 0;
    let accessor = build_accessor(&props);
    assert_eq!(accessor.state().size(), 1);
}

#[test]
fn apply_rating_ignores_zero_and_applies_positive() {
    let mut accessor = build_accessor(&baseline_props());
    apply_rating(&mut accessor, 3);
    assert_eq!(accessor.state().selected(), Some(2));
    apply_rating(&mut accessor, 0);
    assert_eq!(accessor.state().selected(), Some(2), "zero must not clear");
}

#[test]
fn accessor_reflects_configuration_props() {
    let mut props = baseline_props();
    props.size = 6;
    props.rating = Some(4);
    props.readonly = true;
    props.show_cancel_icon = true;

    let accessor = build_accessor(&props);
    let state = accessor.state();
    assert_eq!(state.size(), 6);
    assert_eq!(state.selected(), Some(3));
    assert!(state.readonly());
    assert!(state.show_cancel_icon());
    let hovered: Vec<bool> = state.items().iter().map(|item| item.hovered).collect();
    assert_eq!(hovered, vec![true, true, true, true, false, false]);
}

#[test]
fn zero_rating_prop_is_ignored() {
    let mut props = baseline_props();
    props.rating = Some(0);
    let accessor = build_accessor(&props);
    assert_eq!(accessor.state().selected(), None);
}

#[test]
fn prop_callbacks_receive_commit_notifications() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let touches = Rc::new(RefCell::new(0usize));

    let mut props = baseline_props();
    props.size = 6;
    let sink = Rc::clone(&changes);
    props.on_rate_change = Callback::from(move |value| sink.borrow_mut().push(value));
    let sink = Rc::clone(&touches);
    props.on_touched = Callback::from(move |()| *sink.borrow_mut() += 1);

    let mut accessor = build_accessor(&props);
    accessor.commit_selection(3);
    assert_eq!(*changes.borrow(), vec![4]);
    assert_eq!(*touches.borrow(), 1);
}

#[test]
fn prop_callbacks_receive_cancel_notifications() {
    let cancels = Rc::new(RefCell::new(0usize));
    let mut props = baseline_props();
    let sink = Rc::clone(&cancels);
    props.on_rate_cancel = Callback::from(move |()| *sink.borrow_mut() += 1);

    let mut accessor = build_accessor(&props);
    accessor.commit_selection(2);
    accessor.cancel_selection();
    assert_eq!(*cancels.borrow(), 1);
    assert_eq!(accessor.state().selected(), None);
}

#[test]
fn keyboard_commits_flow_through_prop_callbacks() {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let mut props = baseline_props();
    props.size = 6;
    let sink = Rc::clone(&changes);
    props.on_rate_change = Callback::from(move |value| sink.borrow_mut().push(value));

    let mut accessor = build_accessor(&props);
    for _ in 0..4 {
        assert!(accessor.handle_key(Key::ArrowRight));
    }
    assert_eq!(*changes.borrow(), vec![1, 2, 3, 4]);
    assert_eq!(accessor.state().selected(), Some(3));
}

#[test]
fn generated_ids_are_unique() {
    let first = next_id();
    let second = next_id();
    assert!(first.starts_with("star-rating-"));
    assert_ne!(first, second);
}
