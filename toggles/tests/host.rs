use std::sync::{Arc, Mutex};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use toggles::{Checkbox, HostError, Host, State, Switch, WidgetResult};
use webdom::query::by_text;
use webdom::{Key, Modifiers};

fn key(code: KeyCode) -> CrosstermEvent {
    CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_widgets_occupy_slots_in_mount_order() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new().label("A"));
    let b = host.mount(Switch::new());

    assert_eq!(host.len(), 2);
    assert_eq!(host.root_of(&a).unwrap().to_string(), "/0");
    assert_eq!(host.root_of(&b).unwrap().to_string(), "/1");
    assert_eq!(host.control(&b).unwrap().to_string(), "/1/0");
}

#[test]
fn test_events_reach_only_their_widget() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new());
    let b = host.mount(Checkbox::new());

    let control = host.control(&b).unwrap();
    host.click(&control);

    assert!(!host.is_checked(&a).unwrap());
    assert!(host.is_checked(&b).unwrap());
}

#[test]
fn test_click_outside_controls_is_ignored() {
    let mut host = Host::new();
    let cb = host.mount(Checkbox::new());

    // The wrapper div is not inside a label.
    let wrapper = host.root_of(&cb).unwrap();
    assert_eq!(host.click(&wrapper), WidgetResult::Ignored);
    assert!(!host.is_checked(&cb).unwrap());
}

#[test]
fn test_unmount_keeps_later_widgets_intact() {
    let mut host = Host::new();
    let first = host.mount(Checkbox::new());
    let second = host.mount(Checkbox::new().indeterminate(true).label("Second"));

    let control = host.control(&second).unwrap();
    host.click(&control);
    assert!(host.is_checked(&second).unwrap());

    host.unmount(first).unwrap();
    assert_eq!(host.len(), 1);

    let control = host.control(&second).unwrap();
    assert_eq!(control.to_string(), "/0/0/0");
    let native = host.document().native(&control).unwrap();
    assert!(native.checked);
    assert!(native.indeterminate);

    let label = by_text(host.document().root(), "Second").unwrap();
    host.click(&label);
    assert!(!host.is_checked(&second).unwrap());
}

#[test]
fn test_unmount_keeps_focus_on_the_same_widget() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new());
    let b = host.mount(Checkbox::new());
    let c = host.mount(Checkbox::new());

    assert!(host.focus_widget(&b).unwrap());
    host.unmount(a).unwrap();
    assert_eq!(host.focus().focused(), Some(&host.control(&b).unwrap()));

    assert_eq!(host.press(Key::Char(' '), Modifiers::new()), WidgetResult::Changed);
    assert!(host.is_checked(&b).unwrap());
    assert!(!host.is_checked(&c).unwrap());
}

#[test]
fn test_unmount_of_focused_widget_clears_focus() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new());
    let b = host.mount(Checkbox::new());

    host.focus_widget(&a).unwrap();
    host.unmount(a).unwrap();
    assert_eq!(host.focus().focused(), None);

    assert_eq!(host.press(Key::Char(' '), Modifiers::new()), WidgetResult::Ignored);
    assert!(!host.is_checked(&b).unwrap());
}

#[test]
fn test_stale_handle_is_rejected() {
    let mut host = Host::new();
    let cb = host.mount(Checkbox::new());
    let stale = cb;
    host.unmount(cb).unwrap();

    assert_eq!(
        host.is_checked(&stale),
        Err(HostError::UnknownInstance(stale.id()))
    );
    assert_eq!(
        host.rerender(&stale, Checkbox::new()),
        Err(HostError::UnknownInstance(stale.id()))
    );
    assert!(host.unmount(stale).is_err());
    assert!(host.is_empty());
}

#[test]
fn test_space_toggles_focused_control() {
    let mut host = Host::new();
    let sw = host.mount(Switch::new());

    // Nothing focused yet.
    assert_eq!(host.press(Key::Char(' '), Modifiers::new()), WidgetResult::Ignored);

    assert!(host.focus_widget(&sw).unwrap());
    assert_eq!(host.press(Key::Char(' '), Modifiers::new()), WidgetResult::Changed);
    assert!(host.is_checked(&sw).unwrap());

    // Enter does not toggle a checkbox input.
    assert_eq!(host.press(Key::Enter, Modifiers::new()), WidgetResult::Ignored);
    assert!(host.is_checked(&sw).unwrap());
}

#[test]
fn test_tab_skips_disabled_controls() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new());
    let _locked = host.mount(Checkbox::new().disabled(true));
    let c = host.mount(Switch::new());

    assert_eq!(host.focus_next(), Some(host.control(&a).unwrap()));
    assert_eq!(host.focus_next(), Some(host.control(&c).unwrap()));
    assert_eq!(host.focus_next(), Some(host.control(&a).unwrap()));
    assert_eq!(host.focus_prev(), Some(host.control(&c).unwrap()));
}

#[test]
fn test_terminal_events_drive_focus_and_toggle() {
    let mut host = Host::new();
    let a = host.mount(Checkbox::new());
    let b = host.mount(Switch::new());

    host.handle_terminal_events(&[
        key(KeyCode::Tab),
        key(KeyCode::Tab),
        key(KeyCode::Char(' ')),
    ]);
    assert!(!host.is_checked(&a).unwrap());
    assert!(host.is_checked(&b).unwrap());

    let results = host.handle_terminal_events(&[key(KeyCode::BackTab), key(KeyCode::Char(' '))]);
    assert_eq!(results.last(), Some(&WidgetResult::Changed));
    assert!(host.is_checked(&a).unwrap());
}

#[test]
fn test_focus_survives_rerender() {
    let mut host = Host::new();
    let cb = host.mount(Checkbox::new());
    host.focus_widget(&cb).unwrap();

    host.rerender(&cb, Checkbox::new().label("Now labelled")).unwrap();
    assert_eq!(host.focus().focused(), Some(&host.control(&cb).unwrap()));
}

#[test]
fn test_owner_state_drives_controlled_widget() {
    let mut host = Host::new();
    let owner = State::new(false);
    let calls = Arc::new(Mutex::new(0));

    let props = |owner: &State<bool>| {
        let owner_for_handler = owner.clone();
        let calls = Arc::clone(&calls);
        Checkbox::new().checked(owner.get()).on_change(move |checked| {
            *calls.lock().unwrap() += 1;
            owner_for_handler.set(checked);
        })
    };

    let cb = host.mount(props(&owner));
    let control = host.control(&cb).unwrap();

    for expected in [true, false, true] {
        host.click(&control);
        assert_eq!(owner.get(), expected);
        // Until the owner renders, the widget still shows the old value.
        assert_eq!(host.is_checked(&cb).unwrap(), !expected);

        host.rerender(&cb, props(&owner)).unwrap();
        assert_eq!(host.is_checked(&cb).unwrap(), expected);
    }

    assert_eq!(*calls.lock().unwrap(), 3);
}

#[test]
fn test_document_html_contains_every_widget() {
    let mut host = Host::new();
    host.mount(Checkbox::new().id("terms").label("Accept"));
    host.mount(Switch::new().aria_label("Wi-Fi"));

    let html = host.document().to_html();
    assert!(html.contains(r#"id="terms""#));
    assert!(html.contains(r#"<label class="ml-2 text-base cursor-pointer" for="terms">Accept</label>"#));
    assert!(html.contains(r#"aria-label="Wi-Fi""#));
}
