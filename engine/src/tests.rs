//! Unit tests for the navigation state machine.

use agriview_types::{NavigationIntent, ParcelId, ScreenKind};

use crate::App;
use crate::ui::MenuState;

fn test_app() -> App {
    App::new()
}

#[test]
fn initial_state_is_dashboard_parcel_a_menu_closed() {
    let app = test_app();
    assert_eq!(app.screen(), ScreenKind::Dashboard);
    assert_eq!(app.selected_parcel().as_str(), "A");
    assert!(!app.menu_open());
}

#[test]
fn navigate_to_activates_every_kind() {
    let mut app = test_app();
    for &kind in ScreenKind::all() {
        app.navigate_to(kind);
        assert_eq!(app.screen(), kind);
    }
}

#[test]
fn navigate_to_map_sets_screen_and_parcel() {
    let mut app = test_app();
    app.navigate_to_map(ParcelId::new("B"));
    assert_eq!(app.screen(), ScreenKind::Map);
    assert_eq!(app.selected_parcel().as_str(), "B");
}

#[test]
fn navigate_to_detail_sets_screen_and_parcel() {
    let mut app = test_app();
    app.navigate_to_parcel_detail(ParcelId::new("C"));
    assert_eq!(app.screen(), ScreenKind::ParcelDetail);
    assert_eq!(app.selected_parcel().as_str(), "C");
}

#[test]
fn parcel_selection_is_sticky() {
    let mut app = test_app();
    app.navigate_to_map(ParcelId::new("C"));
    app.navigate_to(ScreenKind::Dashboard);
    assert_eq!(app.screen(), ScreenKind::Dashboard);
    assert_eq!(app.selected_parcel().as_str(), "C");

    app.navigate_to(ScreenKind::Settings);
    app.navigate_to(ScreenKind::Weather);
    assert_eq!(app.selected_parcel().as_str(), "C");
}

#[test]
fn unknown_parcel_id_passes_through_unmodified() {
    let mut app = test_app();
    app.navigate_to_map(ParcelId::new("does-not-exist"));
    assert_eq!(app.selected_parcel().as_str(), "does-not-exist");
}

#[test]
fn open_and_close_menu_are_idempotent() {
    let mut app = test_app();
    app.open_menu();
    app.open_menu();
    assert!(app.menu_open());
    app.close_menu();
    app.close_menu();
    assert!(!app.menu_open());
}

#[test]
fn menu_navigate_changes_screen_and_closes_menu() {
    let mut app = test_app();
    app.open_menu();
    app.handle_menu_navigate(ScreenKind::Alerts);
    assert_eq!(app.screen(), ScreenKind::Alerts);
    assert!(!app.menu_open());

    // Equivalent to the explicit sequence.
    let mut other = test_app();
    other.open_menu();
    other.navigate_to(ScreenKind::Alerts);
    other.close_menu();
    assert_eq!(app.screen(), other.screen());
    assert_eq!(app.menu_open(), other.menu_open());
}

#[test]
fn menu_activate_navigates_to_highlighted_destination() {
    let mut app = test_app();
    app.open_menu();
    app.menu_mut().move_down();
    let expected = app.menu().selected();
    assert_eq!(expected, MenuState::destinations()[1]);
    app.menu_activate();
    assert_eq!(app.screen(), expected);
    assert!(!app.menu_open());
}

#[test]
fn dispatch_goto_closes_menu_when_open() {
    let mut app = test_app();
    app.open_menu();
    app.dispatch(NavigationIntent::GoTo(ScreenKind::History));
    assert_eq!(app.screen(), ScreenKind::History);
    assert!(!app.menu_open());
}

#[test]
fn dispatch_routes_every_intent() {
    let mut app = test_app();
    app.dispatch(NavigationIntent::OpenMenu);
    assert!(app.menu_open());
    app.dispatch(NavigationIntent::CloseMenu);
    assert!(!app.menu_open());
    app.dispatch(NavigationIntent::GoToMapFor(ParcelId::new("B")));
    assert_eq!(app.screen(), ScreenKind::Map);
    assert_eq!(app.selected_parcel().as_str(), "B");
    app.dispatch(NavigationIntent::GoToDetailFor(ParcelId::new("A")));
    assert_eq!(app.screen(), ScreenKind::ParcelDetail);
    assert_eq!(app.selected_parcel().as_str(), "A");
    app.dispatch(NavigationIntent::GoTo(ScreenKind::Help));
    assert_eq!(app.screen(), ScreenKind::Help);
}

#[test]
fn end_to_end_navigation_scenario() {
    let mut app = test_app();
    assert_eq!(app.screen(), ScreenKind::Dashboard);
    assert_eq!(app.selected_parcel().as_str(), "A");
    assert!(!app.menu_open());

    app.open_menu();
    assert_eq!(app.screen(), ScreenKind::Dashboard);
    assert_eq!(app.selected_parcel().as_str(), "A");
    assert!(app.menu_open());

    app.handle_menu_navigate(ScreenKind::Map);
    assert_eq!(app.screen(), ScreenKind::Map);
    assert_eq!(app.selected_parcel().as_str(), "A");
    assert!(!app.menu_open());

    app.navigate_to_map(ParcelId::new("C"));
    assert_eq!(app.screen(), ScreenKind::Map);
    assert_eq!(app.selected_parcel().as_str(), "C");
    assert!(!app.menu_open());

    app.navigate_to(ScreenKind::Settings);
    assert_eq!(app.screen(), ScreenKind::Settings);
    assert_eq!(app.selected_parcel().as_str(), "C");
    assert!(!app.menu_open());
}

#[test]
fn dashboard_cursor_drives_parcel_navigation() {
    let mut app = test_app();
    app.dashboard_mut().move_down();
    app.view_highlighted_parcel_map();
    assert_eq!(app.screen(), ScreenKind::Map);
    assert_eq!(app.selected_parcel().as_str(), "B");

    app.navigate_to(ScreenKind::Dashboard);
    app.dashboard_mut().move_down();
    app.view_highlighted_parcel_detail();
    assert_eq!(app.screen(), ScreenKind::ParcelDetail);
    assert_eq!(app.selected_parcel().as_str(), "C");
}

#[test]
fn quit_flag_is_sticky() {
    let mut app = test_app();
    assert!(!app.should_quit());
    app.quit();
    assert!(app.should_quit());
}

#[test]
fn tick_wraps_without_panicking() {
    let mut app = test_app();
    app.tick();
    app.tick();
    assert_eq!(app.tick_count(), 2);
}
