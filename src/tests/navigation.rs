use crate::utils::NavigationDrawerState;

#[test]
fn test_drawer_starts_closed() {
    assert_eq!(NavigationDrawerState::default(), NavigationDrawerState::Closed);
    assert!(!NavigationDrawerState::default().is_open());
}

#[test]
fn test_open_and_close_are_idempotent() {
    let mut drawer = NavigationDrawerState::default();
    drawer.open();
    drawer.open();
    assert_eq!(drawer, NavigationDrawerState::Open);

    drawer.close();
    drawer.close();
    assert_eq!(drawer, NavigationDrawerState::Closed);
}

#[test]
fn test_selecting_destination_closes_drawer() {
    let mut drawer = NavigationDrawerState::Open;
    drawer.select_destination();
    assert_eq!(drawer, NavigationDrawerState::Closed);

    drawer.select_destination();
    assert_eq!(drawer, NavigationDrawerState::Closed);
}
