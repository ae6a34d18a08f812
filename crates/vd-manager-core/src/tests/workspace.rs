use crate::{WindowHandle, WorkspaceBackend, WorkspaceSwitcher, tests::fakes::FakeDesktops};

/// WHAT: Both directions are no-ops with a single desktop
/// WHY: The degenerate case must neither throw nor wrap
#[test]
fn given_single_desktop_when_switching_either_way_then_nothing_happens() {
    // Given: One desktop
    let desktops = FakeDesktops::with_count(1);
    let mut switcher = WorkspaceSwitcher::new(desktops.clone());

    // When: Switching left and right
    let left = switcher.switch_left();
    let right = switcher.switch_right();

    // Then: No switch happened at all
    assert!(!left);
    assert!(!right);
    assert!(desktops.handle().borrow().switch_calls.is_empty());
}

/// WHAT: Switching left from the leftmost desktop wraps to the rightmost
/// WHY: Wraparound is the UX contract, not an edge-case omission
#[test]
fn given_three_desktops_at_leftmost_when_switching_left_then_wraps_to_rightmost() {
    // Given: Desktops [0, 1, 2], active 0
    let desktops = FakeDesktops::with_count(3);
    let mut switcher = WorkspaceSwitcher::new(desktops.clone());

    // When: Switching left
    assert!(switcher.switch_left());

    // Then: Active desktop is 2
    assert_eq!(desktops.handle().borrow().active, 2);
}

/// WHAT: Switching right from the rightmost desktop wraps to the leftmost
/// WHY: Wraparound applies at both ends
#[test]
fn given_three_desktops_at_rightmost_when_switching_right_then_wraps_to_leftmost() {
    // Given: Desktops [0, 1, 2], active 2
    let desktops = FakeDesktops::with_count(3);
    desktops.handle().borrow_mut().active = 2;
    let mut switcher = WorkspaceSwitcher::new(desktops.clone());

    // When: Switching right
    assert!(switcher.switch_right());

    // Then: Active desktop is 0
    assert_eq!(desktops.handle().borrow().active, 0);
}

/// WHAT: Left then right restores the original desktop
/// WHY: Directional navigation must be symmetric
#[test]
fn given_two_desktops_when_switching_left_then_right_then_original_active() {
    // Given: Desktops [0, 1], active 1
    let desktops = FakeDesktops::with_count(2);
    desktops.handle().borrow_mut().active = 1;
    let mut switcher = WorkspaceSwitcher::new(desktops.clone());

    // When: Left, then right
    assert!(switcher.switch_left());
    assert!(switcher.switch_right());

    // Then: Back where we started
    assert_eq!(desktops.handle().borrow().active, 1);
}

/// WHAT: toggle_pin flips the OS-owned pin status both ways
/// WHY: Pin state lives in the OS; the toggle is a pure pass-through
#[test]
fn given_window_when_toggling_pin_twice_then_status_round_trips() {
    // Given: An unpinned window
    let desktops = FakeDesktops::with_count(2);
    let mut switcher = WorkspaceSwitcher::new(desktops.clone());
    let window = WindowHandle(42);

    // When/Then: First toggle pins
    switcher.toggle_pin(window);
    assert!(desktops.is_pinned(window));

    // When/Then: Second toggle unpins
    switcher.toggle_pin(window);
    assert!(!desktops.is_pinned(window));
}

/// WHAT: Membership is re-read from the backend after a switch
/// WHY: is_on_active_desktop results must never be cached across switches
#[test]
fn given_window_on_desktop_one_when_switching_then_membership_follows_active() {
    // Given: A window on desktop 1, active desktop 0
    let desktops = FakeDesktops::with_count(2);
    let window = WindowHandle(7);
    desktops.put_window(window, 1);
    let mut switcher = WorkspaceSwitcher::new(desktops);
    assert!(!switcher.is_on_active_desktop(window));

    // When: Switching right onto desktop 1
    assert!(switcher.switch_right());

    // Then: The same query now reports the window as local
    assert!(switcher.is_on_active_desktop(window));
}
