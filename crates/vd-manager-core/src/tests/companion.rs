use crate::{
    CompanionRule, CompanionSync, ProcessInfo, ShowState, WindowHandle, WorkspaceSwitcher,
    tests::fakes::{FakeDesktops, FakeOverlay, FakeProcesses, FakeWindows},
};

fn sync_with(
    processes: &FakeProcesses,
    desktops: &FakeDesktops,
    windows: &FakeWindows,
    overlay: &FakeOverlay,
) -> crate::SyncReport {
    let sync = CompanionSync::default();
    let switcher = WorkspaceSwitcher::new(desktops.clone());
    let mut w = windows.clone();
    let mut o = overlay.clone();
    sync.sync(processes, &switcher, &mut w, &mut o)
}

/// WHAT: The rule matches on name prefix and exact title, case-insensitively
/// WHY: One documented matching rule; prefix-only would catch helper children
#[test]
fn given_various_processes_when_matching_then_only_prefix_and_title_match() {
    let rule = CompanionRule::new("gridsetter", "grid");
    let row = |name: &str, title: &str| ProcessInfo {
        name: name.to_string(),
        window: Some(WindowHandle(1)),
        window_title: title.to_string(),
    };

    assert!(rule.matches(&row("GridSetter", "Grid")));
    assert!(rule.matches(&row("gridsetter-2", "grid")));
    assert!(!rule.matches(&row("GridSetter", "Grid - settings")));
    assert!(!rule.matches(&row("gridviewer", "grid")));
    assert!(!rule.matches(&row("explorer", "grid")));
}

/// WHAT: Companions on the active desktop maximize, others minimize
/// WHY: Exactly the relevant grid must be visible after a switch
#[test]
fn given_companions_on_two_desktops_when_syncing_then_local_max_remote_min() {
    // Given: Two companion windows, one on the active desktop 0, one on 1
    let desktops = FakeDesktops::with_count(2);
    let local = WindowHandle(10);
    let remote = WindowHandle(20);
    desktops.put_window(local, 0);
    desktops.put_window(remote, 1);

    let processes = FakeProcesses::default();
    processes.push("gridsetter", Some(local), "grid");
    processes.push("gridsetter", Some(remote), "grid");

    let windows = FakeWindows::default();
    let overlay = FakeOverlay::default();

    // When: Running a sync pass
    let report = sync_with(&processes, &desktops, &windows, &overlay);

    // Then: Local maximized, remote minimized
    assert_eq!(report.maximized, 1);
    assert_eq!(report.minimized, 1);
    let state = windows.handle();
    assert_eq!(state.borrow().placements[&local], ShowState::Maximize);
    assert_eq!(state.borrow().placements[&remote], ShowState::Minimize);
}

/// WHAT: A matching process without a window is skipped silently
/// WHY: The companion may not have finished creating its window yet
#[test]
fn given_companion_without_window_when_syncing_then_skipped_and_rest_processed() {
    // Given: A windowless companion ahead of a normal one
    let desktops = FakeDesktops::with_count(2);
    let ready = WindowHandle(10);
    desktops.put_window(ready, 0);

    let processes = FakeProcesses::default();
    processes.push("gridsetter", None, "");
    processes.push("gridsetter", Some(ready), "grid");

    let windows = FakeWindows::default();
    let overlay = FakeOverlay::default();

    // When: Running a sync pass
    let report = sync_with(&processes, &desktops, &windows, &overlay);

    // Then: The windowless row is skipped, the ready one still handled
    assert_eq!(report.skipped, 1);
    assert_eq!(report.maximized, 1);
}

/// WHAT: The overlay is shown (hidden case) or moved (visible case) only
/// when something was maximized
/// WHY: The focus steal is a perceived-performance hack tied to maximizing
#[test]
fn given_maximized_companion_when_overlay_hidden_then_shown_else_moved() {
    // Given: A companion on the active desktop
    let desktops = FakeDesktops::with_count(2);
    let local = WindowHandle(10);
    desktops.put_window(local, 0);
    let processes = FakeProcesses::default();
    processes.push("gridsetter", Some(local), "grid");
    let windows = FakeWindows::default();
    let overlay = FakeOverlay::default();

    // When: Syncing with the overlay hidden
    sync_with(&processes, &desktops, &windows, &overlay);

    // Then: The overlay was shown, not moved
    assert_eq!(overlay.handle().borrow().shows, 1);
    assert_eq!(overlay.handle().borrow().moves, 0);

    // When: Syncing again with the overlay now visible
    sync_with(&processes, &desktops, &windows, &overlay);

    // Then: The overlay was moved instead of re-shown
    assert_eq!(overlay.handle().borrow().shows, 1);
    assert_eq!(overlay.handle().borrow().moves, 1);
}

/// WHAT: No overlay action when every companion ended up minimized
/// WHY: There is no redraw to defend against without a maximized window
#[test]
fn given_only_remote_companions_when_syncing_then_overlay_untouched() {
    // Given: A companion on the inactive desktop only
    let desktops = FakeDesktops::with_count(2);
    let remote = WindowHandle(20);
    desktops.put_window(remote, 1);
    let processes = FakeProcesses::default();
    processes.push("gridsetter", Some(remote), "grid");
    let windows = FakeWindows::default();
    let overlay = FakeOverlay::default();

    // When: Running a sync pass
    let report = sync_with(&processes, &desktops, &windows, &overlay);

    // Then: Minimized only; the overlay saw no calls
    assert_eq!(report.maximized, 0);
    assert_eq!(report.minimized, 1);
    assert_eq!(overlay.handle().borrow().shows, 0);
    assert_eq!(overlay.handle().borrow().moves, 0);
}

/// WHAT: Non-companion processes are never show-commanded
/// WHY: The synchronizer must not touch unrelated windows
#[test]
fn given_unrelated_process_when_syncing_then_its_window_untouched() {
    // Given: An unrelated window on the active desktop
    let desktops = FakeDesktops::with_count(2);
    let bystander = WindowHandle(99);
    desktops.put_window(bystander, 0);
    let processes = FakeProcesses::default();
    processes.push("editor", Some(bystander), "grid");
    let windows = FakeWindows::default();
    let overlay = FakeOverlay::default();

    // When: Running a sync pass
    sync_with(&processes, &desktops, &windows, &overlay);

    // Then: No show_window calls at all
    assert!(windows.handle().borrow().show_calls.is_empty());
}

/// WHAT: companion_windows lists every matching instance's window
/// WHY: The terminate-companions path works off this set
#[test]
fn given_mixed_processes_when_listing_companion_windows_then_only_matches_returned() {
    let processes = FakeProcesses::default();
    processes.push("gridsetter", Some(WindowHandle(1)), "grid");
    processes.push("gridsetter", None, "");
    processes.push("editor", Some(WindowHandle(3)), "notes");

    let sync = CompanionSync::default();
    let windows = sync.companion_windows(&processes);

    assert_eq!(windows, vec![WindowHandle(1)]);
}
