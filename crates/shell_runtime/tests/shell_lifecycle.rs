use pretty_assertions::assert_eq;
use shell_runtime::{
    drive, MemoryShellHost, Platform, ShellEvent, WindowGeometry, MAIN_WINDOW_HEIGHT,
    MAIN_WINDOW_WIDTH,
};

#[test]
fn startup_opens_exactly_one_main_window() {
    let mut host = MemoryShellHost::new();
    drive(&mut host, ShellEvent::Ready, Platform::current()).expect("drive ready");

    assert_eq!(host.open_windows.len(), 1);
    assert_eq!(
        host.open_windows[0],
        WindowGeometry {
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
        }
    );
    assert_eq!(host.handler_installs, 1);
    assert_eq!(host.navigations, 1);
}

#[test]
fn activate_while_a_window_is_open_changes_nothing() {
    let mut host = MemoryShellHost::new();
    drive(&mut host, ShellEvent::Ready, Platform::MacOs).expect("drive ready");
    let before = host.clone();

    drive(&mut host, ShellEvent::Activate, Platform::MacOs).expect("drive activate");
    assert_eq!(host, before);
}

#[test]
fn reactivation_after_close_recreates_window_with_fresh_handler() {
    let mut host = MemoryShellHost::new();
    drive(&mut host, ShellEvent::Ready, Platform::MacOs).expect("drive ready");

    host.close_all_windows();
    drive(&mut host, ShellEvent::AllWindowsClosed, Platform::MacOs).expect("drive close");
    assert_eq!(host.quit_requests, 0, "macOS stays resident");
    assert_eq!(host.open_windows.len(), 0);

    drive(&mut host, ShellEvent::Activate, Platform::MacOs).expect("drive activate");
    assert_eq!(host.open_windows, vec![WindowGeometry::main_window()]);
    assert_eq!(
        host.handler_installs, 2,
        "replacement window gets its own freshly installed handler"
    );
    assert_eq!(host.navigations, 2);
}

#[test]
fn closing_the_last_window_quits_once_off_macos() {
    for platform in [Platform::Linux, Platform::Windows, Platform::Other] {
        let mut host = MemoryShellHost::new();
        drive(&mut host, ShellEvent::Ready, platform).expect("drive ready");

        host.close_all_windows();
        drive(&mut host, ShellEvent::AllWindowsClosed, platform).expect("drive close");
        assert_eq!(host.quit_requests, 1, "{platform:?}");
    }
}
