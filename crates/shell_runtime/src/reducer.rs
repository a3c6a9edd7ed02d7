//! Lifecycle events, side-effect intents, and the shell transition logic.

use serde::{Deserialize, Serialize};

use crate::model::{Platform, WindowGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle signals delivered to [`reduce_shell`] by the host runtime.
pub enum ShellEvent {
    /// One-time runtime-ready signal, delivered before any window exists.
    Ready,
    /// The user re-invoked the application (dock/taskbar activation).
    Activate,
    /// The last open window was closed.
    AllWindowsClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Side-effect intents emitted by [`reduce_shell`] for the host to execute.
pub enum ShellEffect {
    /// Create a window, install a fresh permission handler on its content
    /// session, and navigate it to the served bundle.
    CreateWindow {
        /// Size of the window to create.
        geometry: WindowGeometry,
    },
    /// Terminate the process through the runtime's quit path.
    Quit,
}

/// Computes the effects of a lifecycle event.
///
/// `open_windows` is the host's current window count; the shell itself keeps
/// no window bookkeeping. `Ready` always creates the main window, `Activate`
/// replenishes it only when none is open, and `AllWindowsClosed` quits
/// everywhere except on platforms that keep a windowless process resident.
pub fn reduce_shell(
    event: ShellEvent,
    open_windows: usize,
    platform: Platform,
) -> Vec<ShellEffect> {
    match event {
        ShellEvent::Ready => vec![ShellEffect::CreateWindow {
            geometry: WindowGeometry::main_window(),
        }],
        ShellEvent::Activate => {
            if open_windows == 0 {
                vec![ShellEffect::CreateWindow {
                    geometry: WindowGeometry::main_window(),
                }]
            } else {
                Vec::new()
            }
        }
        ShellEvent::AllWindowsClosed => {
            if platform.keeps_resident_when_windowless() {
                Vec::new()
            } else {
                vec![ShellEffect::Quit]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_main_window() -> ShellEffect {
        ShellEffect::CreateWindow {
            geometry: WindowGeometry::main_window(),
        }
    }

    #[test]
    fn ready_creates_exactly_one_window() {
        let effects = reduce_shell(ShellEvent::Ready, 0, Platform::Linux);
        assert_eq!(effects, vec![create_main_window()]);
    }

    #[test]
    fn activate_replenishes_only_when_no_window_is_open() {
        let effects = reduce_shell(ShellEvent::Activate, 0, Platform::MacOs);
        assert_eq!(effects, vec![create_main_window()]);

        for open_windows in [1, 2, 5] {
            let effects = reduce_shell(ShellEvent::Activate, open_windows, Platform::MacOs);
            assert_eq!(effects, Vec::new(), "{open_windows} open windows");
        }
    }

    #[test]
    fn every_created_window_uses_the_fixed_geometry() {
        for event in [ShellEvent::Ready, ShellEvent::Activate] {
            for effect in reduce_shell(event, 0, Platform::Linux) {
                let ShellEffect::CreateWindow { geometry } = effect else {
                    panic!("unexpected effect {effect:?}");
                };
                assert_eq!(geometry.width, 1200);
                assert_eq!(geometry.height, 700);
            }
        }
    }

    #[test]
    fn all_windows_closed_quits_everywhere_except_macos() {
        for platform in [Platform::Linux, Platform::Windows, Platform::Other] {
            let effects = reduce_shell(ShellEvent::AllWindowsClosed, 0, platform);
            assert_eq!(effects, vec![ShellEffect::Quit], "{platform:?}");
        }

        let effects = reduce_shell(ShellEvent::AllWindowsClosed, 0, Platform::MacOs);
        assert_eq!(effects, Vec::new());
    }
}
