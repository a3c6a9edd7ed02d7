//! Shared model types for the shell policy and its hosts.

use serde::{Deserialize, Serialize};

/// Width of the main window in logical pixels.
pub const MAIN_WINDOW_WIDTH: u32 = 1200;
/// Height of the main window in logical pixels.
pub const MAIN_WINDOW_HEIGHT: u32 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Logical size of a shell window at creation time.
pub struct WindowGeometry {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
}

impl WindowGeometry {
    /// Geometry of the single main window.
    pub fn main_window() -> Self {
        Self {
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
        }
    }
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self::main_window()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop platform the shell process is running on.
pub enum Platform {
    /// Linux desktops.
    Linux,
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Anything else the host toolchain targets.
    Other,
}

impl Platform {
    /// Platform of the current build target.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Whether the platform convention keeps the process resident after the
    /// last window closes (true only on macOS, where dock reactivation is
    /// expected to bring the window back).
    pub fn keeps_resident_when_windowless(self) -> bool {
        matches!(self, Self::MacOs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Descriptor of a hardware device-access request raised by loaded content.
///
/// Mirrors what webview permission hooks expose: at minimum a device-class
/// tag, absent when the webview does not classify the request.
pub struct DevicePermissionRequest {
    /// Device-class tag of the request (`"serial"`, `"hid"`, `"usb"`, ...).
    pub device_type: Option<String>,
}

impl DevicePermissionRequest {
    /// Descriptor for a classified device-access request.
    pub fn of_type(device_type: impl Into<String>) -> Self {
        Self {
            device_type: Some(device_type.into()),
        }
    }

    /// Descriptor for a request the webview did not classify.
    pub fn unclassified() -> Self {
        Self { device_type: None }
    }
}
