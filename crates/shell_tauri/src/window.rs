//! Main-window bring-up and the Tauri-backed shell host.

use shell_runtime::{HostError, ShellHost, WindowGeometry};
use tauri::Manager;

use crate::permissions;

/// Label of the single shell window.
const MAIN_WINDOW_LABEL: &str = "main";

/// [`shell_runtime::ShellHost`] backed by a running Tauri application.
pub(crate) struct TauriShellHost<'a> {
    app: &'a tauri::AppHandle,
}

impl<'a> TauriShellHost<'a> {
    pub fn new(app: &'a tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ShellHost for TauriShellHost<'_> {
    fn open_window_count(&self) -> usize {
        self.app.webview_windows().len()
    }

    fn create_window(&mut self, geometry: WindowGeometry) -> Result<(), HostError> {
        create_main_window(self.app, geometry).map_err(HostError::WindowCreation)
    }

    fn request_quit(&mut self) {
        self.app.exit(0);
    }
}

/// Creates the main webview window at the fixed geometry, with a fresh
/// device-permission handler installed on its content session, navigated to
/// the served bundle root.
///
/// Navigation is fire-and-forget; a missing or malformed bundle surfaces as
/// a failed load inside the window, with no retry or fallback here.
fn create_main_window(app: &tauri::AppHandle, geometry: WindowGeometry) -> Result<(), String> {
    let window =
        tauri::WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, tauri::WebviewUrl::default())
            .inner_size(f64::from(geometry.width), f64::from(geometry.height))
            .build()
            .map_err(|err| format!("failed to create {MAIN_WINDOW_LABEL} window: {err}"))?;
    permissions::install_device_permission_handler(&window)?;
    tracing::info!(
        width = geometry.width,
        height = geometry.height,
        "main window created"
    );
    Ok(())
}
