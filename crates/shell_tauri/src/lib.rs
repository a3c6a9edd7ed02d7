//! Tauri desktop host shell for the serial-device web application.
//!
//! This crate is the host half of the shell: it owns the Tauri run loop and
//! translates its lifecycle events into `shell_runtime` policy calls, so the
//! window-replenishment and quit semantics stay pure and tested over there.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod permissions;
mod window;

use shell_runtime::{drive, reduce_shell, Platform, ShellEffect, ShellEvent};

use window::TauriShellHost;

/// Starts the Tauri desktop host process.
pub fn run() {
    init_logging();

    let app = tauri::Builder::default()
        .build(tauri::generate_context!())
        .expect("shell_tauri failed to build Tauri application");

    let platform = Platform::current();
    tracing::info!(?platform, "desktop shell starting");

    app.run(move |app_handle, event| handle_run_event(app_handle, event, platform));
}

fn handle_run_event(app_handle: &tauri::AppHandle, event: tauri::RunEvent, platform: Platform) {
    match event {
        tauri::RunEvent::Ready => dispatch(app_handle, ShellEvent::Ready, platform),
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen { .. } => dispatch(app_handle, ShellEvent::Activate, platform),
        tauri::RunEvent::ExitRequested {
            code: None, api, ..
        } => {
            // The runtime raises a codeless exit request when the last window
            // closes. Quitting is expressed by letting it proceed; staying
            // resident (the macOS convention) by preventing it.
            let effects = reduce_shell(ShellEvent::AllWindowsClosed, 0, platform);
            if !effects.contains(&ShellEffect::Quit) {
                tracing::info!("all windows closed, staying resident");
                api.prevent_exit();
            }
        }
        _ => {}
    }
}

fn dispatch(app_handle: &tauri::AppHandle, event: ShellEvent, platform: Platform) {
    let mut host = TauriShellHost::new(app_handle);
    if let Err(err) = drive(&mut host, event, platform) {
        tracing::error!("failed to apply shell lifecycle effects: {err}");
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
