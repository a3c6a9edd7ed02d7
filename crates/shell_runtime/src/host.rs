//! Host contract the windowing layer implements, plus an in-memory double.

use thiserror::Error;

use crate::model::{Platform, WindowGeometry};
use crate::reducer::{reduce_shell, ShellEffect, ShellEvent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures a shell host can report while executing effects.
pub enum HostError {
    /// The host failed to bring up a window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

/// Contract between the pure shell policy and a concrete window host.
///
/// `create_window` owns the full bring-up sequence: create the surface,
/// install a fresh device-permission handler on its content session, and
/// navigate it to the served bundle. The quit request hands termination to
/// the runtime's own quit path; the host sets no exit code of its own.
pub trait ShellHost {
    /// Number of currently open shell windows.
    fn open_window_count(&self) -> usize;

    /// Creates a window of the given geometry, handler and navigation
    /// included.
    fn create_window(&mut self, geometry: WindowGeometry) -> Result<(), HostError>;

    /// Asks the runtime to terminate the process.
    fn request_quit(&mut self);
}

/// Dispatches one lifecycle event against a host.
///
/// Reads the host's window count, computes the effects with [`reduce_shell`],
/// applies them in order, and returns the applied effects. A window-creation
/// failure propagates unchanged; no retry or fallback happens here.
pub fn drive<H: ShellHost + ?Sized>(
    host: &mut H,
    event: ShellEvent,
    platform: Platform,
) -> Result<Vec<ShellEffect>, HostError> {
    let effects = reduce_shell(event, host.open_window_count(), platform);
    for effect in &effects {
        match effect {
            ShellEffect::CreateWindow { geometry } => host.create_window(*geometry)?,
            ShellEffect::Quit => host.request_quit(),
        }
    }
    Ok(effects)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// In-memory [`ShellHost`] that records every call, for tests.
pub struct MemoryShellHost {
    /// Geometry of each currently open window, in creation order.
    pub open_windows: Vec<WindowGeometry>,
    /// Permission handlers installed so far, one per created window.
    pub handler_installs: usize,
    /// Navigations triggered so far, one per created window.
    pub navigations: usize,
    /// Quit requests received so far.
    pub quit_requests: usize,
}

impl MemoryShellHost {
    /// Host with no windows open and nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates the user closing every open window.
    pub fn close_all_windows(&mut self) {
        self.open_windows.clear();
    }
}

impl ShellHost for MemoryShellHost {
    fn open_window_count(&self) -> usize {
        self.open_windows.len()
    }

    fn create_window(&mut self, geometry: WindowGeometry) -> Result<(), HostError> {
        self.open_windows.push(geometry);
        self.handler_installs += 1;
        self.navigations += 1;
        Ok(())
    }

    fn request_quit(&mut self) {
        self.quit_requests += 1;
    }
}
