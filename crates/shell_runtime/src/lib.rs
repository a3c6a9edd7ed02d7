//! Pure lifecycle and device-permission policy for the desktop shell.
//!
//! This crate is the host-independent half of the shell: lifecycle events go
//! in, effect intents come out, and the serial-only device-permission
//! decision is a plain function. Concrete window hosts implement
//! [`ShellHost`] and stay behind the `shell_tauri` crate.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod model;
pub mod permissions;
pub mod reducer;

pub use host::{drive, HostError, MemoryShellHost, ShellHost};
pub use model::{
    DevicePermissionRequest, Platform, WindowGeometry, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_WIDTH,
};
pub use permissions::{decide_device_permission, SERIAL_DEVICE_TYPE};
pub use reducer::{reduce_shell, ShellEffect, ShellEvent};
