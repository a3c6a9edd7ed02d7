//! Device-permission glue between the platform webview and the shell policy.

#[cfg(target_os = "linux")]
use shell_runtime::{decide_device_permission, DevicePermissionRequest};

/// Installs the device-permission handler on a freshly created window.
///
/// WebKitGTK is the one platform webview Tauri exposes a permission-request
/// hook for; on the other targets the webview's default permission behavior
/// applies. A replacement window always goes through this function again, so
/// no handler outlives the window it was installed on.
pub(crate) fn install_device_permission_handler(
    window: &tauri::WebviewWindow,
) -> Result<(), String> {
    #[cfg(target_os = "linux")]
    {
        window
            .with_webview(|webview| {
                use glib::prelude::ObjectExt;
                use webkit2gtk::{PermissionRequestExt, WebViewExt};

                webview.inner().connect_permission_request(|_, request| {
                    let descriptor = classify_webkit_request(request.type_().name());
                    if decide_device_permission(&descriptor) {
                        request.allow();
                    } else {
                        tracing::debug!(
                            device_type = descriptor.device_type.as_deref(),
                            "denied webview permission request"
                        );
                        request.deny();
                    }
                    true
                });
            })
            .map_err(|err| format!("failed to reach platform webview: {err}"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        let _ = window;
        Ok(())
    }
}

/// Maps a WebKitGTK permission-request type name to a device-class
/// descriptor for the policy.
///
/// WebKitGTK raises media and sensor prompts through this signal and has no
/// Web Serial device class, so every descriptor produced here resolves to
/// deny under the serial-only policy.
#[cfg(target_os = "linux")]
fn classify_webkit_request(request_type: &str) -> DevicePermissionRequest {
    let device_type = match request_type {
        "WebKitUserMediaPermissionRequest" => Some("media"),
        "WebKitDeviceInfoPermissionRequest" => Some("device-info"),
        "WebKitGeolocationPermissionRequest" => Some("geolocation"),
        "WebKitNotificationPermissionRequest" => Some("notification"),
        "WebKitPointerLockPermissionRequest" => Some("pointer-lock"),
        _ => None,
    };
    match device_type {
        Some(device_type) => DevicePermissionRequest::of_type(device_type),
        None => DevicePermissionRequest::unclassified(),
    }
}
