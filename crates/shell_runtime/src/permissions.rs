//! Device-permission decision policy.

use crate::model::DevicePermissionRequest;

/// Device-class tag of Web Serial access requests.
pub const SERIAL_DEVICE_TYPE: &str = "serial";

/// Decides a device-access request from loaded content.
///
/// Allows every request for the serial device class and denies everything
/// else, including unclassified requests. The decision is stateless: each
/// request is evaluated independently and identically, with no per-device or
/// per-origin tracking. The blanket serial allow is deliberate and carries
/// no configuration surface.
pub fn decide_device_permission(request: &DevicePermissionRequest) -> bool {
    request.device_type.as_deref() == Some(SERIAL_DEVICE_TYPE)
}
