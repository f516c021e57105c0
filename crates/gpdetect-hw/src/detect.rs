//! Detected camera entries and port-path helpers.

use serde::Serialize;

/// Port string libgphoto2 reports for the bare USB bus rather than a device.
pub const PLACEHOLDER_PORT: &str = "usb:";

/// Port type prefixes understood by libgphoto2's port drivers.
const KNOWN_PORT_PREFIXES: &[&str] = &[
    "usb:",
    "serial:",
    "ptpip:",
    "ip:",
    "disk:",
    "usbdiskdirect:",
    "usbscsi:",
    "vusb:",
];

/// A camera reported by detection: model name plus the port it sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CameraEntry {
    pub model: String,
    pub port: String,
}

impl CameraEntry {
    pub fn new(model: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            port: port.into(),
        }
    }
}

/// Drop entries whose port is exactly `placeholder`, preserving order.
///
/// An empty `placeholder` disables filtering.
pub fn filter_placeholder(entries: Vec<CameraEntry>, placeholder: &str) -> Vec<CameraEntry> {
    if placeholder.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|e| {
            let keep = e.port != placeholder;
            if !keep {
                tracing::debug!(model = %e.model, port = %e.port, "skipping placeholder port");
            }
            keep
        })
        .collect()
}

/// Whether `port` starts with a port type libgphoto2 can resolve.
pub fn is_known_port_path(port: &str) -> bool {
    KNOWN_PORT_PREFIXES.iter().any(|p| port.starts_with(p))
}

/// Guidance shown when a port path cannot be found.
pub fn unknown_port_hint(port: &str) -> String {
    format!(
        "The port you specified ('{port}') can not be found. Please specify one of the \
         ports found by 'gphoto2 --list-ports' and make sure the spelling is correct \
         (i.e. with prefix 'serial:' or 'usb:')."
    )
}
