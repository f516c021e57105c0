//! Backend seam between the detection sequence and the camera library.

use crate::detect::CameraEntry;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("failed to create camera context: {0}")]
    Context(String),
    #[error("camera detection failed: {0}")]
    Detection(String),
    /// Port path missing from the port-info table. Displays the guidance hint.
    #[error("{}", crate::detect::unknown_port_hint(.0))]
    UnknownPort(String),
    #[error("camera {model} on port {port} failed to open: {reason}")]
    Open {
        model: String,
        port: String,
        reason: String,
    },
    #[error("failed to get summary: {0}")]
    Summary(String),
    #[error("failed to read camera details: {0}")]
    Details(String),
}

/// Library records for one opened camera, rendered for display.
#[derive(Debug, Clone, Serialize)]
pub struct CameraDetails {
    pub entry: CameraEntry,
    pub summary: String,
    /// Debug rendering of the abilities record bound to the camera.
    pub abilities: String,
    /// Debug rendering of the port-info record bound to the camera.
    pub port_info: String,
}

/// Access to attached cameras.
///
/// Implementations own the library context; camera handles are released
/// when the returned `Camera` values are dropped.
pub trait CameraBackend {
    type Camera;

    /// Load the port and abilities tables and report every (model, port) pair.
    fn detect(&self) -> Result<Vec<CameraEntry>, BackendError>;

    /// Bind a camera to the abilities of `entry.model` and the port at `entry.port`.
    fn open(&self, entry: &CameraEntry) -> Result<Self::Camera, BackendError>;

    fn summary(&self, camera: &Self::Camera) -> Result<String, BackendError>;

    fn details(
        &self,
        entry: &CameraEntry,
        camera: &Self::Camera,
    ) -> Result<CameraDetails, BackendError>;
}
