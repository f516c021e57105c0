//! libgphoto2 backend via the `gphoto2` crate.

use crate::backend::{BackendError, CameraBackend, CameraDetails};
use crate::detect::CameraEntry;
use gphoto2::error::ErrorKind;
use gphoto2::list::CameraDescriptor;
use gphoto2::{Camera, Context};

/// Backend holding one libgphoto2 context for the life of the process.
pub struct GphotoBackend {
    context: Context,
}

impl GphotoBackend {
    /// Create the libgphoto2 context.
    pub fn new() -> Result<Self, BackendError> {
        let context = Context::new().map_err(|e| BackendError::Context(e.to_string()))?;
        tracing::debug!("created gphoto2 context");
        Ok(Self { context })
    }
}

/// A port missing from libgphoto2's port-info table maps to `UnknownPort`.
fn open_error(entry: &CameraEntry, unknown_port: bool, reason: String) -> BackendError {
    if unknown_port {
        BackendError::UnknownPort(entry.port.clone())
    } else {
        BackendError::Open {
            model: entry.model.clone(),
            port: entry.port.clone(),
            reason,
        }
    }
}

impl CameraBackend for GphotoBackend {
    type Camera = Camera;

    fn detect(&self) -> Result<Vec<CameraEntry>, BackendError> {
        let cameras = self
            .context
            .list_cameras()
            .wait()
            .map_err(|e| BackendError::Detection(e.to_string()))?;

        Ok(cameras
            .into_iter()
            .map(|CameraDescriptor { model, port }| CameraEntry { model, port })
            .collect())
    }

    fn open(&self, entry: &CameraEntry) -> Result<Camera, BackendError> {
        let descriptor = CameraDescriptor {
            model: entry.model.clone(),
            port: entry.port.clone(),
        };

        let camera = self
            .context
            .get_camera(&descriptor)
            .wait()
            .map_err(|e| {
                open_error(
                    entry,
                    matches!(e.kind(), ErrorKind::UnknownPort),
                    e.to_string(),
                )
            })?;

        tracing::info!(model = %entry.model, port = %entry.port, "opened camera");
        Ok(camera)
    }

    fn summary(&self, camera: &Camera) -> Result<String, BackendError> {
        camera
            .summary()
            .map_err(|e| BackendError::Summary(e.to_string()))
    }

    fn details(&self, entry: &CameraEntry, camera: &Camera) -> Result<CameraDetails, BackendError> {
        let summary = self.summary(camera)?;
        let port_info = camera
            .port_info()
            .map_err(|e| BackendError::Details(format!("failed to read port info: {e}")))?;

        Ok(CameraDetails {
            entry: entry.clone(),
            summary,
            abilities: format!("{:#?}", camera.abilities()),
            port_info: format!("{port_info:#?}"),
        })
    }
}
