//! Detect, open and summarize every attached camera.
//!
//! All cameras are opened before any summary is requested. A camera that
//! fails at either step is recorded in the [`Report`] and the run continues
//! with the next one.

use crate::backend::{BackendError, CameraBackend, CameraDetails};
use crate::detect::{self, CameraEntry, PLACEHOLDER_PORT};

/// Knobs for a detection run.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Port string to drop from detection results. Empty disables filtering.
    pub placeholder_port: String,
    /// Keep only models containing this text (case-insensitive).
    pub model: Option<String>,
    /// Open each camera and fetch its summary. `false` stops after detection.
    pub summaries: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            placeholder_port: PLACEHOLDER_PORT.to_string(),
            model: None,
            summaries: true,
        }
    }
}

/// What happened to one detected camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Detected only; no connection was attempted.
    Listed,
    Summary(String),
    OpenFailed(String),
    /// libgphoto2 could not find the port. Carries the port path.
    UnknownPort(String),
    SummaryFailed(String),
}

impl Outcome {
    /// Whether the camera failed to open (including unknown ports).
    pub fn is_open_failure(&self) -> bool {
        matches!(self, Outcome::OpenFailed(_) | Outcome::UnknownPort(_))
    }
}

#[derive(Debug, Clone)]
pub struct CameraReport {
    pub entry: CameraEntry,
    pub outcome: Outcome,
}

/// Result of a detection run, in detection order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub cameras: Vec<CameraReport>,
}

impl Report {
    /// Number of cameras detected after filtering.
    pub fn count(&self) -> usize {
        self.cameras.len()
    }
}

/// Run detection and, if enabled, open each camera and fetch its summary.
///
/// A detection failure is logged and yields an empty report.
pub fn autodetect<B: CameraBackend>(backend: &B, options: &DetectOptions) -> Report {
    tracing::info!("detecting cameras");

    let detected = match backend.detect() {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "camera detection failed");
            Vec::new()
        }
    };

    let mut entries = detect::filter_placeholder(detected, &options.placeholder_port);
    if let Some(model) = options.model.as_deref() {
        let needle = model.to_lowercase();
        entries.retain(|e| e.model.to_lowercase().contains(&needle));
    }

    tracing::info!(count = entries.len(), "detection finished");

    if !options.summaries {
        return Report {
            cameras: entries
                .into_iter()
                .map(|entry| CameraReport {
                    entry,
                    outcome: Outcome::Listed,
                })
                .collect(),
        };
    }

    let opened: Vec<(CameraEntry, Result<B::Camera, Outcome>)> = entries
        .into_iter()
        .map(|entry| {
            let camera = open_entry(backend, &entry);
            (entry, camera)
        })
        .collect();

    let cameras = opened
        .into_iter()
        .map(|(entry, camera)| {
            let outcome = match camera {
                Ok(camera) => match backend.summary(&camera) {
                    Ok(text) => Outcome::Summary(text),
                    Err(e) => {
                        tracing::warn!(model = %entry.model, error = %e, "summary failed");
                        Outcome::SummaryFailed(e.to_string())
                    }
                },
                Err(outcome) => outcome,
            };
            CameraReport { entry, outcome }
        })
        .collect();

    Report { cameras }
}

fn open_entry<B: CameraBackend>(backend: &B, entry: &CameraEntry) -> Result<B::Camera, Outcome> {
    tracing::debug!(model = %entry.model, port = %entry.port, "opening camera");

    warn_unfamiliar_port(&entry.port);

    backend.open(entry).map_err(|e| {
        tracing::warn!(model = %entry.model, port = %entry.port, error = %e, "open failed");
        match e {
            BackendError::UnknownPort(port) => Outcome::UnknownPort(port),
            other => Outcome::OpenFailed(other.to_string()),
        }
    })
}

/// The port table belongs to libgphoto2, so an unfamiliar prefix is only logged.
fn warn_unfamiliar_port(port: &str) {
    if !detect::is_known_port_path(port) {
        tracing::warn!(port, "unfamiliar port type, leaving lookup to libgphoto2");
    }
}

/// Open a single camera and read its summary, abilities and port info.
pub fn inspect<B: CameraBackend>(
    backend: &B,
    entry: &CameraEntry,
) -> Result<CameraDetails, BackendError> {
    warn_unfamiliar_port(&entry.port);
    let camera = backend.open(entry)?;
    backend.details(entry, &camera)
}
