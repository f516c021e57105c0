//! gpdetect-hw — Camera detection and summaries via libgphoto2.
//!
//! Detection, port/ability binding and summary retrieval are delegated to
//! libgphoto2 through the `gphoto2` crate. This crate sequences those calls
//! behind the [`CameraBackend`] trait and records per-camera outcomes.

pub mod backend;
pub mod detect;
pub mod gphoto;
pub mod session;

pub use backend::{BackendError, CameraBackend, CameraDetails};
pub use detect::{CameraEntry, PLACEHOLDER_PORT};
pub use gphoto::GphotoBackend;
pub use session::{autodetect, inspect, CameraReport, DetectOptions, Outcome, Report};
