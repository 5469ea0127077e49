// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for capture and classification.

use thiserror::Error;

/// Failures from a frame source.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The device could not be opened.
    #[error("could not open camera: {0}")]
    Open(String),

    /// No frame could be read from an open (or closed) device.
    #[error("frame capture failed: {0}")]
    Capture(String),
}

/// Failures from an emotion classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[cfg_attr(not(feature = "fer"), allow(dead_code))]
    #[error("model loading failed: {0}")]
    ModelLoad(String),

    #[cfg_attr(not(feature = "fer"), allow(dead_code))]
    #[error("inference failed: {0}")]
    Inference(String),

    /// No backend is available in this build or it failed to load.
    #[error("{0}")]
    Unavailable(String),
}

#[cfg(feature = "fer")]
impl From<opencv::Error> for ClassifierError {
    fn from(err: opencv::Error) -> Self {
        ClassifierError::Inference(format!("OpenCV: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_message_is_passed_through() {
        let err = ClassifierError::Unavailable("no classifier backend".to_string());
        assert_eq!(err.to_string(), "no classifier backend");
    }

    #[test]
    fn test_camera_error_messages() {
        let err = CameraError::Open("busy".to_string());
        assert_eq!(err.to_string(), "could not open camera: busy");
    }
}
