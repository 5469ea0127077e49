// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Capture session state machine.
//!
//! The session owns the frame source, the classifier, the emotion history
//! and the frame currently on display. The GUI drives it with
//! start/stop/exit actions and one `tick` per repaint; all of it runs on
//! the GUI thread.

use crate::config;
use crate::error::CameraError;
use crate::io::camera::FrameSource;
use crate::models::history::EmotionHistory;
use crate::models::Frame;
use crate::pipeline::{self, Outcome};
use crate::vision::annotator::Overlay;
use crate::vision::classifier::EmotionClassifier;
use crate::vision::quality::QualityGate;
use std::fmt;

/// Whether frames are being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Status line shown under the preview.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Stopped,
    Running,
    FaceDetected,
    NoFace,
    Blurry,
    Error(String),
    /// The camera could not be acquired. Shown without the `Status:` prefix.
    DeviceError(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Stopped => write!(f, "Status: Stopped"),
            Status::Running => write!(f, "Status: Running"),
            Status::FaceDetected => write!(f, "Status: Face detected"),
            Status::NoFace => write!(f, "Status: No face detected."),
            Status::Blurry => write!(
                f,
                "Status: Warning: Image is blurry, please provide a clearer image."
            ),
            Status::Error(message) => write!(f, "Status: Error: {}", message),
            Status::DeviceError(message) => write!(f, "Error: {}", message),
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::FaceDetected => Status::FaceDetected,
            Outcome::NoFace => Status::NoFace,
            Outcome::Blurry => Status::Blurry,
            Outcome::Error(message) => Status::Error(message),
        }
    }
}

/// The annotated frame currently on display.
#[derive(Debug, Clone)]
pub struct DisplayFrame {
    pub frame: Frame,
    pub overlay: Overlay,
}

/// Start/stop state machine around the processing pipeline.
pub struct Session<S, C> {
    source: S,
    classifier: C,
    gate: QualityGate,
    history: EmotionHistory,
    state: RunState,
    status: Status,
    display: Option<DisplayFrame>,
    exited: bool,
}

impl<S: FrameSource, C: EmotionClassifier> Session<S, C> {
    pub fn new(source: S, classifier: C) -> Self {
        Self {
            source,
            classifier,
            gate: QualityGate::new(config::BLUR_THRESHOLD),
            history: EmotionHistory::new(config::HISTORY_LEN),
            state: RunState::Stopped,
            status: Status::Stopped,
            display: None,
            exited: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Frame to show, if any.
    pub fn display(&self) -> Option<&DisplayFrame> {
        self.display.as_ref()
    }

    #[cfg(test)]
    pub fn history(&self) -> &EmotionHistory {
        &self.history
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Open the camera and begin capturing. On failure the session stays
    /// stopped and the status carries the error.
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.state == RunState::Running {
            return Ok(());
        }

        if let Err(e) = self.source.open() {
            log::warn!("Failed to open webcam: {}", e);
            self.status = Status::DeviceError("Could not open webcam.".to_string());
            return Err(e);
        }

        self.state = RunState::Running;
        self.status = Status::Running;
        log::info!("Capture started");
        Ok(())
    }

    /// Release the camera and clear the preview.
    pub fn stop(&mut self) {
        if self.state != RunState::Running {
            return;
        }

        self.state = RunState::Stopped;
        self.source.close();
        self.display = None;
        self.status = Status::Stopped;
        log::info!("Capture stopped");
    }

    /// Stop if needed and make sure the device is released. Only the first
    /// call has any effect.
    pub fn exit(&mut self) {
        if self.exited {
            return;
        }
        self.exited = true;

        self.stop();
        if self.source.is_open() {
            self.source.close();
        }
        log::info!("Exiting");
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Run one pipeline pass. Returns true when a new frame is on display.
    pub fn tick(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let frame = match self.source.read() {
            Ok(frame) => frame,
            Err(e) => {
                log::debug!("Skipping tick: {}", e);
                return false;
            }
        };

        let analysis = pipeline::analyze(frame, &self.gate, &mut self.classifier, &mut self.history);
        self.status = analysis.outcome.into();
        self.display = Some(DisplayFrame {
            frame: analysis.frame,
            overlay: analysis.overlay,
        });
        true
    }
}
