// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed application settings.
//!
//! Nothing here is user-configurable; the values are tuned for a typical
//! laptop webcam and the bundled emotion model.

use std::time::Duration;

/// Minimum Laplacian variance for a frame to be classified.
pub const BLUR_THRESHOLD: f64 = 5.0;

/// Number of dominant emotions kept for the trend line.
pub const HISTORY_LEN: usize = 5;

/// Contrast gain applied before classification (counters glare from glasses).
pub const CONTRAST_GAIN: f32 = 1.2;

/// Brightness offset applied before classification.
pub const BRIGHTNESS_OFFSET: f32 = 50.0;

/// Camera device index.
#[cfg_attr(not(feature = "webcam"), allow(dead_code))]
pub const CAMERA_INDEX: u32 = 0;

/// Requested capture resolution (best effort).
#[cfg_attr(not(feature = "webcam"), allow(dead_code))]
pub const CAPTURE_WIDTH: u32 = 1280;
#[cfg_attr(not(feature = "webcam"), allow(dead_code))]
pub const CAPTURE_HEIGHT: u32 = 720;

/// Main window size.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

/// Preview area size; frames are scaled to this regardless of source size.
pub const PREVIEW_WIDTH: u32 = 640;
pub const PREVIEW_HEIGHT: u32 = 360;

/// Interval between pipeline ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Vertical gap between the face box and its label, in frame pixels.
pub const LABEL_OFFSET: i32 = 10;

/// Trend line anchor, in frame pixels.
pub const TREND_ANCHOR: (i32, i32) = (10, 30);

/// Haar cascade used for face detection.
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub const CASCADE_PATH: &str = "assets/models/haarcascade_frontalface_default.xml";

/// ONNX emotion model (64x64 grayscale in, 7 probabilities out).
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub const EMOTION_MODEL_PATH: &str = "assets/models/emotion.onnx";

/// Cascade detection parameters.
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub const CASCADE_SCALE_FACTOR: f64 = 1.1;
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub const CASCADE_MIN_NEIGHBORS: i32 = 5;
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub const CASCADE_MIN_FACE: i32 = 50;

/// Padding around a detected face before cropping it for the model.
pub const FACE_PADDING: i32 = 10;

/// Side length of the square model input.
pub const MODEL_INPUT_SIZE: u32 = 64;
