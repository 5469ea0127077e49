// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: frames, emotions, detections and history.

pub mod emotion;
pub mod history;

/// A captured RGB frame (height x width x 3), mutated in place while it
/// moves through the pipeline.
pub type Frame = image::RgbImage;
