// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Emotion Detection
//!
//! A desktop application that captures webcam frames, classifies the
//! facial emotion of the first detected face and shows the annotated
//! video together with a short trend of recent emotions.

mod app;
mod config;
mod error;
mod io;
mod models;
mod pipeline;
mod session;
mod ui;
mod util;
mod vision;

use anyhow::Result;
use app::EmotionApp;
use io::camera::FrameSource;
use vision::classifier::EmotionClassifier;

/// Webcam source, or a placeholder when built without the `webcam` feature.
fn frame_source() -> Box<dyn FrameSource> {
    #[cfg(feature = "webcam")]
    {
        Box::new(io::camera::WebcamSource::new(
            config::CAMERA_INDEX,
            config::CAPTURE_WIDTH,
            config::CAPTURE_HEIGHT,
        ))
    }
    #[cfg(not(feature = "webcam"))]
    {
        log::warn!("Built without the `webcam` feature; capture is unavailable");
        Box::new(io::camera::UnavailableSource::new(
            "built without camera support",
        ))
    }
}

/// Load the emotion classifier. Failures are logged and reported on every
/// pass instead of stopping the application.
fn emotion_classifier() -> Box<dyn EmotionClassifier> {
    #[cfg(feature = "fer")]
    {
        let cascade = std::path::Path::new(config::CASCADE_PATH);
        let model = std::path::Path::new(config::EMOTION_MODEL_PATH);
        match vision::fer::FerClassifier::new(cascade, model) {
            Ok(classifier) => Box::new(classifier),
            Err(e) => {
                log::error!("Failed to load emotion classifier: {}", e);
                Box::new(vision::classifier::UnavailableClassifier::new(e.to_string()))
            }
        }
    }
    #[cfg(not(feature = "fer"))]
    {
        log::warn!("Built without the `fer` feature; classification is unavailable");
        Box::new(vision::classifier::UnavailableClassifier::new(
            "built without an emotion classifier",
        ))
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let source = frame_source();
    let classifier = emotion_classifier();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config::WINDOW_WIDTH, config::WINDOW_HEIGHT])
            .with_title("Emotion Detection"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Emotion Detection",
        options,
        Box::new(move |_cc| Ok(Box::new(EmotionApp::new(source, classifier)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
