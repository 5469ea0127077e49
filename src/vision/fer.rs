// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Haar cascade + CNN emotion classifier.
//!
//! Faces are found with an OpenCV Haar cascade on the grayscale frame.
//! Each face is cropped with a little padding, resized to the model's
//! 64x64 input and scored by an ONNX emotion model with seven outputs.
//! The cascade/ONNX backend is only built with the `fer` feature; the
//! face preprocessing below is plain image code.

#![cfg_attr(not(feature = "fer"), allow(dead_code))]

use crate::config;
use crate::models::emotion::BoundingBox;
use image::{imageops, GrayImage};

/// Grow a face box by `padding` on every side, clipped to the image.
/// Returns `(x, y, width, height)` or `None` if nothing is left.
pub fn padded_region(
    bbox: &BoundingBox,
    padding: i32,
    image_width: u32,
    image_height: u32,
) -> Option<(u32, u32, u32, u32)> {
    let x1 = (bbox.x - padding).max(0);
    let y1 = (bbox.y - padding).max(0);
    let x2 = (bbox.x + bbox.width + padding).min(image_width as i32);
    let y2 = (bbox.y + bbox.height + padding).min(image_height as i32);

    if x2 <= x1 || y2 <= y1 {
        return None;
    }
    Some((x1 as u32, y1 as u32, (x2 - x1) as u32, (y2 - y1) as u32))
}

/// Crop, resize and normalise a face to the model's input layout
/// (NHWC, one channel, values in [-1, 1]).
pub fn face_input(gray: &GrayImage, bbox: &BoundingBox) -> Option<Vec<f32>> {
    let (x, y, w, h) = padded_region(bbox, config::FACE_PADDING, gray.width(), gray.height())?;
    let face = imageops::crop_imm(gray, x, y, w, h).to_image();
    let size = config::MODEL_INPUT_SIZE;
    let resized = imageops::resize(&face, size, size, imageops::FilterType::Triangle);

    Some(
        resized
            .as_raw()
            .iter()
            .map(|&v| (v as f32 / 255.0 - 0.5) * 2.0)
            .collect(),
    )
}

#[cfg(feature = "fer")]
pub use backend::FerClassifier;

#[cfg(feature = "fer")]
mod backend {
    use super::face_input;
    use crate::config;
    use crate::error::ClassifierError;
    use crate::models::emotion::{BoundingBox, FaceDetection};
    use crate::models::Frame;
    use crate::vision::classifier::{scores_from_probabilities, EmotionClassifier};
    use image::imageops;
    use opencv::core::{Mat, Rect, Size, Vector};
    use opencv::objdetect::{self, CascadeClassifier};
    use opencv::prelude::*;
    use ort::session::Session;
    use std::path::Path;

    /// Emotion classifier built from a Haar cascade and an ONNX model.
    pub struct FerClassifier {
        cascade: CascadeClassifier,
        session: Session,
    }

    impl FerClassifier {
        /// Load the cascade and the emotion model.
        pub fn new(cascade_path: &Path, model_path: &Path) -> Result<Self, ClassifierError> {
            let cascade = CascadeClassifier::new(&cascade_path.to_string_lossy()).map_err(|e| {
                ClassifierError::ModelLoad(format!(
                    "Haar cascade {}: {e}",
                    cascade_path.display()
                ))
            })?;
            if cascade.empty()? {
                return Err(ClassifierError::ModelLoad(format!(
                    "Haar cascade {} is empty",
                    cascade_path.display()
                )));
            }

            let session = Session::builder()
                .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?
                .commit_from_file(model_path)
                .map_err(|e| {
                    ClassifierError::ModelLoad(format!("{}: {e}", model_path.display()))
                })?;

            log::info!(
                "Loaded emotion classifier ({}, {})",
                cascade_path.display(),
                model_path.display()
            );
            Ok(Self { cascade, session })
        }

        fn detect_faces(&mut self, gray: &image::GrayImage) -> Result<Vec<BoundingBox>, ClassifierError> {
            let mat = Mat::from_slice(gray.as_raw())?
                .reshape(1, gray.height() as i32)?
                .try_clone()?;

            let mut faces = Vector::<Rect>::new();
            self.cascade.detect_multi_scale(
                &mat,
                &mut faces,
                config::CASCADE_SCALE_FACTOR,
                config::CASCADE_MIN_NEIGHBORS,
                objdetect::CASCADE_SCALE_IMAGE,
                Size::new(config::CASCADE_MIN_FACE, config::CASCADE_MIN_FACE),
                Size::new(0, 0),
            )?;

            Ok(faces
                .iter()
                .map(|r| BoundingBox::new(r.x, r.y, r.width, r.height))
                .collect())
        }

        fn classify_face(&mut self, input: Vec<f32>) -> Result<Vec<f32>, ClassifierError> {
            let size = config::MODEL_INPUT_SIZE as usize;
            let array = ndarray::Array4::from_shape_vec((1, size, size, 1), input)
                .map_err(|e| ClassifierError::Inference(format!("bad input shape: {e}")))?;
            let tensor = ort::value::Tensor::from_array(array)
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;

            let outputs = self
                .session
                .run(ort::inputs![tensor])
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;
            let probabilities = outputs[0]
                .try_extract_array::<f32>()
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;

            Ok(probabilities.iter().copied().collect())
        }
    }

    impl EmotionClassifier for FerClassifier {
        fn detect_emotions(
            &mut self,
            frame: &Frame,
        ) -> Result<Vec<FaceDetection>, ClassifierError> {
            let gray = imageops::grayscale(frame);
            let faces = self.detect_faces(&gray)?;

            let mut detections = Vec::with_capacity(faces.len());
            for bbox in faces {
                let Some(input) = face_input(&gray, &bbox) else {
                    log::debug!("Skipping face outside the frame: {:?}", bbox);
                    continue;
                };
                let probabilities = self.classify_face(input)?;
                detections.push(FaceDetection {
                    bbox,
                    emotions: scores_from_probabilities(&probabilities)?,
                });
            }
            Ok(detections)
        }
    }
}
