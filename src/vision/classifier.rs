// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Emotion classifier boundary.
//!
//! Face detection and emotion recognition are delegated to a backend
//! implementing [`EmotionClassifier`]. The pipeline only relies on the
//! ordered list of detections it returns.

use crate::error::ClassifierError;
use crate::models::emotion::{Emotion, EmotionScores, FaceDetection};
use crate::models::Frame;

/// Finds faces in a frame and scores each one over the emotion vocabulary.
pub trait EmotionClassifier {
    /// Detections in backend order; empty when no face was found.
    fn detect_emotions(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, ClassifierError>;
}

impl<T: EmotionClassifier + ?Sized> EmotionClassifier for Box<T> {
    fn detect_emotions(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, ClassifierError> {
        (**self).detect_emotions(frame)
    }
}

/// Classifier used when no backend is compiled in or the models failed to
/// load. Every call reports the reason.
pub struct UnavailableClassifier {
    reason: String,
}

impl UnavailableClassifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl EmotionClassifier for UnavailableClassifier {
    fn detect_emotions(&mut self, _frame: &Frame) -> Result<Vec<FaceDetection>, ClassifierError> {
        Err(ClassifierError::Unavailable(self.reason.clone()))
    }
}

/// Map raw model probabilities (in [`Emotion::ALL`] order) to scores,
/// rounded to two decimals.
#[cfg_attr(not(feature = "fer"), allow(dead_code))]
pub fn scores_from_probabilities(probabilities: &[f32]) -> Result<EmotionScores, ClassifierError> {
    if probabilities.len() != Emotion::ALL.len() {
        return Err(ClassifierError::Inference(format!(
            "expected {} emotion scores, got {}",
            Emotion::ALL.len(),
            probabilities.len()
        )));
    }

    Ok(EmotionScores::from_pairs(
        Emotion::ALL
            .iter()
            .zip(probabilities)
            .map(|(&emotion, &p)| (emotion, (p * 100.0).round() / 100.0)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_follow_model_order() {
        let scores =
            scores_from_probabilities(&[0.011, 0.0, 0.02, 0.804, 0.1, 0.03, 0.035]).unwrap();
        assert_eq!(scores.get(Emotion::Angry), Some(0.01));
        assert_eq!(scores.get(Emotion::Happy), Some(0.8));
        assert_eq!(scores.get(Emotion::Neutral), Some(0.04));
        assert_eq!(scores.dominant().map(|(e, _)| e), Some(Emotion::Happy));
    }

    #[test]
    fn test_scores_reject_wrong_length() {
        assert!(matches!(
            scores_from_probabilities(&[0.5, 0.5]),
            Err(ClassifierError::Inference(_))
        ));
    }

    #[test]
    fn test_unavailable_classifier_reports_reason() {
        let mut classifier = UnavailableClassifier::new("models missing");
        let frame = Frame::new(4, 4);
        let err = classifier.detect_emotions(&frame).unwrap_err();
        assert_eq!(err.to_string(), "models missing");
    }
}
