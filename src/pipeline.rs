// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! One processing pass over a captured frame.
//!
//! adjust brightness/contrast -> sharpness gate -> classify -> annotate.
//! Every failure is folded into an [`Outcome`]; nothing here aborts the
//! application.

use crate::config;
use crate::models::history::EmotionHistory;
use crate::models::Frame;
use crate::vision::adjust::scale_abs;
use crate::vision::annotator::{annotate, Overlay};
use crate::vision::classifier::EmotionClassifier;
use crate::vision::quality::QualityGate;

/// What a pass concluded about the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    FaceDetected,
    NoFace,
    Blurry,
    Error(String),
}

/// A processed frame ready for display.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub frame: Frame,
    pub overlay: Overlay,
    pub outcome: Outcome,
}

/// Run the full pipeline on `frame`. Only the first detected face is used.
pub fn analyze(
    mut frame: Frame,
    gate: &QualityGate,
    classifier: &mut dyn EmotionClassifier,
    history: &mut EmotionHistory,
) -> Analysis {
    scale_abs(&mut frame, config::CONTRAST_GAIN, config::BRIGHTNESS_OFFSET);

    if !gate.is_sharp_enough(&frame) {
        return Analysis {
            frame,
            overlay: Overlay::default(),
            outcome: Outcome::Blurry,
        };
    }

    let detections = match classifier.detect_emotions(&frame) {
        Ok(detections) => detections,
        Err(e) => {
            log::warn!("Error in face detection: {}", e);
            return Analysis {
                frame,
                overlay: Overlay::default(),
                outcome: Outcome::Error(e.to_string()),
            };
        }
    };

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&detections) {
            Ok(json) => log::debug!("Detection result: {}", json),
            Err(e) => log::debug!("Detection result not serialisable: {}", e),
        }
    }

    let dominant = detections
        .first()
        .and_then(|face| face.emotions.dominant().map(|d| (face.bbox, d)));

    match dominant {
        Some((bbox, (emotion, confidence))) => {
            let overlay = annotate(&mut frame, &bbox, emotion, confidence, history);
            Analysis {
                frame,
                overlay,
                outcome: Outcome::FaceDetected,
            }
        }
        None => Analysis {
            frame,
            overlay: Overlay::default(),
            outcome: Outcome::NoFace,
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ClassifierError;
    use crate::models::emotion::{BoundingBox, Emotion, EmotionScores, FaceDetection};
    use image::Rgb;

    /// Classifier returning a canned answer and counting calls.
    pub(crate) struct FakeClassifier {
        pub result: Result<Vec<FaceDetection>, String>,
        pub calls: usize,
    }

    impl FakeClassifier {
        pub fn with_faces(faces: Vec<FaceDetection>) -> Self {
            Self {
                result: Ok(faces),
                calls: 0,
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: 0,
            }
        }
    }

    impl EmotionClassifier for FakeClassifier {
        fn detect_emotions(
            &mut self,
            _frame: &Frame,
        ) -> Result<Vec<FaceDetection>, ClassifierError> {
            self.calls += 1;
            self.result
                .clone()
                .map_err(ClassifierError::Inference)
        }
    }

    pub(crate) fn face(x: i32, emotion: Emotion, probability: f32) -> FaceDetection {
        FaceDetection {
            bbox: BoundingBox::new(x, 20, 30, 30),
            emotions: EmotionScores::from_pairs([(emotion, probability), (Emotion::Neutral, 0.05)]),
        }
    }

    pub(crate) fn sharp_frame() -> Frame {
        Frame::from_fn(80, 60, |x, y| {
            if (x / 2 + y / 2) % 2 == 0 {
                Rgb([220, 220, 220])
            } else {
                Rgb([10, 10, 10])
            }
        })
    }

    pub(crate) fn flat_frame() -> Frame {
        Frame::from_pixel(80, 60, Rgb([90, 90, 90]))
    }

    #[test]
    fn test_blurry_frame_skips_classifier() {
        let gate = QualityGate::new(config::BLUR_THRESHOLD);
        let mut classifier = FakeClassifier::with_faces(vec![face(5, Emotion::Happy, 0.9)]);
        let mut history = EmotionHistory::new(config::HISTORY_LEN);

        let analysis = analyze(flat_frame(), &gate, &mut classifier, &mut history);

        assert_eq!(analysis.outcome, Outcome::Blurry);
        assert_eq!(classifier.calls, 0);
        assert!(history.is_empty());
        // adjusted frame is still returned for display
        assert_eq!(analysis.frame.get_pixel(0, 0), &Rgb([158, 158, 158]));
    }

    #[test]
    fn test_first_face_is_annotated() {
        let gate = QualityGate::new(config::BLUR_THRESHOLD);
        let mut classifier = FakeClassifier::with_faces(vec![
            face(5, Emotion::Happy, 0.7),
            face(40, Emotion::Angry, 0.99),
        ]);
        let mut history = EmotionHistory::new(config::HISTORY_LEN);

        let analysis = analyze(sharp_frame(), &gate, &mut classifier, &mut history);

        assert_eq!(analysis.outcome, Outcome::FaceDetected);
        assert_eq!(classifier.calls, 1);
        assert_eq!(history.snapshot(), vec![Emotion::Happy]);
        let label = analysis.overlay.face_label.unwrap();
        assert_eq!(label.text, "happy 😊 (0.70)");
        assert_eq!(label.x, 5);
    }

    #[test]
    fn test_no_face_leaves_history_alone() {
        let gate = QualityGate::new(config::BLUR_THRESHOLD);
        let mut classifier = FakeClassifier::with_faces(Vec::new());
        let mut history = EmotionHistory::new(config::HISTORY_LEN);

        let analysis = analyze(sharp_frame(), &gate, &mut classifier, &mut history);

        assert_eq!(analysis.outcome, Outcome::NoFace);
        assert_eq!(analysis.overlay, Overlay::default());
        assert!(history.is_empty());
    }

    #[test]
    fn test_classifier_error_becomes_outcome() {
        let gate = QualityGate::new(config::BLUR_THRESHOLD);
        let mut classifier = FakeClassifier::failing("malformed frame");
        let mut history = EmotionHistory::new(config::HISTORY_LEN);

        let analysis = analyze(sharp_frame(), &gate, &mut classifier, &mut history);

        assert_eq!(
            analysis.outcome,
            Outcome::Error("inference failed: malformed frame".to_string())
        );
        assert!(history.is_empty());
    }
}
