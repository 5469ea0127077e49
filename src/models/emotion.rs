// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Emotion detection data structures.
//!
//! This module defines the emotion vocabulary, per-face probability
//! distributions and the detections a classifier reports for a frame.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Facial emotion labels, in the order the classifier reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl Emotion {
    /// Every label in classifier output order.
    #[cfg_attr(not(feature = "fer"), allow(dead_code))]
    pub const ALL: [Emotion; 7] = [
        Emotion::Angry,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    /// Lowercase label as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }

    /// Emoji drawn next to the label.
    pub fn emoji(self) -> &'static str {
        match self {
            Emotion::Happy => "😊",
            Emotion::Sad => "😢",
            // angry and disgust share a face
            Emotion::Angry | Emotion::Disgust => "😣",
            Emotion::Neutral => "😐",
            Emotion::Surprise => "😮",
            Emotion::Fear => "😨",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis-aligned face box in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    #[cfg_attr(not(feature = "fer"), allow(dead_code))]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Probability per emotion for one face, kept in the order the classifier
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    scores: Vec<(Emotion, f32)>,
}

impl EmotionScores {
    /// Build scores from `(emotion, probability)` pairs.
    #[cfg_attr(not(feature = "fer"), allow(dead_code))]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Emotion, f32)>) -> Self {
        Self {
            scores: pairs.into_iter().collect(),
        }
    }

    /// Probability for a single emotion, if the classifier reported it.
    #[cfg(test)]
    pub fn get(&self, emotion: Emotion) -> Option<f32> {
        self.scores
            .iter()
            .find(|(e, _)| *e == emotion)
            .map(|(_, p)| *p)
    }

    /// Highest-probability emotion and its probability.
    ///
    /// Ties go to the entry reported first. NaN scores never win.
    pub fn dominant(&self) -> Option<(Emotion, f32)> {
        let mut best: Option<(Emotion, f32)> = None;
        for &(emotion, probability) in &self.scores {
            if probability.is_nan() {
                continue;
            }
            match best {
                Some((_, top)) if probability <= top => {}
                _ => best = Some((emotion, probability)),
            }
        }
        best
    }
}

/// One face reported by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
    pub emotions: EmotionScores,
}

/// Text shown next to a face: `"{emotion} {emoji} ({confidence:.2})"`.
pub fn face_label(emotion: Emotion, confidence: f32) -> String {
    format!("{} {} ({:.2})", emotion.label(), emotion.emoji(), confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_picks_highest_probability() {
        let scores = EmotionScores::from_pairs([
            (Emotion::Happy, 0.7),
            (Emotion::Sad, 0.2),
            (Emotion::Neutral, 0.1),
        ]);
        let (emotion, confidence) = scores.dominant().unwrap();
        assert_eq!(emotion, Emotion::Happy);
        assert_eq!(face_label(emotion, confidence), "happy 😊 (0.70)");
    }

    #[test]
    fn test_dominant_tie_goes_to_first_reported() {
        let scores = EmotionScores::from_pairs([
            (Emotion::Sad, 0.4),
            (Emotion::Happy, 0.4),
            (Emotion::Neutral, 0.2),
        ]);
        assert_eq!(scores.dominant(), Some((Emotion::Sad, 0.4)));
    }

    #[test]
    fn test_dominant_ignores_nan_and_empty() {
        assert_eq!(EmotionScores::default().dominant(), None);

        let scores = EmotionScores::from_pairs([(Emotion::Angry, f32::NAN), (Emotion::Fear, 0.1)]);
        assert_eq!(scores.dominant(), Some((Emotion::Fear, 0.1)));
    }

    #[test]
    fn test_labels_and_emoji() {
        assert_eq!(Emotion::Surprise.to_string(), "surprise");
        assert_eq!(Emotion::Angry.emoji(), Emotion::Disgust.emoji());
        assert_eq!(face_label(Emotion::Neutral, 0.456), "neutral 😐 (0.46)");
    }

    #[test]
    fn test_get_missing_emotion() {
        let scores = EmotionScores::from_pairs([(Emotion::Happy, 0.9)]);
        assert_eq!(scores.get(Emotion::Happy), Some(0.9));
        assert_eq!(scores.get(Emotion::Sad), None);
    }
}
