// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Trailing history of dominant emotions.

use super::emotion::Emotion;
use std::collections::VecDeque;

/// Bounded FIFO of the most recent dominant emotions.
#[derive(Debug, Clone)]
pub struct EmotionHistory {
    entries: VecDeque<Emotion>,
    /// Maximum number of entries kept
    max_size: usize,
}

impl EmotionHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size + 1),
            max_size,
        }
    }

    /// Append an emotion, evicting the oldest one when full.
    pub fn record(&mut self, emotion: Emotion) {
        self.entries.push_back(emotion);
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    /// Entries oldest first.
    pub fn snapshot(&self) -> Vec<Emotion> {
        self.entries.iter().copied().collect()
    }

    /// Labels joined with `", "`, oldest first.
    pub fn trend(&self) -> String {
        self.snapshot()
            .iter()
            .map(|e| e.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_last_five_in_order() {
        let mut history = EmotionHistory::new(5);
        let recorded = [
            Emotion::Angry,
            Emotion::Disgust,
            Emotion::Fear,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Surprise,
            Emotion::Neutral,
        ];
        for emotion in recorded {
            history.record(emotion);
        }

        assert_eq!(history.len(), 5);
        assert_eq!(history.snapshot(), recorded[2..].to_vec());
    }

    #[test]
    fn test_trend_joins_labels() {
        let mut history = EmotionHistory::new(5);
        assert_eq!(history.trend(), "");

        history.record(Emotion::Happy);
        history.record(Emotion::Happy);
        history.record(Emotion::Sad);
        assert_eq!(history.trend(), "happy, happy, sad");
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = EmotionHistory::new(0);
        history.record(Emotion::Fear);
        assert!(history.is_empty());
    }
}
