// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sharpness check for captured frames.
//!
//! Frames are scored by the variance of their Laplacian response on the
//! luma channel. Blurred or motion-smeared frames have little high-frequency
//! content and therefore a low variance.

use crate::models::Frame;
use image::{GrayImage, Luma};
use imageproc::filter::laplacian_filter;

/// Rejects frames whose Laplacian variance is below a fixed threshold.
#[derive(Debug, Clone, Copy)]
pub struct QualityGate {
    threshold: f64,
}

impl QualityGate {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// True when the frame is sharp enough to classify.
    pub fn is_sharp_enough(&self, frame: &Frame) -> bool {
        let variance = laplacian_variance(frame);
        log::debug!("Laplacian variance: {:.3}", variance);
        variance >= self.threshold
    }
}

/// Population variance of the 3x3 Laplacian of the frame's luma.
pub fn laplacian_variance(frame: &Frame) -> f64 {
    let pixel_count = frame.width() as usize * frame.height() as usize;
    if pixel_count == 0 {
        return 0.0;
    }

    let gray = luma(frame);
    let response = laplacian_filter(&gray);

    let (sum, sum_sq) = response.pixels().fold((0.0f64, 0.0f64), |(s, sq), p| {
        let v = p.0[0] as f64;
        (s + v, sq + v * v)
    });
    let n = pixel_count as f64;
    let mean = sum / n;
    (sum_sq / n - mean * mean).max(0.0)
}

/// Rec.601 luma (0.299 R + 0.587 G + 0.114 B), the weighting the blur
/// threshold was tuned against.
pub fn luma(frame: &Frame) -> GrayImage {
    GrayImage::from_fn(frame.width(), frame.height(), |x, y| {
        let [r, g, b] = frame.get_pixel(x, y).0;
        let v = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        Luma([v.round().clamp(0.0, 255.0) as u8])
    })
}
