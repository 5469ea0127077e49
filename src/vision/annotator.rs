// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Frame annotation.
//!
//! The face box is rasterised straight into the frame. The emotion label
//! and the trend line are returned as an [`Overlay`] that the preview
//! canvas paints on top of the scaled frame, so text stays legible at
//! preview size and emoji render with the GUI's fonts.

use crate::config;
use crate::models::emotion::{face_label, BoundingBox, Emotion};
use crate::models::history::EmotionHistory;
use crate::models::Frame;
use image::Rgb;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// Colour of the face box and its label.
pub const BOX_COLOR: [u8; 3] = [0, 255, 0];

/// Colour of the trend line.
pub const TREND_COLOR: [u8; 3] = [255, 255, 255];

/// Box outline thickness in pixels.
const BOX_THICKNESS: i32 = 2;

/// A piece of text anchored at a frame pixel position (bottom-left of the
/// text baseline, as in the frame's own coordinates).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: [u8; 3],
}

/// Text to draw over an annotated frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub face_label: Option<TextLabel>,
    pub trend: Option<TextLabel>,
}

/// Draw the face box, record the emotion and build the overlay text.
pub fn annotate(
    frame: &mut Frame,
    bbox: &BoundingBox,
    emotion: Emotion,
    confidence: f32,
    history: &mut EmotionHistory,
) -> Overlay {
    draw_box(frame, bbox, Rgb(BOX_COLOR));

    history.record(emotion);

    let (trend_x, trend_y) = config::TREND_ANCHOR;
    Overlay {
        face_label: Some(TextLabel {
            text: face_label(emotion, confidence),
            x: bbox.x,
            y: bbox.y - config::LABEL_OFFSET,
            color: BOX_COLOR,
        }),
        trend: Some(TextLabel {
            text: format!("Recent: {}", history.trend()),
            x: trend_x,
            y: trend_y,
            color: TREND_COLOR,
        }),
    }
}

/// Draw a hollow rectangle `BOX_THICKNESS` pixels wide, growing inwards.
fn draw_box(frame: &mut Frame, bbox: &BoundingBox, color: Rgb<u8>) {
    for inset in 0..BOX_THICKNESS {
        let width = bbox.width - 2 * inset;
        let height = bbox.height - 2 * inset;
        if width <= 0 || height <= 0 {
            break;
        }
        let rect = Rect::at(bbox.x + inset, bbox.y + inset).of_size(width as u32, height as u32);
        draw_hollow_rect_mut(frame, rect, color);
    }
}
