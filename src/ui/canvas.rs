// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video preview area.
//!
//! This module shows the latest annotated frame scaled to the fixed
//! preview size and paints the emotion label and trend line over it.

use crate::config;
use crate::models::Frame;
use crate::session::DisplayFrame;
use crate::util::geometry::frame_to_screen;
use crate::vision::annotator::TextLabel;
use image::imageops::{self, FilterType};

const LABEL_FONT_SIZE: f32 = 16.0;
const TREND_FONT_SIZE: f32 = 13.0;

/// Scale a frame to the preview size and convert it for upload.
pub fn preview_image(frame: &Frame) -> egui::ColorImage {
    let resized = imageops::resize(
        frame,
        config::PREVIEW_WIDTH,
        config::PREVIEW_HEIGHT,
        FilterType::Triangle,
    );
    egui::ColorImage::from_rgb(
        [resized.width() as usize, resized.height() as usize],
        resized.as_raw(),
    )
}

/// Display the preview with its overlay.
pub fn show(
    ui: &mut egui::Ui,
    texture: &Option<egui::TextureHandle>,
    display: Option<&DisplayFrame>,
) {
    let size = egui::vec2(config::PREVIEW_WIDTH as f32, config::PREVIEW_HEIGHT as f32);
    let (preview_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(preview_rect.expand(LABEL_FONT_SIZE));

    painter.rect_filled(preview_rect, 0.0, egui::Color32::from_gray(40));

    match (texture, display) {
        (Some(texture), Some(display)) => {
            painter.image(
                texture.id(),
                preview_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            let frame_size = display.frame.dimensions();
            if let Some(label) = &display.overlay.face_label {
                draw_label(&painter, label, frame_size, preview_rect, LABEL_FONT_SIZE);
            }
            if let Some(trend) = &display.overlay.trend {
                draw_label(&painter, trend, frame_size, preview_rect, TREND_FONT_SIZE);
            }
        }
        _ => {
            painter.text(
                preview_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Press \"Start Webcam\" to begin",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(150),
            );
        }
    }
}

/// Draw overlay text anchored at its bottom-left corner.
fn draw_label(
    painter: &egui::Painter,
    label: &TextLabel,
    frame_size: (u32, u32),
    preview_rect: egui::Rect,
    font_size: f32,
) {
    let pos = frame_to_screen(label.x, label.y, frame_size, preview_rect);
    let [r, g, b] = label.color;
    painter.text(
        pos,
        egui::Align2::LEFT_BOTTOM,
        &label.text,
        egui::FontId::proportional(font_size),
        egui::Color32::from_rgb(r, g, b),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_preview_image_has_fixed_size() {
        let frame = Frame::from_pixel(1280, 720, Rgb([10, 200, 30]));
        let image = preview_image(&frame);

        assert_eq!(image.size, [640, 360]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgb(10, 200, 30));
    }

    #[test]
    fn test_preview_image_stretches_other_aspect_ratios() {
        let frame = Frame::from_pixel(640, 480, Rgb([0, 0, 0]));
        assert_eq!(preview_image(&frame).size, [640, 360]);
    }
}
