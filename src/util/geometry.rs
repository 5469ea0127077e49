// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for coordinate transformations between
//! frame pixel coordinates, normalized coordinates and the on-screen
//! preview rectangle.

/// A 2D point with normalized coordinates (0.0 to 1.0 inside the frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Convert pixel coordinates to normalized coordinates (0.0 to 1.0).
pub fn normalize_coordinates(pixel_x: f64, pixel_y: f64, width: u32, height: u32) -> Point {
    Point {
        x: pixel_x / width.max(1) as f64,
        y: pixel_y / height.max(1) as f64,
    }
}

/// Map a frame pixel position into a screen rectangle showing the frame.
pub fn frame_to_screen(
    pixel_x: i32,
    pixel_y: i32,
    frame_size: (u32, u32),
    screen: egui::Rect,
) -> egui::Pos2 {
    let p = normalize_coordinates(pixel_x as f64, pixel_y as f64, frame_size.0, frame_size.1);
    egui::pos2(
        screen.min.x + p.x as f32 * screen.width(),
        screen.min.y + p.y as f32 * screen.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_to_screen_scales_into_preview() {
        let screen = egui::Rect::from_min_size(egui::pos2(80.0, 10.0), egui::vec2(640.0, 360.0));

        let tl = frame_to_screen(0, 0, (1280, 720), screen);
        assert_eq!(tl, egui::pos2(80.0, 10.0));

        let mid = frame_to_screen(640, 360, (1280, 720), screen);
        assert_eq!(mid, egui::pos2(400.0, 190.0));

        // labels above the frame edge land above the preview
        let above = frame_to_screen(0, -20, (1280, 720), screen);
        assert_eq!(above.x, 80.0);
        assert!(above.y.abs() < 1e-3);
    }

    #[test]
    fn test_normalize_empty_frame_does_not_divide_by_zero() {
        let p = normalize_coordinates(5.0, 5.0, 0, 0);
        assert_eq!(p, Point { x: 5.0, y: 5.0 });
    }
}
