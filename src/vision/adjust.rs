// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Brightness/contrast adjustment applied before classification.

use crate::models::Frame;

/// Apply `saturate(|v * gain + offset|)` to every channel in place.
pub fn scale_abs(frame: &mut Frame, gain: f32, offset: f32) {
    for pixel in frame.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let v = (*channel as f32 * gain + offset).abs().round();
            *channel = v.min(255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_scale_abs_brightens_and_saturates() {
        let mut frame = Frame::from_fn(3, 1, |x, _| match x {
            0 => Rgb([0, 10, 100]),
            1 => Rgb([150, 170, 171]),
            _ => Rgb([255, 255, 255]),
        });

        scale_abs(&mut frame, 1.2, 50.0);

        assert_eq!(frame.get_pixel(0, 0), &Rgb([50, 62, 170]));
        assert_eq!(frame.get_pixel(1, 0), &Rgb([230, 254, 255]));
        assert_eq!(frame.get_pixel(2, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_negative_values_are_mirrored() {
        let mut frame = Frame::from_pixel(1, 1, Rgb([10, 0, 200]));
        scale_abs(&mut frame, 1.0, -30.0);
        assert_eq!(frame.get_pixel(0, 0), &Rgb([20, 30, 170]));
    }
}
