// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Camera capture.
//!
//! This module defines the frame source abstraction used by the session
//! and its webcam implementation. Frames are delivered as RGB buffers
//! ready for the processing pipeline.

use crate::error::CameraError;
use crate::models::Frame;

/// Something that produces frames on demand.
pub trait FrameSource {
    /// Acquire the device. Fails if it is missing or busy.
    fn open(&mut self) -> Result<(), CameraError>;

    /// Read the next frame from an open device.
    fn read(&mut self) -> Result<Frame, CameraError>;

    /// Release the device. Safe to call when already closed.
    fn close(&mut self);

    fn is_open(&self) -> bool;
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn open(&mut self) -> Result<(), CameraError> {
        (**self).open()
    }

    fn read(&mut self) -> Result<Frame, CameraError> {
        (**self).read()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}

/// Source used when the binary is built without a camera backend.
#[cfg_attr(feature = "webcam", allow(dead_code))]
pub struct UnavailableSource {
    reason: String,
}

#[cfg_attr(feature = "webcam", allow(dead_code))]
impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl FrameSource for UnavailableSource {
    fn open(&mut self) -> Result<(), CameraError> {
        Err(CameraError::Open(self.reason.clone()))
    }

    fn read(&mut self) -> Result<Frame, CameraError> {
        Err(CameraError::Capture(self.reason.clone()))
    }

    fn close(&mut self) {}

    fn is_open(&self) -> bool {
        false
    }
}

#[cfg(feature = "webcam")]
pub use webcam::WebcamSource;

#[cfg(feature = "webcam")]
mod webcam {
    use super::FrameSource;
    use crate::error::CameraError;
    use crate::models::Frame;
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    };
    use nokhwa::Camera;

    /// Webcam frame source backed by nokhwa.
    pub struct WebcamSource {
        index: u32,
        resolution: (u32, u32),
        camera: Option<Camera>,
    }

    impl WebcamSource {
        /// Create a source for the given device; nothing is opened yet.
        pub fn new(index: u32, width: u32, height: u32) -> Self {
            Self {
                index,
                resolution: (width, height),
                camera: None,
            }
        }
    }

    impl FrameSource for WebcamSource {
        fn open(&mut self) -> Result<(), CameraError> {
            if self.camera.is_some() {
                return Ok(());
            }

            let (width, height) = self.resolution;
            let requested = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(
                CameraFormat::new(Resolution::new(width, height), FrameFormat::MJPEG, 30),
            ));

            let mut camera = Camera::new(CameraIndex::Index(self.index), requested)
                .map_err(|e| CameraError::Open(e.to_string()))?;
            camera
                .open_stream()
                .map_err(|e| CameraError::Open(e.to_string()))?;

            let actual = camera.resolution();
            log::info!(
                "Opened camera {} ({}) at {}x{}",
                self.index,
                camera.info().human_name(),
                actual.width(),
                actual.height()
            );

            self.camera = Some(camera);
            Ok(())
        }

        fn read(&mut self) -> Result<Frame, CameraError> {
            let camera = self
                .camera
                .as_mut()
                .ok_or_else(|| CameraError::Capture("camera is not open".to_string()))?;

            let buffer = camera
                .frame()
                .map_err(|e| CameraError::Capture(e.to_string()))?;
            let decoded = buffer
                .decode_image::<RgbFormat>()
                .map_err(|e| CameraError::Capture(format!("failed to decode frame: {e}")))?;

            // nokhwa links its own `image` version, so rebuild from raw bytes
            let (width, height) = (decoded.width(), decoded.height());
            Frame::from_raw(width, height, decoded.into_raw()).ok_or_else(|| {
                CameraError::Capture(format!("frame buffer does not match {width}x{height}"))
            })
        }

        fn close(&mut self) {
            if let Some(mut camera) = self.camera.take() {
                if let Err(e) = camera.stop_stream() {
                    log::warn!("Error stopping camera stream: {}", e);
                }
                log::info!("Closed camera {}", self.index);
            }
        }

        fn is_open(&self) -> bool {
            self.camera.is_some()
        }
    }

    impl Drop for WebcamSource {
        fn drop(&mut self) {
            self.close();
        }
    }
}
