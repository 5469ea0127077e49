// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application window and egui App implementation.
//!
//! This module contains the application structure that implements the
//! egui::App trait. Every repaint runs one capture/classify pass through
//! the session, uploads the annotated frame and handles the control
//! buttons. Repaints are scheduled on a fixed interval whether or not the
//! camera is running.

use crate::config;
use crate::io::camera::FrameSource;
use crate::session::Session;
use crate::ui::{canvas, controls};
use crate::vision::classifier::EmotionClassifier;

/// Main application state.
pub struct EmotionApp<S, C> {
    /// Capture session (camera, classifier, history, status)
    session: Session<S, C>,

    /// Preview texture for the frame on display
    texture: Option<egui::TextureHandle>,
}

impl<S: FrameSource, C: EmotionClassifier> EmotionApp<S, C> {
    /// Create the application around a frame source and classifier.
    pub fn new(source: S, classifier: C) -> Self {
        Self {
            session: Session::new(source, classifier),
            texture: None,
        }
    }

    /// Run one tick and keep the preview texture in sync with the session.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        if self.session.tick() {
            if let Some(display) = self.session.display() {
                let image = canvas::preview_image(&display.frame);
                match &mut self.texture {
                    Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                    }
                }
            }
        }

        if self.session.display().is_none() {
            self.texture = None;
        }
    }

    /// Release the camera when the window is closed by the OS. A close that
    /// follows the Exit button finds the session already exited.
    fn handle_close_request(&mut self, requested: bool) {
        if requested && !self.session.has_exited() {
            self.session.exit();
        }
    }

    fn handle_action(&mut self, action: controls::ControlAction, ctx: &egui::Context) {
        match action {
            controls::ControlAction::Start => {
                if let Err(e) = self.session.start() {
                    log::error!("Could not start capture: {}", e);
                }
            }
            controls::ControlAction::Stop => {
                self.session.stop();
                self.texture = None;
            }
            controls::ControlAction::Exit => {
                self.session.exit();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            controls::ControlAction::None => {}
        }
    }
}

impl<S: FrameSource, C: EmotionClassifier> eframe::App for EmotionApp<S, C> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Window closed by the OS: release the camera before teardown
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        self.handle_close_request(close_requested);

        self.refresh_preview(ctx);

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    canvas::show(ui, &self.texture, self.session.display());

                    ui.add_space(5.0);
                    ui.label(egui::RichText::new(self.session.status().to_string()).size(16.0));
                    ui.add_space(5.0);

                    controls::show(ui, self.session.state())
                })
                .inner
            })
            .inner;

        self.handle_action(action, ctx);

        ctx.request_repaint_after(config::TICK_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::camera::UnavailableSource;
    use crate::session::RunState;
    use crate::vision::classifier::UnavailableClassifier;

    fn app() -> EmotionApp<UnavailableSource, UnavailableClassifier> {
        EmotionApp::new(
            UnavailableSource::new("no camera"),
            UnavailableClassifier::new("no classifier"),
        )
    }

    #[test]
    fn test_close_request_exits_session() {
        let mut app = app();

        app.handle_close_request(false);
        assert!(!app.session.has_exited());

        app.handle_close_request(true);
        assert!(app.session.has_exited());
        assert_eq!(app.session.state(), RunState::Stopped);
    }

    #[test]
    fn test_exit_then_close_request_exits_once() {
        let ctx = egui::Context::default();
        let mut app = app();

        app.handle_action(controls::ControlAction::Exit, &ctx);
        assert!(app.session.has_exited());

        app.handle_close_request(true);
        assert!(app.session.has_exited());
    }

    #[test]
    fn test_failed_start_reports_device_error() {
        let ctx = egui::Context::default();
        let mut app = app();

        app.handle_action(controls::ControlAction::Start, &ctx);
        assert_eq!(app.session.state(), RunState::Stopped);
        assert_eq!(
            app.session.status().to_string(),
            "Error: Could not open webcam."
        );
    }
}
