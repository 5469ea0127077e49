// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Start/stop/exit buttons.

use crate::session::RunState;

/// Button the user pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    None,
    Start,
    Stop,
    Exit,
}

/// Whether Start and Stop are enabled. Exit is always enabled.
pub fn enabled(state: RunState) -> (bool, bool) {
    match state {
        RunState::Stopped => (true, false),
        RunState::Running => (false, true),
    }
}

/// Display the control buttons, enabled according to the run state.
pub fn show(ui: &mut egui::Ui, state: RunState) -> ControlAction {
    let mut action = ControlAction::None;
    let (start_enabled, stop_enabled) = enabled(state);

    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 5.0;

        if ui
            .add_enabled(start_enabled, egui::Button::new("Start Webcam"))
            .clicked()
        {
            action = ControlAction::Start;
        }

        if ui
            .add_enabled(stop_enabled, egui::Button::new("Stop Webcam"))
            .clicked()
        {
            action = ControlAction::Stop;
        }

        if ui.button("Exit").clicked() {
            action = ControlAction::Exit;
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_enabled_only_while_stopped() {
        assert_eq!(enabled(RunState::Stopped), (true, false));
        assert_eq!(enabled(RunState::Running), (false, true));
    }

    #[test]
    fn test_show_without_input_takes_no_action() {
        let ctx = egui::Context::default();
        for state in [RunState::Stopped, RunState::Running] {
            let mut action = None;
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    action = Some(show(ui, state));
                });
            });
            assert_eq!(action, Some(ControlAction::None));
        }
    }
}
