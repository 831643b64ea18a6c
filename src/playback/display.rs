use crate::timefmt::format_seconds;

/// Label shown on the combined play/pause button.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportButton {
    Play,
    Pause,
}

/// What the transport widgets should currently show.
///
/// The slider position advances on the coarse second tick and is re-synced
/// on seek; the elapsed label follows the engine-reported time on the fine
/// tick. The two run on independent schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Name of the loaded track, as typed into or shown by the playing box.
    pub track_name: String,
    pub elapsed_label: String,
    pub length_label: String,
    /// Seek slider position, whole seconds.
    pub slider_pos: u32,
    pub slider_max: u32,
    pub button: TransportButton,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            track_name: String::new(),
            elapsed_label: "0s".to_string(),
            length_label: "0m".to_string(),
            slider_pos: 0,
            slider_max: 0,
            button: TransportButton::Play,
        }
    }
}

impl DisplayState {
    pub(super) fn set_elapsed(&mut self, seconds: u32) {
        self.elapsed_label = format_seconds(u64::from(seconds));
    }

    pub(super) fn set_length(&mut self, seconds: u32) {
        self.length_label = format_seconds(u64::from(seconds));
        self.slider_max = seconds;
        self.slider_pos = 0;
    }

    /// Reset the transport controls after a stop. The length label resets
    /// to `"0m"` and the track name clears only when asked; the slider
    /// maximum is left for the next load to replace.
    pub(super) fn reset(&mut self, reset_length: bool, reset_name: bool) {
        self.button = TransportButton::Play;
        self.slider_pos = 0;
        self.elapsed_label = "0s".to_string();

        if reset_length {
            self.length_label = "0m".to_string();
        }
        if reset_name {
            self.track_name.clear();
        }
    }
}

/// Color of the transient status message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Transient status message shown under the transport controls, expired by
/// the status tick one period after it was set.
#[derive(Debug, Default, Clone)]
pub struct StatusLine {
    message: Option<(String, Severity)>,
}

impl StatusLine {
    pub fn set(&mut self, text: impl Into<String>, severity: Severity) {
        self.message = Some((text.into(), severity));
    }

    pub fn current(&self) -> Option<(&str, Severity)> {
        self.message
            .as_ref()
            .map(|(text, severity)| (text.as_str(), *severity))
    }

    pub fn expire(&mut self) {
        self.message = None;
    }
}
