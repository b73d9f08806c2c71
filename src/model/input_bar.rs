use serde::{Deserialize, Serialize};

/// Presentation mode of the quick-add input bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputBarMode {
    #[default]
    Collapsed,
    Focused,
    Expanded,
    Recording,
    Transcribing,
}

/// Something that happened to the input bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Focus,
    Blur,
    Expand,
    Collapse,
    StartRecording,
    StopRecording,
    TranscriptionDone,
    TranscriptionFailed,
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input bar cannot handle {event:?} while {from:?}")]
pub struct TransitionError {
    pub from: InputBarMode,
    pub event: InputEvent,
}

impl InputBarMode {
    /// Next mode for `event`, or an error if the pair is not in the table.
    pub fn on(self, event: InputEvent) -> Result<InputBarMode, TransitionError> {
        use InputBarMode::*;
        use InputEvent::*;

        let next = match (self, event) {
            (Collapsed, Focus) => Focused,
            (Collapsed, Expand) => Expanded,

            (Focused, Blur) => Collapsed,
            (Focused, Expand) => Expanded,
            (Focused, StartRecording) => Recording,
            (Focused, Submit) => Collapsed,

            (Expanded, Collapse) => Focused,
            (Expanded, Blur) => Collapsed,
            (Expanded, StartRecording) => Recording,
            (Expanded, Submit) => Collapsed,

            (Recording, StopRecording) => Transcribing,

            (Transcribing, TranscriptionDone) => Focused,
            (Transcribing, TranscriptionFailed) => Focused,

            (from, event) => return Err(TransitionError { from, event }),
        };
        Ok(next)
    }

    /// Whether typed text should be run through the detector in this mode
    pub fn accepts_text(self) -> bool {
        matches!(self, InputBarMode::Focused | InputBarMode::Expanded)
    }
}
