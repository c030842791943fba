// src/pipeline/state.rs
//! Submission state machine as a pure function of (state, event)

use serde_json::Value;
use uuid::Uuid;

use crate::error::SubmitError;
use crate::render::RenderedProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Loading {
        attempt: Uuid,
    },
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Intake refused the attempt before any network activity.
    Rejected(SubmitError),
    /// A validated request is about to be sent.
    Submit { attempt: Uuid, file_name: String },
    /// The remote call for `attempt` resolved.
    Completed {
        attempt: Uuid,
        outcome: Result<Value, SubmitError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowError(String),
    HideError,
    HideResult,
    ShowLoading,
    HideLoading,
    FocusCredential,
    SelectFile(String),
    ResetFileInput,
    RenderResult(Box<RenderedProfile>),
}

/// Compute the next state and the UI effects to apply, in order.
///
/// While `Loading`, only the matching `Completed` is accepted; anything else
/// leaves the state unchanged and produces no effects.
pub fn transition(state: &PipelineState, event: Event) -> (PipelineState, Vec<Effect>) {
    match (*state, event) {
        (PipelineState::Idle, Event::Rejected(err)) => {
            let mut effects = vec![Effect::ShowError(err.to_string())];
            if err == SubmitError::MissingCredential {
                effects.push(Effect::FocusCredential);
            }
            (PipelineState::Idle, effects)
        }

        (PipelineState::Idle, Event::Submit { attempt, file_name }) => (
            PipelineState::Loading { attempt },
            vec![
                Effect::SelectFile(file_name),
                Effect::HideError,
                Effect::HideResult,
                Effect::ShowLoading,
            ],
        ),

        (PipelineState::Loading { attempt: current }, Event::Completed { attempt, outcome })
            if current == attempt =>
        {
            let mut effects = match outcome.and_then(render) {
                Ok(rendered) => vec![Effect::RenderResult(Box::new(rendered))],
                Err(err) => vec![Effect::ShowError(err.to_string())],
            };
            effects.push(Effect::HideLoading);
            effects.push(Effect::ResetFileInput);
            (PipelineState::Idle, effects)
        }

        (current, _) => (current, Vec::new()),
    }
}

fn render(response: Value) -> Result<RenderedProfile, SubmitError> {
    RenderedProfile::from_response(&response)
        .map_err(|e| SubmitError::TransportError(e.to_string()))
}
