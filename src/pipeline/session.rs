// src/pipeline/session.rs
//! Drives one submission at a time through the state machine

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::core::ParseService;
use crate::intake::IntakeController;
use crate::pipeline::state::{transition, Effect, Event, PipelineState};
use crate::pipeline::view::PageView;

/// Owns the intake controller, the current state and the result area.
///
/// `submit` borrows the session mutably for the whole network call, so a
/// session is always `Idle` when a new attempt starts.
#[derive(Debug, Default)]
pub struct Session {
    state: PipelineState,
    intake: IntakeController,
    view: PageView,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn into_view(self) -> PageView {
        self.view
    }

    pub fn intake(&self) -> &IntakeController {
        &self.intake
    }

    pub fn intake_mut(&mut self) -> &mut IntakeController {
        &mut self.intake
    }

    /// Feed one event through `transition` and apply the resulting effects.
    pub fn dispatch(&mut self, event: Event) {
        let (next, effects) = transition(&self.state, event);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "Pipeline transition");
        } else if effects.is_empty() {
            debug!(state = ?self.state, "Event ignored");
        }
        self.state = next;

        for effect in effects {
            if effect == Effect::ResetFileInput {
                self.intake.reset_file();
            }
            self.view.apply(effect);
        }
    }

    /// Validate, send, and render one attempt using the pending document.
    pub async fn submit<S>(&mut self, service: &S, raw_credential: &str) -> &PageView
    where
        S: ParseService + ?Sized,
    {
        let request = match self.intake.prepare(raw_credential) {
            Ok(request) => request,
            Err(err) => {
                warn!(code = err.code(), "Submission rejected: {}", err);
                self.dispatch(Event::Rejected(err));
                return &self.view;
            }
        };

        let attempt = Uuid::new_v4();
        let file_name = request.file.file_name.clone();
        let span = info_span!("cv_submission", %attempt, file = %file_name);

        async {
            self.dispatch(Event::Submit {
                attempt,
                file_name: file_name.clone(),
            });

            let outcome = service.parse_cv(request).await;
            match &outcome {
                Ok(_) => info!("CV parsed successfully"),
                Err(err) => warn!(code = err.code(), "CV parsing failed: {}", err),
            }

            self.dispatch(Event::Completed { attempt, outcome });
        }
        .instrument(span)
        .await;

        &self.view
    }
}
