pub mod form;

use crate::{
    client::GenerationClient,
    error::{Result, VistagenError},
    models::{BatchRequest, BatchResult, GenerationMode},
    prompt::{optimize, QUALITY_SUFFIX},
    store::StoreManager,
};

pub use form::GenerationForm;

/// Which prompt the user approved for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Original,
    Optimized,
}

#[derive(Debug, Clone)]
pub enum FlowState {
    /// User is editing the form.
    Idle,
    /// Optimizer ran; both prompt variants are held pending the user's pick.
    AwaitingApproval { original: String, optimized: String },
    /// A batch is in flight; further submissions are ignored.
    Generating,
    /// Batch returned with at least one success (possibly partial).
    Completed { result: BatchResult },
    /// Zero successes, or a precondition failed; the form is preserved.
    Failed { message: String },
}

/// The generation approval state machine. Optimization always runs before
/// generation and its output is only ever sent after an explicit choice;
/// the optimized text is English-templated and may diverge from the user's
/// intent, so the user stays in the loop.
pub struct GenerationFlow {
    client: GenerationClient,
    store: StoreManager,
    form: GenerationForm,
    state: FlowState,
}

impl GenerationFlow {
    pub fn new(client: GenerationClient, store: StoreManager) -> Self {
        Self {
            client,
            store,
            form: GenerationForm::new(),
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn form(&self) -> &GenerationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GenerationForm {
        &mut self.form
    }

    pub fn store(&self) -> &StoreManager {
        &self.store
    }

    /// Run the optimizer over the composed form and move to approval.
    /// Returns false when a submission is already pending or in flight.
    /// An empty prompt is a validation error and leaves the state alone.
    pub fn submit(&mut self) -> Result<bool> {
        match self.state {
            FlowState::AwaitingApproval { .. } | FlowState::Generating => {
                log::debug!("Submission ignored, a generation is already pending");
                return Ok(false);
            }
            _ => {}
        }

        let original = self.form.compose();
        if original.trim().is_empty() {
            return Err(VistagenError::ValidationError(
                "describe what you want to create first".into(),
            ));
        }

        let optimized = optimize(&original, self.form.style, self.form.mode);
        self.state = FlowState::AwaitingApproval {
            original,
            optimized,
        };
        Ok(true)
    }

    /// Abandon the pending approval, back to editing. No side effects.
    pub fn cancel(&mut self) {
        if matches!(self.state, FlowState::AwaitingApproval { .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// Surface a terminal state and return to editing, keeping the form.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.state,
            FlowState::Completed { .. } | FlowState::Failed { .. }
        ) {
            self.state = FlowState::Idle;
        }
    }

    /// Generate with the approved prompt, persist the successes (newest
    /// first) and land in `Completed` or `Failed`. Returns `Ok(None)` when
    /// nothing is awaiting approval, including while a batch is in flight.
    pub async fn approve(&mut self, choice: PromptChoice) -> Result<Option<BatchResult>> {
        let (original, optimized) = match &self.state {
            FlowState::AwaitingApproval {
                original,
                optimized,
            } => (original.clone(), optimized.clone()),
            FlowState::Generating => {
                log::debug!("Approval ignored, a batch is already in flight");
                return Ok(None);
            }
            _ => return Ok(None),
        };

        let chosen = match choice {
            PromptChoice::Optimized => optimized,
            PromptChoice::Original => {
                // The booster suffix applies even when the user keeps their
                // own wording.
                let mut prompt = original.clone();
                if self.form.mode == GenerationMode::Quality {
                    prompt.push_str(QUALITY_SUFFIX);
                }
                prompt
            }
        };

        self.state = FlowState::Generating;

        let mut request = BatchRequest::new(
            chosen,
            original,
            self.form.style,
            self.form.variant_count,
            self.form.aspect_ratio,
        );
        if let Some(negative) = self.form.negative() {
            request = request.with_negative_prompt(negative);
        }

        match self.run_batch(&request).await {
            Ok(result) => {
                if result.is_partial() {
                    log::warn!(
                        "Partial batch: {} of {} variant(s) succeeded",
                        result.succeeded,
                        result.requested
                    );
                }
                self.state = FlowState::Completed {
                    result: result.clone(),
                };
                Ok(Some(result))
            }
            Err(e) => {
                log::error!("Generation failed: {}", e);
                self.state = FlowState::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    async fn run_batch(&self, request: &BatchRequest) -> Result<BatchResult> {
        let result = self.client.generate_batch(request).await?;
        self.store.append(result.images.clone()).await?;
        Ok(result)
    }
}
