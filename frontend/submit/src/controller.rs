use std::cell::Cell;

use tracing::{debug, error, info};

use crate::{
    client::PredictionClient,
    config::{Config, Labels, Links},
    form::FormInput,
    models::PredictionResponse,
    render::{FAILURE_MESSAGE, LOADING_HTML, render_failure, render_success},
    state::UiState,
    validate::{notification, validate},
};

/// The parts of the page the controller drives.
pub trait View {
    fn set_submit(&self, enabled: bool, label: &str);

    fn show_result(&self, html: &str);

    /// Blocking notification, e.g. `window.alert`.
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Validation failed and nothing was sent.
    Rejected(Vec<&'static str>),
    /// A submission was already in flight.
    Ignored,
    Success(PredictionResponse),
    Failure,
}

/// Validate → send → render for one bound form.
///
/// State lives in a `Cell` since the controller runs on a single-threaded
/// event loop; overlapping calls interleave only at the network await.
pub struct Controller<C, V> {
    client: C,
    view: V,
    links: Links,
    labels: Labels,
    state: Cell<UiState>,
}

impl<C, V> Controller<C, V>
where
    C: PredictionClient,
    V: View,
{
    pub fn new(client: C, view: V, config: &Config) -> Self {
        Self {
            client,
            view,
            links: config.links.clone(),
            labels: config.labels.clone(),
            state: Cell::new(UiState::Idle),
        }
    }

    pub fn state(&self) -> UiState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn handle_submit(&self, input: FormInput) -> Outcome {
        if self.state.get().is_busy() {
            debug!("Submission already in flight, ignoring");
            return Outcome::Ignored;
        }

        let errors = validate(&input);
        if !errors.is_empty() {
            info!(
                "Form rejected with {} errors, missing symptoms: {:?}",
                errors.len(),
                input.missing_symptoms()
            );
            self.view.notify(&notification(&errors));
            return Outcome::Rejected(errors);
        }

        let _busy = Busy::enter(self);

        match self.client.predict(&input).await {
            Ok(response) => {
                info!(
                    "Prediction {} ({}%) from {}",
                    response.prediction,
                    response.percentage(),
                    response.model_used
                );
                self.state.set(UiState::Success);
                self.view.show_result(&render_success(&response, &self.links));
                Outcome::Success(response)
            }
            Err(e) => {
                error!("Prediction failed: {e}");
                self.state.set(UiState::Failure);
                self.view.show_result(&render_failure(FAILURE_MESSAGE, &self.links));
                Outcome::Failure
            }
        }
    }
}

/// Marks the controller busy for its lifetime and always hands the submit
/// control back. A submission dropped mid-flight also clears the loading
/// notice.
struct Busy<'a, C, V>
where
    C: PredictionClient,
    V: View,
{
    controller: &'a Controller<C, V>,
}

impl<'a, C, V> Busy<'a, C, V>
where
    C: PredictionClient,
    V: View,
{
    fn enter(controller: &'a Controller<C, V>) -> Self {
        controller.state.set(UiState::Submitting);
        controller.view.set_submit(false, &controller.labels.busy);
        controller.view.show_result(LOADING_HTML);

        Self { controller }
    }
}

impl<C, V> Drop for Busy<'_, C, V>
where
    C: PredictionClient,
    V: View,
{
    fn drop(&mut self) {
        let controller = self.controller;

        if controller.state.get().is_busy() {
            debug!("Submission abandoned before a reply arrived");
            controller.state.set(UiState::Idle);
            controller.view.show_result("");
        }
        controller.view.set_submit(true, &controller.labels.idle);
    }
}
