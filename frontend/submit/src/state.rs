/// Progress of the current submission, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl UiState {
    pub fn is_busy(self) -> bool {
        self == UiState::Submitting
    }
}
