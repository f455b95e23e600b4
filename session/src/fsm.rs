//! Session State Machine
//!
//! Drives the screens of a session: title, menus, play and the end-of-round
//! screen. Every transition carries the side effects the session has to run.

pub use proto::SessionState;

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    ChooseOnePlayer,
    ChooseTwoPlayer,
    OpenSkins,
    OpenSettings,
    PickSkin,
    ChooseDifficulty,
    SubmitNames,
    TogglePause,
    MatchOver,
    Rematch,
    Back,
    Exit,
}

/// Work the session performs after a transition is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Build a fresh match: score, ball, paddles and clock all reset
    StartMatch,
    /// Drop the current match
    EndMatch,
    SetPaused(bool),
    ActivateTitleAnimation(bool),
    Quit,
}

/// Effects to run when a session first shows the title screen
pub const TITLE_EFFECTS: &[Effect] = &[Effect::ActivateTitleAnimation(true)];

/// Target state of an accepted transition and the effects it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: SessionState,
    pub effects: &'static [Effect],
}

impl Transition {
    const fn to(to: SessionState) -> Self {
        Self { to, effects: &[] }
    }

    const fn with(to: SessionState, effects: &'static [Effect]) -> Self {
        Self { to, effects }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: SessionState,
    to_state: SessionState,
    action: SessionAction,
    effects: &'static [Effect],
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> SessionState {
        self.from_state
    }

    pub fn to_state(&self) -> SessionState {
        self.to_state
    }

    pub fn action(&self) -> SessionAction {
        self.action
    }

    /// Effects to run; empty when the transition was rejected
    pub fn effects(&self) -> &'static [Effect] {
        self.effects
    }
}

/// Session Finite State Machine
#[derive(Debug)]
pub struct SessionFsm {
    state: SessionState,
}

impl SessionFsm {
    pub fn new() -> Self {
        Self {
            state: SessionState::Title,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        Self::next(self.state, action).is_some()
    }

    /// Attempt a transition. Invalid pairs leave the state unchanged.
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next) = Self::next(from_state, action) {
            self.state = next.to;
            tracing::info!(from = ?from_state, to = ?next.to, ?action, "session transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next.to,
                action,
                effects: next.effects,
            }
        } else {
            tracing::debug!(state = ?from_state, ?action, "transition rejected");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
                effects: &[],
            }
        }
    }

    /// Transition table
    pub fn next(state: SessionState, action: SessionAction) -> Option<Transition> {
        use Effect::*;
        use SessionAction as A;
        use SessionState as S;

        match (state, action) {
            // From Title
            (S::Title, A::Continue | A::Back) => Some(Transition::with(
                S::MainMenu,
                &[ActivateTitleAnimation(false)],
            )),

            // From MainMenu
            (S::MainMenu, A::ChooseOnePlayer) => Some(Transition::to(S::DifficultySelect)),
            (S::MainMenu, A::ChooseTwoPlayer) => Some(Transition::to(S::NameEntry)),
            (S::MainMenu, A::OpenSkins) => Some(Transition::to(S::SkinSelect)),
            (S::MainMenu, A::OpenSettings) => Some(Transition::to(S::Settings)),
            (S::MainMenu, A::Exit) => Some(Transition::with(S::Exited, &[Quit])),
            (S::MainMenu, A::Back) => Some(Transition::to(S::MainMenu)),

            // Into a fresh match
            (S::DifficultySelect, A::ChooseDifficulty) => {
                Some(Transition::with(S::Playing, &[StartMatch]))
            }
            (S::NameEntry, A::SubmitNames) => Some(Transition::with(S::Playing, &[StartMatch])),

            // From SkinSelect
            (S::SkinSelect, A::PickSkin) => Some(Transition::to(S::MainMenu)),

            // From Playing / Paused
            (S::Playing, A::TogglePause) => {
                Some(Transition::with(S::Paused, &[SetPaused(true)]))
            }
            (S::Paused, A::TogglePause) => {
                Some(Transition::with(S::Playing, &[SetPaused(false)]))
            }
            (S::Playing, A::MatchOver) => Some(Transition::to(S::RoundEnd)),
            (S::Playing | S::Paused, A::Back) => {
                Some(Transition::with(S::MainMenu, &[EndMatch]))
            }

            // From RoundEnd
            (S::RoundEnd, A::Rematch) => Some(Transition::with(S::Playing, &[StartMatch])),
            (S::RoundEnd, A::Back) => Some(Transition::with(S::MainMenu, &[EndMatch])),

            // Plain menu screens go back to the hub
            (S::DifficultySelect | S::NameEntry | S::SkinSelect | S::Settings, A::Back) => {
                Some(Transition::to(S::MainMenu))
            }

            // Invalid transition
            _ => None,
        }
    }

    /// Check if a match is running or paused
    pub fn in_match(&self) -> bool {
        matches!(self.state, SessionState::Playing | SessionState::Paused)
    }

    pub fn is_exited(&self) -> bool {
        self.state == SessionState::Exited
    }
}

impl Default for SessionFsm {
    fn default() -> Self {
        Self::new()
    }
}
