//! Session state machine.
//!
//! Discrete input events (keystrokes, clicks, refresh requests) map
//! onto one operation each against the station index and the arrival
//! board. The controller itself is pure and synchronous: it decides
//! what should happen and hands back a [`Directive`]; the web layer
//! performs the fetch and rendering it names.

use crate::domain::{ShortCode, Station};
use crate::stations::StationIndex;

/// Which station, if any, the session currently displays.
///
/// Mutated only by an explicit user pick or default initialization;
/// typing in the search box never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// No station selected yet; no board is shown.
    Uninitialized,
    /// A station is selected and its board may be displayed.
    Selected(ShortCode),
}

/// A discrete user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The search text changed.
    TextChanged(String),
    /// The user picked a station from the suggestion list.
    StationChosen(ShortCode),
    /// The user asked for the current station's board again.
    RefreshRequested,
    /// The user clicked outside the suggestion dropdown.
    DismissRequested,
}

/// What the caller should do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Display these suggestions under the search box.
    ShowSuggestions(Vec<Station>),
    /// Hide the suggestion dropdown.
    HideSuggestions,
    /// Fetch live trains for this station and render its board.
    FetchBoard(ShortCode),
}

/// The one user-surfaced session error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Refresh was requested before any station was selected.
    #[error("please select a station from the suggestions first")]
    NoStationSelected,
}

/// Per-session controller over [`SelectionState`].
#[derive(Debug)]
pub struct SessionController {
    state: SelectionState,
}

impl SessionController {
    /// A fresh, uninitialized session.
    pub fn new() -> Self {
        Self {
            state: SelectionState::Uninitialized,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.state
    }

    /// Try to establish the default station at session start.
    ///
    /// Returns a fetch directive when the default resolves; otherwise
    /// the session stays uninitialized and no board is shown.
    pub fn bootstrap(&mut self, index: &StationIndex, default: &ShortCode) -> Option<Directive> {
        let station = index.resolve(default)?;
        self.state = SelectionState::Selected(station.short_code.clone());
        Some(Directive::FetchBoard(station.short_code.clone()))
    }

    /// Apply one input event.
    pub fn handle(
        &mut self,
        index: &StationIndex,
        event: SessionEvent,
    ) -> Result<Directive, SessionError> {
        match event {
            SessionEvent::TextChanged(text) => {
                let matches = index.query(&text);
                if matches.is_empty() {
                    Ok(Directive::HideSuggestions)
                } else {
                    Ok(Directive::ShowSuggestions(
                        matches.into_iter().cloned().collect(),
                    ))
                }
            }

            SessionEvent::StationChosen(code) => {
                self.state = SelectionState::Selected(code.clone());
                Ok(Directive::FetchBoard(code))
            }

            SessionEvent::RefreshRequested => match &self.state {
                SelectionState::Selected(code) => Ok(Directive::FetchBoard(code.clone())),
                SelectionState::Uninitialized => Err(SessionError::NoStationSelected),
            },

            SessionEvent::DismissRequested => Ok(Directive::HideSuggestions),
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
