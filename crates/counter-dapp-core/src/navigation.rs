use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{ConnectionState, CounterId};
use crate::ports::{FragmentPort, PortError};
use crate::state_machine::{view_transition, View, ViewAction, ViewTransition};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("wallet is not connected")]
    Disconnected,
    #[error("illegal view transition: {action} from {from}")]
    IllegalTransition {
        from: &'static str,
        action: &'static str,
    },
    #[error("fragment update failed: {0}")]
    Fragment(#[from] PortError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTab {
    Create,
    Search,
}

/// What the shell should draw for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    ConnectPrompt,
    Selection { tab: SelectionTab },
    CounterDetail { id: CounterId },
}

enum FragmentSync {
    Keep,
    Write(String),
    Clear,
}

/// View selection for the counter app.
///
/// Owns the active [`View`] and the router it mirrors into. The wallet
/// connection is injected with [`NavigationController::set_connection`];
/// while disconnected every transition is refused and [`Screen::ConnectPrompt`]
/// is rendered.
pub struct NavigationController<F: FragmentPort> {
    view: View,
    connection: ConnectionState,
    fragment: F,
}

impl<F: FragmentPort> NavigationController<F> {
    /// Reads the fragment once to restore a deep-linked counter.
    pub fn new(fragment: F) -> Self {
        let view = match fragment.read() {
            Ok(raw) => initial_view(&raw),
            Err(e) => {
                warn!(error = %e, "fragment unreadable, starting on create view");
                View::Create
            }
        };
        info!(view = %view, "navigation initialized");
        Self {
            view,
            connection: ConnectionState::Disconnected,
            fragment,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn fragment(&self) -> &F {
        &self.fragment
    }

    pub fn set_connection(&mut self, connection: ConnectionState) {
        if self.connection != connection {
            debug!(connected = connection.is_connected(), "connection state changed");
        }
        self.connection = connection;
    }

    pub fn screen(&self) -> Screen {
        if !self.connection.is_connected() {
            return Screen::ConnectPrompt;
        }
        match &self.view {
            View::Create => Screen::Selection {
                tab: SelectionTab::Create,
            },
            View::Search => Screen::Selection {
                tab: SelectionTab::Search,
            },
            View::Counter(id) => Screen::CounterDetail { id: id.clone() },
        }
    }

    pub fn select_create_view(&mut self) -> Result<ViewTransition, NavigationError> {
        self.apply(ViewAction::SelectCreate)
    }

    pub fn select_search_view(&mut self) -> Result<ViewTransition, NavigationError> {
        self.apply(ViewAction::SelectSearch)
    }

    pub fn on_counter_created(&mut self, id: CounterId) -> Result<ViewTransition, NavigationError> {
        self.apply(ViewAction::OpenCounter(id))
    }

    pub fn on_counter_selected(&mut self, id: CounterId) -> Result<ViewTransition, NavigationError> {
        self.apply(ViewAction::OpenCounter(id))
    }

    /// Drops the open counter and clears the fragment.
    pub fn go_back_to_selection(&mut self) -> Result<ViewTransition, NavigationError> {
        self.apply(ViewAction::Back)
    }

    fn apply(&mut self, action: ViewAction) -> Result<ViewTransition, NavigationError> {
        if !self.connection.is_connected() {
            debug!(action = action.name(), "transition refused while disconnected");
            return Err(NavigationError::Disconnected);
        }

        let sync = match &action {
            ViewAction::OpenCounter(id) => FragmentSync::Write(id.as_str().to_owned()),
            ViewAction::Back => FragmentSync::Clear,
            ViewAction::SelectCreate | ViewAction::SelectSearch => FragmentSync::Keep,
        };
        let (next, reason) = view_transition(&self.view, action).inspect_err(|e| {
            debug!(error = %e, "transition rejected");
        })?;

        match sync {
            FragmentSync::Write(value) => self.fragment.write(&value)?,
            FragmentSync::Clear => self.fragment.clear()?,
            FragmentSync::Keep => {}
        }

        let from = std::mem::replace(&mut self.view, next);
        info!(from = %from, to = %self.view, reason, "view transition");
        Ok(ViewTransition {
            from,
            to: self.view.clone(),
            reason,
        })
    }
}

/// Counter view when `fragment` names a valid counter, create view otherwise.
pub fn initial_view(fragment: &str) -> View {
    if fragment.is_empty() {
        return View::Create;
    }
    match CounterId::parse(fragment) {
        Ok(id) => View::Counter(id),
        Err(e) => {
            debug!(error = %e, "ignoring invalid counter id in fragment");
            View::Create
        }
    }
}
