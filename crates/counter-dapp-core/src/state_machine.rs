use std::fmt;

use crate::domain::CounterId;
use crate::navigation::NavigationError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Create,
    Search,
    Counter(CounterId),
}

impl View {
    pub fn counter_id(&self) -> Option<&CounterId> {
        match self {
            View::Counter(id) => Some(id),
            View::Create | View::Search => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Create => "create",
            View::Search => "search",
            View::Counter(_) => "counter",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Counter(id) => write!(f, "counter({})", id.short()),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectCreate,
    SelectSearch,
    OpenCounter(CounterId),
    Back,
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::SelectCreate => "select_create",
            ViewAction::SelectSearch => "select_search",
            ViewAction::OpenCounter(_) => "open_counter",
            ViewAction::Back => "back",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTransition {
    pub from: View,
    pub to: View,
    pub reason: &'static str,
}

/// Pure transition table. Tab selection is only offered on the selection
/// screen, so it is rejected while a counter is open.
pub fn view_transition(
    view: &View,
    action: ViewAction,
) -> Result<(View, &'static str), NavigationError> {
    match (view, action) {
        (View::Create | View::Search, ViewAction::SelectCreate) => {
            Ok((View::Create, "create view selected"))
        }
        (View::Create | View::Search, ViewAction::SelectSearch) => {
            Ok((View::Search, "search view selected"))
        }
        (_, ViewAction::OpenCounter(id)) => Ok((View::Counter(id), "counter opened")),
        (_, ViewAction::Back) => Ok((View::Create, "returned to selection")),
        (View::Counter(_), action) => Err(NavigationError::IllegalTransition {
            from: view.name(),
            action: action.name(),
        }),
    }
}
