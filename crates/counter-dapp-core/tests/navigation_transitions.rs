use counter_dapp_core::{
    initial_view, view_transition, ConnectionState, NavigationController, NavigationError, Screen,
    SelectionTab, View, ViewAction,
};

mod common;
use common::{connected, connected_controller, counter_id, TestFragment, OTHER_ID, VALID_ID};

#[test]
fn valid_fragment_restores_counter_view() {
    for raw in [VALID_ID, &VALID_ID[2..]] {
        let nav = NavigationController::new(TestFragment::with_value(raw));
        assert_eq!(nav.view(), &View::Counter(counter_id(raw)));
    }
}

#[test]
fn invalid_or_empty_fragment_falls_back_to_create() {
    for raw in ["", "0x", "hello", "0x1234", &VALID_ID[..65]] {
        let nav = NavigationController::new(TestFragment::with_value(raw));
        assert_eq!(nav.view(), &View::Create, "fragment {raw:?}");
        assert_eq!(initial_view(raw), View::Create);
    }
}

#[test]
fn unreadable_fragment_falls_back_to_create() {
    let nav = NavigationController::new(TestFragment::unreadable());
    assert_eq!(nav.view(), &View::Create);
}

#[test]
fn loading_does_not_write_the_fragment() {
    let nav = NavigationController::new(TestFragment::with_value("garbage"));
    assert_eq!(nav.fragment().current(), "garbage");
    assert_eq!(nav.fragment().writes(), 0);
}

#[test]
fn counter_created_opens_counter_and_sets_fragment_from_any_view() {
    let starts: [fn(&mut NavigationController<TestFragment>); 3] = [
        |_| {},
        |nav| {
            nav.select_search_view().expect("search");
        },
        |nav| {
            nav.on_counter_selected(counter_id(OTHER_ID)).expect("open other");
        },
    ];
    for start in starts {
        let mut nav = connected_controller("");
        start(&mut nav);
        let transition = nav
            .on_counter_created(counter_id(VALID_ID))
            .expect("counter created");
        assert_eq!(transition.to, View::Counter(counter_id(VALID_ID)));
        assert_eq!(nav.view(), &View::Counter(counter_id(VALID_ID)));
        assert_eq!(nav.fragment().current(), VALID_ID);
    }
}

#[test]
fn counter_selected_mirrors_raw_token() {
    let mut nav = connected_controller("");
    nav.select_search_view().expect("search");
    let bare = &VALID_ID[2..];
    nav.on_counter_selected(counter_id(bare)).expect("select");
    assert_eq!(nav.fragment().current(), bare);
    assert_eq!(
        nav.screen(),
        Screen::CounterDetail {
            id: counter_id(bare)
        }
    );
}

#[test]
fn going_back_clears_fragment_and_returns_to_create() {
    let mut nav = connected_controller(VALID_ID);
    let transition = nav.go_back_to_selection().expect("back");
    assert_eq!(transition.from, View::Counter(counter_id(VALID_ID)));
    assert_eq!(transition.to, View::Create);
    assert_eq!(nav.view(), &View::Create);
    assert_eq!(nav.fragment().current(), "");
}

#[test]
fn search_then_create_never_visits_counter() {
    let mut nav = connected_controller("");
    let first = nav.select_search_view().expect("search");
    let second = nav.select_create_view().expect("create");
    for t in [&first, &second] {
        assert!(t.to.counter_id().is_none());
        assert!(t.from.counter_id().is_none());
    }
    assert_eq!(nav.view(), &View::Create);
    assert_eq!(nav.fragment().writes(), 0);
}

#[test]
fn tab_selection_is_rejected_while_counter_is_open() {
    let mut nav = connected_controller(VALID_ID);
    let err = nav.select_search_view().expect_err("must fail");
    assert_eq!(
        err,
        NavigationError::IllegalTransition {
            from: "counter",
            action: "select_search",
        }
    );
    assert!(err.to_string().contains("illegal view transition"));
    assert_eq!(nav.view(), &View::Counter(counter_id(VALID_ID)));
    assert_eq!(nav.fragment().current(), VALID_ID);
}

#[test]
fn disconnected_controller_refuses_every_transition() {
    let mut nav = NavigationController::new(TestFragment::with_value(VALID_ID));
    assert_eq!(nav.screen(), Screen::ConnectPrompt);

    assert_eq!(nav.select_create_view(), Err(NavigationError::Disconnected));
    assert_eq!(nav.select_search_view(), Err(NavigationError::Disconnected));
    assert_eq!(
        nav.on_counter_created(counter_id(OTHER_ID)),
        Err(NavigationError::Disconnected)
    );
    assert_eq!(
        nav.on_counter_selected(counter_id(OTHER_ID)),
        Err(NavigationError::Disconnected)
    );
    assert_eq!(nav.go_back_to_selection(), Err(NavigationError::Disconnected));

    assert_eq!(nav.view(), &View::Counter(counter_id(VALID_ID)));
    assert_eq!(nav.fragment().writes(), 0);
}

#[test]
fn screen_follows_connection_without_touching_view() {
    let mut nav = NavigationController::new(TestFragment::with_value(""));
    assert_eq!(nav.screen(), Screen::ConnectPrompt);
    nav.set_connection(connected());
    assert_eq!(
        nav.screen(),
        Screen::Selection {
            tab: SelectionTab::Create
        }
    );
    nav.select_search_view().expect("search");
    assert_eq!(
        nav.screen(),
        Screen::Selection {
            tab: SelectionTab::Search
        }
    );
    nav.set_connection(ConnectionState::Disconnected);
    assert_eq!(nav.screen(), Screen::ConnectPrompt);
    assert_eq!(nav.view(), &View::Search);
}

#[test]
fn failed_fragment_write_leaves_view_unchanged() {
    let mut nav = NavigationController::new(TestFragment::read_only(""));
    nav.set_connection(connected());
    let err = nav
        .on_counter_created(counter_id(VALID_ID))
        .expect_err("write must fail");
    assert!(matches!(err, NavigationError::Fragment(_)));
    assert_eq!(nav.view(), &View::Create);
}

#[test]
fn transition_table_matches_selection_rules() {
    let id = counter_id(VALID_ID);
    let (v, _) = view_transition(&View::Create, ViewAction::SelectSearch).expect("create -> search");
    assert_eq!(v, View::Search);
    let (v, _) = view_transition(&View::Search, ViewAction::SelectCreate).expect("search -> create");
    assert_eq!(v, View::Create);
    let (v, _) = view_transition(&View::Search, ViewAction::OpenCounter(id.clone()))
        .expect("search -> counter");
    assert_eq!(v, View::Counter(id.clone()));
    let (v, reason) = view_transition(&View::Counter(id.clone()), ViewAction::Back)
        .expect("counter -> create");
    assert_eq!(v, View::Create);
    assert_eq!(reason, "returned to selection");
    view_transition(&View::Counter(id), ViewAction::SelectCreate).expect_err("must fail");
}
