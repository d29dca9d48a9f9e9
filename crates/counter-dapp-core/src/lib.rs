pub mod domain;
pub mod navigation;
pub mod ports;
pub mod state_machine;

pub use domain::{AccountId, ConnectionState, CounterId, CounterIdError, CounterObject};
pub use navigation::{initial_view, NavigationController, NavigationError, Screen, SelectionTab};
pub use ports::{CounterLedgerPort, FragmentPort, PortError, WalletSessionPort};
pub use state_machine::{view_transition, View, ViewAction, ViewTransition};
