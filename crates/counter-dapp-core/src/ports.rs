use thiserror::Error;

use crate::domain::{AccountId, ConnectionState, CounterId, CounterObject};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("policy error: {0}")]
    Policy(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// Router surface backing deep links. Values never include the leading `#`.
pub trait FragmentPort {
    fn read(&self) -> Result<String, PortError>;
    fn write(&self, value: &str) -> Result<(), PortError>;

    fn clear(&self) -> Result<(), PortError> {
        self.write("")
    }
}

pub trait WalletSessionPort {
    fn connection_state(&self) -> Result<ConnectionState, PortError>;
    fn connect(&self) -> Result<AccountId, PortError>;
    fn disconnect(&self) -> Result<(), PortError>;
}

pub trait CounterLedgerPort {
    fn create_counter(&self, owner: AccountId) -> Result<CounterObject, PortError>;
    fn get_counter(&self, id: &CounterId) -> Result<Option<CounterObject>, PortError>;
    fn increment(&self, id: &CounterId, sender: AccountId) -> Result<CounterObject, PortError>;
    fn reset(&self, id: &CounterId, sender: AccountId) -> Result<CounterObject, PortError>;
    fn list_counters(&self, owner: AccountId) -> Result<Vec<CounterObject>, PortError>;
}
