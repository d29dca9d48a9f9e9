use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::keccak256;
use tracing::info;

use counter_dapp_core::{AccountId, ConnectionState, PortError, WalletSessionPort};

use crate::AppConfig;

/// Wallet session with a single account derived from a seed string.
///
/// Stands in for a browser wallet provider: connecting always succeeds and
/// yields the same account for the same seed.
#[derive(Debug, Clone)]
pub struct DevWalletAdapter {
    account: AccountId,
    state: Arc<Mutex<ConnectionState>>,
}

impl DevWalletAdapter {
    pub fn new(seed: &str) -> Self {
        Self::with_session(seed, false)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::with_session(&config.dev_wallet_seed, config.auto_connect)
    }

    fn with_session(seed: &str, connected: bool) -> Self {
        let account = AccountId(keccak256(seed.as_bytes()));
        let state = if connected {
            ConnectionState::Connected { account }
        } else {
            ConnectionState::Disconnected
        };
        Self {
            account,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    fn lock(&self) -> Result<MutexGuard<'_, ConnectionState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("wallet lock poisoned: {e}")))
    }
}

impl WalletSessionPort for DevWalletAdapter {
    fn connection_state(&self) -> Result<ConnectionState, PortError> {
        Ok(*self.lock()?)
    }

    fn connect(&self) -> Result<AccountId, PortError> {
        let mut state = self.lock()?;
        if !state.is_connected() {
            info!(account = %self.account, "wallet connected");
        }
        *state = ConnectionState::Connected {
            account: self.account,
        };
        Ok(self.account)
    }

    fn disconnect(&self) -> Result<(), PortError> {
        let mut state = self.lock()?;
        if state.is_connected() {
            info!(account = %self.account, "wallet disconnected");
        }
        *state = ConnectionState::Disconnected;
        Ok(())
    }
}
