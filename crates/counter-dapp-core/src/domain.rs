use std::fmt;

use alloy::primitives::{hex, B256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterIdError {
    #[error("counter id is empty")]
    Empty,
    #[error("counter id contains non-hex characters")]
    InvalidHex,
    #[error("counter id must be 64 hex digits, got {0}")]
    InvalidLength(usize),
}

/// Identifier of an on-chain counter object.
///
/// Holds the token exactly as it was given (prefix and case preserved) so it
/// can be mirrored back into the URL fragment unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CounterId {
    raw: String,
    key: B256,
}

impl CounterId {
    /// Number of bytes an object id encodes.
    pub const BYTE_LEN: usize = 32;

    pub fn parse(raw: &str) -> Result<Self, CounterIdError> {
        if raw.is_empty() {
            return Err(CounterIdError::Empty);
        }
        let digits = strip_hex_prefix(raw);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CounterIdError::InvalidHex);
        }
        if digits.len() != Self::BYTE_LEN * 2 {
            return Err(CounterIdError::InvalidLength(digits.len()));
        }
        let bytes = hex::decode(digits).map_err(|_| CounterIdError::InvalidHex)?;
        Ok(Self {
            raw: raw.to_owned(),
            key: B256::from_slice(&bytes),
        })
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Canonical `0x`-prefixed lowercase form of a 32-byte key.
    pub fn from_b256(key: B256) -> Self {
        Self {
            raw: format!("0x{}", hex::encode(key)),
            key,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn to_b256(&self) -> B256 {
        self.key
    }

    /// `first8...last8`, as shown next to the back button.
    pub fn short(&self) -> String {
        let tail = self.raw.len() - 8;
        format!("{}...{}", &self.raw[..8], &self.raw[tail..])
    }
}

fn strip_hex_prefix(raw: &str) -> &str {
    raw.strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw)
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for CounterId {
    type Error = CounterIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CounterId> for String {
    fn from(value: CounterId) -> Self {
        value.raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub B256);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Wallet session as seen by the navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        account: AccountId,
    },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }

    pub fn account(&self) -> Option<AccountId> {
        match self {
            ConnectionState::Connected { account } => Some(*account),
            ConnectionState::Disconnected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterObject {
    pub id: CounterId,
    pub owner: AccountId,
    pub value: u64,
}

impl CounterObject {
    pub fn is_owned_by(&self, account: &AccountId) -> bool {
        self.owner == *account
    }
}
