use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use alloy::primitives::{keccak256, B256};
use tracing::{debug, info};

use counter_dapp_core::{AccountId, CounterId, CounterLedgerPort, CounterObject, PortError};

/// Counter objects kept in process memory.
///
/// Objects are keyed by their 32-byte id, so prefixed and bare spellings of
/// the same id resolve to the same counter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    inner: Arc<Mutex<LedgerState>>,
}

#[derive(Debug, Default)]
struct LedgerState {
    counters: HashMap<B256, CounterObject>,
    created: Vec<B256>,
    sequence: u64,
}

impl InMemoryLedger {
    pub fn len(&self) -> Result<usize, PortError> {
        Ok(self.lock()?.counters.len())
    }

    pub fn is_empty(&self) -> Result<bool, PortError> {
        Ok(self.lock()?.counters.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("ledger lock poisoned: {e}")))
    }
}

fn object_key(owner: AccountId, sequence: u64) -> B256 {
    let mut preimage = Vec::with_capacity(40);
    preimage.extend_from_slice(owner.0.as_slice());
    preimage.extend_from_slice(&sequence.to_be_bytes());
    keccak256(preimage)
}

fn not_found(id: &CounterId) -> PortError {
    PortError::NotFound(format!("counter not found: {id}"))
}

impl CounterLedgerPort for InMemoryLedger {
    fn create_counter(&self, owner: AccountId) -> Result<CounterObject, PortError> {
        let mut g = self.lock()?;
        g.sequence = g.sequence.saturating_add(1);
        let key = object_key(owner, g.sequence);
        let counter = CounterObject {
            id: CounterId::from_b256(key),
            owner,
            value: 0,
        };
        g.counters.insert(key, counter.clone());
        g.created.push(key);
        info!(id = %counter.id, owner = %owner, "counter created");
        Ok(counter)
    }

    fn get_counter(&self, id: &CounterId) -> Result<Option<CounterObject>, PortError> {
        Ok(self.lock()?.counters.get(&id.to_b256()).cloned())
    }

    fn increment(&self, id: &CounterId, sender: AccountId) -> Result<CounterObject, PortError> {
        let mut g = self.lock()?;
        let counter = g
            .counters
            .get_mut(&id.to_b256())
            .ok_or_else(|| not_found(id))?;
        counter.value = counter.value.saturating_add(1);
        debug!(id = %counter.id, sender = %sender, value = counter.value, "counter incremented");
        Ok(counter.clone())
    }

    fn reset(&self, id: &CounterId, sender: AccountId) -> Result<CounterObject, PortError> {
        let mut g = self.lock()?;
        let counter = g
            .counters
            .get_mut(&id.to_b256())
            .ok_or_else(|| not_found(id))?;
        if !counter.is_owned_by(&sender) {
            return Err(PortError::Policy("NOT_OWNER".to_owned()));
        }
        counter.value = 0;
        debug!(id = %counter.id, "counter reset");
        Ok(counter.clone())
    }

    fn list_counters(&self, owner: AccountId) -> Result<Vec<CounterObject>, PortError> {
        let g = self.lock()?;
        Ok(g.created
            .iter()
            .filter_map(|key| g.counters.get(key))
            .filter(|counter| counter.is_owned_by(&owner))
            .cloned()
            .collect())
    }
}
