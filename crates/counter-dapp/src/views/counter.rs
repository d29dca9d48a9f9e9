use counter_dapp_core::{AccountId, CounterId, CounterLedgerPort, CounterObject};

use crate::ui;

#[derive(Debug, Default)]
pub struct CounterViewState {
    loaded_id: Option<CounterId>,
    counter: Option<CounterObject>,
    not_found: bool,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

impl CounterViewState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    pub fn counter(&self) -> Option<&CounterObject> {
        self.counter.as_ref()
    }

    pub fn is_not_found(&self) -> bool {
        self.not_found
    }

    pub fn load<L: CounterLedgerPort>(&mut self, ledger: &L, id: &CounterId) {
        self.loaded_id = Some(id.clone());
        match ledger.get_counter(id) {
            Ok(Some(counter)) => {
                self.counter = Some(counter);
                self.not_found = false;
            }
            Ok(None) => {
                self.counter = None;
                self.not_found = true;
            }
            Err(e) => self.set_error(format!("Failed to load counter: {e}")),
        }
    }

    /// Fetches the counter once per opened id.
    pub fn ensure_loaded<L: CounterLedgerPort>(&mut self, ledger: &L, id: &CounterId) {
        if self.loaded_id.as_ref() != Some(id) {
            *self = Self::default();
            self.load(ledger, id);
        }
    }

    pub fn increment<L: CounterLedgerPort>(&mut self, ledger: &L, id: &CounterId, sender: AccountId) {
        match ledger.increment(id, sender) {
            Ok(counter) => {
                self.set_info(format!("Counter incremented to {}", counter.value));
                self.counter = Some(counter);
            }
            Err(e) => self.set_error(format!("Increment failed: {e}")),
        }
    }

    pub fn reset<L: CounterLedgerPort>(&mut self, ledger: &L, id: &CounterId, sender: AccountId) {
        match ledger.reset(id, sender) {
            Ok(counter) => {
                self.set_info("Counter reset to 0");
                self.counter = Some(counter);
            }
            Err(e) => self.set_error(format!("Reset failed: {e}")),
        }
    }
}

pub fn render<L: CounterLedgerPort>(
    ui: &mut egui::Ui,
    state: &mut CounterViewState,
    ledger: &L,
    id: &CounterId,
    account: AccountId,
) {
    state.ensure_loaded(ledger, id);

    if state.is_not_found() {
        ui::error_message(ui, "Counter not found on this network.");
        return;
    }

    if let Some(counter) = state.counter().cloned() {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(format!("Count: {}", counter.value))
                .size(32.0)
                .strong(),
        );
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui::primary_button(ui, "Increment").clicked() {
                state.increment(ledger, id, account);
            }
            if counter.is_owned_by(&account) && ui::secondary_button(ui, "Reset").clicked() {
                state.reset(ledger, id, account);
            }
        });
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(format!("Owner: {}", counter.owner))
                .monospace()
                .weak()
                .small(),
        );
    }

    if let Some(error) = &state.last_error {
        ui.add_space(5.0);
        ui::error_message(ui, error);
    }
    if let Some(info) = &state.last_info {
        ui.add_space(5.0);
        ui::success_message(ui, info);
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::B256;
    use counter_dapp_adapters::InMemoryLedger;
    use counter_dapp_core::{AccountId, CounterId, CounterLedgerPort};

    use super::CounterViewState;

    fn owner() -> AccountId {
        AccountId(B256::repeat_byte(0x01))
    }

    fn visitor() -> AccountId {
        AccountId(B256::repeat_byte(0x02))
    }

    #[test]
    fn unknown_counter_is_flagged_not_found() {
        let ledger = InMemoryLedger::default();
        let mut state = CounterViewState::default();
        state.ensure_loaded(&ledger, &CounterId::from_b256(B256::repeat_byte(0x09)));
        assert!(state.is_not_found());
        assert!(state.counter().is_none());
    }

    #[test]
    fn increment_and_owner_reset_update_the_shown_value() {
        let ledger = InMemoryLedger::default();
        let created = ledger.create_counter(owner()).expect("create");
        let mut state = CounterViewState::default();
        state.ensure_loaded(&ledger, &created.id);

        state.increment(&ledger, &created.id, visitor());
        assert_eq!(state.counter().map(|c| c.value), Some(1));
        assert_eq!(state.last_info.as_deref(), Some("Counter incremented to 1"));

        state.reset(&ledger, &created.id, visitor());
        assert!(state.last_error.as_deref().is_some_and(|e| e.contains("NOT_OWNER")));
        assert_eq!(state.counter().map(|c| c.value), Some(1));

        state.reset(&ledger, &created.id, owner());
        assert_eq!(state.counter().map(|c| c.value), Some(0));
        assert!(state.last_error.is_none());
    }

    #[test]
    fn switching_counters_reloads_state() {
        let ledger = InMemoryLedger::default();
        let first = ledger.create_counter(owner()).expect("create");
        let second = ledger.create_counter(owner()).expect("create");
        ledger.increment(&second.id, owner()).expect("increment");

        let mut state = CounterViewState::default();
        state.ensure_loaded(&ledger, &first.id);
        state.increment(&ledger, &first.id, owner());
        state.ensure_loaded(&ledger, &second.id);
        assert_eq!(state.counter().map(|c| c.id.clone()), Some(second.id));
        assert_eq!(state.counter().map(|c| c.value), Some(1));
        assert!(state.last_info.is_none());
    }
}
