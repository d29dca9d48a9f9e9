use counter_dapp_core::{AccountId, CounterId, CounterLedgerPort};

use crate::ui;

#[derive(Debug, Default)]
pub struct CreateViewState {
    pub last_error: Option<String>,
}

impl CreateViewState {
    pub fn create<L: CounterLedgerPort>(&mut self, ledger: &L, owner: AccountId) -> Option<CounterId> {
        match ledger.create_counter(owner) {
            Ok(counter) => {
                self.last_error = None;
                Some(counter.id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "counter creation failed");
                self.last_error = Some(format!("Failed to create counter: {e}"));
                None
            }
        }
    }
}

pub fn render<L: CounterLedgerPort>(
    ui: &mut egui::Ui,
    state: &mut CreateViewState,
    ledger: &L,
    owner: AccountId,
) -> Option<CounterId> {
    ui::styled_heading(ui, "Create a New Counter");
    ui.label("Create a shared counter object that anyone can increment.");
    ui.add_space(15.0);

    let mut created = None;
    if ui::primary_button(ui, "Create Counter").clicked() {
        created = state.create(ledger, owner);
    }

    if let Some(error) = &state.last_error {
        ui.add_space(10.0);
        ui::error_message(ui, error);
    }
    created
}
