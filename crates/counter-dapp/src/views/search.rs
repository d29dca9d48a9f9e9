use counter_dapp_core::{AccountId, CounterId, CounterLedgerPort, CounterObject};

use crate::ui;

#[derive(Debug, Default)]
pub struct SearchViewState {
    pub query: String,
    pub counters: Vec<CounterObject>,
    loaded_for: Option<AccountId>,
    pub last_error: Option<String>,
}

impl SearchViewState {
    pub fn refresh<L: CounterLedgerPort>(&mut self, ledger: &L, owner: AccountId) {
        match ledger.list_counters(owner) {
            Ok(counters) => {
                self.counters = counters;
                self.loaded_for = Some(owner);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "listing counters failed");
                self.last_error = Some(format!("Failed to load counters: {e}"));
            }
        }
    }

    /// Reloads the list when the connected account changed.
    pub fn ensure_loaded<L: CounterLedgerPort>(&mut self, ledger: &L, owner: AccountId) {
        if self.loaded_for != Some(owner) {
            self.refresh(ledger, owner);
        }
    }

    /// Resolves the typed id to an existing counter.
    pub fn resolve_query<L: CounterLedgerPort>(&mut self, ledger: &L) -> Option<CounterId> {
        let id = match CounterId::parse(self.query.trim()) {
            Ok(id) => id,
            Err(e) => {
                self.last_error = Some(format!("Invalid counter id: {e}"));
                return None;
            }
        };
        match ledger.get_counter(&id) {
            Ok(Some(counter)) => {
                self.last_error = None;
                Some(counter.id)
            }
            Ok(None) => {
                self.last_error = Some(format!("No counter found with id {}", id.short()));
                None
            }
            Err(e) => {
                self.last_error = Some(format!("Lookup failed: {e}"));
                None
            }
        }
    }
}

pub fn render<L: CounterLedgerPort>(
    ui: &mut egui::Ui,
    state: &mut SearchViewState,
    ledger: &L,
    owner: AccountId,
) -> Option<CounterId> {
    state.ensure_loaded(ledger, owner);

    ui::styled_heading(ui, "Find an Existing Counter");
    ui.label("Open a counter by id, or pick one you created.");
    ui.add_space(15.0);

    let mut selected = None;
    ui.horizontal(|ui| {
        ui.label("Counter ID:");
        let response = ui::id_input(ui, &mut state.query);
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Open").clicked() || submitted {
            selected = state.resolve_query(ledger);
        }
    });

    if let Some(error) = &state.last_error {
        ui.add_space(5.0);
        ui::error_message(ui, error);
    }

    ui.add_space(15.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Your counters").strong().size(14.0));
        if ui.small_button("⟳").on_hover_text("Refresh").clicked() {
            state.refresh(ledger, owner);
        }
    });
    ui.separator();

    if state.counters.is_empty() {
        ui.label(egui::RichText::new("You have not created any counters yet.").weak());
    }
    for counter in &state.counters {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(counter.id.short()).monospace());
            ui.label(format!("value {}", counter.value));
            if ui.small_button("Open").clicked() {
                selected = Some(counter.id.clone());
            }
        });
    }

    selected
}
