//! Main application state and update loop

use eframe::egui;

#[cfg(target_arch = "wasm32")]
use counter_dapp_adapters::BrowserFragment;
#[cfg(not(target_arch = "wasm32"))]
use counter_dapp_adapters::MemoryFragment;
use counter_dapp_adapters::{AppConfig, DevWalletAdapter, InMemoryLedger};
use counter_dapp_core::{
    AccountId, ConnectionState, CounterId, NavigationController, NavigationError, Screen,
    SelectionTab, ViewTransition, WalletSessionPort,
};

use crate::ui;
use crate::views::counter::{self, CounterViewState};
use crate::views::create::{self, CreateViewState};
use crate::views::search::{self, SearchViewState};

#[cfg(not(target_arch = "wasm32"))]
pub type AppFragment = MemoryFragment;
#[cfg(target_arch = "wasm32")]
pub type AppFragment = BrowserFragment;

/// The main application state
pub struct App {
    config: AppConfig,
    /// View selection, mirrored into the URL fragment
    nav: NavigationController<AppFragment>,
    wallet: DevWalletAdapter,
    ledger: InMemoryLedger,
    create_state: CreateViewState,
    search_state: SearchViewState,
    counter_state: CounterViewState,
    /// Last refused navigation or wallet error
    last_error: Option<String>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig, fragment: AppFragment) -> Self {
        let wallet = DevWalletAdapter::with_config(&config);
        let mut app = Self {
            config,
            nav: NavigationController::new(fragment),
            wallet,
            ledger: InMemoryLedger::default(),
            create_state: CreateViewState::default(),
            search_state: SearchViewState::default(),
            counter_state: CounterViewState::default(),
            last_error: None,
        };
        app.sync_connection();
        app
    }

    fn sync_connection(&mut self) {
        let state = match self.wallet.connection_state() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "wallet state unavailable, treating as disconnected");
                ConnectionState::Disconnected
            }
        };
        self.nav.set_connection(state);
    }

    fn apply_navigation(&mut self, result: Result<ViewTransition, NavigationError>) {
        match result {
            Ok(_) => self.last_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "navigation refused");
                self.last_error = Some(e.to_string());
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open_zklogin(&self) {
        ui::open_url_new_tab(&self.config.zklogin_url);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_zklogin(&self) {
        ui::open_url_new_tab(&self.config.absolute_zklogin_url());
    }

    fn toggle_wallet(&mut self) {
        let result = if self.nav.connection().is_connected() {
            self.wallet.disconnect()
        } else {
            self.wallet.connect().map(|_| ())
        };
        if let Err(e) = result {
            self.last_error = Some(format!("Wallet error: {e}"));
        }
        self.sync_connection();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        self.sync_connection();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🔢 Counter dApp")
                        .size(22.0)
                        .color(egui::Color32::from_rgb(0, 212, 170)),
                );
                ui.add_space(20.0);
                ui.label(egui::RichText::new(self.config.network.name()).weak());
                if let Some(package) = &self.config.package_id {
                    ui.label(egui::RichText::new(format!("package {}", package.short())).weak())
                        .on_hover_text(package.as_str());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = match self.nav.connection().account() {
                        Some(account) => format!("Disconnect {}", short_account(account)),
                        None => "Connect Wallet".to_owned(),
                    };
                    if ui.button(label).clicked() {
                        self.toggle_wallet();
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} · build {} · {}",
                    self.config.network.fullnode_url(),
                    env!("GIT_HASH"),
                    env!("BUILD_TIME"),
                ))
                .weak()
                .small(),
            );
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                match (self.nav.screen(), self.nav.connection().account()) {
                    (Screen::Selection { tab }, Some(account)) => {
                        self.render_selection(ui, tab, account)
                    }
                    (Screen::CounterDetail { id }, Some(account)) => {
                        self.render_counter(ui, &id, account)
                    }
                    _ => self.render_connect_prompt(ui),
                }
                if let Some(error) = &self.last_error {
                    ui.add_space(10.0);
                    ui::error_message(ui, error);
                }
                ui.add_space(20.0);
            });
        });
    }
}

impl App {
    fn render_connect_prompt(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui::styled_heading(ui, "Welcome to Counter App");
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                ui.label("Please connect your wallet to get started or");
                if ui.link("log in with zkLogin").clicked() {
                    self.open_zklogin();
                }
                ui.label(".");
            });
        });
    }

    fn render_selection(&mut self, ui: &mut egui::Ui, tab: SelectionTab, account: AccountId) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(tab == SelectionTab::Create, "Create New Counter")
                .clicked()
            {
                let result = self.nav.select_create_view();
                self.apply_navigation(result);
            }
            if ui
                .selectable_label(tab == SelectionTab::Search, "Find Existing Counter")
                .clicked()
            {
                let result = self.nav.select_search_view();
                self.apply_navigation(result);
            }
        });
        ui.separator();
        ui.add_space(10.0);

        match tab {
            SelectionTab::Create => {
                if let Some(id) = create::render(ui, &mut self.create_state, &self.ledger, account) {
                    let result = self.nav.on_counter_created(id);
                    self.apply_navigation(result);
                }
            }
            SelectionTab::Search => {
                if let Some(id) = search::render(ui, &mut self.search_state, &self.ledger, account) {
                    let result = self.nav.on_counter_selected(id);
                    self.apply_navigation(result);
                }
            }
        }
    }

    fn render_counter(&mut self, ui: &mut egui::Ui, id: &CounterId, account: AccountId) {
        ui.horizontal(|ui| {
            if ui.button("← Back to Counter Selection").clicked() {
                let result = self.nav.go_back_to_selection();
                self.apply_navigation(result);
                self.counter_state = CounterViewState::default();
                // Pick up counters created or incremented meanwhile.
                self.search_state.refresh(&self.ledger, account);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui::copyable_value(ui, &format!("Counter ID: {}", id.short()), id.as_str());
            });
        });
        ui.separator();

        counter::render(ui, &mut self.counter_state, &self.ledger, id, account);
    }
}

fn short_account(account: AccountId) -> String {
    let full = account.to_string();
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}
