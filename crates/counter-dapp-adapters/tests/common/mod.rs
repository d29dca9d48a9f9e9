#![allow(dead_code)]

use std::collections::HashMap;

use counter_dapp_adapters::{AppConfig, DevWalletAdapter, InMemoryLedger, MemoryFragment};
use counter_dapp_core::{NavigationController, WalletSessionPort};

pub struct Harness {
    pub wallet: DevWalletAdapter,
    pub ledger: InMemoryLedger,
    pub nav: NavigationController<MemoryFragment>,
}

impl Harness {
    pub fn new(fragment: &str) -> Self {
        Self {
            wallet: DevWalletAdapter::new("test-seed"),
            ledger: InMemoryLedger::default(),
            nav: NavigationController::new(MemoryFragment::new(fragment)),
        }
    }

    pub fn sync_connection(&mut self) {
        let state = self.wallet.connection_state().expect("wallet state");
        self.nav.set_connection(state);
    }

    pub fn connect(&mut self) {
        self.wallet.connect().expect("connect wallet");
        self.sync_connection();
    }
}

pub fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}
