pub mod config;
pub mod fragment;
pub mod ledger;
pub mod wallet;

pub use config::{AppConfig, Network};
#[cfg(target_arch = "wasm32")]
pub use fragment::BrowserFragment;
pub use fragment::MemoryFragment;
pub use ledger::InMemoryLedger;
pub use wallet::DevWalletAdapter;
