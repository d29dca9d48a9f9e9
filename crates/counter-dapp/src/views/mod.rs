//! Views shown while a wallet is connected. Each `render` returns the
//! counter the user picked, if any, and leaves navigation to the app.

pub mod counter;
pub mod create;
pub mod search;
