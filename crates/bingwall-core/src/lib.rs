//! bingwall-core: provider parsing, config, refresh outcomes, IPC protocol.

pub mod config;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod state;
