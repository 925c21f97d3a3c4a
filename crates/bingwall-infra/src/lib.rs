//! bingwall-infra: OS adapters (HTTP, scratch storage, desktop backends, IPC).

pub mod env_detect;
pub mod http;
pub mod ipc;
pub mod pipeline;
pub mod scratch;
pub mod settings;
pub mod wallpaper;
