//! Embedding host shell integration.
//!
//! When the mini-app runs inside the chat-platform shell, the shell offers a
//! small capability surface: a readiness signal, viewport control and the
//! current user's context. Outside the shell that capability does not exist.
//! Call sites receive an injected [`HostBridge`] and pattern-match on it
//! instead of probing ambient state; every operation degrades to a no-op
//! when the bridge is unavailable.

pub mod bridge;

pub use bridge::{HostBridge, HostShell, HostUser};
