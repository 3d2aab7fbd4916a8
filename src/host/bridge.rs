//! Optional capability interface toward the embedding shell.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// User context supplied by the embedding shell, if the user shared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl HostUser {
    /// Display name: "First Last" when a last name is present.
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }
}

/// Capability surface offered by the embedding shell.
pub trait HostShell: Send + Sync {
    /// Tell the shell the app finished loading.
    fn signal_ready(&self);

    /// Ask the shell to expand the app viewport to full height.
    fn expand_viewport(&self);

    /// Ask the shell to close the app.
    fn close_app(&self);

    /// The embedding user's context, if any was provided.
    fn current_user(&self) -> Option<HostUser>;
}

/// An optionally-present host capability.
///
/// Deployments embedded in the shell hold `Available`; standalone
/// deployments hold `Unavailable` and every call becomes a no-op.
#[derive(Clone)]
pub enum HostBridge {
    Available(Arc<dyn HostShell>),
    Unavailable,
}

impl HostBridge {
    /// Wrap a concrete shell handle.
    pub fn available(shell: Arc<dyn HostShell>) -> Self {
        Self::Available(shell)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Signal readiness, or do nothing without a shell.
    pub fn signal_ready(&self) {
        match self {
            Self::Available(shell) => shell.signal_ready(),
            Self::Unavailable => {}
        }
    }

    /// Expand the viewport, or do nothing without a shell.
    pub fn expand_viewport(&self) {
        match self {
            Self::Available(shell) => shell.expand_viewport(),
            Self::Unavailable => {}
        }
    }

    /// Close the app, or do nothing without a shell.
    pub fn close_app(&self) {
        match self {
            Self::Available(shell) => shell.close_app(),
            Self::Unavailable => {}
        }
    }

    /// The current user, or `None` without a shell.
    pub fn current_user(&self) -> Option<HostUser> {
        match self {
            Self::Available(shell) => shell.current_user(),
            Self::Unavailable => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingShell {
        ready_calls: AtomicUsize,
        expand_calls: AtomicUsize,
        close_calls: AtomicUsize,
    }

    impl HostShell for RecordingShell {
        fn signal_ready(&self) {
            self.ready_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn expand_viewport(&self) {
            self.expand_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn close_app(&self) {
            self.close_calls.fetch_add(1, Ordering::SeqCst);
        }

        fn current_user(&self) -> Option<HostUser> {
            Some(HostUser {
                id: 42,
                first_name: "Алексей".to_string(),
                last_name: Some("Петров".to_string()),
                username: Some("apetrov".to_string()),
            })
        }
    }

    #[test]
    fn test_unavailable_bridge_noops() {
        let bridge = HostBridge::Unavailable;

        bridge.signal_ready();
        bridge.expand_viewport();
        bridge.close_app();

        assert!(!bridge.is_available());
        assert_eq!(bridge.current_user(), None);
    }

    #[test]
    fn test_available_bridge_forwards_calls() {
        let shell = Arc::new(RecordingShell::default());
        let bridge = HostBridge::available(shell.clone());

        bridge.signal_ready();
        bridge.expand_viewport();

        assert!(bridge.is_available());
        assert_eq!(shell.ready_calls.load(Ordering::SeqCst), 1);
        assert_eq!(shell.expand_calls.load(Ordering::SeqCst), 1);
        assert_eq!(shell.close_calls.load(Ordering::SeqCst), 0);

        let user = bridge.current_user().unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.display_name(), "Алексей Петров");
    }

    #[test]
    fn test_display_name_without_last_name() {
        let user = HostUser {
            id: 7,
            first_name: "Мария".to_string(),
            last_name: None,
            username: None,
        };
        assert_eq!(user.display_name(), "Мария");
    }

    #[test]
    fn test_host_user_optional_fields_omitted() {
        let user = HostUser {
            id: 7,
            first_name: "Мария".to_string(),
            last_name: None,
            username: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("last_name"));
        assert!(!object.contains_key("username"));
    }
}
