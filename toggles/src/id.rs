//! Identity for mounted widgets and their generated element ids.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Unique identifier for a mounted widget instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Create a new unique instance ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);
static PROCESS_TOKEN: OnceLock<String> = OnceLock::new();

/// Generate an element id that no other call in this process returns.
///
/// Ids look like `checkbox-3-9f1c2ab0`: a counter plus a random token picked
/// once per process, so hand-written ids such as `checkbox-3` never collide
/// with generated ones. Callers keep the result for the lifetime of the
/// widget, so each mounted instance gets exactly one.
pub fn generate_id(prefix: &str) -> String {
    let token = PROCESS_TOKEN.get_or_init(|| {
        let uuid = Uuid::new_v4().simple().to_string();
        uuid[..8].to_string()
    });
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}-{token}")
}
