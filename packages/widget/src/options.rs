use serde::{Deserialize, Serialize};

/// Lock name the host editor uses for required-field holds
pub const DEFAULT_LOCK_NAME: &str = "required-fields-error";

/// Per-instance settings supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Base lock name; each instance appends `:<instance id>`
    #[serde(default = "default_lock_name")]
    pub lock_name: String,
}

fn default_lock_name() -> String {
    DEFAULT_LOCK_NAME.to_string()
}

impl WidgetOptions {
    /// Lock name owned by the instance `instance_id`
    pub fn lock_name_for(&self, instance_id: &str) -> String {
        format!("{}:{}", self.lock_name, instance_id)
    }
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            lock_name: default_lock_name(),
        }
    }
}
