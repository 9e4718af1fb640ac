//! Handler configuration.

// ---------------------------------------------------------------------------
// BridgeConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`SkinChannelHandler`](crate::SkinChannelHandler).
///
/// Both values derive from the hosting plugin's name: the outbound
/// channel identifier keeps the name as-is, the permission namespace
/// lowercases it (permission nodes are conventionally lower-case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Channel identifier used for outbound replies.
    pub channel: String,

    /// Namespace prefix for permission nodes.
    pub permission_namespace: String,
}

impl BridgeConfig {
    /// Derives the configuration from the hosting plugin's name.
    pub fn for_plugin(plugin_name: &str) -> Self {
        Self {
            channel: plugin_name.to_owned(),
            permission_namespace: plugin_name.to_lowercase(),
        }
    }

    /// Node required to change one's own skin.
    pub fn setskin_node(&self) -> String {
        format!("{}.command.setskin", self.permission_namespace)
    }

    /// Node required to change another player's skin.
    pub fn setskin_other_node(&self) -> String {
        format!("{}.command.setskin.other", self.permission_namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_plugin_keeps_channel_case() {
        let config = BridgeConfig::for_plugin("ChangeSkin");
        assert_eq!(config.channel, "ChangeSkin");
        assert_eq!(config.permission_namespace, "changeskin");
    }

    #[test]
    fn test_permission_nodes() {
        let config = BridgeConfig::for_plugin("ChangeSkin");
        assert_eq!(config.setskin_node(), "changeskin.command.setskin");
        assert_eq!(
            config.setskin_other_node(),
            "changeskin.command.setskin.other"
        );
    }
}
