use crate::nvm::version::NodeVersion;

/// Whether a switch applies to the calling shell only or becomes the
/// persistent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationScope {
    SessionOnly,
    Default,
}

/// Translate a chosen version into the shell commands that realize it.
///
/// For `Default` the order matters: the alias must exist before
/// `nvm use default` resolves it.
pub fn plan(version: &NodeVersion, scope: ActivationScope) -> Vec<String> {
    match scope {
        ActivationScope::SessionOnly => vec![format!("nvm use {version}")],
        ActivationScope::Default => vec![
            format!("nvm alias default {version}"),
            "nvm use default".to_string(),
        ],
    }
}
