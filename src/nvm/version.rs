use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid version format: {0}")]
pub struct InvalidVersion(pub String);

/// An installed Node.js version such as `18.20.8`.
///
/// Components are kept numeric so ordering is dotted-tuple order rather
/// than lexicographic (`4.10.0` sorts after `4.9.1`). The derived `Ord`
/// compares the component vectors element-wise, which is exactly that.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeVersion {
    components: Vec<u64>,
}

impl NodeVersion {
    /// Parse a candidate with an optional leading `v`, the shape nvm uses
    /// for directory names and `nvm ls` tokens.
    pub fn parse_prefixed(token: &str) -> Option<Self> {
        token.strip_prefix('v').unwrap_or(token).parse().ok()
    }
}

impl FromStr for NodeVersion {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = Vec::new();
        for part in s.split('.') {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(InvalidVersion(s.to_string()));
            }
            let value = part.parse::<u64>().map_err(|_| InvalidVersion(s.to_string()))?;
            components.push(value);
        }
        Ok(NodeVersion { components })
    }
}

impl fmt::Display for NodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&rendered)
    }
}
