//! Output targets of the code generator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What kind of artifact to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The schema type plus a language → literal resource map.
    Resource,
    /// The schema type plus a runtime class switching between languages.
    #[default]
    Provider,
    /// Type declarations only, no executable values.
    Type,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Resource, Target::Provider, Target::Type];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Resource => "resource",
            Target::Provider => "provider",
            Target::Type => "type",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::ALL
            .into_iter()
            .find(|target| target.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown target '{}', expected one of: resource, provider, type",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("resource".parse::<Target>().unwrap(), Target::Resource);
        assert_eq!("Type".parse::<Target>().unwrap(), Target::Type);
        assert!("types".parse::<Target>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let target: Target = serde_json::from_str("\"provider\"").unwrap();
        assert_eq!(target, Target::Provider);
    }
}
