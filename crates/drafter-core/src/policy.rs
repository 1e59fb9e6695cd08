//! # Policy Names
//!
//! [`PolicyName`] is the only input the template depends on. The sole
//! constraint is that it is non-empty; whether the policy actually exists is
//! checked separately against the filesystem by [`crate::locate_policy`].

use serde::{Deserialize, Serialize};

use crate::error::EmitError;

/// Name of a policy directory under `policies/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PolicyName(String);

impl PolicyName {
    /// Create a validated policy name.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::MissingArgument`] for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, EmitError> {
        let s = value.into();
        if s.is_empty() {
            return Err(EmitError::MissingArgument {
                flag: "--policy-name",
            });
        }
        Ok(Self(s))
    }

    /// Access the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PolicyName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for PolicyName {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PolicyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PolicyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn new_accepts_non_empty() {
        let name = PolicyName::new("widget").unwrap();
        assert_eq!(name.as_str(), "widget");
        assert_eq!(name.to_string(), "widget");
    }

    #[test]
    fn new_rejects_empty() {
        let err = PolicyName::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgument);
        assert!(err.to_string().contains("--policy-name"));
    }

    #[test]
    fn whitespace_is_kept_verbatim() {
        // Only emptiness is rejected; the directory lookup decides the rest.
        let name = PolicyName::new(" widget").unwrap();
        assert_eq!(name.as_str(), " widget");
    }

    #[test]
    fn from_str_validates() {
        assert!("widget".parse::<PolicyName>().is_ok());
        assert!("".parse::<PolicyName>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = PolicyName::new("widget").unwrap();
        let yaml = serde_yaml::to_string(&name).unwrap();
        assert_eq!(yaml.trim(), "widget");
    }

    #[test]
    fn deserialize_rejects_empty() {
        let ok: PolicyName = serde_yaml::from_str("widget").unwrap();
        assert_eq!(ok.as_str(), "widget");

        let err = serde_yaml::from_str::<PolicyName>("''");
        assert!(err.is_err());
    }
}
