//! Model identifier value object

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a model hosted by the local model server (Value Object)
///
/// The server owns the list of valid names (`llama3.2`, `qwen2.5-coder:7b`, ...),
/// so the only thing checked here is that the identifier is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model identifier, rejecting blank names
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(
                "model name cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelId {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let model: ModelId = "llama3.2".parse().unwrap();
        assert_eq!(model.to_string(), "llama3.2");
        assert_eq!(model.as_str(), "llama3.2");
    }

    #[test]
    fn test_model_with_tag() {
        let model: ModelId = "qwen2.5-coder:7b".parse().unwrap();
        assert_eq!(model.as_str(), "qwen2.5-coder:7b");
    }

    #[test]
    fn test_model_is_trimmed() {
        let model = ModelId::new("  mistral \n").unwrap();
        assert_eq!(model.as_str(), "mistral");
    }

    #[test]
    fn test_empty_model_rejected() {
        assert!(matches!(
            "".parse::<ModelId>(),
            Err(DomainError::InvalidModel(_))
        ));
        assert!(ModelId::new("   ").is_err());
    }

    #[test]
    fn test_model_serializes_as_string() {
        let model = ModelId::new("phi3").unwrap();
        assert_eq!(serde_json::to_string(&model).unwrap(), "\"phi3\"");

        let parsed: ModelId = serde_json::from_str("\"phi3\"").unwrap();
        assert_eq!(parsed, model);

        assert!(serde_json::from_str::<ModelId>("\"\"").is_err());
    }
}
