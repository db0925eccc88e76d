//! JSON codec for level payloads.
//!
//! Payloads carry a `className` discriminator naming the level variant.
//! Dispatch is a registry of constructors keyed by that string, populated at
//! startup; games with custom level subtypes register their own constructor
//! under their own class name. Timer state is never part of the payload, so
//! every decoded level comes back idle.

use std::collections::HashMap;

use ascent_domain::Level;
use serde_json::Value;

/// Discriminator field naming the level variant in a payload.
pub const CLASS_NAME_FIELD: &str = "className";

/// Class name of the built-in level type.
pub const LEVEL_CLASS: &str = "Level";

/// Errors decoding or encoding level payloads.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("payload is missing the `className` discriminator")]
    MissingClassName,

    #[error("unknown level class: {0}")]
    UnknownClass(String),

    #[error("invalid level payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Constructor for one level variant, fed the full JSON payload.
pub type LevelConstructor = fn(&Value) -> Result<Level, CodecError>;

/// Registry mapping `className` discriminators to level constructors.
pub struct LevelFactory {
    constructors: HashMap<String, LevelConstructor>,
}

impl LevelFactory {
    /// Empty registry, for hosts that want full control over variants.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registers a constructor, replacing any previous one for the class.
    pub fn register(&mut self, class_name: impl Into<String>, constructor: LevelConstructor) {
        self.constructors.insert(class_name.into(), constructor);
    }

    pub fn knows(&self, class_name: &str) -> bool {
        self.constructors.contains_key(class_name)
    }

    /// Decodes a level by dispatching on the payload's `className`.
    pub fn from_json_value(&self, payload: &Value) -> Result<Level, CodecError> {
        let class_name = payload
            .get(CLASS_NAME_FIELD)
            .and_then(Value::as_str)
            .ok_or(CodecError::MissingClassName)?;
        let constructor = self
            .constructors
            .get(class_name)
            .ok_or_else(|| CodecError::UnknownClass(class_name.to_string()))?;
        constructor(payload)
    }

    pub fn from_json_str(&self, json: &str) -> Result<Level, CodecError> {
        let payload: Value = serde_json::from_str(json)?;
        self.from_json_value(&payload)
    }
}

impl Default for LevelFactory {
    /// Registry with the built-in `"Level"` class pre-registered.
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(LEVEL_CLASS, |payload| {
            Ok(serde_json::from_value(payload.clone())?)
        });
        factory
    }
}

/// Encodes a level with the built-in class discriminator attached, so the
/// payload round-trips through `LevelFactory::from_json_value`.
pub fn to_json_value(level: &Level) -> Result<Value, CodecError> {
    let mut payload = serde_json::to_value(level)?;
    if let Value::Object(map) = &mut payload {
        map.insert(
            CLASS_NAME_FIELD.to_string(),
            Value::String(LEVEL_CLASS.to_string()),
        );
    }
    Ok(payload)
}
