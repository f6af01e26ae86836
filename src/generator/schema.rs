//! Response schema declared to the generation endpoint.

use serde_json::json;

/// Number of features the generator must return for every service.
pub const FEATURE_COUNT: u64 = 3;

/// Generator for JSON object schemas with customization options.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    properties: Vec<(String, serde_json::Value)>,
    required: Vec<String>,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn build(self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = serde_json::Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }

        map.into()
    }
}

/// The content-record schema: sent with every request as the response
/// constraint, and enforced again locally before anything is cached.
pub fn content_schema() -> serde_json::Value {
    let feature = SchemaGenerator::new()
        .add_property("title", json!({"type": "string"}))
        .add_property("description", json!({"type": "string"}))
        .require("title")
        .require("description")
        .build();

    SchemaGenerator::new()
        .add_property("title", json!({"type": "string"}))
        .add_property("detailedDescription", json!({"type": "string"}))
        .add_property(
            "features",
            json!({
                "type": "array",
                "items": feature,
                "minItems": FEATURE_COUNT,
                "maxItems": FEATURE_COUNT,
            }),
        )
        .add_property("useCase", json!({"type": "string"}))
        .require("title")
        .require("detailedDescription")
        .require("features")
        .require("useCase")
        .build()
}
