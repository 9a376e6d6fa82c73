// src/map/property.rs

/// Typed value of a custom map property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Float(f64),
    Str(String),
}

impl PropertyValue {
    /// The Tiled `type` attribute. Strings are Tiled's default and carry none.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            PropertyValue::Float(_) => Some("float"),
            PropertyValue::Str(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapProperty {
    pub name: String,
    pub value: PropertyValue,
}

impl MapProperty {
    pub fn float(name: &str, value: f64) -> Self {
        Self { name: name.to_string(), value: PropertyValue::Float(value) }
    }

    pub fn string(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: PropertyValue::Str(value.to_string()) }
    }
}
