use serde::{Deserialize, Serialize};

/// A key/value attribute pair as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringPair {
    pub key: String,
    pub value: String,
}

impl StringPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Minimal representation of an inventory object: just enough to show
/// it in a list or tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObjectLight {
    pub id: String,
    pub class_name: String,
    pub name: String,
}

impl RemoteObjectLight {
    pub fn new(
        id: impl Into<String>,
        class_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_name: class_name.into(),
            name: name.into(),
        }
    }
}

/// Full representation of an inventory object: the light record plus
/// its attribute values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject {
    #[serde(flatten)]
    pub object: RemoteObjectLight,
    #[serde(default)]
    pub attributes: Vec<StringPair>,
}

impl RemoteObject {
    pub fn new(object: RemoteObjectLight) -> Self {
        Self {
            object,
            attributes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_round_trip() {
        let mut object = RemoteObject::new(RemoteObjectLight::new("o-1", "Router", "core-01"));
        object.attributes.push(StringPair::new("vendor", "ACME"));

        let json = serde_json::to_string(&object).unwrap();
        let back: RemoteObject = serde_json::from_str(&json).unwrap();
        assert_eq!(object, back);
    }

    #[test]
    fn test_missing_attributes_defaults_to_empty() {
        let json = r#"{"id":"o-2","className":"Switch","name":"edge-07"}"#;
        let object: RemoteObject = serde_json::from_str(json).unwrap();
        assert!(object.attributes.is_empty());
    }

    #[test]
    fn test_flattened_base_fields_come_first() {
        let object = RemoteObject::new(RemoteObjectLight::new("o-3", "Rack", "rack-12"));
        let json = serde_json::to_string(&object).unwrap();

        let id_pos = json.find("\"id\"").unwrap();
        let class_pos = json.find("\"className\"").unwrap();
        let attrs_pos = json.find("\"attributes\"").unwrap();
        assert!(id_pos < class_pos);
        assert!(class_pos < attrs_pos);
    }
}
