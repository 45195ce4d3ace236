use serde::{Deserialize, Serialize};

/// Summary of a saved view (topology, rack, GIS...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteViewObjectLight {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub view_class_name: String,
}

impl RemoteViewObjectLight {
    pub fn new(id: i64, name: impl Into<String>, view_class_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            view_class_name: view_class_name.into(),
        }
    }
}

/// A saved view with its serialized structure and an optional
/// background image, both opaque byte sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteViewObject {
    #[serde(flatten)]
    pub view: RemoteViewObjectLight,
    #[serde(default)]
    pub structure: Vec<u8>,
    #[serde(default)]
    pub background: Vec<u8>,
}

impl RemoteViewObject {
    pub fn new(view: RemoteViewObjectLight) -> Self {
        Self {
            view,
            structure: Vec::new(),
            background: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_round_trip() {
        let mut view = RemoteViewObject::new(RemoteViewObjectLight::new(9, "Bogota ring", "TopologyView"));
        view.structure = b"<view/>".to_vec();
        let json = serde_json::to_string(&view).unwrap();
        let back: RemoteViewObject = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }

    #[test]
    fn test_missing_byte_fields_default_to_empty() {
        let json = r#"{"id":3,"name":"rack-view","description":"","viewClassName":"RackView"}"#;
        let view: RemoteViewObject = serde_json::from_str(json).unwrap();
        assert!(view.structure.is_empty());
        assert!(view.background.is_empty());
    }
}
