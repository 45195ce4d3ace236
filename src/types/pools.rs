use crate::types::objects::RemoteObject;
use serde::{Deserialize, Serialize};

/// A container of inventory objects of a given class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub class_name: String,
    pub pool_type: i32,
}

impl RemotePool {
    pub fn new(id: impl Into<String>, name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            class_name: class_name.into(),
            pool_type: 0,
        }
    }
}

/// An inventory proxy: an external-system stand-in for an inventory
/// object. On the wire it is a plain object record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteInventoryProxy {
    #[serde(flatten)]
    pub object: RemoteObject,
}

impl RemoteInventoryProxy {
    pub fn new(object: RemoteObject) -> Self {
        Self { object }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::objects::{RemoteObjectLight, StringPair};

    #[test]
    fn test_pool_round_trip() {
        let pool = RemotePool {
            id: "p-1".to_string(),
            name: "Routers".to_string(),
            description: "Backbone routers".to_string(),
            class_name: "Router".to_string(),
            pool_type: 2,
        };
        let json = serde_json::to_string(&pool).unwrap();
        let back: RemotePool = serde_json::from_str(&json).unwrap();
        assert_eq!(pool, back);
    }

    #[test]
    fn test_pool_field_order_matches_schema() {
        let pool = RemotePool::new("p-2", "Switches", "Switch");
        let json = serde_json::to_string(&pool).unwrap();

        let positions: Vec<usize> = ["\"id\"", "\"name\"", "\"description\"", "\"className\"", "\"poolType\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_proxy_carries_object_fields() {
        let mut object = RemoteObject::new(RemoteObjectLight::new("x-9", "InventoryProxy", "osp-proxy"));
        object.attributes.push(StringPair::new("externalId", "OSP-4711"));
        let proxy = RemoteInventoryProxy::new(object);

        let json = serde_json::to_string(&proxy).unwrap();
        assert!(json.contains("\"className\":\"InventoryProxy\""));

        let back: RemoteInventoryProxy = serde_json::from_str(&json).unwrap();
        assert_eq!(proxy, back);
    }
}
