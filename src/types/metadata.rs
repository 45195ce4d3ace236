use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Metadata of a single class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAttributeMetadata {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub attribute_type: String,
    pub description: String,
    pub administrative: bool,
    pub visible: bool,
    pub read_only: bool,
    pub unique: bool,
    pub mandatory: bool,
    pub multiple: bool,
    pub order: i32,
}

/// Summary metadata of an inventory class, as returned by the listing
/// operations. The full record is [`RemoteClassMetadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClassMetadataLight {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub is_abstract: bool,
    pub custom: bool,
    pub in_design: bool,
    pub list_type: bool,
    pub viewable: bool,
    #[serde(default)]
    pub small_icon: Vec<u8>,
}

impl RemoteClassMetadataLight {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Full metadata of an inventory class: the light record plus
/// description, creation date, icon and attribute definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteClassMetadata {
    #[serde(flatten)]
    pub class: RemoteClassMetadataLight,
    pub description: String,
    /// Creation date as epoch milliseconds.
    pub creation_date: i64,
    pub countable: bool,
    #[serde(default)]
    pub icon: Vec<u8>,
    #[serde(default)]
    pub attributes: Vec<RemoteAttributeMetadata>,
}

impl RemoteClassMetadata {
    pub fn new(class: RemoteClassMetadataLight) -> Self {
        Self {
            class,
            description: String::new(),
            creation_date: 0,
            countable: false,
            icon: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.creation_date).single()
    }
}
