// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{HubCatalog, LegacyCatalog};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Item-backed document as stored by the platform: the item record plus its
/// `/data` payload. Migrations operate on whole models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemModel {
    pub item: ModelItem,
    #[serde(default)]
    pub data: ModelData,
}

impl ItemModel {
    /// Version gate read by every migration; absent properties count as 0.
    #[must_use]
    pub fn schema_version(&self) -> f64 {
        self.item
            .properties
            .as_ref()
            .map_or(0.0, |properties| properties.schema_version)
    }

    pub fn set_schema_version(&mut self, version: f64) {
        self.item
            .properties
            .get_or_insert_with(ItemProperties::default)
            .schema_version = version;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ItemProperties>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemProperties {
    #[serde(default, rename = "schemaVersion")]
    pub schema_version: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `/data` payload. The typed fields are the islands migrations touch; the
/// rest of the document rides along in `extra` bit for bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<LegacyCatalog>,
    #[serde(default, rename = "catalogv2", skip_serializing_if = "Option::is_none")]
    pub catalog_v2: Option<HubCatalog>,
    #[serde(default, rename = "useCatalogV2", skip_serializing_if = "Option::is_none")]
    pub use_catalog_v2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<InitiativeStep>>,
    #[serde(
        default,
        rename = "recommendedTemplates",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_templates: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InitiativeStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "templateIds", skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
