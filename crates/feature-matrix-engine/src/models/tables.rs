use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::support_status::SupportStatus;

/// One row of a feature support matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Support in the base game.
    #[serde(default)]
    pub core: SupportStatus,
    /// Support through mods.
    #[serde(default)]
    pub r#mod: SupportStatus,
    /// Free text, may contain markdown links.
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
    /// Display text for `url`, when it should not be shown raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub last_update: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub name: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTable {
    pub name: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInformation {
    pub name: String,
    pub meta: Meta,
}

/// A normalized data record. Serializes with a `type` tag naming the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TableInstance {
    FeatureTable(FeatureTable),
    ResourceTable(ResourceTable),
    MetaInformation(MetaInformation),
}

/// Which shape a raw record was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Feature,
    Resource,
    Meta,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableKind::Feature => "FeatureTable",
            TableKind::Resource => "ResourceTable",
            TableKind::Meta => "MetaInformation",
        })
    }
}

impl TableInstance {
    pub fn name(&self) -> &str {
        match self {
            TableInstance::FeatureTable(t) => &t.name,
            TableInstance::ResourceTable(t) => &t.name,
            TableInstance::MetaInformation(t) => &t.name,
        }
    }

    pub fn kind(&self) -> TableKind {
        match self {
            TableInstance::FeatureTable(_) => TableKind::Feature,
            TableInstance::ResourceTable(_) => TableKind::Resource,
            TableInstance::MetaInformation(_) => TableKind::Meta,
        }
    }

    /// Statuses used by this table's features. Empty for other shapes.
    pub fn statuses(&self) -> BTreeSet<SupportStatus> {
        match self {
            TableInstance::FeatureTable(t) => t
                .features
                .iter()
                .flat_map(|f| [f.core, f.r#mod])
                .collect(),
            _ => BTreeSet::new(),
        }
    }
}
