//! Typed views of the STAC documents served by CMR-STAC.
//!
//! Only the fields the walker navigates by are typed. Everything else the
//! server sends is kept in `additional_fields`. A document missing one of the
//! typed, non-optional fields fails to decode.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// A fetched JSON object, before it is decoded into one of the types below.
pub type Document = Map<String, Value>;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Link {
    /// The title, or the href for untitled links (`self`, `root`, ...).
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Catalog {
    pub id: String,
    pub stac_version: String,
    pub description: String,
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Response of a catalog's `collections` endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CollectionList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Collection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub extent: Extent,
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Collection {
    /// Start of the first temporal interval. `None` when the interval is open.
    pub fn temporal_start(&self) -> Option<&str> {
        self.extent.temporal.interval.first()?[0].as_deref()
    }

    /// End of the first temporal interval. `None` means ongoing.
    pub fn temporal_end(&self) -> Option<&str> {
        self.extent.temporal.interval.first()?[1].as_deref()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SpatialExtent {
    pub bbox: Vec<Vec<f64>>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TemporalExtent {
    pub interval: Vec<[Option<String>; 2]>,
}

/// One page of a collection's `items` endpoint.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ItemList {
    pub features: Vec<Item>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Item {
    pub id: String,
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    pub assets: IndexMap<String, Asset>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Item {
    pub fn datetime(&self) -> Option<&str> {
        self.properties.datetime.as_deref()
    }

    /// Percent cloud cover (`eo:cloud_cover`).
    pub fn cloud_cover(&self) -> Option<f64> {
        self.properties.cloud_cover
    }

    /// Asset names in the order the server listed them.
    pub fn asset_names(&self) -> impl Iterator<Item = &str> {
        self.assets.keys().map(String::as_str)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Properties {
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(
        rename = "eo:cloud_cover",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_cover: Option<f64>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Asset {
    /// The href as an absolute url, if it is one.
    pub fn url(&self) -> Option<Url> {
        stac::href_to_url(&self.href)
    }

    /// Last path segment of the href, used when saving the asset to disk.
    pub fn file_name(&self) -> Option<String> {
        let url = self.url()?;
        let name = url.path_segments()?.last()?;
        if name.is_empty() {
            return None;
        }
        Some(name.to_string())
    }
}
