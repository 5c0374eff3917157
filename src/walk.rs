use crate::documents::{Asset, Catalog, Collection, CollectionList, Item, ItemList, Link};
use crate::error::{Result, WalkError};
use crate::http::{fetch, DocumentSource};
use crate::stac_operations::{
    filter_collections_by_title_substring, find_collection_by_id, find_link_by_exact_title,
    find_link_by_rel, find_links_by_title_substring, get_asset_by_name, least_cloudy_index,
    select_item_by_index,
};
use crate::walk_selection::WalkSelection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Every document visited on the way from the root catalog down to one asset.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Walk {
    pub root: Catalog,
    /// Root links whose title contains the selection's catalog filter.
    pub related_catalogs: Vec<Link>,
    pub catalog: Catalog,
    pub collections: CollectionList,
    /// Collections whose title contains the selection's collection filter.
    pub related_collections: Vec<Collection>,
    pub collection: Collection,
    pub items: ItemList,
    pub item_index: usize,
    pub item: Item,
    pub asset_name: String,
    pub asset: Asset,
}

/// Follow root catalog -> sub-catalog -> collections -> collection -> items
/// -> item -> asset. Requests are issued one after the other and the first
/// step that cannot be resolved ends the walk.
pub async fn walk(source: &impl DocumentSource, selection: &WalkSelection) -> Result<Walk> {
    let root: Catalog = fetch(source, &selection.root_url).await?;
    info!(
        id = %root.id,
        stac_version = %root.stac_version,
        links = root.links.len(),
        "root catalog"
    );

    let related_catalogs = find_links_by_title_substring(&root, &selection.catalog_filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    let catalog_href = find_link_by_exact_title(&root.links, &selection.catalog_title)?
        .href
        .clone();

    let catalog: Catalog = fetch(source, &catalog_href).await?;
    info!(id = %catalog.id, "catalog");

    let collections_href = find_link_by_rel(&catalog.links, "collections")?.href.clone();
    let collections: CollectionList = fetch(source, &collections_href).await?;
    info!(count = collections.collections.len(), "collections");

    let related_collections = filter_collections_by_title_substring(
        &collections.collections,
        &selection.collection_filter,
    )
    .into_iter()
    .cloned()
    .collect::<Vec<_>>();
    let collection = find_collection_by_id(&collections.collections, &selection.collection_id)?
        .clone();

    let items_href = find_link_by_rel(&collection.links, "items")?.href.clone();
    let items: ItemList = fetch(source, &items_href).await?;
    info!(collection = %collection.id, count = items.features.len(), "items");

    let item_index = if selection.least_cloudy {
        least_cloudy_index(&items)
            .ok_or_else(|| WalkError::not_found("item with cloud cover in", &items_href, 0))?
    } else {
        selection.item_index
    };
    let item = select_item_by_index(&items, item_index)?.clone();
    let asset = get_asset_by_name(&item, &selection.asset_name)?.clone();
    info!(item = %item.id, asset = %selection.asset_name, href = %asset.href, "asset");

    Ok(Walk {
        root,
        related_catalogs,
        catalog,
        collections,
        related_collections,
        collection,
        items,
        item_index,
        item,
        asset_name: selection.asset_name.clone(),
        asset,
    })
}

impl Walk {
    pub fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let walk: Self = serde_json::from_str(&content)?;
        Ok(walk)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the selected asset's bytes as served, without decoding them.
    pub async fn fetch_asset(self: &Self, source: &impl DocumentSource) -> Result<Vec<u8>> {
        source.fetch_bytes(&self.asset.href).await
    }

    /// Where `save_asset` writes the asset inside `output_dir`.
    pub fn asset_path(self: &Self, output_dir: &Path) -> PathBuf {
        let file_name = self
            .asset
            .file_name()
            .unwrap_or_else(|| format!("{}.{}", self.item.id, self.asset_name));
        output_dir.join(file_name)
    }

    /// Fetch the asset and write it under `output_dir`. An existing file is
    /// left untouched.
    pub async fn save_asset(
        self: &Self,
        source: &impl DocumentSource,
        output_dir: &Path,
    ) -> anyhow::Result<PathBuf> {
        let dst = self.asset_path(output_dir);
        if dst.exists() {
            info!(path = %dst.display(), "asset already saved");
            return Ok(dst);
        }

        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let bytes = self.fetch_asset(source).await?;
        fs::write(&dst, &bytes)?;
        info!(path = %dst.display(), bytes = bytes.len(), "asset saved");
        Ok(dst)
    }
}
