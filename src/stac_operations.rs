//! Lookups over previously fetched documents. None of these touch the network.
use crate::documents::{Asset, Catalog, Collection, Item, ItemList, Link};
use crate::error::{Result, WalkError};

/// Links of `catalog` whose title contains `substring` (case-sensitive), in
/// their original order. Untitled links never match.
pub fn find_links_by_title_substring<'a>(catalog: &'a Catalog, substring: &str) -> Vec<&'a Link> {
    catalog
        .links
        .iter()
        .filter(|link| {
            link.title
                .as_deref()
                .is_some_and(|title| title.contains(substring))
        })
        .collect()
}

/// The single link titled exactly `title`. Zero or several matches is an error.
pub fn find_link_by_exact_title<'a>(
    links: impl IntoIterator<Item = &'a Link>,
    title: &str,
) -> Result<&'a Link> {
    let matches = links
        .into_iter()
        .filter(|link| link.title.as_deref() == Some(title));
    exactly_one("link titled", title, matches)
}

pub fn find_links_by_rel<'a>(links: impl IntoIterator<Item = &'a Link>, rel: &str) -> Vec<&'a Link> {
    links.into_iter().filter(|link| link.rel == rel).collect()
}

/// The single link with relation `rel`, e.g. a catalog's `collections` link.
pub fn find_link_by_rel<'a>(links: impl IntoIterator<Item = &'a Link>, rel: &str) -> Result<&'a Link> {
    exactly_one("link with rel", rel, find_links_by_rel(links, rel).into_iter())
}

pub fn filter_collections_by_title_substring<'a>(
    collections: &'a [Collection],
    substring: &str,
) -> Vec<&'a Collection> {
    collections
        .iter()
        .filter(|c| c.title.as_deref().is_some_and(|title| title.contains(substring)))
        .collect()
}

/// Exact `id` match, no partial matching.
pub fn find_collection_by_id<'a>(
    collections: impl IntoIterator<Item = &'a Collection>,
    id: &str,
) -> Result<&'a Collection> {
    let matches = collections.into_iter().filter(|c| c.id == id);
    exactly_one("collection", id, matches)
}

pub fn select_item_by_index(item_list: &ItemList, index: usize) -> Result<&Item> {
    item_list
        .features
        .get(index)
        .ok_or(WalkError::IndexOutOfRange {
            index,
            len: item_list.features.len(),
        })
}

pub fn get_asset_by_name<'a>(item: &'a Item, name: &str) -> Result<&'a Asset> {
    item.assets
        .get(name)
        .ok_or_else(|| WalkError::not_found("asset named", name, 0))
}

/// Index of the least cloudy item on the page. Items without a cloud cover
/// value are skipped; on a tie the first item wins.
pub fn least_cloudy_index(item_list: &ItemList) -> Option<usize> {
    item_list
        .features
        .iter()
        .enumerate()
        .filter_map(|(i, item)| item.cloud_cover().map(|cc| (i, cc)))
        .filter(|(_, cc)| !cc.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, cc)| match best {
            Some((_, lowest)) if lowest <= cc => best,
            _ => Some((i, cc)),
        })
        .map(|(i, _)| i)
}

fn exactly_one<'a, T>(
    what: &'static str,
    key: &str,
    mut matches: impl Iterator<Item = &'a T>,
) -> Result<&'a T> {
    let first = matches.next();
    let others = matches.count();
    match (first, others) {
        (Some(found), 0) => Ok(found),
        (Some(_), others) => Err(WalkError::not_found(what, key, others + 1)),
        (None, _) => Err(WalkError::not_found(what, key, 0)),
    }
}
