//! CMR-STAC shaped documents shared by the unit tests.
use serde_json::{json, Value};

pub const ROOT_URL: &str = "https://cmr.earthdata.nasa.gov/stac/";
pub const LPCLOUD_URL: &str = "https://cmr.earthdata.nasa.gov/stac/LPCLOUD";
pub const COLLECTIONS_URL: &str = "https://cmr.earthdata.nasa.gov/stac/LPCLOUD/collections";
pub const S30_ITEMS_URL: &str =
    "https://cmr.earthdata.nasa.gov/stac/LPCLOUD/collections/HLSS30.v1.5/items";
pub const BROWSE_URL: &str = "https://lpdaac.earthdata.nasa.gov/lp-prod-public/HLSS30.015/HLS.S30.T17SLU.2021056T161756.v1.5.jpg";

pub fn root_catalog() -> Value {
    json!({
        "type": "Catalog",
        "id": "stac",
        "stac_version": "1.0.0",
        "description": "This is the landing page for CMR-STAC. Each provider link contains a STAC endpoint.",
        "links": [
            {"rel": "self", "href": ROOT_URL, "type": "application/json"},
            {"rel": "child", "title": "LPCLOUD", "href": LPCLOUD_URL, "type": "application/json"},
            {"rel": "child", "title": "LPDAAC_ECS", "href": "https://cmr.earthdata.nasa.gov/stac/LPDAAC_ECS", "type": "application/json"},
            {"rel": "child", "title": "ORNL_CLOUD", "href": "https://cmr.earthdata.nasa.gov/stac/ORNL_CLOUD", "type": "application/json"},
            {"rel": "child", "title": "XYZ_LP", "href": "https://cmr.earthdata.nasa.gov/stac/XYZ_LP", "type": "application/json"}
        ]
    })
}

pub fn lpcloud_catalog() -> Value {
    json!({
        "type": "Catalog",
        "id": "LPCLOUD",
        "stac_version": "1.0.0",
        "description": "Root catalog for LPCLOUD",
        "title": "LPCLOUD",
        "links": [
            {"rel": "self", "href": LPCLOUD_URL},
            {"rel": "root", "href": ROOT_URL},
            {"rel": "collections", "title": "Collections for LPCLOUD", "href": COLLECTIONS_URL},
            {"rel": "search", "title": "LPCLOUD STAC Search", "href": "https://cmr.earthdata.nasa.gov/stac/LPCLOUD/search"}
        ]
    })
}

fn collection(id: &str, title: &str, start: &str) -> Value {
    let base = format!("{COLLECTIONS_URL}/{id}");
    json!({
        "id": id,
        "stac_version": "1.0.0",
        "license": "not-provided",
        "title": title,
        "description": format!("{title} description"),
        "extent": {
            "spatial": {"bbox": [[-180.0, -90.0, 180.0, 90.0]]},
            "temporal": {"interval": [[start, null]]}
        },
        "links": [
            {"rel": "self", "href": base.clone()},
            {"rel": "root", "href": ROOT_URL},
            {"rel": "items", "title": "Granules in this collection", "href": format!("{base}/items")}
        ]
    })
}

pub fn collections() -> Value {
    json!({
        "id": "LPCLOUD",
        "description": "All collections provided by LPCLOUD",
        "links": [{"rel": "self", "href": COLLECTIONS_URL}],
        "collections": [
            collection("ASTGTM.v003", "ASTER Global Digital Elevation Model V003", "2000-03-01T00:00:00Z"),
            collection("HLSL30.v1.5", "HLS Operational Land Imager Surface Reflectance and TOA Brightness Daily Global 30 m V1.5", "2013-05-01T00:00:00Z"),
            collection("HLSS30.v1.5", "HLS Sentinel-2 Multi-spectral Instrument Surface Reflectance Daily Global 30 m V1.5", "2015-12-01T00:00:00Z")
        ]
    })
}

fn item(id: &str, datetime: &str, cloud_cover: f64) -> Value {
    let base = format!("https://lpdaac.earthdata.nasa.gov/lp-prod-protected/HLSS30.015/{id}");
    json!({
        "type": "Feature",
        "id": id,
        "stac_version": "1.0.0",
        "collection": "HLSS30.v1.5",
        "bbox": [-83.0, 34.0, -81.5, 35.0],
        "geometry": {"type": "Polygon", "coordinates": [[[-83.0, 34.0], [-81.5, 34.0], [-81.5, 35.0], [-83.0, 35.0], [-83.0, 34.0]]]},
        "properties": {"datetime": datetime, "eo:cloud_cover": cloud_cover},
        "assets": {
            "B01": {"title": "Download B01", "href": format!("{base}.B01.tif")},
            "B02": {"title": "Download B02", "href": format!("{base}.B02.tif")},
            "Fmask": {"title": "Download Fmask", "href": format!("{base}.Fmask.tif")},
            "browse": {
                "title": "Download browse image",
                "type": "image/jpeg",
                "href": format!("https://lpdaac.earthdata.nasa.gov/lp-prod-public/HLSS30.015/{id}.jpg")
            },
            "metadata": {"href": format!("https://cmr.earthdata.nasa.gov/search/concepts/{id}.xml"), "type": "application/xml"}
        },
        "links": [{"rel": "collection", "href": format!("{COLLECTIONS_URL}/HLSS30.v1.5")}]
    })
}

pub fn items() -> Value {
    json!({
        "type": "FeatureCollection",
        "stac_version": "1.0.0",
        "numberMatched": 3,
        "numberReturned": 3,
        "features": [
            item("HLS.S30.T17SLU.2021056T161756.v1.5", "2021-02-25T16:17:56.000Z", 37.0),
            item("HLS.S30.T17SLT.2021056T161756.v1.5", "2021-02-25T16:17:56.000Z", 4.0),
            item("HLS.S30.T17SKU.2021058T160839.v1.5", "2021-02-27T16:08:39.000Z", 91.0)
        ],
        "links": [
            {"rel": "self", "href": S30_ITEMS_URL},
            {"rel": "next", "href": format!("{S30_ITEMS_URL}?page=2")}
        ]
    })
}
