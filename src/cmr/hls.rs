//! Walk selections for the Harmonized Landsat Sentinel-2 (HLS) collections
//! hosted in the LPCLOUD catalog.
use toml;

pub fn hls_s30_toml() -> toml::Table {
    toml::toml! {
        id = "cmr.lpcloud.hlss30"

        name = "HLS Sentinel-2 MSI Surface Reflectance Daily Global 30m v1.5"

        description = "Harmonized Landsat Sentinel-2 surface reflectance derived from the\n\
        Sentinel-2 Multi-Spectral Instrument. Every item ships a browse image alongside\n\
        the per-band Cloud Optimized GeoTIFFs."

        docs = "https://lpdaac.usgs.gov/products/hlss30v015/"

        root_url = "https://cmr.earthdata.nasa.gov/stac/"

        catalog_filter = "LP"
        catalog_title = "LPCLOUD"

        collection_filter = "HLS"
        collection_id = "HLSS30.v1.5"

        // CMR returns 10 items per page by default
        item_index = 9
        least_cloudy = false

        asset_name = "browse"
    }
}

pub fn hls_l30_toml() -> toml::Table {
    toml::toml! {
        id = "cmr.lpcloud.hlsl30"

        name = "HLS Operational Land Imager Surface Reflectance Daily Global 30m v1.5"

        description = "Harmonized Landsat Sentinel-2 surface reflectance derived from the\n\
        Landsat 8 Operational Land Imager."

        docs = "https://lpdaac.usgs.gov/products/hlsl30v015/"

        root_url = "https://cmr.earthdata.nasa.gov/stac/"

        catalog_filter = "LP"
        catalog_title = "LPCLOUD"

        collection_filter = "HLS"
        collection_id = "HLSL30.v1.5"

        item_index = 0
        least_cloudy = true

        asset_name = "browse"
    }
}
