//! NASA's Common Metadata Repository STAC API.
mod provider;
pub use provider::Provider;

pub mod hls;

pub const ROOT_URL: &str = "https://cmr.earthdata.nasa.gov/stac/";
