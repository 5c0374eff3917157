use anyhow::Result;
use std::path::PathBuf;

extern crate cmr_stac_walker;
use cmr_stac_walker::cmr::{hls, Provider};
use cmr_stac_walker::logging;
use cmr_stac_walker::walk;
use cmr_stac_walker::walk_selection::WalkSelection;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let output_dir = PathBuf::from("./outputs/hlss30");

    let selection = WalkSelection::from_template(&hls::hls_s30_toml())?;

    let provider = Provider::as_anon();
    let walk = walk::walk(&provider, &selection).await?;

    println!("{}: {}", walk.item.id, walk.asset.href);

    let path = walk.save_asset(&provider, &output_dir).await?;
    println!("Browse image written to {}", path.display());

    Ok(())
}
