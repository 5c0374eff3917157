use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use cmr_stac_walker::cmr::{hls, Provider};
use cmr_stac_walker::collection_id::CollectionId;
use cmr_stac_walker::logging;
use cmr_stac_walker::walk::{self, Walk};
use cmr_stac_walker::walk_selection::WalkSelection;

/// Walk NASA's CMR-STAC API from the root catalog down to one item asset.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Walk selection (TOML). Defaults to the built-in HLS S30 selection.
    #[arg(long)]
    selection: Option<PathBuf>,

    #[arg(long)]
    collection_id: Option<String>,

    #[arg(long)]
    item_index: Option<usize>,

    /// Pick the least cloudy item of the first page.
    #[arg(long)]
    least_cloudy: bool,

    /// Where the walk summary and the asset are written.
    #[arg(long, default_value = "./outputs")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let args = Args::parse();

    let mut selection = match &args.selection {
        Some(path) => WalkSelection::read(path)
            .with_context(|| format!("Unable to read selection {}", path.display()))?,
        None => WalkSelection::from_template(&hls::hls_s30_toml())?,
    };
    if let Some(collection_id) = args.collection_id {
        selection.collection_id = collection_id;
    }
    if let Some(item_index) = args.item_index {
        selection.item_index = item_index;
        selection.least_cloudy = false;
    }
    if args.least_cloudy {
        selection.least_cloudy = true;
    }
    selection.validate()?;

    let provider = Provider::as_anon();
    let walk = walk::walk(&provider, &selection)
        .await
        .with_context(|| format!("Walk '{}' failed", selection.id))?;
    print_walk(&walk);

    std::fs::create_dir_all(&args.output)?;
    walk.write(args.output.join("walk.json"))?;

    let path = walk.save_asset(&provider, &args.output).await?;
    println!("Saved the {} asset to {}", walk.asset_name, path.display());

    Ok(())
}

fn print_walk(walk: &Walk) {
    let root = &walk.root;
    println!(
        "You are now using the {} API (STAC Version: {}). {}",
        root.id, root.stac_version, root.description
    );
    println!("There are {} STAC catalogs available in CMR.", root.links.len());

    println!("Related catalogs:");
    for link in walk.related_catalogs.iter() {
        println!("  {} -> {}", link.label(), link.href);
    }

    println!("Links in the {} catalog:", walk.catalog.id);
    for link in walk.catalog.links.iter() {
        match &link.title {
            Some(title) => println!("  {} is the {}", link.href, title),
            None => println!("  {}", link.href),
        }
    }

    println!(
        "This catalog contains {} ({} available)",
        walk.collections.description.as_deref().unwrap_or("collections"),
        walk.collections.collections.len()
    );
    for collection in walk.related_collections.iter() {
        let id = CollectionId::parse(&collection.id)
            .map(|id| format!("{} (version {})", id.short_name, id.version))
            .unwrap_or_else(|_| collection.id.clone());
        println!(
            "  {} has an ID of {}, starting {}",
            collection.title.as_deref().unwrap_or("Untitled"),
            id,
            collection.temporal_start().unwrap_or("(open)")
        );
    }

    let item = &walk.item;
    println!("Item {} of {} in {}:", walk.item_index, walk.items.features.len(), walk.collection.id);
    println!("  id: {}", item.id);
    println!("  acquired: {}", item.datetime().unwrap_or("unknown"));
    if let Some(bbox) = &item.bbox {
        println!("  over: {:?} (lower left, upper right)", bbox);
    }
    println!("  assets: {}", item.asset_names().collect::<Vec<_>>().join(", "));
    if let Some(cloud_cover) = item.cloud_cover() {
        println!("  cloud cover: {}%", cloud_cover);
    }

    println!("Cloud cover on this page:");
    for (i, feature) in walk.items.features.iter().enumerate() {
        match feature.cloud_cover() {
            Some(cloud_cover) => println!("  [{i}] {cloud_cover}%"),
            None => println!("  [{i}] unknown"),
        }
    }

    println!("{} asset: {}", walk.asset_name, walk.asset.href);
}
