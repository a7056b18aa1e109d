use crate::core::download::Downloader;
use crate::core::extract;
use crate::core::manifest::{Asset, Variant};
use crate::core::progress::{ConsoleProgress, SilentProgress};
use crate::error::Result;
use crate::utils::fs;
use log::debug;
use std::path::Path;

pub fn fetch_assets(variant: Variant, output_dir: &Path, quiet: bool) -> Result<()> {
    debug!("Fetching {} assets into {output_dir:?}", variant.name());
    fs::require_dir(output_dir)?;

    let downloader = Downloader::new()?;
    fetch(&downloader, variant.assets(), output_dir, quiet)
}

/// Downloads every asset in order, then unpacks the archives among them.
pub fn fetch(
    downloader: &Downloader,
    assets: &[Asset<'_>],
    output_dir: &Path,
    quiet: bool,
) -> Result<()> {
    for asset in assets {
        println!("Downloading {}...", asset.label);

        let destination = asset.destination(output_dir);
        let bytes = if quiet {
            downloader.download_file(asset.url, &destination, &mut SilentProgress::default())?
        } else {
            downloader.download_file(asset.url, &destination, &mut ConsoleProgress::stderr())?
        };
        debug!("{}: {bytes} bytes", asset.file_name);
    }

    for asset in assets.iter().filter(|a| a.archive) {
        println!("Extracting {}...", asset.file_name);
        let count = extract::extract_and_remove(&asset.destination(output_dir), output_dir)?;
        debug!("{}: {count} files extracted", asset.file_name);
    }

    println!("Download finished");
    println!("..done!");
    Ok(())
}
