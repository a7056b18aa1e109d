use crate::core::manifest::Variant;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

pub fn list_assets(variant: Variant, output_dir: &Path, format: ListFormat) -> Result<()> {
    let assets = variant.assets();

    if format == ListFormat::Json {
        println!("{}", serde_json::to_string_pretty(assets)?);
        return Ok(());
    }

    println!("Assets for the {} variant:", variant.name());
    println!();

    for asset in assets {
        let note = if asset.archive { " (zip, extracted)" } else { "" };
        println!("  {}{}", asset.label, note);
        println!("    {}", asset.url);
        println!("    -> {}", asset.destination(output_dir).display());
    }

    Ok(())
}
