use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "./assets";

macro_rules! mirror {
    ($path:literal) => {
        concat!(
            "https://raw.githubusercontent.com/heitaoflower/vulkan-tutorial/master/Tutorial29",
            $path
        )
    };
}

macro_rules! upstream {
    ($path:literal) => {
        concat!("https://vulkan-tutorial.com", $path)
    };
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Asset<'a> {
    pub label: &'a str,
    pub url: &'a str,
    pub file_name: &'a str,
    pub archive: bool,
}

impl Asset<'_> {
    pub fn destination(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name)
    }
}

/// Which host the assets are fetched from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// GitHub mirror, model shipped uncompressed
    #[default]
    Mirror,
    /// vulkan-tutorial.com, model shipped as a zip
    Upstream,
}

static MIRROR_ASSETS: [Asset<'static>; 3] = [
    Asset {
        label: "CC0 licensed image",
        url: mirror!("/textures/texture.jpg"),
        file_name: "texture.jpg",
        archive: false,
    },
    Asset {
        label: "chalet texture",
        url: mirror!("/textures/chalet.jpg"),
        file_name: "chalet.jpg",
        archive: false,
    },
    Asset {
        label: "chalet obj",
        url: mirror!("/models/chalet.obj"),
        file_name: "chalet.obj",
        archive: false,
    },
];

static UPSTREAM_ASSETS: [Asset<'static>; 3] = [
    Asset {
        label: "CC0 licensed image",
        url: upstream!("/images/texture.jpg"),
        file_name: "texture.jpg",
        archive: false,
    },
    Asset {
        label: "chalet texture",
        url: upstream!("/resources/chalet.jpg"),
        file_name: "chalet.jpg",
        archive: false,
    },
    Asset {
        label: "chalet obj",
        url: upstream!("/resources/chalet.obj.zip"),
        file_name: "chalet.obj.zip",
        archive: true,
    },
];

impl Variant {
    pub fn assets(self) -> &'static [Asset<'static>] {
        match self {
            Variant::Mirror => &MIRROR_ASSETS,
            Variant::Upstream => &UPSTREAM_ASSETS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Mirror => "mirror",
            Variant::Upstream => "upstream",
        }
    }
}
