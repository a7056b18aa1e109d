use crate::core::progress::ProgressSink;
use crate::error::{AssetError, Result};
use crate::utils::fs;
use log::debug;
use reqwest::blocking::Client;
use std::io::{Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 8 * 1024;

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vkassets/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Streams `url` into `destination`, notifying `sink` after every chunk.
    ///
    /// The destination is only created once the server has answered with a
    /// success status. Returns the number of bytes written.
    pub fn download_file<P: ProgressSink>(
        &self,
        url: &str,
        destination: &Path,
        sink: &mut P,
    ) -> Result<u64> {
        debug!("GET {url}");
        let mut response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total = response.content_length();
        debug!("{url}: content length {total:?}");

        let mut file = fs::create_file(destination)?;
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut written = 0u64;
        let mut index = 0u64;

        loop {
            let size = response.read(&mut buffer)?;
            if size == 0 {
                break;
            }
            file.write_all(&buffer[..size])?;
            written += size as u64;
            index += 1;
            sink.on_chunk(index, size, total)?;
        }

        file.flush()?;
        debug!("Wrote {written} bytes to {destination:?}");
        Ok(written)
    }
}
