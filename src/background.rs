//! `background-image` values for the slide raster exported by the host.

use base64::{engine::general_purpose, Engine as _};

/// References a background image stored next to the HTML page.
pub fn file_background(file_name: &str) -> String {
    format!("url({})", file_name)
}

/// Embeds a PNG background into the page as a data URL, so the page is a
/// single self-contained file.
pub fn data_url_background(png_bytes: &[u8]) -> String {
    let encoded = general_purpose::STANDARD.encode(png_bytes);
    format!("url('data:image/png;base64,{}')", encoded)
}
