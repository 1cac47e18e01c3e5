//! Palette-index decoding of 8-bit BMPs.
//!
//! [`BmpDecoder`] runs in indexed mode so rows come back as raw palette
//! indices rather than RGB.

use std::io::Cursor;

use adventure_core::BitmapError;
use image::{ImageDecoder, ImageError, codecs::bmp::BmpDecoder};

/// Offset of the bits-per-pixel field, counted from the start of the file.
const DEPTH_AT: usize = 28;
/// Offset of the compression field.
const COMPRESSION_AT: usize = 30;

/// Palette indices of one bitmap, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl IndexedBitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decodes the palette indices of an uncompressed 8 bits-per-pixel BMP.
    pub fn decode(filename: &str, bytes: &[u8]) -> Result<Self, BitmapError> {
        let unsupported = |reason: String| BitmapError::Unsupported {
            filename: filename.to_owned(),
            reason,
        };

        if !bytes.starts_with(b"BM") {
            return Err(unsupported("missing BM signature".into()));
        }
        // Indexed mode hands back raw row bytes whatever the depth.
        if let Some(depth) = field(bytes, DEPTH_AT, 2).filter(|depth| *depth != 8) {
            return Err(unsupported(format!("{depth} bits per pixel, expected 8")));
        }
        if let Some(compression) = field(bytes, COMPRESSION_AT, 4).filter(|c| *c != 0) {
            return Err(unsupported(format!("compression method {compression}")));
        }

        let image_error = |err: ImageError| match err {
            ImageError::Unsupported(_) => BitmapError::Unsupported {
                filename: filename.to_owned(),
                reason: err.to_string(),
            },
            _ => BitmapError::Unreadable {
                filename: filename.to_owned(),
                reason: err.to_string(),
            },
        };

        let mut decoder = BmpDecoder::new(Cursor::new(bytes)).map_err(image_error)?;
        if decoder.get_palette().is_none() {
            return Err(unsupported("no colour palette".into()));
        }
        decoder.set_indexed_color(true);

        let (width, height) = decoder.dimensions();
        let len = usize::try_from(decoder.total_bytes())
            .map_err(|_| unsupported(format!("{width}x{height} is too large")))?;
        let mut pixels = vec![0; len];
        decoder.read_image(&mut pixels).map_err(image_error)?;

        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Little-endian header field of `len` bytes, if the file is long enough.
fn field(bytes: &[u8], at: usize, len: usize) -> Option<u32> {
    let raw = bytes.get(at..at + len)?;
    Some(
        raw.iter()
            .rev()
            .fold(0u32, |acc, byte| (acc << 8) | u32::from(*byte)),
    )
}

/// Four-colour BMP writer for fixtures: black, green, red, white.
#[cfg(test)]
pub(crate) fn encode(bitmap: &IndexedBitmap) -> Vec<u8> {
    use image::{ExtendedColorType, codecs::bmp::BmpEncoder};

    const PALETTE: [[u8; 3]; 4] = [[0, 0, 0], [0, 0xFF, 0], [0xFF, 0, 0], [0xFF, 0xFF, 0xFF]];
    let mut out = Vec::new();
    BmpEncoder::new(&mut out)
        .encode_with_palette(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::L8,
            Some(&PALETTE),
        )
        .unwrap();
    out
}
