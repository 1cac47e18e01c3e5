//! Target pixel packing.

use adventure_core::{BitmapError, Target};

use super::IndexedBitmap;

/// Pixels packed into one QL word.
const QL_GROUP: usize = 8;

/// Packs palette indices into the screen format of `target`.
pub fn pack(target: Target, filename: &str, bitmap: &IndexedBitmap) -> Result<Vec<u8>, BitmapError> {
    match target {
        Target::SinclairQl => pack_ql(filename, &bitmap.pixels),
    }
}

/// QL 4-colour mode: each group of 8 pixels becomes two bytes, the first
/// holding bit 0 of every pixel, the second bit 1, leftmost pixel in bit 7.
///
/// Index 0 is black, 1 green, 2 red and 3 white.
fn pack_ql(filename: &str, pixels: &[u8]) -> Result<Vec<u8>, BitmapError> {
    if pixels.len() % QL_GROUP != 0 {
        return Err(BitmapError::NotPackable {
            filename: filename.to_owned(),
            pixels: pixels.len(),
            group: QL_GROUP,
        });
    }
    if let Some((offset, &value)) = pixels.iter().enumerate().find(|(_, px)| **px > 3) {
        return Err(BitmapError::PixelOutOfRange {
            filename: filename.to_owned(),
            offset,
            value,
        });
    }

    let mut out = Vec::with_capacity(pixels.len() / 4);
    for group in pixels.chunks_exact(QL_GROUP) {
        let (mut green, mut red) = (0u8, 0u8);
        for (i, px) in group.iter().enumerate() {
            let bit = 7 - i;
            green |= (px & 1) << bit;
            red |= ((px >> 1) & 1) << bit;
        }
        out.push(green);
        out.push(red);
    }
    Ok(out)
}
