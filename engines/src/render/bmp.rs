//! 24-bit uncompressed BMP encoder
//!
//! Layout: 14-byte file header, 40-byte BITMAPINFOHEADER, then pixel rows
//! bottom-up in BGR order, each row padded to a multiple of 4 bytes.

use super::Image;

pub const HEADER_SIZE: usize = 54;

/// Largest file the 32-bit size fields of the header can describe
pub const MAX_FILE_SIZE: u64 = u32::MAX as u64;

/// Bytes per encoded row, padding included
pub fn padded_row_size(width: usize) -> usize {
    let bytes_per_row = width * 3;
    bytes_per_row + (4 - bytes_per_row % 4) % 4
}

/// Encoded file size for a `width × height` image, headers included
///
/// Computed in u64 so oversized images can be rejected before encoding.
pub fn file_size(width: u32, height: u32) -> u64 {
    let bytes_per_row = u64::from(width) * 3;
    let row_size = bytes_per_row + (4 - bytes_per_row % 4) % 4;
    HEADER_SIZE as u64 + row_size * u64::from(height)
}

pub fn to_bytes(image: &Image) -> Vec<u8> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let row_size = padded_row_size(width);
    let padding = row_size - width * 3;
    let image_size = row_size * height;

    let mut bytes = Vec::with_capacity(HEADER_SIZE + image_size);

    // FILE HEADER
    bytes.extend([0x42, 0x4D]);
    bytes.extend(u32::to_le_bytes((HEADER_SIZE + image_size) as u32));
    bytes.extend([0; 4]);
    bytes.extend(u32::to_le_bytes(HEADER_SIZE as u32));

    // DIB HEADER (BITMAPINFOHEADER)
    bytes.extend(u32::to_le_bytes(40));
    bytes.extend(i32::to_le_bytes(width as i32));
    bytes.extend(i32::to_le_bytes(height as i32));
    bytes.extend(u16::to_le_bytes(1));
    // bpp
    bytes.extend(u16::to_le_bytes(24));
    // cmp (BI_RGB)
    bytes.extend(u32::to_le_bytes(0));
    bytes.extend(u32::to_le_bytes(image_size as u32));
    bytes.extend(u32::to_le_bytes(0));
    bytes.extend(u32::to_le_bytes(0));
    bytes.extend(u32::to_le_bytes(0));
    bytes.extend(u32::to_le_bytes(0));
    debug_assert_eq!(bytes.len(), HEADER_SIZE);

    for y in (0..image.height()).rev() {
        for x in 0..image.width() {
            let [r, g, b] = image.pixel(x, y);
            bytes.extend([b, g, r]);
        }
        for _ in 0..padding {
            bytes.push(0);
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn test_file_size() {
        assert_eq!(file_size(5, 3), 54 + 16 * 3);
        assert_eq!(file_size(0, 0), 54);
        assert_eq!(file_size(5, 3), to_bytes(&Image::filled(5, 3, [0; 3])).len() as u64);
    }

    #[test]
    fn test_file_size_past_header_limit() {
        // 65536 * 3 bytes per row, 65536 rows: 12 GiB of pixel data
        assert!(file_size(65536, 65536) > MAX_FILE_SIZE);
        assert_eq!(file_size(65536, 65536), 54 + 65536 * 3 * 65536);
        assert!(file_size(1000, 1000) <= MAX_FILE_SIZE);
    }

    #[test]
    fn test_row_padding() {
        assert_eq!(padded_row_size(1), 4);
        assert_eq!(padded_row_size(4), 12);
        assert_eq!(padded_row_size(5), 16);
    }

    #[test]
    fn test_header_fields() {
        let image = Image::filled(5, 3, [255; 3]);
        let bytes = to_bytes(&image);

        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32_at(&bytes, 2) as usize, bytes.len());
        assert_eq!(u32_at(&bytes, 10), 54);
        assert_eq!(u32_at(&bytes, 14), 40);
        assert_eq!(u32_at(&bytes, 18), 5);
        assert_eq!(u32_at(&bytes, 22), 3);
        assert_eq!(u32_at(&bytes, 34), 16 * 3);
        assert_eq!(bytes.len(), 54 + 16 * 3);
    }

    #[test]
    fn test_rows_are_bottom_up_bgr() {
        let mut image = Image::filled(1, 2, [0; 3]);
        image.set_pixel(0, 0, [1, 2, 3]); // top row
        image.set_pixel(0, 1, [4, 5, 6]); // bottom row

        let bytes = to_bytes(&image);
        let pixels = &bytes[HEADER_SIZE..];

        // Bottom row first, BGR, padded to 4 bytes
        assert_eq!(&pixels[0..4], &[6u8, 5, 4, 0]);
        assert_eq!(&pixels[4..8], &[3u8, 2, 1, 0]);
    }
}
