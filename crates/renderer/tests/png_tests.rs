//! Tests for RGB PNG encoding.

use renderer::png::{create_png_rgb, PNG_SIGNATURE};

// ============================================================================
// Helper functions
// ============================================================================

fn gradient_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x % 256) as u8, (y % 256) as u8, 200]);
        }
    }
    pixels
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_signature_and_trailer() {
    let png = create_png_rgb(&gradient_pixels(4, 1), 4, 1).unwrap();
    assert_eq!(&png[0..8], &PNG_SIGNATURE);
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}

#[test]
fn test_decodes_with_image_crate() {
    let pixels = gradient_pixels(150, 3);
    let png = create_png_rgb(&pixels, 150, 3).unwrap();

    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    let rgb = img.to_rgb8();
    assert_eq!(rgb.dimensions(), (150, 3));
    assert_eq!(rgb.into_raw(), pixels);
}

#[test]
fn test_single_scanline() {
    let pixels = gradient_pixels(200, 1);
    let png = create_png_rgb(&pixels, 200, 1).unwrap();
    let rgb = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(rgb.get_pixel(199, 0).0, [199, 0, 200]);
}

#[test]
fn test_same_pixels_same_bytes() {
    let pixels = gradient_pixels(64, 2);
    assert_eq!(
        create_png_rgb(&pixels, 64, 2).unwrap(),
        create_png_rgb(&pixels, 64, 2).unwrap()
    );
}

#[test]
fn test_rejects_wrong_buffer_size() {
    let err = create_png_rgb(&[0; 10], 4, 1).unwrap_err();
    assert!(err.contains("expected 12"));
}
