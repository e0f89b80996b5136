#[cfg(test)]
mod scenario_tests {
    use image::{DynamicImage, Rgba, RgbaImage};
    use test_case::test_case;

    use qrism_art::{AnchorMode, ECLevel, QRImage, Style};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BORDER: Rgba<u8> = Rgba([235, 255, 215, 255]);

    fn small(anchor: AnchorMode) -> QRImage {
        QRImage::with_style("A", Style::default().size(16).ec_level(ECLevel::L).anchor(anchor))
    }

    #[test]
    fn test_render_exact_extent() {
        let mut qr = small(AnchorMode::Center);
        assert_eq!(qr.render().unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_border_centers_original() {
        let mut qr = small(AnchorMode::Center);
        let original = qr.render().unwrap().to_rgba8();
        qr.set_border(4, BORDER).unwrap();

        let img = qr.image().unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (24, 24));
        for (x, y, pixel) in img.enumerate_pixels() {
            let inside = (4..20).contains(&x) && (4..20).contains(&y);
            if inside {
                assert_eq!(pixel, original.get_pixel(x - 4, y - 4));
            } else {
                assert_eq!(*pixel, BORDER);
            }
        }
    }

    #[test]
    fn test_border_ignores_configured_anchor() {
        let mut qr = small(AnchorMode::BottomRight);
        let original = qr.render().unwrap().to_rgba8();
        qr.set_border(4, BORDER).unwrap();
        let img = qr.image().unwrap().to_rgba8();
        assert_eq!(img.get_pixel(4, 4), original.get_pixel(0, 0));
    }

    #[test_case(AnchorMode::TopLeft, 0, 0)]
    #[test_case(AnchorMode::BottomRight, 12, 12)]
    #[test_case(AnchorMode::Center, 6, 6)]
    #[test_case(AnchorMode::RightCenter, 12, 6)]
    fn test_opaque_logo_at_anchor(anchor: AnchorMode, x: u32, y: u32) {
        let mut qr = small(anchor);
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, RED));
        qr.overlay(&logo, 4, 4, false).unwrap();

        let img = qr.image().unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(*img.get_pixel(x, y), RED);
        assert_eq!(*img.get_pixel(x + 3, y + 3), RED);
    }

    #[test]
    fn test_poster_takes_over_extent() {
        let mut qr = small(AnchorMode::BottomOffset);
        qr.set_style(qr.style().offset_x(10));
        let poster = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, RED));
        qr.overlay(&poster, 40, 50, true).unwrap();

        let img = qr.image().unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (40, 50));
        assert_eq!(*img.get_pixel(9, 49), RED);
        assert_eq!(*img.get_pixel(26, 33), RED);
        assert_ne!(*img.get_pixel(10, 34), RED);
    }

    #[test]
    fn test_fill_after_border_keeps_ring() {
        let mut qr = small(AnchorMode::Center);
        qr.set_border(4, Rgba([0, 0, 0, 255])).unwrap();
        let before = qr.image().unwrap().to_rgba8();

        let reference = qrism_art::PixelBuffer::Straight(RgbaImage::from_pixel(24, 24, RED));
        qr.fill_color(&reference, 4, true).unwrap();

        let after = qr.image().unwrap().to_rgba8();
        for (x, y, pixel) in after.enumerate_pixels() {
            if x < 4 || y < 4 || x >= 20 || y >= 20 {
                assert_eq!(pixel, before.get_pixel(x, y));
            }
        }
    }
}

#[cfg(test)]
mod file_tests {
    use std::path::PathBuf;

    use image::{ColorType, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    use qrism_art::{ECLevel, QRImage, RenderError, Style};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qrism_art_{}_{name}", std::process::id()))
    }

    fn small() -> QRImage {
        QRImage::with_style("A", Style::default().size(16).ec_level(ECLevel::L))
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut qr = small();
        let err = qr.overlay_file(temp_path("missing.png"), 4, 4, false).unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let mut qr = small();
        let err = qr.fill_color_file(&path, 0, true).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, RenderError::Decode(_)));
    }

    #[test]
    fn test_gray_reference_is_unsupported() {
        let path = temp_path("gray.png");
        GrayImage::from_pixel(16, 16, Luma([128])).save(&path).unwrap();

        let mut qr = small();
        let before = qr.render().unwrap().clone();
        let err = qr.fill_color_file(&path, 0, true).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, RenderError::UnsupportedPixelFormat(ColorType::L8)));
        assert_eq!(qr.image(), Some(&before));
    }

    #[test]
    fn test_png_reference_fill() {
        let path = temp_path("red.png");
        RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])).save(&path).unwrap();

        let mut qr = small();
        let stats = qr.fill_color_file(&path, 0, true).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(stats.rewritten > 0);
        assert_eq!(stats.rewritten + stats.skipped, 16 * 16);
    }

    #[test]
    fn test_jpeg_reference_is_luma_chroma() {
        let path = temp_path("white.jpg");
        RgbImage::from_pixel(16, 16, Rgb([255, 255, 255])).save(&path).unwrap();

        let mut qr = small();
        qr.fill_color_file(&path, 0, true).unwrap();
        std::fs::remove_file(&path).unwrap();

        // White ink on a white background, up to JPEG loss
        let img = qr.image().unwrap().to_rgba8();
        assert!(img.pixels().all(|p| p[0] > 240 && p[1] > 240 && p[2] > 240 && p[3] == 255));
    }

    #[test]
    fn test_overlay_file_roundtrip() {
        let path = temp_path("logo.png");
        RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 255])).save(&path).unwrap();

        let mut qr = small();
        qr.overlay_file(&path, 4, 4, false).unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut png = Vec::new();
        qr.write_png(&mut png).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(*decoded.get_pixel(7, 7), Rgba([0, 0, 255, 255]));
    }
}
