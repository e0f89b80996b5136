use std::error::Error;

use image::{DynamicImage, Rgba, RgbaImage};
use log::info;
use qrism_art::{AnchorMode, ECLevel, PixelBuffer, QRImage, Style};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let style = Style::default()
        .size(144)                                  // Output size in pixels
        .background(Rgba([255, 215, 0, 255]))       // Light modules
        .foreground(Rgba([55, 245, 105, 255]))      // Dark modules
        .ec_level(ECLevel::Q);                      // Recovery level

    let mut qr = QRImage::with_style("https://github.com", style);
    info!("Encoding {}", qr.content());

    // Diagonal gradient for the ink
    let gradient = RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, 64, (y * 4) as u8, 255]));
    let stats = qr.fill_color(&PixelBuffer::Straight(gradient), 0, true)?;
    info!("Gradient fill: {stats:?}");

    // Logo in the middle, then a margin
    let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([220, 20, 60, 255])));
    qr.overlay(&logo, 30, 30, false)?;
    qr.set_border(8, Rgba([235, 255, 215, 255]))?;

    // Flush bottom of a poster, 100px from its left edge
    qr.set_style(qr.style().anchor(AnchorMode::BottomOffset).offset_x(100));
    let poster = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([200, 30, 30, 255])));
    qr.overlay(&poster, 338, 521, true)?;

    let path = "poster_qr.png";
    qr.write_png(std::fs::File::create(path)?)?;
    if let Some(img) = qr.into_image() {
        info!("Poster saved to: {path} ({}x{}, {})", img.width(), img.height(), img.encoding());
    }

    Ok(())
}
