//! # qrism-art
//!
//! A Rust library for rendering QR codes as artwork. The symbol is rasterized to an
//! exact pixel size and then composited with borders, logos, posters and color
//! fills taken from a reference image.
//!
//! ## Features
//!
//! - **Exact size rendering**: The symbol is drawn without a quiet zone at exactly the requested size
//! - **Borders**: Grow the code by a colored margin on every side
//! - **Logos & posters**: Alpha-blend an image onto the code, or the code onto an image, at one of 12 anchors
//! - **Color fill**: Replace ink or background pixels with the pixels of a reference image
//! - **Four pixel encodings**: Straight alpha, premultiplied alpha, 16-bit and luma-chroma buffers
//!
//! ## Quick Start
//!
//! ### Simple QR Code Rendering
//!
//! ```rust
//! use qrism_art::QRImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut qr = QRImage::new("Hello, World!");
//!
//! let mut png = Vec::new();
//! qr.write_png(&mut png)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Styled QR Code With Logo And Poster
//!
//! ```rust,no_run
//! use image::Rgba;
//! use qrism_art::{AnchorMode, ECLevel, QRImage, Style};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let style = Style::default()
//!     .size(72)                                  // Output size in pixels
//!     .background(Rgba([255, 215, 0, 255]))      // Light modules
//!     .foreground(Rgba([55, 245, 105, 255]))     // Dark modules
//!     .ec_level(ECLevel::Q);                     // Recovery level
//!
//! let mut qr = QRImage::with_style("https://github.com", style);
//! qr.fill_color_file("gradient.png", 0, true)?;  // Ink takes the gradient's colors
//! qr.overlay_file("logo.png", 20, 20, false)?;   // Logo centered on the code
//! qr.set_border(8, Rgba([235, 255, 215, 255]))?;
//!
//! // Place the bordered code on a poster, flush bottom, 129px from the left
//! qr.set_style(qr.style().anchor(AnchorMode::BottomOffset).offset_x(129));
//! qr.overlay_file("poster.png", 338, 521, true)?;
//!
//! qr.write_png(std::fs::File::create("poster_qr.png")?)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Anchors
//!
//! `Custom` uses the configured offset as is. `Center`, the four corners and the four edge
//! centers derive both axes from the two extents. `RightOffset` and `BottomOffset` derive one
//! axis and keep the configured offset on the other.
//!
//! ## Color Fill
//!
//! A fill walks every pixel of the working buffer outside the border ring. Pixels that are
//! fully transparent or that already equal the kept style color are skipped; every other
//! pixel takes the reference's pixel at the same position, resampled if the extents differ.
//! Fills rewrite the buffer in place and may be cancelled between row batches.

pub mod builder;
pub(crate) mod common;
pub mod compose;
pub mod render;

pub use builder::Style;
pub use common::error::{RenderError, RenderResult};
pub use common::metadata::{AnchorMode, ECLevel, Offset, Rect};
pub use common::pixel::{Color, PixelBuffer, Rgba16Image, YCbCr, YCbCrImage};
pub use compose::FillStats;
pub use render::QRImage;
