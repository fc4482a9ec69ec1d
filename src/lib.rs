//! Generates the favicon set for a project from a single source image.
//!
//! The source, `KR_fav.jpg` at the project root, is decoded once and resized
//! independently for every output. The following files are written to
//! `assets/favicons`:
//!
//! | File                   | Dimensions                  |
//! |------------------------|-----------------------------|
//! | `favicon-16x16.png`    | 16x16                       |
//! | `favicon-32x32.png`    | 32x32                       |
//! | `apple-touch-icon.png` | 180x180                     |
//! | `favicon.ico`          | 16x16 and 32x32 in one file |
//!
//! ## Example
//! ```no_run
//! # use favicon_gen::FaviconGenerator;
//! FaviconGenerator::new("path/to/project")
//!     .generate(|written| println!("{written}"))?;
//! # Ok::<(), favicon_gen::Error>(())
//! ```

mod error;
mod sizes;

pub use error::{Error, Result};
pub use sizes::{Dimensions, PngTarget, ICO_FILE_NAME, ICO_SIZES, PNG_TARGETS};

use core::fmt;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::{resize, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

/// Name of the source image, relative to the project root.
pub const SOURCE_FILE_NAME: &str = "KR_fav.jpg";

/// Directory the favicons are written to, relative to the project root.
pub const OUTPUT_DIR: &str = "assets/favicons";

/// Writes the favicon set of the project found at `project_root`.
#[derive(Debug, Clone)]
pub struct FaviconGenerator {
    project_root: PathBuf,
}

impl FaviconGenerator {
    pub fn new(project_root: impl AsRef<Path>) -> FaviconGenerator {
        FaviconGenerator {
            project_root: project_root.as_ref().to_owned(),
        }
    }

    pub fn source_path(&self) -> PathBuf {
        self.project_root.join(SOURCE_FILE_NAME)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.project_root.join(OUTPUT_DIR)
    }

    /// Decodes the source image and writes every favicon, calling `on_written`
    /// once each file is complete.
    ///
    /// Fails with [`Error::MissingSource`] before touching the filesystem if the
    /// source does not exist. Any other failure aborts the run; files written by
    /// earlier steps are left in place.
    pub fn generate(&self, mut on_written: impl FnMut(&Written)) -> Result<Vec<Written>> {
        let source_path = self.source_path();
        if !source_path.exists() {
            return Err(Error::MissingSource { path: source_path });
        }

        let source = decode_source(&source_path)?;

        let output_dir = self.output_dir();
        fs::create_dir_all(&output_dir).map_err(|source| Error::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;

        let mut written = Vec::with_capacity(PNG_TARGETS.len() + 1);

        for target in PNG_TARGETS {
            let path = output_dir.join(target.file_name);
            write_png(&source, target.dimensions, &path)?;
            let record = Written {
                path,
                kind: WrittenKind::Png(target.dimensions),
            };
            on_written(&record);
            written.push(record);
        }

        let ico_path = output_dir.join(ICO_FILE_NAME);
        write_ico(&source, &ICO_SIZES, &ico_path)?;
        let record = Written {
            path: ico_path,
            kind: WrittenKind::Ico(&ICO_SIZES),
        };
        on_written(&record);
        written.push(record);

        Ok(written)
    }
}

/// A favicon file that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub kind: WrittenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrittenKind {
    Png(Dimensions),
    Ico(&'static [Dimensions]),
}

impl fmt::Display for Written {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Wrote {} (", self.path.display())?;
        match self.kind {
            WrittenKind::Png(dimensions) => write!(f, "{dimensions}")?,
            WrittenKind::Ico(sizes) => {
                f.write_str("ICO with sizes: ")?;
                for (i, dimensions) in sizes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{dimensions}")?;
                }
            }
        }
        f.write_str(")")
    }
}

/// The reader owns the only handle to the source file and is consumed by
/// `decode`, so the file is closed before this function returns.
fn decode_source(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    log::debug!("decoding {} as {:?}", path.display(), reader.format());
    let image = reader.decode()?.into_rgba8();
    log::debug!(
        "decoded source image ({})",
        Dimensions {
            width: image.width(),
            height: image.height()
        }
    );
    Ok(image)
}

fn resize_source(source: &RgbaImage, dimensions: Dimensions) -> RgbaImage {
    log::debug!("resizing source to {dimensions}");
    resize(
        source,
        dimensions.width,
        dimensions.height,
        FilterType::Lanczos3,
    )
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    Ok(BufWriter::new(file))
}

fn write_png(source: &RgbaImage, dimensions: Dimensions, path: &Path) -> Result<()> {
    let resized = resize_source(source, dimensions);
    let mut writer = create_file(path)?;
    PngEncoder::new(&mut writer).write_image(
        resized.as_raw(),
        dimensions.width,
        dimensions.height,
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn write_ico(source: &RgbaImage, sizes: &[Dimensions], path: &Path) -> Result<()> {
    let frames: Vec<_> = sizes
        .iter()
        .map(|&dimensions| create_ico_frame(source, dimensions))
        .collect::<Result<_>>()?;

    let mut writer = create_file(path)?;
    IcoEncoder::new(&mut writer).encode_images(&frames)?;
    writer.flush()?;
    log::debug!("wrote {} with {} frames", path.display(), frames.len());
    Ok(())
}

fn create_ico_frame(source: &RgbaImage, dimensions: Dimensions) -> Result<IcoFrame<'static>> {
    let resized = resize_source(source, dimensions);
    encode_ico_frame(resized.as_raw(), dimensions)
}

fn encode_ico_frame(buf: &[u8], dimensions: Dimensions) -> Result<IcoFrame<'static>> {
    let Dimensions { width, height } = dimensions;
    let color_type = ExtendedColorType::Rgba8;
    let mut encoded = Vec::new();
    PngEncoder::new(Cursor::new(&mut encoded)).write_image(buf, width, height, color_type)?;
    Ok(IcoFrame::with_encoded(encoded, width, height, color_type)?)
}
