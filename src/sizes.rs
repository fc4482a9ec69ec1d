use core::fmt;

/// Pixel dimensions of a generated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn square(size: u32) -> Dimensions {
        Dimensions {
            width: size,
            height: size,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A standalone PNG written to the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngTarget {
    pub file_name: &'static str,
    pub dimensions: Dimensions,
}

/// The PNG favicons, in the order they are written.
pub const PNG_TARGETS: [PngTarget; 3] = [
    PngTarget {
        file_name: "favicon-16x16.png",
        dimensions: Dimensions::square(16),
    },
    PngTarget {
        file_name: "favicon-32x32.png",
        dimensions: Dimensions::square(32),
    },
    PngTarget {
        file_name: "apple-touch-icon.png",
        dimensions: Dimensions::square(180),
    },
];

pub const ICO_FILE_NAME: &str = "favicon.ico";

/// Resolutions embedded in [`ICO_FILE_NAME`].
pub const ICO_SIZES: [Dimensions; 2] = [Dimensions::square(16), Dimensions::square(32)];
