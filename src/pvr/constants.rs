//! ZPVR container and texture header constants
//!
//! Every value the header parser checks lives here so the supported
//! texture profile can be read in one place.

/// Outer container constants
pub mod container {
    /// ASCII tag prefixed to every compressed texture
    pub const MAGIC: [u8; 4] = *b"ZPVR";

    /// Length of the magic tag in bytes
    pub const MAGIC_LEN: usize = MAGIC.len();
}

/// Texture header constants
pub mod header {
    /// Version word; reads as "PVR\x03" when the stream is little-endian
    pub const VERSION: u32 = 0x0352_5650;

    /// Premultiplied alpha flag
    pub const FLAGS_PREMULTIPLIED: u32 = 2;

    /// Linear RGB colour space
    pub const COLOR_SPACE_LINEAR: u32 = 0;

    /// Unsigned normalized byte channel type
    pub const CHANNEL_TYPE_UBYTE_NORM: u32 = 0;

    pub const DEPTH: u32 = 1;
    pub const NUM_SURFACES: u32 = 1;
    pub const NUM_FACES: u32 = 1;
    pub const MIP_MAP_COUNT: u32 = 1;

    /// Number of 32-bit fields in the fixed header
    pub const FIELD_COUNT: usize = 13;

    /// Size of the fixed header in bytes
    pub const SIZE: u64 = (FIELD_COUNT * 4) as u64;
}

/// Header field names, as reported in format errors
pub mod fields {
    pub const VERSION: &str = "version";
    pub const FLAGS: &str = "flags";
    pub const FORMAT_CHANNELS: &str = "format_channels";
    pub const PIXEL_FORMAT: &str = "pixel_format";
    pub const COLOR_SPACE: &str = "color_space";
    pub const CHANNEL_TYPE: &str = "channel_type";
    pub const DEPTH: &str = "depth";
    pub const NUM_SURFACES: &str = "num_surfaces";
    pub const NUM_FACES: &str = "num_faces";
    pub const MIP_MAP_COUNT: &str = "mip_map_count";
}

/// Pixel format strings (channel order followed by bits per channel)
pub mod formats {
    pub const RGBA8888: &str = "rgba8888";
    pub const RGBA4444: &str = "rgba4444";
}
