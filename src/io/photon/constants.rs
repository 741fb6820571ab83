//! Tags, fixed sizes, and literal values of the Photon file formats.
//!
//! Values marked as sentinels were recovered from files produced by the
//! vendor slicer. Their meaning is unknown; firmware rejects files where they
//! differ, so they are written verbatim.

/// Section tags of the ANYCUBIC-tagged format (12-byte zero padded fields).
pub mod tags {
    /// File identifier at offset 0
    pub const FILE_MARK: &str = "ANYCUBIC";
    pub const HEADER: &str = "HEADER";
    pub const PREVIEW: &str = "PREVIEW";
    pub const LAYERDEF: &str = "LAYERDEF";
    pub const EXTRA: &str = "EXTRA";
    pub const MACHINE: &str = "MACHINE";
    /// Pseudo-section holding the encoded layer image
    pub const LAYERDATA: &str = "LAYERDATA";

    /// Width of every tag field.
    pub const TAG_WIDTH: usize = 12;
}

/// Sizes and addresses of the ANYCUBIC-tagged format.
pub mod current {
    /// HEADER address for majors 1 and 515
    pub const HEADER_ADDR: u64 = 0x30;
    /// HEADER address for major 516 (pointer table gains MACHINE address)
    pub const HEADER_ADDR_516: u64 = 0x34;
    pub const PREVIEW_ADDR: u64 = 0x90;
    pub const PREVIEW_ADDR_516: u64 = 0x98;

    /// HEADER length field
    pub const HEADER_BODY_LEN: u32 = 80;
    pub const HEADER_BODY_LEN_516: u32 = 84;

    /// Preview width/marker/height words counted by the v1 length field
    pub const PREVIEW_META_V1: u64 = 12;
    pub const PREVIEW_META: u64 = 28;
    /// Gap between the preview payload and LAYERDEF
    pub const PREVIEW_GAP_V1: u64 = 16;
    pub const PREVIEW_GAP: u64 = 28;

    /// Size of the post-preview trailer
    pub const PREVIEW_TRAILER_LEN: u64 = 0x1C;
    pub const PREVIEW_TRAILER: [u32; 7] = [0, 16, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0xFFFF_FFFF, 0];

    /// Dimension marker between preview width and height: `'*'` / `'x'`
    pub const PREVIEW_MARKER_V1: u32 = 42;
    pub const PREVIEW_MARKER: u32 = 120;

    /// LAYERDEF tag + length + count
    pub const LAYERDEF_HEADER_LEN: u64 = 20;
    pub const LAYER_RECORD_LEN: u64 = 32;

    pub const EXTRA_LEN: u64 = 72;
    pub const MACHINE_LEN: u64 = 156;

    pub const RESIN_TYPE_V1: u32 = 32;
    pub const RESIN_TYPE: u32 = 36;

    /// Unknown HEADER word following the per-layer-parameters flag
    pub const HEADER_SENTINEL_515: u32 = 2138;
    pub const HEADER_SENTINEL_516: u32 = 2060;

    /// Unknown count words inside EXTRA
    pub const EXTRA_LENGTH_FIELD: u32 = 24;
    pub const EXTRA_STAGE_COUNT: u32 = 2;

    pub const MACHINE_NAME_WIDTH: usize = 96;
    pub const MACHINE_FORMAT_WIDTH: usize = 24;
    pub const MACHINE_FORMAT_TAG: &str = "pw0Img";
    /// Unknown trailing MACHINE word
    pub const MACHINE_SENTINEL: u32 = 6_506_241;
}

/// Fixed layout of legacy `.photon` files.
pub mod legacy {
    pub const MAGIC: u32 = 0x12FD_0019;
    pub const VERSION: u32 = 1;
    pub const HEADER_LEN: u64 = 0x70;
    /// Image header preceding each preview payload
    pub const PREVIEW_HEADER_LEN: u64 = 32;
    pub const LAYER_RECORD_LEN: u64 = 36;

    pub const RESOLUTION_X: u32 = 1440;
    pub const RESOLUTION_Y: u32 = 2560;

    /// Bed size written when the profile has none
    pub const DEFAULT_BED_MM: [f32; 3] = [68.04, 120.96, 150.0];

    pub const LAYER_HEIGHT_MM: f32 = 0.1;
    pub const LIGHT_OFF_S: f32 = 1.0;
    pub const PRINT_PARAMETERS_SIZE: u32 = 60;
    pub const PWM_FULL: u16 = 0xFF;

    /// Run cap matching the vendor encoder, below the 0x7F code maximum
    pub const RLE_RUN_CAP: usize = 125;
}

/// Print parameters written into every file; exposure is the only input.
pub mod defaults {
    pub const LAYER_HEIGHT_MM: f32 = 0.05;
    pub const LIFT_HEIGHT_MM: f32 = 0.0;
    pub const LIFT_SPEED: f32 = 4.0;
    pub const RETRACT_SPEED: f32 = 4.0;
    pub const BOTTOM_LAYER_COUNT: u32 = 1;
    pub const ANTIALIAS_COUNT: u32 = 1;
    pub const WEIGHT: f32 = 1.04;
    pub const PRICE: f32 = 1.04;
}
