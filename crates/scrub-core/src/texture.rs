//! Pixel-format catalog for the texture calculator.
//!
//! Plain formats are described by DXGI-style names such as `R8G8B8A8_UNORM` or
//! `D24_UNORM_S8_UINT`: alternating channel and kind sections, where each channel is a
//! letter followed by its bit width. Size, group and description are derived from the
//! name unless the catalog entry overrides them.

use fnv::FnvHashMap;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const CUSTOM_FORMAT_NAME: &str = "Custom";

pub const GROUP_NORMALIZED: &str = "Normalized Formats";
pub const GROUP_DEPTH_STENCIL: &str = "Depth-Stencil Formats";
pub const GROUP_FLOAT: &str = "Floating-Point Formats";
pub const GROUP_INTEGER: &str = "Integer Formats";
pub const GROUP_BLOCK_COMPRESSED: &str = "BC Formats";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("`{0}` must alternate channel and kind sections")]
    OddSections(String),
    #[error("unknown channel kind `{kind}` in `{name}`")]
    UnknownKind { name: String, kind: String },
    #[error("no channels in section `{section}` of `{name}`")]
    NoChannels { name: String, section: String },
    #[error("`{0}` has several channel sections and needs an explicit {1}")]
    NeedsOverride(String, &'static str),
    #[error("channel widths of `{0}` differ; an explicit description is required")]
    MixedWidths(String),
    #[error("`{name}` totals {bits} bits, not a whole number of bytes")]
    PartialByte { name: String, bits: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Float,
    Uint,
    Sint,
    Unorm,
    Snorm,
}

impl ChannelKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "FLOAT" => Some(Self::Float),
            "UINT" => Some(Self::Uint),
            "SINT" => Some(Self::Sint),
            "UNORM" => Some(Self::Unorm),
            "SNORM" => Some(Self::Snorm),
            _ => None,
        }
    }

    fn adjective(self) -> &'static str {
        match self {
            Self::Unorm => "UNORM-normalized",
            Self::Snorm => "SNORM-normalized",
            Self::Uint => "unsigned",
            Self::Sint => "signed",
            Self::Float => "float",
        }
    }

    fn group(self) -> &'static str {
        match self {
            Self::Float => GROUP_FLOAT,
            Self::Uint | Self::Sint => GROUP_INTEGER,
            Self::Unorm | Self::Snorm => GROUP_NORMALIZED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
    pub name: char,
    pub bits: u32,
}

/// Storage layout of one pixel format. Uncompressed formats use 1x1 blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelFormat {
    pub name: String,
    pub group: String,
    pub description: String,
    pub block_width: u32,
    pub block_height: u32,
    pub bytes_per_block: u32,
}

impl PixelFormat {
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_FORMAT_NAME
    }
}

fn channel_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([RGBADSX])(\d+)").expect("static channel pattern"))
}

/// Channels of one section, e.g. `R32G32` -> `[R:32, G:32]`.
pub fn parse_channels(section: &str) -> Vec<Channel> {
    channel_regex()
        .captures_iter(section)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().chars().next()?;
            let bits = c.get(2)?.as_str().parse().ok()?;
            Some(Channel { name, bits })
        })
        .collect()
}

fn channel_list(channels: &[Channel]) -> String {
    let names: Vec<String> = channels.iter().map(|c| c.name.to_string()).collect();
    match names.as_slice() {
        [one] => format!("{one} channel"),
        [a, b] => format!("{a} and {b} channels"),
        [init @ .., last] => format!("{}, and {last} channels", init.join(", ")),
        [] => String::new(),
    }
}

/// Builds an uncompressed format from its name.
///
/// `description` and `group` override the derived text; names with more than one
/// channel section must supply both.
pub fn simple_format(
    name: &str,
    description: Option<&str>,
    group: Option<&str>,
) -> Result<PixelFormat, FormatError> {
    let sections: Vec<&str> = name.split('_').collect();
    if sections.len() % 2 != 0 {
        return Err(FormatError::OddSections(name.to_string()));
    }

    let mut parsed = Vec::with_capacity(sections.len() / 2);
    for pair in sections.chunks(2) {
        let kind = ChannelKind::parse(pair[1]).ok_or_else(|| FormatError::UnknownKind {
            name: name.to_string(),
            kind: pair[1].to_string(),
        })?;
        let channels = parse_channels(pair[0]);
        if channels.is_empty() {
            return Err(FormatError::NoChannels {
                name: name.to_string(),
                section: pair[0].to_string(),
            });
        }
        parsed.push((pair[0], kind, channels));
    }

    let bits: u32 = parsed
        .iter()
        .flat_map(|(_, _, channels)| channels.iter().map(|c| c.bits))
        .sum();
    if bits % 8 != 0 {
        return Err(FormatError::PartialByte {
            name: name.to_string(),
            bits,
        });
    }
    let bytes_per_block = bits / 8;

    let group = match (group, parsed.as_slice()) {
        (Some(g), _) => g.to_string(),
        (None, [(section, kind, _)]) => {
            if section.contains('D') {
                GROUP_DEPTH_STENCIL.to_string()
            } else {
                kind.group().to_string()
            }
        }
        (None, _) => return Err(FormatError::NeedsOverride(name.to_string(), "group")),
    };

    let description = match (description, parsed.as_slice()) {
        (Some(d), _) => d.to_string(),
        (None, [(_, kind, channels)]) => {
            let width = channels[0].bits;
            if channels.iter().any(|c| c.bits != width) {
                return Err(FormatError::MixedWidths(name.to_string()));
            }
            format!(
                "Each pixel contains {} {}-bit {}, totalling {} bits per pixel ({} bytes per pixel).",
                kind.adjective(),
                width,
                channel_list(channels),
                bits,
                bytes_per_block
            )
        }
        (None, _) => {
            return Err(FormatError::NeedsOverride(
                name.to_string(),
                "description",
            ))
        }
    };

    Ok(PixelFormat {
        name: name.to_string(),
        group,
        description,
        block_width: 1,
        block_height: 1,
        bytes_per_block,
    })
}

/// A 4x4 block-compressed format.
pub fn block_compressed(name: &str, bytes_per_block: u32, contents: &str) -> PixelFormat {
    let per_pixel = f64::from(bytes_per_block) / 16.0;
    let unit = if per_pixel == 1.0 { "byte" } else { "bytes" };
    PixelFormat {
        name: name.to_string(),
        group: GROUP_BLOCK_COMPRESSED.to_string(),
        description: format!(
            "Block-Compressed {name}, containing packed 4x4 blocks. Each block contains {contents}, totalling {per_pixel} {unit} per pixel."
        ),
        block_width: 4,
        block_height: 4,
        bytes_per_block,
    }
}

/// Placeholder whose block layout comes from user input.
pub fn custom_format() -> PixelFormat {
    PixelFormat {
        name: CUSTOM_FORMAT_NAME.to_string(),
        group: CUSTOM_FORMAT_NAME.to_string(),
        description: String::new(),
        block_width: 0,
        block_height: 0,
        bytes_per_block: 0,
    }
}

// (name, description override, group override)
type SimpleEntry = (&'static str, Option<&'static str>, Option<&'static str>);

const SIMPLE_FORMATS: &[SimpleEntry] = &[
    // Normalized
    ("R8G8B8A8_UNORM", None, None),
    ("R8G8_UNORM", None, None),
    ("R8_UNORM", None, None),
    (
        "R10G10B10A2_UNORM",
        Some("Each pixel contains UNORM-normalized 10-bit R, G, and B channels, along with a 2-bit A channel, totalling 32 bits per pixel (4 bytes per pixel)."),
        None,
    ),
    ("R16G16B16A16_UNORM", None, None),
    ("R16G16_UNORM", None, None),
    ("R16_UNORM", None, None),
    ("R8G8B8A8_SNORM", None, None),
    ("R8_SNORM", None, None),
    ("R16G16B16A16_SNORM", None, None),
    ("R16G16_SNORM", None, None),
    ("R8G8_SNORM", None, None),
    ("R16_SNORM", None, None),
    // Depth-stencil
    (
        "D24_UNORM_S8_UINT",
        Some("Each pixel contains 24-bit depth and 8-bit stencil, totalling 32 bits per pixel (4 bytes per pixel)."),
        Some(GROUP_DEPTH_STENCIL),
    ),
    (
        "D16_UNORM",
        Some("Each pixel contains 16-bit depth with no stencil, totalling 16 bits per pixel (2 bytes per pixel)."),
        None,
    ),
    (
        "D32_FLOAT",
        Some("Each pixel contains 32-bit depth with no stencil, totalling 32 bits per pixel (4 bytes per pixel)."),
        None,
    ),
    // Float
    ("R32G32B32A32_FLOAT", None, None),
    ("R32G32B32_FLOAT", None, None),
    ("R16G16B16A16_FLOAT", None, None),
    ("R32G32_FLOAT", None, None),
    (
        "R11G11B10_FLOAT",
        Some("Each pixel contains floating-point 11-bit R and G channels, along with a 10-bit B channel, totalling 32 bits per pixel (4 bytes per pixel)."),
        None,
    ),
    ("R16G16_FLOAT", None, None),
    ("R32_FLOAT", None, None),
    ("R16_FLOAT", None, None),
    // Integer
    ("R32G32B32A32_UINT", None, None),
    ("R32G32B32A32_SINT", None, None),
    ("R32G32B32_UINT", None, None),
    ("R32G32B32_SINT", None, None),
    ("R16G16B16A16_UINT", None, None),
    ("R16G16B16A16_SINT", None, None),
    ("R32G32_UINT", None, None),
    ("R32G32_SINT", None, None),
    (
        "R10G10B10A2_UINT",
        Some("Each pixel contains unsigned 10-bit R, G, and B channels, along with a 2-bit A channel, totalling 32 bits per pixel (4 bytes per pixel)."),
        None,
    ),
    ("R8G8B8A8_UINT", None, None),
    ("R8G8B8A8_SINT", None, None),
    ("R16G16_UINT", None, None),
    ("R16G16_SINT", None, None),
    ("R32_UINT", None, None),
    ("R32_SINT", None, None),
    ("R8G8_UINT", None, None),
    ("R8G8_SINT", None, None),
    ("R16_UINT", None, None),
    ("R16_SINT", None, None),
    ("R8_UINT", None, None),
    ("R8_SINT", None, None),
];

const BLOCK_FORMATS: &[(&str, u32, &str)] = &[
    ("BC1", 8, "RGB data and 1-bit alpha"),
    ("BC2", 16, "RGB data and 4-bit alpha"),
    ("BC3", 16, "RGB data and separately packed alpha"),
    ("BC4", 8, "a single channel packed in high quality"),
    ("BC5", 16, "two channels packed in high quality"),
    ("BC6", 16, "RGB floating-point data meant for HDR images"),
    ("BC7", 16, "either RGB or RGBA data, packed using a complex scheme"),
];

/// Every selectable format, in display order, with lookup by name.
#[derive(Clone, Debug)]
pub struct FormatCatalog {
    formats: Vec<PixelFormat>,
    by_name: FnvHashMap<String, usize>,
}

impl FormatCatalog {
    pub fn builtin() -> Result<Self, FormatError> {
        let mut formats = Vec::with_capacity(SIMPLE_FORMATS.len() + BLOCK_FORMATS.len() + 1);
        for &(name, description, group) in SIMPLE_FORMATS {
            formats.push(simple_format(name, description, group)?);
        }
        for &(name, bytes, contents) in BLOCK_FORMATS {
            formats.push(block_compressed(name, bytes, contents));
        }
        formats.push(custom_format());
        Ok(Self::from_formats(formats))
    }

    pub fn from_formats(formats: Vec<PixelFormat>) -> Self {
        let by_name = formats
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Self { formats, by_name }
    }

    pub fn formats(&self) -> &[PixelFormat] {
        &self.formats
    }

    pub fn get(&self, index: usize) -> Option<&PixelFormat> {
        self.formats.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Runs of consecutive formats sharing a group, as `(group, formats)`.
    pub fn groups(&self) -> Vec<(&str, &[PixelFormat])> {
        let mut out = Vec::new();
        let mut start = 0;
        for i in 1..=self.formats.len() {
            if i == self.formats.len() || self.formats[i].group != self.formats[start].group {
                out.push((self.formats[start].group.as_str(), &self.formats[start..i]));
                start = i;
            }
        }
        out
    }
}
