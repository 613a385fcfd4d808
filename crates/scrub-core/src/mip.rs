//! Mip-chain layout: level sizes, block padding and byte offsets.

use crate::texture::PixelFormat;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MipError {
    #[error("block dimensions must be non-zero (got {width}x{height})")]
    ZeroBlock { width: u32, height: u32 },
    #[error("mip {level} is larger than 2^64 bytes")]
    Overflow { level: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageDesc {
    pub width: u32,
    pub height: u32,
    pub block_width: u32,
    pub block_height: u32,
    pub bytes_per_block: u32,
}

impl ImageDesc {
    pub fn new(format: &PixelFormat, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            block_width: format.block_width,
            block_height: format.block_height,
            bytes_per_block: format.bytes_per_block,
        }
    }

    /// Replaces the block layout, for user-defined formats.
    pub fn with_block(self, block_width: u32, block_height: u32, bytes_per_block: u32) -> Self {
        Self {
            block_width,
            block_height,
            bytes_per_block,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    pub padded_width: u64,
    pub padded_height: u64,
    pub byte_size: u64,
    pub offset: u64,
}

// Padding can round a dimension past u32::MAX, so padded sizes are u64.
fn mip_level(image: &ImageDesc, width: u32, height: u32, offset: u64) -> Option<MipLevel> {
    let blocks_w = u64::from(width.div_ceil(image.block_width));
    let blocks_h = u64::from(height.div_ceil(image.block_height));
    let byte_size = blocks_w
        .checked_mul(blocks_h)?
        .checked_mul(u64::from(image.bytes_per_block))?;
    Some(MipLevel {
        width,
        height,
        padded_width: blocks_w * u64::from(image.block_width),
        padded_height: blocks_h * u64::from(image.block_height),
        byte_size,
        offset,
    })
}

/// Every level from full size down to 1x1, each dimension halving independently.
pub fn mip_chain(image: &ImageDesc) -> Result<Vec<MipLevel>, MipError> {
    if image.block_width == 0 || image.block_height == 0 {
        return Err(MipError::ZeroBlock {
            width: image.block_width,
            height: image.block_height,
        });
    }
    let mut levels = Vec::new();
    let (mut w, mut h) = (image.width, image.height);
    let mut offset = 0u64;
    loop {
        let overflow = MipError::Overflow {
            level: levels.len(),
        };
        let level = mip_level(image, w, h, offset).ok_or(overflow.clone())?;
        offset = offset.checked_add(level.byte_size).ok_or(overflow)?;
        levels.push(level);
        if w <= 1 && h <= 1 {
            break;
        }
        if w > 1 {
            w >>= 1;
        }
        if h > 1 {
            h >>= 1;
        }
    }
    Ok(levels)
}

/// Sum of level sizes. A chain from [`mip_chain`] never overflows this.
pub fn total_size(levels: &[MipLevel]) -> u64 {
    levels.iter().map(|l| l.byte_size).sum()
}

/// `0x`-prefixed, zero-padded to eight hex digits; negatives get a leading `-`.
pub fn hex0x(n: impl Into<i128>) -> String {
    let n = n.into();
    if n < 0 {
        format!("-0x{:08x}", n.unsigned_abs())
    } else {
        format!("0x{n:08x}")
    }
}
