//! `.spr` sprite container
//!
//! Layout (little-endian):
//! - `u32` frame width
//! - `u32` frame height
//! - 8 reserved bytes
//! - PNG image for the whole sheet

use super::sprite::LoadError;

/// File extension of sprite containers
pub const SPR_EXTENSION: &str = "spr";

/// Size of the fixed header in bytes
pub const HEADER_LEN: usize = 16;

/// Frame geometry read from a `.spr` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SprHeader {
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SprHeader {
    /// Split a container into its header and PNG payload
    pub fn parse(bytes: &[u8]) -> Result<(SprHeader, &[u8]), LoadError> {
        if bytes.len() < HEADER_LEN {
            return Err(LoadError::InvalidHeader(format!(
                "expected at least {} bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let frame_width = read_u32(&bytes[0..4]);
        let frame_height = read_u32(&bytes[4..8]);
        if frame_width == 0 || frame_height == 0 {
            return Err(LoadError::InvalidHeader(format!(
                "zero frame size {}x{}",
                frame_width, frame_height
            )));
        }

        let payload = &bytes[HEADER_LEN..];
        if payload.is_empty() {
            return Err(LoadError::InvalidHeader("missing image payload".to_string()));
        }

        Ok((SprHeader { frame_width, frame_height }, payload))
    }

    /// Serialize a header followed by `png`
    pub fn encode(&self, png: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + png.len());
        out.extend_from_slice(&self.frame_width.to_le_bytes());
        out.extend_from_slice(&self.frame_height.to_le_bytes());
        out.extend_from_slice(&[0u8; 8]);
        out.extend_from_slice(png);
        out
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    u32::from_le_bytes(raw)
}
