//! Blood splatter decals

pub const BLOOD_SPRITE: &str = "blood25";
/// One template per frame of the blood sheet
pub const BLOOD_VARIANTS: u32 = 16;

/// Template name of blood variant `n` (1-based)
pub fn blood_decal_name(n: u32) -> String {
    format!("DCL_BLOOD_{n}")
}
