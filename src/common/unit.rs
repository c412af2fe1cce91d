//! Length units used by DrawingML and PresentationML.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// DrawingML run sizes (`sz`) are stored in hundredths of a point.
pub const CENTIPOINTS_PER_PT: u32 = 100;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_centipoints(pt: u32) -> u32 {
    pt.saturating_mul(CENTIPOINTS_PER_PT)
}

/// Converts a DrawingML `sz` value back to whole points, dropping fractions.
#[inline]
pub fn centipoints_to_pt(sz: u32) -> u32 {
    sz / CENTIPOINTS_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slide_size() {
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
    }

    #[test]
    fn test_font_size_units() {
        assert_eq!(pt_to_centipoints(54), 5400);
        assert_eq!(centipoints_to_pt(5400), 54);
        assert_eq!(centipoints_to_pt(1850), 18);
    }
}
