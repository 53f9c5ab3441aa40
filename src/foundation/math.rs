pub(crate) fn bit_and(a: f64, b: f64) -> f64 {
    f64::from_bits(a.to_bits() & b.to_bits())
}

pub(crate) fn bit_or(a: f64, b: f64) -> f64 {
    f64::from_bits(a.to_bits() | b.to_bits())
}

pub(crate) fn bit_xor(a: f64, b: f64) -> f64 {
    f64::from_bits(a.to_bits() ^ b.to_bits())
}

pub(crate) fn bit_not(v: f64) -> f64 {
    f64::from_bits(!v.to_bits())
}

/// How an evaluated channel value becomes a color byte.
///
/// The evaluator output is unbounded; it is scaled by 255 before conversion in both modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Clamp into `[0, 255]`. NaN maps to 0.
    #[default]
    Clamp,
    /// Truncate to a 32-bit integer and keep the low 8 bits, so out-of-range values wrap around.
    /// Values outside the `i32` range, infinities and NaN give 0.
    Wrap,
}

impl ColorMode {
    /// Convert one evaluated channel value into a byte.
    pub fn to_byte(self, v: f64) -> u8 {
        let scaled = v * 255.0;
        match self {
            // `as` saturates and sends NaN to 0.
            Self::Clamp => scaled.clamp(0.0, 255.0) as u8,
            // Out-of-range and NaN truncate to `i32::MIN`, whose low byte is 0.
            Self::Wrap => {
                let t = scaled.trunc();
                if t >= f64::from(i32::MIN) && t <= f64::from(i32::MAX) {
                    t as i32 as u8
                } else {
                    0
                }
            }
        }
    }
}
