//! Marker classification by the digits of a sample's integer part.

/// Marker class of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// Every decimal digit of `|trunc(y)|` is even.
    EvenDigits,
    /// At least one digit is odd.
    Mixed,
}

/// Classify a sample by its Y value.
///
/// Only the truncated integer part counts, so `0.9` classifies as
/// [`MarkerClass::EvenDigits`]. Magnitudes beyond `u64::MAX` saturate.
pub fn classify(y: f64) -> MarkerClass {
    let mut value = y.abs().trunc() as u64;
    loop {
        if (value % 10) % 2 != 0 {
            return MarkerClass::Mixed;
        }
        value /= 10;
        if value == 0 {
            return MarkerClass::EvenDigits;
        }
    }
}
