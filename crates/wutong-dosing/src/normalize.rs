/// Step between recommended doses, mg.
pub const DOSE_STEP: f64 = 10.0;

/// Smallest non-zero dose ever recommended, mg.
pub const MIN_DOSE: u32 = 10;

/// Largest dose ever recommended: the top multiple of 10 that fits a `u32`.
pub const MAX_DOSE: u32 = u32::MAX / 10 * 10;

/// Map a raw dose to a usable one.
///
/// Non-positive or non-finite input means no dose (0). Anything else is
/// rounded half-up to the nearest multiple of 10 and never drops below
/// [`MIN_DOSE`], so 25 → 30, 24 → 20 and 5 → 10. Huge input saturates at
/// [`MAX_DOSE`].
pub fn normalize(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let rounded = (raw / DOSE_STEP + 0.5).floor() * DOSE_STEP;
    (rounded.min(f64::from(MAX_DOSE)) as u32).max(MIN_DOSE)
}
