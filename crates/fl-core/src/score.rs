//! Creditworthiness score derivation from the debt-to-income ratio.

/// A debt-to-income ratio at or above this maps to the worst rating.
const DTI_CEILING: f64 = 50.0;

/// Convert a debt-to-income ratio into an approval rating on a 0..=1 scale.
///
/// rating = 1 − dti/50, clamped:
/// - DTI 0  → 1.0 (best)
/// - DTI 25 → 0.5
/// - DTI 50 → 0.0 (worst)
///
/// Lower ratios are better for the borrower, so the transform flips the
/// direction into the "higher = more creditworthy" scale the engine ranks on.
/// Non-finite input has no rating.
pub fn dti_rating(dti: f64) -> Option<f64> {
    if !dti.is_finite() {
        return None;
    }
    Some((1.0 - dti / DTI_CEILING).clamp(0.0, 1.0))
}
