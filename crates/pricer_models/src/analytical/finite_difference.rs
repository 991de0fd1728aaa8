//! Divided-difference Greek approximations.
//!
//! Bump-and-reprice estimates for any pricing function of spot:
//!
//! - Delta: (V(S + h) − V(S − h)) / 2h
//! - Gamma: (V(S + h) − 2V(S) + V(S − h)) / h²
//!
//! Used to cross-check closed-form Greeks and to give Greeks to engines
//! that have none.

/// Relative spot bump used by [`default_bump`].
pub const DEFAULT_RELATIVE_BUMP: f64 = 1e-2;

/// Returns the default absolute bump `h = 1e-2·S`.
#[inline]
pub fn default_bump(spot: f64) -> f64 {
    DEFAULT_RELATIVE_BUMP * spot
}

/// Central-difference delta.
///
/// # Examples
/// ```
/// use pricer_models::analytical::finite_difference::delta;
///
/// // V(S) = S² ⇒ ∂V/∂S = 2S
/// let d = delta(|s| Ok::<_, ()>(s * s), 3.0, 1e-3).unwrap();
/// assert!((d - 6.0).abs() < 1e-9);
/// ```
pub fn delta<F, E>(price: F, spot: f64, bump: f64) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let up = price(spot + bump)?;
    let down = price(spot - bump)?;
    Ok((up - down) / (2.0 * bump))
}

/// Central second difference gamma.
pub fn gamma<F, E>(price: F, spot: f64, bump: f64) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let up = price(spot + bump)?;
    let mid = price(spot)?;
    let down = price(spot - bump)?;
    Ok((up - 2.0 * mid + down) / (bump * bump))
}
