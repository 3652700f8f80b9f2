/// Errors reported by the checked bounding sphere computations.
///
/// The unchecked functions of [`crate::enclosing`] never fail: they return a zero-radius sphere
/// for an empty input and produce meaningless results when given NaN or infinite coordinates.
/// The `try_` variants ([`try_bounding_sphere`], [`try_miniball`]) validate their input first
/// and report these cases instead.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use bsphere3d::enclosing::{try_miniball, EnclosingError};
/// use nalgebra::Point3;
///
/// let points = vec![Point3::origin(), Point3::new(f32::NAN, 0.0, 0.0)];
///
/// assert_eq!(try_miniball(&[]), Err(EnclosingError::EmptyInput));
/// assert_eq!(try_miniball(&points), Err(EnclosingError::NonFinitePoint(1)));
/// # }
/// ```
///
/// [`try_bounding_sphere`]: crate::enclosing::try_bounding_sphere
/// [`try_miniball`]: crate::enclosing::try_miniball
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum EnclosingError {
    /// No point was given.
    #[error("Cannot compute the bounding sphere of an empty point cloud.")]
    EmptyInput,
    /// The point at the given index has a NaN or infinite coordinate.
    #[error("The point at index {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),
}
