//! Resolution-scaling arithmetic
//!
//! Relates grid dimensions (cell counts) to physical resolutions (meters
//! per cell). Growing the resolution shrinks the grid and vice versa; the
//! scaling factor is `old_resolution / new_resolution`.
//!
//! Scaled dimensions are truncated, not rounded. Truncation guarantees the
//! rescaled grid never covers more physical area than the source, and
//! downstream consumers depend on the exact cell counts it produces.

use crate::error::{TransformError, TransformResult};
use gridviz_core::MapMetadata;

fn check_resolution(resolution: f32) -> TransformResult<()> {
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(TransformError::InvalidResolution(resolution));
    }
    Ok(())
}

/// Compute the pixel dimensions of a grid rescaled to a new resolution.
///
/// Each dimension is multiplied by `old_resolution / new_resolution` and
/// truncated toward zero. A grid much smaller than the target cell size
/// can legitimately scale to zero pixels on an axis.
///
/// # Errors
///
/// Returns [`TransformError::InvalidResolution`] if either resolution is
/// zero, negative, or not finite.
pub fn scaled_size(
    size: (u32, u32),
    old_resolution: f32,
    new_resolution: f32,
) -> TransformResult<(u32, u32)> {
    check_resolution(old_resolution)?;
    check_resolution(new_resolution)?;

    let factor = f64::from(old_resolution) / f64::from(new_resolution);
    let (width, height) = size;
    Ok((
        (f64::from(width) * factor) as u32,
        (f64::from(height) * factor) as u32,
    ))
}

/// Recompute grid metadata for a new resolution.
///
/// Width and height are rescaled via [`scaled_size`]; `map_load_time` and
/// `origin` are copied unchanged.
///
/// # Errors
///
/// Returns [`TransformError::InvalidResolution`] if either the metadata's
/// resolution or `resolution` is invalid.
pub fn scaled_metadata(metadata: &MapMetadata, resolution: f32) -> TransformResult<MapMetadata> {
    let (width, height) = scaled_size(
        (metadata.width, metadata.height),
        metadata.resolution,
        resolution,
    )?;
    Ok(MapMetadata {
        map_load_time: metadata.map_load_time,
        resolution,
        width,
        height,
        origin: metadata.origin,
    })
}

/// Pick the resolution that fits a grid into a goal bitmap size.
///
/// Computes the resolution implied by fitting the width and by fitting the
/// height independently, and returns the larger (coarser) of the two, so
/// the scaled bitmap never exceeds the goal size on either axis.
///
/// # Errors
///
/// Returns [`TransformError::ZeroDimension`] if any goal or current
/// dimension is zero, and [`TransformError::InvalidResolution`] if
/// `current_resolution` is invalid.
pub fn choose_resolution(
    goal_size: (u32, u32),
    current_size: (u32, u32),
    current_resolution: f32,
) -> TransformResult<f32> {
    check_resolution(current_resolution)?;
    let (goal_width, goal_height) = goal_size;
    let (current_width, current_height) = current_size;
    for (width, height) in [goal_size, current_size] {
        if width == 0 || height == 0 {
            return Err(TransformError::ZeroDimension { width, height });
        }
    }

    let resolution = f64::from(current_resolution);
    let width_resolution = f64::from(current_width) / f64::from(goal_width) * resolution;
    let height_resolution = f64::from(current_height) / f64::from(goal_height) * resolution;
    Ok(width_resolution.max(height_resolution) as f32)
}
