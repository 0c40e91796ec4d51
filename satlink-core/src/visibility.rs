//! Inter-visibility graph construction from propagated positions.
//!
//! The orbital propagator stays outside this crate; it is consumed through
//! the [`PositionSource`] trait, which yields one ECEF coordinate (metres)
//! per vertex at a fixed epoch. Two vertices share an edge when their
//! separation is within the link range and the segment between them clears
//! the occluding sphere. Edge weights are separation distances rounded to
//! the nearest metre.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;

use crate::graph::ComponentGraph;

/// Earth's equatorial radius in metres, the default occluder.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// Abstraction over a collection of bodies with known positions.
///
/// # Examples
/// ```
/// use satlink_core::{PositionError, PositionSource};
///
/// struct Constellation(Vec<[f64; 3]>);
///
/// impl PositionSource for Constellation {
///     fn len(&self) -> usize { self.0.len() }
///     fn name(&self) -> &str { "constellation" }
///     fn position(&self, index: usize) -> Result<[f64; 3], PositionError> {
///         self.0.get(index).copied().ok_or(PositionError::OutOfBounds { index })
///     }
/// }
///
/// let source = Constellation(vec![[7.0e6, 0.0, 0.0]]);
/// assert_eq!(source.len(), 1);
/// assert_eq!(source.position(0)?, [7.0e6, 0.0, 0.0]);
/// # Ok::<(), satlink_core::PositionError>(())
/// ```
pub trait PositionSource {
    /// Returns the number of bodies in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no bodies.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a human-readable name.
    fn name(&self) -> &str;

    /// Returns the ECEF position of one body in metres.
    fn position(&self, index: usize) -> Result<[f64; 3], PositionError>;
}

/// An error produced by [`PositionSource`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PositionError {
    /// Requested index was outside the source's bounds.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },
}

/// Stable codes describing [`VisibilityError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VisibilityErrorCode {
    /// A [`PositionSource`] operation failed while building the graph.
    PositionFailure,
    /// A position contained a NaN or infinite coordinate.
    NonFinitePosition,
}

impl VisibilityErrorCode {
    /// Return the stable machine-readable representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PositionFailure => "VISIBILITY_POSITION_FAILURE",
            Self::NonFinitePosition => "VISIBILITY_NON_FINITE_POSITION",
        }
    }
}

impl fmt::Display for VisibilityErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced when building a visibility graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VisibilityError {
    /// A [`PositionSource`] operation failed while building the graph.
    #[error("position source `{source_name}` failed: {error}")]
    Position {
        /// Name of the failing source.
        source_name: Arc<str>,
        /// The underlying source error.
        #[source]
        error: PositionError,
    },
    /// A position contained a NaN or infinite coordinate.
    #[error("position {index} has a non-finite coordinate")]
    NonFinitePosition {
        /// Index of the offending body.
        index: usize,
    },
}

impl VisibilityError {
    /// Retrieve the stable [`VisibilityErrorCode`] for this error.
    pub const fn code(&self) -> VisibilityErrorCode {
        match self {
            Self::Position { .. } => VisibilityErrorCode::PositionFailure,
            Self::NonFinitePosition { .. } => VisibilityErrorCode::NonFinitePosition,
        }
    }
}

/// Link parameters for visibility graph construction.
///
/// # Examples
/// ```
/// use satlink_core::VisibilityParams;
///
/// let params = VisibilityParams::new(2_000_000.0).with_occluder_radius(1.0e6);
/// assert_eq!(params.max_range_m(), 2_000_000.0);
/// assert_eq!(params.occluder_radius_m(), 1.0e6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
    max_range_m: f64,
    occluder_radius_m: f64,
}

impl VisibilityParams {
    /// Creates parameters with the given link range and an Earth-sized
    /// occluder centred on the origin.
    #[must_use]
    pub const fn new(max_range_m: f64) -> Self {
        Self {
            max_range_m,
            occluder_radius_m: EARTH_EQUATORIAL_RADIUS_M,
        }
    }

    /// Overrides the occluding sphere radius.
    #[must_use]
    pub const fn with_occluder_radius(mut self, occluder_radius_m: f64) -> Self {
        self.occluder_radius_m = occluder_radius_m;
        self
    }

    /// Returns the configured link range in metres.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_range_m(&self) -> f64 { self.max_range_m }

    /// Returns the occluding sphere radius in metres.
    #[must_use]
    #[rustfmt::skip]
    pub const fn occluder_radius_m(&self) -> f64 { self.occluder_radius_m }
}

/// Returns `true` when the segment between two positions clears the
/// occluding sphere centred on the origin.
///
/// Solves the quadratic in the segment parameter `t`; an intersection of the
/// infinite line outside `t ∈ [0, 1]` does not occlude. Coincident positions
/// are trivially clear.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "segment-sphere intersection is floating-point geometry"
)]
pub fn line_of_sight(a: [f64; 3], b: [f64; 3], occluder_radius_m: f64) -> bool {
    let d = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let a_term = dot(d, d);
    let b_term = 2.0 * dot(d, a);
    let c_term = dot(a, a) - occluder_radius_m * occluder_radius_m;

    let discriminant = b_term * b_term - 4.0 * a_term * c_term;
    if discriminant < 0.0 || a_term == 0.0 {
        return true;
    }

    let sqrt_discriminant = discriminant.sqrt();
    let t_near = (-b_term - sqrt_discriminant) / (2.0 * a_term);
    let t_far = (-b_term + sqrt_discriminant) / (2.0 * a_term);
    let blocked = (0.0..=1.0).contains(&t_near) || (0.0..=1.0).contains(&t_far);
    !blocked
}

/// Builds the inter-visibility graph over a position source.
///
/// Adds one vertex per body, then one edge per unordered pair whose
/// separation is within `params.max_range_m()` and whose connecting segment
/// clears the occluder. Pairwise evaluation fans out over rows with rayon;
/// insertion stays sequential.
///
/// # Errors
/// Returns [`VisibilityError::Position`] when the source fails and
/// [`VisibilityError::NonFinitePosition`] when a coordinate is NaN or
/// infinite.
#[expect(
    clippy::indexing_slicing,
    clippy::cast_possible_truncation,
    reason = "pair indices stay below the validated position count, and a \
              finite in-range distance rounds into u64"
)]
pub fn build_visibility_graph<S: PositionSource>(
    source: &S,
    params: &VisibilityParams,
) -> Result<ComponentGraph, VisibilityError> {
    let count = source.len();
    let mut positions = Vec::with_capacity(count);
    for index in 0..count {
        let position = source
            .position(index)
            .map_err(|error| VisibilityError::Position {
                source_name: Arc::from(source.name()),
                error,
            })?;
        if position.iter().any(|coordinate| !coordinate.is_finite()) {
            return Err(VisibilityError::NonFinitePosition { index });
        }
        positions.push(position);
    }

    let mut graph = ComponentGraph::with_capacity(count);
    for _ in 0..count {
        graph.add_node();
    }

    let table: &[[f64; 3]] = &positions;
    let params = *params;
    let visible: Vec<(usize, usize, u64)> = (0..count)
        .into_par_iter()
        .flat_map_iter(move |i| {
            ((i + 1)..count).filter_map(move |j| {
                let distance = euclidean_distance(table[i], table[j]);
                if distance > params.max_range_m() {
                    return None;
                }
                if !line_of_sight(table[i], table[j], params.occluder_radius_m()) {
                    return None;
                }
                // distance is finite and non-negative at this point
                let weight = distance.round() as u64;
                Some((i, j, weight))
            })
        })
        .collect();

    for (u, v, weight) in visible {
        graph
            .add_edge(u, v, weight)
            .expect("pairwise enumeration yields distinct in-range endpoints");
    }
    Ok(graph)
}

#[expect(clippy::float_arithmetic, reason = "vector arithmetic")]
fn euclidean_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let d = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    dot(d, d).sqrt()
}

#[expect(clippy::float_arithmetic, reason = "vector arithmetic")]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
