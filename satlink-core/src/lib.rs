//! Satlink core library: minimum spanning forests over satellite
//! inter-visibility graphs via parallel Borůvka edge contraction.

mod boruvka;
mod builder;
mod error;
mod graph;
mod result;
mod visibility;

pub use crate::{
    builder::{Boruvka, BoruvkaBuilder},
    error::{GraphError, GraphErrorCode, Result},
    graph::{ComponentGraph, EdgeKey, EdgeRecord},
    result::{MstEdge, MstResult},
    visibility::{
        EARTH_EQUATORIAL_RADIUS_M, PositionError, PositionSource, VisibilityError,
        VisibilityErrorCode, VisibilityParams, build_visibility_graph, line_of_sight,
    },
};
