//! Interface shapes for the serving layer
//!
//! The HTTP/tile layer and the place-name autocomplete index live
//! outside this workspace. These are the shapes they exchange with the
//! routing kernel, kept here so both sides compile against one
//! definition. No implementations: rendering and prefix search are the
//! serving layer's problem.

use serde::{Deserialize, Serialize};

/// One place-name match produced by the autocomplete collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceMatch {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub id: i64,
}

/// Prefix lookup over place names.
pub trait PlaceSearch {
    /// Full matches for a name prefix, with their map coordinates.
    fn locations_by_prefix(&self, prefix: &str) -> Vec<PlaceMatch>;
}

/// Viewport a client asks the raster layer to cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterRequest {
    /// Bounding box: upper-left and lower-right corners
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
    /// Viewport size in pixels
    pub width: f64,
    pub height: f64,
}

/// Geographic extent actually covered by a returned raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterBounds {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
    pub depth: u8,
}

/// Grid of tile identifiers covering a requested viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterResult {
    pub grid: Vec<Vec<String>>,
    pub bounds: RasterBounds,
    pub success: bool,
}

/// Tile selection and compositing.
pub trait TileRasterer {
    fn raster(&self, request: &RasterRequest) -> RasterResult;
}
