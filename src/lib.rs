//! Lakeline library - under-ice water column rendering for a fishing game

pub mod cli;
pub mod depth;
pub mod draw;
pub mod error;
pub mod font;
pub mod noise;
pub mod params;
pub mod raster;
pub mod recording;
pub mod rendering;
pub mod terrain;
pub mod water_column;
