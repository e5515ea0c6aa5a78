//! Ray intersection demos
//!
//! A 2D ray against a circle and a 3D ray-cast sphere, both redrawn into an
//! RGBA pixel buffer on every frame tick of a pluggable host.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod camera;
pub mod circle;
pub mod color;
pub mod config;
pub mod demo;
pub mod error;
pub mod fps;
pub mod frame;
pub mod hittable;
pub mod host;
pub mod input;
pub mod interval;
pub mod output;
pub mod random;
pub mod ray;
pub mod shader;
pub mod sphere;
pub mod vector;
