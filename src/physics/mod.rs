//! Physics Module - collision volumes

pub mod aabb;

pub use aabb::{
    aabb_center, aabb_contains_point, aabb_from_center_half_extents, aabb_is_well_formed,
    create_aabb, AABB,
};
