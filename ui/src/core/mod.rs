//! Platform-agnostic showcase logic: flavor data, selection, animation timing.

pub mod animation;
pub mod config;
pub mod flavors;
pub mod presentation;
pub mod selection;
pub mod timing;
