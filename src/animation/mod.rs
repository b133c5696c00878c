pub mod animator;
pub mod curve;
pub mod ease;
pub mod spring;
