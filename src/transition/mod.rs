pub mod edge;
pub mod measure;
