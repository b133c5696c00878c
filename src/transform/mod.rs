//! Transform helpers shared by the sheet visuals and edge transitions.

pub mod affine;
pub mod projective;
