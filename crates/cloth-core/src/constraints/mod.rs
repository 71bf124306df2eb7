//! Position-level constraints applied after integration.
//!
//! `structural` relaxes the inextensibility springs between grid
//! neighbours; `collision` projects particles out of world primitives.
pub mod collision;
pub mod structural;
