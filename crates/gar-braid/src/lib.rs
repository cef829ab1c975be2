#![deny(missing_docs)]
#![doc = "Elements of a Garside group stored in left normal form `Δ^inf · f1 ⋯ fr`, \
generic over the simple factors of the structure, with the arithmetic and the \
sliding operation consumed by the summit set algorithms."]

pub mod braid;
pub mod normal_form;
pub mod serde;
mod sliding;

pub use braid::Braid;
pub use normal_form::{is_left_weighted, is_right_weighted, right_normal_factors};
