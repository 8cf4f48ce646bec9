/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod color;
mod fpa;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use color::PALETTE;
#[doc(inline)]
pub use color::palette_color;
#[doc(inline)]
pub use fpa::FPA;
