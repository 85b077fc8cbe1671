/// Decoding solver models into tilings
pub mod decoder;
/// Formula construction and solution enumeration for one run
pub mod executor;
/// Clause solver seam and model enumeration
pub mod solver;
/// Geometric re-checks of decoded tilings
pub mod validation;
