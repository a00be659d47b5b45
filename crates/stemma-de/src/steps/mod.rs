// Suffix stripping stages.
//
// Each stage takes ownership of the buffer produced by the previous one,
// selects the longest candidate ending among its groups, and truncates
// only when the ending lies in the stage's region.

pub mod case_endings;
pub mod comparative;
pub mod derivational;

pub use case_endings::{CaseEnding, strip_case_endings};
pub use comparative::{ComparativeEnding, strip_comparative};
pub use derivational::{DerivationalEnding, strip_derivational};
