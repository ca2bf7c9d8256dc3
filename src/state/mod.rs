//! Wizard state module

mod form_record;
mod shareholders;
mod step;

pub use form_record::*;
pub use shareholders::*;
pub use step::*;
