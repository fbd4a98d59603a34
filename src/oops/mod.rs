pub mod encapsulation;
pub mod inheritance;
pub mod interfaces;
pub mod notes;
