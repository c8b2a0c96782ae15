mod envelope;

pub use envelope::*;
