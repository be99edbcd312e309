pub mod extractor;
pub mod identity;
pub mod session;
