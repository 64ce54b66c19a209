pub mod controller;
pub mod enrichment;
pub mod openlibrary;
