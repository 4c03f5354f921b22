pub mod extract;
pub mod inject;
