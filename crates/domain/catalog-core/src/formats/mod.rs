pub mod product;

pub use product::{parse_catalog, ProductExternal};
