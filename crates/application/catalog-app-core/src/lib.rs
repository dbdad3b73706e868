pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod expansion;
pub mod kernel;
pub mod ports;
mod source;
pub mod view;
pub mod viewmodel;

pub use app::CatalogApplication;
pub use app_core::*;
pub use domain::{CatalogState, CatalogStatus};
pub use expansion::ExpansionState;
pub use kernel::{request_product_catalog, AppKernel};
pub use ports::*;
pub use view::ProductListView;
pub use viewmodel::*;
