#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // Catalog
    FetchProducts,
}
