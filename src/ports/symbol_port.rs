//! Symbol catalog port trait.

use crate::domain::error::StockChartError;

pub trait SymbolCatalog {
    /// Valid ticker symbols in source order.
    fn load_symbols(&self) -> Result<Vec<String>, StockChartError>;
}
