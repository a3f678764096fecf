//! CSV file symbol catalog.

use crate::domain::error::StockChartError;
use crate::ports::symbol_port::SymbolCatalog;
use std::fs;
use std::path::PathBuf;

const SYMBOL_COLUMN: &str = "Symbol";

pub struct CsvSymbolCatalog {
    path: PathBuf,
}

impl CsvSymbolCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_error(&self, reason: impl Into<String>) -> StockChartError {
        StockChartError::CatalogLoad {
            path: self.path.display().to_string(),
            reason: reason.into(),
        }
    }
}

impl SymbolCatalog for CsvSymbolCatalog {
    fn load_symbols(&self) -> Result<Vec<String>, StockChartError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.load_error(e.to_string()))?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let headers = rdr
            .headers()
            .map_err(|e| self.load_error(format!("CSV header error: {}", e)))?;
        let column = headers
            .iter()
            .position(|h| h.trim() == SYMBOL_COLUMN)
            .ok_or_else(|| self.load_error(format!("missing {} column", SYMBOL_COLUMN)))?;

        let mut symbols = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| self.load_error(format!("CSV parse error: {}", e)))?;
            let symbol = record.get(column).map(str::trim).unwrap_or_default();
            if !symbol.is_empty() {
                symbols.push(symbol.to_string());
            }
        }

        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stocks.csv");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_symbols_preserves_source_order() {
        let (_dir, path) = write_catalog(
            "Symbol,Name\n\
             MSFT,Microsoft Corp\n\
             AAPL,Apple Inc\n\
             IBM,International Business Machines\n",
        );
        let catalog = CsvSymbolCatalog::new(path);
        assert_eq!(catalog.load_symbols().unwrap(), vec!["MSFT", "AAPL", "IBM"]);
    }

    #[test]
    fn symbol_column_need_not_be_first() {
        let (_dir, path) = write_catalog("Name,Symbol\nApple Inc,AAPL\n\"Tesla, Inc\",TSLA\n");
        let catalog = CsvSymbolCatalog::new(path);
        assert_eq!(catalog.load_symbols().unwrap(), vec!["AAPL", "TSLA"]);
    }

    #[test]
    fn blank_symbols_are_skipped() {
        let (_dir, path) = write_catalog("Symbol,Name\nAAPL,Apple\n,Unknown\n");
        let catalog = CsvSymbolCatalog::new(path);
        assert_eq!(catalog.load_symbols().unwrap(), vec!["AAPL"]);
    }

    #[test]
    fn missing_file_is_catalog_error() {
        let dir = TempDir::new().unwrap();
        let catalog = CsvSymbolCatalog::new(dir.path().join("absent.csv"));
        assert!(matches!(
            catalog.load_symbols(),
            Err(StockChartError::CatalogLoad { .. })
        ));
    }

    #[test]
    fn missing_column_is_catalog_error() {
        let (_dir, path) = write_catalog("Ticker,Name\nAAPL,Apple\n");
        let catalog = CsvSymbolCatalog::new(path);
        match catalog.load_symbols() {
            Err(StockChartError::CatalogLoad { reason, .. }) => {
                assert!(reason.contains("missing Symbol column"));
            }
            other => panic!("expected CatalogLoad, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_are_catalog_error() {
        let (_dir, path) = write_catalog("Symbol,Name\nAAPL,Apple,Extra\n");
        let catalog = CsvSymbolCatalog::new(path);
        assert!(matches!(
            catalog.load_symbols(),
            Err(StockChartError::CatalogLoad { .. })
        ));
    }
}
