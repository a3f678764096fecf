//! Symbol validation against the live quote endpoint.

use log::{debug, warn};

use crate::ports::market_data_port::MarketDataPort;

/// A symbol is valid when the quote endpoint returns a non-empty quote and no
/// error message. Any transport or parse failure also counts as invalid, so an
/// unreachable API looks the same as an unknown symbol.
pub fn is_valid(market: &dyn MarketDataPort, symbol: &str) -> bool {
    match market.fetch_quote(symbol) {
        Ok(quote) if quote.has_error() => {
            debug!("quote for {symbol} rejected: {:?}", quote.error_message);
            false
        }
        Ok(quote) => !quote.is_empty(),
        Err(e) => {
            warn!("could not validate {symbol}, treating as invalid: {e}");
            false
        }
    }
}
