/// Response shapes for the CoinGecko simple/price endpoint
use serde_json::Value;
use std::collections::HashMap;

/// Parsed body of `/simple/price`: one entry per requested asset, e.g.
/// `{"bitcoin": {"usd": 64250.0}}`.
///
/// Price values stay raw JSON so a quote passes through exactly as the API
/// returned it; schema knowledge lives in the helpers below, not the type.
pub type PriceQuote = HashMap<String, HashMap<String, Value>>;

/// Pull the (asset name, usd price) pair out of a quote
///
/// Quotes carry a single asset entry; the name is whatever key the API
/// echoed back. Returns None when the quote is empty or has no usd field.
pub fn usd_entry(quote: &PriceQuote) -> Option<(&str, &Value)> {
    let (name, currencies) = quote.iter().next()?;
    let price = currencies.get("usd")?;
    Some((name.as_str(), price))
}

/// Render a JSON price value as the TEXT form stored in the cache table
///
/// Numbers keep their JSON rendering (100 stays "100", 0.5 stays "0.5");
/// string prices are stored as-is without extra quotes.
pub fn price_to_text(price: &Value) -> String {
    match price {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
