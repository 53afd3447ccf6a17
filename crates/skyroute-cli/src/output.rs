//! Output formatting for route and quote results.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use skyroute_lib::{render_quote_plain, PriceQuote, RouteSummary};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn render_route(self, summary: &RouteSummary) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(summary.render_plain()),
            OutputFormat::Json => to_json(summary),
        }
    }

    pub fn render_quote(self, summary: &RouteSummary, quote: &PriceQuote) -> Result<String> {
        match self {
            OutputFormat::Text => {
                let mut text = summary.render_plain();
                text.push('\n');
                text.push_str(&render_quote_plain(quote));
                if let Some(cheapest) = quote.cheapest() {
                    text.push_str(&format!(
                        "Cheapest: {} at {:.2} per passenger\n",
                        cheapest.fare_class, cheapest.unit_price
                    ));
                }
                Ok(text)
            }
            OutputFormat::Json => to_json(&QuoteOutput {
                route: summary,
                quote,
            }),
        }
    }
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    route: &'a RouteSummary,
    quote: &'a PriceQuote,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    json.push('\n');
    Ok(json)
}
