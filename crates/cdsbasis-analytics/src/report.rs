//! Tabular summary of a basis analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::basis::{BasisResult, TradeSignal};
use crate::pricing::PriceResult;

/// Column headers of the summary table, in output order.
pub const REPORT_COLUMNS: [&str; 7] = [
    "Ticker",
    "Market_Price",
    "Synthetic_Price",
    "Z_Spread_bps",
    "CDS_Spread_bps",
    "Basis_bps",
    "Trade_Signal",
];

/// One summary row per analyzed ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Issuer ticker.
    pub ticker: String,
    /// Observed clean market price.
    pub market_price: f64,
    /// Survival-weighted synthetic dirty price.
    pub synthetic_price: f64,
    /// Solved Z-spread in basis points.
    pub z_spread_bps: f64,
    /// Reference CDS spread in basis points.
    pub cds_spread_bps: f64,
    /// Basis in basis points.
    pub basis_bps: f64,
    /// Classified signal.
    pub trade_signal: TradeSignal,
}

impl ReportRow {
    /// Assembles a row from the pricing and basis results.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        market_price: f64,
        price: &PriceResult,
        basis: &BasisResult,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            market_price,
            synthetic_price: price.dirty_price,
            z_spread_bps: basis.z_spread_bps,
            cds_spread_bps: basis.cds_spread_bps,
            basis_bps: basis.basis_bps,
            trade_signal: basis.signal,
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:>12.2} {:>15.4} {:>12.2} {:>14.1} {:>9.2}  {}",
            self.ticker,
            self.market_price,
            self.synthetic_price,
            self.z_spread_bps,
            self.cds_spread_bps,
            self.basis_bps,
            self.trade_signal
        )
    }
}

/// Renders rows as a table with the [`REPORT_COLUMNS`] header.
#[must_use]
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = format!(
        "{:<8} {:>12} {:>15} {:>12} {:>14} {:>9}  {}\n",
        REPORT_COLUMNS[0],
        REPORT_COLUMNS[1],
        REPORT_COLUMNS[2],
        REPORT_COLUMNS[3],
        REPORT_COLUMNS[4],
        REPORT_COLUMNS[5],
        REPORT_COLUMNS[6],
    );
    for row in rows {
        out.push_str(&row.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ReportRow {
        ReportRow {
            ticker: "INTC".into(),
            market_price: 94.50,
            synthetic_price: 89.2768,
            z_spread_bps: 172.21,
            cds_spread_bps: 160.0,
            basis_bps: -12.21,
            trade_signal: TradeSignal::BondCheap,
        }
    }

    #[test]
    fn row_renders_all_columns() {
        let text = row().to_string();
        assert!(text.starts_with("INTC"));
        assert!(text.contains("94.50"));
        assert!(text.contains("89.2768"));
        assert!(text.contains("-12.21"));
        assert!(text.ends_with("Bond Cheap"));
    }

    #[test]
    fn table_has_header_and_one_line_per_row() {
        let table = render_table(&[row(), row()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Z_Spread_bps"));
        assert!(lines[0].contains("Trade_Signal"));
    }
}
