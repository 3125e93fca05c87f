//! Signal events detected by the chart engine.
//!
//! Ten pattern categories exist and nothing outside this set can be
//! deserialized — an unrecognized tag fails the whole chart file.

use serde::Deserialize;

/// The closed set of signal pattern categories, tagged as the chart
/// engine writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum SignalKind {
    #[serde(rename = "dt_buy")]
    DoubleTopBuy,
    #[serde(rename = "db_sell")]
    DoubleBottomSell,
    #[serde(rename = "tt_buy")]
    TripleTopBuy,
    #[serde(rename = "tb_sell")]
    TripleBottomSell,
    #[serde(rename = "bullish_tt_buy")]
    BullishTripleTopBuy,
    #[serde(rename = "bearish_tb_sell")]
    BearishTripleBottomSell,
    #[serde(rename = "catapult_buy")]
    CatapultBuy,
    #[serde(rename = "catapult_sell")]
    CatapultSell,
    #[serde(rename = "ttop_catapult_buy")]
    TopCatapultBuy,
    #[serde(rename = "tbot_catapult_sell")]
    BottomCatapultSell,
}

impl SignalKind {
    /// Every category, in its stable display order.
    pub const ALL: [SignalKind; 10] = [
        SignalKind::DoubleTopBuy,
        SignalKind::DoubleBottomSell,
        SignalKind::TripleTopBuy,
        SignalKind::TripleBottomSell,
        SignalKind::BullishTripleTopBuy,
        SignalKind::BearishTripleBottomSell,
        SignalKind::CatapultBuy,
        SignalKind::CatapultSell,
        SignalKind::TopCatapultBuy,
        SignalKind::BottomCatapultSell,
    ];

    /// Key under which this category's series appears in the output bundle.
    pub fn series_name(self) -> &'static str {
        match self {
            SignalKind::DoubleTopBuy => "dt_buys",
            SignalKind::DoubleBottomSell => "db_sells",
            SignalKind::TripleTopBuy => "tt_buys",
            SignalKind::TripleBottomSell => "tb_sells",
            SignalKind::BullishTripleTopBuy => "bullish_tt_buys",
            SignalKind::BearishTripleBottomSell => "bearish_tb_sells",
            SignalKind::CatapultBuy => "catapult_buys",
            SignalKind::CatapultSell => "catapult_sells",
            SignalKind::TopCatapultBuy => "tt_catapult_buys",
            SignalKind::BottomCatapultSell => "tb_catapult_sells",
        }
    }
}

/// One detected signal, referencing its column by position.
///
/// Multiple events may share a column; the resolver keeps one winner per
/// column (see `series::overlay`).
#[derive(Debug, Clone, Deserialize)]
pub struct SignalEvent {
    pub column: usize,
    #[serde(rename = "type")]
    pub kind: SignalKind,
    /// Higher is more significant when several events land in one column.
    pub priority: i64,
    /// Price level of the box that triggered the signal.
    #[serde(rename = "box")]
    pub box_value: f64,
    /// Trade price at signal time. Older chart files omit it.
    #[serde(default)]
    pub price: Option<f64>,
}

impl SignalEvent {
    /// The price to plot the signal at on a price-only chart; the box
    /// value stands in when the chart file carries no trade price.
    pub fn signal_price(&self) -> f64 {
        self.price.unwrap_or(self.box_value)
    }
}
