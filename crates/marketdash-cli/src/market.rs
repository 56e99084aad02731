//! Market quotes and economic indicators shown above the news.
//!
//! There is no market data provider behind these figures. Quotes are
//! placeholders drawn around fixed reference levels, and the economic
//! indicators are a table maintained by hand.

use rand::Rng;

/// Colour class of a quote or indicator card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Positive,
    Negative,
    Neutral,
}

impl Status {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub icon: &'static str,
    pub name: &'static str,
    /// Display value including any currency prefix, e.g. `"$2,651.20"`.
    pub value: String,
    /// Signed absolute change, e.g. `"+12.50"`.
    pub change: String,
    /// Signed percent change without the `%` sign.
    pub pchange: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub icon: &'static str,
    pub name: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    /// Footer line, e.g. `"Updated: Jan 2026"`.
    pub updated: &'static str,
    pub status: Status,
}

#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub quotes: Vec<Quote>,
    pub usa: Vec<Indicator>,
    pub india: Vec<Indicator>,
}

struct QuoteBand {
    icon: &'static str,
    name: &'static str,
    prefix: &'static str,
    reference: f64,
    drift: (f64, f64),
    change: (f64, f64),
    thousands: bool,
}

const QUOTES: [QuoteBand; 8] = [
    QuoteBand {
        icon: "🎯",
        name: "GIFT Nifty",
        prefix: "",
        reference: 23_500.0,
        drift: (-200.0, 200.0),
        change: (-100.0, 150.0),
        thousands: true,
    },
    QuoteBand {
        icon: "📈",
        name: "Dow Jones",
        prefix: "",
        reference: 43_500.0,
        drift: (-500.0, 500.0),
        change: (-200.0, 300.0),
        thousands: true,
    },
    QuoteBand {
        icon: "💹",
        name: "S&P 500",
        prefix: "",
        reference: 5_875.0,
        drift: (-50.0, 50.0),
        change: (-20.0, 30.0),
        thousands: true,
    },
    QuoteBand {
        icon: "💻",
        name: "Nasdaq",
        prefix: "",
        reference: 18_350.0,
        drift: (-100.0, 100.0),
        change: (-50.0, 80.0),
        thousands: true,
    },
    QuoteBand {
        icon: "🛢️",
        name: "Crude Oil",
        prefix: "$",
        reference: 78.5,
        drift: (-2.0, 2.0),
        change: (-1.5, 2.0),
        thousands: false,
    },
    QuoteBand {
        icon: "💵",
        name: "Dollar Index",
        prefix: "",
        reference: 104.25,
        drift: (-0.5, 0.5),
        change: (-0.3, 0.2),
        thousands: false,
    },
    QuoteBand {
        icon: "🪙",
        name: "Gold",
        prefix: "$",
        reference: 2_650.0,
        drift: (-20.0, 30.0),
        change: (-15.0, 20.0),
        thousands: false,
    },
    QuoteBand {
        icon: "⚪",
        name: "Silver",
        prefix: "$",
        reference: 30.85,
        drift: (-0.5, 0.8),
        change: (-0.4, 0.6),
        thousands: false,
    },
];

pub const USA_INDICATORS: [Indicator; 9] = [
    Indicator {
        icon: "💵",
        name: "Interest Rate",
        value: "4.25-4.50%",
        detail: "Fed Funds Rate",
        updated: "Updated: Jan 29, 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "🏛️",
        name: "FOMC",
        value: "Hold",
        detail: "Next: Mar 18-19, 2026",
        updated: "Last: Jan 29, 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "📊",
        name: "CPI",
        value: "314.2",
        detail: "+0.3% MoM | +2.4% YoY",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "📈",
        name: "Core CPI",
        value: "2.2%",
        detail: "+2.2% YoY",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "📉",
        name: "Inflation",
        value: "2.4%",
        detail: "YoY +0.1%",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "🏭",
        name: "PPI",
        value: "1.8%",
        detail: "+1.8% YoY",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "💹",
        name: "GDP Growth",
        value: "2.8%",
        detail: "Q4 2025",
        updated: "Updated: Jan 30, 2026",
        status: Status::Positive,
    },
    Indicator {
        icon: "👔",
        name: "Unemployment",
        value: "3.7%",
        detail: "Unemployment Rate",
        updated: "Updated: Jan 2026",
        status: Status::Positive,
    },
    Indicator {
        icon: "👥",
        name: "NFP",
        value: "+256K",
        detail: "Non-Farm Payrolls",
        updated: "Updated: Jan 2026",
        status: Status::Positive,
    },
];

pub const INDIA_INDICATORS: [Indicator; 7] = [
    Indicator {
        icon: "💰",
        name: "Repo Rate",
        value: "6.50%",
        detail: "RBI Policy Rate",
        updated: "Updated: Dec 06, 2025",
        status: Status::Neutral,
    },
    Indicator {
        icon: "📊",
        name: "CPI",
        value: "5.2%",
        detail: "+5.2% YoY",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "📈",
        name: "WPI",
        value: "2.4%",
        detail: "+2.4% YoY",
        updated: "Updated: Jan 2026",
        status: Status::Neutral,
    },
    Indicator {
        icon: "🏭",
        name: "IIP",
        value: "4.2%",
        detail: "+4.2% YoY",
        updated: "Updated: Dec 2025",
        status: Status::Positive,
    },
    Indicator {
        icon: "📉",
        name: "PMI",
        value: "56.8",
        detail: "Manufacturing PMI",
        updated: "Updated: Jan 2026",
        status: Status::Positive,
    },
    Indicator {
        icon: "💹",
        name: "GDP Growth",
        value: "7.2%",
        detail: "Q3 FY25",
        updated: "Updated: Nov 30, 2025",
        status: Status::Positive,
    },
    Indicator {
        icon: "🏛️",
        name: "Fiscal Deficit",
        value: "5.8%",
        detail: "5.8% of GDP",
        updated: "Updated: FY 2025-26",
        status: Status::Neutral,
    },
];

/// Build a snapshot, drawing quote noise from `rng`.
pub fn snapshot<R: Rng + ?Sized>(rng: &mut R) -> MarketSnapshot {
    MarketSnapshot {
        quotes: QUOTES.iter().map(|band| quote(band, rng)).collect(),
        usa: USA_INDICATORS.to_vec(),
        india: INDIA_INDICATORS.to_vec(),
    }
}

fn quote<R: Rng + ?Sized>(band: &QuoteBand, rng: &mut R) -> Quote {
    let value = band.reference + rng.random_range(band.drift.0..band.drift.1);
    let change = rng.random_range(band.change.0..band.change.1);
    let pchange = change / value * 100.0;

    let shown = if band.thousands {
        format_thousands(value)
    } else {
        format!("{value:.2}")
    };

    Quote {
        icon: band.icon,
        name: band.name,
        value: format!("{}{shown}", band.prefix),
        change: format!("{change:+.2}"),
        pchange: format!("{pchange:+.2}"),
        status: if change >= 0.0 {
            Status::Positive
        } else {
            Status::Negative
        },
    }
}

/// Two decimals with comma thousands separators: `43512.5` → `"43,512.50"`.
#[must_use]
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
