//! Estimated earnings-per-second rates for the mogul meter.
//!
//! The figures are rough estimates assembled from public reporting and
//! drift over time; the optional live-rates feed can override them.

/// One public figure tracked by the meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mogul {
    /// Stable identifier (also the live-feed key).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Estimated USD earned per second.
    pub usd_per_second: f64,
    /// Where the estimate comes from.
    pub basis: &'static str,
}

/// All tracked figures in selector order.
pub const MOGULS: [Mogul; 7] = [
    Mogul {
        id: "bezos",
        name: "Jeff Bezos",
        usd_per_second: 985.0,
        basis: "Amazon profits",
    },
    Mogul {
        id: "musk",
        name: "Elon Musk",
        usd_per_second: 631.0,
        basis: "24-hour net worth movement",
    },
    Mogul {
        id: "trump",
        name: "Donald Trump",
        usd_per_second: 12.0,
        basis: "reported $1.6B over four years",
    },
    Mogul {
        id: "page",
        name: "Larry Page",
        usd_per_second: 951.0,
        basis: "$30B net worth gain in a year",
    },
    Mogul {
        id: "arnault",
        name: "Bernard Arnault",
        usd_per_second: 196.0,
        basis: "LVMH performance",
    },
    Mogul {
        id: "zuckerberg",
        name: "Mark Zuckerberg",
        usd_per_second: 469.0,
        basis: "Meta profits",
    },
    Mogul {
        id: "gates",
        name: "Bill Gates",
        usd_per_second: 117.0,
        basis: "estimated daily earnings",
    },
];

/// Look up a mogul by its identifier.
pub fn find_mogul(id: &str) -> Option<&'static Mogul> {
    MOGULS.iter().find(|m| m.id == id)
}
