//! Report
//!
//! Human readable breakdown of a [`Plan`]: what to buy, on which day, and what it costs.

use std::{fmt, io};

use rusty_money::iso::Currency;
use smallvec::SmallVec;

use crate::{
    catalog::Catalog,
    plan::{Plan, Purchase},
    pricing::format_money,
};

mod table;

/// Heading printed above every report.
pub const TITLE: &str = "Event purchase cost simulator (optimised)";

/// Line shown for a day on which nothing is bought.
pub const NO_PURCHASE: &str = "No limited pack purchase this day";

/// A mandatory purchase as shown in the report. Purchases granting no items are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryLine {
    /// Display name
    pub name: String,

    /// Items granted
    pub items: u64,

    /// Cost in minor units
    pub cost: u64,
}

/// A single day's purchases as shown in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySection {
    /// Day number, starting at 1
    pub day: usize,

    /// Items bought on the day
    pub items: u64,

    /// Amount spent on the day, in minor units
    pub cost: u64,

    /// One line per purchase; a single "no purchase" line when nothing is bought
    pub lines: SmallVec<[String; 6]>,
}

/// Structured breakdown of a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    target: u64,
    total_cost: u64,
    base_items: u64,
    mandatory: Vec<MandatoryLine>,
    days: Option<Vec<DaySection>>,
    total_items: u64,
    excess_items: u64,
    currency: &'static Currency,
}

impl Report {
    /// Builds the breakdown of `plan`, listing every day of the catalog's window.
    pub fn new(catalog: &Catalog, plan: &Plan) -> Self {
        let currency = catalog.currency();

        let mandatory = catalog
            .mandatory()
            .iter()
            .filter(|item| item.items > 0)
            .map(|item| MandatoryLine {
                name: item.name.clone(),
                items: item.items,
                cost: item.cost,
            })
            .collect();

        let days = (!plan.is_mandatory_only()).then(|| {
            (1..=catalog.days())
                .map(|day| {
                    let Some(day_plan) = plan.days().iter().find(|day_plan| day_plan.day == day)
                    else {
                        return DaySection::empty(day);
                    };

                    let mut lines: SmallVec<[String; 6]> = day_plan
                        .purchases
                        .iter()
                        .map(|purchase| purchase_line(purchase, currency))
                        .collect();

                    if lines.is_empty() {
                        lines.push(NO_PURCHASE.to_string());
                    }

                    DaySection {
                        day,
                        items: day_plan.items(),
                        cost: day_plan.cost(),
                        lines,
                    }
                })
                .collect()
        });

        Self {
            target: plan.target().items(),
            total_cost: plan.total_cost(),
            base_items: plan.base_items(),
            mandatory,
            days,
            total_items: plan.total_items(),
            excess_items: plan.excess_items(),
            currency,
        }
    }

    /// Target the plan reaches.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Total amount spent, in minor units.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Mandatory purchases in display order.
    pub fn mandatory(&self) -> &[MandatoryLine] {
        &self.mandatory
    }

    /// Per-day breakdown; `None` when the mandatory purchases already reach the target.
    pub fn days(&self) -> Option<&[DaySection]> {
        self.days.as_deref()
    }

    /// Total items purchased.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Items left over beyond the target.
    pub fn excess_items(&self) -> u64 {
        self.excess_items
    }

    /// Renders the per-day breakdown as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_table(&self, out: impl io::Write) -> io::Result<()> {
        table::write_table(out, self)
    }

    fn money(&self, minor_units: u64) -> String {
        format_money(minor_units, self.currency)
    }
}

impl DaySection {
    fn empty(day: usize) -> Self {
        let mut lines = SmallVec::new();
        lines.push(NO_PURCHASE.to_string());

        Self {
            day,
            items: 0,
            cost: 0,
            lines,
        }
    }
}

/// Describes one purchase; top-ups spell out the pack count and totals.
fn purchase_line(purchase: &Purchase, currency: &'static Currency) -> String {
    match purchase {
        Purchase::Tier(tier) => tier.label.clone(),
        Purchase::TopUp { label, top_up } => format!(
            "{label} x{}: {} items ({})",
            top_up.packs,
            top_up.items,
            format_money(top_up.cost, currency)
        ),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "--- Target: {} items ---", self.target)?;

        if self.days.is_some() {
            writeln!(
                f,
                "Total cost to reach target: {}",
                self.money(self.total_cost)
            )?;
        } else {
            writeln!(
                f,
                "Total cost to reach target: {} (mandatory purchases only)",
                self.money(self.total_cost)
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "[Mandatory purchases ({} items over the event)]",
            self.base_items
        )?;

        for line in &self.mandatory {
            writeln!(
                f,
                "- {}: {} items ({})",
                line.name,
                line.items,
                self.money(line.cost)
            )?;
        }

        for day in self.days.iter().flatten() {
            writeln!(f)?;
            writeln!(
                f,
                "Day {} additional purchases ({} items / {})",
                day.day,
                day.items,
                self.money(day.cost)
            )?;

            for line in &day.lines {
                writeln!(f, "- {line}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "- Total items purchased: {}", self.total_items)?;
        writeln!(f, "- Leftover after target: {}", self.excess_items)
    }
}
