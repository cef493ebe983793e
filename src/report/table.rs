use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use super::Report;

pub(super) fn write_table(mut out: impl io::Write, report: &Report) -> io::Result<()> {
    let mut builder = Builder::default();
    let mut section_rows: Vec<usize> = Vec::new();

    builder.push_record(["", "Purchase", "Items", "Cost"]);

    // header is row 0
    section_rows.push(1);

    for line in report.mandatory() {
        builder.push_record([
            "Mandatory".to_string(),
            line.name.clone(),
            line.items.to_string(),
            report.money(line.cost),
        ]);
    }

    for (idx, day) in report.days().unwrap_or_default().iter().enumerate() {
        section_rows.push(1 + report.mandatory().len() + idx);

        builder.push_record([
            format!("Day {}", day.day),
            day.lines.join("\n"),
            day.items.to_string(),
            report.money(day.cost),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();

    for &row in &section_rows {
        theme.insert_horizontal_line(row, separator);
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{}", super::TITLE)?;
    writeln!(out)?;
    writeln!(out, "Target: {} items", report.target())?;
    writeln!(out, "{table}")?;
    writeln!(out, "Total cost:      {}", report.money(report.total_cost()))?;
    writeln!(out, "Total items:     {}", report.total_items())?;
    writeln!(out, "Leftover items:  {}", report.excess_items())
}
