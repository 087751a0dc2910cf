use super::*;
use crate::*;
use colored::Colorize;

/// Box-drawn comparison of the learned and exact solutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Table;

#[rustfmt::skip]
impl Reporter for Table {
    fn render(&self, summary: &Summary<'_>) -> anyhow::Result<String> {
        use std::fmt::Write;
        let mut out = String::new();
        let exact = summary.exact();
        writeln!(out, "{}", summary.problem())?;
        writeln!(out, "┌────────────┬──────────────────────┬────────────┬────────────┐")?;
        writeln!(out, "│ Method     │ Solution             │  Objective │   Estimate │")?;
        writeln!(out, "├────────────┼──────────────────────┼────────────┼────────────┤")?;
        writeln!(
            out,
            "│ {:<10} │ {:<20} │ {:>10} │ {:>10} │",
            "Simplex",
            format!("{}", exact.point()),
            format!("{:.4}", exact.value()).green(),
            "-",
        )?;
        match summary.learned() {
            Some(learned) => writeln!(
                out,
                "│ {:<10} │ {:<20} │ {:>10} │ {:>10} │",
                "Q-learning",
                format!("{}", learned.key()),
                format!("{:.4}", learned.objective()).yellow(),
                format!("{:.4}", learned.estimate()),
            )?,
            None => writeln!(
                out,
                "│ {:<10} │ {:<20} │ {:>10} │ {:>10} │",
                "Q-learning",
                "no accepted move".red(),
                "-",
                "-",
            )?,
        }
        writeln!(out, "└────────────┴──────────────────────┴────────────┴────────────┘")?;
        match (summary.gap(), exact.value().abs()) {
            (Some(gap), scale) if scale >= SIMPLEX_TOLERANCE => writeln!(out, "gap {:.4} ({:.2}% of optimum)", gap, 100.0 * gap / scale)?,
            (Some(gap), _) => writeln!(out, "gap {:.4}", gap)?,
            (None, _) => {}
        }
        write!(out, "{}", summary.stats())?;
        Ok(out)
    }
}
