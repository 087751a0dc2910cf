use super::*;
use crate::*;

/// Character plot of the feasible region with the explored path and both
/// solutions drawn on top.
///
/// - `.` feasible cell
/// - `o` visited by the trajectory
/// - `Q` learned solution
/// - `S` exact solution (drawn last, wins overlaps)
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
        }
    }

    /// Upper corner of the plotted window: everything interesting plus a margin.
    fn extent(&self, summary: &Summary<'_>) -> Point {
        let region = summary.problem().region();
        let mut points = summary
            .trajectory()
            .iter()
            .copied()
            .chain(summary.learned().map(|l| l.point()))
            .chain(std::iter::once(summary.exact().point()))
            .collect::<Vec<_>>();
        if let Some(y) = region.ceiling(0.0).filter(|y| y.is_finite()) {
            points.push(Point::new(0.0, y));
        }
        let x = points.iter().map(Point::x).fold(1.0, Coordinate::max);
        let y = points.iter().map(Point::y).fold(1.0, Coordinate::max);
        Point::new(x * 1.1, y * 1.1)
    }

    fn cell(&self, point: &Point, extent: &Point) -> Option<(usize, usize)> {
        let col = point.x() / extent.x() * (self.width - 1) as Coordinate;
        let row = point.y() / extent.y() * (self.height - 1) as Coordinate;
        let inside = (0.0..=(self.width - 1) as Coordinate).contains(&col.round())
            && (0.0..=(self.height - 1) as Coordinate).contains(&row.round());
        inside.then(|| (col.round() as usize, row.round() as usize))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(64, 24)
    }
}

impl Reporter for Canvas {
    fn render(&self, summary: &Summary<'_>) -> anyhow::Result<String> {
        let extent = self.extent(summary);
        let problem = summary.problem();
        let mut grid = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        let x = col as Coordinate / (self.width - 1) as Coordinate * extent.x();
                        let y = row as Coordinate / (self.height - 1) as Coordinate * extent.y();
                        match problem.feasible(&Point::new(x, y)) {
                            true => '.',
                            false => ' ',
                        }
                    })
                    .collect::<Vec<char>>()
            })
            .collect::<Vec<_>>();
        let mut mark = |point: &Point, glyph: char| {
            if let Some((col, row)) = self.cell(point, &extent) {
                grid[row][col] = glyph;
            }
        };
        summary.trajectory().iter().for_each(|p| mark(p, 'o'));
        if let Some(learned) = summary.learned() {
            mark(&learned.point(), 'Q');
        }
        mark(&summary.exact().point(), 'S');
        let mut lines = Vec::with_capacity(self.height + 3);
        lines.push(format!("y ≤ {:.2}", extent.y()));
        for row in grid.iter().rev() {
            lines.push(format!("│{}", row.iter().collect::<String>()));
        }
        lines.push(format!("└{}", "─".repeat(self.width)));
        lines.push(format!(
            "{:>width$}",
            format!("x ≤ {:.2}", extent.x()),
            width = self.width + 1
        ));
        Ok(lines.join("\n"))
    }
}
