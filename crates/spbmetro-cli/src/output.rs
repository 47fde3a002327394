//! Output formatting for command results.
//!
//! This module provides formatters for rendering route summaries and
//! network listings in the supported output formats (text, basic, json,
//! enhanced).

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use spbmetro_lib::{RouteStep, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with the global `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly view with leg times and transfer annotations.
    #[default]
    Text,
    /// Minimal `+`/`|`/`-` prefixed station list.
    Basic,
    /// Pretty-printed JSON.
    Json,
    /// ANSI tag badges with per-leg details.
    Enhanced,
}

impl OutputFormat {
    /// Whether the format is meant for machine consumption.
    ///
    /// Machine formats suppress the logo banner.
    #[must_use]
    pub fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Render a route summary in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization or writing fails.
    pub fn render_route_result(self, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_text(summary),
            OutputFormat::Basic => render_basic(summary),
            OutputFormat::Json => render_json(summary)?,
            OutputFormat::Enhanced => render_enhanced(summary),
        }
        Ok(())
    }
}

/// Print the CLI logo banner.
///
/// The logo adapts to terminal capabilities:
/// - Uses Unicode box-drawing characters when supported
/// - Falls back to ASCII when Unicode is not detected
/// - Respects `NO_COLOR` and `TERM=dumb` conventions
pub fn print_logo() {
    use crate::terminal::{colors, supports_color, supports_unicode};

    let (orange, cyan, reset) = if supports_color() {
        (colors::ORANGE, colors::CYAN, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        // Neon block-letter banner with cyan border and orange text
        println!(
            "{cyan}╭──────────────────────────────────╮{reset}
{cyan}│{orange} ░█▀▀░█▀█░█▀▄░█▄█░█▀▀░▀█▀░█▀▄░█▀█ {cyan}│{reset}
{cyan}│{orange} ░▀▀█░█▀▀░█▀▄░█░█░█▀▀░░█░░█▀▄░█░█ {cyan}│{reset}
{cyan}│{orange} ░▀▀▀░▀░░░▀▀░░▀░▀░▀▀▀░░▀░░▀░▀░▀▀▀ {cyan}│{reset}
{cyan}├──────────────────────────────────┤{reset}
{cyan}│{orange}       [ R O U T E P L A N ]      {cyan}│{reset}
{cyan}╰──────────────────────────────────╯{reset}",
            cyan = cyan,
            orange = orange,
            reset = reset
        );
    } else {
        // Fallback ASCII banner
        println!(
            "{color}+--------------------------------------------------+
|  SPB METRO                                       |
|  >> ROUTE PLANNER COMMAND LINE INTERFACE         |
+--------------------------------------------------+{reset}",
            color = orange,
            reset = reset
        );
    }
}

/// Render a route summary in text format.
///
/// Human-friendly route view with algorithm annotation.
pub fn render_text(summary: &RouteSummary) {
    println!(
        "Route from {} to {} ({} stops; algorithm: {}):",
        summary.start.name, summary.goal.name, summary.stops, summary.algorithm
    );
    for step in &summary.steps {
        render_text_step(step);
    }
    println!("\nTotal travel time: {} min", summary.total_minutes);
    println!("Line changes: {}", summary.transfers);
}

fn render_text_step(step: &RouteStep) {
    match (step.leg_minutes, step.transfer) {
        (Some(minutes), true) => println!(
            " - {} ({} min, change to line {})",
            step.name, minutes, step.line
        ),
        (Some(minutes), false) => println!(" - {} ({} min)", step.name, minutes),
        (None, _) => println!(" - {} (line {})", step.name, step.line),
    }
}

/// Render a route summary in JSON format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

/// Render a route summary in basic path format.
///
/// Uses `+`/`|`/`-` prefixes for first/middle/last steps.
pub fn render_basic(summary: &RouteSummary) {
    let len = summary.steps.len();
    if len == 0 {
        return;
    }
    for (i, step) in summary.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        println!("{} {}", prefix, step.name);
    }
    println!(
        "via {} stops / {} transfers",
        summary.stops, summary.transfers
    );
}

/// Render a route summary in enhanced format with leg details.
///
/// Enhanced format with inverted tag labels and per-leg annotations.
/// Uses ANSI colors when available.
pub fn render_enhanced(summary: &RouteSummary) {
    let palette = ColorPalette::detect();
    let renderer = EnhancedRenderer::new(palette);
    renderer.render(summary);
}

/// Renderer for enhanced output format with colored tags and leg details.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    /// Create a new enhanced renderer with the given color palette.
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Render a route summary.
    pub fn render(&self, summary: &RouteSummary) {
        let p = &self.palette;

        println!(
            "Route from {}{}{} to {}{}{} ({} stops):",
            p.white_bold,
            summary.start.name,
            p.reset,
            p.white_bold,
            summary.goal.name,
            p.reset,
            summary.stops
        );

        let len = summary.steps.len();
        for (i, step) in summary.steps.iter().enumerate() {
            self.render_step(step, i == 0, i + 1 == len);
        }

        self.render_footer(summary);
    }

    fn render_step(&self, step: &RouteStep, is_first: bool, is_last: bool) {
        let p = &self.palette;
        let (tag_color, tag_text) = self.get_step_tag(step, is_first, is_last);

        let mut parts: Vec<String> = Vec::new();
        if let Some(minutes) = step.leg_minutes {
            parts.push(format!("{} min", minutes));
        }
        if step.transfer {
            parts.push(format!("to line {}", step.line));
        } else if is_first {
            parts.push(format!("line {}", step.line));
        }

        if parts.is_empty() {
            println!(
                "{}{}{} {}{}{}",
                tag_color, tag_text, p.reset, p.white_bold, step.name, p.reset
            );
        } else {
            println!(
                "{}{}{} {}{}{} {}({}){}",
                tag_color,
                tag_text,
                p.reset,
                p.white_bold,
                step.name,
                p.reset,
                p.gray,
                parts.join(", "),
                p.reset
            );
        }
    }

    fn get_step_tag(&self, step: &RouteStep, is_first: bool, is_last: bool) -> (&str, &str) {
        let p = &self.palette;
        if is_first {
            (p.tag_start, " STRT ")
        } else if is_last {
            (p.tag_goal, " GOAL ")
        } else if step.transfer {
            (p.tag_transfer, " TRSF ")
        } else {
            (p.tag_ride, " RIDE ")
        }
    }

    fn render_footer(&self, summary: &RouteSummary) {
        let p = &self.palette;
        let time_str = summary.total_minutes.to_string();
        let stops_str = summary.stops.to_string();
        let transfers_str = summary.transfers.to_string();

        // Find max width for right-alignment
        let max_width = time_str.len().max(stops_str.len()).max(transfers_str.len());

        println!();
        println!(
            "{}───────────────────────────────────────{}",
            p.gray, p.reset
        );
        println!(
            "  {}Travel time:{}  {}{:>width$} min{}",
            p.cyan,
            p.reset,
            p.white_bold,
            time_str,
            p.reset,
            width = max_width
        );
        println!(
            "  {}Stops:{}        {}{:>width$}{}",
            p.green,
            p.reset,
            p.white_bold,
            stops_str,
            p.reset,
            width = max_width
        );
        println!(
            "  {}Transfers:{}    {}{:>width$}{}",
            p.orange,
            p.reset,
            p.white_bold,
            transfers_str,
            p.reset,
            width = max_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(index: usize, line: u32, leg_minutes: Option<u32>, transfer: bool) -> RouteStep {
        RouteStep {
            index,
            id: index,
            name: format!("station {index}"),
            line,
            leg_minutes,
            transfer,
        }
    }

    #[test]
    fn test_enhanced_renderer_creation() {
        let palette = ColorPalette::plain();
        let renderer = EnhancedRenderer::new(palette);
        assert!(renderer.palette.reset.is_empty());
    }

    #[test]
    fn test_step_tag_for_endpoints() {
        let renderer = EnhancedRenderer::new(ColorPalette::plain());
        let first = step(0, 1, None, false);
        let last = step(3, 2, Some(2), true);

        assert_eq!(renderer.get_step_tag(&first, true, false).1, " STRT ");
        assert_eq!(renderer.get_step_tag(&last, false, true).1, " GOAL ");
    }

    #[test]
    fn test_step_tag_for_intermediate_steps() {
        let renderer = EnhancedRenderer::new(ColorPalette::plain());
        let ride = step(1, 1, Some(3), false);
        let transfer = step(2, 2, Some(2), true);

        assert_eq!(renderer.get_step_tag(&ride, false, false).1, " RIDE ");
        assert_eq!(renderer.get_step_tag(&transfer, false, false).1, " TRSF ");
    }

    #[test]
    fn test_json_is_the_only_machine_format() {
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(!OutputFormat::Text.is_machine_readable());
        assert!(!OutputFormat::Basic.is_machine_readable());
        assert!(!OutputFormat::Enhanced.is_machine_readable());
    }
}
