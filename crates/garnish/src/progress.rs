//! Progress bar rendering.
//!
//! A [`ProgressBar`] tracks a step counter against an optional maximum and
//! renders itself from a placeholder template (`%bar%`, `%percent%`,
//! `%elapsed%`, ...). It draws through the [`Output`] trait, overwriting
//! the previous line in place, and stays silent on quiet sinks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use garnish_markup::{MarkupFormatter, StyleRegistry};

use crate::error::ProgressError;
use crate::output::{Output, Verbosity};

const DEFAULT_BAR_WIDTH: usize = 28;

/// A renderable progress bar.
///
/// `max` of zero means the total is unknown; the bar then cycles instead
/// of filling, and the `_nomax` format variants apply.
pub struct ProgressBar {
    step: u64,
    max: u64,
    started_at: Option<Instant>,
    bar_width: usize,
    bar_char: char,
    empty_bar_char: char,
    progress_char: char,
    format: Option<String>,
    messages: HashMap<String, String>,
    redraw_frequency: u64,
    overwrite: bool,
    has_displayed: bool,
    formatter: MarkupFormatter,
}

impl Default for ProgressBar {
    fn default() -> Self {
        ProgressBar {
            step: 0,
            max: 0,
            started_at: None,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_char: '=',
            empty_bar_char: '-',
            progress_char: '>',
            format: None,
            messages: HashMap::new(),
            redraw_frequency: 1,
            overwrite: true,
            has_displayed: false,
            formatter: MarkupFormatter::new(false, StyleRegistry::new()),
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the `%bar%` placeholder in characters.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    pub fn bar_char(mut self, c: char) -> Self {
        self.bar_char = c;
        self
    }

    pub fn empty_bar_char(mut self, c: char) -> Self {
        self.empty_bar_char = c;
        self
    }

    pub fn progress_char(mut self, c: char) -> Self {
        self.progress_char = c;
        self
    }

    /// Use a custom template instead of the verbosity-selected one.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Redraw only every `frequency` steps (clamped to at least 1).
    pub fn redraw_frequency(mut self, frequency: u64) -> Self {
        self.redraw_frequency = frequency.max(1);
        self
    }

    /// Whether redraws rewrite the current line (`true`, the default) or
    /// append a new one.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn current(&self) -> u64 {
        self.step
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Store a value for a custom `%name%` placeholder.
    pub fn set_message(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(name.into(), value.into());
    }

    /// Begin timing and draw the initial state. `None` keeps any
    /// previously configured maximum.
    pub fn start(
        &mut self,
        output: &mut dyn Output,
        max: Option<u64>,
    ) -> Result<(), ProgressError> {
        self.started_at = Some(Instant::now());
        self.step = 0;
        self.has_displayed = false;
        if let Some(max) = max {
            self.max = max;
        }
        self.display(output, true)
    }

    /// Move the bar forward by `delta` steps.
    pub fn advance(&mut self, output: &mut dyn Output, delta: u64) -> Result<(), ProgressError> {
        let step = self.step.saturating_add(delta);
        self.set_progress(output, step as i64)
    }

    /// Jump to an absolute step. Negative values clamp to zero; a step
    /// beyond a known maximum raises the maximum.
    pub fn set_progress(&mut self, output: &mut dyn Output, step: i64) -> Result<(), ProgressError> {
        if self.started_at.is_none() {
            return Err(ProgressError::NotStarted);
        }
        let step = step.max(0) as u64;
        if self.max > 0 && step > self.max {
            self.max = step;
        }

        let previous_period = self.step / self.redraw_frequency;
        let period = step / self.redraw_frequency;
        self.step = step;

        let complete = self.max > 0 && step >= self.max;
        if period != previous_period || complete {
            self.display(output, false)?;
        }
        Ok(())
    }

    /// Force the bar to its maximum and draw the final state.
    pub fn finish(&mut self, output: &mut dyn Output) -> Result<(), ProgressError> {
        if self.started_at.is_none() {
            return Err(ProgressError::NotStarted);
        }
        if self.max == 0 {
            self.max = self.step;
        }
        if self.step == self.max && !self.overwrite {
            // Already drawn at this position; appending again would
            // duplicate the line.
            return Ok(());
        }
        self.step = self.max;
        self.display(output, false)
    }

    fn display(&mut self, output: &mut dyn Output, first: bool) -> Result<(), ProgressError> {
        if output.verbosity().is_quiet() {
            return Ok(());
        }

        self.formatter.set_decorated(output.is_decorated());
        let mut line = self.render_line(output.verbosity())?;

        // When the line spills past the terminal, give the overflow back
        // by narrowing the bar, once.
        if let Some(columns) = output.width() {
            let visible = console::strip_ansi_codes(&line).chars().count();
            if visible > columns {
                let overflow = visible - columns;
                self.bar_width = self.bar_width.saturating_sub(overflow).max(1);
                line = self.render_line(output.verbosity())?;
            }
        }

        if self.has_displayed && !first {
            if self.overwrite {
                output.write("\r\x1b[2K");
            } else {
                output.write("\n");
            }
        }
        output.write(&line);
        self.has_displayed = true;
        Ok(())
    }

    fn render_line(&mut self, verbosity: Verbosity) -> Result<String, ProgressError> {
        let template = match &self.format {
            Some(format) => format.clone(),
            None => default_format(verbosity, self.max == 0).to_string(),
        };
        let expanded = self.expand_placeholders(&template)?;
        Ok(self.formatter.format(&expanded)?)
    }

    fn expand_placeholders(&self, template: &str) -> Result<String, ProgressError> {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            result.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('%') else {
                result.push_str(&rest[start..]);
                return Ok(result);
            };
            let token = &after[..end];

            if token.is_empty() {
                result.push('%');
            } else if let Some((name, align)) = parse_token(token) {
                match self.placeholder_value(name)? {
                    Some(value) => result.push_str(&aligned(&value, align)),
                    None => {
                        // Unknown placeholder stays verbatim.
                        result.push_str(&rest[start..start + 2 + token.len()]);
                    }
                }
            } else {
                result.push_str(&rest[start..start + 2 + token.len()]);
            }
            rest = &after[end + 1..];
        }
        result.push_str(rest);
        Ok(result)
    }

    fn placeholder_value(&self, name: &str) -> Result<Option<String>, ProgressError> {
        let value = match name {
            "bar" => self.render_bar(),
            // Left-padded to the max's digit width so the bar holds still
            // as the counter grows.
            "current" => {
                if self.max > 0 {
                    let digits = self.max.to_string().len();
                    format!("{:>digits$}", self.step)
                } else {
                    self.step.to_string()
                }
            }
            "max" => self.max.to_string(),
            "percent" => format!("{}%", self.percent()),
            "elapsed" => format_duration(self.elapsed()),
            "remaining" => {
                if self.max == 0 {
                    return Err(ProgressError::UnknownMax("remaining"));
                }
                format_duration(self.estimate_total().saturating_sub(self.elapsed()))
            }
            "estimated" => {
                if self.max == 0 {
                    return Err(ProgressError::UnknownMax("estimated"));
                }
                format_duration(self.estimate_total())
            }
            "memory" => format_memory(current_memory()),
            _ => return Ok(self.messages.get(name).cloned()),
        };
        Ok(Some(value))
    }

    fn render_bar(&self) -> String {
        let width = self.bar_width;
        let filled = if self.max > 0 {
            (self.step.min(self.max) as usize * width) / self.max as usize
        } else {
            self.step as usize % width
        };

        let mut bar = String::with_capacity(width);
        bar.extend(std::iter::repeat(self.bar_char).take(filled));
        if filled < width {
            bar.push(self.progress_char);
            bar.extend(std::iter::repeat(self.empty_bar_char).take(width - filled - 1));
        }
        bar
    }

    fn percent(&self) -> u64 {
        if self.max == 0 {
            0
        } else {
            self.step.min(self.max) * 100 / self.max
        }
    }

    fn elapsed(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }

    fn estimate_total(&self) -> Duration {
        if self.step == 0 {
            return Duration::ZERO;
        }
        let per_step = self.elapsed().as_secs_f64() / self.step as f64;
        Duration::from_secs_f64(per_step * self.max as f64)
    }
}

fn parse_token(token: &str) -> Option<(&str, Option<(bool, usize)>)> {
    let (name, align) = match token.split_once(':') {
        Some((name, spec)) => {
            let (left, digits) = match spec.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, spec),
            };
            let width: usize = digits.parse().ok()?;
            (name, Some((left, width)))
        }
        None => (token, None),
    };
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return None;
    }
    Some((name, align))
}

fn aligned(value: &str, align: Option<(bool, usize)>) -> String {
    match align {
        None => value.to_string(),
        Some((left, width)) => {
            let len = value.chars().count();
            if len >= width {
                value.to_string()
            } else if left {
                format!("{}{}", value, " ".repeat(width - len))
            } else {
                format!("{}{}", " ".repeat(width - len), value)
            }
        }
    }
}

fn default_format(verbosity: Verbosity, nomax: bool) -> &'static str {
    match (verbosity, nomax) {
        (Verbosity::Debug, false) => {
            " %current%/%max% [%bar%] %percent:4% %elapsed:6%/%estimated:-6% %memory:6%"
        }
        (Verbosity::Debug, true) => " %current% [%bar%] %elapsed:6% %memory:6%",
        (Verbosity::VeryVerbose, false) => {
            " %current%/%max% [%bar%] %percent:4% %elapsed:6%/%estimated:-6%"
        }
        (Verbosity::VeryVerbose, true) => " %current% [%bar%] %elapsed:6%",
        (Verbosity::Verbose, false) => " %current%/%max% [%bar%] %percent:4% %elapsed:6%",
        (Verbosity::Verbose, true) => " %current% [%bar%] %elapsed:6%",
        (_, false) => " %current%/%max% [%bar%] %percent:4%",
        (_, true) => " %current% [%bar%]",
    }
}

/// Render a duration as `Ns`, `Nm Ns`, or `Nh Nm`.
fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    if total < 60 {
        format!("{}s", total)
    } else if total < 3600 {
        format!("{}m {}s", total / 60, total % 60)
    } else {
        format!("{}h {}m", total / 3600, (total % 3600) / 60)
    }
}

/// Resident memory of this process in bytes, when the platform exposes it.
#[cfg(target_os = "linux")]
fn current_memory() -> Option<u64> {
    let statm = std::fs::read_to_string("/proc/self/statm").ok()?;
    let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
    Some(resident_pages * 4096)
}

#[cfg(not(target_os = "linux"))]
fn current_memory() -> Option<u64> {
    None
}

fn format_memory(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "-".to_string();
    };
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
    let bytes = bytes as f64;
    if bytes >= GIB {
        format!("{:.1} GiB", bytes / GIB)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes / KIB)
    } else {
        format!("{} B", bytes)
    }
}
