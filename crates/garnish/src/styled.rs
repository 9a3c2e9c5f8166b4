//! High-level styled output.
//!
//! [`Styled`] bundles an output sink, a markup formatter, and an optional
//! terminal for prompts behind one opinionated surface: titles, sections,
//! listings, admonition blocks, tables, and questions, all sharing one
//! line width and consistent vertical spacing.
//!
//! Vertical spacing is automatic: block-level helpers make sure a blank
//! line separates them from whatever was written before, tracked through
//! a small window of recently written characters.

use garnish_markup::{escape, MarkupError, MarkupFormatter, StyleRegistry};

use crate::error::QuestionError;
use crate::error::TableError;
use crate::output::Output;
use crate::question::{ChoiceQuestion, ConfirmationQuestion, Question, RealTerminal, TerminalIo};
use crate::table::{Table, TableRow};
use crate::text::word_wrap;

/// Lines never run wider than this, however wide the terminal is.
const MAX_LINE_WIDTH: usize = 120;

/// The styled output facade.
pub struct Styled<O: Output> {
    output: O,
    formatter: MarkupFormatter,
    terminal: Box<dyn TerminalIo>,
    window: String,
    line_width: usize,
}

impl<O: Output> Styled<O> {
    pub fn new(output: O) -> Self {
        let line_width = output
            .width()
            .map(|w| w.min(MAX_LINE_WIDTH))
            .unwrap_or(MAX_LINE_WIDTH);
        let formatter = MarkupFormatter::new(output.is_decorated(), StyleRegistry::new());
        Styled {
            output,
            formatter,
            terminal: Box::new(RealTerminal),
            window: String::new(),
            line_width,
        }
    }

    /// Swap the prompt terminal (tests use a mock).
    pub fn with_terminal(mut self, terminal: impl TerminalIo + 'static) -> Self {
        self.terminal = Box::new(terminal);
        self
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Format markup and write it, no trailing newline.
    pub fn write(&mut self, message: &str) -> Result<(), MarkupError> {
        let formatted = self.formatter.format(message)?;
        self.put(&formatted);
        Ok(())
    }

    /// Format markup and write it as a line.
    pub fn write_line(&mut self, message: &str) -> Result<(), MarkupError> {
        self.write(message)?;
        self.put("\n");
        Ok(())
    }

    pub fn new_line(&mut self, count: usize) {
        for _ in 0..count {
            self.put("\n");
        }
    }

    /// A top-level title: the text in comment style, underlined with `=`.
    pub fn title(&mut self, message: &str) -> Result<(), MarkupError> {
        self.auto_prepend_block();
        let width = self.formatter.length_without_decoration(message)?;
        self.write_line(&format!("<comment>{}</>", message))?;
        self.write_line(&format!("<comment>{}</>", "=".repeat(width)))?;
        self.new_line(1);
        Ok(())
    }

    /// A section heading: the text in comment style, underlined with `-`.
    pub fn section(&mut self, message: &str) -> Result<(), MarkupError> {
        self.auto_prepend_block();
        let width = self.formatter.length_without_decoration(message)?;
        self.write_line(&format!("<comment>{}</>", message))?;
        self.write_line(&format!("<comment>{}</>", "-".repeat(width)))?;
        self.new_line(1);
        Ok(())
    }

    /// A bulleted list.
    pub fn listing(&mut self, items: &[&str]) -> Result<(), MarkupError> {
        self.auto_prepend_block();
        for item in items {
            self.write_line(&format!(" * {}", item))?;
        }
        self.new_line(1);
        Ok(())
    }

    /// A plain paragraph line, indented one space.
    pub fn text(&mut self, message: &str) -> Result<(), MarkupError> {
        self.auto_prepend_text();
        self.write_line(&format!(" {}", message))
    }

    pub fn success(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("OK"), Some("fg=black;bg=green"), " ", true, true)
    }

    pub fn error(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("ERROR"), Some("fg=white;bg=red"), " ", true, true)
    }

    pub fn warning(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("WARNING"), Some("fg=black;bg=yellow"), " ", true, true)
    }

    pub fn note(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("NOTE"), Some("fg=yellow"), " ! ", false, true)
    }

    pub fn caution(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("CAUTION"), Some("fg=white;bg=red"), " ! ", true, true)
    }

    pub fn info(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, Some("INFO"), Some("fg=green"), " ", true, true)
    }

    /// An unstyled aside, prefixed with ` // `.
    pub fn comment(&mut self, messages: &[&str]) -> Result<(), MarkupError> {
        self.block(messages, None, None, " // ", false, false)
    }

    /// The general block renderer behind the admonition helpers.
    ///
    /// Messages are word-wrapped to the line width (minus prefix and
    /// label), separated by blank lines, labelled `[TYPE] ` on the first
    /// content line, padded to the full line width, and wrapped in
    /// `<style>` when one is given. `padding` adds blank styled lines
    /// above and below on decorated sinks.
    pub fn block(
        &mut self,
        messages: &[&str],
        label: Option<&str>,
        style: Option<&str>,
        prefix: &str,
        padding: bool,
        escape_input: bool,
    ) -> Result<(), MarkupError> {
        self.auto_prepend_block();
        let lines = self.build_block(messages, label, style, prefix, padding, escape_input)?;
        for line in &lines {
            self.write_line(line)?;
        }
        self.new_line(1);
        Ok(())
    }

    fn build_block(
        &mut self,
        messages: &[&str],
        label: Option<&str>,
        style: Option<&str>,
        prefix: &str,
        padding: bool,
        escape_input: bool,
    ) -> Result<Vec<String>, MarkupError> {
        let prefix_width = self.formatter.length_without_decoration(prefix)?;
        let label_text = label.map(|l| format!("[{}] ", l)).unwrap_or_default();
        let label_width = label_text.chars().count();
        let indent = " ".repeat(label_width);
        let wrap_width = self
            .line_width
            .saturating_sub(prefix_width + label_width)
            .max(1);

        let mut lines: Vec<String> = Vec::new();
        for (index, message) in messages.iter().enumerate() {
            let message = if escape_input {
                escape(message)
            } else {
                (*message).to_string()
            };
            lines.extend(word_wrap(&message, wrap_width));
            if messages.len() > 1 && index < messages.len() - 1 {
                lines.push(String::new());
            }
        }

        let mut first_content = 0;
        if padding && self.output.is_decorated() {
            lines.insert(0, String::new());
            lines.push(String::new());
            first_content = 1;
        }

        let mut rendered = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let mut line = if label_text.is_empty() {
                line.clone()
            } else if index == first_content {
                format!("{}{}", label_text, line)
            } else {
                format!("{}{}", indent, line)
            };
            line = format!("{}{}", prefix, line);

            let visible = self.formatter.length_without_decoration(&line)?;
            line.push_str(&" ".repeat(self.line_width.saturating_sub(visible)));

            if let Some(style) = style {
                line = format!("<{}>{}</>", style, line);
            }
            rendered.push(line);
        }
        Ok(rendered)
    }

    /// Render a table from plain header and row text.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<&str>]) -> Result<(), TableError> {
        let mut table = Table::new().set_header_row(headers.iter().copied());
        for row in rows {
            table = table.add_row(TableRow::cells(row.iter().copied()));
        }
        let lines = table.render(&mut self.formatter)?;
        for line in &lines {
            self.put(line);
            self.put("\n");
        }
        self.new_line(1);
        Ok(())
    }

    pub fn ask(&mut self, prompt: &str) -> Result<String, QuestionError> {
        let Styled { output, formatter, terminal, window, .. } = self;
        Question::new(prompt)
            .ask_with(terminal.as_ref(), &mut styled_rejection(output, formatter, window))
    }

    pub fn ask_with_default(
        &mut self,
        prompt: &str,
        default: &str,
    ) -> Result<String, QuestionError> {
        let Styled { output, formatter, terminal, window, .. } = self;
        Question::new(prompt)
            .default_answer(default.to_string())
            .ask_with(terminal.as_ref(), &mut styled_rejection(output, formatter, window))
    }

    pub fn ask_hidden(&mut self, prompt: &str) -> Result<String, QuestionError> {
        let Styled { output, formatter, terminal, window, .. } = self;
        Question::new(prompt)
            .hidden(true)
            .ask_with(terminal.as_ref(), &mut styled_rejection(output, formatter, window))
    }

    pub fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, QuestionError> {
        let Styled { output, formatter, terminal, window, .. } = self;
        ConfirmationQuestion::new(prompt, default)
            .ask_with(terminal.as_ref(), &mut styled_rejection(output, formatter, window))
    }

    pub fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<String, QuestionError> {
        let Styled { output, formatter, terminal, window, .. } = self;
        ChoiceQuestion::new(prompt, choices.iter().copied())
            .ask_with(terminal.as_ref(), &mut styled_rejection(output, formatter, window))
    }

    fn put(&mut self, text: &str) {
        self.output.write(text);
        track_window(&mut self.window, text);
    }

    /// Make sure a block starts after a blank line.
    fn auto_prepend_block(&mut self) {
        if self.window.is_empty() {
            self.put("\n");
            return;
        }
        let newlines = self
            .window
            .chars()
            .rev()
            .take(2)
            .filter(|c| *c == '\n')
            .count();
        for _ in newlines..2 {
            self.put("\n");
        }
    }

    /// Make sure text starts on its own line.
    fn auto_prepend_text(&mut self) {
        if !self.window.ends_with('\n') {
            self.put("\n");
        }
    }
}

/// Track the last few visible characters written, for the blank-line
/// prepend logic.
fn track_window(window: &mut String, text: &str) {
    let plain = console::strip_ansi_codes(text);
    window.push_str(&plain);
    if window.chars().count() > 4 {
        let tail: Vec<char> = window.chars().rev().take(4).collect();
        *window = tail.into_iter().rev().collect();
    }
}

/// A rejection reporter that renders validation failures as `<error>`
/// lines on the output sink instead of the raw prompt stream.
fn styled_rejection<'a, O: Output>(
    output: &'a mut O,
    formatter: &'a mut MarkupFormatter,
    window: &'a mut String,
) -> impl FnMut(&str) -> Result<(), QuestionError> + 'a {
    move |message| {
        let line = formatter
            .format(&format!("<error>{}</>", escape(message)))
            .unwrap_or_else(|_| message.to_string());
        output.write(&line);
        output.write("\n");
        track_window(window, &line);
        track_window(window, "\n");
        Ok(())
    }
}
