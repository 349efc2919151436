//! Terminal output utilities.
//!
//! Box drawing rendered into a buffer, so callers pick the stream.

use std::fmt::Write as _;
use std::io::{self, Write};

pub const BOX_WIDTH: usize = 74;

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Builds a fixed-width box line by line.
pub struct BoxWriter {
    buf: String,
}

impl BoxWriter {
    /// Start a box with optional title: ┌─ Title ───────────────────────────┐
    pub fn new(title: &str) -> Self {
        let mut w = BoxWriter { buf: String::new() };
        if title.is_empty() {
            w.push_row('┌', &"─".repeat(BOX_WIDTH - 2), '┐');
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = BOX_WIDTH - 2 - console_width(&title_part);
            w.push_row('┌', &format!("{}{}", title_part, "─".repeat(remaining)), '┐');
        }
        w
    }

    fn push_row(&mut self, left: char, inner: &str, right: char) {
        let _ = writeln!(self.buf, "{left}{inner}{right}");
    }

    /// Content line: │ content                                        │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(console_width(content));
        let _ = writeln!(self.buf, "│ {}{} │", content, " ".repeat(padding));
        self
    }

    /// Centered content line: │          content          │
    pub fn center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(console_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        let _ = writeln!(
            self.buf,
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
        self
    }

    /// Horizontal rule: ├──────┤
    pub fn rule(&mut self) -> &mut Self {
        self.push_row('├', &"─".repeat(BOX_WIDTH - 2), '┤');
        self
    }

    /// Flag and description columns, wrapping the description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 27;
        let desc_col = inner_width - flag_col;

        let flag_padded = format!("{:<width$}", flag, width = flag_col);

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let mut rows = lines.iter();
        let first = rows.next().map(String::as_str).unwrap_or("");
        self.line(&format!("{flag_padded}{first}"));
        let indent = " ".repeat(flag_col);
        for row in rows {
            self.line(&format!("{indent}{row}"));
        }
        self
    }

    /// Close the box: └──────┘
    pub fn finish(mut self) -> String {
        self.push_row('└', &"─".repeat(BOX_WIDTH - 2), '┘');
        self.buf
    }
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
