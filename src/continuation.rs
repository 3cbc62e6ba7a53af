/// Accumulates interactive input until brackets balance.
///
/// Each line pushed updates the nesting depth of `{}`, `()` and `[]`. The
/// buffered text is complete once no bracket is left open. Brackets inside
/// string literals and anything after a `#` comment marker are ignored.
/// Strings do not span lines.
///
/// # Example
/// ```
/// use calcscript::continuation::LineBuffer;
///
/// let mut buffer = LineBuffer::new();
///
/// assert!(!buffer.push_line("while (i < 3) {"));
/// assert_eq!(buffer.continuation_prompt(), "...     ");
/// assert!(!buffer.push_line("i++  # a comment with a }"));
/// assert!(buffer.push_line("}"));
///
/// assert_eq!(buffer.code(), "while (i < 3) {\ni++  # a comment with a }\n}");
/// ```
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    lines:         Vec<String>,
    brace_depth:   isize,
    paren_depth:   isize,
    bracket_depth: isize,
}

impl LineBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line and updates the bracket depths.
    ///
    /// # Returns
    /// `true` if the buffered text is now complete.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.update_depths(line);
        self.lines.push(line.to_string());
        self.is_complete()
    }

    /// Returns `true` if lines have been buffered but brackets are still
    /// open.
    #[must_use]
    pub fn needs_continuation(&self) -> bool {
        !self.lines.is_empty() && !self.is_complete()
    }

    /// The number of lines buffered so far.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The buffered lines joined with newlines.
    #[must_use]
    pub fn code(&self) -> String {
        self.lines.join("\n")
    }

    /// The buffered lines re-indented by four spaces per open brace.
    ///
    /// A line starting with `}` is dedented before it is written; a line
    /// ending with `{` indents the lines after it. Blank lines stay empty.
    ///
    /// # Example
    /// ```
    /// use calcscript::continuation::LineBuffer;
    ///
    /// let mut buffer = LineBuffer::new();
    /// buffer.push_line("function f(x) {");
    /// buffer.push_line("  if (x) {");
    /// buffer.push_line("return 1");
    /// buffer.push_line("}");
    /// buffer.push_line("   }");
    ///
    /// assert_eq!(buffer.indented_code(),
    ///            "function f(x) {\n    if (x) {\n        return 1\n    }\n}");
    /// ```
    #[must_use]
    pub fn indented_code(&self) -> String {
        let mut indent = 0usize;
        let mut lines = Vec::with_capacity(self.lines.len());

        for line in &self.lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                lines.push(String::new());
                continue;
            }
            if trimmed.starts_with('}') {
                indent = indent.saturating_sub(1);
            }
            lines.push(format!("{}{trimmed}", "    ".repeat(indent)));
            if trimmed.ends_with('{') {
                indent += 1;
            }
        }

        lines.join("\n")
    }

    /// The prompt to show while more input is needed: `"... "` followed by
    /// four spaces per open brace.
    #[must_use]
    pub fn continuation_prompt(&self) -> String {
        let depth = usize::try_from(self.brace_depth).unwrap_or(0);
        format!("... {}", "    ".repeat(depth))
    }

    /// Discards all buffered lines and resets the depths.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_complete(&self) -> bool {
        !self.lines.is_empty()
        && self.brace_depth <= 0
        && self.paren_depth <= 0
        && self.bracket_depth <= 0
    }

    fn update_depths(&mut self, line: &str) {
        let mut quote = None;
        let mut escaped = false;

        for c in line.chars() {
            if let Some(open) = quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == open {
                    quote = None;
                }
                continue;
            }

            match c {
                '"' | '\'' => quote = Some(c),
                '#' => break,
                '{' => self.brace_depth += 1,
                '}' => self.brace_depth -= 1,
                '(' => self.paren_depth += 1,
                ')' => self.paren_depth -= 1,
                '[' => self.bracket_depth += 1,
                ']' => self.bracket_depth -= 1,
                _ => {},
            }
        }
    }
}
