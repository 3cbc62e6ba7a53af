use std::path::PathBuf;

/// A session command typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
    /// `clear`: forget every variable and function.
    Clear,
    /// `vars`
    Vars,
    /// `funcs`
    Funcs,
    /// `version`
    Version,
    /// `indent`: toggle echoing multi-line input re-indented.
    Indent,
    /// `lines`: toggle line numbers in continuation prompts.
    Lines,
    /// `load <file>`. `None` when no file was given.
    Load(Option<PathBuf>),
}

impl Command {
    /// Recognizes a session command.
    ///
    /// Command words are matched without regard to case or surrounding
    /// whitespace. The file name after `load` keeps its spelling.
    ///
    /// # Returns
    /// `None` if the input is not a command and should be evaluated.
    ///
    /// # Example
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use calcscript::command::Command;
    ///
    /// assert_eq!(Command::parse("  QUIT "), Some(Command::Quit));
    /// assert_eq!(Command::parse("Load Demo.calc"),
    ///            Some(Command::Load(Some(PathBuf::from("Demo.calc")))));
    /// assert_eq!(Command::parse("vars = 3"), None);
    /// assert_eq!(Command::parse("load = 3"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (word, rest) = input.split_once(char::is_whitespace)
                                .map_or((input, ""), |(word, rest)| (word, rest.trim()));

        // `load = 1` assigns a variable.
        if word.eq_ignore_ascii_case("load") && !rest.starts_with('=') {
            return Some(Self::Load((!rest.is_empty()).then(|| PathBuf::from(rest))));
        }
        if !rest.is_empty() {
            return None;
        }

        match word.to_ascii_lowercase().as_str() {
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            "clear" => Some(Self::Clear),
            "vars" => Some(Self::Vars),
            "funcs" => Some(Self::Funcs),
            "version" => Some(Self::Version),
            "indent" => Some(Self::Indent),
            "lines" => Some(Self::Lines),
            _ => None,
        }
    }
}

/// Display switches of an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Echo statements that span several lines re-indented before their
    /// result.
    pub indent:       bool,
    /// Number the lines of a statement in its continuation prompts.
    pub line_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { indent:       true,
               line_numbers: false, }
    }
}

impl Settings {
    /// Flips the switch a toggle command names.
    ///
    /// # Returns
    /// The message announcing the new state, or `None` if `command` is not
    /// a toggle.
    ///
    /// # Example
    /// ```
    /// use calcscript::command::{Command, Settings};
    ///
    /// let mut settings = Settings::default();
    ///
    /// assert_eq!(settings.toggle(&Command::Indent).as_deref(), Some("Indentation disabled"));
    /// assert_eq!(settings.toggle(&Command::Lines).as_deref(), Some("Line numbers enabled"));
    /// assert_eq!(settings.toggle(&Command::Vars), None);
    /// assert!(!settings.indent && settings.line_numbers);
    /// ```
    pub fn toggle(&mut self, command: &Command) -> Option<String> {
        let (label, switch) = match command {
            Command::Indent => ("Indentation", &mut self.indent),
            Command::Lines => ("Line numbers", &mut self.line_numbers),
            _ => return None,
        };
        *switch = !*switch;
        Some(format!("{label} {}", if *switch { "enabled" } else { "disabled" }))
    }
}
