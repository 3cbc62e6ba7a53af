use std::path::PathBuf;

use calcscript::command::{Command, Settings};
use pretty_assertions::assert_eq;

#[test]
fn command_words_ignore_case_and_whitespace() {
    let cases = [("help", Command::Help),
                 ("HELP", Command::Help),
                 ("  quit", Command::Quit),
                 ("Exit\t", Command::Quit),
                 ("clear", Command::Clear),
                 ("Vars", Command::Vars),
                 ("FUNCS", Command::Funcs),
                 ("version", Command::Version),
                 ("Indent", Command::Indent),
                 ("LINES", Command::Lines)];

    for (input, expected) in cases {
        assert_eq!(Command::parse(input), Some(expected), "input {input:?}");
    }
}

#[test]
fn load_takes_the_rest_of_the_line_as_a_path() {
    assert_eq!(Command::parse("load scripts/Demo Run.calc  "),
               Some(Command::Load(Some(PathBuf::from("scripts/Demo Run.calc")))));
    assert_eq!(Command::parse("LOAD   x.calc"),
               Some(Command::Load(Some(PathBuf::from("x.calc")))));
    assert_eq!(Command::parse("load"), Some(Command::Load(None)));
    assert_eq!(Command::parse("  Load  "), Some(Command::Load(None)));
}

#[test]
fn statements_are_not_commands() {
    for input in ["help(1)", "vars = 2", "clear + 1", "version2", "loader = 1", "load(1)", "load = 4",
                  "1 + 1", "print lines"]
    {
        assert_eq!(Command::parse(input), None, "input {input:?}");
    }
}

#[test]
fn toggles_flip_their_switch_each_time() {
    let mut settings = Settings::default();
    assert!(settings.indent);
    assert!(!settings.line_numbers);

    assert_eq!(settings.toggle(&Command::Indent).as_deref(), Some("Indentation disabled"));
    assert_eq!(settings.toggle(&Command::Indent).as_deref(), Some("Indentation enabled"));
    assert_eq!(settings.toggle(&Command::Lines).as_deref(), Some("Line numbers enabled"));
    assert_eq!(settings.toggle(&Command::Lines).as_deref(), Some("Line numbers disabled"));

    for command in [Command::Help, Command::Quit, Command::Load(None)] {
        assert_eq!(settings.toggle(&command), None);
    }
    assert_eq!(settings, Settings::default());
}
