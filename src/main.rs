use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use calcscript::{
    Config, Interpreter,
    command::{Command, Settings},
    config::DEFAULT_MAX_CALL_DEPTH,
    continuation::LineBuffer,
    script::run_script,
};
use clap::Parser;

/// calcscript is a small calculator language with variables, loops and
/// user-defined functions.
///
/// With no arguments an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the script at this path instead of starting a session.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Maximum number of nested user function calls.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Maximum number of loop iterations and function calls per execution.
    #[arg(long)]
    max_steps: Option<u64>,

    /// An expression to evaluate once.
    expression: Option<String>,
}

const HELP: &str = "\
Commands:
  help         show this message
  quit, exit   leave the session
  clear        forget all variables and functions
  vars         list global variables
  funcs        list user-defined functions
  load <file>  run a script file in this session
  version      show the version
  indent       toggle re-indented echo of multi-line statements
  lines        toggle line numbers in continuation prompts

Commands are not case sensitive. Statements spanning several lines are
collected until all brackets close.";

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let config = Config { max_call_depth: args.max_depth,
                          step_limit:     args.max_steps, };
    let mut interpreter = Interpreter::with_config(config);

    if let Some(path) = &args.file {
        return run_file(&mut interpreter, path);
    }
    if let Some(expression) = &args.expression {
        return run_expression(&mut interpreter, expression);
    }

    match repl(&mut interpreter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` when it is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_file(interpreter: &mut Interpreter, path: &Path) -> ExitCode {
    if load_file(interpreter, path) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs a script file, printing its results and any error.
///
/// # Returns
/// `true` if the whole file ran.
fn load_file(interpreter: &mut Interpreter, path: &Path) -> bool {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {e}", path.display());
            return false;
        },
    };

    match run_script(interpreter, &source) {
        Ok(results) => {
            for result in results {
                println!("{result}");
            }
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}

fn run_expression(interpreter: &mut Interpreter, expression: &str) -> ExitCode {
    let result = interpreter.execute(expression);
    if !interpreter.last_error().is_empty() {
        eprintln!("Error: {}", interpreter.last_error());
        return ExitCode::FAILURE;
    }
    if !result.is_empty() {
        println!("{result}");
    }
    ExitCode::SUCCESS
}

fn repl(interpreter: &mut Interpreter) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut buffer = LineBuffer::new();
    let mut settings = Settings::default();

    println!("calcscript {}. Type 'help' for commands.", env!("CARGO_PKG_VERSION"));

    loop {
        let prompt = match (buffer.needs_continuation(), settings.line_numbers) {
            (false, _) => ">>> ".to_string(),
            (true, false) => buffer.continuation_prompt(),
            (true, true) => format!("{:>3} {}", buffer.line_count() + 1, buffer.continuation_prompt()),
        };
        print!("{prompt}");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        if !buffer.needs_continuation() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(command) = Command::parse(&line) {
                if command == Command::Quit {
                    return Ok(());
                }
                run_command(interpreter, &mut settings, &command);
                continue;
            }
        }

        if !buffer.push_line(&line) {
            continue;
        }

        if settings.indent && buffer.line_count() > 1 {
            println!("{}", buffer.indented_code());
        }
        let result = interpreter.execute(&buffer.code());
        buffer.clear();

        if !interpreter.last_error().is_empty() {
            eprintln!("Error: {}", interpreter.last_error());
        } else if !result.is_empty() {
            println!("{result}");
        }
    }
}

fn run_command(interpreter: &mut Interpreter, settings: &mut Settings, command: &Command) {
    match command {
        Command::Help => {
            println!("{HELP}");
            print_builtins();
        },
        Command::Clear => {
            interpreter.clear_context();
            println!("Context cleared.");
        },
        Command::Vars => print_variables(interpreter),
        Command::Funcs => print_functions(interpreter),
        Command::Version => println!("calcscript {}", env!("CARGO_PKG_VERSION")),
        Command::Load(Some(path)) => {
            load_file(interpreter, path);
        },
        Command::Load(None) => println!("Usage: load <file>"),
        Command::Indent | Command::Lines => {
            if let Some(message) = settings.toggle(command) {
                println!("{message}");
            }
        },
        Command::Quit => {},
    }
}

fn print_builtins() {
    println!("\nBuiltin functions:\n  {}", Interpreter::builtin_functions().join(", "));
}

fn print_variables(interpreter: &Interpreter) {
    let variables = interpreter.context().global_variables();
    if variables.is_empty() {
        println!("No variables defined.");
        return;
    }
    for (name, value) in variables {
        println!("  {name} = {value}");
    }
}

fn print_functions(interpreter: &Interpreter) {
    let functions = interpreter.context().functions();
    if functions.is_empty() {
        println!("No functions defined.");
        return;
    }
    for function in functions {
        println!("  {}({})", function.name, function.params.join(", "));
    }
}
