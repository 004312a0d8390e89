use std::io::{self, BufRead, Write};

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use base::prelude::*;
use calc::{CalcError, Calculator, Phase};

/// A binary (base-2) desk calculator.
///
/// Without --eval, runs a read-eval-print loop on stdin.  Calculator
/// keys are typed as the characters 0 1 + - * / =; everything the
/// two-operand calculator cannot reach (bitwise operations, shifts,
/// power, square root) is available as a named command.  Type `help`
/// at the prompt for the full list.
#[derive(Debug, Parser)]
#[command(name = "bincalc", version)]
struct Args {
    /// Evaluate one expression (e.g. "101+11") and exit.
    #[arg(long)]
    eval: Option<String>,

    /// Most entries the `history` command will print.
    #[arg(long, default_value_t = 10)]
    history_limit: usize,
}

fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn show_result(out: &mut StandardStream, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "{text}")?;
    out.reset()
}

fn show_error(out: &mut StandardStream, message: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(out, "error: {message}")?;
    out.reset()
}

/// Presses one calculator key.
fn feed_token(calc: &mut Calculator, token: char) -> Result<(), CalcError> {
    match token {
        '+' | '-' | '*' | '/' => calc.input_operator(token),
        '=' => calc.calculate(),
        // Anything else goes in as a digit; the controller is the
        // one which decides what a valid digit is.
        other => calc.input_digit(other),
    }
}

fn show_state(out: &mut StandardStream, calc: &Calculator) -> io::Result<()> {
    let state = calc.state();
    if let (Some(previous), Some(op)) = (&state.previous_value, state.operator) {
        writeln!(out, "pending: {previous} {op}")?;
    }
    if let Some(message) = &state.error_message {
        show_error(out, message)?;
        return Ok(());
    }
    writeln!(out, "{} ({})", state.current_input, state.decimal_value)
}

fn show_history(out: &mut StandardStream, calc: &Calculator, limit: usize) -> io::Result<()> {
    let entries = calc.history(limit);
    if entries.is_empty() {
        writeln!(out, "no calculations recorded")?;
    }
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

const HELP: &str = "\
calculator keys: 0 1 + - * / =   (typed together or one per line)
backspace        delete the last digit
clear            start over, keeping the history
reset            start over, dropping the history
state            show the calculator state
history [N]      show the last N completed calculations
and|or|xor A B   bitwise operations on two binary numbers
not A            bitwise complement of a binary number
shl|shr A K      shift a binary number by K bit positions
pow A K          raise a binary number to the K-th power
sqrt A           integer square root of a binary number
quit             leave the calculator";

/// Runs one named operation against the arithmetic library, outside
/// the calculator state machine.
fn run_command(words: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let wrong_shape = |usage: &str| -> Box<dyn std::error::Error> {
        Box::<dyn std::error::Error>::from(format!("usage: {usage}"))
    };
    match words {
        ["and", a, b] => Ok(bitwise_and(a, b)?),
        ["or", a, b] => Ok(bitwise_or(a, b)?),
        ["xor", a, b] => Ok(bitwise_xor(a, b)?),
        ["not", a] => Ok(bitwise_not(a)?),
        ["shl", a, k] => Ok(shift_left(a, k.parse()?)?),
        ["shr", a, k] => Ok(shift_right(a, k.parse()?)?),
        ["pow", a, k] => Ok(power(a, k.parse()?)?),
        ["sqrt", a] => Ok(square_root(a)?),
        ["and" | "or" | "xor" | "shl" | "shr" | "pow", ..] => {
            Err(wrong_shape("OPERATION FIRST-OPERAND SECOND-OPERAND"))
        }
        ["not" | "sqrt", ..] => Err(wrong_shape("OPERATION OPERAND")),
        _ => Err(Box::<dyn std::error::Error>::from(format!(
            "unknown command '{}'; type help for the list",
            words.first().unwrap_or(&"")
        ))),
    }
}

/// Handles one line of REPL input.  Returns false when the session
/// should end.
fn dispatch(
    calc: &mut Calculator,
    line: &str,
    history_limit: usize,
    out: &mut StandardStream,
) -> io::Result<bool> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => (),
        ["quit"] | ["exit"] => {
            return Ok(false);
        }
        ["help"] => {
            writeln!(out, "{HELP}")?;
        }
        ["state"] => {
            show_state(out, calc)?;
        }
        ["history"] => {
            show_history(out, calc, history_limit)?;
        }
        ["history", n] => match n.parse::<usize>() {
            Ok(n) => show_history(out, calc, n)?,
            Err(_) => show_error(out, &format!("'{n}' is not a history length"))?,
        },
        ["backspace"] => {
            calc.backspace();
            show_state(out, calc)?;
        }
        ["clear"] => {
            calc.clear();
        }
        ["reset"] => {
            calc.reset();
        }
        [word] if word.chars().all(|ch| "01+-*/=".contains(ch)) => {
            // A run of calculator keys, pressed in order.  Errors
            // show up immediately but do not end the session; the
            // state machine handles its own recovery.
            for token in word.chars() {
                if let Err(e) = feed_token(calc, token) {
                    event!(Level::DEBUG, "calculator rejected {token:?}: {e}");
                    show_error(out, &e.to_string())?;
                    return Ok(true);
                }
            }
            if calc.state().phase == Phase::Result {
                show_result(out, &calc.state().current_input)?;
            } else {
                show_state(out, calc)?;
            }
        }
        words => match run_command(words) {
            Ok(result) => show_result(out, &result)?,
            Err(e) => show_error(out, &e.to_string())?,
        },
    }
    Ok(true)
}

fn repl(calc: &mut Calculator, history_limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = StandardStream::stdout(get_colour_choice());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("calc> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if !dispatch(calc, line?.trim(), history_limit, &mut out)? {
            break;
        }
    }
    Ok(())
}

/// Evaluates one expression non-interactively, printing just the
/// result on success.
fn eval_expression(
    calc: &mut Calculator,
    expression: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for token in expression.chars() {
        if token.is_whitespace() {
            continue;
        }
        feed_token(calc, token)?;
    }
    calc.calculate()?;
    println!("{}", calc.state().current_input);
    Ok(())
}

fn run_calculator() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Trace messages are selected through the usual RUST_LOG
    // environment variable; everything at `info` and above is shown
    // when it is unset.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let mut calc = Calculator::new();
    match args.eval {
        Some(expression) => eval_expression(&mut calc, &expression),
        None => repl(&mut calc, args.history_limit),
    }
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
