mod calculator;
mod cli;
mod error;
mod history;
mod logger;
mod runtime;
mod syntax;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;

use calculator::{format_number, Calculator};
use cli::{Cli, Command, OutputFormat};
use error::ErrorKind;
use history::History;
use runtime::Interpreter;

const EXIT_SYNTAX: i32 = 65;
const EXIT_RUNTIME: i32 = 70;

fn main() {
    let cli = Cli::parse();

    if let Err(why) = logger::init(cli.log_file.as_deref()) {
        eprintln!("Cannot open log file: {why}");
        process::exit(1);
    }

    let history = if cli.no_history {
        None
    } else {
        Some(History::new(&cli.history_file))
    };

    match cli.command {
        Command::Eval {
            expression,
            lenient,
            format,
        } => {
            let interpreter = interpreter(lenient);
            let result = match format {
                OutputFormat::Value => eval(Calculator::new(interpreter, history), &expression),
                OutputFormat::Tree => interpreter.parse(&expression).map(|expr| println!("{expr}")),
                OutputFormat::Tokens => syntax::tokenize(&expression)
                    .map(|tokens| tokens.iter().for_each(|token| println!("{token}"))),
            };

            if let Err(why) = result {
                eprintln!("Error: {why}");
                process::exit(exit_code(&why));
            }
        }
        Command::Repl { lenient } => {
            if let Err(why) = run_repl(&Calculator::new(interpreter(lenient), history)) {
                eprintln!("Error reading stdin: {why}");
                process::exit(1);
            }
        }
        Command::History { limit, clear } => {
            let history = History::new(&cli.history_file);
            if clear {
                if let Err(why) = history.clear() {
                    eprintln!("{why}");
                    process::exit(1);
                }
                println!("Cleared {}", history.path().display());
                return;
            }

            let entries = history.load();
            let skip = limit.map_or(0, |n| entries.len().saturating_sub(n));
            for entry in &entries[skip..] {
                println!("{} = {}", entry.expression, entry.result);
            }
        }
    }
}

fn interpreter(lenient: bool) -> Interpreter {
    if lenient {
        Interpreter::lenient()
    } else {
        Interpreter::new()
    }
}

fn eval(calculator: Calculator, expression: &str) -> Result<(), ErrorKind> {
    match calculator.calculate(expression) {
        None => Ok(()),
        Some(result) => result.map(|value| println!("{}", format_number(value))),
    }
}

fn exit_code(why: &ErrorKind) -> i32 {
    if why.is_syntax() {
        EXIT_SYNTAX
    } else {
        EXIT_RUNTIME
    }
}

fn run_repl(calculator: &Calculator) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    if !calculator.interpreter().is_strict() {
        log::debug!("Trailing input after an expression is ignored");
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            return Ok(());
        }

        match input.trim() {
            "exit" | "quit" => return Ok(()),
            line => match calculator.calculate(line) {
                None => (),
                Some(Ok(value)) => println!("{}", format_number(value)),
                Some(Err(why)) => println!("Error: {why}"),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{exit_code, EXIT_RUNTIME, EXIT_SYNTAX};
    use crate::{
        error::{ErrorKind, Expected},
        runtime::Interpreter,
        syntax::TokenKind,
    };

    #[test]
    fn exit_codes() {
        let lex = ErrorKind::LexError { ch: '&', offset: 2 };
        let syntax = ErrorKind::SyntaxError {
            expected: Expected::Token(TokenKind::RParen),
            found: TokenKind::Eof,
            offset: 6,
        };

        assert!(lex.is_syntax());
        assert!(syntax.is_syntax());
        assert!(!ErrorKind::DivisionByZero.is_syntax());

        assert_eq!(exit_code(&lex), EXIT_SYNTAX);
        assert_eq!(exit_code(&syntax), EXIT_SYNTAX);
        assert_eq!(exit_code(&ErrorKind::DivisionByZero), EXIT_RUNTIME);
        assert_eq!((EXIT_SYNTAX, EXIT_RUNTIME), (65, 70));
    }

    #[test]
    fn exit_codes_from_evaluation() {
        let interpreter = Interpreter::new();
        let code = |src: &str| interpreter.eval(src).map_err(|why| exit_code(&why));

        assert_eq!(code("3 & 2"), Err(65));
        assert_eq!(code("(2 + 3"), Err(65));
        assert_eq!(code("5 / 0"), Err(70));
        assert_eq!(code("5 / 2"), Ok(2.5));
    }
}
