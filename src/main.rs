use clap::{Arg, Command, crate_name, crate_version, value_parser};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use exprstack::{
    error::{Error, Result},
    eval::{self, Value, evaluate},
    lexer::tokenize,
};

fn main() {
    if let Err(error) = run() {
        match error {
            Error::Clap(error) => {
                error.print().expect("error writing error");
                match error.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => std::process::exit(0),
                    _ => std::process::exit(1),
                }
            }
            _ => {
                eprintln!("{error}");
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {
    let cmd = Command::new(crate_name!())
        .version(crate_version!())
        .disable_colored_help(true)
        .arg(
            Arg::new("expr")
                .help("expression to evaluate")
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_parser(value_parser!(PathBuf))
                .help("read the expression from a file"),
        );

    let matches = cmd.try_get_matches()?;
    let mut stack = Vec::new();

    if let Some(path) = matches.get_one::<PathBuf>("file") {
        let expr = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                println!("error: file {} does not exist", path.display());
                std::process::exit(1);
            }
            Err(err) => return Err(err.into()),
        };

        return eval_line(&expr, &mut stack, &mut io::stdout().lock());
    }

    if let Some(expr) = matches.get_one::<String>("expr") {
        return eval_line(expr, &mut stack, &mut io::stdout().lock());
    }

    repl(&mut stack)
}

fn eval_line<W: Write>(expr: &str, stack: &mut Vec<Value>, out: &mut W) -> Result<()> {
    let tokens = tokenize(expr);

    match evaluate(&tokens, stack, out) {
        Ok(()) => Ok(()),
        Err(eval::Error::Io(err)) => Err(err.into()),
        Err(err) => {
            writeln!(out, "error: {err}").map_err(Error::Io)?;
            Ok(())
        }
    }
}

fn repl(stack: &mut Vec<Value>) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("could not initialize line editor");

    loop {
        let input = match rl.readline(">> ") {
            Ok(line) => {
                rl.add_history_entry(&line)
                    .expect("could not add history entry");
                line
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye");
                std::process::exit(1);
            }
            Err(_) => break,
        };

        if input.trim().is_empty() {
            continue;
        }

        eval_line(&input, stack, &mut io::stdout().lock())?;
    }

    Ok(())
}
