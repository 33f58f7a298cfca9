use std::{
    io::{self, BufRead, Write},
    process,
};

use log::debug;
use wordle_assist::{strategy::first::First, words, Feedback, Result, Session};

const WORDLIST_PATH: &str = "wordlist.txt";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let candidates = words::load_words(WORDLIST_PATH)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let outcome = Session::new(candidates, First).run(&mut io::stdout(), |_guess| {
        read_feedback(&mut input, &mut io::stdout())
    })?;
    debug!("session finished: {:?}", outcome);

    Ok(())
}

/// Prompts for and reads one whitespace-delimited feedback token.
fn read_feedback<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Feedback> {
    writeln!(out, "Enter feedback (g for green, y for yellow, b for gray):")?;
    out.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no feedback on stdin").into());
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Feedback::parse(token));
        }
    }
}
