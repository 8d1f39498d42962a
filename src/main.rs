use std::io::Read;
use std::{env, fs, io, process};

use sudoku_solver::Sudoku;

// Reads a puzzle from a file (or stdin), writes the solved grid to a file
// (or stdout). Exit code 1 for unreadable or malformed input, 2 when the
// puzzle has no solution.
fn main() {
    let args: Vec<String> = env::args().collect();

    let input = match args.get(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let input = match input {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: cannot read puzzle: {}", err);
            process::exit(1);
        }
    };

    let mut sudoku: Sudoku = match input.parse() {
        Ok(sudoku) => sudoku,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    if !sudoku.solve() {
        eprintln!("no solution exists");
        process::exit(2);
    }

    match args.get(2) {
        Some(path) => {
            if let Err(err) = fs::write(path, sudoku.to_string()) {
                eprintln!("error: cannot write solution: {}", err);
                process::exit(1);
            }
        }
        None => print!("{}", sudoku),
    }
}
