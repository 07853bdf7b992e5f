// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::fs::File;
use std::process;

use clap::{App, Arg, ArgMatches, SubCommand};
use regex::Regex;

use chess_core::{
    CsvMoveRecorder, GameSession, MoveRecorder, MoveResult, NullMoveRecorder, SelectionResult,
    SessionOptions, Square,
};

fn main() {
    env_logger::init();
    let fen_arg = || {
        Arg::with_name("fen")
            .help("FEN placement (and optional side to move) to start from")
            .value_name("FEN")
            .long("--fen")
            .takes_value(true)
    };
    let strict_arg = || {
        Arg::with_name("strict")
            .help("Reject moves that leave the mover's own king in check")
            .long("--strict")
    };

    let matches = App::new("chess-core")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .subcommand(
            SubCommand::with_name("replay")
                .about("Plays a sequence of coordinate moves (e2e4) and prints the result")
                .arg(
                    Arg::with_name("MOVES")
                        .help("Moves to play, in order")
                        .multiple(true)
                        .index(1),
                )
                .arg(fen_arg())
                .arg(strict_arg())
                .arg(
                    Arg::with_name("json")
                        .help("Print the final position as JSON")
                        .long("--json"),
                )
                .arg(
                    Arg::with_name("record")
                        .help("Write every committed move to a CSV file")
                        .value_name("FILE")
                        .long("--record")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("moves")
                .about("Lists the squares a piece may move to")
                .arg(
                    Arg::with_name("SQUARE")
                        .help("Square of the piece, e.g. g1")
                        .required(true)
                        .index(1),
                )
                .arg(fen_arg())
                .arg(strict_arg()),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("replay") {
        run_replay(matches);
    }

    if let Some(matches) = matches.subcommand_matches("moves") {
        run_moves(matches);
    }

    eprintln!("{}", matches.usage());
    process::exit(2);
}

fn load_session(matches: &ArgMatches) -> GameSession {
    let options = SessionOptions {
        reject_self_check: matches.is_present("strict"),
    };

    match matches.value_of("fen") {
        Some(fen) => match GameSession::from_fen(fen, options) {
            Ok(session) => session,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
        None => GameSession::with_options(options),
    }
}

fn run_replay(matches: &ArgMatches) -> ! {
    let mut session = load_session(matches);
    let mut recorder: Box<dyn MoveRecorder> = match matches.value_of("record") {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(CsvMoveRecorder::new(file)),
            Err(err) => {
                eprintln!("could not create {}: {}", path, err);
                process::exit(1);
            }
        },
        None => Box::new(NullMoveRecorder),
    };

    let move_regex = Regex::new(r"^([a-h][1-8])-?([a-h][1-8])$").unwrap();
    let moves: Vec<&str> = matches.values_of("MOVES").map_or(vec![], |v| v.collect());
    let mut status = 0;
    for mov in moves {
        let (from, to) = match parse_move(&move_regex, mov) {
            Some(squares) => squares,
            None => {
                eprintln!("not a coordinate move: {}", mov);
                status = 1;
                break;
            }
        };

        match session.play(from, to) {
            MoveResult::Committed(_) => {
                if let Some(rec) = session.history().last() {
                    if let Err(err) = recorder.record(rec) {
                        eprintln!("failed to record move: {}", err);
                        status = 1;
                        break;
                    }
                }
            }
            MoveResult::Illegal => {
                eprintln!("illegal move for {}: {}", session.to_move(), mov);
                status = 1;
                break;
            }
        }
    }

    if matches.is_present("json") {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    } else {
        print_session(&session);
    }

    process::exit(status);
}

fn run_moves(matches: &ArgMatches) -> ! {
    let mut session = load_session(matches);
    let square: Square = match value_t!(matches, "SQUARE", Square) {
        Ok(square) => square,
        Err(err) => err.exit(),
    };

    if session.select(square) != SelectionResult::Selected {
        eprintln!("no {} piece on {}", session.to_move(), square);
        process::exit(1);
    }

    let destinations: Vec<String> = session
        .legal_destinations()
        .iter()
        .map(|sq| sq.to_string())
        .collect();
    println!("{}", destinations.join(" "));
    process::exit(0);
}

fn parse_move(regex: &Regex, mov: &str) -> Option<(Square, Square)> {
    let caps = regex.captures(mov)?;
    let from = caps.get(1)?.as_str().parse().ok()?;
    let to = caps.get(2)?.as_str().parse().ok()?;
    Some((from, to))
}

fn print_session(session: &GameSession) {
    println!("{}", session.board());
    for rec in session.history() {
        print!("{} ", rec);
    }
    println!();
    println!("to move: {}", session.to_move());
    for &color in &chess_core::COLORS {
        if session.is_in_check(color) {
            println!("{} is in check", color);
        }
    }
}
