/*!
## Rust Terminal Module

Line-oriented front end for the engine. Each line is a series of
keypad words; see [`Session`].

*/

extern crate ansi_term;
extern crate linefeed;
use crate::lang::Error;
use crate::mach::Program;
use crate::error;
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use log::info;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

mod config;
mod session;

pub use config::Config;
pub use session::{display_text, Event, Session};

pub fn main() {
    let config_path = std::env::args().nth(1);
    let config = match Config::load_or_default(config_path.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    info!("configuration loaded: {:?}", config);
    if let Err(error) = main_loop(&config) {
        eprintln!("{}", error);
    }
}

fn main_loop(config: &Config) -> std::io::Result<()> {
    let mut session = Session::new(config.engine());
    let command = Interface::new("calc")?;
    command.set_prompt(&config.prompt)?;
    command.set_report_signal(Signal::Interrupt, true);
    command.set_completer(Arc::new(WordCompleter::new(&session)));

    let mut events = vec![];
    if let Some(filename) = &config.program {
        events.push(Event::Load(filename.clone()));
    }
    loop {
        for event in events.drain(..) {
            match event {
                Event::Display(value, description) => {
                    print_display(&command, value, &description)?;
                }
                Event::Print(s) => {
                    command.write_fmt(format_args!("{}\n", s))?;
                }
                Event::Errors(errors) => {
                    for error in errors.iter() {
                        print_error(&command, error)?;
                    }
                }
                Event::Load(s) => match load(&s) {
                    Ok(program) => {
                        info!("loaded {} tokens from {}", program.len(), s);
                        let display = session.load_program(&program);
                        if let Event::Display(value, description) = display {
                            print_display(&command, value, &description)?;
                        }
                    }
                    Err(error) => print_error(&command, &error)?,
                },
                Event::Save(s) => match save(&session.program(), &s) {
                    Ok(_) => info!("saved program to {}", s),
                    Err(error) => print_error(&command, &error)?,
                },
                Event::Quit => return Ok(()),
            }
        }
        match command.read_line()? {
            ReadResult::Input(string) => {
                events = session.enter(&string);
                if !string.trim().is_empty() {
                    command.add_history_unique(string);
                }
            }
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                command.lock_reader().cancel_read_line()?;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

fn print_display<T: Terminal>(
    command: &Interface<T>,
    value: Option<f64>,
    description: &str,
) -> std::io::Result<()> {
    command.write_fmt(format_args!("{}\n", display_text(value)))?;
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().dimmed().paint(description)
    ))
}

fn print_error<T: Terminal>(command: &Interface<T>, error: &Error) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "?{}\n",
        Style::new().bold().paint(error.to_string())
    ))
}

struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(session: &Session) -> WordCompleter {
        let mut words: Vec<String> = session
            .engine()
            .symbols()
            .names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        words.extend(session::COMMANDS.iter().map(|s| s.to_string()));
        WordCompleter { words }
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let comp_list: Vec<Completion> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Completion::simple(w.clone()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}

pub fn load(filename: &str) -> Result<Program, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg)),
                _ => return Err(error!(DiskIoError; msg)),
            }
        }
    };
    match serde_json::from_reader(reader) {
        Ok(program) => Ok(program),
        Err(error) => Err(error!(SyntaxError; format!("{}: {}", filename, error))),
    }
}

pub fn save(program: &Program, filename: &str) -> Result<(), Error> {
    if program.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    let mut file = match File::create(filename) {
        Ok(file) => file,
        Err(error) => return Err(error!(DiskIoError; error.to_string())),
    };
    let json = match serde_json::to_string_pretty(program) {
        Ok(json) => json,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    if let Err(error) = writeln!(file, "{}", json) {
        return Err(error!(DiskIoError; error.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("calc-{}-{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_save_then_load() {
        let filename = temp_file("round_trip.json");
        let program: Program = vec!["6", "4", "1", "2", "+", "−", "×"]
            .into_iter()
            .collect();
        save(&program, &filename).unwrap();
        let loaded = load(&filename).unwrap();
        std::fs::remove_file(&filename).unwrap();
        assert_eq!(loaded, program);
        let mut session = Session::new(crate::mach::Engine::new());
        assert_eq!(
            session.load_program(&loaded),
            Event::Display(Some(6.0), "6 × (4 − (1 + 2))".into())
        );
    }

    #[test]
    fn test_load_missing_file() {
        let filename = temp_file("does_not_exist.json");
        let error = load(&filename).unwrap_err();
        assert_eq!(error.code(), 53);
    }

    #[test]
    fn test_load_not_a_program() {
        for (name, content) in &[
            ("object.json", r#"{"tokens": ["1"]}"#),
            ("numbers.json", "[1, 2]"),
            ("text.json", "1 2 +"),
        ] {
            let filename = temp_file(name);
            std::fs::write(&filename, content).unwrap();
            let error = load(&filename).unwrap_err();
            std::fs::remove_file(&filename).unwrap();
            assert_eq!(error.code(), 2, "{}", name);
            assert!(error.to_string().starts_with("SYNTAX ERROR; "));
        }
    }

    #[test]
    fn test_save_nothing() {
        let filename = temp_file("empty.json");
        let error = save(&Program::new(), &filename).unwrap_err();
        assert_eq!(error.to_string(), "INTERNAL ERROR; NOTHING TO SAVE");
        assert!(!Path::new(&filename).exists());
    }
}
