use crate::error;
use crate::lang::{prettify, Error};
use crate::mach::{Engine, Program};

pub const COMMANDS: &[&str] = &["clear", "help", "load", "program", "quit", "save", "vars"];

const HELP: &str = "\
Numbers are operands: 3 4 +
Operations: sin cos √ ± × + − ÷ and the constant π
→x or >x stores the displayed value in x
Any other word pushes a variable
Commands: clear vars program save FILE load FILE help quit";

/// Output of `Session::enter` for the terminal to act on.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Value on the display (blank when absent) and the description.
    Display(Option<f64>, String),
    Print(String),
    Errors(Vec<Error>),
    Load(String),
    Save(String),
    Quit,
}

/// ## Keypad for the engine
///
/// Holds the value currently on the display because storing a variable
/// copies that value, just like the memory key on a calculator.

pub struct Session {
    engine: Engine,
    display: Option<f64>,
}

impl Session {
    pub fn new(engine: Engine) -> Session {
        let display = engine.evaluate();
        Session { engine, display }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn display_value(&self) -> Option<f64> {
        self.display
    }

    pub fn display_text(&self) -> String {
        display_text(self.display)
    }

    /// Replaces the stack with a loaded program.
    pub fn load_program(&mut self, program: &Program) -> Event {
        self.engine.set_program(program);
        self.display = self.engine.evaluate();
        self.display_event()
    }

    pub fn program(&self) -> Program {
        self.engine.program()
    }

    pub fn enter(&mut self, line: &str) -> Vec<Event> {
        let mut events = vec![];
        let mut errors = vec![];
        let mut touched = false;
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            match word {
                "clear" => {
                    self.engine.clear();
                    self.display = Some(0.0);
                    touched = true;
                }
                "help" => events.push(Event::Print(HELP.to_string())),
                "vars" => events.push(Event::Print(self.list_vars())),
                "program" => match serde_json::to_string(&self.engine.program()) {
                    Ok(s) => events.push(Event::Print(s)),
                    Err(e) => errors.push(error!(InternalError; e.to_string())),
                },
                "save" | "load" => match words.next() {
                    Some(filename) if word == "save" => events.push(Event::Save(filename.into())),
                    Some(filename) => events.push(Event::Load(filename.into())),
                    None => errors.push(error!(SyntaxError; "EXPECTED FILE NAME")),
                },
                "quit" => {
                    events.push(Event::Quit);
                    break;
                }
                _ => match self.key(word) {
                    Ok(()) => touched = true,
                    Err(e) => errors.push(e),
                },
            }
        }
        if !errors.is_empty() {
            events.insert(0, Event::Errors(errors));
        }
        if touched {
            events.insert(0, self.display_event());
        }
        events
    }

    fn key(&mut self, word: &str) -> Result<(), Error> {
        if let Some(name) = word.strip_prefix('→').or_else(|| word.strip_prefix('>')) {
            if name.is_empty() {
                return Err(error!(MissingOperand; "EXPECTED VARIABLE NAME"));
            }
            self.display = match self.display {
                Some(value) => self.engine.set_variable(name, value),
                None => {
                    self.engine.variables_mut().remove(name);
                    self.engine.evaluate()
                }
            };
        } else if self.engine.symbols().contains(word) {
            self.display = self.engine.perform_operation(word);
        } else if let Some(value) = self.engine.number_format().parse(word) {
            self.display = self.engine.push_operand(value);
        } else {
            self.display = self.engine.push_variable(word);
        }
        Ok(())
    }

    fn display_event(&self) -> Event {
        Event::Display(self.display, self.engine.description())
    }

    fn list_vars(&self) -> String {
        let mut vars: Vec<(&str, f64)> = self.engine.variables().iter().collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars.iter()
            .map(|(name, value)| format!("{} = {}", name, prettify(*value)))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Absent values show as a single blank.
pub fn display_text(value: Option<f64>) -> String {
    match value {
        Some(v) => prettify(v),
        None => " ".to_string(),
    }
}
