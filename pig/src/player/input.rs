use std::collections::VecDeque;
use std::io::{self, Write};

use crate::PigError;

/// Where a human player's decisions come from. Reading blocks until a line
/// arrives.
pub trait InputSource {
    fn read_token(&mut self, prompt: &str) -> Result<String, PigError>;
}

/// Prompts on stdout and reads one line from stdin per decision.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn read_token(&mut self, prompt: &str) -> Result<String, PigError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Err(PigError::InputClosed);
        }
        Ok(String::from(line.trim()))
    }
}

/// Replays a fixed list of tokens and remembers every prompt it was shown.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn get_prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn get_remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_token(&mut self, prompt: &str) -> Result<String, PigError> {
        self.prompts.push(String::from(prompt));
        self.tokens.pop_front().ok_or(PigError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_in_order() {
        let mut input = ScriptedInput::new(["r", "h"]);
        assert_eq!(input.read_token("first").unwrap(), "r");
        assert_eq!(input.read_token("second").unwrap(), "h");
        assert_eq!(input.get_prompts(), ["first", "second"]);
        assert_eq!(input.get_remaining(), 0);
    }

    #[test]
    fn exhausted_script_reports_closed_input() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        assert!(matches!(
            input.read_token("prompt"),
            Err(PigError::InputClosed)
        ));
    }
}
