//! Console input/output for the menu
//!
//! Reads one whitespace-delimited token per prompt, buffering the rest of the
//! line for later prompts, and writes prompts and messages to any writer.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::{BankError, BankResult};
use crate::models::Money;

/// Token-oriented console over a reader and a writer
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write text without a trailing newline and flush
    pub fn print(&mut self, text: &str) -> BankResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line
    pub fn println(&mut self, text: &str) -> BankResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Clear the terminal and home the cursor
    pub fn clear_screen(&mut self) -> BankResult<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    /// Next token from the input, reading more lines as needed
    pub fn next_token(&mut self) -> BankResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BankError::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Print a label and read one token
    pub fn prompt(&mut self, label: &str) -> BankResult<String> {
        self.print(label)?;
        self.next_token()
    }

    /// Print a label and parse one token, naming `what` on failure
    pub fn prompt_parse<T: FromStr>(&mut self, label: &str, what: &str) -> BankResult<T> {
        let token = self.prompt(label)?;
        token
            .parse()
            .map_err(|_| BankError::InvalidInput(format!("expected {}, got '{}'", what, token)))
    }

    /// Print a label and read a money amount
    pub fn prompt_money(&mut self, label: &str) -> BankResult<Money> {
        let token = self.prompt(label)?;
        Money::parse(&token).map_err(|e| BankError::InvalidInput(e.to_string()))
    }

    /// Drop buffered tokens and wait for the next line
    pub fn wait_for_enter(&mut self, label: &str) -> BankResult<()> {
        self.print(label)?;
        self.pending.clear();

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::EndOfInput);
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
