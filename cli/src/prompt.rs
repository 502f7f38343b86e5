//! Interactive stdin adapter for the [`AnswerPrompt`] port.

use colored::Colorize;
use quiz_application::{AnswerPrompt, PromptError};
use quiz_domain::{CHOICES_PER_QUESTION, Question};
use std::io::{self, BufRead, Write};

/// Prompts for one choice per question on the terminal.
///
/// Invalid input is re-asked here rather than surfaced as an error; the
/// engine only ever sees in-range indices. EOF (Ctrl-D) cancels the run.
pub struct StdinAnswerPrompt {
    quiet: bool,
}

impl StdinAnswerPrompt {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl AnswerPrompt for StdinAnswerPrompt {
    fn select(
        &mut self,
        question: &Question,
        position: usize,
        total: usize,
    ) -> Result<usize, PromptError> {
        println!();
        if !self.quiet {
            println!(
                "{} {}",
                progress_bar(position, total),
                format!("Question {} of {}", position + 1, total).dimmed()
            );
        }
        println!("{}", question.prompt().bold());
        for (i, choice) in question.choices().iter().enumerate() {
            println!("  {}. {}", i + 1, choice.text());
        }

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush().map_err(|e| PromptError::Io(e.to_string()))?;

            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return Err(PromptError::Cancelled),
                Ok(_) => {}
                Err(e) => return Err(PromptError::Io(e.to_string())),
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=CHOICES_PER_QUESTION).contains(&n) => return Ok(n - 1),
                _ => println!(
                    "{}",
                    format!("Please enter a number between 1 and {CHOICES_PER_QUESTION}")
                        .yellow()
                ),
            }
        }
    }
}

/// Visual progress through the quiz (e.g. "[●●○○○]")
pub fn progress_bar(answered: usize, total: usize) -> String {
    let mut bar = String::from("[");
    for i in 0..total {
        bar.push(if i < answered { '●' } else { '○' });
    }
    bar.push(']');
    bar
}
