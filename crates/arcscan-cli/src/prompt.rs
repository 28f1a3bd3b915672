//! Confirmation prompts for the check command

use arcscan_core::{Confirm, Error, Question, Result};
use dialoguer::Confirm as ConfirmPrompt;
use std::io::{self, BufRead, IsTerminal, Write};

/// Answers the driver's questions from flags, asking on the terminal for
/// anything the flags leave open
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConfirm {
    save: Option<bool>,
    extract: Option<bool>,
}

impl CliConfirm {
    /// Prompt for both questions
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Fix the answer to one question
    pub fn answer(mut self, question: Question, answer: bool) -> Self {
        match question {
            Question::SaveResults => self.save = Some(answer),
            Question::ExtractArchives => self.extract = Some(answer),
        }
        self
    }

    /// Fix every answer still open
    pub fn answer_rest(mut self, answer: bool) -> Self {
        self.save.get_or_insert(answer);
        self.extract.get_or_insert(answer);
        self
    }

    fn fixed(&self, question: Question) -> Option<bool> {
        match question {
            Question::SaveResults => self.save,
            Question::ExtractArchives => self.extract,
        }
    }
}

impl Confirm for CliConfirm {
    fn confirm(&mut self, question: Question) -> Result<bool> {
        if let Some(answer) = self.fixed(question) {
            return Ok(answer);
        }

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return ConfirmPrompt::new()
                .with_prompt(question.prompt())
                .default(false)
                .interact()
                .map_err(|e| Error::Other(format!("Prompt failed: {}", e)));
        }

        read_answer(question, &mut io::stdin().lock(), &mut io::stderr())
    }
}

/// Line-based answer for piped input.
///
/// A `y` in any case is yes; anything else, end of input included, is no.
fn read_answer(
    question: Question,
    input: &mut dyn BufRead,
    prompt: &mut dyn Write,
) -> Result<bool> {
    write!(prompt, "{} (y/n): ", question.prompt())?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer_from(input: &str) -> bool {
        let mut prompt = Vec::new();
        let answer =
            read_answer(Question::SaveResults, &mut Cursor::new(input), &mut prompt).unwrap();
        assert!(String::from_utf8(prompt).unwrap().contains("(y/n)"));
        answer
    }

    #[test]
    fn test_read_answer() {
        assert!(answer_from("y\n"));
        assert!(answer_from("Y\n"));
        assert!(answer_from("  y  \r\n"));
        assert!(!answer_from("n\n"));
        assert!(!answer_from("yes\n"));
        assert!(!answer_from("\n"));
        assert!(!answer_from(""));
    }

    #[test]
    fn test_read_answer_consumes_one_line() {
        let mut input = Cursor::new("n\ny\n");
        let mut prompt = Vec::new();
        assert!(!read_answer(Question::SaveResults, &mut input, &mut prompt).unwrap());
        assert!(read_answer(Question::ExtractArchives, &mut input, &mut prompt).unwrap());
    }

    #[test]
    fn test_fixed_answers_skip_prompt() {
        let mut confirm = CliConfirm::interactive()
            .answer(Question::SaveResults, true)
            .answer_rest(false);

        assert!(confirm.confirm(Question::SaveResults).unwrap());
        assert!(!confirm.confirm(Question::ExtractArchives).unwrap());
    }

    #[test]
    fn test_answer_rest_keeps_explicit_answers() {
        let confirm = CliConfirm::interactive()
            .answer(Question::ExtractArchives, false)
            .answer_rest(true);

        assert_eq!(confirm.fixed(Question::SaveResults), Some(true));
        assert_eq!(confirm.fixed(Question::ExtractArchives), Some(false));
    }
}
