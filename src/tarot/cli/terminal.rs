//! Line-oriented [`Terminal`] over any reader/writer pair.
//!
//! Menus are printed as numbered lists and answered with a number. Anything else
//! re-asks. End of input is reported as [`TarotError::InputClosed`].

use super::render::Renderer;
use std::io::{BufRead, Write};
use tarot::error::{Result, TarotError};
use tarot::nav::{Terminal, View};

const ANSWER_PROMPT: &str = "> ";

pub struct LineTerminal<'r, R, W> {
    reader: R,
    writer: W,
    renderer: &'r Renderer,
}

impl<'r, R: BufRead, W: Write> LineTerminal<'r, R, W> {
    pub fn new(reader: R, writer: W, renderer: &'r Renderer) -> Self {
        Self {
            reader,
            writer,
            renderer,
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Bytes that are not UTF-8 are replaced, so they read as an ordinary bad answer.
    fn read_line(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(TarotError::InputClosed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<'_, R, W> {
    fn show(&mut self, view: View<'_>) -> Result<()> {
        let text = self.renderer.view(view);
        self.write(&text)
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize> {
        if options.is_empty() {
            return Err(TarotError::Prompt(format!(
                "nothing to choose at {:?}",
                message
            )));
        }

        let menu = self.renderer.menu(message, options);
        self.write(&menu)?;

        loop {
            self.write(ANSWER_PROMPT)?;
            let answer = self.read_line()?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => {
                    let notice = self.renderer.notice(&format!(
                        "Please enter a number between 1 and {}.",
                        options.len()
                    ));
                    self.write(&notice)?;
                }
            }
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        let question = self.renderer.question(message);
        self.write(&question)?;
        self.read_line()
    }
}
