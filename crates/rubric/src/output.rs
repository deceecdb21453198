use crate::check::{CheckResult, Outcome};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    pub fn print_result(&mut self, result: &CheckResult) -> io::Result<()> {
        match &result.outcome {
            Outcome::Matched => {
                self.set_color(Color::Green);
                write!(self.stdout, "✓")?;
                self.reset();
                writeln!(self.stdout, " {}", result.candidate)?;
            }
            Outcome::NotMatched => {
                self.set_color(Color::Red);
                write!(self.stdout, "✗")?;
                self.reset();
                writeln!(self.stdout, " {}", result.candidate)?;
            }
            Outcome::Error(e) => {
                self.set_color(Color::Yellow);
                write!(self.stdout, "!")?;
                self.reset();
                write!(self.stdout, " {}", result.candidate)?;
                self.set_dim();
                writeln!(self.stdout, " ({})", e)?;
                self.reset();
            }
        }
        Ok(())
    }

    pub fn print_summary(&mut self, results: &[CheckResult]) -> io::Result<()> {
        let matched = results.iter().filter(|r| r.outcome.is_match()).count();
        let errors = results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Error(_)))
            .count();
        let not_matched = results.len() - matched - errors;

        writeln!(self.stdout)?;
        if matched == results.len() {
            self.set_color(Color::Green);
            writeln!(self.stdout, "All {} candidates matched", matched)?;
            self.reset();
        } else {
            write!(self.stdout, "Summary:")?;
            self.set_color(Color::Green);
            write!(self.stdout, " {} matched", matched)?;
            self.reset();
            write!(self.stdout, ",")?;
            self.set_color(Color::Red);
            write!(self.stdout, " {} not matched", not_matched)?;
            self.reset();
            if errors > 0 {
                write!(self.stdout, ",")?;
                self.set_color(Color::Yellow);
                write!(self.stdout, " {} errors", errors)?;
                self.reset();
            }
            writeln!(self.stdout)?;
        }
        self.stdout.flush()
    }
}
