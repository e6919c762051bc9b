use lastdrive_game::PlayCall;
use std::collections::VecDeque;
use std::io::BufRead;

/// One play choice and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Taken from `--plays` before any stdin is read.
    Scripted(String),
    /// A whitespace-separated token typed at the prompt.
    Typed(String),
    /// Stdin is closed or unreadable.
    EndOfInput,
}

impl Choice {
    /// The call this choice resolves to. Closed input reads as a
    /// miscommunication, so the clock keeps running and the drive still ends.
    #[must_use]
    pub fn call(&self) -> PlayCall {
        match self {
            Self::Scripted(raw) | Self::Typed(raw) => PlayCall::parse(raw),
            Self::EndOfInput => PlayCall::Miscommunication,
        }
    }
}

/// Play choices: scripted tokens first, then whitespace-separated tokens
/// from `reader`. One typed line can hold several choices.
pub struct PlayChoices<R> {
    scripted: VecDeque<String>,
    typed: VecDeque<String>,
    reader: R,
    closed: bool,
}

impl<R: BufRead> PlayChoices<R> {
    pub fn new(scripted: Vec<String>, reader: R) -> Self {
        Self {
            scripted: scripted.into(),
            typed: VecDeque::new(),
            reader,
            closed: false,
        }
    }

    /// Next choice. Never fails: read errors close the input and every later
    /// choice is [`Choice::EndOfInput`].
    pub fn next_choice(&mut self) -> Choice {
        if let Some(raw) = self.scripted.pop_front() {
            return Choice::Scripted(raw);
        }

        loop {
            if let Some(token) = self.typed.pop_front() {
                return Choice::Typed(token);
            }
            if self.closed {
                return Choice::EndOfInput;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    log::debug!("stdin closed; remaining plays are miscommunications");
                    self.closed = true;
                }
                Ok(_) => self
                    .typed
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(err) => {
                    log::warn!("failed to read play choice: {err}");
                    self.closed = true;
                }
            }
        }
    }
}
