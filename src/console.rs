use std::io;
use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{ConsoleError, ReportError};
use crate::quiz::timer::format_remaining;
use crate::quiz::{Exam, Question, NO_ANSWER};

/// How the question loop came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Completed,
    TimeUp,
    InputClosed,
}

enum Entry {
    Answer(Option<usize>),
    Closed,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub async fn read_name(&mut self) -> io::Result<String> {
        self.say("Enter your name:\n").await?;
        Ok(self.read_line().await?.unwrap_or_default())
    }

    /// Presents every question in order until the exam is finished, time runs
    /// out or the input is closed.
    pub async fn run_exam(&mut self, exam: &mut Exam) -> Result<LoopOutcome, ConsoleError> {
        for index in 0..exam.total() {
            if exam.is_time_up() {
                log::info!("Time ran out before question {}", index + 1);
                return Ok(LoopOutcome::TimeUp);
            }

            let question = &exam.questions()[index];
            let block = question_block(index + 1, question, exam.remaining_seconds());
            let option_count = question.options.len();
            self.say(&block).await?;

            match self.read_answer(option_count).await? {
                Entry::Answer(answer) => exam.set_answer(index, answer)?,
                Entry::Closed => {
                    log::info!("Input closed at question {}", index + 1);
                    return Ok(LoopOutcome::InputClosed);
                }
            }
        }
        Ok(LoopOutcome::Completed)
    }

    pub async fn finish(&mut self, exam: &Exam) -> io::Result<()> {
        let text = format!(
            "\nTime's Up or Exam Completed!\nYour Score: {}\n",
            exam.calculate_score()
        );
        self.say(&text).await
    }

    pub async fn announce_report(&mut self, result: &Result<PathBuf, ReportError>) -> io::Result<()> {
        let text = match result {
            Ok(path) => format!("Result saved as: {}\n", path.display()),
            Err(e) => format!("{}\n", e),
        };
        self.say(&text).await
    }

    async fn read_answer(&mut self, option_count: usize) -> io::Result<Entry> {
        let last = option_count.saturating_sub(1);
        loop {
            self.say(&format!("Enter answer (0-{}): ", last)).await?;
            let line = match self.read_line().await? {
                Some(line) => line,
                None => return Ok(Entry::Closed),
            };
            match parse_answer(&line, option_count) {
                Ok(answer) => return Ok(Entry::Answer(answer)),
                Err(()) => {
                    log::debug!("Rejected answer input {:?}", line);
                    self.say(&format!(
                        "Please enter a number between 0 and {} (or {} to skip).\n",
                        last, NO_ANSWER
                    ))
                    .await?;
                }
            }
        }
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}

fn question_block(number: usize, question: &Question, remaining_seconds: u64) -> String {
    let mut block = format!(
        "\nQ{}: {}\n   Time left: {}\n",
        number,
        question.text,
        format_remaining(remaining_seconds)
    );
    for (i, option) in question.options.iter().enumerate() {
        block.push_str(&format!("   {}. {}\n", i, option));
    }
    block
}

fn parse_answer(raw: &str, option_count: usize) -> Result<Option<usize>, ()> {
    let value: i64 = raw.trim().parse().map_err(|_| ())?;
    if value == NO_ANSWER {
        return Ok(None);
    }
    match usize::try_from(value) {
        Ok(option) if option < option_count => Ok(Some(option)),
        _ => Err(()),
    }
}
