//! The `quizbot play` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

use quizbot_core::model::{Question, Quiz};
use quizbot_core::session::{Phase, QuizFlow};
use quizbot_core::sheet::AnswerSheet;

use super::Session;

pub async fn execute(
    source: String,
    mode: String,
    num_questions: Option<u32>,
    text: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let sheet_mode = match mode.as_str() {
        "walker" => false,
        "sheet" => true,
        other => anyhow::bail!("unknown mode: {other} (expected walker or sheet)"),
    };

    let Session {
        mut flow,
        source,
        request,
    } = super::connect(&source, num_questions, text, config_path).await?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout().lock();

    writeln!(out, "QuizBot")?;
    if let Some(session) = flow.session() {
        writeln!(out, "Meeting ID: {session}")?;
    }

    loop {
        writeln!(out, "Loading quiz...")?;
        flow.generate(source.as_ref(), &request).await?;

        if sheet_mode {
            let quiz = Arc::clone(flow.walker().context("no quiz was generated")?.quiz());
            return run_sheet(quiz, &mut input, &mut out);
        }

        if !run_walker(&mut flow, &mut input, &mut out)? {
            return Ok(());
        }
        flow.restart();
    }
}

/// Walk the active quiz one question at a time.
///
/// Returns whether the user asked to restart.
pub fn run_walker(
    flow: &mut QuizFlow,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    loop {
        let walker = match flow.phase() {
            Phase::Active(walker) => walker,
            Phase::Results(walker) => {
                writeln!(out, "\nQuiz Results")?;
                writeln!(out, "Your Score: {}", walker.score())?;
                return ask_restart(input, out);
            }
            _ => anyhow::bail!("no quiz loaded"),
        };

        let question = walker
            .current_question()
            .context("active quiz has no current question")?;
        writeln!(
            out,
            "\nQuestion {} / {}",
            walker.current_index() + 1,
            walker.quiz().len()
        )?;
        print_question(question, out)?;

        let option = read_choice(question, input, out)?
            .context("input ended before the quiz was finished")?;
        flow.select(&option)?;
        flow.advance()?;
    }
}

/// Answer every question, then submit the sheet and show per-question
/// results. A blank line skips a question; restarting clears the sheet and
/// goes through the same quiz again.
pub fn run_sheet(quiz: Arc<Quiz>, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut sheet = AnswerSheet::new(quiz);

    loop {
        let total = sheet.quiz().len();
        for index in 0..total {
            let question = &sheet.quiz().questions()[index];
            writeln!(out, "\nQuestion {} / {}", index + 1, total)?;
            print_question(question, out)?;

            let choice = read_choice_or_skip(question, input, out)?
                .context("input ended before the quiz was finished")?;
            if let Some(option) = choice {
                sheet = sheet.record_answer(index, &option)?;
            }
        }

        sheet = sheet.submit();
        print_outcomes(&sheet, out)?;
        writeln!(out, "Your Score: {}", sheet.score())?;

        if !ask_restart(input, out)? {
            return Ok(());
        }
        sheet = sheet.restart();
    }
}

fn print_question(question: &Question, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", question.question)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, option)?;
    }
    Ok(())
}

fn print_outcomes(sheet: &AnswerSheet, out: &mut impl Write) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Question", "Your answer", "Correct answer", ""]);

    for row in sheet.outcomes() {
        table.add_row(vec![
            Cell::new(row.number),
            Cell::new(&row.question),
            Cell::new(row.selected.as_deref().unwrap_or("-")),
            Cell::new(&row.correct_answer),
            Cell::new(if row.correct { "correct" } else { "wrong" }),
        ]);
    }

    writeln!(out, "\nQuiz Results")?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Read an option number. `None` on end of input.
fn read_choice(
    question: &Question,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    loop {
        match read_choice_or_skip(question, input, out)? {
            None => return Ok(None),
            Some(Some(option)) => return Ok(Some(option)),
            Some(None) => writeln!(out, "Select an answer to continue.")?,
        }
    }
}

/// Read an option number or a blank line. Outer `None` on end of input,
/// inner `None` for a blank line.
fn read_choice_or_skip(
    question: &Question,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Option<String>>> {
    let count = question.options.len();
    loop {
        write!(out, "Answer [1-{count}]: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(None));
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                return Ok(Some(Some(question.options[n - 1].clone())));
            }
            _ => writeln!(out, "Please enter a number between 1 and {count}.")?,
        }
    }
}

fn ask_restart(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    write!(out, "Restart quiz? [y/N]: ")?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
