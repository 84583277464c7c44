use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};

use crate::error::ReportError;
use crate::quiz::Exam;

const TITLE: &str = "--- Online Examination System Results ---";
const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
const NO_ANSWER_TEXT: &str = "No Answer";

pub fn result_file_name(user_name: &str, epoch_millis: i64) -> String {
    format!(
        "exam_results_{}_{}.txt",
        user_name.replace(' ', "_"),
        epoch_millis
    )
}

pub fn render(exam: &Exam, user_name: &str, date: DateTime<Local>) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        format!("Candidate: {}", user_name),
        format!("Date: {}", date.format(DATE_FORMAT)),
        String::new(),
        format!(
            "FINAL SCORE: {} / {} ({:.1}%)",
            exam.calculate_score(),
            exam.total(),
            exam.percentage()
        ),
        String::new(),
        "--- Detailed Answers ---".to_string(),
    ];

    for (i, (question, &answer)) in exam.questions().iter().zip(exam.answers()).enumerate() {
        let given = answer
            .and_then(|a| question.option(a))
            .unwrap_or(NO_ANSWER_TEXT);
        let verdict = if question.is_correct(answer) {
            "CORRECT"
        } else {
            "INCORRECT"
        };

        lines.push(String::new());
        lines.push(format!("Q{}: {}", i + 1, question.text));
        lines.push(format!("   Your Answer: {}", given));
        lines.push(format!(
            "   Correct Answer: {}",
            question.correct_option().unwrap_or_default()
        ));
        lines.push(format!("   Result: {}", verdict));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Writes the report for `user_name` into `dir` and returns the new file's path.
pub fn write_result_file(exam: &Exam, user_name: &str, dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(result_file_name(user_name, Utc::now().timestamp_millis()));

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(render(exam, user_name, Local::now()).as_bytes())?;
    writer.flush()?;

    log::info!("Result file written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank;
    use chrono::TimeZone;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    fn answered(answers: &[Option<usize>]) -> Exam {
        let mut exam = Exam::new(bank::load_questions());
        for (i, answer) in answers.iter().enumerate() {
            exam.set_answer(i, *answer).unwrap();
        }
        exam
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("online-exam-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn file_name_replaces_spaces_and_embeds_timestamp() {
        assert_eq!(
            result_file_name("Ada King Lovelace", 1700000000123),
            "exam_results_Ada_King_Lovelace_1700000000123.txt"
        );
    }

    #[test]
    fn header_lists_candidate_date_and_score() {
        let exam = answered(&[Some(1), Some(2), Some(1), Some(2), Some(2)]);
        let report = render(&exam, "Ada", fixed_date());
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[1], "Candidate: Ada");
        assert_eq!(lines[2], "Date: 05-03-2024 14:07:09");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "FINAL SCORE: 5 / 5 (100.0%)");
        assert_eq!(report.matches("Result: CORRECT").count(), 5);
        assert!(!report.contains("INCORRECT"));
    }

    #[test]
    fn unanswered_questions_show_no_answer_and_count_as_incorrect() {
        let exam = answered(&[Some(1), None, None, None, None]);
        let report = render(&exam, "Ada", fixed_date());

        assert!(report.contains("FINAL SCORE: 1 / 5 (20.0%)"));
        assert_eq!(report.matches("Your Answer: No Answer").count(), 4);
        assert_eq!(report.matches("Result: INCORRECT").count(), 4);
        assert!(report.contains(
            "Q2: Which data structure works on LIFO?\n   Your Answer: No Answer\n   Correct Answer: Stack\n   Result: INCORRECT"
        ));
    }

    #[test]
    fn one_question_block_per_question_in_order() {
        let exam = answered(&[Some(0), Some(2), None, Some(3), Some(2)]);
        let report = render(&exam, "Ada", fixed_date());

        let headings: Vec<_> = report
            .lines()
            .filter(|line| line.starts_with('Q'))
            .collect();
        assert_eq!(headings.len(), exam.total());
        for (i, (heading, question)) in headings.iter().zip(exam.questions()).enumerate() {
            assert_eq!(*heading, format!("Q{}: {}", i + 1, question.text));
        }

        let score_line = report
            .lines()
            .find(|line| line.starts_with("FINAL SCORE: "))
            .unwrap();
        let numbers: Vec<usize> = score_line
            .trim_start_matches("FINAL SCORE: ")
            .split(" (")
            .next()
            .unwrap()
            .split(" / ")
            .map(|n| n.parse().unwrap())
            .collect();
        assert_eq!(numbers, vec![2, exam.total()]);
    }

    #[test]
    fn result_file_is_written_to_the_results_directory() {
        let dir = scratch_dir("write");
        let exam = answered(&[Some(1), None, None, None, None]);

        let path = write_result_file(&exam, "Ada Lovelace", &dir).unwrap();

        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("exam_results_Ada_Lovelace_"));
        assert!(file_name.ends_with(".txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(TITLE));
        assert!(content.contains("Candidate: Ada Lovelace"));
        assert!(content.contains("FINAL SCORE: 1 / 5 (20.0%)"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_directory_is_reported_as_an_error_value() {
        let dir = scratch_dir("missing").join("does-not-exist");
        let exam = answered(&[None, None, None, None, None]);

        let err = write_result_file(&exam, "Ada", &dir).unwrap_err();

        assert!(err.to_string().starts_with("Error generating file: "));
        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }
}
