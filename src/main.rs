mod config;
mod console;
mod error;
mod quiz;

use dotenv::dotenv;
use tokio::io::{stdin, stdout, BufReader};

use config::ExamConfig;
use console::Console;
use quiz::{bank, report, Exam};

type RunResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() {
    // A missing .env file is fine, the defaults apply
    let dotenv_loaded = dotenv().is_ok();

    pretty_env_logger::init();
    log::info!("Starting online exam...");
    if !dotenv_loaded {
        log::debug!("No .env file loaded");
    }

    if let Err(e) = run(ExamConfig::from_env()).await {
        log::error!("Exam aborted: {}", e);
    }
}

async fn run(config: ExamConfig) -> RunResult {
    log::info!(
        "Exam duration: {} minutes, results directory: {}",
        config.duration_minutes,
        config.results_dir.display()
    );

    let mut exam = Exam::new(bank::load_questions());
    let mut console = Console::new(BufReader::new(stdin()), stdout());

    let name = console.read_name().await?;

    let countdown = exam.start_timer(config.duration_minutes);
    let outcome = console.run_exam(&mut exam).await;
    countdown.abort();
    countdown.join().await;
    let outcome = outcome?;
    log::info!("Question loop ended: {:?}", outcome);

    console.finish(&exam).await?;

    let result = report::write_result_file(&exam, &name, &config.results_dir);
    if let Err(e) = &result {
        log::warn!("{}", e);
    }
    console.announce_report(&result).await?;
    Ok(())
}
