use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quiz_runner::Quiz;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Pipe-delimited file to load the questions from
    #[arg(short, long, default_value = "questions.txt")]
    questions: PathBuf,

    /// File the result log is written to
    #[arg(short, long, default_value = "results.txt")]
    results: PathBuf,

    /// Seconds allowed per question
    #[arg(short, long, default_value_t = 20)]
    timeout: u64,
}

fn main() {
    let args = Args::parse();
    let quiz = Quiz::from_file(args.questions)
        .timeout(Duration::from_secs(args.timeout))
        .results_path(args.results);

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {e}");
    }
}
