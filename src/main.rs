//! CLI entry point for the academic records analyzer.
//!
//! Provides subcommands for per-student reports, program rankings, subject
//! statistics, GPA listings, and a demo run over the seed dataset. All
//! rendering happens here; the library only returns structured values.

use academic_analyzer::analyzers::aggregate::{
    gpa, honor_roll, overall_statistics, predict_performance, subject_statistics, top_by_program,
    weighted_average,
};
use academic_analyzer::analyzers::report::student_report;
use academic_analyzer::analyzers::utility::round2;
use academic_analyzer::model::seed_students;
use academic_analyzer::output::{AverageRow, append_summary, print_json};
use academic_analyzer::registry::Registry;
use academic_analyzer::Student;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "academic_analyzer")]
#[command(about = "A tool to analyze academic records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis sequence over the seed dataset
    Demo,
    /// Print the detailed report for one student as JSON
    Report {
        /// Student id to report on
        #[arg(short, long, default_value_t = 1)]
        id: u32,
    },
    /// Show the top students per program
    Rankings {
        /// Maximum number of students per program
        #[arg(short, long, default_value_t = 3)]
        limit: usize,
    },
    /// Show cross-student statistics per subject
    Subjects,
    /// List weighted average and GPA per student
    Gpa {
        /// CSV file to append rows to instead of logging
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/academic_analyzer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("academic_analyzer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let registry = Registry::new(seed_students());

    match cli.command {
        Commands::Demo => demo()?,
        Commands::Report { id } => match registry.find(id) {
            Some(student) => print_json(&student_report(student))?,
            None => error!(id, "No student with that id"),
        },
        Commands::Rankings { limit } => show_rankings(registry.students(), limit),
        Commands::Subjects => show_subjects(registry.students()),
        Commands::Gpa { output } => show_gpa(registry.students(), output.as_deref())?,
    }

    Ok(())
}

fn show_rankings(students: &[Student], limit: usize) {
    for ranking in top_by_program(students, limit) {
        info!(program = %ranking.program, "Program ranking");
        for (position, entry) in ranking.students.iter().enumerate() {
            info!(
                position = position + 1,
                name = %entry.name,
                average = round2(entry.average),
                "Ranked student"
            );
        }
    }
}

fn show_subjects(students: &[Student]) {
    for stats in subject_statistics(students) {
        info!(
            subject = %stats.subject,
            average = stats.average,
            students = stats.students,
            min = stats.min_score,
            max = stats.max_score,
            programs = %stats.programs.join(", "),
            "Subject statistics"
        );
    }
}

fn show_gpa(students: &[Student], output: Option<&str>) -> Result<()> {
    for student in students.iter().filter(|s| !s.grades.is_empty()) {
        let row = AverageRow {
            id: student.id,
            name: student.name.clone(),
            average: round2(weighted_average(student)),
            gpa: round2(gpa(student)),
        };

        match output {
            Some(path) => append_summary(path, &row)?,
            None => info!(name = %row.name, average = row.average, gpa = row.gpa, "GPA"),
        }
    }

    if let Some(path) = output {
        info!(path, "GPA summary written");
    }

    Ok(())
}

/// Replays the original demonstration sequence: averages, rankings, subject
/// statistics, one detailed report, honor roll, overall statistics, two
/// enrollments (one grade recording against a missing id to show the error
/// path), GPA list, and predictions.
fn demo() -> Result<()> {
    let mut registry = Registry::new(seed_students());

    info!("Individual averages");
    for student in registry.students() {
        info!(
            name = %student.name,
            average = round2(weighted_average(student)),
            "Average"
        );
    }

    info!("Top students by program");
    show_rankings(registry.students(), 2);

    info!("Subject statistics");
    show_subjects(registry.students());

    info!("Detailed report");
    if let Some(student) = registry.students().first() {
        print_json(&student_report(student))?;
    }

    info!("Honor roll (active, average >= 8.0)");
    for entry in honor_roll(registry.students(), 8.0) {
        info!(name = %entry.name, average = round2(entry.average), "Honor roll");
    }

    let stats = overall_statistics(registry.students());
    info!(
        total = stats.total_students,
        active = stats.active_students,
        grades = stats.total_grades,
        overall_average = stats.overall_average,
        "Overall statistics"
    );

    info!("Enrollment");
    registry.enroll("Alejandro Barrera", 34, "Ingeniería Informática")?;
    registry.enroll("Juan Perez", 82, "Gastronomía")?;

    registry.record_grade(4, "Matemáticas", 7.5, 4.0)?;
    registry.record_grade(4, "Programación", 9.2, 9.0)?;

    // Unknown id: rejected, nothing recorded
    if let Err(e) = registry.record_grade(99, "Matemáticas", 7.5, 4.0) {
        error!(error = %e, "Grade not recorded");
    }

    info!("GPA per student");
    show_gpa(registry.students(), None)?;

    info!("Performance predictions");
    for student in registry.students().iter().filter(|s| !s.grades.is_empty()) {
        let prediction = predict_performance(student);
        info!(
            name = %student.name,
            predicted_score = prediction.predicted_score,
            "Prediction"
        );
    }

    Ok(())
}
