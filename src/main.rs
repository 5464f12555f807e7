//! coursecheck - course content linter
//!
//! Validates a course folder and exits non-zero when it has errors.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use coursecheck::checks::CourseValidator;
use coursecheck::cli::colors::ColorSupport;
use coursecheck::cli::output::{CourseReport, emit_human, emit_json, robot_error, robot_ok};
use coursecheck::cli::{Cli, resolve_course_path};
use coursecheck::config::{Config, ReportFormat};
use coursecheck::{CourseError, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if cli.robot {
                let response = robot_error(e.code(), e.to_string());
                println!("{}", serde_json::to_string(&response).unwrap_or_default());
            } else if let CourseError::Usage(usage) = &e {
                eprintln!("{usage}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the course passed
fn run(cli: &Cli) -> Result<bool> {
    let root = resolve_course_path(cli.course.as_deref())?;
    let mut config = Config::load(cli.config.as_deref(), &root)?;
    if cli.strict {
        config.strict = true;
    }
    if cli.robot {
        config.report.format = ReportFormat::Json;
    }

    let course = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = CourseValidator::new(&config).validate(&root);
    let passed = report.passed() && !(config.strict && report.warning_count() > 0);

    match config.report.format {
        ReportFormat::Json => emit_json(&robot_ok(CourseReport::new(&course, &report, passed)))?,
        ReportFormat::Human => {
            let support = ColorSupport::from_choice(config.report.color);
            emit_human(&course, &report, support);
        }
    }

    Ok(passed)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,coursecheck=info",
        1 => "info,coursecheck=debug",
        2 => "debug,coursecheck=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
