//! Structured console logger with dry-run awareness and a step summary.
//!
//! All messages are also written to a persistent log file at
//! `$XDG_CACHE_HOME/gitmess/install.log` (default `~/.cache/gitmess/install.log`)
//! with timestamps and ANSI codes stripped, regardless of the verbose flag.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

/// Step execution result for summary reporting.
#[derive(Debug, Clone)]
pub struct StepEntry {
    pub name: String,
    pub status: StepStatus,
    pub message: Option<String>,
}

/// Status of a completed install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ok,
    AlreadyOk,
    Skipped,
    DryRun,
    Failed,
}

/// Console and file logger shared by the whole pipeline.
pub struct Logger {
    verbose: bool,
    steps: std::cell::RefCell<Vec<StepEntry>>,
    log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("verbose", &self.verbose)
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

/// Return the log file path under `$XDG_CACHE_HOME/gitmess/` (or `~/.cache/gitmess/`).
fn log_file_path() -> Option<PathBuf> {
    let cache_dir = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cache")
        });
    let dir = cache_dir.join("gitmess");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("install.log"))
}

/// Strip ANSI escape sequences from a string.
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of SGR sequence)
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl Logger {
    /// Logger writing to the default cache-dir log file.
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self::with_log_file(verbose, log_file_path())
    }

    /// Logger writing to an explicit log file, or to no file at all.
    ///
    /// Tests use this with a temp-dir path (or `None`) so concurrent test
    /// threads never truncate each other's log, and never touch the real
    /// user cache.
    #[must_use]
    pub fn with_log_file(verbose: bool, log_file: Option<PathBuf>) -> Self {
        if let Some(ref path) = log_file {
            let version = option_env!("GITMESS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            let header = format!(
                "==========================================\n\
                 gitmess-install {version} {}\n\
                 ==========================================\n",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            );
            // Truncate and write header (new run = fresh log)
            let _ = fs::write(path, header);
        }

        Self {
            verbose,
            steps: std::cell::RefCell::new(Vec::new()),
            log_file,
        }
    }

    /// Append a line to the persistent log file.
    fn write_to_file(&self, level: &str, msg: &str) {
        if let Some(ref path) = self.log_file {
            if let Ok(mut f) = fs::OpenOptions::new().append(true).open(path) {
                let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let clean = strip_ansi(msg);
                let _ = writeln!(f, "{ts} {level} {clean}");
            }
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
        self.write_to_file("ERR", msg);
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
        self.write_to_file("WRN", msg);
    }

    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
        self.write_to_file("STG", msg);
    }

    pub fn info(&self, msg: &str) {
        println!("  {msg}");
        self.write_to_file("INF", msg);
    }

    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("  \x1b[2m{msg}\x1b[0m");
        }
        // Always log debug to file, even when not verbose on terminal
        self.write_to_file("DBG", msg);
    }

    pub fn dry_run(&self, msg: &str) {
        println!("  \x1b[33m[DRY RUN]\x1b[0m {msg}");
        self.write_to_file("DRY", msg);
    }

    /// Record a step result for the summary.
    pub fn record_step(&self, name: &str, status: StepStatus, message: Option<&str>) {
        self.steps.borrow_mut().push(StepEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Print the summary of all recorded steps.
    pub fn print_summary(&self) {
        let steps = self.steps.borrow();
        if steps.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");

        for step in steps.iter() {
            let (icon, color) = match step.status {
                StepStatus::Ok => ("✓", "\x1b[32m"),
                StepStatus::AlreadyOk => ("·", "\x1b[2m"),
                StepStatus::Skipped => ("○", "\x1b[33m"),
                StepStatus::DryRun => ("~", "\x1b[33m"),
                StepStatus::Failed => ("✗", "\x1b[31m"),
            };

            let suffix = match &step.message {
                Some(msg) => format!(" ({msg})"),
                None => String::new(),
            };

            let line = format!("{icon} {}{suffix}", step.name);
            println!("  {color}{line}\x1b[0m");
            self.write_to_file("INF", &line);
        }

        if let Some(path) = &self.log_file {
            println!("  \x1b[2mlog: {}\x1b[0m", path.display());
        }
    }
}
