//! Terminal output: banner, per-stage spinners, status lines and the final
//! next-steps note.

use std::io::{self, IsTerminal};
use std::sync::Mutex;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use nextpro_core::application::ports::{ProgressReporter, Stage, Warning};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

const BANNER_WIDTH: usize = 55;
const BANNER_LINES: [&str; 5] = [
    "",
    "scaffold-next-pro",
    "",
    "Production-ready Next.js 15 scaffolding tool",
    "",
];

/// Writes user-facing lines to stdout.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour is off when asked for or when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    fn line(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    /// `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.line(&format!("\u{2713} {msg}"))
        } else {
            self.line(&format!("{} {}", "\u{2713}".green().bold(), msg.green()))
        }
    }

    /// `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.no_color {
            self.line(&format!("\u{26a0} {msg}"))
        } else {
            self.line(&format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()))
        }
    }

    /// `✗ <msg>`; shown even in quiet mode.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    pub fn banner(&self) -> io::Result<()> {
        for line in banner_lines() {
            if self.no_color {
                self.line(&line)?;
            } else {
                self.line(&line.cyan().bold().to_string())?;
            }
        }
        Ok(())
    }

    /// The closing note with the commands to run next.
    pub fn project_ready(&self, project_name: &str) -> io::Result<()> {
        let title = "Project ready!";
        let cd = format!("cd {project_name}");
        let dev = "yarn dev";

        self.line("")?;
        if self.no_color {
            self.line(title)?;
        } else {
            self.line(&title.bold().to_string())?;
        }
        self.line("")?;
        self.line("Run the following commands to get started:")?;
        self.line("")?;
        for cmd in [cd.as_str(), dev] {
            if self.no_color {
                self.line(&format!("  {cmd}"))?;
            } else {
                self.line(&format!("  {}", cmd.cyan()))?;
            }
        }
        self.line("")
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

fn banner_lines() -> Vec<String> {
    let bar = "\u{2550}".repeat(BANNER_WIDTH);
    let mut lines = vec![format!("\u{2554}{bar}\u{2557}")];
    for text in BANNER_LINES {
        lines.push(format!("\u{2551}{text:^width$}\u{2551}", width = BANNER_WIDTH));
    }
    lines.push(format!("\u{255a}{bar}\u{255d}"));
    lines
}

/// [`ProgressReporter`] that shows one spinner per stage.
///
/// The spinner is drawn once per stage rather than ticking in the background:
/// the external tools write to the same terminal while a stage runs.
pub struct SpinnerReporter<'a> {
    output: &'a OutputManager,
    current: Mutex<Option<ProgressBar>>,
}

impl<'a> SpinnerReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            current: Mutex::new(None),
        }
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if self.output.is_quiet() {
            return ProgressBar::hidden();
        }
        let template = if self.output.supports_color() {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        let bar = ProgressBar::new_spinner().with_message(message);
        bar.set_style(
            ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.tick();
        bar
    }

    fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(bar) = current.take() {
                bar.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for SpinnerReporter<'_> {
    fn stage_started(&self, stage: Stage) {
        self.clear();
        let bar = self.spinner(stage.running_message());
        if let Ok(mut current) = self.current.lock() {
            *current = Some(bar);
        }
    }

    fn stage_finished(&self, stage: Stage) {
        self.clear();
        let _ = self.output.success(stage.done_message());
    }

    fn stage_failed(&self, stage: Stage) {
        self.clear();
        let _ = self.output.failure(&format!("{stage} stage failed"));
    }

    fn warning(&self, warning: &Warning) {
        self.clear();
        let _ = self.output.warning(&warning.message);
    }
}
