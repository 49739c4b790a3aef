//! Run counters and reporting of run outputs

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Counters accumulated across one recursive walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Index files written
    pub generated_count: usize,
    pub directories_scanned: usize,
}

/// Outputs reported to the caller after a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RunSummary {
    pub generated_count: usize,
    pub directories_scanned: usize,
    /// The root's `index.json`, present only when JSON output was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,
}

impl RunSummary {
    pub fn new(stats: WalkStats, manifest_path: Option<PathBuf>) -> Self {
        Self {
            generated_count: stats.generated_count,
            directories_scanned: stats.directories_scanned,
            manifest_path,
        }
    }

    /// Output name/value pairs in reporting order.
    pub fn outputs(&self) -> Vec<(&'static str, String)> {
        let mut outputs = vec![
            ("generated-count", self.generated_count.to_string()),
            ("directories-scanned", self.directories_scanned.to_string()),
        ];
        if let Some(ref path) = self.manifest_path {
            outputs.push(("manifest-path", path.display().to_string()));
        }
        outputs
    }
}

/// Print a short human-readable summary to stdout.
pub fn print_summary(summary: &RunSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    writeln!(stdout, "Directory Index")?;
    stdout.reset()?;
    writeln!(stdout, "───────────────")?;

    let mut value_color = ColorSpec::new();
    value_color.set_fg(Some(Color::Cyan));

    for (name, value) in summary.outputs() {
        write!(stdout, "{:<21}", format!("{}:", name))?;
        stdout.set_color(&value_color)?;
        write!(stdout, "{}", value)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print the summary as pretty-printed JSON to stdout.
pub fn print_summary_json(summary: &RunSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Append the outputs as `name=value` lines to a CI outputs file
/// (the file named by `GITHUB_OUTPUT` in GitHub Actions).
pub fn write_action_outputs(summary: &RunSummary, path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (name, value) in summary.outputs() {
        writeln!(file, "{}={}", name, value)?;
    }
    Ok(())
}

/// Format `message` as an Actions `::error::` workflow command.
///
/// The runner decodes `%25`, `%0D` and `%0A` in command data.
pub fn workflow_error_command(message: &str) -> String {
    let data = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{}", data)
}
