use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "Turn one line of natural language into a structured task")]
#[command(long_about = "taskline - natural language task capture

Parses a single line of free text into a structured task with a title,
priority (P1-P4), due date/time, and category.

QUICK START:
  taskline parse \"urgent meeting with team tomorrow at 2pm #work\"
  taskline batch --sort < tasks.txt
  taskline prompt --tasks tasks.json | your-model-cli | taskline groups --tasks tasks.json

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Falls back to the configured default when omitted.
    #[arg(short, long, value_enum, global = true, env = "TASKLINE_OUTPUT")]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse one line of natural language into a task
    ///
    /// The fastest way to capture a task: dates, times, priorities, and
    /// categories are pulled out of plain text and the rest becomes the
    /// title.
    ///
    /// # Examples
    ///
    ///   taskline parse "urgent meeting with team #work"
    ///   taskline parse "Submit report by tomorrow at 5pm"
    ///   taskline parse buy milk tomorrow
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      today, tomorrow, next monday, dec 15, in 3 days
    ///   Times:      3pm, 15:00, morning, evening
    ///   Priority:   urgent/critical (P1), important (P2), optional (P4),
    ///               or literal p1..p4; defaults to P3
    ///   Category:   #work, #personal (first tag wins)
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Parse one task per line from standard input
    ///
    /// Empty lines are skipped. With --sort the result is ordered the way
    /// a task list displays: open tasks first, then priority, then due
    /// date.
    ///
    /// # Examples
    ///
    ///   taskline batch < tasks.txt
    ///   taskline batch --sort -o json < tasks.txt
    Batch(BatchArgs),

    /// Emit a grouping prompt for an external language model
    ///
    /// Reads a JSON task array (as produced by 'batch -o json' items or
    /// 'parse -o json') and prints a prompt asking a model to suggest
    /// named task groups. Pipe it to whatever model CLI you use; taskline
    /// never talks to the network itself.
    ///
    /// # Examples
    ///
    ///   taskline prompt --tasks tasks.json
    ///   taskline prompt < tasks.json
    Prompt(PromptArgs),

    /// Decode a model's grouping response into task groups
    ///
    /// Reads the model's raw response from standard input and the original
    /// task array from --tasks, and prints the resolved groups. Markdown
    /// code fences around the JSON are tolerated.
    ///
    /// # Examples
    ///
    ///   your-model-cli < prompt.txt | taskline groups --tasks tasks.json
    Groups(GroupsArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskline completions bash > /etc/bash_completion.d/taskline
    ///   taskline completions zsh > ~/.zfunc/_taskline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The task text (multiple words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Sort the parsed tasks for display
    #[arg(long)]
    pub sort: bool,
}

#[derive(Args)]
pub struct PromptArgs {
    /// JSON file with the task array (defaults to standard input)
    #[arg(long, value_name = "FILE")]
    pub tasks: Option<PathBuf>,
}

#[derive(Args)]
pub struct GroupsArgs {
    /// JSON file with the task array the model was prompted with
    #[arg(long, value_name = "FILE")]
    pub tasks: PathBuf,

    /// Drop groups below this confidence (overrides the configured value)
    #[arg(long, value_name = "FLOAT")]
    pub min_confidence: Option<f64>,
}
