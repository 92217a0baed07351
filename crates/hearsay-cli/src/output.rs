//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use hearsay_core::{Rumor, Store, User};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Print a status line (suppressed in quiet mode)
    pub fn success(&self, message: &str) {
        if !self.is_quiet() {
            println!("{}", message);
        }
    }

    /// Print a single rumor with its author resolved
    pub fn print_rumor(&self, store: &Store, rumor: &Rumor) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", rumor.id);
                println!("Author:  @{}", store.author_name(rumor));
                println!("Status:  {}", rumor.status);
                println!(
                    "Votes:   true {} / false {}",
                    rumor.true_votes, rumor.false_votes
                );
                println!("Content: {}", rumor.content);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(rumor).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", rumor.id);
            }
        }
    }

    /// Print the feed, most-recent-first
    pub fn print_feed(&self, store: &Store) {
        let rumors = store.rumors();
        match self.format {
            OutputFormat::Human => {
                if rumors.is_empty() {
                    println!("No rumors yet.");
                    return;
                }
                for rumor in rumors {
                    println!(
                        "[{:^8}] @{} | true {} / false {} | {}",
                        rumor.status.to_string(),
                        store.author_name(rumor),
                        rumor.true_votes,
                        rumor.false_votes,
                        truncate(&rumor.content, 60)
                    );
                    println!("           {}", rumor.id);
                }
                println!("\n{} rumor(s)", rumors.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(rumors).unwrap());
            }
            OutputFormat::Quiet => {
                for rumor in rumors {
                    println!("{}", rumor.id);
                }
            }
        }
    }

    /// Print a user profile
    pub fn print_user(&self, user: &User) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:       {}", user.id);
                println!("Name:     {}", user.name);
                println!("Points:   {}", user.points);
                if user.vouchers.is_empty() {
                    println!("Vouchers: (none)");
                } else {
                    println!("Vouchers: {}", user.vouchers.join(", "));
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(user).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", user.id);
            }
        }
    }
}

/// Truncate a string, appending an ellipsis when it was cut
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
