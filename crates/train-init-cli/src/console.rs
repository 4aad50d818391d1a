//! CLI console utilities

use colored::*;
use train_init_core::config::Config;

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print a header
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// Print a separator
    pub fn print_separator(&self) {
        if self.verbose {
            println!("{}", "-".repeat(50).dimmed());
        }
    }

    /// Print the assembled config with secrets masked
    pub fn print_config_summary(&self, config: &Config) {
        self.print_header("Configuration");
        let wml = &config.credentials.wml;
        let cos = &config.credentials.cos;

        print_field("name", &config.name);
        print_field("wml.instance_id", &wml.instance_id);
        print_field("wml.username", &wml.username);
        print_field("wml.password", &mask(&wml.password));
        print_field("wml.url", &wml.url);
        print_field("cos.access_key_id", &cos.access_key_id);
        print_field("cos.secret_access_key", &mask(&cos.secret_access_key));
        print_field("cos.region", &cos.region);
        print_field("buckets.training", &config.buckets.training);
        if let Some(output) = &config.buckets.output {
            print_field("buckets.output", output);
        }
        if let (Some(gpu), Some(steps)) =
            (config.training_params.gpu(), config.training_params.steps())
        {
            print_field("trainingParams.gpu", gpu);
            print_field("trainingParams.steps", steps);
        }
        self.print_separator();
    }
}

fn print_field(label: &str, value: &str) {
    let shown = if value.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        value.to_string()
    };
    println!("  {:<24} {}", label.cyan(), shown);
}

/// Keep the first and last four characters of long secrets
fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "*".repeat(chars.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("short"), "*****");
        assert_eq!(mask("0123456789abcdef"), "0123...cdef");
    }
}
