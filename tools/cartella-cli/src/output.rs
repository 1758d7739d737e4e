//! Output formatting for the CLI.

use cartella_commerce::catalog::Product;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print products as a table, or as a JSON array in JSON mode.
    pub fn products(&self, products: &[Product]) {
        if self.json {
            self.json(&products);
            return;
        }
        if products.is_empty() {
            self.info("No products");
            return;
        }

        let widths = [12, 28, 14, 14, 10, 12];
        self.table_row(&["ID", "NAME", "COMPANY", "CATEGORY", "PRICE", "RATING"], &widths);
        for product in products {
            let cols = [
                truncate(product.id.as_str(), 12),
                truncate(&product.name, 28),
                truncate(&product.company, 14),
                truncate(&product.category, 14),
                format_price(product.price),
                format_rating(product),
            ];
            let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
            self.table_row(&cols, &widths);
        }
        println!("\n  {} product(s)", products.len());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Format a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Average rating and vote count, or a dash when unrated.
pub fn format_rating(product: &Product) -> String {
    match product.rating_count() {
        0 => "-".to_string(),
        n => format!("{:.1} ({})", product.average_rating(), n),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartella_commerce::catalog::Rating;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(1299.999), "$1300.00");
    }

    #[test]
    fn test_format_rating() {
        let mut product = Product::new("p1", "Mug", "Home", 9.0);
        assert_eq!(format_rating(&product), "-");

        product.user_ratings.push(Rating::anonymous(4).unwrap());
        product.user_ratings.push(Rating::anonymous(5).unwrap());
        assert_eq!(format_rating(&product), "4.5 (2)");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long product name", 8), "a very …");
    }
}
