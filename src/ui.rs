use console::{Alignment, Style, Term, pad_str, style};
use indicatif::{ProgressBar, ProgressStyle};

const BOX_WIDTH: usize = 56;
const ACCENT: u8 = 208;

fn accent() -> Style {
    Style::new().color256(ACCENT)
}

pub fn heading(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn info(text: &str) {
    println!("{}", text);
}

pub fn dim(text: &str) {
    println!("{}", style(text).dim());
}

pub fn success(text: &str) {
    println!("{}", style(text).green());
}

pub fn warn(text: &str) {
    eprintln!("{}", style(text).yellow());
}

pub fn error(text: &str) {
    eprintln!("{}", style(text).red());
}

/// Highlights a shell command inside a line of output.
pub fn command(text: &str) -> String {
    style(text).yellow().to_string()
}

pub fn link(text: &str) -> String {
    style(text).underlined().to_string()
}

pub fn label(text: &str) -> String {
    style(text).cyan().to_string()
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = if Term::stdout().is_term() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Stops a spinner and prints a success line in its place.
pub fn spinner_success(pb: &ProgressBar, message: &str) {
    pb.finish_and_clear();
    success(&format!("✔ {}", message));
}

pub fn spinner_warn(pb: &ProgressBar, message: &str) {
    pb.finish_and_clear();
    warn(&format!("⚠ {}", message));
}

pub fn spinner_fail(pb: &ProgressBar, message: &str) {
    pb.finish_and_clear();
    error(&format!("✖ {}", message));
}

pub fn banner() {
    let edge = accent();
    let inner = BOX_WIDTH + 2;
    println!();
    println!("{}", edge.apply_to(format!("╔{}╗", "═".repeat(inner))));
    banner_line("");
    banner_line(&style("🔥 MOLT ARENA").bold().color256(ACCENT).to_string());
    banner_line(&style("AI Agent Roast Battle Platform").dim().to_string());
    banner_line("");
    println!("{}", edge.apply_to(format!("╚{}╝", "═".repeat(inner))));
}

fn banner_line(text: &str) {
    let edge = accent().apply_to("║");
    let padded = pad_str(text, BOX_WIDTH - 1, Alignment::Left, None);
    println!("{}   {}{}", edge, padded, edge);
}

/// Prints a titled panel with one row per entry.
pub fn print_box(title: &str, lines: &[String]) {
    let edge = accent();
    let fill = BOX_WIDTH.saturating_sub(5 + console::measure_text_width(title));
    println!();
    println!(
        "{}",
        edge.apply_to(format!("┌─ {} {}┐", title, "─".repeat(fill)))
    );
    for line in lines {
        let padded = pad_str(line, BOX_WIDTH - 4, Alignment::Left, None);
        println!("{} {} {}", edge.apply_to("│"), padded, edge.apply_to("│"));
    }
    println!("{}", edge.apply_to(format!("└{}┘", "─".repeat(BOX_WIDTH - 2))));
}

pub fn rule() {
    dim(&"─".repeat(BOX_WIDTH));
}
