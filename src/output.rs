use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(changed: usize, failed: usize, dry_run: bool) -> Self {
        let verb = if dry_run { "would be updated" } else { "updated" };
        match (changed, failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} {verb}, {} failed", changed.green(), f.red()),
            },
            (c, _) if c > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!("{} file(s) {verb}", c.green()),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No files needed changes".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
