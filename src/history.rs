// history.rs

use crate::fragment::Fragment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Raw text as typed; empty for the welcome entry.
    pub command: String,
    pub output: Fragment,
}

/// How a transcript is turned into text.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub prompt: String,
    pub color: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { prompt: "$".to_string(), color: false }
    }
}

impl RenderStyle {
    pub fn render_entry(&self, entry: &HistoryEntry) -> String {
        let mut out = String::new();
        if !entry.command.is_empty() {
            out.push_str(&format!("{} {}\n", self.prompt, entry.command));
        }
        if self.color {
            out.push_str(&entry.output.render_ansi());
        } else {
            out.push_str(&entry.output.plain_text());
        }
        out.push_str("\n\n");
        out
    }
}

/// The visible transcript. Append-only apart from a full clear.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn append(&mut self, command: String, output: Fragment) {
        self.entries.push(HistoryEntry { command, output });
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn render(&self, style: &RenderStyle) -> String {
        self.entries.iter().map(|e| style.render_entry(e)).collect()
    }
}

/// Every submitted line, recognized or not. Survives `clear`.
#[derive(Debug, Default)]
pub struct RecallBuffer {
    entries: Vec<String>,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn get(&self, n: usize) -> Option<&String> {
        self.entries.get(n)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_skips_echo_for_empty_command() {
        let mut log = HistoryLog::new();
        log.append(String::new(), Fragment::text("welcome"));
        log.append("Help".to_string(), Fragment::text("listing"));
        assert_eq!(log.render(&RenderStyle::default()), "welcome\n\n$ Help\nlisting\n\n");
    }

    #[test]
    fn render_uses_configured_prompt() {
        let style = RenderStyle { prompt: ">".to_string(), color: false };
        let entry = HistoryEntry { command: "ls".to_string(), output: Fragment::text("x") };
        assert_eq!(style.render_entry(&entry), "> ls\nx\n\n");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut log = HistoryLog::new();
        log.clear();
        assert!(log.is_empty());
        log.append("a".to_string(), Fragment::new());
        log.clear();
        log.clear();
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn entries_keep_insertion_order_and_duplicates() {
        let mut log = HistoryLog::new();
        for cmd in ["a", "b", "a"] {
            log.append(cmd.to_string(), Fragment::new());
        }
        let commands: Vec<&str> = log.entries().iter().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, ["a", "b", "a"]);
    }

    #[test]
    fn recall_buffer_grows_per_add() {
        let mut recall = RecallBuffer::new();
        recall.add("foo".to_string());
        recall.add(String::new());
        assert_eq!(recall.len(), 2);
        assert_eq!(recall.get(1).map(String::as_str), Some(""));
        assert_eq!(recall.get(2), None);
    }
}
