// Live-input tracker - what is the user typing right now?

/// Strip the shell prompt from a cursor line.
///
/// Cuts after the earliest occurrence of any prompt marker. A line that only
/// holds a prompt (its trailing blank already trimmed) yields "". A line
/// without any marker is returned whole.
pub fn extract_input<'a>(line: &'a str, prompt_markers: &[String]) -> &'a str {
    let earliest = prompt_markers
        .iter()
        .filter(|m| !m.is_empty())
        .filter_map(|m| line.find(m.as_str()).map(|start| (start, start + m.len())))
        .min();

    if let Some((_, end)) = earliest {
        return &line[end..];
    }

    let bare_prompt = prompt_markers.iter().any(|m| {
        let marker = m.trim_end();
        !marker.is_empty() && line.trim_end().ends_with(marker)
    });
    if bare_prompt {
        ""
    } else {
        line
    }
}

/// First whitespace-delimited token
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Result of feeding a line to the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// Same trimmed line as last time; leave derived state alone
    Unchanged,
    Changed(String),
}

/// Remembers the last observed trimmed input line
#[derive(Debug, Clone)]
pub struct LineTracker {
    last_line: String,
    prompt_markers: Vec<String>,
}

impl LineTracker {
    pub fn new(prompt_markers: Vec<String>) -> Self {
        Self {
            last_line: String::new(),
            prompt_markers,
        }
    }

    pub fn last_line(&self) -> &str {
        &self.last_line
    }

    /// Observe a raw cursor line (prompt included)
    pub fn observe_cursor_line(&mut self, raw: &str) -> Observation {
        let input = extract_input(raw, &self.prompt_markers);
        self.observe_input(input)
    }

    /// Observe text that is already known to be input (no prompt)
    pub fn observe_input(&mut self, input: &str) -> Observation {
        let trimmed = input.trim();
        if trimmed == self.last_line {
            return Observation::Unchanged;
        }
        self.last_line = trimmed.to_string();
        Observation::Changed(self.last_line.clone())
    }

    pub fn reset(&mut self) {
        self.last_line.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["$ ".to_string(), "# ".to_string(), "% ".to_string()]
    }

    #[test]
    fn test_extract_input_strips_prompt() {
        assert_eq!(extract_input("user@host:~$ ls -la", &markers()), "ls -la");
        assert_eq!(extract_input("root@host:/# rm x", &markers()), "rm x");
        assert_eq!(extract_input("host% pwd", &markers()), "pwd");
    }

    #[test]
    fn test_extract_input_uses_earliest_marker() {
        assert_eq!(
            extract_input("user@host:~$ echo '# not a prompt'", &markers()),
            "echo '# not a prompt'"
        );
    }

    #[test]
    fn test_extract_input_bare_prompt_is_empty() {
        assert_eq!(extract_input("user@host:~$", &markers()), "");
        assert_eq!(extract_input("user@host:~$ ", &markers()), "");
    }

    #[test]
    fn test_extract_input_without_marker_keeps_line() {
        assert_eq!(extract_input("ls -la", &markers()), "ls -la");
        assert_eq!(extract_input("ls -la", &[]), "ls -la");
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("  ls   -la "), Some("ls"));
        assert_eq!(first_token("   "), None);
    }

    #[test]
    fn test_observe_reports_changes_only() {
        let mut tracker = LineTracker::new(markers());
        assert_eq!(
            tracker.observe_cursor_line("$ ls"),
            Observation::Changed("ls".to_string())
        );
        assert_eq!(tracker.observe_cursor_line("$ ls  "), Observation::Unchanged);
        assert_eq!(
            tracker.observe_input("pwd"),
            Observation::Changed("pwd".to_string())
        );
        tracker.reset();
        assert_eq!(tracker.last_line(), "");
        assert_eq!(tracker.observe_cursor_line("$ "), Observation::Unchanged);
    }
}
