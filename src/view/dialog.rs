/// A paged battle message.
///
/// The dialog is `Active` while a page is on screen and turns `Over` when the last
/// page is passed. Passing an `Over` dialog does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pages: Vec<String>,
    index: usize,
    over: bool,
}

impl Dialog {
    /// Builds a dialog from ready-made pages. Without pages it starts `Over`.
    pub fn from_pages(pages: Vec<String>) -> Self {
        let over = pages.is_empty();
        Self {
            pages,
            index: 0,
            over,
        }
    }

    /// Word-wraps `text` into lines of at most `line_width` characters and groups
    /// them `lines_per_page` at a time. A `\n` in the text forces a line break.
    pub fn from_text(text: &str, line_width: usize, lines_per_page: usize) -> Self {
        let lines = wrap(text, line_width.max(1));
        let pages = lines
            .chunks(lines_per_page.max(1))
            .map(|chunk| chunk.join("\n"))
            .collect();
        Self::from_pages(pages)
    }

    pub fn pass(&mut self) {
        if self.over {
            return;
        }
        if self.index + 1 < self.pages.len() {
            self.index += 1;
        } else {
            self.over = true;
        }
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The page on screen, `None` once the dialog is over.
    pub fn current_page(&self) -> Option<&str> {
        if self.over {
            None
        } else {
            self.pages.get(self.index).map(String::as_str)
        }
    }

    pub fn page_index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether passing shows another page rather than closing the dialog.
    pub fn has_next_page(&self) -> bool {
        !self.over && self.index + 1 < self.pages.len()
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            // Hard-split words that cannot fit on any line.
            while word.len() > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let line_len = line.chars().count();
            if line_len > 0 && line_len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pages(texts: &[&str]) -> Dialog {
        Dialog::from_pages(texts.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_pass_walks_pages_then_closes() {
        let mut dialog = pages(&["one", "two"]);
        assert_eq!(dialog.current_page(), Some("one"));
        assert!(dialog.has_next_page());

        dialog.pass();
        assert_eq!(dialog.current_page(), Some("two"));
        assert!(!dialog.has_next_page());
        assert!(!dialog.is_over());

        dialog.pass();
        assert!(dialog.is_over());
        assert_eq!(dialog.current_page(), None);
    }

    #[test]
    fn test_pass_after_over_is_idempotent() {
        let mut dialog = pages(&["only"]);
        dialog.pass();
        let snapshot = dialog.clone();

        dialog.pass();
        dialog.pass();
        assert_eq!(dialog, snapshot);
        assert_eq!(dialog.page_index(), 0);
    }

    #[test]
    fn test_empty_dialog_starts_over() {
        let dialog = Dialog::from_text("   ", 10, 2);
        assert!(dialog.is_over());
        assert_eq!(dialog.page_count(), 0);
    }

    #[test]
    fn test_text_is_wrapped_and_paged() {
        let dialog = Dialog::from_text("Sparky used Thunder Shock!\nIt's super effective!", 12, 2);
        assert_eq!(dialog.page_count(), 3);
        assert_eq!(dialog.current_page(), Some("Sparky used\nThunder"));
    }

    #[test]
    fn test_long_words_are_hard_split() {
        let lines = wrap("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }
}
