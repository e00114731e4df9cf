use console::style;

/// Terminal stand-in for the page's read-only command text box.
///
/// Holds display state so identical refreshes do not reprint, and renders
/// nothing while hidden.
pub struct CommandBox {
    visible: bool,
    text: String,
}

impl CommandBox {
    pub fn new() -> Self {
        Self {
            visible: false,
            text: String::new(),
        }
    }

    /// Show `text`, reprinting only when the content actually changed.
    pub fn show(&mut self, text: &str) {
        if self.visible && self.text == text {
            return;
        }
        self.visible = true;
        self.text = text.to_string();
        self.render();
    }

    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.text.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn render(&self) {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", style(&self.text).green());
        println!("{}", style("─".repeat(60)).dim());
    }
}

impl Default for CommandBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_empty() {
        let command_box = CommandBox::new();
        assert!(!command_box.is_visible());
        assert_eq!(command_box.text(), "");
    }

    #[test]
    fn show_then_hide_clears_text() {
        let mut command_box = CommandBox::new();
        command_box.show("ffmpeg -i \"url\" -c copy \"out.mp4\"");
        assert!(command_box.is_visible());
        assert_eq!(command_box.text(), "ffmpeg -i \"url\" -c copy \"out.mp4\"");

        command_box.hide();
        assert!(!command_box.is_visible());
        assert_eq!(command_box.text(), "");
    }

    #[test]
    fn identical_show_keeps_state_stable() {
        let mut command_box = CommandBox::new();
        command_box.show("same");
        command_box.show("same");
        assert_eq!(command_box.text(), "same");
    }
}
