use crate::battle::animation::SpriteTransform;
use schema::Actor;

const HP_BAR_WIDTH: usize = 10;

/// What an info box shows for one side.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoBox<'a> {
    pub name: &'a str,
    pub level: u8,
    pub hp: i32,
    pub max_hp: i32,
}

/// One line of a menu. `detail` is the PP counter on the attack menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub label: String,
    pub detail: Option<String>,
}

impl MenuEntry {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail.into()),
        }
    }
}

/// A render target for one frame of the battle scene.
pub trait Frame {
    fn clear(&mut self);
    fn draw_background(&mut self, background: &str);
    /// The opposing trainer's label.
    fn draw_trainer(&mut self, label: &str);
    fn draw_unit(&mut self, side: Actor, species: &str, transform: &SpriteTransform);
    fn draw_info_box(&mut self, side: Actor, info: &InfoBox<'_>);
    fn draw_menu(&mut self, entries: &[MenuEntry], cursor: usize);
    fn draw_caption(&mut self, text: &str);
    /// `more` is set when further pages follow the one shown.
    fn draw_dialog(&mut self, text: &str, more: bool);
}

/// Headless frame that records every draw call as a line of text.
#[derive(Debug, Default, Clone)]
pub struct TextFrame {
    lines: Vec<String>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

fn hp_bar(hp: i32, max_hp: i32) -> String {
    let filled = if max_hp <= 0 {
        0
    } else {
        let ratio = hp.clamp(0, max_hp) as f32 / max_hp as f32;
        (ratio * HP_BAR_WIDTH as f32).ceil() as usize
    };
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(HP_BAR_WIDTH - filled)
    )
}

impl Frame for TextFrame {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn draw_background(&mut self, background: &str) {
        self.lines.push(format!("~ {} ~", background));
    }

    fn draw_trainer(&mut self, label: &str) {
        self.lines.push(format!("[trainer] {}", label));
    }

    fn draw_unit(&mut self, side: Actor, species: &str, transform: &SpriteTransform) {
        self.lines.push(format!(
            "{:<8} {} @ ({:.1}, {:.1})",
            side.to_string(),
            species,
            transform.x,
            transform.y
        ));
    }

    fn draw_info_box(&mut self, side: Actor, info: &InfoBox<'_>) {
        self.lines.push(format!(
            "{:<8} {} Lv{} {} {}/{}",
            side.to_string(),
            info.name,
            info.level,
            hp_bar(info.hp, info.max_hp),
            info.hp,
            info.max_hp
        ));
    }

    fn draw_menu(&mut self, entries: &[MenuEntry], cursor: usize) {
        for (i, entry) in entries.iter().enumerate() {
            let marker = if i == cursor { '>' } else { ' ' };
            match &entry.detail {
                Some(detail) => self
                    .lines
                    .push(format!("{} {:<14} {}", marker, entry.label, detail)),
                None => self.lines.push(format!("{} {}", marker, entry.label)),
            }
        }
    }

    fn draw_caption(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn draw_dialog(&mut self, text: &str, more: bool) {
        for line in text.lines() {
            self.lines.push(format!("| {}", line));
        }
        if more {
            self.lines.push("| v".to_string());
        }
    }
}
