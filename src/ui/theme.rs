use std::fmt::Write;
use std::fs;

use crossterm::style::{Attribute, Color, ContentStyle};
use ratatui::style::{Color as TuiColor, Modifier, Style as TuiStyle};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "terminal-default";

/// Every way a piece of text can be painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Correct,
    Mistake,
    Cursor,
    Pending,
    RunningIndicator,
    StoppedIndicator,
    Accent,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::Correct,
        Style::Mistake,
        Style::Cursor,
        Style::Pending,
        Style::RunningIndicator,
        Style::StoppedIndicator,
        Style::Accent,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Fixed text attributes, as escape attribute and as widget modifier.
    fn attributes(self) -> &'static [(Attribute, Modifier)] {
        match self {
            Style::Correct | Style::RunningIndicator => &[],
            Style::Mistake => &[(Attribute::Underlined, Modifier::UNDERLINED)],
            Style::Cursor => &[
                (Attribute::Reverse, Modifier::REVERSED),
                (Attribute::Bold, Modifier::BOLD),
            ],
            Style::Pending | Style::StoppedIndicator | Style::Accent => {
                &[(Attribute::Dim, Modifier::DIM)]
            }
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub correct: String,
    pub mistake: String,
    pub cursor: String,
    pub pending: String,
    pub running_indicator: String,
    pub stopped_indicator: String,
    pub accent: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("typioca")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => {
                        warn!(path = %user_theme_path.display(), %err, "ignoring user theme")
                    }
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }

    #[cfg(test)]
    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }

    pub fn palette(&self) -> Palette {
        Palette::from_colors(&self.colors)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            correct: "default".to_string(),
            mistake: "1".to_string(),
            cursor: "default".to_string(),
            pending: "default".to_string(),
            running_indicator: "2".to_string(),
            stopped_indicator: "2".to_string(),
            accent: "6".to_string(),
        }
    }
}

impl ThemeColors {
    /// `#rrggbb`, an ANSI palette index, or `default` for the terminal's own
    /// foreground.
    pub fn parse_color(spec: &str) -> Color {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return Color::Rgb { r, g, b };
                }
            }
        } else if let Ok(index) = spec.parse::<u8>() {
            return Color::AnsiValue(index);
        }
        Color::Reset
    }

    fn color_for(&self, style: Style) -> &str {
        match style {
            Style::Correct => &self.correct,
            Style::Mistake => &self.mistake,
            Style::Cursor => &self.cursor,
            Style::Pending => &self.pending,
            Style::RunningIndicator => &self.running_indicator,
            Style::StoppedIndicator => &self.stopped_indicator,
            Style::Accent => &self.accent,
        }
    }
}

fn tui_color(color: Color) -> TuiColor {
    match color {
        Color::Rgb { r, g, b } => TuiColor::Rgb(r, g, b),
        Color::AnsiValue(index) => TuiColor::Indexed(index),
        _ => TuiColor::Reset,
    }
}

/// Resolved styles for each [`Style`], built once per theme: escape styles
/// for the word pipeline and widget styles for everything ratatui draws.
#[derive(Clone, Debug)]
pub struct Palette {
    styles: [ContentStyle; 7],
    widget_styles: [TuiStyle; 7],
}

impl Palette {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let styles = Style::ALL.map(|style| {
            let mut content = ContentStyle::new();
            content.foreground_color = Some(ThemeColors::parse_color(colors.color_for(style)));
            for &(attribute, _) in style.attributes() {
                content.attributes.set(attribute);
            }
            content
        });
        let widget_styles = Style::ALL.map(|style| {
            let color = tui_color(ThemeColors::parse_color(colors.color_for(style)));
            style
                .attributes()
                .iter()
                .fold(TuiStyle::default().fg(color), |acc, &(_, modifier)| {
                    acc.add_modifier(modifier)
                })
        });
        Self {
            styles,
            widget_styles,
        }
    }

    pub fn style(&self, style: Style) -> TuiStyle {
        self.widget_styles[style.index()]
    }

    pub fn paint(&self, style: Style, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 16);
        self.paint_into(&mut out, style, text);
        out
    }

    /// Appends `text` painted with `style` to `out`.
    pub fn paint_into(&self, out: &mut String, style: Style, text: &str) {
        let _ = write!(out, "{}", self.styles[style.index()].apply(text));
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_colors(&ThemeColors::default())
    }
}
