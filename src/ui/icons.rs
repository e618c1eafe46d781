use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

/// Kind of entry, guessed from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Folder,
    Document,
    Spreadsheet,
    Presentation,
    Image,
    Archive,
    Text,
    Other,
}

impl FileKind {
    /// Classify by extension; names without one are shown as folders
    pub fn from_name(name: &str) -> Self {
        let Some((stem, ext)) = name.rsplit_once('.') else {
            return FileKind::Folder;
        };
        if stem.is_empty() {
            // Dotfiles like ".env"
            return FileKind::Other;
        }
        match ext.to_ascii_lowercase().as_str() {
            "pdf" | "doc" | "docx" | "odt" | "rtf" => FileKind::Document,
            "xls" | "xlsx" | "csv" | "ods" => FileKind::Spreadsheet,
            "ppt" | "pptx" | "key" | "odp" => FileKind::Presentation,
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" => FileKind::Image,
            "zip" | "tar" | "gz" | "7z" | "rar" => FileKind::Archive,
            "txt" | "md" | "log" => FileKind::Text,
            _ => FileKind::Other,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub home_color: Color,
    pub folder_color: Color,
    pub file_color: Color,

    // Per-kind accents
    pub document_color: Color,
    pub spreadsheet_color: Color,
    pub presentation_color: Color,
    pub image_color: Color,
    pub archive_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            home_color: Color::Magenta,
            folder_color: Color::Blue,
            file_color: Color::Cyan,

            document_color: Color::Red,
            spreadsheet_color: Color::Green,
            presentation_color: Color::Yellow,
            image_color: Color::Magenta,
            archive_color: Color::Gray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Icon for a table row, followed by a space
    pub fn entry_icon(&self, name: &str) -> Span<'static> {
        let (emoji, nerd, color) = match FileKind::from_name(name) {
            FileKind::Folder => ("📁 ", "\u{E5FF} ", self.theme.folder_color),
            FileKind::Document => ("📄 ", "\u{F1C1} ", self.theme.document_color),
            FileKind::Spreadsheet => ("📊 ", "\u{F1C3} ", self.theme.spreadsheet_color),
            FileKind::Presentation => ("📈 ", "\u{F1C4} ", self.theme.presentation_color),
            FileKind::Image => ("📷 ", "\u{F1C5} ", self.theme.image_color),
            FileKind::Archive => ("📦 ", "\u{F1C6} ", self.theme.archive_color),
            FileKind::Text => ("📝 ", "\u{F15C} ", self.theme.file_color),
            FileKind::Other => ("📄 ", "\u{F15B} ", self.theme.file_color),
        };
        self.styled(emoji, nerd, color)
    }

    /// Home icon for the breadcrumb trail
    pub fn home_icon(&self) -> Span<'static> {
        self.styled("🏠 ", "\u{F015} ", self.theme.home_color)
    }

    fn styled(&self, emoji: &'static str, nerd: &'static str, color: Color) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        };
        Span::styled(icon, Style::default().fg(color))
    }
}
