use crate::models::{LanguageFrequency, ProfileSummary, Repository, ViewModel};
use crate::presenter::Presenter;
use crate::theme::Theme;
use colored::*;
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::warn;

/// Delay between two cards appearing.
pub const CARD_STAGGER: Duration = Duration::from_millis(50);

pub const CHART_TITLE: &str = "Top Languages";
const CHART_WIDTH: usize = 30;
const CHART_COLORS: [(u8, u8, u8); 6] = [
    (0xFF, 0x63, 0x84),
    (0x36, 0xA2, 0xEB),
    (0xFF, 0xCE, 0x56),
    (0x4B, 0xC0, 0xC0),
    (0x99, 0x66, 0xFF),
    (0xFF, 0x9F, 0x40),
];

/// When the card at `index` should appear, counted from the first card.
pub fn card_delay(index: usize) -> Duration {
    CARD_STAGGER * index as u32
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
}

impl From<Theme> for Palette {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::BrightBlack,
            },
            Theme::Light => Palette {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::BrightBlack,
            },
        }
    }
}

enum Block {
    Text(String),
    Cards {
        header: String,
        cards: Vec<String>,
        footer: Option<String>,
    },
}

/// Writes the viewer to a terminal (or any writer). Sections rendered while
/// the content is hidden are held back until it is shown again; visible
/// sections are queued and written by [`TerminalPresenter::reveal`].
pub struct TerminalPresenter<W: Write> {
    out: W,
    palette: Palette,
    animate: bool,
    content_visible: bool,
    banner_visible: bool,
    pending: Vec<Block>,
    ready: Vec<Block>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, theme: Theme, animate: bool) -> Self {
        Self {
            out,
            palette: theme.into(),
            animate,
            content_visible: false,
            banner_visible: false,
            pending: Vec::new(),
            ready: Vec::new(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.palette = theme.into();
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_help(&mut self) {
        let lines = [
            "Type a GitHub username and press Enter to look it up.",
            "  /filter <text>  only show repositories whose name contains <text>",
            "  /filter         clear the filter",
            "  /more           show all repositories",
            "  /theme          switch between dark and light colours",
            "  /quit           exit",
        ];
        for line in lines {
            self.line(line.color(self.palette.muted).to_string());
        }
    }

    pub fn print_unknown_command(&mut self, name: &str) {
        self.line(
            format!("Unknown command /{} (try /help)", name)
                .color(self.palette.accent)
                .to_string(),
        );
        self.flush();
    }

    /// Write every queued section, staggering repository cards when animation
    /// is on. Dropping the future discards whatever has not been written yet.
    pub async fn reveal(&mut self) {
        for block in std::mem::take(&mut self.ready) {
            self.write_block(block).await;
        }
    }

    fn line(&mut self, text: String) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Failed to write output");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "Failed to flush output");
        }
    }

    fn emit(&mut self, block: Block) {
        if self.content_visible {
            self.ready.push(block);
        } else {
            self.pending.push(block);
        }
    }

    async fn write_block(&mut self, block: Block) {
        match block {
            Block::Text(text) => self.line(text),
            Block::Cards {
                header,
                cards,
                footer,
            } => {
                self.line(header);
                let start = Instant::now();
                for (index, card) in cards.into_iter().enumerate() {
                    if self.animate {
                        self.flush();
                        if let Some(wait) = card_delay(index).checked_sub(start.elapsed()) {
                            sleep(wait).await;
                        }
                    }
                    self.line(card);
                }
                if let Some(footer) = footer {
                    self.line(footer);
                }
            }
        }
        self.flush();
    }

    fn format_profile(&self, profile: &ProfileSummary) -> String {
        let p = self.palette;
        let mut lines = vec![
            format!(
                "{}  {}",
                profile.display_name().color(p.text).bold(),
                format!("@{}", profile.login).color(p.accent)
            ),
            profile.bio_or_default().italic().to_string(),
            format!(
                "{} Followers · {} Following",
                profile.followers, profile.following
            ),
        ];
        if let Some(location) = profile.location() {
            lines.push(format!("Location: {}", location));
        }
        if let Some(website) = profile.website() {
            lines.push(format!("Website: {}", website.color(p.accent)));
        }
        lines.push(format!("Joined {}", profile.joined()).color(p.muted).to_string());
        lines.push(format!("View on GitHub: {}", profile.html_url.color(p.accent)));
        lines.join("\n")
    }

    fn format_card(&self, repo: &Repository) -> String {
        let p = self.palette;
        let mut stats = Vec::new();
        if let Some(language) = &repo.language {
            stats.push(format!("● {}", language));
        }
        stats.push(format!("★ {}", repo.stargazers_count));
        stats.push(format!("⑂ {}", repo.forks_count));

        format!(
            "  {}\n    {}\n    {}\n    {}",
            repo.name.color(p.text).bold(),
            repo.description_or_default(),
            stats.join("  ").color(p.muted),
            repo.html_url.color(p.accent)
        )
    }

    fn format_chart(&self, languages: &LanguageFrequency) -> String {
        let mut slices: Vec<(&String, &u32)> = languages.iter().collect();
        slices.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let total: u32 = slices.iter().map(|(_, count)| **count).sum();
        let max = slices.first().map_or(1, |(_, count)| **count).max(1);
        let label_width = slices.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

        let mut lines = vec![CHART_TITLE.color(self.palette.text).bold().to_string()];
        for (index, (label, count)) in slices.iter().enumerate() {
            let (r, g, b) = CHART_COLORS[index % CHART_COLORS.len()];
            let width = ((**count as usize * CHART_WIDTH) / max as usize).max(1);
            let percent = **count as f64 * 100.0 / total as f64;
            lines.push(format!(
                "  {:<label_width$}  {} {} ({:.1}%)",
                label,
                "█".repeat(width).truecolor(r, g, b),
                count,
                percent,
            ));
        }
        lines.join("\n")
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.line("Loading...".color(self.palette.muted).to_string());
        }
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
        if visible {
            self.ready.append(&mut self.pending);
        } else {
            self.pending.clear();
            self.ready.clear();
        }
    }

    fn set_idle_banner_visible(&mut self, visible: bool) {
        if visible && !self.banner_visible {
            self.line(
                "Enter a GitHub username to explore a profile (/help for commands)."
                    .color(self.palette.muted)
                    .to_string(),
            );
        }
        self.banner_visible = visible;
    }

    fn render_profile(&mut self, profile: &ProfileSummary) {
        let text = self.format_profile(profile);
        self.emit(Block::Text(text));
    }

    fn render_repositories(&mut self, view: &ViewModel) {
        let header = format!("Repositories ({})", view.total_count)
            .color(self.palette.text)
            .bold()
            .to_string();

        if view.is_empty() {
            self.emit(Block::Cards {
                header,
                cards: Vec::new(),
                footer: Some(
                    "No public repositories found."
                        .color(self.palette.muted)
                        .to_string(),
                ),
            });
            return;
        }

        let cards = view.visible.iter().map(|repo| self.format_card(repo)).collect();
        let footer = view.show_expand_control.then(|| {
            format!(
                "See More Repositories ({} more) - type /more",
                view.remaining_count
            )
            .color(self.palette.accent)
            .to_string()
        });
        self.emit(Block::Cards {
            header,
            cards,
            footer,
        });
    }

    fn render_chart(&mut self, languages: &LanguageFrequency) {
        if languages.is_empty() {
            return;
        }
        let text = self.format_chart(languages);
        self.emit(Block::Text(text));
    }

    fn show_error(&mut self, message: &str) {
        self.line(format!("✖ {}", message).red().bold().to_string());
    }

    fn clear_error(&mut self) {}
}
