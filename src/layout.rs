//! Lays the portfolio out as one long column of terminal lines.
//!
//! Layout is where anchors get measured: the row at which each section's heading lands is
//! recorded as that section's anchor. Sections with nothing to show are left out of the document
//! entirely, and so have no anchor.

use crate::content::{Content, Post, Project};
use crate::registry::SectionRegistry;
use crate::section::{SectionDescriptor, SectionId};
use crate::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashMap;

/// Narrowest width text is wrapped to.
const MIN_WIDTH: usize = 20;
/// Widest a skill bar gets.
const MAX_BAR_WIDTH: usize = 40;

/// The laid-out document and the anchor row of every section in it.
pub struct DocumentLayout {
    /// Document rows, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// Row of each emitted section's heading.
    pub anchors: HashMap<SectionId, u32>,
}

impl DocumentLayout {
    #[must_use]
    /// Lays out `content` at `width` columns in registry order.
    pub fn build(
        content: &Content,
        registry: &SectionRegistry,
        width: u16,
        palette: &Palette,
    ) -> Self {
        let mut writer = Writer {
            lines: Vec::new(),
            width: usize::from(width).max(MIN_WIDTH),
            palette: *palette,
        };
        let mut anchors = HashMap::new();

        for section in registry.iter() {
            let anchor = writer.row();
            let title = heading_title(section);
            let emitted = match section.identifier.as_str() {
                "home" => writer.hero(content),
                "about" => writer.about(content, title),
                "skills" => writer.skills(content, title),
                "projects" => writer.projects(&content.projects, title),
                "blog" => writer.blog(&content.posts, title),
                "contact" => writer.contact(content, title),
                _ => false,
            };
            if emitted {
                anchors.insert(section.identifier.clone(), anchor);
                writer.blank();
            } else {
                tracing::debug!(section = %section.identifier, "section has no content, not laid out");
            }
        }
        writer.footer(content);

        Self {
            lines: writer.lines,
            anchors,
        }
    }

    #[must_use]
    /// Total rows in the document.
    pub fn height(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }
}

struct Writer {
    lines: Vec<Line<'static>>,
    width: usize,
    palette: Palette,
}

impl Writer {
    fn row(&self) -> u32 {
        u32::try_from(self.lines.len()).unwrap_or(u32::MAX)
    }

    fn text(&self) -> Style {
        Style::default().fg(self.palette.foreground)
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    fn strong(&self) -> Style {
        Style::default()
            .fg(self.palette.foreground)
            .add_modifier(Modifier::BOLD)
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, label: &str) {
        self.lines.push(Line::styled(
            label.to_string(),
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ));
        self.blank();
    }

    fn paragraph(&mut self, text: &str, indent: &str, style: Style) {
        let options = textwrap::Options::new(self.width)
            .initial_indent(indent)
            .subsequent_indent(indent);
        for row in textwrap::wrap(text, options) {
            self.lines.push(Line::styled(row.into_owned(), style));
        }
    }

    fn centred(&mut self, text: &str, style: Style) {
        let pad = self.width.saturating_sub(text.chars().count()) / 2;
        self.lines
            .push(Line::styled(format!("{}{text}", " ".repeat(pad)), style));
    }

    fn hero(&mut self, content: &Content) -> bool {
        self.blank();
        self.centred(&content.profile.name, self.strong());
        self.centred(&content.profile.tagline, self.muted());
        self.blank();
        self.centred(
            "[ View My Work (w) ]",
            Style::default().fg(self.palette.primary),
        );
        self.blank();
        true
    }

    fn about(&mut self, content: &Content, label: &str) -> bool {
        let profile = &content.profile;
        if profile.about.is_empty() && profile.facts.is_empty() {
            return false;
        }
        self.heading(label);
        for paragraph in &profile.about {
            self.paragraph(paragraph, "", self.text());
            self.blank();
        }
        if !profile.facts.is_empty() {
            self.lines.push(Line::styled("Quick Facts", self.strong()));
            for fact in &profile.facts {
                self.paragraph(fact, "  • ", self.text());
            }
        }
        true
    }

    fn skills(&mut self, content: &Content, label: &str) -> bool {
        if content.skills.is_empty() {
            return false;
        }
        self.heading(label);
        let name_width = content
            .skills
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);
        let bar_width = self
            .width
            .saturating_sub(name_width + 7)
            .clamp(1, MAX_BAR_WIDTH);
        for skill in &content.skills {
            let level = usize::from(skill.level.min(100));
            let filled = level * bar_width / 100;
            self.lines.push(Line::from(vec![
                Span::styled(format!("{:<name_width$} ", skill.name), self.strong()),
                Span::styled("█".repeat(filled), Style::default().fg(self.palette.primary)),
                Span::styled("░".repeat(bar_width - filled), self.muted()),
                Span::styled(format!(" {level:>3}%"), self.text()),
            ]));
        }
        true
    }

    fn card_title(&mut self, title: &str) {
        self.lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(self.palette.primary)),
            Span::styled(title.to_string(), self.strong()),
        ]));
    }

    fn projects(&mut self, projects: &[Project], label: &str) -> bool {
        if projects.is_empty() {
            return false;
        }
        self.heading(label);
        for project in projects {
            self.card_title(&project.title);
            self.paragraph(&project.description, "▌ ", self.text());
            self.paragraph(&format!("[image: {}]", project.image_ref), "▌ ", self.muted());
            self.paragraph(&format!("GitHub: {}", project.repository_link), "▌ ", self.muted());
            self.paragraph(&format!("Live Demo: {}", project.demo_link), "▌ ", self.muted());
            self.blank();
        }
        true
    }

    fn blog(&mut self, posts: &[Post], label: &str) -> bool {
        if posts.is_empty() {
            return false;
        }
        self.heading(label);
        for post in posts {
            self.card_title(&post.title);
            self.paragraph(&post.date, "▌ ", self.muted());
            self.paragraph(&post.excerpt, "▌ ", self.text());
            self.paragraph(&format!("Read More: {}", post.link), "▌ ", self.muted());
            self.blank();
        }
        true
    }

    fn contact(&mut self, content: &Content, label: &str) -> bool {
        let contact = &content.contact;
        self.heading(label);

        self.card_title("Contact Form");
        self.paragraph(
            "Send me a message and I'll get back to you as soon as possible.",
            "▌ ",
            self.muted(),
        );
        for (field, placeholder) in [
            ("Name", "Your Name"),
            ("Email", "your@email.com"),
            ("Message", "Your message here..."),
        ] {
            self.paragraph(&format!("{field:<8}[ {placeholder} ]"), "▌ ", self.text());
        }
        self.paragraph("[ Send Message ]", "▌ ", Style::default().fg(self.palette.primary));
        self.blank();

        self.card_title("Contact Information");
        self.paragraph(&format!("Email: {}", contact.email), "▌ ", self.text());
        self.paragraph(&format!("Phone: {}", contact.phone), "▌ ", self.text());
        self.paragraph(&format!("Location: {}", contact.location), "▌ ", self.text());
        for link in &contact.links {
            self.paragraph(link, "▌ ", self.muted());
        }
        true
    }

    fn footer(&mut self, content: &Content) {
        self.centred(
            &format!("© {}. All rights reserved.", content.profile.name),
            self.muted(),
        );
        for link in &content.contact.links {
            self.centred(link, self.muted());
        }
    }
}

/// Heading printed above a section; a few read longer than their navigation label.
fn heading_title(section: &SectionDescriptor) -> &str {
    match section.identifier.as_str() {
        "about" => "About Me",
        "contact" => "Get in Touch",
        _ => &section.label,
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
