//! Terminal rendering of list-with-detail views
//!
//! Every command produces a [`ListView`]: top-level items, optional titled
//! sections of further items, and a message shown when there is nothing to
//! list. [`ListView::render`] flattens it into markdown for stdout.

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub title: String,
    pub subtitle: Option<String>,
    /// Markdown shown below the title
    pub detail: String,
    pub link: Option<Link>,
}

impl ListItem {
    pub fn new(title: impl Into<String>) -> Self {
        ListItem {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the subtitle; an empty string leaves it unset.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = (!subtitle.is_empty()).then_some(subtitle);
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn link(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.link = Some(Link {
            title: title.into(),
            url: url.into(),
        });
        self
    }

    fn render_into(&self, out: &mut String) {
        out.push_str(&format!("### {}\n", self.title));
        if let Some(subtitle) = &self.subtitle {
            out.push_str(&format!("*{subtitle}*\n"));
        }
        let detail = self.detail.trim();
        if !detail.is_empty() {
            out.push('\n');
            out.push_str(detail);
            out.push('\n');
        }
        if let Some(link) = &self.link {
            out.push_str(&format!("\n[{}]({})\n", link.title, link.url));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListSection {
    pub title: String,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    pub items: Vec<ListItem>,
    pub sections: Vec<ListSection>,
    /// Shown instead of the list when there are no items at all
    pub empty_message: Option<String>,
}

impl ListView {
    pub fn with_items(items: Vec<ListItem>) -> Self {
        ListView {
            items,
            ..Default::default()
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        ListView {
            empty_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Adds a titled section; sections without items are not added.
    pub fn push_section(&mut self, title: impl Into<String>, items: Vec<ListItem>) {
        if items.is_empty() {
            return;
        }
        self.sections.push(ListSection {
            title: title.into(),
            items,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.sections.iter().all(|s| s.items.is_empty())
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return self
                .empty_message
                .as_ref()
                .map(|m| format!("{m}\n"))
                .unwrap_or_default();
        }

        let mut blocks: Vec<String> = Vec::new();
        for item in &self.items {
            let mut out = String::new();
            item.render_into(&mut out);
            blocks.push(out);
        }
        for section in &self.sections {
            let mut out = format!("## {}\n", section.title);
            for (i, item) in section.items.iter().enumerate() {
                if i > 0 {
                    out.push_str("\n---\n");
                }
                out.push('\n');
                item.render_into(&mut out);
            }
            blocks.push(out);
        }
        blocks.join("\n---\n\n")
    }
}
