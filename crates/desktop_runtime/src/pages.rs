//! Static page table used to resolve page identifiers into window configurations.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::model::{WindowConfig, WindowId};

/// Pages that render inside a desktop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentPage {
    About,
    Projects,
    Resume,
    Contact,
    Guestbook,
}

/// Any addressable page. `Home` is the desktop background and never has a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Content(ContentPage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub page: ContentPage,
    pub slug: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub content_key: &'static str,
}

const PAGE_TABLE: [PageDescriptor; 5] = [
    PageDescriptor {
        page: ContentPage::About,
        slug: "about",
        title: "About Me",
        icon: "user",
        content_key: "about",
    },
    PageDescriptor {
        page: ContentPage::Projects,
        slug: "projects",
        title: "Projects",
        icon: "folder",
        content_key: "projects",
    },
    PageDescriptor {
        page: ContentPage::Resume,
        slug: "resume",
        title: "Resume",
        icon: "document",
        content_key: "resume",
    },
    PageDescriptor {
        page: ContentPage::Contact,
        slug: "contact",
        title: "Contact",
        icon: "mail",
        content_key: "contact",
    },
    PageDescriptor {
        page: ContentPage::Guestbook,
        slug: "guestbook",
        title: "Guestbook",
        icon: "book",
        content_key: "guestbook",
    },
];

pub fn page_table() -> &'static [PageDescriptor] {
    &PAGE_TABLE
}

impl ContentPage {
    pub fn descriptor(self) -> &'static PageDescriptor {
        // every variant has exactly one table row
        match self {
            Self::About => &PAGE_TABLE[0],
            Self::Projects => &PAGE_TABLE[1],
            Self::Resume => &PAGE_TABLE[2],
            Self::Contact => &PAGE_TABLE[3],
            Self::Guestbook => &PAGE_TABLE[4],
        }
    }

    pub fn slug(self) -> &'static str {
        self.descriptor().slug
    }

    pub fn window_id(self) -> WindowId {
        WindowId::new(self.slug())
    }

    /// Window configuration opened for this page.
    pub fn window_config(self) -> WindowConfig {
        let descriptor = self.descriptor();
        WindowConfig::new(descriptor.slug)
            .with_title(descriptor.title)
            .with_icon(descriptor.icon)
            .with_content_key(descriptor.content_key)
    }

    /// Resolves a window id back to the page whose window carries it.
    pub fn from_window_id(id: &WindowId) -> Option<Self> {
        page_table()
            .iter()
            .find(|entry| entry.slug == id.as_str())
            .map(|entry| entry.page)
    }
}

impl fmt::Display for ContentPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized == "home" {
            return Ok(Self::Home);
        }
        page_table()
            .iter()
            .find(|entry| entry.slug == normalized)
            .map(|entry| Self::Content(entry.page))
            .ok_or_else(|| UnknownPage(raw.to_string()))
    }
}
