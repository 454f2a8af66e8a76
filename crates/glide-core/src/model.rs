#![forbid(unsafe_code)]

//! Static page structure: which elements are watched, and how they relate.
//!
//! A [`PageModel`] is the one-time registration of the page's watched
//! regions. It is built at startup from the structural markup and never
//! mutated afterwards; every component borrows from it read-only.

use crate::key::ContentKey;

/// The carousel: a horizontally scrollable container of cards hosted inside
/// one of the page sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselModel {
    /// Key of the section hosting the carousel.
    pub section: ContentKey,
    /// Key of the scrollable container element.
    pub container: ContentKey,
    /// Card keys in document order.
    pub cards: Vec<ContentKey>,
}

impl CarouselModel {
    /// Create a carousel model.
    pub fn new(
        section: impl Into<ContentKey>,
        container: impl Into<ContentKey>,
        cards: Vec<ContentKey>,
    ) -> Self {
        Self {
            section: section.into(),
            container: container.into(),
            cards,
        }
    }

    /// The first card in document order, if any.
    pub fn first_card(&self) -> Option<&ContentKey> {
        self.cards.first()
    }
}

/// One navigation entry: the section it scrolls to and the nav element the
/// indicator pill aligns with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Section key this entry activates for.
    pub section: ContentKey,
    /// Key of the nav link element itself.
    pub element: ContentKey,
}

impl NavEntry {
    /// Create a nav entry.
    pub fn new(section: impl Into<ContentKey>, element: impl Into<ContentKey>) -> Self {
        Self {
            section: section.into(),
            element: element.into(),
        }
    }
}

/// The watched structure of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    sections: Vec<ContentKey>,
    carousel: CarouselModel,
    nav: Vec<NavEntry>,
    nav_bar: Option<ContentKey>,
    reveals: Vec<ContentKey>,
}

impl PageModel {
    /// Create a page model from the top-level sections (document order) and
    /// the carousel description.
    pub fn new(sections: Vec<ContentKey>, carousel: CarouselModel) -> Self {
        Self {
            sections,
            carousel,
            nav: Vec::new(),
            nav_bar: None,
            reveals: Vec::new(),
        }
    }

    /// Attach navigation entries (builder pattern).
    #[must_use]
    pub fn nav(mut self, entries: Vec<NavEntry>) -> Self {
        self.nav = entries;
        self
    }

    /// Name the nav bar element the indicator pill offsets against
    /// (builder pattern).
    #[must_use]
    pub fn nav_bar(mut self, key: impl Into<ContentKey>) -> Self {
        self.nav_bar = Some(key.into());
        self
    }

    /// Attach reveal-on-scroll targets (builder pattern).
    #[must_use]
    pub fn reveals(mut self, keys: Vec<ContentKey>) -> Self {
        self.reveals = keys;
        self
    }

    /// Section keys in document order.
    pub fn sections(&self) -> &[ContentKey] {
        &self.sections
    }

    /// The carousel description.
    pub fn carousel(&self) -> &CarouselModel {
        &self.carousel
    }

    /// Navigation entries.
    pub fn nav_entries(&self) -> &[NavEntry] {
        &self.nav
    }

    /// The nav bar element, when one is registered.
    pub fn nav_bar_element(&self) -> Option<&ContentKey> {
        self.nav_bar.as_ref()
    }

    /// Reveal-on-scroll target keys.
    pub fn reveal_targets(&self) -> &[ContentKey] {
        &self.reveals
    }

    /// Whether `key` names the carousel-hosting section.
    pub fn is_carousel_section(&self, key: &ContentKey) -> bool {
        self.carousel.section == *key
    }

    /// The nav element aligned with `section`, if the section has an entry.
    pub fn nav_element_for(&self, section: &ContentKey) -> Option<&ContentKey> {
        self.nav
            .iter()
            .find(|e| e.section == *section)
            .map(|e| &e.element)
    }
}
