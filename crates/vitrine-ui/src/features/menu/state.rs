//! Mobile navigation content and the pure logic behind the collapsible menu.

use crate::core::routes::Route;
use std::collections::BTreeSet;

/// Where a menu entry leads when tapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuTarget {
    /// An in-app route served by the router.
    Route(Route),
    /// An href outside the routed app (catalog pages, mailto).
    External(&'static str),
}

/// A single tappable menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// Visible label.
    pub label: &'static str,
    /// Navigation target.
    pub target: MenuTarget,
}

/// A titled, collapsible group of menu entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSection {
    /// Stable key used to track the section's open state.
    pub id: &'static str,
    /// Heading shown on the section toggle.
    pub title: &'static str,
    /// Entries in display order.
    pub entries: Vec<MenuEntry>,
}

const fn entry(label: &'static str, target: MenuTarget) -> MenuEntry {
    MenuEntry { label, target }
}

/// The storefront navigation tree shown by the mobile menu.
///
/// Catalog pages are served outside the routed app, so they are external
/// hrefs; only surfaces this app owns use [`Route`] targets.
#[must_use]
pub fn menu_sections() -> Vec<MenuSection> {
    vec![
        MenuSection {
            id: "shop",
            title: "Shop",
            entries: vec![
                entry("New in", MenuTarget::External("/shop/new-in")),
                entry("Apparel", MenuTarget::External("/shop/apparel")),
                entry("Accessories", MenuTarget::External("/shop/accessories")),
                entry("Home goods", MenuTarget::External("/shop/home")),
                entry("Sale", MenuTarget::External("/shop/sale")),
            ],
        },
        MenuSection {
            id: "house",
            title: "Vitrine",
            entries: vec![
                entry("Start page", MenuTarget::Route(Route::Home)),
                entry("Journal", MenuTarget::External("/journal")),
                entry("Store finder", MenuTarget::External("/stores")),
                entry("Write to us", MenuTarget::External("mailto:hello@vitrine.shop")),
            ],
        },
    ]
}

/// Section ids expanded when the menu first opens.
#[must_use]
pub fn default_open() -> BTreeSet<&'static str> {
    BTreeSet::from(["shop"])
}

/// Toggle a section id in the open set, returning the next set.
#[must_use]
pub fn toggle_section(open: &BTreeSet<&'static str>, id: &'static str) -> BTreeSet<&'static str> {
    let mut next = open.clone();
    if !next.remove(id) {
        next.insert(id);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yew_router::Routable;

    #[test]
    fn section_ids_are_unique_and_sections_non_empty() {
        let sections = menu_sections();
        let ids: HashSet<_> = sections.iter().map(|section| section.id).collect();
        assert_eq!(ids.len(), sections.len());
        for section in &sections {
            assert!(!section.entries.is_empty(), "section {}", section.id);
        }
    }

    #[test]
    fn route_targets_resolve_and_external_targets_look_like_hrefs() {
        for section in menu_sections() {
            for entry in section.entries {
                match entry.target {
                    MenuTarget::Route(route) => {
                        let path = route.to_path();
                        assert_eq!(Route::recognize(&path), Some(route), "{}", entry.label);
                    }
                    MenuTarget::External(href) => {
                        assert!(
                            href.starts_with('/') || href.starts_with("mailto:"),
                            "{href}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn default_open_expands_an_existing_section() {
        let sections = menu_sections();
        for id in default_open() {
            assert!(sections.iter().any(|section| section.id == id), "{id}");
        }
    }

    #[test]
    fn toggling_twice_restores_the_open_set() {
        let start = default_open();
        let closed = toggle_section(&start, "shop");
        assert!(!closed.contains("shop"));
        let reopened = toggle_section(&closed, "shop");
        assert_eq!(reopened, start);
    }
}
