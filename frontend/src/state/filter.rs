use std::rc::Rc;
use yew::Reducible;

use crate::data::products::{admitted_ids, FilterTag, Product, PRODUCTS};
use crate::state::carousel::Carousel;

/// Visible slice of a fixed catalog under the active filter tab.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterProjection {
    catalog: &'static [Product],
    active: Option<FilterTag>,
    visible: Vec<&'static Product>,
}

impl FilterProjection {
    pub fn new(catalog: &'static [Product]) -> Self {
        let mut projection = Self {
            catalog,
            active: None,
            visible: Vec::new(),
        };
        projection.set_filter(FilterTag::All);
        projection
    }

    pub fn active(&self) -> Option<FilterTag> {
        self.active
    }

    pub fn visible(&self) -> &[&'static Product] {
        &self.visible
    }

    pub fn set_filter(&mut self, tag: FilterTag) {
        let ids = admitted_ids(tag);
        self.visible = self
            .catalog
            .iter()
            .filter(|product| ids.contains(&product.id))
            .collect();
        self.active = Some(tag);
        log::debug!("filter -> {} ({} items)", tag.slug(), self.visible.len());
    }

    /// Like `set_filter`, but an unrecognised slug shows nothing.
    pub fn set_filter_slug(&mut self, slug: &str) {
        match FilterTag::from_slug(slug) {
            Some(tag) => self.set_filter(tag),
            None => {
                log::warn!("unknown filter tag {:?}", slug);
                self.active = None;
                self.visible.clear();
            }
        }
    }
}

/// Product section state: the filtered catalog plus the paging over it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductShelf {
    pub projection: FilterProjection,
    pub carousel: Carousel,
}

impl ProductShelf {
    pub fn new(visible_count: usize) -> Self {
        let projection = FilterProjection::new(PRODUCTS);
        let carousel = Carousel::new(projection.visible().len(), visible_count);
        Self {
            projection,
            carousel,
        }
    }

    pub fn on_screen(&self) -> &[&'static Product] {
        &self.projection.visible()[self.carousel.window()]
    }
}

/// `Filter` carries the tab's slug as rendered in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfAction {
    Filter(&'static str),
    Next,
    Prev,
    GoTo(usize),
    Resize(usize),
}

impl Reducible for ProductShelf {
    type Action = ShelfAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShelfAction::Filter(slug) => {
                next.projection.set_filter_slug(slug);
                next.carousel.reset(next.projection.visible().len());
            }
            ShelfAction::Next => next.carousel.next(),
            ShelfAction::Prev => next.carousel.prev(),
            ShelfAction::GoTo(index) => next.carousel.go_to(index),
            ShelfAction::Resize(visible_count) => next.carousel.set_visible_count(visible_count),
        }
        log::debug!("carousel index -> {}", next.carousel.index());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(projection: &FilterProjection) -> Vec<&'static str> {
        projection.visible().iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_is_the_full_catalog_in_order() {
        let mut projection = FilterProjection::new(PRODUCTS);
        projection.set_filter(FilterTag::Weapons);
        projection.set_filter(FilterTag::All);
        let catalog: Vec<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids(&projection), catalog);
    }

    #[test]
    fn weapons_is_small_arms_and_heavy_weapons() {
        let mut projection = FilterProjection::new(PRODUCTS);
        projection.set_filter_slug("weapons");
        assert_eq!(ids(&projection), vec!["small-arms", "heavy-weapons"]);
        assert_eq!(projection.active(), Some(FilterTag::Weapons));
    }

    #[test]
    fn defense_and_tech_pick_their_pairs() {
        let mut projection = FilterProjection::new(PRODUCTS);
        projection.set_filter(FilterTag::Defense);
        assert_eq!(ids(&projection), vec!["defense-systems", "tactical-equipment"]);
        projection.set_filter(FilterTag::Tech);
        assert_eq!(ids(&projection), vec!["surveillance", "secure-comms"]);
        projection.set_filter(FilterTag::Vehicles);
        assert_eq!(ids(&projection), vec!["armored-vehicles"]);
    }

    #[test]
    fn unknown_slug_fails_closed() {
        let mut projection = FilterProjection::new(PRODUCTS);
        projection.set_filter_slug("satellites");
        assert!(projection.visible().is_empty());
        assert_eq!(projection.active(), None);
    }

    #[test]
    fn unknown_slug_through_the_reducer_empties_the_shelf() {
        let shelf = Rc::new(ProductShelf::new(3))
            .reduce(ShelfAction::Next)
            .reduce(ShelfAction::Filter("satellites"));
        assert!(shelf.on_screen().is_empty());
        assert_eq!(shelf.carousel.index(), 0);
        assert!(!shelf.carousel.can_next());
        assert!(!shelf.carousel.can_prev());
    }

    #[test]
    fn filter_change_rewinds_the_carousel() {
        let shelf = Rc::new(ProductShelf::new(3));
        let shelf = shelf.reduce(ShelfAction::Next).reduce(ShelfAction::Next);
        assert_eq!(shelf.carousel.index(), 2);

        let shelf = shelf.reduce(ShelfAction::Filter("weapons"));
        assert_eq!(shelf.carousel.index(), 0);
        assert_eq!(shelf.carousel.item_count(), 2);
        assert_eq!(shelf.carousel.max_index(), 0);
    }

    #[test]
    fn resize_rewinds_the_carousel() {
        let shelf = Rc::new(ProductShelf::new(3)).reduce(ShelfAction::GoTo(4));
        assert_eq!(shelf.carousel.index(), 4);
        let shelf = shelf.reduce(ShelfAction::Resize(1));
        assert_eq!(shelf.carousel.index(), 0);
        assert_eq!(shelf.on_screen().len(), 1);
    }

    #[test]
    fn on_screen_follows_the_window() {
        let shelf = Rc::new(ProductShelf::new(1)).reduce(ShelfAction::Filter("tech"));
        let on_screen: Vec<_> = shelf.on_screen().iter().map(|p| p.id).collect();
        assert_eq!(on_screen, vec!["surveillance"]);
        let shelf = shelf.reduce(ShelfAction::Next);
        let on_screen: Vec<_> = shelf.on_screen().iter().map(|p| p.id).collect();
        assert_eq!(on_screen, vec!["secure-comms"]);
        let shelf = shelf.reduce(ShelfAction::Next);
        assert_eq!(shelf.carousel.index(), 1);
    }
}
