/// One product category shown as a card in the products carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub photo: &'static str,
}

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "small-arms",
        name: "נשק קל",
        summary: "מגוון רחב של נשק קל לשימוש כוחות ביטחון וצבא, כולל אקדחים, רובים ומקלעים",
        photo: "photo-1584483766114-2cea6facdf57",
    },
    Product {
        id: "heavy-weapons",
        name: "נשק כבד",
        summary: "מערכות נשק כבדות לשימוש צבאי, כולל תותחים, מרגמות ומערכות רקטות",
        photo: "photo-1595075614152-d9d0838d3fbf",
    },
    Product {
        id: "defense-systems",
        name: "מערכות הגנה",
        summary: "פתרונות הגנה מתקדמים לאבטחת מתקנים, גבולות ותשתיות קריטיות",
        photo: "photo-1576677879650-8db4aaaeb99c",
    },
    Product {
        id: "tactical-equipment",
        name: "ציוד טקטי",
        summary: "ציוד מקצועי לכוחות מיוחדים, כולל אפודים, קסדות וציוד לחימה מתקדם",
        photo: "photo-1542549237432-a176cb9d5e5e",
    },
    Product {
        id: "surveillance",
        name: "טכנולוגיות מעקב ובקרה",
        summary: "מערכות מעקב מתקדמות לאיסוף מודיעין, ניטור ואבטחת מידע",
        photo: "photo-1563976983419-7063da8f1186",
    },
    Product {
        id: "armored-vehicles",
        name: "רכבים משוריינים",
        summary: "רכבים משוריינים לשימוש צבאי ואבטחה, מותאמים לפעילות בתנאי שטח מאתגרים",
        photo: "photo-1579912437766-7896df6d3cd3",
    },
    Product {
        id: "secure-comms",
        name: "מערכות תקשורת מאובטחות",
        summary: "פתרונות תקשורת מאובטחים לשימוש צבאי וממשלתי, עמידים בפני האזנות וחסימות",
        photo: "photo-1563770660941-10a2b3654e41",
    },
];

/// Filter tabs offered above the product carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    All,
    Weapons,
    Defense,
    Vehicles,
    Tech,
}

impl FilterTag {
    pub const TABS: [FilterTag; 5] = [
        FilterTag::All,
        FilterTag::Weapons,
        FilterTag::Defense,
        FilterTag::Vehicles,
        FilterTag::Tech,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            FilterTag::All => "all",
            FilterTag::Weapons => "weapons",
            FilterTag::Defense => "defense",
            FilterTag::Vehicles => "vehicles",
            FilterTag::Tech => "tech",
        }
    }

    pub fn from_slug(slug: &str) -> Option<FilterTag> {
        Self::TABS.into_iter().find(|tag| tag.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::All => "הכל",
            FilterTag::Weapons => "נשק",
            FilterTag::Defense => "הגנה",
            FilterTag::Vehicles => "רכבים",
            FilterTag::Tech => "טכנולוגיה",
        }
    }
}

/// Which product ids each filter tab admits.
pub static FILTER_MAP: &[(FilterTag, &[&str])] = &[
    (
        FilterTag::All,
        &[
            "small-arms",
            "heavy-weapons",
            "defense-systems",
            "tactical-equipment",
            "surveillance",
            "armored-vehicles",
            "secure-comms",
        ],
    ),
    (FilterTag::Weapons, &["small-arms", "heavy-weapons"]),
    (FilterTag::Defense, &["defense-systems", "tactical-equipment"]),
    (FilterTag::Vehicles, &["armored-vehicles"]),
    (FilterTag::Tech, &["surveillance", "secure-comms"]),
];

pub fn admitted_ids(tag: FilterTag) -> &'static [&'static str] {
    FILTER_MAP
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, ids)| *ids)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn product_ids_are_unique() {
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
        assert_eq!(PRODUCTS.len(), 7);
    }

    #[test]
    fn all_admits_the_whole_catalog() {
        let all: HashSet<_> = admitted_ids(FilterTag::All).iter().copied().collect();
        let catalog: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(all, catalog);
    }

    #[test]
    fn every_tab_is_a_subset_of_the_catalog() {
        let catalog: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        for tag in FilterTag::TABS {
            assert!(
                admitted_ids(tag).iter().all(|id| catalog.contains(id)),
                "{:?} admits an unknown id",
                tag
            );
        }
    }

    #[test]
    fn narrower_tabs_partition_the_catalog() {
        let mut seen = HashSet::new();
        for tag in FilterTag::TABS.into_iter().filter(|t| *t != FilterTag::All) {
            assert!(!admitted_ids(tag).is_empty(), "{:?} has no products", tag);
            for id in admitted_ids(tag) {
                assert!(seen.insert(*id), "{} sits under two tabs", id);
            }
        }
        assert_eq!(seen.len(), PRODUCTS.len());
    }

    #[test]
    fn slugs_round_trip() {
        for tag in FilterTag::TABS {
            assert_eq!(FilterTag::from_slug(tag.slug()), Some(tag));
        }
        assert_eq!(FilterTag::from_slug("drones"), None);
    }
}
