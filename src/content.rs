//! Page content as plain configuration tables.
//!
//! Everything the sections render — nav links, categories, products, trust
//! features, store info — lives here as static tables, so copy changes never
//! touch view code.

use crate::icons::Glyph;

/// In-page anchors, one per section, in page order.
pub static SECTION_IDS: [&str; 5] = ["home", "collections", "products", "about", "location"];

pub struct NavLink {
    pub label: &'static str,
    /// Bare section id; rendered as `#{anchor}`. Must match one entry of
    /// [`SECTION_IDS`].
    pub anchor: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", anchor: "home" },
    NavLink { label: "Collections", anchor: "collections" },
    NavLink { label: "Products", anchor: "products" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Location", anchor: "location" },
];

pub struct Category {
    pub title: &'static str,
    pub icon: &'static str,
    pub count: &'static str,
    pub gradient: &'static str,
    /// Background of the arrow chip in the card corner.
    pub accent: &'static str,
}

pub static CATEGORIES: [Category; 4] = [
    Category {
        title: "Educational",
        icon: "🧩",
        count: "120+ Items",
        gradient: "linear-gradient(135deg, #FF6B35, #FF006E)",
        accent: "#FF6B35",
    },
    Category {
        title: "Action Figures",
        icon: "🦸",
        count: "85+ Items",
        gradient: "linear-gradient(135deg, #3A86FF, #8338EC)",
        accent: "#3A86FF",
    },
    Category {
        title: "Dolls & Playsets",
        icon: "🏠",
        count: "95+ Items",
        gradient: "linear-gradient(135deg, #06D6A0, #00B4D8)",
        accent: "#06D6A0",
    },
    Category {
        title: "Remote Control",
        icon: "🏎️",
        count: "60+ Items",
        gradient: "linear-gradient(135deg, #FFD166, #FF6B35)",
        accent: "#FFD166",
    },
];

pub struct Product {
    pub title: &'static str,
    pub price: &'static str,
    pub tag: &'static str,
    pub tag_color: &'static str,
    /// Shown next to the star row. The row itself always draws five filled
    /// stars; see `STARS_PER_CARD` in the featured section.
    pub rating: f64,
    pub image: &'static str,
    pub alt: &'static str,
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        title: "LEGO Classic Creative Box",
        price: "Rp 450.000",
        tag: "Best Seller",
        tag_color: "#FF6B35",
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1587654780291-39c9404d7dd0?auto=format&fit=crop&q=80&w=600",
        alt: "Colorful LEGO bricks spread on a table",
    },
    Product {
        title: "Wooden Train Set Premium",
        price: "Rp 380.000",
        tag: "New",
        tag_color: "#8338EC",
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1596461404969-9ae70f2830c1?auto=format&fit=crop&q=80&w=600",
        alt: "Wooden toy train on a winding track",
    },
    Product {
        title: "RC Monster Truck 4x4",
        price: "Rp 520.000",
        tag: "Popular",
        tag_color: "#06D6A0",
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1558060370-d644479cb6f7?auto=format&fit=crop&q=80&w=600",
        alt: "Remote-controlled monster truck with oversized wheels",
    },
];

pub struct TrustFeature {
    pub glyph: Glyph,
    pub title: &'static str,
    pub desc: &'static str,
    pub gradient: &'static str,
}

pub static TRUST_FEATURES: [TrustFeature; 3] = [
    TrustFeature {
        glyph: Glyph::Shield,
        title: "Safe & Certified",
        desc: "Semua mainan kami bersertifikat SNI dan aman untuk anak-anak.",
        gradient: "linear-gradient(135deg, #FF6B35, #FF006E)",
    },
    TrustFeature {
        glyph: Glyph::Award,
        title: "Best Quality",
        desc: "Kami hanya menjual produk berkualitas dari brand terpercaya.",
        gradient: "linear-gradient(135deg, #3A86FF, #8338EC)",
    },
    TrustFeature {
        glyph: Glyph::Truck,
        title: "Fast Delivery",
        desc: "Pengiriman cepat ke seluruh area Medan dan sekitarnya.",
        gradient: "linear-gradient(135deg, #06D6A0, #00B4D8)",
    },
];

pub struct LocationInfo {
    pub glyph: Glyph,
    pub title: &'static str,
    pub lines: [&'static str; 2],
    pub icon_bg: &'static str,
    pub accent: &'static str,
}

pub static LOCATION_INFO: [LocationInfo; 3] = [
    LocationInfo {
        glyph: Glyph::MapPin,
        title: "Alamat",
        lines: ["Jl. Karya Jaya, Medan Johor,", "Kota Medan, Sumatera Utara"],
        icon_bg: "linear-gradient(135deg, rgba(255, 209, 102, 0.2), rgba(255, 107, 53, 0.15))",
        accent: "#FFD166",
    },
    LocationInfo {
        glyph: Glyph::Phone,
        title: "Kontak",
        lines: ["+62 821-xxxx-xxxx", "hello@indrasakti.com"],
        icon_bg: "linear-gradient(135deg, rgba(6, 214, 160, 0.2), rgba(0, 180, 216, 0.15))",
        accent: "#06D6A0",
    },
    LocationInfo {
        glyph: Glyph::Clock,
        title: "Jam Buka",
        lines: ["Senin – Sabtu: 09.00 – 21.00", "Minggu: 10.00 – 20.00"],
        icon_bg: "linear-gradient(135deg, rgba(131, 56, 236, 0.2), rgba(255, 0, 110, 0.15))",
        accent: "#8338EC",
    },
];

pub struct HeroStat {
    pub number: &'static str,
    pub label: &'static str,
}

pub static HERO_STATS: [HeroStat; 3] = [
    HeroStat { number: "2K+", label: "Products" },
    HeroStat { number: "10K+", label: "Customers" },
    HeroStat { number: "4.9", label: "Rating ⭐" },
];

pub struct FloatingCard {
    pub glyph: Glyph,
    pub title: &'static str,
    pub value: &'static str,
    pub icon_bg: &'static str,
    /// Positioning + oscillation class, defined in styles.css.
    pub class: &'static str,
}

pub static FLOATING_CARDS: [FloatingCard; 2] = [
    FloatingCard {
        glyph: Glyph::Star,
        title: "Top Rated",
        value: "Family Choice 🏆",
        icon_bg: "linear-gradient(135deg, #06D6A0, #00B4D8)",
        class: "hero-floating-card top-right float-slow",
    },
    FloatingCard {
        glyph: Glyph::Gift,
        title: "New Arrivals",
        value: "Weekly Updates 🎁",
        icon_bg: "linear-gradient(135deg, #8338EC, #FF006E)",
        class: "hero-floating-card bottom-left float-fast",
    },
];

pub static HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1596461404969-9ae70f2830c1?auto=format&fit=crop&q=80&w=800";
pub static HERO_IMAGE_ALT: &str = "Shelves of colorful toys in the Indra Sakti store";

pub static ABOUT_IMAGES: [(&str, &str); 2] = [
    (
        "https://images.unsplash.com/photo-1558060370-d644479cb6f7?auto=format&fit=crop&q=80&w=500",
        "Toy shop aisle stocked with boxed sets",
    ),
    (
        "https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?auto=format&fit=crop&q=80&w=500",
        "Child playing with building blocks",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_resolve_to_exactly_one_section() {
        for link in &NAV_LINKS {
            let hits = SECTION_IDS.iter().filter(|id| **id == link.anchor).count();
            assert_eq!(hits, 1, "anchor `{}` must match one section id", link.anchor);
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(
                !SECTION_IDS[i + 1..].contains(id),
                "duplicate section id `{id}`"
            );
        }
    }

    #[test]
    fn categories_keep_declared_order() {
        let titles: Vec<_> = CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Educational", "Action Figures", "Dolls & Playsets", "Remote Control"]
        );
    }

    #[test]
    fn exactly_three_featured_products() {
        assert_eq!(PRODUCTS.len(), 3);
    }

    #[test]
    fn product_ratings_stay_in_star_range() {
        for product in &PRODUCTS {
            assert!(
                (0.0..=5.0).contains(&product.rating),
                "{} has rating {}",
                product.title,
                product.rating
            );
        }
    }

    #[test]
    fn every_image_has_alt_text() {
        for product in &PRODUCTS {
            assert!(!product.alt.is_empty(), "{} missing alt text", product.title);
        }
        assert!(!HERO_IMAGE_ALT.is_empty());
        for (_, alt) in &ABOUT_IMAGES {
            assert!(!alt.is_empty());
        }
    }
}
