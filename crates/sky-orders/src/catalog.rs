//! Word lists and formatters for synthetic data.
//!
//! A small fixed vocabulary keeps generated runs readable and — combined
//! with the seeded RNG — fully reproducible, which an external faker library
//! would not guarantee across versions.

use sky_core::SimRng;

pub const FIRST_NAMES: &[&str] = &[
    "Ada", "Bram", "Carys", "Diego", "Esther", "Femke", "Gustav", "Hana",
    "Imran", "Jolanda", "Kenji", "Lena", "Mateo", "Nadia", "Olu", "Priya",
    "Quentin", "Rosa", "Sven", "Tindra", "Umar", "Vera", "Wim", "Yusuf", "Zofia",
];

pub const LAST_NAMES: &[&str] = &[
    "Andersson", "Bakker", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia",
    "Haddad", "Ivanov", "Jansen", "Kowalski", "Lindqvist", "Moreau", "Nguyen",
    "Okafor", "Petrov", "Quinn", "Rossi", "Sato", "Tanaka", "Ueda", "Visser",
    "Weber", "Yilmaz", "Zhang",
];

pub const STREETS: &[&str] = &[
    "Harbourfront Way", "Cargo Lane", "Quay Street", "Anchor Road",
    "Container Drive", "Dockside Avenue", "Freight Row", "Pier Boulevard",
    "Customs Court", "Lighthouse Terrace",
];

pub const PRODUCTS: &[&str] = &[
    "Ergonomic Steel Chair", "Rustic Wooden Table", "Sleek Cotton Shirt",
    "Incredible Granite Lamp", "Practical Wool Blanket", "Gorgeous Copper Kettle",
    "Durable Linen Curtains", "Fantastic Marble Clock", "Lightweight Bamboo Desk",
    "Refined Leather Satchel", "Aerodynamic Plastic Kayak", "Intelligent Silk Scarf",
    "Enormous Concrete Planter", "Small Aluminum Bicycle", "Heavy Duty Rubber Boots",
];

/// A random product name, e.g. `"Rustic Wooden Table"`.
pub fn product_label(rng: &mut SimRng) -> String {
    pick(rng, PRODUCTS).to_string()
}

/// A container identifier in the `CONT-########` format.
pub fn container_id(rng: &mut SimRng) -> String {
    format!("CONT-{:08}", rng.gen_range(0..100_000_000u32))
}

pub fn full_name(rng: &mut SimRng) -> (String, String) {
    (pick(rng, FIRST_NAMES).to_string(), pick(rng, LAST_NAMES).to_string())
}

pub fn email(first: &str, last: &str, rng: &mut SimRng) -> String {
    format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        rng.gen_range(1..100u32)
    )
}

pub fn phone(rng: &mut SimRng) -> String {
    format!(
        "+{} {} {:03} {:04}",
        rng.gen_range(1..99u32),
        rng.gen_range(100..999u32),
        rng.gen_range(0..1_000u32),
        rng.gen_range(0..10_000u32)
    )
}

pub fn street_address(rng: &mut SimRng) -> String {
    format!("{} {}", rng.gen_range(1..250u32), pick(rng, STREETS))
}

fn pick<'a>(rng: &mut SimRng, list: &'a [&'a str]) -> &'a str {
    // Lists are compile-time non-empty; choose only returns None on empty.
    rng.choose(list).copied().unwrap_or("")
}
