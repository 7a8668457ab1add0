//! Per-product content records for the bespoke rendering units.
//!
//! One data-driven template consumes these; products without a record fall
//! back to the generic detail page. Copy and figures here are display data.

use agrisite_core::Slug;

/// One row of the application-rate table.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationRow {
    pub crop: &'static str,
    pub rate: &'static str,
    pub timing: &'static str,
}

/// The content record behind a bespoke product page: hero copy, benefit
/// grid, analysis chart rows, application table and pack sizes.
#[derive(Debug, Clone, Copy)]
pub struct ProductContent {
    pub slug: &'static str,
    pub tagline: &'static str,
    pub benefits: &'static [&'static str],
    /// (nutrient, analysis) rows, e.g. `("P2O5", "28% w/v")`.
    pub analysis: &'static [(&'static str, &'static str)],
    pub application: &'static [ApplicationRow],
    pub pack_sizes: &'static str,
}

/// Look up the bespoke content record for a product slug.
pub fn content_for(slug: &Slug) -> Option<&'static ProductContent> {
    BESPOKE.iter().find(|c| c.slug == slug.as_str())
}

/// Every product slug with a bespoke rendering unit.
pub fn bespoke_slugs() -> impl Iterator<Item = &'static str> {
    BESPOKE.iter().map(|c| c.slug)
}

pub const BESPOKE: &[ProductContent] = &[
    ProductContent {
        slug: "kickstart",
        tagline: "Get crops away fast with phosphite-driven rooting.",
        benefits: &[
            "Promotes rapid root development at establishment",
            "Improves nutrient scavenging in cold seedbeds",
            "Tank-mix compatible with most early herbicides",
        ],
        analysis: &[("P2O5", "28% w/v"), ("K2O", "18% w/v")],
        application: &[
            ApplicationRow {
                crop: "Winter cereals",
                rate: "1.0 l/ha",
                timing: "GS12–GS23",
            },
            ApplicationRow {
                crop: "Oilseed rape",
                rate: "1.0 l/ha",
                timing: "2–4 true leaves",
            },
        ],
        pack_sizes: "2 × 10 l, 200 l, 1000 l IBC",
    },
    ProductContent {
        slug: "tensile",
        tagline: "Stronger stems and standing power for high-yield cereals.",
        benefits: &[
            "Phosphite plus potassium for stem strength",
            "Reduces lodging risk in lush canopies",
            "Supports rooting through stem extension",
        ],
        analysis: &[("P2O5", "20% w/v"), ("K2O", "24% w/v")],
        application: &[
            ApplicationRow {
                crop: "Winter wheat",
                rate: "2.0 l/ha",
                timing: "GS30–GS32",
            },
            ApplicationRow {
                crop: "Winter barley",
                rate: "2.0 l/ha",
                timing: "GS30–GS31",
            },
            ApplicationRow {
                crop: "Spring cereals",
                rate: "1.5 l/ha",
                timing: "GS25–GS31",
            },
        ],
        pack_sizes: "2 × 10 l, 200 l",
    },
    ProductContent {
        slug: "sirius",
        tagline: "Autumn vigour and spring recovery for oilseed rape.",
        benefits: &[
            "Phosphite with boron and molybdenum",
            "Builds root collar diameter before winter",
            "Aids green area recovery after stress",
        ],
        analysis: &[("P2O5", "26% w/v"), ("B", "2% w/v"), ("Mo", "0.1% w/v")],
        application: &[ApplicationRow {
            crop: "Oilseed rape",
            rate: "1.5 l/ha",
            timing: "4–6 true leaves, repeat at stem extension",
        }],
        pack_sizes: "2 × 10 l",
    },
    ProductContent {
        slug: "dp98",
        tagline: "Concentrated dual phosphite for high-value cropping.",
        benefits: &[
            "High-analysis mono- and di-potassium phosphite",
            "Rapid uptake through leaf and root",
            "Proven programme fit in potatoes and veg",
        ],
        analysis: &[("P2O5", "37% w/v"), ("K2O", "25% w/v")],
        application: &[
            ApplicationRow {
                crop: "Potatoes",
                rate: "1.0–2.0 l/ha",
                timing: "Tuber initiation onwards",
            },
            ApplicationRow {
                crop: "Field vegetables",
                rate: "1.0 l/ha",
                timing: "Established crop, 10–14 day interval",
            },
        ],
        pack_sizes: "2 × 10 l, 200 l",
    },
    ProductContent {
        slug: "quantum",
        tagline: "Root mass where it matters, under stress and drought.",
        benefits: &[
            "Phosphite biostimulant complex",
            "Maintains root growth under abiotic stress",
            "Flexible timing across arable rotations",
        ],
        analysis: &[("P2O5", "24% w/v"), ("K2O", "16% w/v"), ("Zn", "1% w/v")],
        application: &[ApplicationRow {
            crop: "All arable crops",
            rate: "1.0 l/ha",
            timing: "Active growth, before visible stress",
        }],
        pack_sizes: "2 × 10 l",
    },
    ProductContent {
        slug: "pk-force",
        tagline: "Drive tuber numbers and bulking with high-analysis PK.",
        benefits: &[
            "Targeted PK loading at tuber initiation",
            "Phosphite mobility into the root zone",
            "Supports skin finish and storability",
        ],
        analysis: &[("P2O5", "30% w/v"), ("K2O", "20% w/v")],
        application: &[ApplicationRow {
            crop: "Potatoes",
            rate: "2.0 l/ha",
            timing: "Tuber initiation, repeat 14 days later",
        }],
        pack_sizes: "2 × 10 l, 200 l",
    },
    ProductContent {
        slug: "cereal-raiser",
        tagline: "Autumn tonic for fast, even cereal establishment.",
        benefits: &[
            "Phosphite with manganese for autumn health",
            "Evens up backward patches before winter",
            "Low-rate, low-cost establishment insurance",
        ],
        analysis: &[("P2O5", "25% w/v"), ("Mn", "4% w/v")],
        application: &[ApplicationRow {
            crop: "Winter cereals",
            rate: "1.0 l/ha",
            timing: "GS13–GS25",
        }],
        pack_sizes: "2 × 10 l",
    },
    ProductContent {
        slug: "folex-zinc",
        tagline: "Fast foliar zinc for visible deficiency correction.",
        benefits: &[
            "Rapid leaf uptake and translocation",
            "Corrects pale striping in maize and cereals",
            "Safe in common fungicide tank mixes",
        ],
        analysis: &[("Zn", "70% w/w")],
        application: &[
            ApplicationRow {
                crop: "Maize",
                rate: "0.5 kg/ha",
                timing: "4–8 leaf stage",
            },
            ApplicationRow {
                crop: "Cereals",
                rate: "0.5 kg/ha",
                timing: "Tillering onwards",
            },
        ],
        pack_sizes: "10 × 1 kg",
    },
    ProductContent {
        slug: "cal-max",
        tagline: "Firm fruit, better storage, fewer calcium disorders.",
        benefits: &[
            "High-strength foliar calcium with boron",
            "Reduces bitter pit and internal breakdown",
            "Programme-friendly from fruit set to harvest",
        ],
        analysis: &[("CaO", "22% w/v"), ("B", "0.2% w/v")],
        application: &[ApplicationRow {
            crop: "Top fruit",
            rate: "3.0 l/ha",
            timing: "Fruit set to pre-harvest, 10 day interval",
        }],
        pack_sizes: "2 × 10 l",
    },
    ProductContent {
        slug: "kelp-boost",
        tagline: "Cold-pressed seaweed for roots, shoots and resilience.",
        benefits: &[
            "Cold-pressed Ascophyllum nodosum extract",
            "Stimulates root and shoot growth",
            "Improves tolerance of transplant shock",
        ],
        analysis: &[("Seaweed extract", "50% w/v")],
        application: &[ApplicationRow {
            crop: "All crops",
            rate: "2.0 l/ha",
            timing: "Active growth, 14 day interval",
        }],
        pack_sizes: "2 × 10 l, 200 l",
    },
];
