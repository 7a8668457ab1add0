//! Compiled-in catalog content.
//!
//! Copy here is display data, not structure; swapping it for a file-backed
//! source goes through [`crate::source::JsonFileCatalog`].

use std::sync::Arc;

use agrisite_core::{SiteResult, Slug};

use crate::category::{Category, Product};
use crate::registry::CatalogRegistry;

fn product(slug: &str, name: &str, description: &str) -> SiteResult<Arc<Product>> {
    Ok(Arc::new(Product::new(
        Slug::parse(slug)?,
        name,
        Some(description.to_string()),
    )))
}

fn category(slug: &str, title: &str, products: Vec<Arc<Product>>) -> SiteResult<Category> {
    Ok(Category::new(Slug::parse(slug)?, title, products))
}

/// Build the built-in catalog registry.
pub fn builtin() -> SiteResult<CatalogRegistry> {
    // Multi-Mix™ is cross-listed: canonical home is the foliar range, but it
    // also appears in the trace element listing. One shared record.
    let multi_mix = product(
        "multi-mix",
        "Multi-Mix™",
        "Balanced multi-nutrient foliar blend for broad-spectrum deficiency cover.",
    )?;

    let phosphite_range = category(
        "phosphite-range",
        "Phosphite Range",
        vec![
            product(
                "kickstart",
                "Kickstart™",
                "Phosphite starter treatment promoting early rooting and establishment.",
            )?,
            product(
                "tensile",
                "Tensile™",
                "Phosphite with potassium for strong stems and standing power in cereals.",
            )?,
            product(
                "sirius",
                "Sirius™",
                "Phosphite and micronutrient programme for oilseed rape vigour.",
            )?,
            product(
                "dp98",
                "DP98",
                "Concentrated dual-phosphite formulation for high-value cropping.",
            )?,
            product(
                "quantum",
                "Quantum™",
                "Phosphite biostimulant supporting root mass under stress conditions.",
            )?,
            product(
                "pk-force",
                "PK Force™",
                "High-analysis PK phosphite for tuber initiation and bulking.",
            )?,
            product(
                "beet-raiser",
                "Beet Raiser™",
                "Phosphite programme tailored to sugar beet canopy development.",
            )?,
            product(
                "cereal-raiser",
                "Cereal Raiser™",
                "Phosphite and manganese tonic for autumn cereal establishment.",
            )?,
        ],
    )?;

    let foliar_range = category(
        "foliar-range",
        "Foliar Range",
        vec![
            product(
                "folex-zinc",
                "Folex Zinc™",
                "Fast-acting foliar zinc for maize and cereal deficiency correction.",
            )?,
            product(
                "folex-copper",
                "Folex Copper™",
                "Foliar copper for grain fill and pollen viability.",
            )?,
            product(
                "folex-manganese",
                "Folex Manganese™",
                "Foliar manganese against take-all pressure and pale-leaf symptoms.",
            )?,
            product(
                "folex-magnesium",
                "Folex Magnesium™",
                "Foliar magnesium to sustain chlorophyll through canopy closure.",
            )?,
            product(
                "folex-iron",
                "Folex Iron™",
                "Chelated foliar iron for chlorosis-prone soils.",
            )?,
            multi_mix.clone(),
            product(
                "bio-20",
                "Bio 20™",
                "20-20-20 foliar feed with trace elements for general crop support.",
            )?,
        ],
    )?;

    let biostimulant_range = category(
        "biostimulant-range",
        "Biostimulant Range",
        vec![
            product(
                "kelp-boost",
                "Kelp Boost™",
                "Cold-pressed seaweed extract stimulating root and shoot growth.",
            )?,
            product(
                "amino-plus",
                "Amino Plus™",
                "Free amino acid complex aiding recovery from abiotic stress.",
            )?,
            product(
                "root-surge",
                "Root Surge™",
                "Humic and fulvic blend driving root architecture in transplants.",
            )?,
            product(
                "sea-star",
                "Sea Star™",
                "Seaweed and phosphite co-formulation for flowering crops.",
            )?,
            product(
                "humi-gold",
                "Humi Gold™",
                "Concentrated humic acid improving nutrient availability.",
            )?,
        ],
    )?;

    let calcium_range = category(
        "calcium-range",
        "Calcium Range",
        vec![
            product(
                "cal-max",
                "Cal-Max™",
                "High-strength foliar calcium for fruit firmness and storage quality.",
            )?,
            product(
                "cal-flow",
                "Cal-Flow™",
                "Suspension calcium with magnesium for brassica programmes.",
            )?,
            product(
                "super-ca",
                "Super Ca™",
                "Calcium and boron co-formulation against internal disorders.",
            )?,
            product(
                "cal-bor",
                "Cal-Bor™",
                "Calcium-boron foliar for flowering and fruit set.",
            )?,
            product(
                "cal-phite",
                "Cal-Phite™",
                "Calcium phosphite for cell wall strength and root health.",
            )?,
        ],
    )?;

    let trace_element_range = category(
        "trace-element-range",
        "Trace Element Range",
        vec![
            product(
                "zinc-70",
                "Zinc 70™",
                "Flowable zinc concentrate for soil and foliar application.",
            )?,
            product(
                "copper-50",
                "Copper 50™",
                "Flowable copper concentrate for deficiency-prone rotations.",
            )?,
            product(
                "mangan-60",
                "Mangan 60™",
                "Flowable manganese concentrate for high-pH seedbeds.",
            )?,
            product(
                "boron-15",
                "Boron 15™",
                "Liquid boron for root crops and oilseed rape.",
            )?,
            product(
                "moly-plus",
                "Moly Plus™",
                "Molybdenum supplement for legume nodulation.",
            )?,
            multi_mix,
        ],
    )?;

    CatalogRegistry::new(vec![
        phosphite_range,
        foliar_range,
        biostimulant_range,
        calcium_range,
        trace_element_range,
    ])
}
