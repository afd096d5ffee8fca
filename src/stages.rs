//! BBCH stage tables by crop type, and the lookup used by the page generator

use anyhow::{bail, Result};

use crate::crops::find_crop;
use crate::types::{CropRecord, StageTable, DEFAULT_CROP_TYPE, STAGE_COUNT};

/// Principal growth stage ranges, shared by every crop type
const BBCH_CODES: [&str; STAGE_COUNT] = [
    "00–09", "10–19", "20–29", "30–39", "40–49", "51–59", "60–69", "70–79", "80–89", "90–99",
];

/// Resolve the stage table for a crop type.
///
/// Exact, case-sensitive match; anything unknown gets the default table.
pub fn stage_table(crop_type: &str) -> &'static StageTable {
    lookup(crop_type).unwrap_or_else(|| {
        log::debug!(
            "No stage table for crop type '{}', using '{}'",
            crop_type,
            DEFAULT_CROP_TYPE
        );
        &DEFAULT_STAGES
    })
}

/// Whether a crop type has a table of its own
pub fn is_registered(crop_type: &str) -> bool {
    lookup(crop_type).is_some()
}

fn lookup(crop_type: &str) -> Option<&'static StageTable> {
    STAGE_TABLES
        .iter()
        .find(|(name, _)| *name == crop_type)
        .map(|(_, table)| *table)
}

/// Human-readable stage table for one crop
pub fn format_stages(crop: &CropRecord, table: &StageTable) -> String {
    let table_name = if is_registered(crop.crop_type) {
        crop.crop_type
    } else {
        DEFAULT_CROP_TYPE
    };
    let name_width = table
        .stages()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{} ({})\nslug: {}, crop type: {}, stage table: {}\n",
        crop.display_name, crop.latin_name, crop.slug, crop.crop_type, table_name
    );
    for stage in table.stages() {
        out.push_str(&format!(
            "{:>2}  {}  {:<w$}  {}\n",
            stage.number,
            stage.code,
            stage.name,
            stage.description,
            w = name_width
        ));
    }
    out
}

/// Print the resolved stage table for a crop slug
pub fn run_show(slug: &str) -> Result<()> {
    let Some(crop) = find_crop(slug) else {
        bail!("Unknown crop '{}'. Run 'crop-stages list' to see all crops.", slug);
    };
    print!("{}", format_stages(crop, stage_table(crop.crop_type)));
    Ok(())
}

static DEFAULT_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Sprouting",
        "Emergence",
        "Leaf Development",
        "Stem Elongation",
        "Inflorescence",
        "Flowering",
        "Fruit Development",
        "Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition",
        "Radicle emergence, seedling growth",
        "Shoot emergence, cotyledon unfolding",
        "Leaf unfolding, true leaves expand",
        "Stem elongation, shoot development",
        "Inflorescence emergence, bud formation",
        "Flowering, anthesis",
        "Fruit development and growth",
        "Fruit ripening, color change",
        "Plant senescence, drying",
    ],
    alts: [
        "Seed",
        "Sprouting",
        "Emergence",
        "Leaf development",
        "Stem elongation",
        "Inflorescence",
        "Flowering",
        "Fruit development",
        "Ripening",
        "Senescence",
    ],
};

static CEREAL_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Tillering",
        "Stem Elongation",
        "Booting",
        "Heading",
        "Flowering",
        "Grain Development",
        "Grain Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Coleoptile emergence, first leaves unfolding",
        "Tiller formation, side shoots develop",
        "Stem elongation, nodes visible",
        "Flag leaf sheath swelling, booting",
        "Head emergence from flag leaf sheath",
        "Anthesis, pollen release",
        "Grain filling, milk to dough stage",
        "Grain ripening, hard dough to maturity",
        "Plant drying, harvest ready",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Tillering",
        "Stem elongation",
        "Booting",
        "Heading",
        "Flowering",
        "Grain filling",
        "Grain ripening",
        "Senescence",
    ],
};

static LEGUME_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Sprouting",
        "Emergence",
        "Leaf Development",
        "Stem Elongation",
        "Bud Formation",
        "Flowering",
        "Pod Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, swelling",
        "Radicle emergence, hypocotyl growth",
        "Shoot emergence, cotyledon unfolding",
        "Leaf and tendril development",
        "Stem elongation, shoot growth",
        "Bud formation, inflorescence emergence",
        "Flowering, anthesis",
        "Pod formation and growth",
        "Seed ripening, pod yellowing",
        "Plant drying, senescence",
    ],
    alts: [
        "Seed",
        "Sprouting",
        "Emergence",
        "Leaf development",
        "Stem elongation",
        "Bud formation",
        "Flowering",
        "Pod development",
        "Ripening",
        "Senescence",
    ],
};

static SOLANACEAE_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Shoot Growth",
        "Side Shoot Formation",
        "Bud Formation",
        "Flowering",
        "Fruit Development",
        "Fruit Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, leaf expansion",
        "Main shoot elongation, branching",
        "Side shoot development, canopy formation",
        "Flower bud emergence, bud swelling",
        "Flowering, petal opening",
        "Fruit set and enlargement",
        "Fruit ripening, color change",
        "Plant senescence, leaf drop",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Shoot growth",
        "Branching",
        "Bud formation",
        "Flowering",
        "Fruit development",
        "Fruit ripening",
        "Senescence",
    ],
};

static CUCURBIT_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Vine Growth",
        "Runner Formation",
        "Bud Formation",
        "Flowering",
        "Fruit Development",
        "Fruit Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, hypocotyl growth",
        "True leaf unfolding, leaf expansion",
        "Vine elongation, tendril formation",
        "Runner and lateral shoot development",
        "Flower bud formation, bud visible",
        "Male and female flowering",
        "Fruit set, fruit enlargement",
        "Fruit ripening, rind hardening",
        "Plant senescence, vine drying",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Vine growth",
        "Runner formation",
        "Bud formation",
        "Flowering",
        "Fruit development",
        "Fruit ripening",
        "Senescence",
    ],
};

static ROOT_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Root Thickening",
        "Harvestable Product",
        "Inflorescence",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, rosette formation",
        "Tap root begins thickening",
        "Root reaches harvestable size",
        "Bolting, inflorescence emergence",
        "Flowering, anthesis",
        "Seed development in pods",
        "Seed ripening, pod drying",
        "Plant senescence, leaf yellowing",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Root thickening",
        "Harvestable root",
        "Inflorescence",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static BRASSICA_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Head Formation",
        "Head Growth",
        "Inflorescence",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, rosette formation",
        "Head or curd begins forming",
        "Head or curd enlargement",
        "Bolting, flower stalk emergence",
        "Flowering, anthesis",
        "Seed development in siliques",
        "Seed ripening, silique drying",
        "Plant senescence, drying",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Head formation",
        "Head growth",
        "Inflorescence",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static BULB_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Sprouting",
        "Leaf Development",
        "Bulb Formation",
        "Bulb Growth",
        "Inflorescence",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed or clove, imbibition",
        "Radicle or root emergence, sprout growth",
        "Leaf unfolding, leaf sheath development",
        "Bulb begins swelling",
        "Bulb enlargement, scale formation",
        "Flower stalk elongation, spathe visible",
        "Flowering, umbel opening",
        "Seed development",
        "Seed ripening, bulb maturity",
        "Leaf yellowing, neck softening",
    ],
    alts: [
        "Seed/Clove",
        "Sprouting",
        "Leaf development",
        "Bulb formation",
        "Bulb growth",
        "Inflorescence",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static VINE_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Dormancy",
        "Bud Break",
        "Leaf Development",
        "Shoot Growth",
        "Canopy Development",
        "Inflorescence",
        "Flowering",
        "Berry Development",
        "Berry Ripening",
        "Senescence",
    ],
    descriptions: [
        "Winter dormancy, bud scales closed",
        "Bud swelling, bud break, shoot emergence",
        "Leaf unfolding, leaves expand",
        "Shoot elongation, tendril development",
        "Canopy development, lateral shoots",
        "Inflorescence visible, flower clusters form",
        "Flowering, cap fall, fruit set",
        "Berry development, veraison onset",
        "Berry ripening, sugar accumulation",
        "Leaf fall, cane maturation",
    ],
    alts: [
        "Dormancy",
        "Bud break",
        "Leaf development",
        "Shoot growth",
        "Canopy",
        "Inflorescence",
        "Flowering",
        "Berry development",
        "Berry ripening",
        "Senescence",
    ],
};

static TUBER_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Sprouting",
        "Emergence",
        "Leaf Development",
        "Stem Elongation",
        "Tuber Initiation",
        "Inflorescence",
        "Flowering",
        "Tuber Bulking",
        "Tuber Maturity",
        "Senescence",
    ],
    descriptions: [
        "Seed tuber dormancy break, sprout growth",
        "Shoot emergence from soil",
        "Leaf unfolding, canopy development",
        "Main stem elongation, branching",
        "Stolon development, tuber initiation",
        "Flower bud emergence",
        "Flowering, petal opening",
        "Tuber bulking, size increase",
        "Tuber maturity, skin set",
        "Haulm senescence, vine drying",
    ],
    alts: [
        "Sprouting",
        "Emergence",
        "Leaf development",
        "Stem elongation",
        "Tuber initiation",
        "Inflorescence",
        "Flowering",
        "Tuber bulking",
        "Tuber maturity",
        "Senescence",
    ],
};

static OILSEED_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Rosette Formation",
        "Stem Elongation",
        "Stem Extension",
        "Bud Formation",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "Leaf unfolding, rosette formation",
        "Stem visible, internodes elongate",
        "Further stem extension, branching",
        "Flower buds visible, bud cluster tight",
        "Flowering, petals visible",
        "Pod development, seed filling",
        "Seed ripening, pod color change",
        "Plant drying, harvest ready",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Rosette",
        "Stem elongation",
        "Stem extension",
        "Bud formation",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static INDUSTRIAL_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Stem Elongation",
        "Vegetative Growth",
        "Bud Formation",
        "Flowering",
        "Fruit/Boll Development",
        "Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf development, leaf expansion",
        "Main stem elongation, node development",
        "Continued vegetative growth, branching",
        "Flower bud initiation, square formation",
        "Flowering, bloom opening",
        "Boll or capsule development",
        "Boll opening or capsule maturity",
        "Plant defoliation, senescence",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Stem elongation",
        "Vegetative growth",
        "Bud formation",
        "Flowering",
        "Boll/Capsule development",
        "Ripening",
        "Senescence",
    ],
};

static FORAGE_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Stem Elongation",
        "Vegetative Growth",
        "Bud Formation",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon or coleoptile emergence",
        "Leaf unfolding, trifoliate development",
        "Stem elongation, internode development",
        "Continued vegetative growth, branching",
        "Flower bud formation, bud visible",
        "Flowering, inflorescence open",
        "Seed set and development",
        "Seed ripening, pod maturation",
        "Plant senescence, regrowth potential",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Stem elongation",
        "Vegetative growth",
        "Bud formation",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static GRASS_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Tillering",
        "Stem Elongation",
        "Booting",
        "Heading",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Coleoptile emergence, first leaf",
        "Tiller formation, side shoots develop",
        "Stem elongation, nodes become visible",
        "Flag leaf sheath swelling",
        "Inflorescence emergence from sheath",
        "Anthesis, pollen release",
        "Caryopsis development, grain filling",
        "Grain ripening, maturation",
        "Plant drying, dormancy",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Tillering",
        "Stem elongation",
        "Booting",
        "Heading",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static LEAFY_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Rosette Growth",
        "Harvestable Product",
        "Inflorescence",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, leaf expansion",
        "Rosette or head formation",
        "Leaves reach harvestable size",
        "Bolting, flower stalk elongation",
        "Flowering, anthesis",
        "Seed development",
        "Seed ripening, drying",
        "Plant senescence",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Rosette growth",
        "Harvestable leaves",
        "Inflorescence",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static HERB_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Stem Elongation",
        "Vegetative Growth",
        "Bud Formation",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, frond development",
        "Main stem elongation",
        "Continued vegetative growth, branching",
        "Flower bud initiation, umbel forming",
        "Flowering, umbel opening",
        "Seed development on umbels",
        "Seed ripening, drying",
        "Plant senescence, drying",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Stem elongation",
        "Vegetative growth",
        "Bud formation",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

static FRUIT_TROPICAL_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Planting",
        "Sprouting",
        "Leaf Development",
        "Vegetative Growth",
        "Sucker Formation",
        "Inflorescence",
        "Flowering",
        "Fruit Development",
        "Fruit Ripening",
        "Senescence",
    ],
    descriptions: [
        "Planting material, initial root growth",
        "Shoot emergence, first leaves",
        "Leaf unfolding, leaf expansion",
        "Continued vegetative growth",
        "Sucker or ratoon formation",
        "Inflorescence emergence, bud visible",
        "Flowering, petal opening",
        "Fruit development and enlargement",
        "Fruit ripening, color change",
        "Plant senescence, harvest",
    ],
    alts: [
        "Planting",
        "Sprouting",
        "Leaf development",
        "Vegetative growth",
        "Sucker formation",
        "Inflorescence",
        "Flowering",
        "Fruit development",
        "Fruit ripening",
        "Senescence",
    ],
};

static FRUIT_BERRY_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Dormancy",
        "Crown Growth",
        "Leaf Development",
        "Runner Formation",
        "Stolon Growth",
        "Inflorescence",
        "Flowering",
        "Fruit Development",
        "Fruit Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dormancy, crown planting",
        "Crown growth, first leaves emerging",
        "Leaf unfolding, trifoliate leaves expand",
        "Runner formation begins",
        "Stolon elongation, daughter plants",
        "Inflorescence emergence from crown",
        "Flowering, petal opening",
        "Fruit set, green fruit enlargement",
        "Fruit ripening, color change",
        "Leaf senescence, dormancy onset",
    ],
    alts: [
        "Dormancy",
        "Crown growth",
        "Leaf development",
        "Runner formation",
        "Stolon growth",
        "Inflorescence",
        "Flowering",
        "Fruit development",
        "Fruit ripening",
        "Senescence",
    ],
};

static VEGETABLE_STAGES: StageTable = StageTable {
    codes: BBCH_CODES,
    names: [
        "Germination",
        "Seedling Growth",
        "Leaf Development",
        "Shoot Growth",
        "Harvestable Product",
        "Inflorescence",
        "Flowering",
        "Seed Development",
        "Seed Ripening",
        "Senescence",
    ],
    descriptions: [
        "Dry seed, imbibition, radicle emergence",
        "Cotyledon emergence, seedling growth",
        "True leaf unfolding, leaf expansion",
        "Main shoot elongation, branching",
        "Harvestable product development",
        "Flower bud emergence",
        "Flowering, anthesis",
        "Seed development",
        "Seed ripening",
        "Plant senescence",
    ],
    alts: [
        "Seed",
        "Seedling",
        "Leaf development",
        "Shoot growth",
        "Harvestable product",
        "Inflorescence",
        "Flowering",
        "Seed development",
        "Seed ripening",
        "Senescence",
    ],
};

/// Stage tables by crop type
static STAGE_TABLES: &[(&str, &StageTable)] = &[
    (DEFAULT_CROP_TYPE, &DEFAULT_STAGES),
    ("cereal", &CEREAL_STAGES),
    ("legume", &LEGUME_STAGES),
    ("solanaceae", &SOLANACEAE_STAGES),
    ("cucurbit", &CUCURBIT_STAGES),
    ("root", &ROOT_STAGES),
    ("brassica", &BRASSICA_STAGES),
    ("bulb", &BULB_STAGES),
    ("vine", &VINE_STAGES),
    ("tuber", &TUBER_STAGES),
    ("oilseed", &OILSEED_STAGES),
    ("industrial", &INDUSTRIAL_STAGES),
    ("forage", &FORAGE_STAGES),
    ("grass", &GRASS_STAGES),
    ("leafy", &LEAFY_STAGES),
    ("herb", &HERB_STAGES),
    ("fruit_tropical", &FRUIT_TROPICAL_STAGES),
    ("fruit_berry", &FRUIT_BERRY_STAGES),
    ("vegetable", &VEGETABLE_STAGES),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::ptr;

    #[test]
    fn unknown_crop_type_falls_back_to_default() {
        let table = stage_table("mystery");
        assert!(ptr::eq(table, stage_table(DEFAULT_CROP_TYPE)));
        assert_eq!(table.names[0], "Germination");
        assert_eq!(table.codes[0], "00–09");
        assert_eq!(table.descriptions[0], "Dry seed, imbibition");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(ptr::eq(stage_table("Cereal"), &DEFAULT_STAGES));
        assert!(ptr::eq(stage_table("cereal"), &CEREAL_STAGES));
        assert!(ptr::eq(stage_table(" cereal"), &DEFAULT_STAGES));
    }

    #[test]
    fn solanaceae_starts_with_seed() {
        let table = stage_table("solanaceae");
        assert_eq!(table.alts[0], "Seed");
        assert_eq!(table.names[4], "Side Shoot Formation");
    }

    #[test]
    fn every_table_is_fully_populated() {
        for (crop_type, table) in STAGE_TABLES {
            for stage in table.stages() {
                assert!(!stage.name.is_empty(), "{} stage {}", crop_type, stage.number);
                assert!(!stage.description.is_empty(), "{} stage {}", crop_type, stage.number);
                assert!(!stage.alt.is_empty(), "{} stage {}", crop_type, stage.number);
                assert_eq!(stage.code, BBCH_CODES[stage.number - 1]);
            }
            assert_eq!(table.stages().count(), STAGE_COUNT);
        }
    }

    #[test]
    fn crop_types_are_unique_and_include_default() {
        let types: Vec<&str> = STAGE_TABLES.iter().map(|(t, _)| *t).collect();
        let unique: HashSet<&str> = types.iter().copied().collect();
        assert_eq!(types.len(), unique.len());
        assert!(unique.contains(DEFAULT_CROP_TYPE));
        assert_eq!(types.len(), 19);
    }

    #[test]
    fn format_stages_lists_every_stage() {
        let crop = CropRecord::new("garlic", "Garlic", "Allium sativum", "bulb");
        let text = format_stages(&crop, stage_table(crop.crop_type));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2 + STAGE_COUNT);
        assert_eq!(lines[0], "Garlic (Allium sativum)");
        assert_eq!(lines[1], "slug: garlic, crop type: bulb, stage table: bulb");
        assert!(lines[2].starts_with(" 1  00–09  Germination "));
        assert!(lines[2].ends_with("Dry seed or clove, imbibition"));
        assert!(lines[11].starts_with("10  90–99  Senescence "));
    }

    #[test]
    fn format_stages_names_the_fallback_table() {
        let crop = CropRecord::new("odd", "Odd", "Planta rara", "mystery");
        let text = format_stages(&crop, stage_table(crop.crop_type));
        assert!(text.contains("crop type: mystery, stage table: default"));
    }

    #[test]
    fn show_rejects_unknown_slug() {
        let err = run_show("no-such-crop").unwrap_err();
        assert!(err.to_string().contains("Unknown crop 'no-such-crop'"));
    }

    #[test]
    fn is_registered_matches_lookup() {
        assert!(is_registered("vine"));
        assert!(is_registered(DEFAULT_CROP_TYPE));
        assert!(!is_registered("mystery"));
        assert!(!is_registered(""));
    }
}
