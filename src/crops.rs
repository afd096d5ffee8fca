//! Registry of crops that get a growth stage page

use anyhow::Result;

use crate::stages;
use crate::types::{CropRecord, DEFAULT_CROP_TYPE};

/// All crops, keyed by slug. Several species appear more than once with a
/// numbered slug (`bean-2`, `grape-4`) because each slug owns its own image set.
pub static CROPS: &[CropRecord] = &[
    CropRecord::new("alfalfa", "Alfalfa", "Medicago sativa", "forage"),
    CropRecord::new("artichoke", "Artichoke", "Cynara cardunculus", "vegetable"),
    CropRecord::new("arugula", "Arugula", "Eruca vesicaria", "leafy"),
    CropRecord::new("asparagus", "Asparagus", "Asparagus officinalis", "vegetable"),
    CropRecord::new("banana-musaceae", "Banana", "Musa acuminata", "fruit_tropical"),
    CropRecord::new("barley", "Barley", "Hordeum vulgare", "cereal"),
    CropRecord::new("bean", "Bean", "Phaseolus vulgaris", "legume"),
    CropRecord::new("bean-2", "Bean", "Phaseolus vulgaris", "legume"),
    CropRecord::new("bok-choy", "Bok Choy", "Brassica rapa subsp. chinensis", "leafy"),
    CropRecord::new("broccoli", "Broccoli", "Brassica oleracea var. italica", "brassica"),
    CropRecord::new("brussels-sprouts", "Brussels Sprouts", "Brassica oleracea var. gemmifera", "brassica"),
    CropRecord::new("buckwheat", "Buckwheat", "Fagopyrum esculentum", "cereal"),
    CropRecord::new("carrot", "Carrot", "Daucus carota", "root"),
    CropRecord::new("cauliflower", "Cauliflower", "Brassica oleracea var. botrytis", "brassica"),
    CropRecord::new("cayenne-pepper", "Cayenne Pepper", "Capsicum annuum", "solanaceae"),
    CropRecord::new("celery", "Celery", "Apium graveolens", "vegetable"),
    CropRecord::new("chickpea-2", "Chickpea", "Cicer arietinum", "legume"),
    CropRecord::new("chicory", "Chicory", "Cichorium intybus", "leafy"),
    CropRecord::new("chicory-2", "Chicory", "Cichorium intybus", "leafy"),
    CropRecord::new("clover", "Clover", "Trifolium pratense", "forage"),
    CropRecord::new("clover-2", "Clover", "Trifolium pratense", "forage"),
    CropRecord::new("common-vetch", "Common Vetch", "Vicia sativa", "legume"),
    CropRecord::new("corn", "Corn", "Zea mays", "cereal"),
    CropRecord::new("cotton", "Cotton", "Gossypium hirsutum", "industrial"),
    CropRecord::new("cotton-2", "Cotton", "Gossypium hirsutum", "industrial"),
    CropRecord::new("couch-grass", "Couch Grass", "Elymus repens", "grass"),
    CropRecord::new("cowpea", "Cowpea", "Vigna unguiculata", "legume"),
    CropRecord::new("cucumber", "Cucumber", "Cucumis sativus", "cucurbit"),
    CropRecord::new("daikon", "Daikon", "Raphanus sativus var. longipinnatus", "root"),
    CropRecord::new("dill", "Dill", "Anethum graveolens", "herb"),
    CropRecord::new("eggplant", "Eggplant", "Solanum melongena", "solanaceae"),
    CropRecord::new("fennel", "Fennel", "Foeniculum vulgare", "herb"),
    CropRecord::new("flax", "Flax", "Linum usitatissimum", "industrial"),
    CropRecord::new("flax-2", "Flax", "Linum usitatissimum", "industrial"),
    CropRecord::new("garlic", "Garlic", "Allium sativum", "bulb"),
    CropRecord::new("grape", "Grape", "Vitis vinifera", "vine"),
    CropRecord::new("grape-2", "Grape", "Vitis vinifera", "vine"),
    CropRecord::new("grape-3", "Grape", "Vitis vinifera", "vine"),
    CropRecord::new("grape-4", "Grape", "Vitis vinifera", "vine"),
    CropRecord::new("hemp", "Hemp", "Cannabis sativa", "industrial"),
    CropRecord::new("hemp-2", "Hemp", "Cannabis sativa", "industrial"),
    CropRecord::new("hops", "Hops", "Humulus lupulus", "vine"),
    CropRecord::new("kale", "Kale", "Brassica oleracea var. sabellica", "brassica"),
    CropRecord::new("kohlrabi", "Kohlrabi", "Brassica oleracea var. gongylodes", "brassica"),
    CropRecord::new("leek", "Leek", "Allium ampeloprasum", "bulb"),
    CropRecord::new("lentil", "Lentil", "Lens culinaris", "legume"),
    CropRecord::new("lettuce", "Lettuce", "Lactuca sativa", "leafy"),
    CropRecord::new("melon", "Melon", "Cucumis melo", "cucurbit"),
    CropRecord::new("oat", "Oat", "Avena sativa", "cereal"),
    CropRecord::new("oilseed-radish", "Oilseed Radish", "Raphanus sativus var. oleiformis", "industrial"),
    CropRecord::new("okra", "Okra", "Abelmoschus esculentus", "vegetable"),
    CropRecord::new("onion", "Onion", "Allium cepa", "bulb"),
    CropRecord::new("parsnip", "Parsnip", "Pastinaca sativa", "root"),
    CropRecord::new("pea", "Pea", "Pisum sativum", "legume"),
    CropRecord::new("pea-2", "Pea", "Pisum sativum", "legume"),
    CropRecord::new("peanut", "Peanut", "Arachis hypogaea", "legume"),
    CropRecord::new("peanut-2", "Peanut", "Arachis hypogaea", "legume"),
    CropRecord::new("pepper", "Pepper", "Capsicum annuum", "solanaceae"),
    CropRecord::new("pepper-2", "Pepper", "Capsicum annuum", "solanaceae"),
    CropRecord::new("perennial-ryegrass", "Perennial Ryegrass", "Lolium perenne", "grass"),
    CropRecord::new("perennial-ryegrass-2", "Perennial Ryegrass", "Lolium perenne", "grass"),
    CropRecord::new("pineapple", "Pineapple", "Ananas comosus", "fruit_tropical"),
    CropRecord::new("potato", "Potato", "Solanum tuberosum", "tuber"),
    CropRecord::new("potato-2", "Potato", "Solanum tuberosum", "tuber"),
    CropRecord::new("pumpkin", "Pumpkin", "Cucurbita maxima", "cucurbit"),
    CropRecord::new("quinoa", "Quinoa", "Chenopodium quinoa", "cereal"),
    CropRecord::new("radish", "Radish", "Raphanus sativus", "root"),
    CropRecord::new("rapeseed", "Rapeseed", "Brassica napus", "oilseed"),
    CropRecord::new("red-beet", "Red Beet", "Beta vulgaris", "root"),
    CropRecord::new("red-cabbage", "Red Cabbage", "Brassica oleracea var. capitata f. rubra", "brassica"),
    CropRecord::new("rice", "Rice", "Oryza sativa", "cereal"),
    CropRecord::new("rice-2", "Rice", "Oryza sativa", "cereal"),
    CropRecord::new("rutabaga", "Rutabaga", "Brassica napus var. napobrassica", "root"),
    CropRecord::new("sesame", "Sesame", "Sesamum indicum", "oilseed"),
    CropRecord::new("sorghum", "Sorghum", "Sorghum bicolor", "cereal"),
    CropRecord::new("soybean", "Soybean", "Glycine max", "legume"),
    CropRecord::new("soybean-2", "Soybean", "Glycine max", "legume"),
    CropRecord::new("soybean-3", "Soybean", "Glycine max", "legume"),
    CropRecord::new("spinach", "Spinach", "Spinacia oleracea", "leafy"),
    CropRecord::new("strawberry", "Strawberry", "Fragaria × ananassa", "fruit_berry"),
    CropRecord::new("sugar-beet", "Sugar Beet", "Beta vulgaris subsp. vulgaris", "root"),
    CropRecord::new("sugar-beet-2", "Sugar Beet", "Beta vulgaris subsp. vulgaris", "root"),
    CropRecord::new("sugarcane", "Sugarcane", "Saccharum officinarum", "grass"),
    CropRecord::new("sugarcane-2", "Sugarcane", "Saccharum officinarum", "grass"),
    CropRecord::new("sunflower", "Sunflower", "Helianthus annuus", "oilseed"),
    CropRecord::new("sweet-potato", "Sweet Potato", "Ipomoea batatas", "tuber"),
    CropRecord::new("tomato", "Tomato", "Solanum lycopersicum", "solanaceae"),
    CropRecord::new("tomato-2", "Tomato", "Solanum lycopersicum", "solanaceae"),
    CropRecord::new("turnip", "Turnip", "Brassica rapa", "root"),
    CropRecord::new("watermelon", "Watermelon", "Citrullus lanatus", "cucurbit"),
    CropRecord::new("wheat", "Wheat", "Triticum aestivum", "cereal"),
    CropRecord::new("white-cabbage", "White Cabbage", "Brassica oleracea var. capitata", "brassica"),
    CropRecord::new("white-mustard", "White Mustard", "Sinapis alba", "oilseed"),
    CropRecord::new("zucchini", "Zucchini", "Cucurbita pepo", "cucurbit"),
];

/// Crops ordered by slug, the order pages are generated and listed in
pub fn crops_by_slug() -> Vec<&'static CropRecord> {
    let mut crops: Vec<&'static CropRecord> = CROPS.iter().collect();
    crops.sort_by_key(|c| c.slug);
    crops
}

/// Look up a crop by its slug
pub fn find_crop(slug: &str) -> Option<&'static CropRecord> {
    CROPS.iter().find(|c| c.slug == slug)
}

/// Plain-text listing, one aligned row per crop
pub fn format_crop_list(crops: &[&CropRecord]) -> String {
    let slug_width = crops.iter().map(|c| c.slug.len()).max().unwrap_or(0);
    let name_width = crops
        .iter()
        .map(|c| c.display_name.chars().count())
        .max()
        .unwrap_or(0);
    let latin_width = crops
        .iter()
        .map(|c| c.latin_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for crop in crops {
        let crop_type = if stages::is_registered(crop.crop_type) {
            crop.crop_type.to_string()
        } else {
            format!("{} ({} table)", crop.crop_type, DEFAULT_CROP_TYPE)
        };
        let line = format!(
            "{:<sw$}  {:<nw$}  {:<lw$}  {}",
            crop.slug,
            crop.display_name,
            crop.latin_name,
            crop_type,
            sw = slug_width,
            nw = name_width,
            lw = latin_width
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Print the registry, as JSON or as a table
pub fn run_list(json: bool) -> Result<()> {
    let crops = crops_by_slug();
    if json {
        println!("{}", serde_json::to_string_pretty(&crops)?);
    } else {
        print!("{}", format_crop_list(&crops));
        println!("{} crops", crops.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Safe as a file name and as a URL path segment
    fn is_valid_slug(slug: &str) -> bool {
        !slug.is_empty()
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[test]
    fn registry_has_all_crops() {
        assert_eq!(CROPS.len(), 94);
    }

    #[test]
    fn slugs_are_unique() {
        let mut seen = HashSet::new();
        for crop in CROPS {
            assert!(seen.insert(crop.slug), "duplicate slug: {}", crop.slug);
        }
    }

    #[test]
    fn slugs_are_url_and_filename_safe() {
        for crop in CROPS {
            assert!(is_valid_slug(crop.slug), "unsafe slug: {}", crop.slug);
        }
    }

    #[test]
    fn every_crop_type_has_its_own_table() {
        for crop in CROPS {
            assert!(
                stages::is_registered(crop.crop_type),
                "{} uses unregistered crop type {}",
                crop.slug,
                crop.crop_type
            );
        }
    }

    #[test]
    fn names_are_not_blank() {
        for crop in CROPS {
            assert!(!crop.display_name.trim().is_empty(), "{}", crop.slug);
            assert!(!crop.latin_name.trim().is_empty(), "{}", crop.slug);
        }
    }

    #[test]
    fn crops_by_slug_is_sorted() {
        let sorted = crops_by_slug();
        assert_eq!(sorted.len(), CROPS.len());
        assert!(sorted.windows(2).all(|w| w[0].slug < w[1].slug));
        assert_eq!(sorted[0].slug, "alfalfa");
        assert_eq!(sorted[sorted.len() - 1].slug, "zucchini");
    }

    #[test]
    fn find_crop_by_slug() {
        let tomato = find_crop("tomato").unwrap();
        assert_eq!(tomato.display_name, "Tomato");
        assert_eq!(tomato.latin_name, "Solanum lycopersicum");
        assert_eq!(tomato.crop_type, "solanaceae");
        assert!(find_crop("Tomato").is_none());
    }

    #[test]
    fn crop_list_is_aligned_and_marks_fallbacks() {
        let known = CropRecord::new("oat", "Oat", "Avena sativa", "cereal");
        let unknown = CropRecord::new("odd-crop", "Odd Crop", "Planta rara", "mystery");
        let listing = format_crop_list(&[&known, &unknown]);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "oat       Oat       Avena sativa  cereal");
        assert_eq!(lines[1], "odd-crop  Odd Crop  Planta rara   mystery (default table)");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("sugar-beet-2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Sugar Beet"));
        assert!(!is_valid_slug("../etc"));
        assert!(!is_valid_slug("-lead"));
    }
}
