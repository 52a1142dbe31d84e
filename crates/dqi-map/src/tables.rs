//! Static mapping tables from source-system column names to the canonical
//! names the calculators expect.
//!
//! Sources covered: USDA/FNDDS exports (HEI, DASH and DII targets) and the
//! casing variations found in published DII validation datasets. Each table
//! is applied independently with [`crate::apply_mapping`].

/// USDA/FNDDS export columns to HEI canonical names.
pub const USDA_HEI_MAP: &[(&str, &str)] = &[
    ("F_TOTAL", "total_fruit_cup"),
    ("F_TOTAL_CUP", "total_fruit_cup"),
    ("F_CITMLB", "whole_fruit_cup"),
    ("F_OTHER", "whole_fruit_cup"),
    ("V_TOTAL", "total_veg_cup"),
    ("V_TOTAL_CUP", "total_veg_cup"),
    ("V_LEGUMES", "greens_beans_cup"),
    ("G_WHOLE", "whole_grains_oz"),
    ("D_TOTAL", "dairy_cup"),
    ("PF_TOTAL", "protein_oz"),
    ("PF_SEAFD_HI", "seafood_plant_oz"),
    ("PF_SEAFD_LOW", "seafood_plant_oz"),
    ("PF_NUTSDS", "seafood_plant_oz"),
    ("PF_SOY", "seafood_plant_oz"),
    ("PF_LEGUMES", "seafood_plant_oz"),
    ("KCAL", "energy_kcal"),
    ("SODIUM", "sodium_mg"),
    ("ADD_SUGARS", "added_sugars_g"),
];

/// USDA/FNDDS export columns to DASH canonical names.
pub const USDA_DASH_MAP: &[(&str, &str)] = &[
    ("F_TOTAL", "fruits"),
    ("F_TOTAL_G", "fruits"),
    ("V_TOTAL", "vegetables"),
    ("V_TOTAL_G", "vegetables"),
    ("G_WHOLE", "whole_grains"),
    ("D_TOTAL", "low_fat_dairy"),
    ("PF_LEGUMES", "nuts_legumes"),
    ("SODIUM", "sodium"),
    ("PROC_MEAT", "red_processed_meats"),
    ("SLD_BEV", "sweetened_beverages"),
];

/// USDA/FNDDS export columns to DII parameter names.
pub const USDA_DII_MAP: &[(&str, &str)] = &[
    ("ENERGY", "Energy"),
    ("ENERGY_KCAL", "Energy"),
    ("PROTEIN", "Protein"),
    ("TOTALFAT", "Total fat"),
    ("CARBS", "Carbohydrate"),
    ("CARBOHYDRATE", "Carbohydrate"),
    ("FIBER", "Fiber"),
    ("FOLATE", "Folic acid"),
    ("VITC", "Vitamin C"),
    ("VITD", "Vitamin D"),
    ("VITE", "Vitamin E"),
];

/// Column-case fixes seen in DII validation datasets.
pub const DII_CASE_MAP: &[(&str, &str)] = &[
    ("vitamin B12", "Vitamin B12"),
    ("vitamin B6", "Vitamin B6"),
    ("Thyme_oregano", "Thyme/oregano"),
];
