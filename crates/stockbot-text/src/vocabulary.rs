//! Ordered lookup tables for attribute detection.
//!
//! Every table is a slice so its order is part of the contract: the first
//! entry that matches wins wherever a single value is extracted. All entries
//! are written in normalized form (lowercase, no diacritics).

use stockbot_core::types::{Feature, ProductType};

/// Brands the storefront carries.
pub const BRANDS: &[&str] = &[
    "dahua", "hikvision", "ajax", "imou", "ezviz", "dsc", "epcom", "provision", "honeywell",
];

/// Common misspellings mapped to the brand they stand for.
pub const BRAND_CORRECTIONS: &[(&str, &str)] = &[
    ("dahau", "dahua"),
    ("daua", "dahua"),
    ("dahuaa", "dahua"),
    ("dahu", "dahua"),
    ("dahuwa", "dahua"),
    ("dauha", "dahua"),
    ("hikvicion", "hikvision"),
    ("hik", "hikvision"),
    ("hikvison", "hikvision"),
    ("hikivision", "hikvision"),
    ("hikvission", "hikvision"),
    ("hivision", "hikvision"),
    ("hkvision", "hikvision"),
    ("hikvi", "hikvision"),
    ("ayax", "ajax"),
    ("ajaz", "ajax"),
    ("ajaks", "ajax"),
    ("imuo", "imou"),
    ("imu", "imou"),
    ("imo", "imou"),
    ("esbis", "ezviz"),
    ("ezvis", "ezviz"),
    ("esviz", "ezviz"),
    ("ezvs", "ezviz"),
    ("dcs", "dsc"),
];

/// Product families and the substrings that reveal them.
pub const PRODUCT_TYPES: &[(ProductType, &[&str])] = &[
    (ProductType::Camera, &["camara", "camera", "cam", "camra"]),
    (ProductType::BulletCamera, &["bullet", "tubo", "cilindrica", "bala", "tubular"]),
    (ProductType::DomeCamera, &["domo", "dome", "cupula", "redonda", "techo"]),
    (ProductType::PtzCamera, &["ptz", "motorizada", "robotica", "movimiento"]),
    (ProductType::Dvr, &["dvr", "grabador", "grabadora", "videograbador", "grabador de video"]),
    (ProductType::Nvr, &["nvr", "grabador ip", "grabador de red"]),
    (ProductType::Disk, &["disco", "hdd", "disco rigido", "disco duro", "rigido"]),
    (ProductType::Alarm, &["alarma", "panel", "central"]),
    (ProductType::Switch, &["switch", "poe", "switch poe"]),
    (ProductType::PowerSupply, &["fuente", "transformador", "alimentador", "power"]),
];

/// Feature tags and the substrings that request them.
pub const FEATURES: &[(Feature, &[&str])] = &[
    (Feature::Exterior, &["exterior", "afuera", "outdoor", "intemperie", "externo", "ip67", "ip66"]),
    (Feature::Interior, &["interior", "adentro", "indoor", "interno"]),
    (Feature::Wifi, &["wifi", "inalambrica", "wireless", "sin cable"]),
    (Feature::Poe, &["poe", "power over ethernet", "alimentacion por cable"]),
    (Feature::Audio, &["audio", "microfono", "sonido"]),
    (Feature::Color, &["color", "colorvu", "color vu", "vision color"]),
];

/// Substrings in a product name that satisfy a requested feature.
pub fn feature_markers(feature: Feature) -> &'static [&'static str] {
    match feature {
        Feature::Exterior => &["ip67", "ip66", "exterior", "outdoor", "bullet"],
        Feature::Wifi => &["wifi", "wireless"],
        Feature::Audio => &["audio", "c/audio"],
        Feature::Color => &["color", "colorvu"],
        Feature::Interior => &["interior"],
        Feature::Poe => &["poe"],
    }
}

/// Spellings of `"<n>mp"` accepted in product names.
pub fn resolution_markers(resolution: &str) -> [String; 4] {
    [
        format!("{resolution}mp"),
        format!("{resolution} mp"),
        format!("{resolution}megapixel"),
        format!("de {resolution}mp"),
    ]
}

/// Spellings of a channel count accepted in product names.
pub fn channel_markers(channels: &str) -> [String; 3] {
    [format!("{channels} canales"), format!("{channels}ch"), format!("{channels} ch")]
}

pub fn correct_brand(token: &str) -> Option<&'static str> {
    BRAND_CORRECTIONS.iter().find(|(typo, _)| *typo == token).map(|(_, brand)| *brand)
}
