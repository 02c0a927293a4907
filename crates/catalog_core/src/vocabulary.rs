//! Fixed value catalogs offered by the listing form.

pub const TECHNIQUES: &[&str] = &[
    "Bokken Suburi",
    "General Exercise",
    "Gokyo",
    "Hiji Kata",
    "Iaido Only",
    "Ikkyo",
    "Iriminage",
    "Jo Kata",
    "Kaitennage",
    "Kokyuho",
    "Kokyunage",
    "Kotegaeshi",
    "Nikyo",
    "Sankyo",
    "Shihonage",
    "Udekimenage",
];

pub const FORMATS: &[&str] = &[
    "Aiki Toho",
    "Jo no Tebiki",
    "Ken no Tebiki",
    "Ken ti Jo",
    "Ken ti Ken",
    "Other",
    "Oyo",
    "Suwariwaza",
    "Tiado",
];

pub const DIRECTIONS: &[&str] = &["Omote", "Ura"];

pub const ATTACKS: &[&str] = &[
    "Shomenuchi",
    "Katatedori",
    "Ryotedori",
    "Yokomenuchi",
    "Tsuki",
    "Other",
];

pub const STANCES: &[&str] = &["Aihanmi", "Gyakuhanmi", "Other"];

pub fn is_known_technique(value: &str) -> bool {
    TECHNIQUES.contains(&value)
}

pub fn is_known_format(value: &str) -> bool {
    FORMATS.contains(&value)
}

pub fn is_known_direction(value: &str) -> bool {
    DIRECTIONS.contains(&value)
}

pub fn is_known_attack(value: &str) -> bool {
    ATTACKS.contains(&value)
}

pub fn is_known_stance(value: &str) -> bool {
    STANCES.contains(&value)
}
