// Static keyword tables.
//
// All terms are authored lowercase and are not re-normalized at runtime.
// Category and general terms bypass the token length filter, so short
// entries like "ai" and "eco" are allowed here.

/// Returned as-is when the input text is empty or missing.
pub const FALLBACK_KEYWORDS: &[&str] = &[
    "digital",
    "art",
    "creative",
    "design",
    "innovation",
    "technology",
    "background",
    "abstract",
    "modern",
    "concept",
    "graphic",
    "visual",
    "contemporary",
    "minimal",
    "professional",
];

/// Appended after input tokens and category terms on every non-empty request.
pub const GENERAL_KEYWORDS: &[&str] = &[
    "creative",
    "design",
    "background",
    "modern",
    "concept",
    "innovation",
    "technology",
    "digital",
    "abstract",
    "graphic",
    "visual",
    "contemporary",
    "minimal",
    "professional",
    "solution",
];

/// Category name -> associated terms.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "digital",
            "tech",
            "computer",
            "innovation",
            "future",
            "ai",
            "software",
            "hardware",
        ],
    ),
    (
        "nature",
        &[
            "nature",
            "landscape",
            "forest",
            "tree",
            "environment",
            "green",
            "eco",
            "sustainable",
        ],
    ),
    (
        "business",
        &[
            "business",
            "office",
            "corporate",
            "professional",
            "success",
            "teamwork",
            "meeting",
        ],
    ),
    (
        "people",
        &[
            "people",
            "portrait",
            "smile",
            "happy",
            "person",
            "face",
            "family",
            "community",
        ],
    ),
    (
        "art",
        &[
            "art",
            "creative",
            "design",
            "abstract",
            "colorful",
            "painting",
            "illustration",
            "graphic",
        ],
    ),
];

/// Look up the terms for a category. Matching is exact: "Nature" is not "nature".
pub fn category_terms(category: &str) -> Option<&'static [&'static str]> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, terms)| *terms)
}

/// Names of all known categories, in table order.
pub fn category_names() -> Vec<&'static str> {
    CATEGORY_KEYWORDS.iter().map(|(name, _)| *name).collect()
}
