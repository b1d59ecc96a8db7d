// Canned examples served by GET /api/sample-keywords so clients can render
// something before wiring up a real request.

use serde::Serialize;

/// A hand-picked title with the keywords a client might expect for it.
#[derive(Debug, Clone, Serialize)]
pub struct SampleKeywords {
    pub title: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SAMPLES: &[SampleKeywords] = &[
    SampleKeywords {
        title: "Sunset over mountains",
        keywords: &[
            "sunset",
            "mountains",
            "landscape",
            "nature",
            "sky",
            "evening",
            "scenic",
            "view",
        ],
    },
    SampleKeywords {
        title: "Digital technology background",
        keywords: &[
            "digital",
            "technology",
            "background",
            "abstract",
            "tech",
            "innovation",
            "future",
            "data",
        ],
    },
    SampleKeywords {
        title: "Business meeting office",
        keywords: &[
            "business",
            "meeting",
            "office",
            "professional",
            "teamwork",
            "corporate",
            "work",
            "success",
        ],
    },
];
