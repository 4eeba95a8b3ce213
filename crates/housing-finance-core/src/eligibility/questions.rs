//! The questionnaire: question identifiers, enumerated options and their
//! point contributions.
//!
//! Per-question maxima sum to [`MAX_TOTAL_SCORE`] and every question has a
//! zero-point worst option, so total scores span the full 0-150 range by
//! construction. Ordering within each table encodes the underwriting
//! preferences: peak earning ages, monotone income and credit-score bands,
//! stable employment, urban collateral markets, unencumbered borrowers and
//! ready-to-move property.

/// One answer option and its score contribution.
#[derive(Debug, Clone, Copy)]
pub struct OptionPoints {
    pub value: &'static str,
    pub points: u32,
}

/// A questionnaire entry: identifier plus its closed option set.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub options: &'static [OptionPoints],
}

impl QuestionSpec {
    /// Points for an answer value, or None when the value is not in the
    /// option set.
    pub fn points_for(&self, value: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.points)
    }

    /// Largest contribution this question can make.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|opt| opt.points).max().unwrap_or(0)
    }
}

/// Upper bound of the total score; the per-question maxima sum to this.
pub const MAX_TOTAL_SCORE: u32 = 150;

const fn opt(value: &'static str, points: u32) -> OptionPoints {
    OptionPoints { value, points }
}

/// The seven mandatory questions, in canonical (form) order.
pub const QUESTIONS: [QuestionSpec; 7] = [
    QuestionSpec {
        id: "age_group",
        options: &[
            opt("21-30", 12),
            opt("31-40", 20),
            opt("41-50", 18),
            opt("51-60", 8),
            opt("60+", 0),
        ],
    },
    QuestionSpec {
        id: "income_range",
        options: &[
            opt("below-3lakh", 0),
            opt("3-5lakh", 6),
            opt("5-10lakh", 12),
            opt("10-20lakh", 18),
            opt("above-20lakh", 25),
        ],
    },
    QuestionSpec {
        id: "employment_type",
        options: &[
            opt("salaried", 20),
            opt("self-employed", 9),
            opt("business", 12),
            opt("professional", 17),
            opt("retired", 0),
        ],
    },
    QuestionSpec {
        id: "city_tier",
        options: &[
            opt("tier-1", 15),
            opt("tier-2", 12),
            opt("tier-3", 6),
            opt("rural", 0),
        ],
    },
    QuestionSpec {
        id: "existing_loans",
        options: &[
            opt("none", 20),
            opt("home-loan", 10),
            opt("personal-loan", 6),
            opt("multiple", 0),
            opt("credit-card", 14),
        ],
    },
    QuestionSpec {
        id: "credit_score_range",
        options: &[
            opt("excellent-750+", 35),
            opt("good-700-750", 28),
            opt("fair-650-700", 18),
            opt("poor-600-650", 8),
            opt("very-poor-below-600", 0),
            opt("unknown", 10),
        ],
    },
    QuestionSpec {
        id: "property_type",
        options: &[
            opt("ready-to-move", 15),
            opt("under-construction", 11),
            opt("plot", 4),
            opt("renovation", 0),
            opt("refinance", 8),
        ],
    },
];

/// Look up a question by identifier.
pub fn question(id: &str) -> Option<&'static QuestionSpec> {
    QUESTIONS.iter().find(|q| q.id == id)
}
