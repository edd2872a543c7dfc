//! Built-in question catalogs.

use kiosk_survey_types::{Question, SurveyDefinition};

/// The five-question customer satisfaction survey.
pub fn customer_satisfaction() -> SurveyDefinition {
    SurveyDefinition::new(
        "Customer Survey",
        vec![
            Question::rating("q1", "How satisfied are you with our products?", 5).with_glyph("♥"),
            Question::rating(
                "q2",
                "How fair are the prices compared to similar retailers?",
                5,
            )
            .with_glyph("$"),
            Question::rating(
                "q3",
                "How satisfied are you with the value for money of your purchase?",
                5,
            )
            .with_glyph("★"),
            Question::rating(
                "q4",
                "On a scale of 1-10 how would you recommend us to your friends and family?",
                10,
            )
            .with_glyph("☺"),
            Question::text("q5", "What could we do to improve our service?")
                .with_placeholder("Please share your thoughts...")
                .with_glyph("✎"),
        ],
    )
    .with_prelude(
        "We value your feedback and would love to hear about your shopping experience with us today.",
    )
    .with_estimate("This will only take 2-3 minutes")
    .with_epilogue(
        "Your feedback is incredibly valuable to us. We appreciate you taking the time to share your thoughts.",
    )
}
