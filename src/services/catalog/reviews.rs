use super::types::{Provider, Review};
use serde::Serialize;

pub static SAMPLE_REVIEWS: [Review; 3] = [
    Review {
        author: "Sarah Johnson",
        stars: 5,
        posted: "2 days ago",
        text: "Excellent service! Very professional and punctual. Fixed the leak in no time and left everything clean.",
    },
    Review {
        author: "Michael Okafor",
        stars: 4,
        posted: "1 week ago",
        text: "Good work and fair pricing. Arrived a little late but kept me updated.",
    },
    Review {
        author: "Aisha Bello",
        stars: 5,
        posted: "3 weeks ago",
        text: "Friendly, careful and quick. Would book again.",
    },
];

/// Header line of the reviews section
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReviewSummary {
    pub count: u32,
    pub average: f64,
}

impl ReviewSummary {
    pub fn for_provider(provider: &Provider) -> Self {
        Self {
            count: provider.review_count,
            average: provider.rating,
        }
    }
}
