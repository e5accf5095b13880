//! Console rendering of recommendations.

use colored::Colorize;
use nlp::Sentiment;
use recommender::Recommendation;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::prompt::{PromptError, Prompter};

/// Dots printed by the progress indicator
const PROGRESS_DOTS: u32 = 3;

/// Label shown next to a polarity score
pub fn sentiment_label(polarity: f32) -> &'static str {
    match Sentiment::from_polarity(polarity) {
        Sentiment::Positive => "Positive 😊",
        Sentiment::Negative => "Negative 😞",
        Sentiment::Neutral => "Neutral 😐",
    }
}

/// Ratings always show a decimal place (`9.0`, not `9`)
pub fn format_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        format!("{}", rating)
    }
}

/// One numbered result line
pub fn format_recommendation(rank: usize, rec: &Recommendation) -> String {
    format!(
        "{}. {} | Genre: {} | IMDB: {} | Sentiment: {} (Polarity: {:.2})",
        rank,
        rec.title,
        rec.genre,
        format_rating(rec.rating),
        sentiment_label(rec.polarity),
        rec.polarity
    )
}

/// Print the header and every recommendation
pub fn print_recommendations<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    recommendations: &[Recommendation],
    name: &str,
) -> Result<(), PromptError> {
    prompter.say(format!("\nAI-Analyzed Movie Recommendations for {}:\n", name).yellow())?;
    for (idx, rec) in recommendations.iter().enumerate() {
        prompter.say(format_recommendation(idx + 1, rec))?;
    }
    Ok(())
}

/// Cosmetic progress indicator spread over `total`
pub fn show_progress<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    total: Duration,
) -> Result<(), PromptError> {
    let step = total / PROGRESS_DOTS;
    for _ in 0..PROGRESS_DOTS {
        prompter.say_inline(".".yellow())?;
        if !step.is_zero() {
            thread::sleep(step);
        }
    }
    prompter.say("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(rating: f32, polarity: f32) -> Recommendation {
        Recommendation {
            movie_id: 0,
            title: "The Godfather".to_string(),
            genre: "Crime, Drama".to_string(),
            rating,
            polarity,
        }
    }

    #[test]
    fn labels_follow_polarity_sign() {
        assert_eq!(sentiment_label(0.4), "Positive 😊");
        assert_eq!(sentiment_label(-0.1), "Negative 😞");
        assert_eq!(sentiment_label(0.0), "Neutral 😐");
    }

    #[test]
    fn ratings_keep_one_decimal() {
        assert_eq!(format_rating(9.0), "9.0");
        assert_eq!(format_rating(0.0), "0.0");
        assert_eq!(format_rating(8.5), "8.5");
    }

    #[test]
    fn recommendation_line() {
        assert_eq!(
            format_recommendation(2, &rec(9.2, -0.3)),
            "2. The Godfather | Genre: Crime, Drama | IMDB: 9.2 | Sentiment: Negative 😞 (Polarity: -0.30)"
        );
    }
}
