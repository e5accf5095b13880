//! The conversational loop.
//!
//! ```text
//! ask_name -> ask_genre -> ask_mood -> ask_rating -> recommend -> ask_repeat
//!                ^                                                   |
//!                +------------------------ yes ----------------------+
//! ```
//!
//! The user's name and the recommender live in a [`Session`] that is passed
//! through every step.

use anyhow::Result;
use colored::Colorize;
use recommender::{RecommendError, RecommendationRequest, Recommender};
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::display;
use crate::prompt::{PromptError, Prompter};

/// Knobs for one interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub top_n: usize,
    /// Total length of the progress indicator before each round
    pub processing_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            top_n: recommender::DEFAULT_TOP_N,
            processing_delay: Duration::from_millis(1500),
        }
    }
}

/// Welcome the user and ask for their name
pub fn greet<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<String, PromptError> {
    prompter.say("🎥 Welcome to your Personal Movie Recommendation Assistant!".blue())?;
    let name = prompter.ask("What's your name? ")?;
    prompter.say(format!("\nNice to meet you, {}!\n", name).green())?;
    Ok(name)
}

/// Everything one user's conversation needs
pub struct Session {
    name: String,
    recommender: Recommender,
    config: SessionConfig,
}

impl Session {
    pub fn new(name: impl Into<String>, recommender: Recommender, config: SessionConfig) -> Self {
        Self {
            name: name.into(),
            recommender,
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run recommendation rounds until the user says "no"
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<()> {
        loop {
            self.recommend_round(prompter)?;

            if !self.ask_repeat(prompter)? {
                prompter.say(format!("\n🎬 Enjoy your movie picks, {}!", self.name).green())?;
                return Ok(());
            }
        }
    }

    /// One genre → mood → rating → results round
    fn recommend_round<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<()> {
        prompter.say("\n🎯 Let's find the perfect movie for you!".blue())?;

        let genre = self.ask_genre(prompter)?;
        let mood = prompter.ask("How do you feel today? (Describe your mood): ")?;
        let min_rating = prompter.ask_until(
            "rating",
            "Minimum IMDB rating? (0-10): ",
            "Please enter a valid number.",
            parse_rating,
        )?;

        let request = RecommendationRequest::new()
            .with_genre(genre)
            .with_mood(mood)
            .with_min_rating(min_rating)
            .with_top_n(self.config.top_n);
        tracing::info!("Recommendation request for {}: {:?}", self.name, request);

        prompter.say_inline("\n🔍 Analyzing preferences".cyan())?;
        display::show_progress(prompter, self.config.processing_delay)?;

        match self.recommender.recommend_random(&request) {
            Ok(recommendations) => {
                display::print_recommendations(prompter, &recommendations, &self.name)?
            }
            Err(RecommendError::NoRecommendations) => {
                prompter.say(RecommendError::NoRecommendations.to_string().red())?
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn ask_genre<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<String, PromptError> {
        let genres = self.recommender.catalog().list_genres();

        prompter.say("\nAvailable Genres:".green())?;
        for (idx, genre) in genres.iter().enumerate() {
            prompter.say(format!("{}. {}", idx + 1, genre))?;
        }

        prompter.ask_until(
            "genre",
            "\nEnter genre number or name: ",
            "Invalid input. Try again.",
            |answer| select_genre(&genres, answer),
        )
    }

    fn ask_repeat<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<bool, PromptError> {
        prompter.ask_until(
            "yes/no answer",
            "\nWould you like more recommendations? (yes/no): ",
            "Invalid input. Try again.",
            |answer| match answer.to_lowercase().as_str() {
                "yes" => Some(true),
                "no" => Some(false),
                _ => None,
            },
        )
    }
}

/// Resolve a menu answer: a 1-based index, or a genre name in any case
pub fn select_genre(genres: &[String], answer: &str) -> Option<String> {
    if !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(index) = answer.parse::<usize>() {
            if (1..=genres.len()).contains(&index) {
                return Some(genres[index - 1].clone());
            }
        }
    }

    let name = title_case(answer);
    genres.iter().find(|genre| **genre == name).cloned()
}

/// Rating floor between 0 and 10 inclusive
pub fn parse_rating(answer: &str) -> Option<f32> {
    answer
        .parse::<f32>()
        .ok()
        .filter(|rating| (0.0..=10.0).contains(rating))
}

/// Upper-case the first letter of every run of letters, lower-case the rest
/// (`sci-fi` → `Sci-Fi`, `FILM-NOIR` → `Film-Noir`)
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Catalog, Movie};
    use std::io::Cursor;
    use std::sync::Arc;

    fn movie(title: &str, genre: &str, overview: &str, rating: f32) -> Movie {
        Movie {
            id: 0,
            title: title.to_string(),
            genre: genre.to_string(),
            overview: overview.to_string(),
            rating,
        }
    }

    fn build_session() -> Session {
        let catalog = Catalog::from_movies(vec![
            movie("A", "Comedy", "A joyful romp", 8.5),
            movie("B", "Crime, Drama", "A cruel and brutal gangster", 9.1),
            movie("C", "Sci-Fi", "", 7.0),
        ]);
        let config = SessionConfig {
            top_n: 5,
            processing_delay: Duration::ZERO,
        };
        Session::new("Ada", Recommender::new(Arc::new(catalog)), config)
    }

    fn run_session(input: &str, max_attempts: usize) -> (Result<()>, String) {
        colored::control::set_override(false);
        let session = build_session();
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), max_attempts);
        let result = session.run(&mut prompter);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_greet_reads_name() {
        colored::control::set_override(false);
        let mut prompter = Prompter::new(Cursor::new(b"  Ada \n".to_vec()), Vec::new(), 3);

        assert_eq!(greet(&mut prompter).unwrap(), "Ada");
        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("Nice to meet you, Ada!"));
    }

    #[test]
    fn test_single_round_by_menu_index() {
        // Genres sorted: Comedy, Crime, Drama, Sci-Fi
        let (result, output) = run_session("1\nI feel great\n8\nno\n", 3);

        result.unwrap();
        assert!(output.contains("1. Comedy\n2. Crime\n3. Drama\n4. Sci-Fi\n"));
        assert!(output.contains("AI-Analyzed Movie Recommendations for Ada:"));
        assert!(output.contains("1. A | Genre: Comedy | IMDB: 8.5 | Sentiment: Positive 😊 (Polarity: 0.80)"));
        assert!(output.contains("Enjoy your movie picks, Ada!"));
    }

    #[test]
    fn test_genre_by_name_in_any_case() {
        let (result, output) = run_session("dRaMa\nI am sad\n9\nno\n", 3);

        result.unwrap();
        assert!(output.contains("1. B | Genre: Crime, Drama | IMDB: 9.1"));
    }

    #[test]
    fn test_no_results_then_repeat() {
        let input = "comedy\n\n9\nmaybe\nyes\nsci-fi\n\n0\nNO\n";
        let (result, output) = run_session(input, 3);

        result.unwrap();
        assert_eq!(output.matches("No suitable movie recommendations found.").count(), 2);
        assert_eq!(output.matches("Let's find the perfect movie for you!").count(), 2);
        assert!(output.contains("Invalid input. Try again."));
    }

    #[test]
    fn test_invalid_rating_reprompts() {
        let (result, output) = run_session("2\n\nabc\n11\n-1\n8\nno\n", 5);

        result.unwrap();
        assert_eq!(output.matches("Please enter a valid number.").count(), 3);
        assert!(output.contains("1. B | Genre: Crime, Drama"));
    }

    #[test]
    fn test_persistent_invalid_genre_gives_up() {
        let (result, output) = run_session("0\n99\nWestern\n", 3);

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PromptError>(),
            Some(PromptError::TooManyAttempts { prompt: "genre", attempts: 3 })
        ));
        assert_eq!(output.matches("Invalid input. Try again.").count(), 3);
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (result, _) = run_session("1\nhappy\n", 3);

        assert!(matches!(
            result.unwrap_err().downcast_ref::<PromptError>(),
            Some(PromptError::InputClosed)
        ));
    }

    #[test]
    fn test_select_genre() {
        let genres = vec!["Comedy".to_string(), "Film-Noir".to_string()];

        assert_eq!(select_genre(&genres, "2"), Some("Film-Noir".to_string()));
        assert_eq!(select_genre(&genres, "film-noir"), Some("Film-Noir".to_string()));
        assert_eq!(select_genre(&genres, "0"), None);
        assert_eq!(select_genre(&genres, "3"), None);
        assert_eq!(select_genre(&genres, "-1"), None);
        assert_eq!(select_genre(&genres, ""), None);
        assert_eq!(select_genre(&genres, "Com"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("7.5"), Some(7.5));
        assert_eq!(parse_rating("0"), Some(0.0));
        assert_eq!(parse_rating("10"), Some(10.0));
        assert_eq!(parse_rating("10.1"), None);
        assert_eq!(parse_rating("NaN"), None);
        assert_eq!(parse_rating("seven"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sci-fi"), "Sci-Fi");
        assert_eq!(title_case("FILM-NOIR"), "Film-Noir");
        assert_eq!(title_case("romance"), "Romance");
        assert_eq!(title_case("3d movie"), "3D Movie");
    }
}
