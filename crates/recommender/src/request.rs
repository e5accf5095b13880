//! What the user asked for.

/// Result cap used when the caller does not set one
pub const DEFAULT_TOP_N: usize = 5;

/// Criteria for one recommendation round.
///
/// Every criterion is optional. Blank text and a zero rating floor count as
/// "not given", so a user who just presses enter gets no filtering for that
/// criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// Case-insensitive substring of the genre field
    pub genre: Option<String>,
    /// Free text describing how the user feels
    pub mood: Option<String>,
    /// Lowest rating kept, inclusive
    pub min_rating: Option<f32>,
    /// Maximum number of recommendations
    pub top_n: usize,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            genre: None,
            mood: None,
            min_rating: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecommendationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Genre to filter on, if one was given
    pub fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// Mood text to match, if one was given
    pub fn mood_text(&self) -> Option<&str> {
        self.mood.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// Rating floor to apply, if one was given
    pub fn rating_floor(&self) -> Option<f32> {
        self.min_rating.filter(|&r| r != 0.0)
    }
}
