/// Test data factories using builder pattern
///
/// Provides convenient methods to create scraper-shaped records with sensible defaults
use chrono::{DateTime, TimeZone, Utc};
use series_catalog::{ProviderCatalog, RatingType, SeriesRecord};

pub struct SeriesFactory {
    id: String,
    name: String,
    poster: Option<String>,
    description: Option<String>,
    studio: Option<String>,
    genres: Vec<String>,
    year: Option<i32>,
    rating: Option<f64>,
    rating_type: Option<RatingType>,
    view_count: Option<f64>,
    last_updated: Option<DateTime<Utc>>,
}

impl SeriesFactory {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            poster: None,
            description: None,
            studio: None,
            genres: Vec::new(),
            year: None,
            rating: None,
            rating_type: None,
            view_count: None,
            last_updated: None,
        }
    }

    /// Record with every scored field filled in
    pub fn complete(id: &str, name: &str) -> Self {
        Self::new(id, name)
            .with_poster("https://img.example.net/poster.jpg")
            .with_description(&"A long and thorough synopsis. ".repeat(8))
            .with_genres(&["Drama", "Romance", "Comedy", "Fantasy", "School"])
            .with_year(2021)
            .with_rating(7.5)
            .with_updated_at(2024, 5, 1)
    }

    pub fn with_poster(mut self, poster: &str) -> Self {
        self.poster = Some(poster.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_studio(mut self, studio: &str) -> Self {
        self.studio = Some(studio.to_string());
        self
    }

    pub fn with_genres(mut self, genres: &[&str]) -> Self {
        self.genres = genres.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_rating_type(mut self, rating_type: RatingType) -> Self {
        self.rating_type = Some(rating_type);
        self
    }

    pub fn with_views(mut self, views: f64) -> Self {
        self.view_count = Some(views);
        self
    }

    pub fn with_updated_at(mut self, year: i32, month: u32, day: u32) -> Self {
        self.last_updated = Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single();
        self
    }

    pub fn build(self) -> SeriesRecord {
        let mut record = SeriesRecord::new(self.id, self.name);
        record.poster = self.poster;
        record.description = self.description;
        record.studio = self.studio;
        record.genres = self.genres;
        record.year = self.year;
        record.rating = self.rating;
        record.rating_type = self.rating_type;
        record.view_count = self.view_count;
        record.last_updated = self.last_updated;
        record
    }
}

/// One provider's catalog from built records
pub fn catalog(provider: &str, records: Vec<SeriesRecord>) -> ProviderCatalog {
    ProviderCatalog::new(provider, records)
}
