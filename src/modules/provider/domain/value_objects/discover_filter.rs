/// Query options for the discovery endpoints. Built fresh per call with
/// the consuming setters; absent options are left out of the query string
/// entirely, never serialized as a literal "null".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoverFilter {
    pub sort_by: Option<String>,
    pub vote_count_gte: Option<u32>,
    pub vote_average_gte: Option<f64>,
    pub primary_release_year: Option<i32>,
    pub first_air_date_year: Option<i32>,
    pub with_genres: Option<u32>,
    pub with_keywords: Option<u32>,
    pub language: Option<String>,
    pub page: Option<u32>,
}

impl DiscoverFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, sort: impl Into<String>) -> Self {
        self.sort_by = Some(sort.into());
        self
    }

    pub fn vote_count_gte(mut self, count: u32) -> Self {
        self.vote_count_gte = Some(count);
        self
    }

    pub fn vote_average_gte(mut self, average: f64) -> Self {
        self.vote_average_gte = Some(average);
        self
    }

    pub fn primary_release_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    pub fn first_air_date_year(mut self, year: i32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }

    pub fn with_genres(mut self, genre_id: u32) -> Self {
        self.with_genres = Some(genre_id);
        self
    }

    pub fn with_keywords(mut self, keyword_id: u32) -> Self {
        self.with_keywords = Some(keyword_id);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(sort) = &self.sort_by {
            params.push(("sort_by".to_string(), sort.clone()));
        }
        if let Some(count) = self.vote_count_gte {
            params.push(("vote_count.gte".to_string(), count.to_string()));
        }
        if let Some(average) = self.vote_average_gte {
            params.push(("vote_average.gte".to_string(), average.to_string()));
        }
        if let Some(year) = self.primary_release_year {
            params.push(("primary_release_year".to_string(), year.to_string()));
        }
        if let Some(year) = self.first_air_date_year {
            params.push(("first_air_date_year".to_string(), year.to_string()));
        }
        if let Some(genre) = self.with_genres {
            params.push(("with_genres".to_string(), genre.to_string()));
        }
        if let Some(keyword) = self.with_keywords {
            params.push(("with_keywords".to_string(), keyword.to_string()));
        }
        if let Some(language) = &self.language {
            params.push(("language".to_string(), language.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_string(), page.to_string()));
        }
        params
    }
}
