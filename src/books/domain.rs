pub mod model;

pub(crate) trait Book {
    fn title(&self) -> Option<&str>;

    // case-insensitive substring match against the title; an untitled book never matches
    fn matches_title(&self, query: &str) -> bool {
        match self.title() {
            Some(title) => title.to_lowercase().contains(query.to_lowercase().as_str()),
            None => false,
        }
    }
}
