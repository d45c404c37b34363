use serde::Serialize;

/// Static browsing content behind the home screen.
#[derive(Debug, Serialize)]
pub struct Catalog {
    pub tabs: Vec<&'static str>,
    pub levels: Vec<&'static str>,
    pub categories: Vec<&'static str>,
}
