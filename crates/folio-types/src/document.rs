//! Read-only view over the portfolio data file.
//!
//! The data file is loosely typed: any field may be missing or carry the
//! wrong JSON type, and a few fields go by more than one name. Everything
//! here reads through `serde_json::Value` and treats a wrong-typed value the
//! same as a missing one, so callers only ever see `Option`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The loaded portfolio document. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioDocument(Value);

impl Default for PortfolioDocument {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for PortfolioDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl PortfolioDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Resolve a dotted path such as `personal.name` or `education.0.degree`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.0, path)
    }

    /// Non-empty string (or number) at `path`.
    pub fn text(&self, path: &str) -> Option<String> {
        self.get(path).and_then(scalar_text)
    }

    /// First non-empty value among `paths`, in order.
    pub fn first_text(&self, paths: &[&str]) -> Option<String> {
        paths.iter().find_map(|path| self.text(path))
    }

    /// Array at `path`. Anything other than an array reads as absent.
    pub fn list(&self, path: &str) -> Option<&[Value]> {
        match self.get(path)? {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// String items of the array at `path`; non-scalar items are dropped.
    pub fn strings(&self, path: &str) -> Option<Vec<String>> {
        self.list(path)
            .map(|items| items.iter().filter_map(scalar_text).collect())
    }

    /// String items joined with `sep`, absent when the result is empty.
    pub fn joined(&self, path: &str, sep: &str) -> Option<String> {
        let joined = self.strings(path)?.join(sep);
        (!joined.is_empty()).then_some(joined)
    }

    /// Members of the object at `path`.
    pub fn entries(&self, path: &str) -> Option<&Map<String, Value>> {
        match self.get(path)? {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn experience(&self) -> Option<Vec<Experience<'_>>> {
        self.records("experience", Experience)
    }

    pub fn projects(&self) -> Option<Vec<Project<'_>>> {
        self.records("projects", Project)
    }

    pub fn languages(&self) -> Option<Vec<Language<'_>>> {
        self.records("programmingLanguages", Language)
    }

    pub fn testimonials(&self) -> Option<Vec<Testimonial<'_>>> {
        self.records("testimonials", Testimonial)
    }

    /// Number of testimonials, zero when the list is absent.
    pub fn testimonial_count(&self) -> usize {
        self.list("testimonials").map_or(0, <[Value]>::len)
    }

    fn records<'a, T>(&'a self, path: &str, wrap: fn(Record<'a>) -> T) -> Option<Vec<T>> {
        self.list(path)
            .map(|items| items.iter().map(|item| wrap(Record(item))).collect())
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display text of a scalar: non-empty strings and numbers.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ── Item views ──

/// One element of a document list.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a>(&'a Value);

impl<'a> Record<'a> {
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// String items of the array at `key`; empty when missing.
    pub fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Experience<'a>(Record<'a>);

impl Experience<'_> {
    pub fn title(&self) -> Option<String> {
        self.0.first_text(&["title", "role"])
    }

    pub fn company(&self) -> Option<String> {
        self.0.text("company")
    }

    pub fn period(&self) -> Option<String> {
        self.0.text("period")
    }

    pub fn description(&self) -> Option<String> {
        self.0.first_text(&["description", "details"])
    }

    pub fn technologies(&self) -> Vec<String> {
        self.0.strings("technologies")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Project<'a>(Record<'a>);

impl Project<'_> {
    pub fn title(&self) -> Option<String> {
        self.0.text("title")
    }

    pub fn description(&self) -> Option<String> {
        self.0.text("description")
    }

    pub fn image(&self) -> Option<String> {
        self.0.text("image")
    }

    pub fn technologies(&self) -> Vec<String> {
        self.0.strings("technologies")
    }

    pub fn live_url(&self) -> Option<String> {
        self.0.text("liveUrl")
    }

    pub fn github_url(&self) -> Option<String> {
        self.0.text("githubUrl")
    }

    pub fn category(&self) -> Option<String> {
        self.0.text("category")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Language<'a>(Record<'a>);

impl Language<'_> {
    pub fn name(&self) -> Option<String> {
        self.0.text("name")
    }

    /// Proficiency as written in the data file (nominally 0–100).
    pub fn proficiency(&self) -> Option<String> {
        self.0.text("proficiency")
    }

    pub fn description(&self) -> Option<String> {
        self.0.text("description")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial<'a>(Record<'a>);

impl Testimonial<'_> {
    pub fn name(&self) -> Option<String> {
        self.0.text("name")
    }

    pub fn role(&self) -> Option<String> {
        self.0.text("role")
    }

    pub fn company(&self) -> Option<String> {
        self.0.text("company")
    }

    pub fn quote(&self) -> Option<String> {
        self.0.text("quote")
    }

    pub fn avatar(&self) -> Option<String> {
        self.0.text("avatar")
    }

    /// First character of the name, used for the avatar placeholder.
    pub fn initial(&self) -> Option<String> {
        self.name()
            .and_then(|name| name.chars().next())
            .map(String::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths_walk_objects_and_arrays() {
        let doc = PortfolioDocument::new(json!({
            "personal": { "name": "Ada" },
            "education": [{ "degree": "BSc" }]
        }));
        assert_eq!(doc.text("personal.name").as_deref(), Some("Ada"));
        assert_eq!(doc.text("education.0.degree").as_deref(), Some("BSc"));
        assert_eq!(doc.text("education.1.degree"), None);
        assert_eq!(doc.text("personal.name.first"), None);
    }

    #[test]
    fn empty_and_wrong_typed_values_read_as_absent() {
        let doc = PortfolioDocument::new(json!({
            "personal": { "name": "", "title": true, "email": ["x"] },
            "skills": "not a list"
        }));
        assert_eq!(doc.text("personal.name"), None);
        assert_eq!(doc.text("personal.title"), None);
        assert_eq!(doc.text("personal.email"), None);
        assert!(doc.list("skills").is_none());
    }

    #[test]
    fn first_text_follows_alias_order() {
        let doc = PortfolioDocument::new(json!({
            "personal": { "bio": "short", "aboutBio": "long" }
        }));
        assert_eq!(
            doc.first_text(&["personal.aboutBio", "personal.bio"]).as_deref(),
            Some("long")
        );
        assert_eq!(
            doc.first_text(&["personal.missing", "personal.bio"]).as_deref(),
            Some("short")
        );
    }

    #[test]
    fn joined_is_absent_for_empty_lists() {
        let doc = PortfolioDocument::new(json!({ "interests": [], "hobbies": ["a", "b"] }));
        assert_eq!(doc.joined("interests", ", "), None);
        assert_eq!(doc.joined("hobbies", ", ").as_deref(), Some("a, b"));
    }

    #[test]
    fn experience_accepts_either_alias() {
        let doc = PortfolioDocument::new(json!({
            "experience": [
                { "role": "Intern", "details": "Did things" },
                { "title": "Lead", "role": "ignored", "description": "Led" }
            ]
        }));
        let items = doc.experience().unwrap();
        assert_eq!(items[0].title().as_deref(), Some("Intern"));
        assert_eq!(items[0].description().as_deref(), Some("Did things"));
        assert_eq!(items[1].title().as_deref(), Some("Lead"));
        assert!(items[0].technologies().is_empty());
    }

    #[test]
    fn numbers_render_as_text() {
        let doc = PortfolioDocument::new(json!({
            "programmingLanguages": [{ "name": "C", "proficiency": 70 }]
        }));
        let langs = doc.languages().unwrap();
        assert_eq!(langs[0].proficiency().as_deref(), Some("70"));
    }

    #[test]
    fn testimonial_initial_handles_missing_name() {
        let doc = PortfolioDocument::new(json!({
            "testimonials": [{ "name": "Sarah" }, {}]
        }));
        let items = doc.testimonials().unwrap();
        assert_eq!(items[0].initial().as_deref(), Some("S"));
        assert_eq!(items[1].initial(), None);
        assert_eq!(doc.testimonial_count(), 2);
    }
}
