use mongodb::bson::{doc, Document};

/// Build the find filter. An empty document matches every document in the
/// collection; a supplied symbol is trimmed and uppercased before matching.
pub fn build_filter(symbol: Option<&str>) -> Document {
    match symbol {
        Some(symbol) => doc! { "symbol": symbol.trim().to_uppercase() },
        None => doc! {},
    }
}

/// A cap only applies when it is a positive count; zero and negative values
/// mean "return everything".
pub fn effective_limit(limit: Option<i64>) -> Option<i64> {
    limit.filter(|&n| n > 0)
}

/// One printable line per document. An ObjectId `_id` is swapped for its hex
/// string so the output stays plain text.
pub fn render(mut document: Document) -> String {
    if let Ok(id) = document.get_object_id("_id") {
        document.insert("_id", id.to_hex());
    }
    document.to_string()
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[test]
    fn filter_uppercases_and_trims_the_symbol() {
        assert_eq!(build_filter(Some(" aapl ")), doc! { "symbol": "AAPL" });
        assert_eq!(build_filter(Some("MSFT")), doc! { "symbol": "MSFT" });
    }

    #[test]
    fn no_symbol_means_an_empty_filter() {
        assert_eq!(build_filter(None), doc! {});
    }

    #[test]
    fn only_positive_limits_apply() {
        assert_eq!(effective_limit(None), None);
        assert_eq!(effective_limit(Some(0)), None);
        assert_eq!(effective_limit(Some(-5)), None);
        assert_eq!(effective_limit(Some(3)), Some(3));
    }

    #[test]
    fn render_stringifies_an_object_id() {
        let id = ObjectId::new();
        let line = render(doc! { "_id": id, "symbol": "AAPL", "price": 1 });
        assert!(line.contains(&id.to_hex()));
        assert!(!line.contains("ObjectId"));
    }

    #[test]
    fn render_leaves_other_documents_alone() {
        let line = render(doc! { "symbol": "MSFT", "price": 2 });
        assert!(line.contains("MSFT"));

        // A non-ObjectId _id is already printable
        let line = render(doc! { "_id": "custom-key", "price": 3 });
        assert!(line.contains("custom-key"));
    }
}
