use percent_encoding::percent_decode_str;
use std::collections::BTreeMap;

/// Navigation target split into path, query and fragment.
///
/// The path is kept percent-encoded; decoding happens per segment while
/// matching. Query keys and values are decoded, `+` standing for a space.
/// A repeated query key keeps its last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: BTreeMap<String, String>,
    hash: Option<String>,
}

impl Location {
    pub fn parse(target: &str) -> Self {
        let (rest, hash) = match target.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (target, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Location {
            path,
            query: query.map(parse_query).unwrap_or_default(),
            hash: hash
                .filter(|h| !h.is_empty())
                .map(|h| percent_decode_str(h).decode_utf8_lossy().into_owned()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }
}

fn parse_query(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let location = Location::parse("/stats");

        assert_eq!(location.path(), "/stats");
        assert!(location.query().is_empty());
        assert_eq!(location.hash(), None);
    }

    #[test]
    fn test_empty_target_is_root() {
        assert_eq!(Location::parse("").path(), "/");
        assert_eq!(Location::parse("?sort=rank").path(), "/");
    }

    #[test]
    fn test_relative_path_gets_leading_slash() {
        assert_eq!(Location::parse("playerDetail/7").path(), "/playerDetail/7");
    }

    #[test]
    fn test_query_and_hash() {
        let location = Location::parse("/playerDetail/42?tab=games&season=2024+spring&tab=rank#top%20five");

        assert_eq!(location.path(), "/playerDetail/42");
        assert_eq!(location.query_value("tab"), Some("rank"));
        assert_eq!(location.query_value("season"), Some("2024 spring"));
        assert_eq!(location.hash(), Some("top five"));
    }

    #[test]
    fn test_query_key_without_value() {
        let location = Location::parse("/?compact&&page=2");

        assert_eq!(location.query_value("compact"), Some(""));
        assert_eq!(location.query_value("page"), Some("2"));
        assert_eq!(location.query().len(), 2);
    }

    #[test]
    fn test_empty_hash_is_none() {
        assert_eq!(Location::parse("/stats#").hash(), None);
    }
}
