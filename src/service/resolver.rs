//! Fold-insensitive movie name lookup and suggestions.
//!
//! Users type movie names by hand, so lookups ignore case, spaces, hyphens and underscores:
//! "The-Matrix", "the matrix" and "THEMATRIX" all find "The Matrix". There is no fuzzy
//! matching beyond that.

use crate::{
    error::AppError,
    model::{
        movie::{Locator, MovieEntry},
        registry::MovieRegistry,
    },
};

/// Maximum number of choices Discord accepts in an autocomplete response.
pub const MAX_SUGGESTIONS: usize = 25;

/// Folds a name into its lookup key.
///
/// Lower-cases and removes every space, hyphen and underscore.
pub fn fold(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the entry whose name folds to the same key as `query`.
///
/// If several keys fold identically, the first in insertion order wins.
///
/// # Returns
/// - `Ok(MovieEntry)` - The stored name and its locator
/// - `Err(AppError::NotFound)` - No key folds to the same lookup key
pub fn resolve_entry(query: &str, registry: &MovieRegistry) -> Result<MovieEntry, AppError> {
    let key = fold(query);

    registry
        .names()
        .find(|name| fold(name) == key)
        .and_then(|name| registry.get(name))
        .ok_or_else(|| AppError::NotFound(query.to_string()))
}

/// Resolves a movie name to its locator. See `resolve_entry`.
pub fn resolve(query: &str, registry: &MovieRegistry) -> Result<Locator, AppError> {
    resolve_entry(query, registry).map(|entry| entry.locator)
}

/// Returns the existing key that folds like `name`, if any.
///
/// Used before inserting to keep fold keys unique.
pub fn find_colliding<'a>(name: &str, registry: &'a MovieRegistry) -> Option<&'a str> {
    let key = fold(name);
    registry.names().find(|existing| fold(existing) == key)
}

/// Suggests movie names for partially typed input.
///
/// Names whose lower-cased form starts with the lower-cased `prefix` come first, followed by
/// names that merely contain it. Each group keeps insertion order. Unlike lookups, matching
/// here is on the unfolded name. An empty prefix therefore returns the first `limit` names.
///
/// # Arguments
/// - `prefix` - Text typed so far
/// - `registry` - Registry to search
/// - `limit` - Maximum number of names returned
///
/// # Returns
/// - `Vec<String>` - Ranked names, at most `limit` long
pub fn suggest(prefix: &str, registry: &MovieRegistry, limit: usize) -> Vec<String> {
    let needle = prefix.to_lowercase();

    let (starts, contains): (Vec<&str>, Vec<&str>) = registry
        .names()
        .filter(|name| name.to_lowercase().contains(&needle))
        .partition(|name| name.to_lowercase().starts_with(&needle));

    starts
        .into_iter()
        .chain(contains)
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(names: &[&str]) -> MovieRegistry {
        names
            .iter()
            .map(|name| (*name, "https://example.com/movie.mp4"))
            .collect()
    }

    /// Tests that folding strips separators and case.
    ///
    /// Expected: All variants fold to the same key
    #[test]
    fn fold_ignores_case_and_separators() {
        assert_eq!(fold("The Matrix"), "thematrix");
        assert_eq!(fold("the-matrix"), "thematrix");
        assert_eq!(fold("THE_MATRIX"), "thematrix");
        assert_eq!(fold(" t h e - m a t r i x _ "), "thematrix");
    }

    /// Tests that every separator/case variant of a stored name resolves to its locator.
    ///
    /// Expected: Ok with the stored locator for each variant
    #[test]
    fn resolves_any_fold_variant() {
        let registry: MovieRegistry = [
            ("Spider-Man: No Way Home", "https://example.com/spidey"),
            ("Alien", "/srv/alien.mkv"),
        ]
        .into_iter()
        .collect();

        for query in [
            "Spider-Man: No Way Home",
            "spiderman: noway home",
            "SPIDER_MAN:_NO_WAY_HOME",
            "spider man:nowayhome",
        ] {
            assert_eq!(
                resolve(query, &registry).unwrap(),
                Locator::parse("https://example.com/spidey"),
                "resolving {}",
                query
            );
        }
    }

    /// Tests that an exact fold match wins over longer names sharing a prefix.
    ///
    /// Expected: "Superman" resolves to its own locator, not "superman returns"
    #[test]
    fn resolves_exact_fold_match_only() {
        let registry: MovieRegistry = [
            ("Superman", "https://example.com/u1"),
            ("superman returns", "https://example.com/u2"),
        ]
        .into_iter()
        .collect();

        let entry = resolve_entry("Superman", &registry).unwrap();

        assert_eq!(entry.name, "Superman");
        assert_eq!(entry.locator, Locator::parse("https://example.com/u1"));
    }

    /// Tests first-stored-wins when two keys fold identically.
    ///
    /// Expected: The earlier inserted key is returned
    #[test]
    fn first_stored_match_wins_on_collision() {
        let registry: MovieRegistry = [
            ("Star Wars", "https://example.com/first"),
            ("star-wars", "https://example.com/second"),
        ]
        .into_iter()
        .collect();

        let entry = resolve_entry("STARWARS", &registry).unwrap();

        assert_eq!(entry.name, "Star Wars");
    }

    /// Tests that unknown names and partial names are not found.
    ///
    /// Expected: Err(AppError::NotFound) carrying the query
    #[test]
    fn reports_not_found() {
        let registry = registry(&["Superman"]);

        assert!(matches!(
            resolve("Batman", &registry),
            Err(AppError::NotFound(ref query)) if query == "Batman"
        ));
        assert!(resolve("Super", &registry).is_err());
    }

    /// Tests collision detection used before inserts.
    ///
    /// Expected: Existing key returned for a fold-equal name, None otherwise
    #[test]
    fn finds_colliding_key() {
        let registry = registry(&["The Matrix", "Alien"]);

        assert_eq!(find_colliding("the_matrix", &registry), Some("The Matrix"));
        assert_eq!(find_colliding("The Matrix", &registry), Some("The Matrix"));
        assert_eq!(find_colliding("Aliens", &registry), None);
    }

    /// Tests that an empty prefix returns the first names in insertion order.
    ///
    /// Expected: First 25 of 30 names, in insertion order
    #[test]
    fn empty_prefix_returns_first_names() {
        let names: Vec<String> = (0..30).map(|i| format!("Movie {:02}", 29 - i)).collect();
        let registry: MovieRegistry = names
            .iter()
            .map(|name| (name.as_str(), "/srv/movie.mkv"))
            .collect();

        let suggestions = suggest("", &registry, MAX_SUGGESTIONS);

        assert_eq!(suggestions, names[..25].to_vec());
    }

    /// Tests prefix matches ranking ahead of substring matches.
    ///
    /// Expected: Prefix group then contains group, each in insertion order
    #[test]
    fn ranks_prefix_matches_before_contains_matches() {
        let registry = registry(&[
            "Batman Returns",
            "Man of Steel",
            "Superman",
            "Iron Man",
            "manhattan",
            "Alien",
        ]);

        let suggestions = suggest("MAN", &registry, MAX_SUGGESTIONS);

        assert_eq!(
            suggestions,
            vec![
                "Man of Steel",
                "manhattan",
                "Batman Returns",
                "Superman",
                "Iron Man",
            ]
        );
    }

    /// Tests that the limit truncates after ranking.
    ///
    /// Expected: Only the first prefix match survives a limit of one
    #[test]
    fn truncates_to_limit_after_ranking() {
        let registry = registry(&["Batman", "Bat Out of Hell", "Man Bat"]);

        assert_eq!(suggest("bat", &registry, 1), vec!["Batman"]);
        assert_eq!(
            suggest("bat", &registry, 3),
            vec!["Batman", "Bat Out of Hell", "Man Bat"]
        );
    }

    /// Tests that suggestions match on the unfolded name.
    ///
    /// Expected: "spiderman" does not match "Spider-Man"
    #[test]
    fn suggestions_do_not_fold_separators() {
        let registry = registry(&["Spider-Man"]);

        assert!(suggest("spiderman", &registry, MAX_SUGGESTIONS).is_empty());
        assert_eq!(suggest("spider-", &registry, MAX_SUGGESTIONS), vec!["Spider-Man"]);
    }
}
