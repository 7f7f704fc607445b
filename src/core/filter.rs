//! Filter/sort engine over the in-memory collection
//!
//! Pure functions: no I/O, no mutation of the catalog. Both `search`
//! and `sort_books` work on whatever order the caller hands them and
//! never assume sorted input.

use crate::model::Book;

/// Optional field predicates, AND-combined.
///
/// Text fields match as case-insensitive substrings; `year` matches
/// exactly. An unset field is always true.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.year.is_none() && self.genre.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        let title_ok = self
            .title
            .as_deref()
            .is_none_or(|needle| contains_ci(&book.title, needle));
        let author_ok = self
            .author
            .as_deref()
            .is_none_or(|needle| contains_ci(&book.author, needle));
        let genre_ok = self
            .genre
            .as_deref()
            .is_none_or(|needle| contains_ci(&book.genre, needle));
        let year_ok = self.year.is_none_or(|year| book.year == year);

        title_ok && author_ok && genre_ok && year_ok
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter the collection, preserving input order.
///
/// Empty criteria return the full input unchanged.
pub fn search<'a>(books: &'a [Book], criteria: &SearchCriteria) -> Vec<&'a Book> {
    books.iter().filter(|b| criteria.matches(b)).collect()
}

/// The sortable fields of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Author,
    Year,
    Genre,
}

/// Stable sort by the chosen field, ascending unless `reverse`.
///
/// Descending order flips the comparator rather than reversing the
/// output, so elements comparing equal keep their input order in both
/// directions.
pub fn sort_books<'a>(
    mut books: Vec<&'a Book>,
    field: SortField,
    reverse: bool,
) -> Vec<&'a Book> {
    let key = |a: &&Book, b: &&Book| match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Author => a.author.cmp(&b.author),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Genre => a.genre.cmp(&b.genre),
    };

    if reverse {
        books.sort_by(|a, b| key(b, a));
    } else {
        books.sort_by(key);
    }

    books
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Vec<Book> {
        vec![
            Book::new("War and Peace", "Tolstoy", 1869, "Novel"),
            Book::new("Anna Karenina", "Tolstoy", 1877, "Novel"),
            Book::new("Crime and Punishment", "Dostoevsky", 1866, "Novel"),
            Book::new("The Cherry Orchard", "Chekhov", 1904, "Play"),
        ]
    }

    #[test]
    fn test_empty_criteria_return_input_unchanged() {
        let books = shelf();
        let results = search(&books, &SearchCriteria::default());
        assert_eq!(results.len(), books.len());
        for (got, want) in results.iter().zip(books.iter()) {
            assert_eq!(*got, want);
        }
    }

    #[test]
    fn test_author_match_is_case_insensitive_substring() {
        let books = shelf();
        let criteria = SearchCriteria {
            author: Some("tolst".into()),
            ..Default::default()
        };
        let results = search(&books, &criteria);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "War and Peace");
        assert_eq!(results[1].title, "Anna Karenina");
    }

    #[test]
    fn test_year_matches_exactly() {
        let books = shelf();
        let criteria = SearchCriteria {
            year: Some(1866),
            ..Default::default()
        };
        let results = search(&books, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].author, "Dostoevsky");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let books = shelf();
        let criteria = SearchCriteria {
            author: Some("Tolstoy".into()),
            year: Some(1877),
            ..Default::default()
        };
        let results = search(&books, &criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Anna Karenina");
    }

    #[test]
    fn test_adding_criteria_never_grows_the_result() {
        let books = shelf();
        let mut criteria = SearchCriteria {
            genre: Some("Novel".into()),
            ..Default::default()
        };
        let wide = search(&books, &criteria).len();

        criteria.author = Some("Tolstoy".into());
        let narrower = search(&books, &criteria).len();

        criteria.title = Some("Anna".into());
        let narrowest = search(&books, &criteria).len();

        assert!(wide >= narrower);
        assert!(narrower >= narrowest);
    }

    #[test]
    fn test_search_preserves_input_order() {
        let books = shelf();
        let criteria = SearchCriteria {
            genre: Some("novel".into()),
            ..Default::default()
        };
        let results = search(&books, &criteria);
        let titles: Vec<&str> = results.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            ["War and Peace", "Anna Karenina", "Crime and Punishment"]
        );
    }

    #[test]
    fn test_no_match_returns_empty() {
        let books = shelf();
        let criteria = SearchCriteria {
            title: Some("Ulysses".into()),
            ..Default::default()
        };
        assert!(search(&books, &criteria).is_empty());
    }

    #[test]
    fn test_sort_by_year_ascending() {
        let books = shelf();
        let sorted = sort_books(books.iter().collect(), SortField::Year, false);
        let years: Vec<i32> = sorted.iter().map(|b| b.year).collect();
        assert_eq!(years, [1866, 1869, 1877, 1904]);
    }

    #[test]
    fn test_sort_reverse_flips_order() {
        let books = shelf();
        let sorted = sort_books(books.iter().collect(), SortField::Year, true);
        let years: Vec<i32> = sorted.iter().map(|b| b.year).collect();
        assert_eq!(years, [1904, 1877, 1869, 1866]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let books = shelf();
        // Three novels share the genre key; their input order must survive
        // the sort in both directions.
        let sorted = sort_books(books.iter().collect(), SortField::Genre, false);
        let titles: Vec<&str> = sorted.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "War and Peace",
                "Anna Karenina",
                "Crime and Punishment",
                "The Cherry Orchard"
            ]
        );

        let reversed = sort_books(books.iter().collect(), SortField::Genre, true);
        let titles: Vec<&str> = reversed.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "The Cherry Orchard",
                "War and Peace",
                "Anna Karenina",
                "Crime and Punishment"
            ]
        );
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let books = shelf();
        let once = sort_books(books.iter().collect(), SortField::Author, false);
        let twice = sort_books(once.clone(), SortField::Author, false);
        let a: Vec<&str> = once.iter().map(|b| b.title.as_str()).collect();
        let b: Vec<&str> = twice.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sort_does_not_touch_the_catalog() {
        let books = shelf();
        let _ = sort_books(books.iter().collect(), SortField::Year, true);
        assert_eq!(books[0].title, "War and Peace");
        assert_eq!(books[3].title, "The Cherry Orchard");
    }
}
