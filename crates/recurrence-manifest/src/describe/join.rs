/// Joins `items` as `a, b and c`.
///
/// A single item is returned as is and an empty slice yields an empty string.
/// Items may themselves contain commas.
pub(crate) fn join_list(items: &[&str], conjunction: &str) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} {conjunction} {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(join_list(&[], "and"), "");
    }

    #[test]
    fn single() {
        assert_eq!(join_list(&["monday"], "and"), "monday");
    }

    #[test]
    fn pair_has_no_comma() {
        assert_eq!(join_list(&["monday", "wednesday"], "and"), "monday and wednesday");
    }

    #[test]
    fn many() {
        let joined = join_list(&["mandag", "onsdag", "fredag", "søndag"], "og");
        assert_eq!(joined, "mandag, onsdag, fredag og søndag");
        assert_eq!(joined.matches(',').count(), 2);
    }

    #[test]
    fn commas_inside_items_are_kept() {
        assert_eq!(
            join_list(&["a, b", "c", "d, e"], "and"),
            "a, b, c and d, e"
        );
    }
}
