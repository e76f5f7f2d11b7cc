//! Spoken list formatting.

/// Joins items the way they would be read aloud.
///
/// Items are separated by `", "`, except the last pair which is joined
/// with `" and "`. An empty slice yields an empty string.
///
/// ```
/// use mistlock_observatory::fractals::join_spoken_list;
///
/// assert_eq!(join_spoken_list(&["Swamp"]), "Swamp");
/// assert_eq!(join_spoken_list(&["A", "B", "C"]), "A, B and C");
/// ```
pub fn join_spoken_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}
