/// Split a comma-separated argument, dropping blanks. A blank entry in
/// `--plays` is not a play, so `3,,1` scripts two snaps.
pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}
