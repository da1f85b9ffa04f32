mod diphthong_tests;
mod render_tests;
mod simulate_tests;
mod tone_tests;
mod validate_tests;

pub(crate) fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
