//! Age label formatting with Russian numeral agreement for "years".

const YEAR_ONE: &str = "год";
const YEAR_FEW: &str = "года";
const YEAR_MANY: &str = "лет";

/// Returns the count together with the correctly declined word form:
/// last two digits 11-19 always take the many form, otherwise the last
/// digit decides (1 → singular, 2-4 → few, rest → many).
///
/// Zero falls into the many form. Negative counts are accepted as-is:
/// no singular/few window matches a negative remainder, so they all
/// come out in the many form.
pub fn pluralize_years(years: i64) -> String {
    let word = match years % 100 {
        11..=19 => YEAR_MANY,
        _ => match years % 10 {
            1 => YEAR_ONE,
            2..=4 => YEAR_FEW,
            _ => YEAR_MANY,
        },
    };
    format!("{} {}", years, word)
}

/// Age label for the page: how long the winery has been around.
pub fn age_label(founded_year: i32, current_year: i32) -> String {
    pluralize_years(i64::from(current_year) - i64::from(founded_year))
}
