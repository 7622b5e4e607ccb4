//! Fixed-vocabulary translation to the partner's codes.
//!
//! The partner accepts single-letter race symbols and Y/N flags; the
//! upstream system stores small integer codes and "1"/"0" strings.

use roster_model::{ComputedValues, StudentRecord};

/// Translate an upstream race code to the partner's single-letter symbol.
///
/// Codes 12 and 15 both map to `I`: two upstream categories the partner
/// vocabulary does not distinguish. Absent and out-of-table codes map to the
/// empty string, so the field is exported blank.
#[must_use]
pub fn race_symbol(code: Option<i64>) -> &'static str {
    match code {
        Some(12) | Some(15) => "I",
        Some(13) => "A",
        Some(14) => "B",
        Some(16) => "W",
        Some(17) => "M",
        _ => "",
    }
}

/// Collapse a boolean-like upstream value to the partner's Y/N.
///
/// `Y` only when the raw value is exactly the string "1". Absent and
/// explicit-false both come out `N`; callers that need to tell them apart
/// must keep the raw value.
#[must_use]
pub fn yes_no(raw: Option<&str>) -> &'static str {
    match raw {
        Some("1") => "Y",
        _ => "N",
    }
}

/// Map one validated record plus its proficiency lookup result to export
/// values.
#[must_use]
pub fn compute_values(record: &StudentRecord, lep_raw: Option<&str>) -> ComputedValues {
    ComputedValues {
        ethnicity: yes_no(record.ethnicity_flag.as_deref()).to_string(),
        race: race_symbol(record.race_code).to_string(),
        lep: yes_no(lep_raw).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_twelve_and_fifteen_collapse() {
        assert_eq!(race_symbol(Some(12)), "I");
        assert_eq!(race_symbol(Some(15)), "I");
    }

    #[test]
    fn unknown_code_is_blank() {
        assert_eq!(race_symbol(Some(11)), "");
        assert_eq!(race_symbol(Some(0)), "");
        assert_eq!(race_symbol(None), "");
    }

    #[test]
    fn only_literal_one_is_yes() {
        assert_eq!(yes_no(Some("1")), "Y");
        assert_eq!(yes_no(Some("0")), "N");
        assert_eq!(yes_no(Some("true")), "N");
        assert_eq!(yes_no(Some(" 1")), "N");
        assert_eq!(yes_no(Some("")), "N");
        assert_eq!(yes_no(None), "N");
    }
}
