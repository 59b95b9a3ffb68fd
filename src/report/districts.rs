/// Full name of a FIRST district, looked up by its code (any case).
pub fn district_name(code: &str) -> Option<&'static str> {
    let name = match code.to_ascii_uppercase().as_str() {
        "ONT" => "FIRST Canada - Ontario",
        "FMA" => "FIRST Mid-Atlantic",
        "ISR" => "FIRST Israel",
        "CHS" => "FIRST Chesapeake",
        "FIT" => "FIRST In Texas",
        "PCH" => "Peachtree",
        "PNW" => "Pacific Northwest",
        "FIM" => "FIRST in Michigan",
        "FSC" => "FIRST South Carolina",
        "FNC" => "FIRST North Carolina",
        "FIN" => "FIRST Indiana Robotics",
        "NE" => "New England",
        _ => return None,
    };
    Some(name)
}

/// District name for display; unknown codes are shown as given.
pub fn display_district(code: &str) -> String {
    district_name(code).map_or_else(|| code.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_any_case() {
        assert_eq!(district_name("FIT"), Some("FIRST In Texas"));
        assert_eq!(district_name("fit"), Some("FIRST In Texas"));
        assert_eq!(district_name("Ne"), Some("New England"));
        assert_eq!(district_name("ont"), Some("FIRST Canada - Ontario"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(district_name("XYZ"), None);
        assert_eq!(display_district("xyz"), "xyz");
        assert_eq!(display_district("pnw"), "Pacific Northwest");
    }
}
