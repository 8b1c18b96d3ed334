use crate::error::{Error, Result};

/// Canonical name for an undirected route
///
/// Takes a route name of the form `SRC-DST` and sorts the two airport
/// names, so flights from A to B and from B to A share one identifier.
///
/// ```
/// # use flight_paths::utils::route_name_identifier;
/// assert_eq!(route_name_identifier("JFK-HEL").unwrap(), "HEL-JFK");
/// assert_eq!(route_name_identifier("HEL-JFK").unwrap(), "HEL-JFK");
/// ```
pub fn route_name_identifier(name: &str) -> Result<String> {
    let mut parts = name.split('-');
    let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed(name));
    };
    if a.is_empty() || b.is_empty() {
        return Err(malformed(name));
    }

    let (first, second) = if b < a { (b, a) } else { (a, b) };
    Ok(format!("{first}-{second}"))
}

fn malformed(name: &str) -> Error {
    Error::MalformedRouteName {
        name: name.to_string(),
    }
}

/// Numeric identifier for an undirected route between two airport ids
///
/// Concatenates the decimal digits of the smaller and the larger id, e.g.
/// `route_identifier(42, 7) == 742`. The result fits in a `u128` for any
/// pair of `u32` ids.
pub fn route_identifier(id1: u32, id2: u32) -> u128 {
    let (low, high) = if id2 < id1 { (id2, id1) } else { (id1, id2) };
    let high_digits = high.checked_ilog10().map_or(1, |log| log + 1);
    low as u128 * 10u128.pow(high_digits) + high as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok_eq};
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn name_identifier_is_direction_independent() {
        assert_ok_eq!(route_name_identifier("SFO-NRT"), "NRT-SFO".to_string());
        assert_ok_eq!(route_name_identifier("NRT-SFO"), "NRT-SFO".to_string());
    }

    #[test]
    fn name_identifier_same_airport() {
        assert_ok_eq!(route_name_identifier("HEL-HEL"), "HEL-HEL".to_string());
    }

    #[test]
    fn name_identifier_rejects_malformed_names() {
        assert_err!(route_name_identifier("HEL"));
        assert_err!(route_name_identifier("HEL-"));
        assert_err!(route_name_identifier("-HEL"));
        assert_err!(route_name_identifier("A-B-C"));

        assert_compact_debug_snapshot!(route_name_identifier("").unwrap_err(), @r#"MalformedRouteName { name: "" }"#);
    }

    #[test]
    fn numeric_identifier() {
        assert_eq!(route_identifier(42, 7), 742);
        assert_eq!(route_identifier(7, 42), 742);
        assert_eq!(route_identifier(3, 3), 33);
        assert_eq!(route_identifier(0, 0), 0);
        assert_eq!(route_identifier(0, 15), 15);
        assert_eq!(route_identifier(12, 100), 12100);
    }

    #[test]
    fn numeric_identifier_does_not_overflow() {
        assert_eq!(
            route_identifier(u32::MAX, u32::MAX),
            42_949_672_954_294_967_295
        );
    }
}
