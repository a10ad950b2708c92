use nalgebra::Vector3;

/// Parses an 'x,y,z' triple into a vector, for use as a clap value parser.
pub fn parse_vec3(s: &str) -> std::result::Result<Vector3<f64>, String> {
    let components: Vec<&str> = s.split(',').collect();
    if components.len() != 3 {
        return Err(format!(
            "expected three comma-separated numbers (e.g. '0,0.15,0'), got '{s}'"
        ));
    }

    let mut values = [0.0f64; 3];
    for (slot, raw) in values.iter_mut().zip(&components) {
        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{}' is not a number in '{s}'", raw.trim()))?;
    }

    Ok(Vector3::new(values[0], values[1], values[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_triple() {
        assert_eq!(parse_vec3("0,0.15,0"), Ok(Vector3::new(0.0, 0.15, 0.0)));
    }

    #[test]
    fn tolerates_spaces_around_components() {
        assert_eq!(
            parse_vec3(" 1.5 , -2 , 3 "),
            Ok(Vector3::new(1.5, -2.0, 3.0))
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
    }

    #[test]
    fn rejects_non_numeric_components() {
        assert!(parse_vec3("a,b,c").is_err());
    }
}
