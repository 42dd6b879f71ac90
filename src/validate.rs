use crate::error::DefconError;
use crate::registry::Registry;

/// Fail on the first required definition that has no value.
pub fn check_required(registry: &Registry) -> Result<(), DefconError> {
    match registry
        .iter()
        .find(|def| def.required && !def.has_value())
    {
        Some(def) => Err(DefconError::MissingValue {
            name: def.name().to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_without_value_passes() {
        let mut registry = Registry::new();
        registry.get_or_create("NAME");
        assert!(check_required(&registry).is_ok());
    }

    #[test]
    fn test_required_with_value_passes() {
        let mut registry = Registry::new();
        let def = registry.get_or_create("NAME");
        def.required = true;
        def.assign("box").unwrap();
        assert!(check_required(&registry).is_ok());
    }

    #[test]
    fn test_reports_first_violation_in_order() {
        let mut registry = Registry::new();
        registry.get_or_create("OK");
        registry.get_or_create("FIRST").required = true;
        registry.get_or_create("SECOND").required = true;

        match check_required(&registry) {
            Err(DefconError::MissingValue { name }) => assert_eq!(name, "FIRST"),
            other => panic!("expected missing value, got {other:?}"),
        }
    }
}
