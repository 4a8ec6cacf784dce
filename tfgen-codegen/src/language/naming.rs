//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how to transform schema keys into type and field names,
/// and how to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a key to a type name (e.g., "network_rule" -> "NetworkRule")
    pub key_to_type: fn(&str) -> String,
    /// Transform a key to a struct field name
    pub key_to_field: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.key_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.key_to_field)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        key_to_type: |s| s.to_uppercase(),
        key_to_field: |s| s.to_string(),
        reserved_words: &["type", "TYPE"],
        escape_reserved: |s| format!("{s}_"),
    };

    #[test]
    fn test_escapes_reserved_after_transform() {
        assert_eq!(TEST_NAMING.type_name("type"), "TYPE_");
        assert_eq!(TEST_NAMING.field_name("name"), "name");
    }
}
