use thiserror::Error;

/// Decoding a closed-value enum from its wire string failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumValueError {
    #[error("value for {enum_name} cannot be empty")]
    Empty { enum_name: &'static str },

    #[error("cannot create {enum_name} from '{value}'")]
    Unknown {
        enum_name: &'static str,
        value: String,
    },
}

impl EnumValueError {
    /// Name of the enum that rejected the value.
    pub fn enum_name(&self) -> &'static str {
        match self {
            Self::Empty { enum_name } | Self::Unknown { enum_name, .. } => enum_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_display() {
        let err = EnumValueError::Empty { enum_name: "Locale" };
        assert_eq!(err.to_string(), "value for Locale cannot be empty");
    }

    #[test]
    fn test_unknown_display() {
        let err = EnumValueError::Unknown {
            enum_name: "Destination",
            value: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "cannot create Destination from 'bogus'");
        assert_eq!(err.enum_name(), "Destination");
    }
}
