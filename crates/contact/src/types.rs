use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// What the contact modal currently shows.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ContactOption {
    #[default]
    None,
    Calendar,
    Form,
}

impl ContactOption {
    pub fn label(&self) -> &'static str {
        match self {
            ContactOption::None => "Get in touch",
            ContactOption::Calendar => "Schedule a Meeting",
            ContactOption::Form => "Send a Message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option() {
        assert_eq!("Calendar".parse::<ContactOption>(), Ok(ContactOption::Calendar));
        assert_eq!(ContactOption::Form.to_string(), "form");
        assert!("phone".parse::<ContactOption>().is_err());
        assert_eq!(ContactOption::VARIANTS.len(), 3);
    }
}
