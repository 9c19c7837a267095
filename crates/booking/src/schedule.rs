use serde::Deserialize;

pub const DEFAULT_SLOTS: [&str; 6] = [
    "10:00 AM", "10:30 AM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
];

/// Time slots offered on every bookable day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Schedule {
    pub slots: Vec<String>,
    pub timezone_label: String,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS.iter().map(|s| (*s).to_owned()).collect(),
            timezone_label: "Eastern Time".to_owned(),
        }
    }
}

impl Schedule {
    pub fn offers(&self, slot: &str) -> bool {
        self.slots.iter().any(|s| s == slot)
    }
}
