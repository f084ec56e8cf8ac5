//! Domain model for a fee entry.
use serde::{Deserialize, Serialize};

/// Fixed checklist of optional facilities offered by the academy.
///
/// The slip form only ever selects from this list; facilities are never
/// created or priced freely.
pub const FACILITY_CHECKLIST: &[(&str, f64)] = &[
    ("Transport", 800.0),
    ("Hostel Mess", 2500.0),
    ("Library", 300.0),
    ("Science Lab", 600.0),
    ("Sports", 400.0),
];

/// Look up a checklist facility by name (case-insensitive).
pub fn find_facility(name: &str) -> Option<FacilityCharge> {
    FACILITY_CHECKLIST
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(n, cost)| FacilityCharge {
            name: (*n).to_string(),
            cost: *cost,
        })
}

/// A selected optional facility and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityCharge {
    pub name: String,
    pub cost: f64,
}

/// Fee data collected from the slip form for one student.
///
/// Field names match the persisted JSON wire format (`cls` for the
/// class/section label). Numeric fields default to 0 when absent so older
/// or partial records stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll: String,
    #[serde(default)]
    pub cls: String,
    #[serde(default)]
    pub tuition: f64,
    #[serde(default)]
    pub additional: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub facilities: Vec<FacilityCharge>,
}

impl FeeEntry {
    /// Grand total for the slip: tuition + additional + all facility costs.
    pub fn total(&self) -> f64 {
        let facility_total: f64 = self.facilities.iter().map(|f| f.cost).sum();
        self.tuition + self.additional + facility_total
    }
}
