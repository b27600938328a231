//! Scheduling module - the fixed list of agencies with external booking pages.
//!
//! No state and no validation. Each agency is a plain outbound link.

use serde::Serialize;

/// An agency and its external scheduling page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Agency {
    pub name: &'static str,
    pub url: &'static str,
}

const AGENCIES: [Agency; 3] = [
    Agency {
        name: "Natal - RN",
        url: "https://cal.com/fpgdrn/natal",
    },
    Agency {
        name: "Mossoró - RN",
        url: "https://cal.com/fpgdrn/mossoro",
    },
    Agency {
        name: "Caicó - RN",
        url: "https://cal.com/fpgdrn/caico",
    },
];

/// Agencies in display order.
pub fn agencies() -> &'static [Agency] {
    &AGENCIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_agency_links_to_https() {
        assert_eq!(agencies().len(), 3);
        for agency in agencies() {
            assert!(agency.url.starts_with("https://"), "{}", agency.name);
        }
    }

    #[test]
    fn agency_names_are_unique() {
        let mut names: Vec<_> = agencies().iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), agencies().len());
    }
}
