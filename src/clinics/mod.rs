use serde::Serialize;
use std::collections::HashMap;

pub const NO_CLINICS_MESSAGE: &str =
    "No clinics found for this city. Try 'lagos', 'abuja', or 'kano'.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Clinic {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

/// Static city-to-clinics directory. All entries are mock data; there is no
/// live clinic registry behind this.
pub struct ClinicDirectory {
    cities: HashMap<&'static str, Vec<Clinic>>,
}

impl ClinicDirectory {
    pub fn new() -> Self {
        let mut cities = HashMap::new();
        cities.insert(
            "lagos",
            vec![
                Clinic {
                    name: "Lagos General Hospital",
                    address: "1 Hospital Road, Lagos Island, Lagos",
                    phone: "+234 801 234 5678",
                },
                Clinic {
                    name: "Ikeja Community Health Centre",
                    address: "23 Allen Avenue, Ikeja, Lagos",
                    phone: "+234 802 345 6789",
                },
            ],
        );
        cities.insert(
            "abuja",
            vec![
                Clinic {
                    name: "Abuja Central Clinic",
                    address: "5 Constitution Avenue, Central District, Abuja",
                    phone: "+234 803 456 7890",
                },
                Clinic {
                    name: "Garki Family Health Clinic",
                    address: "12 Ladoke Akintola Boulevard, Garki, Abuja",
                    phone: "+234 804 567 8901",
                },
            ],
        );
        cities.insert(
            "kano",
            vec![Clinic {
                name: "Kano Health Centre",
                address: "8 Zaria Road, Nassarawa, Kano",
                phone: "+234 805 678 9012",
            }],
        );
        Self { cities }
    }

    /// Look up clinics for a city, case-insensitively. Misses return an empty
    /// slice plus the canned guidance message. Input is not trimmed, matching
    /// the source behavior; " lagos" is a miss.
    pub fn find(&self, city: &str) -> (&[Clinic], Option<String>) {
        match self.cities.get(city.to_lowercase().as_str()) {
            Some(clinics) => (clinics.as_slice(), None),
            None => (&[], Some(NO_CLINICS_MESSAGE.to_string())),
        }
    }
}

impl Default for ClinicDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let directory = ClinicDirectory::new();
        let (lower, msg_lower) = directory.find("lagos");
        let (mixed, msg_mixed) = directory.find("Lagos");
        assert_eq!(lower, mixed);
        assert_eq!(lower.len(), 2);
        assert!(msg_lower.is_none());
        assert!(msg_mixed.is_none());
    }

    #[test]
    fn unknown_city_returns_message() {
        let directory = ClinicDirectory::new();
        let (clinics, message) = directory.find("ibadan");
        assert!(clinics.is_empty());
        assert_eq!(message.as_deref(), Some(NO_CLINICS_MESSAGE));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let directory = ClinicDirectory::new();
        let (clinics, message) = directory.find(" lagos");
        assert!(clinics.is_empty());
        assert!(message.is_some());
    }

    #[test]
    fn all_seeded_cities_resolve() {
        let directory = ClinicDirectory::new();
        for city in ["lagos", "abuja", "kano"] {
            let (clinics, message) = directory.find(city);
            assert!(!clinics.is_empty(), "{} should have clinics", city);
            assert!(message.is_none());
        }
    }
}
