//! Indian state and union territory names.
//!
//! The buyer/seller jurisdiction values compared for the intra-state vs
//! inter-state GST decision. Exact-name match; no abbreviations.

/// Check whether `name` is a known Indian state or union territory.
pub fn is_known_state(name: &str) -> bool {
    STATES.binary_search(&name).is_ok()
}

/// States and union territories (36 entries). Sorted for binary search.
static STATES: &[&str] = &[
    "Andaman and Nicobar Islands",
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chhattisgarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Ladakh",
    "Lakshadweep",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Puducherry",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert!(is_known_state("Karnataka"));
        assert!(is_known_state("Maharashtra"));
        assert!(is_known_state("Delhi"));
        assert!(is_known_state("Tamil Nadu"));
        assert!(is_known_state("Puducherry"));
    }

    #[test]
    fn unknown_states() {
        assert!(!is_known_state("Bangalore"));
        assert!(!is_known_state(""));
        assert!(!is_known_state("karnataka"));
        assert!(!is_known_state("KA"));
    }

    #[test]
    fn list_is_sorted() {
        for window in STATES.windows(2) {
            assert!(
                window[0] < window[1],
                "states not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(STATES.len(), 36);
    }
}
