//! Hong Kong district rainfall catalogue

use rand::Rng;

/// One district's reported rainfall range in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct District {
    pub name: &'static str,
    pub rainfall_min: f64,
    pub rainfall_max: f64,
}

const fn district(name: &'static str, rainfall_min: f64, rainfall_max: f64) -> District {
    District { name, rainfall_min, rainfall_max }
}

/// Rainfall ranges for 23 September 2025, 18:00
pub const DISTRICTS: [District; 18] = [
    district("Kwun Tong", 4.0, 5.0),
    district("Eastern District", 3.0, 5.0),
    district("Wong Tai Sin", 3.0, 5.0),
    district("Kowloon City", 3.0, 4.0),
    district("Southern District", 2.0, 4.0),
    district("Central & Western District", 2.0, 3.0),
    district("Sha Tin", 2.0, 3.0),
    district("Sham Shui Po", 2.0, 3.0),
    district("Wan Chai", 2.0, 3.0),
    district("Yau Tsim Mong", 2.0, 3.0),
    district("North District", 1.0, 3.0),
    district("Tsuen Wan", 1.0, 3.0),
    district("Sai Kung", 0.0, 8.0),
    district("Tai Po", 0.0, 6.0),
    district("Kwai Tsing", 0.0, 3.0),
    district("Yuen Long", 0.0, 3.0),
    district("Islands District", 0.0, 2.0),
    district("Tuen Mun", 0.0, 1.0),
];

pub const TABLE_TITLE: &str = "Click to reveal rainfall in a random Hong Kong district (September 23, 2025 at 18:00)";

pub fn all() -> &'static [District] {
    &DISTRICTS
}

/// Case-insensitive lookup by name
pub fn find(name: &str) -> Option<usize> {
    DISTRICTS.iter().position(|d| d.name.eq_ignore_ascii_case(name.trim()))
}

/// A single click's random draw: which district, and which end of its range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub district_index: usize,
    pub rainfall: f64,
}

impl Selection {
    /// Either end of a district's range, with equal odds
    pub fn for_index<R: Rng + ?Sized>(district_index: usize, rng: &mut R) -> Self {
        let d = &DISTRICTS[district_index];
        let rainfall = if rng.gen_bool(0.5) { d.rainfall_min } else { d.rainfall_max };
        Self { district_index, rainfall }
    }

    pub fn district(&self) -> &'static District {
        &DISTRICTS[self.district_index]
    }
}

/// Pick a district uniformly, then its min or max with equal odds
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Selection {
    let district_index = rng.gen_range(0..DISTRICTS.len());
    Selection::for_index(district_index, rng)
}

/// Plain-text rows for the table: header, rule, one row per district
pub fn table_lines() -> Vec<String> {
    let name_width = DISTRICTS.iter().map(|d| d.name.chars().count()).max().unwrap_or(8);
    let mut lines = Vec::with_capacity(DISTRICTS.len() + 2);
    lines.push(format!("{:<name_width$}  {:>7}  {:>7}", "District", "Min mm", "Max mm"));
    lines.push("─".repeat(name_width + 18));
    for d in &DISTRICTS {
        lines.push(format!(
            "{:<name_width$}  {:>7}  {:>7}",
            d.name, d.rainfall_min, d.rainfall_max
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn catalogue_has_eighteen_valid_ranges() {
        assert_eq!(all().len(), 18);
        for d in all() {
            assert!(d.rainfall_min >= 0.0);
            assert!(d.rainfall_min <= d.rainfall_max, "{} has min > max", d.name);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let d = &DISTRICTS[find("sha tin").unwrap()];
        assert_eq!(d.name, "Sha Tin");
        assert_eq!(d.rainfall_max, 3.0);
        assert!(find("Atlantis").is_none());
    }

    #[test]
    fn pick_returns_an_endpoint_of_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let sel = pick(&mut rng);
            assert!(sel.district_index < DISTRICTS.len());
            let d = sel.district();
            assert!(sel.rainfall == d.rainfall_min || sel.rainfall == d.rainfall_max);
        }
    }

    #[test]
    fn selection_for_index_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(3);
        let sai_kung = find("Sai Kung").unwrap();
        let draws: Vec<f64> = (0..200)
            .map(|_| Selection::for_index(sai_kung, &mut rng).rainfall)
            .collect();
        assert!(draws.iter().all(|r| *r == 0.0 || *r == 8.0));
        assert!(draws.contains(&0.0));
        assert!(draws.contains(&8.0));
    }

    #[test]
    fn pick_reaches_every_district() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 18];
        for _ in 0..2000 {
            seen[pick(&mut rng).district_index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn table_lists_every_district() {
        let lines = table_lines();
        assert_eq!(lines.len(), DISTRICTS.len() + 2);
        assert!(lines[0].starts_with("District"));
        assert!(lines.iter().any(|l| l.contains("Sai Kung") && l.contains('8')));
    }
}
