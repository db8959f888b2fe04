//! Reference table fixtures.
//!
//! Grid (tech): Junior 18000, Mid 30000, Senior 45000, Team_Lead 60000,
//! Director 80000. Design is 1000 lower at every rank. Every level above
//! Junior has 2 bronze and 3 silver badges per track, named
//! `{track}-{type}-{level}-{n}`.

use std::fmt::Write;

pub const LEVELS: [&str; 5] = ["Junior", "Mid", "Senior", "Team_Lead", "Director"];
pub const TRACKS: [&str; 2] = ["tech", "design"];
pub const TECH_SALARIES: [u32; 5] = [18000, 30000, 45000, 60000, 80000];

pub fn badge(track: &str, badge_type: &str, level: &str, n: usize) -> String {
    format!("{track}-{badge_type}-{level}-{n}")
}

pub fn salary_grid_toml() -> String {
    let mut out = String::new();
    for track in TRACKS {
        let offset = if track == "design" { 1000 } else { 0 };
        for (index, (level, salary)) in LEVELS.iter().zip(TECH_SALARIES).enumerate() {
            writeln!(
                out,
                "[[entries]]\nrank = {}\nlevel = \"{level}\"\ntrack = \"{track}\"\nbase_salary = {}\n",
                index + 1,
                salary - offset
            )
            .unwrap();
        }
    }
    out
}

pub fn badges_toml() -> String {
    let mut out = String::new();
    for track in TRACKS {
        for level in &LEVELS[1..] {
            for (badge_type, count) in [("bronze", 2), ("silver", 3)] {
                for n in 1..=count {
                    writeln!(
                        out,
                        "[[badges]]\nname = \"{}\"\nbadge_type = \"{badge_type}\"\nlevel = \"{level}\"\ntrack = \"{track}\"\n",
                        badge(track, badge_type, level, n)
                    )
                    .unwrap();
                }
            }
        }
    }
    out
}
