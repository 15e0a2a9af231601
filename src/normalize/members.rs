use super::field;
use crate::csv::RawRow;
use crate::sanitize;
use crate::sheet::Member;

const ID: &[&str] = &["id", "Id", "ID"];
const NAME: &[&str] = &["name", "Name", "NAME"];
const ROLE: &[&str] = &["role", "Role", "ROLE"];
const COLOR_CLASS: &[&str] = &[
    "colorClass",
    "ColorClass",
    "color_class",
    "Color Class",
    "color",
    "Color",
];
const CAPACITY: &[&str] = &["capacity", "Capacity", "CAPACITY"];
const FOCUS: &[&str] = &["focus", "Focus", "FOCUS"];
const BANDWIDTH_HOURS: &[&str] = &[
    "bandwidthHours",
    "BandwidthHours",
    "bandwidth_hours",
    "Bandwidth Hours",
    "bandwidth",
    "Bandwidth",
];

const DEFAULT_BANDWIDTH_HOURS: f64 = 40.0;

/// Normalize the members table
///
/// Rows without both an id and a name are dropped.
pub fn normalize_members(rows: &[RawRow]) -> Vec<Member> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let raw_id = field(row, ID);
            let raw_name = field(row, NAME);
            // A blank leading row must not turn into a default member
            if index == 0 && raw_id.is_empty() && raw_name.is_empty() {
                return None;
            }

            let id = sanitize::identifier(raw_id);
            Some(Member {
                name: sanitize::text(raw_name),
                role: sanitize::text(field(row, ROLE)),
                color_class: sanitize::color_class(field(row, COLOR_CLASS), &id),
                capacity: sanitize::text(field(row, CAPACITY)),
                focus: sanitize::text(field(row, FOCUS)),
                bandwidth_hours: sanitize::positive_numeric(
                    field(row, BANDWIDTH_HOURS),
                    DEFAULT_BANDWIDTH_HOURS,
                ),
                id,
            })
        })
        .filter(|member| !member.id.is_empty() && !member.name.is_empty())
        .collect()
}
