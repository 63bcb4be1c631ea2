use std::collections::HashMap;

/// Format for the first two major ways of a leg.
pub const LEG_MAJOR_WAYS_FORMAT: &str = "LEG_MAJOR_WAYS_FORMAT";
/// Format for a leg's destination followed by its major ways.
pub const WAYPOINT_DESTINATION_VIA_WAYPOINTS_FORMAT: &str =
    "WAYPOINT_DESTINATION_VIA_WAYPOINTS_FORMAT";
/// Format for a leg's source and destination.
pub const WAYPOINT_SOURCE_DESTINATION_FORMAT: &str = "WAYPOINT_SOURCE_DESTINATION_FORMAT";
/// Title above the step list.
pub const TURN_BY_TURN_LIST_TITLE: &str = "TURN_BY_TURN_LIST_TITLE";

const DEFAULTS: [(&str, &str); 4] = [
    (LEG_MAJOR_WAYS_FORMAT, "%@ and %@"),
    (WAYPOINT_DESTINATION_VIA_WAYPOINTS_FORMAT, "%@, via %@"),
    (WAYPOINT_SOURCE_DESTINATION_FORMAT, "%@ and %@"),
    (TURN_BY_TURN_LIST_TITLE, "Turn by Turn list"),
];

/// String table keyed by identifier, with printf-style object placeholders.
///
/// Placeholders: `%@` takes the next argument, `%2$@` takes the second
/// argument, `%%` is a literal percent sign. Missing arguments render empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedStrings {
    table: HashMap<String, String>,
}

impl Default for LocalizedStrings {
    fn default() -> Self {
        Self {
            table: DEFAULTS
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
        }
    }
}

impl LocalizedStrings {
    /// Defaults overlaid with `overrides`.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut strings = Self::default();
        for (key, value) in overrides {
            strings.table.insert(key.clone(), value.clone());
        }
        strings
    }

    /// The raw format string, or the key itself when unknown.
    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(key) {
            Some(value) => value.as_str(),
            None => {
                log::debug!("no localized string for {key}");
                key
            }
        }
    }

    #[must_use]
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        format_template(self.lookup(key), args)
    }
}

fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let directive = &rest[pos + 1..];

        if let Some(after) = directive.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = directive.strip_prefix('@') {
            out.push_str(args.get(next_arg).copied().unwrap_or_default());
            next_arg += 1;
            rest = after;
        } else if let Some((index, after)) = positional(directive) {
            out.push_str(args.get(index).copied().unwrap_or_default());
            rest = after;
        } else {
            out.push('%');
            rest = directive;
        }
    }
    out.push_str(rest);
    out
}

/// Parses `N$@` into a zero-based argument index and the remaining text.
fn positional(directive: &str) -> Option<(usize, &str)> {
    let digits = directive.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let after = directive[digits..].strip_prefix("$@")?;
    let index: usize = directive[..digits].parse().ok()?;
    Some((index.checked_sub(1)?, after))
}
