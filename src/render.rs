//! Rendering a parsed address back to canonical string form.
//!
//! Rendering is pure: it reads the [`ParsedAddress`] without mutating it
//! and derives any display form locally.

use crate::ParsedAddress;
use std::fmt;

impl ParsedAddress {
    /// Render the full address in canonical form.
    ///
    /// PO Boxes render as `PO BOX <number>`; otherwise the direction is
    /// placed before or after the street per [`Self::render_street_only`]'s
    /// policy. City, state, and zip are appended when known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let addr = usaddress_rs::parse("123 N Center St. Lehi, UT 84043");
    ///
    /// assert_eq!(addr.render(), "123 N CENTER ST LEHI, UT 84043");
    /// ```
    pub fn render(&self) -> String {
        let mut out = self.render_street_line().trim().to_string();

        if let Some(city) = &self.city {
            out.push(' ');
            out.push_str(city);
        }
        if let Some(state) = &self.state {
            out.push_str(", ");
            out.push_str(state);
        }
        if let Some(postal_code) = &self.postal_code {
            out.push(' ');
            out.push_str(postal_code);
        }

        out.replace("  ", " ")
    }

    /// Render only the street portion, omitting city/state/zip.
    ///
    /// When the normalized original is available and the city is known,
    /// this returns the prefix of the original up to the first occurrence
    /// of the city substring. That shortcut misfires if the city name also
    /// occurs in the street portion (a street named after its city); the
    /// behavior is kept for compatibility with existing consumers.
    pub fn render_street_only(&self) -> String {
        if !self.original.is_empty() {
            if let Some(city) = &self.city {
                if let Some(position) = self.original.find(city.as_str()) {
                    return self.original[..position].to_string();
                }
                return self.original.clone();
            }
        }

        self.render_street_line().trim().to_string().replace("  ", " ")
    }

    /// Assemble the street line (house number / direction / name / type /
    /// unit) with the direction-placement policy applied.
    fn render_street_line(&self) -> String {
        let house_number = self.house_number.as_deref().unwrap_or("");
        let street_name = self.street_name.as_deref().unwrap_or("");

        if street_name.eq_ignore_ascii_case("PO BOX") {
            return format!("PO BOX {house_number}");
        }

        let direction = self.street_direction.as_deref().unwrap_or("");
        let street_type = self.street_type.as_deref().unwrap_or("");

        let mut line = if self.postfix_direction() {
            format!("{house_number} {street_name} {street_type} {direction}")
        } else {
            format!("{house_number} {direction} {street_name} {street_type}")
        }
        .trim()
        .to_string();

        if let Some(unit) = &self.unit {
            line.push_str(" #");
            line.push_str(unit);
        }

        line
    }

    /// Whether the direction belongs after the street type.
    ///
    /// True for Washington addresses, whose convention is a postfix
    /// direction, and whenever the direction token appears later than the
    /// street-type token in the original string, preserving the input's
    /// word order for mixed pre/post-direction forms.
    fn postfix_direction(&self) -> bool {
        if let Some(state) = &self.state {
            if state.eq_ignore_ascii_case("WA") {
                return true;
            }
        }
        let Some(direction) = self.street_direction.as_deref() else {
            return false;
        };
        let street_type = self.street_type.as_deref().unwrap_or("");

        // Missing substrings sort before every found position.
        let position = |needle: String| -> i64 {
            self.original
                .find(&needle)
                .map(|index| index as i64)
                .unwrap_or(-1)
        };

        position(format!(" {direction}")) > position(format!(" {street_type}"))
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
