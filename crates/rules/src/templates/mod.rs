//! Message template rendering.
//!
//! Templates carry `{{token}}` placeholders drawn from a closed set of flight
//! fields. Known tokens are substituted everywhere they occur; anything else
//! between braces is copied through untouched so an unknown token never
//! aborts message generation.

use paxmsg_core::Flight;

/// Flight fields a message template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    FlightNumber,
    DepartureTime,
    Status,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::FlightNumber,
        Placeholder::DepartureTime,
        Placeholder::Status,
    ];

    /// Token name as written between the braces.
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::FlightNumber => "flightNumber",
            Placeholder::DepartureTime => "departureTime",
            Placeholder::Status => "status",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The flight's value for this token. Departure time is the stored ISO string.
    pub fn value<'a>(&self, flight: &'a Flight) -> &'a str {
        match self {
            Placeholder::FlightNumber => &flight.flight_number,
            Placeholder::DepartureTime => &flight.departure_time,
            Placeholder::Status => &flight.status,
        }
    }
}

/// Substitute every supported placeholder in `template` with the flight's values.
///
/// Substituted values are never rescanned, so a status that happens to contain
/// `{{...}}` is emitted literally.
pub fn render(template: &str, flight: &Flight) -> String {
    let mut out = String::with_capacity(template.len());
    scan(template, |segment| match segment {
        Segment::Text(text) => out.push_str(text),
        Segment::Token(token) => match Placeholder::from_name(token.name) {
            Some(p) => out.push_str(p.value(flight)),
            None => out.push_str(token.raw),
        },
    });
    out
}

/// Placeholder names in `template` outside the supported set, in first-seen order.
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    scan(template, |segment| {
        if let Segment::Token(token) = segment {
            let name = token.name;
            if !name.is_empty()
                && Placeholder::from_name(name).is_none()
                && !unknown.iter().any(|n| n == name)
            {
                unknown.push(name.to_string());
            }
        }
    });
    unknown
}

// ── Scanner ─────────────────────────────────────────────────────────

struct Token<'a> {
    /// Text between the braces.
    name: &'a str,
    /// The full `{{name}}` span.
    raw: &'a str,
}

enum Segment<'a> {
    Text(&'a str),
    Token(Token<'a>),
}

/// Split `template` into literal text and `{{name}}` tokens.
///
/// A name may not itself contain `{`; on `{{{x}}}` the scanner emits one
/// literal `{` and retries one byte later, yielding the token `{{x}}`.
fn scan<'a>(template: &'a str, mut emit: impl FnMut(Segment<'a>)) {
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        if start > 0 {
            emit(Segment::Text(&rest[..start]));
        }
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            emit(Segment::Text(&rest[start..]));
            return;
        };
        let name = &after[..end];
        if name.contains('{') {
            emit(Segment::Text(&rest[start..start + 1]));
            rest = &rest[start + 1..];
            continue;
        }
        emit(Segment::Token(Token {
            name,
            raw: &rest[start..start + 2 + end + 2],
        }));
        rest = &after[end + 2..];
    }
    if !rest.is_empty() {
        emit(Segment::Text(rest));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> Flight {
        Flight {
            id: "f-1".to_string(),
            flight_number: "LH123".to_string(),
            status: "Delayed".to_string(),
            departure_time: "2026-03-01T10:30:00Z".to_string(),
            arrival_time: "2026-03-01T12:45:00Z".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn render_all_supported_tokens() {
        let flight = sample_flight();
        let template = "{{flightNumber}} ({{status}}) departs {{departureTime}}";
        assert_eq!(
            render(template, &flight),
            "LH123 (Delayed) departs 2026-03-01T10:30:00Z"
        );
    }

    #[test]
    fn render_replaces_every_occurrence() {
        let flight = sample_flight();
        let template = "{{flightNumber}}: {{status}}. Again, {{flightNumber}} is {{status}}.";
        assert_eq!(
            render(template, &flight),
            "LH123: Delayed. Again, LH123 is Delayed."
        );
    }

    #[test]
    fn departure_time_is_not_localized() {
        let mut flight = sample_flight();
        flight.departure_time = "2026-03-01T12:30:00+02:00".to_string();
        assert_eq!(
            render("Departs {{departureTime}}", &flight),
            "Departs 2026-03-01T12:30:00+02:00"
        );
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let flight = sample_flight();
        assert_eq!(
            render("Gate {{gate}} for {{flightNumber}}", &flight),
            "Gate {{gate}} for LH123"
        );
        // Padded names are not the supported token.
        assert_eq!(render("{{ status }}", &flight), "{{ status }}");
    }

    #[test]
    fn no_placeholders_passes_through() {
        let flight = sample_flight();
        assert_eq!(render("Boarding soon", &flight), "Boarding soon");
        assert_eq!(render("", &flight), "");
    }

    #[test]
    fn unterminated_and_nested_braces() {
        let flight = sample_flight();
        assert_eq!(render("Status: {{status", &flight), "Status: {{status");
        assert_eq!(render("{{{flightNumber}}}", &flight), "{LH123}");
        assert_eq!(render("{{a {{status}}", &flight), "{{a Delayed");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let mut flight = sample_flight();
        flight.status = "{{flightNumber}}".to_string();
        assert_eq!(render("{{status}}", &flight), "{{flightNumber}}");
    }

    #[test]
    fn unknown_placeholders_are_listed_once() {
        let names = unknown_placeholders("{{gate}} {{flightNumber}} {{seat}} {{gate}} {{}}");
        assert_eq!(names, vec!["gate".to_string(), "seat".to_string()]);
        assert!(unknown_placeholders("Flight {{flightNumber}} {{status}}").is_empty());
    }

    #[test]
    fn placeholder_lookup() {
        assert_eq!(Placeholder::DepartureTime.name(), "departureTime");
        assert_eq!(Placeholder::from_name("status"), Some(Placeholder::Status));
        assert_eq!(Placeholder::from_name("Status"), None);
    }
}
