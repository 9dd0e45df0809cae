//! Canonical text serialization of a validated submission.
//!
//! The serialized block is the payload that ends up behind the QR code, so
//! its shape is a contract: the password line always comes first (even when
//! the password is empty), then the form-type line, a blank separator, and
//! one labeled line per non-empty field in declaration order. Every line is
//! newline-terminated, including the last.

use chrono::{Datelike, NaiveDate};

use crate::values::{FieldValue, FormValues};

/// Serialize a validated submission into its canonical text block.
///
/// Pure and deterministic: the same input always yields byte-identical
/// output. Empty text fields are skipped; booleans render as `Yes`/`No`;
/// dates render in long human form (see [`long_date`]).
pub fn serialize(values: &FormValues) -> String {
    let mut out = String::new();

    // The password line has no emptiness skip: an empty password still
    // produces "Password: ".
    if let Some(FieldValue::Text(password)) = values.get("password") {
        out.push_str("Password: ");
        out.push_str(password);
        out.push('\n');
    }

    out.push_str("Form Type: ");
    out.push_str(values.template().label());
    out.push_str("\n\n");

    for (name, value) in values.iter() {
        if name == "password" {
            continue;
        }
        let formatted = match value {
            FieldValue::Text(s) if s.is_empty() => continue,
            FieldValue::Text(s) => s.clone(),
            FieldValue::Bool(b) => (if *b { "Yes" } else { "No" }).to_string(),
            FieldValue::Date(d) => long_date(*d),
        };
        out.push_str(&label_for(name));
        out.push_str(": ");
        out.push_str(&formatted);
        out.push('\n');
    }

    out
}

/// Derive a human label from a camelCase field name: a space is inserted
/// before each interior uppercase letter and the first letter is
/// uppercased (`fullName` -> `Full Name`, `dob` -> `Dob`).
pub fn label_for(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            label.push(ch.to_ascii_uppercase());
        } else if ch.is_ascii_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

/// Long human date: full month name, ordinal day, year -- `April 5th, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// English ordinal suffix for a day of month (1st, 2nd, 3rd, 4th, ... 11th,
/// 12th, 13th, ... 21st, 22nd, 23rd, 31st).
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateId;
    use crate::validate::validate;
    use serde_json::json;

    fn contact_form_values() -> FormValues {
        let raw = json!({
            "password": "secret1",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "subject": "Hi",
            "message": "1234567890",
        });
        validate(TemplateId::ContactForm, raw.as_object().unwrap()).unwrap()
    }

    #[test]
    fn contact_form_scenario() {
        let text = serialize(&contact_form_values());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Password: secret1");
        assert_eq!(lines[1], "Form Type: Contact Form");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Name: Jane Doe");
        assert_eq!(lines[4], "Email: jane@x.com");
        assert_eq!(lines[5], "Phone: +19876543210");
        assert_eq!(lines[6], "Subject: Hi");
        assert_eq!(lines[7], "Message: 1234567890");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn output_ends_with_a_newline() {
        assert!(serialize(&contact_form_values()).ends_with('\n'));
    }

    #[test]
    fn serialize_is_deterministic() {
        let values = contact_form_values();
        assert_eq!(serialize(&values), serialize(&values));
    }

    #[test]
    fn field_lines_follow_declaration_order() {
        let raw = json!({
            "password": "secret1",
            "fullName": "Jane Doe",
            "dob": "2001-02-28",
            "gender": "Female",
            "phone": "+19876543210",
            "email": "jane@x.com",
            "enrollmentNumber": "URK21CS100",
            "courseDepartment": "B.Sc CS",
            "address": "123 Main St",
        });
        let values = validate(TemplateId::StudentBio, raw.as_object().unwrap()).unwrap();
        let text = serialize(&values);
        let labels: Vec<_> = text
            .lines()
            .skip(3)
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(
            labels,
            [
                "Full Name",
                "Dob",
                "Gender",
                "Phone",
                "Email",
                "Enrollment Number",
                "Course Department",
                "Address",
            ]
        );
    }

    #[test]
    fn empty_password_line_is_still_emitted() {
        // Bypass validation: build values directly so the password can be
        // empty, mirroring the serializer's no-skip contract.
        let mut map = indexmap::IndexMap::new();
        map.insert("password".to_string(), FieldValue::Text(String::new()));
        map.insert("name".to_string(), FieldValue::Text("Jane".to_string()));
        let values = FormValues::new(TemplateId::ContactForm, map);

        let text = serialize(&values);
        assert!(text.starts_with("Password: \n"));
        assert!(text.contains("Name: Jane\n"));
    }

    #[test]
    fn empty_fields_other_than_password_are_skipped() {
        let raw = json!({
            "password": "secret1",
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "position": "Engineer",
            "experience": "5",
            "skills": "Rust, Tokio",
            "coverLetter": "",
        });
        let values = validate(TemplateId::JobApplication, raw.as_object().unwrap()).unwrap();
        let text = serialize(&values);
        assert!(!text.contains("Cover Letter"));
    }

    #[test]
    fn unset_checkbox_renders_as_no() {
        // `false` is a value, not an empty one: it must be emitted.
        let raw = json!({
            "password": "secret1",
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "position": "Engineer",
            "experience": "5",
            "skills": "Rust, Tokio",
        });
        let values = validate(TemplateId::JobApplication, raw.as_object().unwrap()).unwrap();
        let text = serialize(&values);
        assert!(text.contains("Resume Attached: No\n"));
    }

    #[test]
    fn checked_checkbox_renders_as_yes() {
        let raw = json!({
            "password": "secret1",
            "fullName": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "position": "Engineer",
            "experience": "5",
            "resumeAttached": true,
            "skills": "Rust, Tokio",
        });
        let values = validate(TemplateId::JobApplication, raw.as_object().unwrap()).unwrap();
        assert!(serialize(&values).contains("Resume Attached: Yes\n"));
    }

    #[test]
    fn dates_render_in_long_form() {
        let raw = json!({
            "password": "secret1",
            "fullName": "Jane Doe",
            "dob": "2024-04-05",
            "gender": "Female",
            "phone": "+19876543210",
            "email": "jane@x.com",
            "enrollmentNumber": "URK21CS100",
            "courseDepartment": "B.Sc CS",
            "address": "123 Main St",
        });
        let values = validate(TemplateId::StudentBio, raw.as_object().unwrap()).unwrap();
        assert!(serialize(&values).contains("Dob: April 5th, 2024\n"));
    }

    #[test]
    fn label_derivation() {
        assert_eq!(label_for("fullName"), "Full Name");
        assert_eq!(label_for("coverLetter"), "Cover Letter");
        assert_eq!(label_for("resumeAttached"), "Resume Attached");
        assert_eq!(label_for("prevQualification"), "Prev Qualification");
        assert_eq!(label_for("dob"), "Dob");
        assert_eq!(label_for("name"), "Name");
    }

    #[test]
    fn long_date_ordinals() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
        assert_eq!(long_date(d(1)), "April 1st, 2024");
        assert_eq!(long_date(d(2)), "April 2nd, 2024");
        assert_eq!(long_date(d(3)), "April 3rd, 2024");
        assert_eq!(long_date(d(4)), "April 4th, 2024");
        assert_eq!(long_date(d(11)), "April 11th, 2024");
        assert_eq!(long_date(d(12)), "April 12th, 2024");
        assert_eq!(long_date(d(13)), "April 13th, 2024");
        assert_eq!(long_date(d(21)), "April 21st, 2024");
        assert_eq!(long_date(d(22)), "April 22nd, 2024");
        assert_eq!(long_date(d(23)), "April 23rd, 2024");
        assert_eq!(long_date(d(30)), "April 30th, 2024");
    }

    #[test]
    fn long_date_month_names() {
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
            "December 31st, 1999"
        );
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap()),
            "January 1st, 2001"
        );
    }
}
