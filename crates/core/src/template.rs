//! Static catalog of form templates and their field schemas.
//!
//! The set of templates is closed: [`TemplateId`] enumerates exactly the
//! five supported forms, and each maps to a `'static` [`FieldSpec`] table.
//! Field declaration order is canonical -- validation walks it, and the
//! serializer emits lines in the same order.

use serde::{Deserialize, Serialize};

/// Identifier for one of the predefined form templates.
///
/// Serialized in camelCase (`"studentBio"`, `"contactForm"`, ...) to match
/// the wire format used by clients and stored history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateId {
    StudentBio,
    JobApplication,
    EventRegistration,
    ContactForm,
    CollegeAdmission,
}

impl TemplateId {
    /// All templates in display order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::StudentBio,
        TemplateId::JobApplication,
        TemplateId::EventRegistration,
        TemplateId::ContactForm,
        TemplateId::CollegeAdmission,
    ];

    /// The camelCase wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::StudentBio => "studentBio",
            TemplateId::JobApplication => "jobApplication",
            TemplateId::EventRegistration => "eventRegistration",
            TemplateId::ContactForm => "contactForm",
            TemplateId::CollegeAdmission => "collegeAdmission",
        }
    }

    /// Parse a wire identifier back into a [`TemplateId`].
    pub fn parse(s: &str) -> Option<TemplateId> {
        TemplateId::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            TemplateId::StudentBio => "Student Bio",
            TemplateId::JobApplication => "Job Application",
            TemplateId::EventRegistration => "Event Registration",
            TemplateId::ContactForm => "Contact Form",
            TemplateId::CollegeAdmission => "College Admission",
        }
    }

    /// Icon name hint for clients.
    pub fn icon(self) -> &'static str {
        match self {
            TemplateId::StudentBio => "graduation-cap",
            TemplateId::JobApplication => "briefcase",
            TemplateId::EventRegistration => "calendar",
            TemplateId::ContactForm => "message-square",
            TemplateId::CollegeAdmission => "building",
        }
    }
}

/// Input kind of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    #[serde(rename = "tel")]
    Phone,
    Password,
    #[serde(rename = "textarea")]
    TextArea,
    Date,
    Radio,
    Checkbox,
}

/// Declaration of one field within a template.
///
/// `error_message` is the single user-facing message for any validation
/// failure of this field (missing, too short, or malformed) -- each field
/// has exactly one.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_len: Option<usize>,
    #[serde(skip)]
    pub error_message: &'static str,
    /// Layout hint: the field spans the full form width.
    pub full_width: bool,
}

/// Template for field declarations; every table entry overrides what differs.
const BASE: FieldSpec = FieldSpec {
    name: "",
    label: "",
    kind: FieldKind::Text,
    required: true,
    placeholder: None,
    options: None,
    min_len: None,
    error_message: "",
    full_width: false,
};

const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];
const PAYMENT_OPTIONS: &[&str] = &["Online", "Offline"];

/// The shared password field, first in every template.
const PASSWORD: FieldSpec = FieldSpec {
    name: "password",
    label: "Password",
    kind: FieldKind::Password,
    placeholder: Some("Enter a secure password"),
    min_len: Some(6),
    error_message: "Password must be at least 6 characters.",
    full_width: true,
    ..BASE
};

const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    label: "Email",
    kind: FieldKind::Email,
    placeholder: Some("santhosh@example.com"),
    error_message: "Please enter a valid email address.",
    ..BASE
};

const PHONE: FieldSpec = FieldSpec {
    name: "phone",
    label: "Phone Number",
    kind: FieldKind::Phone,
    placeholder: Some("+91 9876543210"),
    error_message: "Please enter a valid mobile number.",
    ..BASE
};

const FULL_NAME: FieldSpec = FieldSpec {
    name: "fullName",
    label: "Full Name",
    placeholder: Some("Santhosh A"),
    min_len: Some(3),
    error_message: "Full name is required",
    ..BASE
};

const NAME: FieldSpec = FieldSpec {
    name: "name",
    label: "Name",
    placeholder: Some("Santhosh A"),
    min_len: Some(3),
    error_message: "Name is required",
    ..BASE
};

const DOB: FieldSpec = FieldSpec {
    name: "dob",
    label: "Date of Birth",
    kind: FieldKind::Date,
    error_message: "Date of birth is required.",
    ..BASE
};

const GENDER: FieldSpec = FieldSpec {
    name: "gender",
    label: "Gender",
    kind: FieldKind::Radio,
    options: Some(GENDER_OPTIONS),
    error_message: "Please select a gender.",
    ..BASE
};

const ADDRESS: FieldSpec = FieldSpec {
    name: "address",
    label: "Address",
    kind: FieldKind::TextArea,
    placeholder: Some("123 Main St, City, Country"),
    min_len: Some(5),
    error_message: "Address is required.",
    full_width: true,
    ..BASE
};

static STUDENT_BIO_FIELDS: &[FieldSpec] = &[
    PASSWORD,
    FULL_NAME,
    DOB,
    GENDER,
    PHONE,
    EMAIL,
    FieldSpec {
        name: "enrollmentNumber",
        label: "Enrollment Number",
        placeholder: Some("URK21CS100"),
        min_len: Some(1),
        error_message: "Enrollment number is required.",
        ..BASE
    },
    FieldSpec {
        name: "courseDepartment",
        label: "Course/Department",
        placeholder: Some("B.Sc Computer Science"),
        min_len: Some(2),
        error_message: "Course/Department is required.",
        full_width: true,
        ..BASE
    },
    ADDRESS,
];

static JOB_APPLICATION_FIELDS: &[FieldSpec] = &[
    PASSWORD,
    FULL_NAME,
    EMAIL,
    PHONE,
    FieldSpec {
        name: "position",
        label: "Position Applied For",
        placeholder: Some("Software Engineer"),
        min_len: Some(2),
        error_message: "Position is required.",
        ..BASE
    },
    FieldSpec {
        name: "experience",
        label: "Experience (Years)",
        placeholder: Some("5"),
        min_len: Some(1),
        error_message: "Experience is required",
        ..BASE
    },
    FieldSpec {
        name: "resumeAttached",
        label: "Resume Attached",
        kind: FieldKind::Checkbox,
        required: false,
        ..BASE
    },
    FieldSpec {
        name: "skills",
        label: "Skills",
        kind: FieldKind::TextArea,
        placeholder: Some("React, Node.js, TypeScript"),
        min_len: Some(5),
        error_message: "Skills are required.",
        full_width: true,
        ..BASE
    },
    FieldSpec {
        name: "coverLetter",
        label: "Cover Letter",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: Some("Your cover letter..."),
        full_width: true,
        ..BASE
    },
];

static EVENT_REGISTRATION_FIELDS: &[FieldSpec] = &[
    PASSWORD,
    NAME,
    EMAIL,
    PHONE,
    FieldSpec {
        name: "eventName",
        label: "Event Name",
        placeholder: Some("Tech Conference 2024"),
        min_len: Some(2),
        error_message: "Event name is required.",
        ..BASE
    },
    FieldSpec {
        name: "preferredSlot",
        label: "Preferred Slot",
        placeholder: Some("Morning Session"),
        min_len: Some(2),
        error_message: "Preferred slot is required.",
        ..BASE
    },
    FieldSpec {
        name: "paymentMethod",
        label: "Payment Method",
        kind: FieldKind::Radio,
        options: Some(PAYMENT_OPTIONS),
        error_message: "Please select a payment method.",
        ..BASE
    },
];

static CONTACT_FORM_FIELDS: &[FieldSpec] = &[
    PASSWORD,
    NAME,
    EMAIL,
    PHONE,
    FieldSpec {
        name: "subject",
        label: "Subject",
        placeholder: Some("Inquiry about your services"),
        min_len: Some(2),
        error_message: "Subject is required.",
        full_width: true,
        ..BASE
    },
    FieldSpec {
        name: "message",
        label: "Message",
        kind: FieldKind::TextArea,
        placeholder: Some("Your message..."),
        min_len: Some(10),
        error_message: "Message must be at least 10 characters.",
        full_width: true,
        ..BASE
    },
];

static COLLEGE_ADMISSION_FIELDS: &[FieldSpec] = &[
    PASSWORD,
    FULL_NAME,
    DOB,
    GENDER,
    FieldSpec {
        name: "fatherName",
        label: "Father's Name",
        placeholder: Some("Father's Name"),
        min_len: Some(3),
        error_message: "Father's name is required.",
        ..BASE
    },
    FieldSpec {
        name: "motherName",
        label: "Mother's Name",
        placeholder: Some("Mother's Name"),
        min_len: Some(3),
        error_message: "Mother's name is required.",
        ..BASE
    },
    PHONE,
    EMAIL,
    FieldSpec {
        name: "courseApplied",
        label: "Course Applied",
        placeholder: Some("B.Tech Computer Science"),
        min_len: Some(2),
        error_message: "Course applied for is required.",
        ..BASE
    },
    FieldSpec {
        name: "prevQualification",
        label: "Previous Qualification",
        placeholder: Some("12th Grade / High School"),
        min_len: Some(2),
        error_message: "Previous qualification is required.",
        ..BASE
    },
    FieldSpec {
        name: "marks",
        label: "Marks Obtained (%)",
        placeholder: Some("95"),
        min_len: Some(1),
        error_message: "Marks are required.",
        ..BASE
    },
    ADDRESS,
];

/// Field schema for a template, in declaration (and emission) order.
pub fn schema(id: TemplateId) -> &'static [FieldSpec] {
    match id {
        TemplateId::StudentBio => STUDENT_BIO_FIELDS,
        TemplateId::JobApplication => JOB_APPLICATION_FIELDS,
        TemplateId::EventRegistration => EVENT_REGISTRATION_FIELDS,
        TemplateId::ContactForm => CONTACT_FORM_FIELDS,
        TemplateId::CollegeAdmission => COLLEGE_ADMISSION_FIELDS,
    }
}

/// Default raw-input skeleton for a template.
///
/// Text-like fields default to the empty string and checkboxes to `false`;
/// date and radio fields have no default and are simply absent.
pub fn defaults(id: TemplateId) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::new();
    for field in schema(id) {
        match field.kind {
            FieldKind::Text
            | FieldKind::Email
            | FieldKind::Phone
            | FieldKind::Password
            | FieldKind::TextArea => {
                map.insert(field.name.to_string(), serde_json::Value::String(String::new()));
            }
            FieldKind::Checkbox => {
                map.insert(field.name.to_string(), serde_json::Value::Bool(false));
            }
            FieldKind::Date | FieldKind::Radio => {}
        }
    }
    map
}
