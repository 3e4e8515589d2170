use chrono::{Duration, NaiveDate};
use hrnet_core::validation::{
    FUTURE_BIRTH_DATE_MESSAGE, LETTERS_ONLY_MESSAGE, NEGATIVE_ZIP_MESSAGE, REQUIRED_MESSAGE,
};
use hrnet_core::{validate, Department, Employee, EmployeeDraft, EmployeeField, FieldUpdate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn valid_draft() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
        start_date: NaiveDate::from_ymd_opt(2020, 3, 1),
        street: "12 Analytical Way".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: "94105".to_string(),
        department: Some(Department::Engineering),
    }
}

#[test]
fn valid_draft_has_no_errors() {
    assert!(validate(&valid_draft(), today()).is_empty());
}

#[test]
fn blank_draft_reports_every_field_as_required() {
    let errors = validate(&EmployeeDraft::default(), today());

    assert_eq!(errors.len(), EmployeeField::ALL.len());
    for field in EmployeeField::ALL {
        assert_eq!(errors.get(field), Some(REQUIRED_MESSAGE), "field {field}");
    }
}

#[test]
fn missing_fields_are_reported_exactly() {
    let mut draft = valid_draft();
    draft.last_name = "   ".to_string();
    draft.start_date = None;
    draft.zip_code = String::new();

    let errors = validate(&draft, today());
    let fields: Vec<_> = errors.fields().collect();
    assert_eq!(
        fields,
        [
            EmployeeField::LastName,
            EmployeeField::StartDate,
            EmployeeField::ZipCode
        ]
    );
    assert!(errors.iter().all(|(_, message)| message == REQUIRED_MESSAGE));
}

#[test]
fn non_letter_names_get_pattern_error_not_required_error() {
    let mut draft = valid_draft();
    draft.first_name = "Ada2".to_string();
    draft.last_name = "Love@lace".to_string();
    draft.city = "Paris 75".to_string();

    let errors = validate(&draft, today());
    assert_eq!(errors.get(EmployeeField::FirstName), Some(LETTERS_ONLY_MESSAGE));
    assert_eq!(errors.get(EmployeeField::LastName), Some(LETTERS_ONLY_MESSAGE));
    assert_eq!(errors.get(EmployeeField::City), Some(LETTERS_ONLY_MESSAGE));
    assert_eq!(errors.len(), 3);
}

#[test]
fn accented_hyphenated_names_are_accepted() {
    let mut draft = valid_draft();
    draft.first_name = "Jean-Noël".to_string();
    draft.last_name = "D'Artagnan".to_string();
    draft.city = "Saint-Étienne".to_string();

    assert!(validate(&draft, today()).is_empty());
}

#[test]
fn names_reject_tabs_and_line_breaks() {
    let mut draft = valid_draft();
    draft.first_name = "Ada\nLovelace".to_string();
    draft.last_name = "Love\tlace".to_string();
    draft.city = "San Francisco".to_string();

    let errors = validate(&draft, today());
    assert_eq!(errors.get(EmployeeField::FirstName), Some(LETTERS_ONLY_MESSAGE));
    assert_eq!(errors.get(EmployeeField::LastName), Some(LETTERS_ONLY_MESSAGE));
    assert!(!errors.contains(EmployeeField::City));
}

#[test]
fn birth_date_tomorrow_is_in_the_future() {
    let mut draft = valid_draft();
    draft.date_of_birth = Some(today() + Duration::days(1));

    let errors = validate(&draft, today());
    assert_eq!(
        errors.get(EmployeeField::DateOfBirth),
        Some(FUTURE_BIRTH_DATE_MESSAGE)
    );
}

#[test]
fn birth_date_today_or_earlier_is_accepted() {
    for offset in [0, 1, 365 * 30] {
        let mut draft = valid_draft();
        draft.date_of_birth = Some(today() - Duration::days(offset));
        assert!(
            !validate(&draft, today()).contains(EmployeeField::DateOfBirth),
            "offset {offset}"
        );
    }
}

#[test]
fn start_date_has_no_bounds() {
    let mut draft = valid_draft();
    draft.start_date = NaiveDate::from_ymd_opt(2099, 1, 1);
    assert!(validate(&draft, today()).is_empty());
}

#[test]
fn negative_zip_code_is_rejected() {
    let mut draft = valid_draft();
    draft.zip_code = "-5".to_string();
    assert_eq!(
        validate(&draft, today()).get(EmployeeField::ZipCode),
        Some(NEGATIVE_ZIP_MESSAGE)
    );

    for zip in ["0", "5", "AB12"] {
        draft.zip_code = zip.to_string();
        assert!(validate(&draft, today()).is_empty(), "zip {zip}");
    }
}

#[test]
fn region_code_is_checked_for_presence_only() {
    let mut draft = valid_draft();
    draft.state = "ZZ".to_string();
    assert!(validate(&draft, today()).is_empty());
}

#[test]
fn errors_expose_string_keyed_map() {
    let mut draft = valid_draft();
    draft.first_name = String::new();
    draft.department = None;

    let mut errors = validate(&draft, today());
    let map = errors.to_map();
    assert_eq!(map.get("firstName").map(String::as_str), Some(REQUIRED_MESSAGE));
    assert_eq!(map.get("department").map(String::as_str), Some(REQUIRED_MESSAGE));

    errors.clear(EmployeeField::FirstName);
    assert!(!errors.contains(EmployeeField::FirstName));
    assert_eq!(errors.len(), 1);
}

#[test]
fn try_from_draft_trims_text_and_formats_dates() {
    let draft = valid_draft()
        .with(FieldUpdate::FirstName("  Ada ".to_string()))
        .with(FieldUpdate::ZipCode(" 94105 ".to_string()));

    let employee = Employee::try_from_draft(&draft, today()).unwrap();
    assert_eq!(employee.first_name(), "Ada");
    assert_eq!(employee.zip_code(), "94105");
    assert_eq!(employee.date_of_birth().as_str(), "1990-12-10");
    assert_eq!(employee.start_date().as_str(), "2020-03-01");
    assert_eq!(employee.department(), "Engineering");
}

#[test]
fn try_from_draft_returns_all_errors() {
    let mut draft = valid_draft();
    draft.first_name = "X1".to_string();
    draft.department = None;

    let errors = Employee::try_from_draft(&draft, today()).unwrap_err();
    assert_eq!(errors.len(), 2);
}
