use crate::core::content::{self, FEATURES};
use crate::core::{Notification, NotificationType, WaitlistField, WaitlistForm};

// ============================================================================
// Waiting-list form
// ============================================================================

#[test]
fn test_form_starts_empty() {
    let form = WaitlistForm::new();

    assert_eq!(form.name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.description, "");
    assert!(!form.is_complete());
}

#[test]
fn test_set_field_leaves_others_untouched() {
    let mut form = WaitlistForm::new();

    form.set(WaitlistField::Name, "Alice".to_string());

    assert_eq!(form.name, "Alice");
    assert_eq!(form.email, "");
    assert_eq!(form.description, "");
}

#[test]
fn test_set_each_field() {
    let mut form = WaitlistForm::new();

    form.set(WaitlistField::Name, "Bob".to_string());
    form.set(WaitlistField::Email, "bob@example.com".to_string());
    form.set(WaitlistField::Description, "期待新功能".to_string());

    assert_eq!(form.get(WaitlistField::Name), "Bob");
    assert_eq!(form.get(WaitlistField::Email), "bob@example.com");
    assert_eq!(form.get(WaitlistField::Description), "期待新功能");
}

#[test]
fn test_set_overwrites_previous_value() {
    let mut form = WaitlistForm::new();

    form.set(WaitlistField::Name, "Alice".to_string());
    form.set(WaitlistField::Name, "Alicia".to_string());

    assert_eq!(form.name, "Alicia");
}

#[test]
fn test_field_names() {
    assert_eq!(WaitlistField::Name.as_str(), "name");
    assert_eq!(WaitlistField::Email.as_str(), "email");
    assert_eq!(WaitlistField::Description.as_str(), "description");
}

#[test]
fn test_is_complete_requires_name_and_email() {
    let mut form = WaitlistForm::new();
    assert!(!form.is_complete());

    form.set(WaitlistField::Name, "Bob".to_string());
    assert!(!form.is_complete());

    form.set(WaitlistField::Email, "bob@example.com".to_string());
    assert!(form.is_complete());
}

#[test]
fn test_description_is_optional() {
    let form = WaitlistForm {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        description: String::new(),
    };

    assert!(form.is_complete());
}

#[test]
fn test_submit_blocked_without_name() {
    let mut form = WaitlistForm {
        name: String::new(),
        email: "bob@example.com".to_string(),
        description: "hello".to_string(),
    };

    let result = form.submit();

    // Blocked: nothing captured, form left exactly as it was
    assert!(result.is_none());
    assert_eq!(form.email, "bob@example.com");
    assert_eq!(form.description, "hello");
}

#[test]
fn test_submit_blocked_without_email() {
    let mut form = WaitlistForm {
        name: "Carol".to_string(),
        email: String::new(),
        description: String::new(),
    };

    assert!(form.submit().is_none());
    assert_eq!(form.name, "Carol");
}

#[test]
fn test_submit_captures_record_and_resets() {
    let mut form = WaitlistForm {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        description: String::new(),
    };

    let record = form.submit().expect("complete form should submit");

    assert_eq!(record.name, "Bob");
    assert_eq!(record.email, "bob@example.com");
    assert_eq!(record.description, "");

    // Reset is atomic: every field back to its initial empty value
    assert_eq!(form, WaitlistForm::new());
}

#[test]
fn test_submit_twice_needs_new_input() {
    let mut form = WaitlistForm {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        description: String::new(),
    };

    assert!(form.submit().is_some());
    assert!(form.submit().is_none());
}

#[test]
fn test_record_serializes_with_field_names() {
    let form = WaitlistForm {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        description: "期待".to_string(),
    };

    let json = serde_json::to_value(&form).unwrap();

    assert_eq!(json["name"], "Bob");
    assert_eq!(json["email"], "bob@example.com");
    assert_eq!(json["description"], "期待");
}

// ============================================================================
// Feature table
// ============================================================================

#[test]
fn test_exactly_three_features() {
    assert_eq!(FEATURES.len(), 3);
}

#[test]
fn test_features_have_copy() {
    for feature in FEATURES {
        assert!(!feature.title.is_empty());
        assert!(!feature.description.is_empty());
        assert!(!feature.icon.is_empty());
    }
}

#[test]
fn test_features_fixed_order() {
    assert_eq!(FEATURES[0].icon, "rocket");
    assert_eq!(FEATURES[1].icon, "shield");
    assert_eq!(FEATURES[2].icon, "zap");
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_success_notification() {
    let n = Notification::success("title", "message");

    assert_eq!(n.notification_type, NotificationType::Success);
    assert_eq!(n.title, "title");
    assert_eq!(n.message, "message");
    assert_eq!(n.auto_dismiss_ms, Some(3000));
}

#[test]
fn test_error_notification_sticks() {
    let n = Notification::error("boom", "details");

    assert_eq!(n.notification_type, NotificationType::Error);
    assert_eq!(n.auto_dismiss_ms, None);
}

#[test]
fn test_warning_and_info_auto_dismiss() {
    assert_eq!(
        Notification::warning("t", "m").auto_dismiss_ms,
        Some(5000)
    );
    assert_eq!(Notification::info("t", "m").auto_dismiss_ms, Some(3000));
}

#[test]
fn test_submit_success_copy_pair() {
    // The toast after a successful submission always carries this exact pair
    let n = Notification::success(
        content::SUBMIT_SUCCESS_TITLE,
        content::SUBMIT_SUCCESS_MESSAGE,
    );

    assert_eq!(n.title, "提交成功！");
    assert_eq!(n.message, "感谢您的兴趣，我们会尽快与您联系。");
}
