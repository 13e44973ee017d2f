use super::*;
use serde_json::json;

#[test]
fn profile_heading_uses_display_name() {
    let info = InfoResponse::new(json!({
        "Username": "bob",
        "Email": "bob@example.com",
        "Firstname": "Bob",
        "Lastname": "Builder",
        "Date": "2000-01-01",
        "Bio": ""
    }));
    assert_eq!(profile_heading(&info), "Bob Builder");
}

#[test]
fn profile_heading_falls_back_for_unknown_shapes() {
    assert_eq!(profile_heading(&InfoResponse::new(json!({ "user": "alice" }))), "Profile");
}
