use super::*;

fn build(password: &str, city: &str) -> ProfileUpdateRequest {
    build_profile_update(
        "Ada",
        "Lovelace",
        "0012345678",
        "ada@example.com",
        "09120000000",
        city,
        "avatars/ada.png",
        password,
    )
}

#[test]
fn build_profile_update_copies_editable_fields() {
    let req = build("", "3");
    assert_eq!(req.first_name, "Ada");
    assert_eq!(req.city_id, 3);
    assert_eq!(req.pic_dir, "avatars/ada.png");
}

#[test]
fn build_profile_update_omits_blank_password() {
    assert_eq!(build("", "3").password, None);
}

#[test]
fn build_profile_update_includes_typed_password() {
    assert_eq!(build("hunter22", "3").password, Some("hunter22".to_owned()));
}

#[test]
fn build_profile_update_defaults_unselected_city_to_zero() {
    assert_eq!(build("", "").city_id, 0);
}
