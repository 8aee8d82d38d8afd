use fakeapi::domain::HttpMethod;

#[test]
fn given_lowercase_name_when_parsing_then_method_is_recognised() {
    assert_eq!(HttpMethod::try_from("post"), Ok(HttpMethod::Post));
    assert_eq!(HttpMethod::try_from("Patch"), Ok(HttpMethod::Patch));
}

#[test]
fn given_empty_name_when_parsing_then_get_is_assumed() {
    assert_eq!(HttpMethod::try_from(""), Ok(HttpMethod::Get));
    assert_eq!(HttpMethod::default(), HttpMethod::Get);
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_the_value() {
    let result = HttpMethod::try_from("FETCH");

    assert!(result.unwrap_err().contains("FETCH"));
}

#[test]
fn given_methods_when_checking_body_then_only_writes_carry_one() {
    assert!(HttpMethod::Post.carries_body());
    assert!(HttpMethod::Put.carries_body());
    assert!(HttpMethod::Patch.carries_body());
    assert!(HttpMethod::Delete.carries_body());
    assert!(!HttpMethod::Get.carries_body());
    assert!(!HttpMethod::Head.carries_body());
    assert!(!HttpMethod::Options.carries_body());
}

#[test]
fn given_method_when_displayed_then_it_is_uppercase() {
    assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
}
