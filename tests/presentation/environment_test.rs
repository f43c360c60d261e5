use summarizer_agent::presentation::Environment;

#[test]
fn given_known_aliases_when_parsing_environment_then_maps_to_variant() {
    assert_eq!(
        Environment::try_from("development".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(Environment::try_from(" TEST ".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(err.contains("staging"));
}

#[test]
fn given_environment_when_naming_settings_file_then_uses_capitalized_suffix() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.Prod");
    assert_eq!(Environment::Local.to_string(), "Local");
}
