use disploc::{Locale, ParseLocaleError};

#[test]
fn test_parse_canonical_tags() {
    assert_eq!("fr".parse::<Locale>(), Ok(Locale::Fr));
    assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("FR".parse::<Locale>(), Ok(Locale::Fr));
    assert_eq!("En".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn test_parse_accepts_region_suffix() {
    assert_eq!("fr-FR".parse::<Locale>(), Ok(Locale::Fr));
    assert_eq!("fr_CA".parse::<Locale>(), Ok(Locale::Fr));
    assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn test_parse_trims_whitespace() {
    assert_eq!(" en ".parse::<Locale>(), Ok(Locale::En));
}

#[test]
fn test_parse_unknown_tag() {
    assert_eq!(
        "de".parse::<Locale>(),
        Err(ParseLocaleError::UnknownTag {
            tag: "de".to_string()
        })
    );
}

#[test]
fn test_parse_empty_tag() {
    assert_eq!("".parse::<Locale>(), Err(ParseLocaleError::EmptyTag));
    assert_eq!("   ".parse::<Locale>(), Err(ParseLocaleError::EmptyTag));
}

#[test]
fn test_display_roundtrip() {
    for locale in Locale::ALL {
        let tag = locale.to_string();
        assert_eq!(tag.parse::<Locale>(), Ok(locale));
    }
}

#[test]
fn test_default_is_english() {
    // language.h falls back to English when no language is selected
    assert_eq!(Locale::default(), Locale::En);
}

#[test]
fn test_all_covers_every_locale() {
    assert_eq!(Locale::ALL.len(), 2);
    assert!(Locale::ALL.contains(&Locale::Fr));
    assert!(Locale::ALL.contains(&Locale::En));
}
