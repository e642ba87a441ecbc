use std::{borrow::Cow, collections::HashSet, error::Error, thread};

use strum::IntoEnumIterator;

use crate::{
    CountryCodeSource, InvalidPhoneNumberError, ParseError, PhoneNumber, PhoneNumberFormat,
    PhoneNumberParser, PHONE_NUMBER_PARSER,
};

use super::init_logger;

fn get_parser() -> PhoneNumberParser {
    init_logger();
    PhoneNumberParser::new()
}

/// (input, international, national, msisdn, country code, area code, local number, iso)
type ValidNumber = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i32,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const VALID_NUMBERS: &[ValidNumber] = &[
    // SE (+46)
    ("0480 55555", "+46 480 555 55", "0480-555 55", "4648055555", 46, "0480", "55555", Some("se")),
    ("0480 42 40 00", "+46 480 42 40 00", "0480-42 40 00", "46480424000", 46, "0480", "424000", Some("se")),
    ("0480 424000", "+46 480 42 40 00", "0480-42 40 00", "46480424000", 46, "0480", "424000", Some("se")),
    ("0480424000", "+46 480 42 40 00", "0480-42 40 00", "46480424000", 46, "0480", "424000", Some("se")),
    ("0046480424000", "+46 480 42 40 00", "0480-42 40 00", "46480424000", 46, "0480", "424000", Some("se")),
    ("+46480424000", "+46 480 42 40 00", "0480-42 40 00", "46480424000", 46, "0480", "424000", Some("se")),
    ("+46 8-1234567", "+46 8 123 45 67", "08-123 45 67", "4681234567", 46, "08", "1234567", Some("se")),
    ("08 1234567", "+46 8 123 45 67", "08-123 45 67", "4681234567", 46, "08", "1234567", Some("se")),
    ("08 12345678", "+46 8 123 456 78", "08-123 456 78", "46812345678", 46, "08", "12345678", Some("se")),
    ("031-1234567", "+46 31 123 45 67", "031-123 45 67", "46311234567", 46, "031", "1234567", Some("se")),
    ("0701234567", "+46 70 123 45 67", "070-123 45 67", "46701234567", 46, "070", "1234567", Some("se")),
    ("00460701234567", "+46 70 123 45 67", "070-123 45 67", "46701234567", 46, "070", "1234567", Some("se")),
    ("(070) 123-45-67", "+46 70 123 45 67", "070-123 45 67", "46701234567", 46, "070", "1234567", Some("se")),
    // NO (+47)
    ("004723456789", "+47 23 45 67 89", "23 45 67 89", "4723456789", 47, "", "23456789", Some("no")),
    ("0047 34 56 78 91", "+47 34 56 78 91", "34 56 78 91", "4734567891", 47, "", "34567891", Some("no")),
    ("+47 456 78912", "+47 456 78 912", "456 78 912", "4745678912", 47, "", "45678912", Some("no")),
    ("+47 56 78 91 23", "+47 56 78 91 23", "56 78 91 23", "4756789123", 47, "", "56789123", Some("no")),
    ("+4767891234", "+47 67 89 12 34", "67 89 12 34", "4767891234", 47, "", "67891234", Some("no")),
    ("+4778912345", "+47 78 91 23 45", "78 91 23 45", "4778912345", 47, "", "78912345", Some("no")),
    ("+47 89 12 34 56", "+47 891 23 456", "891 23 456", "4789123456", 47, "", "89123456", Some("no")),
    ("+4791234567", "+47 912 34 567", "912 34 567", "4791234567", 47, "", "91234567", Some("no")),
    // Countries that only carry their ISO code, leading zeros are kept.
    ("+31 01 23 45 67", "+31 01234567", "01234567", "3101234567", 31, "", "01234567", Some("nl")),
    ("+33 01 23 45 67", "+33 01234567", "01234567", "3301234567", 33, "", "01234567", Some("fr")),
    ("+358 01 23 45 67", "+358 01234567", "01234567", "35801234567", 358, "", "01234567", Some("fi")),
    ("+371 01 23 45 67", "+371 01234567", "01234567", "37101234567", 371, "", "01234567", Some("lv")),
    ("+372 01 23 45 67", "+372 01234567", "01234567", "37201234567", 372, "", "01234567", Some("ee")),
    ("+39 01 23 45 67", "+39 01234567", "01234567", "3901234567", 39, "", "01234567", Some("au")),
    ("+41 01 23 45 67", "+41 01234567", "01234567", "4101234567", 41, "", "01234567", Some("ch")),
    ("+420 01 23 45 67", "+420 01234567", "01234567", "42001234567", 420, "", "01234567", Some("cz")),
    ("+43 01 23 45 67", "+43 01234567", "01234567", "4301234567", 43, "", "01234567", Some("at")),
    ("+44 01 23 45 67", "+44 01234567", "01234567", "4401234567", 44, "", "01234567", Some("gb")),
    ("+45 01 23 45 67", "+45 01234567", "01234567", "4501234567", 45, "", "01234567", Some("dk")),
    ("+48 01 23 45 67", "+48 01234567", "01234567", "4801234567", 48, "", "01234567", Some("pl")),
    ("+49 01 23 45 67", "+49 01234567", "01234567", "4901234567", 49, "", "01234567", Some("de")),
    ("+91 98765 43210", "+91 9876543210", "9876543210", "919876543210", 91, "", "9876543210", Some("in")),
    // Unregistered country code, the first digit is used.
    ("+2 01 23 45 67", "+2 01234567", "01234567", "201234567", 2, "", "01234567", None),
];

#[test]
fn parse_valid_phone_numbers() {
    let parser = get_parser();
    for &(input, international, national, msisdn, country_code, area_code, local_number, iso) in
        VALID_NUMBERS
    {
        let parsed = parser
            .parse(input)
            .unwrap_or_else(|err| panic!("'{input}' should parse: {err}"));
        let tried = parser.try_parse(input).expect("try_parse agrees with parse");

        for number in [&parsed, &tried] {
            assert_eq!(international, number.to_string(), "{input}");
            assert_eq!(international, number.to_international_format(), "{input}");
            assert_eq!(national, number.to_national_format(), "{input}");
            assert_eq!(msisdn, number.to_msisdn(), "{input}");
            assert_eq!(country_code, number.country_code(), "{input}");
            assert_eq!(area_code, number.area_code(), "{input}");
            assert_eq!(local_number, number.local_number(), "{input}");
            assert_eq!(iso, number.iso_country_code(), "{input}");
        }
        assert!(parser.is_valid(input), "{input}");
    }
}

#[test]
fn parse_invalid_phone_numbers() {
    let parser = get_parser();
    let invalid_numbers = [
        ("", "Phone number can not be empty."),
        (" ", "Phone number can not be empty."),
        ("\t\n ", "Phone number can not be empty."),
        ("+x12345678", "Phone number \"+x12345678\" is invalid: Country code must begin with a digit."),
        ("+", "Phone number \"+\" is invalid: Country code must begin with a digit."),
        ("FooBar", "Phone number \"FooBar\" is invalid: Phone number contains invalid character \"F\"."),
        ("+46123456", "Phone number \"+46123456\" is invalid: Phone number is too short."),
        ("+12%34567", "Phone number \"+12%34567\" is invalid: Phone number contains invalid character \"%\"."),
        (
            "+46 08-123 456 789",
            "Phone number \"+46 08-123 456 789\" is invalid: Local part or phone number \"123456789\" must be between 5 and 8 digits.",
        ),
        (
            "+46 0480-12 34",
            "Phone number \"+46 0480-12 34\" is invalid: Local part or phone number \"1234\" must be between 5 and 8 digits.",
        ),
        ("+47*34567", "Phone number \"+47*34567\" is invalid: Phone number contains invalid character \"*\"."),
        ("+47 (234) 56789", "Phone number \"+47 (234) 56789\" is invalid: Phone number contains invalid character \"(\"."),
        ("00472345678", "Phone number \"00472345678\" is invalid: Local part of number \"2345678\" must be 8 digits."),
        ("+2", "Phone number \"+2\" is invalid: Phone number is too short."),
    ];

    for (input, expected_error) in invalid_numbers {
        let err = parser.parse(input).expect_err(input);
        assert_eq!(expected_error, err.to_string());
        assert_eq!(input, err.input());
        assert!(parser.try_parse(input).is_none(), "{input}");
        assert!(!parser.is_valid(input), "{input}");
    }
}

#[test]
fn parse_errors_carry_details() {
    let parser = get_parser();

    let err = parser.parse("0047 2345678").unwrap_err();
    assert_eq!(
        &ParseError::WrongLength { number: "2345678".to_owned(), expected_length: 8 },
        err.reason()
    );

    let err = parser.parse("+46 0480-12 34").unwrap_err();
    assert_eq!(
        ParseError::LocalNumberWrongLength {
            local_number: "1234".to_owned(),
            min_length: 5,
            max_length: 8,
        },
        err.into_reason()
    );

    let err = parser.parse("+46123456").unwrap_err();
    assert_eq!(
        &ParseError::TooShort { number: "123456".to_owned(), min_length: 7 },
        err.reason()
    );

    assert_eq!(&ParseError::EmptyNumber, parser.parse("   ").unwrap_err().reason());
    assert_eq!(
        &ParseError::InvalidCharacter('%'),
        parser.parse("+12%34567").unwrap_err().reason()
    );
}

#[test]
fn error_source_is_the_stage_error() {
    let err: InvalidPhoneNumberError = get_parser().parse("FooBar").unwrap_err();
    let source = err.source().expect("reason is exposed as source");
    assert_eq!(
        Some(&ParseError::InvalidCharacter('F')),
        source.downcast_ref::<ParseError>()
    );
}

#[test]
fn explicit_and_implicit_country_code_are_equal() {
    let parser = get_parser();
    let plus = parser.parse("+46701234567").unwrap();
    let idd = parser.parse("0046701234567").unwrap();
    let implicit = parser.parse("0701234567").unwrap();

    assert_eq!(plus, idd);
    assert_eq!(plus, implicit);
    assert_eq!(46, plus.country_code());
    assert_eq!("070", plus.area_code());
    assert_eq!("1234567", plus.local_number());
    assert_eq!("+46 70 123 45 67", plus.to_international_format());

    let set: HashSet<PhoneNumber> = [plus, idd, implicit].into_iter().collect();
    assert_eq!(1, set.len());
}

#[test]
fn msisdn_round_trip() {
    let parser = get_parser();
    for &(input, ..) in VALID_NUMBERS {
        let number = parser.parse(input).unwrap();
        let msisdn = number.to_msisdn();
        assert!(msisdn.chars().all(|c| c.is_ascii_digit()), "{msisdn}");
        assert!(msisdn.starts_with(&number.country_code().to_string()), "{msisdn}");
        assert_eq!(format!("+{msisdn}"), number.to_compact_format());

        let reparsed = parser.parse(&number.to_compact_format()).unwrap();
        assert_eq!(number.country_code(), reparsed.country_code(), "{input}");
        assert_eq!(number.area_code(), reparsed.area_code(), "{input}");
        assert_eq!(number.local_number(), reparsed.local_number(), "{input}");
        assert_eq!(number, reparsed);
    }
}

#[test]
fn format_matches_dedicated_methods() {
    let number = get_parser().parse("08 12345678").unwrap();
    for number_format in PhoneNumberFormat::iter() {
        let expected = match number_format {
            PhoneNumberFormat::Compact => "+46812345678",
            PhoneNumberFormat::International => "+46 8 123 456 78",
            PhoneNumberFormat::National => "08-123 456 78",
            PhoneNumberFormat::Msisdn => "46812345678",
        };
        assert_eq!(expected, number.format(number_format), "{number_format:?}");
    }
}

#[test]
fn default_country_code_is_configurable() {
    init_logger();
    let parser = PhoneNumberParser::with_default_country_code(47);
    assert_eq!(47, parser.default_country_code());

    let number = parser.parse("23 45 67 89").unwrap();
    assert_eq!(47, number.country_code());
    assert_eq!(Some("no"), number.iso_country_code());
    assert_eq!("+47 23 45 67 89", number.to_international_format());

    // explicit codes still win
    let number = parser.parse("+46 70 123 45 67").unwrap();
    assert_eq!(Some("se"), number.iso_country_code());

    let number = PhoneNumberParser::with_default_country_code(44)
        .parse("020 7946 0000")
        .unwrap();
    assert_eq!(44, number.country_code());
    assert_eq!("2079460000", number.local_number());
    assert_eq!("+442079460000", number.to_compact_format());
}

#[test]
fn extract_country_code_sources() {
    let parser = get_parser();

    let extracted = parser.extract_country_code(Cow::Borrowed("+4723456789")).unwrap();
    assert_eq!(47, extracted.country_code);
    assert_eq!("23456789", extracted.national_number);
    assert_eq!(CountryCodeSource::FromNumberWithPlusSign, extracted.country_code_source);
    assert!(extracted.country_code_source.is_explicit());

    let extracted = parser
        .extract_country_code(Cow::Owned("00358-1234".to_owned()))
        .unwrap();
    assert_eq!(358, extracted.country_code);
    assert_eq!("-1234", extracted.national_number);
    assert_eq!(CountryCodeSource::FromNumberWithIdd, extracted.country_code_source);

    let extracted = parser.extract_country_code(Cow::Borrowed("0701234567")).unwrap();
    assert_eq!(46, extracted.country_code);
    assert_eq!("701234567", extracted.national_number);
    assert_eq!(CountryCodeSource::FromDefaultCountry, extracted.country_code_source);
    assert!(!extracted.country_code_source.is_explicit());

    let extracted = parser.extract_country_code(Cow::Borrowed("+7123")).unwrap();
    assert_eq!(7, extracted.country_code);
    assert_eq!("123", extracted.national_number);

    assert_eq!(
        ParseError::InvalidCountryCodeStart,
        parser.extract_country_code(Cow::Borrowed("00")).unwrap_err()
    );
    assert_eq!(
        ParseError::InvalidCountryCodeStart,
        parser.extract_country_code(Cow::Borrowed("+-46")).unwrap_err()
    );
}

#[test]
fn country_codes_resolve_in_table_order() {
    let parser = get_parser();
    // 35 is not registered but 358 is
    let extracted = parser.extract_country_code(Cow::Borrowed("+3581234")).unwrap();
    assert_eq!(358, extracted.country_code);
    // 3 followed by an unregistered digit
    let extracted = parser.extract_country_code(Cow::Borrowed("+3012345")).unwrap();
    assert_eq!(3, extracted.country_code);
    assert_eq!("012345", extracted.national_number);
}

#[test]
fn global_parser_and_from_str() {
    init_logger();
    let number: PhoneNumber = "070-174 06 05".parse().unwrap();
    assert_eq!("+46 70 174 06 05", number.to_string());
    assert_eq!("+46701740605", number.to_compact_format());
    assert_eq!("46701740605", number.to_msisdn());
    assert_eq!("070-174 06 05", number.to_national_format());

    assert_eq!(Some(number.clone()), crate::try_parse("+46701740605"));
    assert_eq!(number, crate::parse("0046 70 174 06 05").unwrap());
    assert!(crate::is_valid("0701740605"));
    assert!(!crate::is_valid("070"));
    assert!("".parse::<PhoneNumber>().is_err());
}

#[test]
fn parser_is_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PhoneNumberParser>();
    assert_send_sync::<PhoneNumber>();

    init_logger();
    let handles: Vec<_> = ["+4791234567", "0480 55555", "+44 20 7946 0000"]
        .into_iter()
        .map(|input| thread::spawn(move || PHONE_NUMBER_PARSER.parse(input).map(|n| n.to_msisdn())))
        .collect();
    let msisdns: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();
    assert_eq!(vec!["4791234567", "4648055555", "442079460000"], msisdns);
}
