use crate::{ChecksumMode, ParsedSentence, Parser, ParserConfig, sentences::Quality};

#[test]
fn test_gga_with_validation() {
    let mut parser = Parser::with_config(ParserConfig::new(ChecksumMode::Optional));
    let sentence = parser
        .parse("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
        .unwrap();

    let ParsedSentence::GGA(gga) = sentence else {
        panic!("Unexpected sentence: {sentence:?}");
    };
    assert_eq!(gga.quality(), Some(Quality::GPSFix));

    let snapshot = parser.snapshot();
    assert_eq!(snapshot.sentence_type, "GPGGA");
    assert_eq!(snapshot.time, "123519");
    assert_eq!(snapshot.altitude, "545.4");
    assert_eq!(snapshot.altitude_units, "M");
    assert_eq!(snapshot.geoid_separation, "46.9");
    assert_eq!(snapshot.formatted_latitude, "48.117300");
    assert_eq!(snapshot.formatted_longitude, "11.516667");
}

#[test]
fn test_each_sentence_replaces_the_previous() {
    let sentences = [
        ("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47", "GPGGA"),
        ("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A", "GPRMC"),
        ("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48", "GPVTG"),
        ("$GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.8,1.0,1.5*3F", "GPGSA"),
        ("$GPGLL,4916.45,N,12311.12,W,225444,A*31", "GPGLL"),
        ("$GPZDA,201530.00,04,07,2002,00,00*60", "GPZDA"),
        ("$GPGST,024603.00,1.2,0.8,1.0,45.0,0.5,0.6,0.7*6B", "GPGST"),
    ];

    let mut parser = Parser::with_config(ParserConfig::new(ChecksumMode::Required));
    for (input, expected) in sentences {
        parser.parse(input).unwrap();
        assert_eq!(parser.sentence_type(), expected, "Failed: {input:?}");
    }

    let snapshot = parser.snapshot();
    assert_eq!(snapshot.rms, "1.2");
    assert_eq!(snapshot.altitude, "", "GGA fields must not survive later sentences");
    assert_eq!(snapshot.date, "");
    assert_eq!(snapshot.gsa_satellites_used, "");
}

#[test]
fn test_gsa_connected_satellites() {
    let parser: Parser = "$GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.8,1.0,1.5*3F"
        .parse()
        .unwrap();

    assert_eq!(parser.connected_satellites(), "04,05,09,12,24,25,29");
    assert_eq!(parser.snapshot().satellites_used, 0);
}

#[test]
fn test_last_field_carries_no_checksum() {
    let cases = [
        "$GPGLL,4916.45,N,12311.12,W,225444,A*31",
        "$GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n",
        "$GPGLL,4916.45,N,12311.12,W,225444,A",
    ];

    for input in cases {
        let parser: Parser = input.parse().unwrap();
        assert_eq!(parser.snapshot().status, "A", "Failed: {input:?}");
    }

    let parser: Parser = "$GPGST,024603.00,1.2,0.8,1.0,45.0,0.5,0.6,0.7*6B".parse().unwrap();
    assert_eq!(parser.snapshot().sigma_alt, "0.7");
}

#[test]
fn test_malformed_fields_do_not_fail() {
    let mut parser = Parser::with_config(ParserConfig::without_checksum());

    let sentence = parser.parse("$GPGGA,12x519,48o7.038,N,,E").unwrap();
    assert!(matches!(sentence, ParsedSentence::GGA(_)));

    let snapshot = parser.snapshot();
    assert_eq!(snapshot.time, "12x519");
    assert_eq!(snapshot.formatted_latitude, "48o7.038");
    assert_eq!(snapshot.formatted_longitude, "");
    assert_eq!(snapshot.altitude, "");
    assert_eq!(parser.location(), None);
}
