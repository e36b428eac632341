use crate::{GroupState, Parser};

const GROUP: [&str; 2] = [
    "$GPGSV,2,1,08,01,40,083,41,02,17,063,42,03,13,053,43,04,03,013,42*7D",
    "$GPGSV,2,2,08,05,20,123,44,06,05,223,45,07,11,323,43,08,32,073,42*7E",
];

#[test]
fn test_group_accumulates_in_order() {
    let mut parser = Parser::new();
    for input in GROUP {
        parser.parse(input).unwrap();
    }

    let ids: Vec<_> = parser.satellites().iter().map(|sat| sat.id.as_str()).collect();
    assert_eq!(ids, ["01", "02", "03", "04", "05", "06", "07", "08"]);
    assert_eq!(parser.accumulator().message_numbers(), &[1, 1, 1, 1, 2, 2, 2, 2]);
    assert!(parser.accumulator().is_complete());
    assert_eq!(parser.satellite_count(), 8);

    let snapshot = parser.snapshot();
    assert_eq!(snapshot.satellites_used, 8);
    assert_eq!(snapshot.satellites_in_view, 8);
    assert_eq!(snapshot.total_messages, 2);
    assert_eq!(snapshot.message_number, 2);
    assert_eq!(snapshot.satellite_details.len(), 8);
}

#[test]
fn test_new_group_resets_list() {
    let mut parser = Parser::new();
    for input in GROUP {
        parser.parse(input).unwrap();
    }

    parser.parse(GROUP[0]).unwrap();
    assert_eq!(parser.satellites().len(), 4);
    assert_eq!(parser.accumulator().state(), GroupState::InGroup);
    assert!(!parser.accumulator().is_complete());
}

#[test]
fn test_group_survives_other_sentences() {
    let mut parser = Parser::new();
    parser.parse(GROUP[0]).unwrap();
    parser.parse("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48").unwrap();
    parser.parse(GROUP[1]).unwrap();

    assert_eq!(parser.satellites().len(), 8);
    assert_eq!(parser.snapshot().satellites_used, 8);
}

#[test]
fn test_out_of_order_rows_are_appended() {
    let mut parser = Parser::new();
    parser.parse(GROUP[1]).unwrap();

    assert_eq!(parser.satellites().len(), 4);
    assert_eq!(parser.accumulator().state(), GroupState::AwaitingGroup);

    parser.parse(GROUP[1]).unwrap();
    assert_eq!(parser.satellites().len(), 8, "duplicates are kept");
}

#[test]
fn test_untracked_satellites_keep_empty_snr() {
    let parser: Parser = "$GPGSV,1,1,02,10,45,120,38,11,30,200,*72".parse().unwrap();

    let satellites = parser.satellites();
    assert_eq!(satellites.len(), 2);
    assert_eq!(satellites[1].id, "11");
    assert_eq!(satellites[1].azimuth, "200");
    assert_eq!(satellites[1].snr, "");
    assert_eq!(satellites[1].snr_db(), None);
}
