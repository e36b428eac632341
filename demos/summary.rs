//! Feeds a fixed set of sentences through one parser and prints a summary and
//! the snapshot of each.

use nmea_snapshot::{Parser, ParserConfig};

const SENTENCES: [&str; 9] = [
    "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A",
    "$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48",
    "$GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.8,1.0,1.5*3F",
    "$GPGSV,2,1,08,01,40,083,41,02,17,063,42,03,13,053,43,04,03,013,42*7D",
    "$GPGSV,2,2,08,05,20,123,44,06,05,223,45,07,11,323,43,08,32,073,42*7E",
    "$GPGLL,4916.45,N,12311.12,W,225444,A*31",
    "$GPZDA,201530.00,04,07,2002,00,00*60",
    "$GPGST,024603.00,1.2,0.8,1.0,45.0,0.5,0.6,0.7*6B",
];

fn main() {
    let mut parser = Parser::with_config(ParserConfig::default());

    for sentence in SENTENCES {
        if let Err(err) = parser.parse(sentence) {
            eprintln!("{sentence}: {err}");
            continue;
        }

        println!("=== SUMMARY ===");
        println!("{}", parser.summary());

        let snapshot = parser.snapshot();
        println!("=== SNAPSHOT ===");
        println!("Type: {}", snapshot.sentence_type);
        println!("Time: {}", snapshot.time);
        println!("Date: {}", snapshot.date);
        println!("Latitude: {}", snapshot.formatted_latitude);
        println!("Longitude: {}", snapshot.formatted_longitude);
        println!("Altitude: {} {}", snapshot.altitude, snapshot.altitude_units);
        println!("Speed (knots): {}", snapshot.speed_knots);
        println!("Speed (km/h): {}", snapshot.speed_kmh);
        println!("HDOP: {}", snapshot.hdop);
        println!("Satellites Used: {}", snapshot.satellites_used);
        println!("Connected Satellites: {}", parser.connected_satellites());
        println!("Satellites In View: {}", snapshot.satellites_in_view);
        if let Some(location) = parser.location() {
            println!("Location: {:.6}, {:.6}", location.latitude, location.longitude);
        }
        println!();
    }
}
