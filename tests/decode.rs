use pelorus::{Config, Fix, Mode, Parser, Quality};

const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n";
const GGA: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n";
const GSA: &[u8] = b"$GPGSA,A,3,04,05,,09,12,24,,,,,,,2.5,1.3,2.1*39\r\n";
const GSV: &[u8] = b"$GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75\r\n";

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} differs from {b}");
}

#[test]
fn commits_recommended_minimum() {
    let mut parser = Parser::new();
    assert!(parser.feed(RMC));

    let fix = parser.fix();
    assert!(fix.valid);
    assert_eq!((fix.time.hours, fix.time.minutes, fix.time.seconds), (12, 35, 19));
    assert_eq!((fix.date.day, fix.date.month, fix.date.year), (23, 3, 94));
    assert_close(fix.speed, 22.4);
    assert_close(fix.course, 84.4);
    assert_close(fix.variation, -3.1);
}

#[test]
fn commits_position_fix() {
    let mut parser = Parser::new();
    assert!(parser.feed(GGA));

    let fix = parser.fix();
    assert_close(fix.latitude, 48.1173);
    assert_close(fix.longitude, 11.516666666666667);
    assert_close(fix.altitude, 545.4);
    assert_eq!(fix.quality, Quality::Gps);
    assert_eq!(fix.satellites_in_use, 8);
    assert_eq!((fix.time.hours, fix.time.minutes, fix.time.seconds), (12, 35, 19));
}

#[test]
fn commits_active_satellites() {
    let mut parser = Parser::new();
    assert!(parser.feed(GSA));

    let fix = parser.fix();
    assert_eq!(fix.mode, Mode::Fix3d);
    assert_eq!(fix.satellite_ids, [4, 5, 0, 9, 12, 24, 0, 0, 0, 0, 0, 0]);
    assert_close(fix.pdop, 2.5);
    assert_close(fix.hdop, 1.3);
    assert_close(fix.vdop, 2.1);
}

#[test]
fn commits_satellites_in_view() {
    let mut parser = Parser::new();
    assert!(parser.feed(GSV));
    assert_eq!(parser.fix().satellites_in_view, 8);
}

#[test]
fn southern_and_western_hemispheres_negate() {
    let mut parser = Parser::new();
    assert!(parser.feed(b"$GPGGA,081836,3751.650,S,14507.360,E,1,07,1.0,19.7,M,,M,,*7D\r\n"));

    let fix = parser.fix();
    assert_close(fix.latitude, -37.86083333333333);
    assert_close(fix.longitude, 145.12266666666667);
}

#[test]
fn rejects_corrupted_checksum() {
    let mut parser = Parser::new();
    assert!(parser.feed(RMC));
    let before = *parser.fix();

    let corrupted = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*00\r\n";
    assert!(!parser.feed(corrupted));
    assert_eq!(*parser.fix(), before);
}

#[test]
fn accepts_lowercase_checksum_digits() {
    let mut parser = Parser::new();
    assert!(parser.feed(b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a\r\n"));
    assert!(parser.fix().valid);
}

#[test]
fn repeated_sentence_is_idempotent() {
    let mut parser = Parser::new();
    assert!(parser.feed(RMC));
    let once = *parser.fix();

    assert!(parser.feed(RMC));
    assert_eq!(*parser.fix(), once);
}

#[test]
fn chunking_is_invariant() {
    let mut whole = Parser::new();
    whole.feed(RMC);

    for split in 1..RMC.len() {
        let mut parser = Parser::new();
        let (head, tail) = RMC.split_at(split);
        parser.feed(head);
        parser.feed(tail);
        assert_eq!(parser.fix(), whole.fix(), "split at {split}");
    }

    let mut parser = Parser::new();
    for &b in RMC {
        parser.feed(&[b]);
    }
    assert_eq!(parser.fix(), whole.fix());
}

#[test]
fn resynchronizes_after_truncation() {
    let mut parser = Parser::new();
    assert!(!parser.feed(b"$GPGGA,123519,4807.0"));
    assert!(parser.feed(RMC));

    let fix = parser.fix();
    assert!(fix.valid);
    assert_close(fix.latitude, 0.0);
}

#[test]
fn start_delimiter_aborts_sentence_in_progress() {
    let mut parser = Parser::new();
    let mut stream = b"$GPRMC,123519,A".to_vec();
    stream.extend_from_slice(RMC);

    assert!(parser.feed(&stream));
    assert!(parser.fix().valid);
    assert_eq!(parser.counters().sentences, 1);
}

#[test]
fn ignores_unsupported_statement() {
    let mut parser = Parser::new();
    assert!(!parser.feed(b"$GPXXX,1,2,3*53\r\n"));
    assert_eq!(*parser.fix(), Fix::default());
    assert_eq!(parser.counters().unsupported, 1);

    // The stream stays in sync for the next supported sentence.
    assert!(parser.feed(GGA));
    assert_close(parser.fix().latitude, 48.1173);
}

#[test]
fn truncates_overlong_terms() {
    // The latitude term runs past the buffer capacity; its surviving
    // prefix decodes, and the checksum still spans the full text.
    let mut parser = Parser::new();
    assert!(parser.feed(
        b"$GPGGA,123519,4807.03800012345,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*46\r\n"
    ));

    let fix = parser.fix();
    assert_close(fix.latitude, 48.11730000166666);
    assert_close(fix.longitude, 11.516666666666667);
    assert_close(fix.altitude, 545.4);
}

#[test]
fn empty_terms_decode_to_zero() {
    let mut parser = Parser::new();
    assert!(parser.feed(b"$GPGGA,183015.00,,,,,0,00,,,,,,,*46\r\n"));

    let fix = parser.fix();
    assert_eq!((fix.time.hours, fix.time.minutes, fix.time.seconds), (18, 30, 15));
    assert_close(fix.latitude, 0.0);
    assert_close(fix.longitude, 0.0);
    assert_eq!(fix.quality, Quality::Invalid);
    assert_eq!(fix.satellites_in_use, 0);
}

#[test]
fn counters_track_outcomes() {
    let mut parser = Parser::new();
    parser.feed(RMC);
    parser.feed(b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*00\r\n");
    parser.feed(b"$GPXXX,1,2,3*53\r\n");

    let counters = parser.counters();
    assert_eq!(counters.sentences, 3);
    assert_eq!(counters.checksum_failures, 1);
    assert_eq!(counters.unsupported, 1);
}

#[test]
fn disabled_family_is_ignored() {
    let mut parser = Parser::with_config(Config {
        gga: false,
        ..Config::default()
    });

    assert!(!parser.feed(GGA));
    assert_eq!(*parser.fix(), Fix::default());

    assert!(parser.feed(RMC));
    assert!(parser.fix().valid);
}

#[test]
fn noise_between_sentences_is_ignored() {
    let mut parser = Parser::new();
    assert!(!parser.feed(b"\x00\xfferror: antenna open*AB\r\n"));
    assert!(parser.feed(RMC));
    assert!(parser.fix().valid);
}
