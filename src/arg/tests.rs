use super::{arg_extractor::*, arg_matcher::*, arg_parser::*, args::*};
use crate::arg::arg_parse_strategy::{ArgParseStrategy, CommandArgParser, ManArgParser};
use crate::core::types::{ClockTime, Flag, ShootDate, ShotDuration, ShotStatus, TransportMode};
use crate::errors::Error;

fn toks(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

fn t(s: &str) -> ClockTime {
    ClockTime::try_from_str(s).unwrap()
}

// ---------- args.rs ----------
#[test]
fn token_stream_walks_tokens() {
    let raw = vec!["one".to_string(), "two".to_string()];
    let mut ts = TokenStream::new(&raw);
    assert!(!ts.eof());
    assert_eq!(ts.peek().unwrap(), "one");
    assert_eq!(ts.next().unwrap(), "one");
    assert_eq!(ts.next().unwrap(), "two");
    assert!(ts.eof());
    assert!(ts.peek().is_err());
}

#[test]
fn name_arg_requires_quotes_and_strips_them() {
    assert!(NameArg::accepts("\"Wide shot\""));
    assert_eq!(
        NameArg::new("'Close up'").unwrap(),
        Arg::Name("Close up".into())
    );
    assert!(!NameArg::accepts("NoQuotes"));
    assert!(!NameArg::accepts("\"\""));
    assert!(!NameArg::accepts("\"open"));
    assert!(NameArg::new("NoQuotes").is_err());
}

#[test]
fn location_arg_takes_bare_and_quoted_places() {
    assert_eq!(LocationArg::new("@Studio").unwrap(), Arg::Location("Studio".into()));
    assert_eq!(
        LocationArg::new("@\"Main Street\"").unwrap(),
        Arg::Location("Main Street".into())
    );
    assert!(LocationArg::starts_sequence("@\"Main"));
    assert!(!LocationArg::accepts("@\"Main"));
    assert!(!LocationArg::accepts("@"));
    assert!(!LocationArg::accepts("Studio"));
}

#[test]
fn scene_and_gear_args_need_their_prefix() {
    assert_eq!(SceneArg::new("#12A").unwrap(), Arg::Scene("12A".into()));
    assert!(!SceneArg::accepts("#"));
    assert!(!SceneArg::accepts("12A"));

    assert_eq!(GearArg::new("+cam-a").unwrap(), Arg::Gear("cam-a".into()));
    assert!(!GearArg::accepts("+"));
    assert!(!GearArg::accepts("+cam a"));
    assert!(GearArg::new("cam-a").is_err());
}

#[test]
fn time_span_arg_allows_overnight_windows() {
    assert_eq!(
        TimeSpanArg::new("23:00-01:00").unwrap(),
        Arg::TimeSpan(t("23:00"), t("01:00"))
    );
    assert!(!TimeSpanArg::accepts("2099-01-01"));
    assert!(!TimeSpanArg::accepts("10:00"));
}

#[test]
fn duration_arg_requires_a_unit() {
    assert!(DurationArg::accepts("1.5h"));
    assert!(DurationArg::accepts("90m"));
    assert!(!DurationArg::accepts("2"));
    assert!(!DurationArg::accepts("0h"));
    assert_eq!(
        DurationArg::new("90m").unwrap(),
        Arg::Duration(ShotDuration::from_minutes(90))
    );
}

#[test]
fn int_arg_rejects_non_digits() {
    assert!(IntArg::accepts("42"));
    assert!(!IntArg::accepts("-1"));
    assert!(!IntArg::accepts(""));
    assert!(IntArg::new("99999999999").is_err());
}

#[test]
fn factories_parse_single_and_multi_token_args() {
    let mut ts = TokenStream::new(&toks("\"Hello World\""));
    let name_factory = MultiTokenFactory::<NameArg>::new();
    assert!(name_factory.can_start("\"Hello"));
    assert_eq!(
        name_factory.parse(&mut ts).unwrap(),
        Arg::Name("Hello World".into())
    );

    let mut ts = TokenStream::new(&toks("42"));
    let int_factory = SingleTokenFactory::<IntArg>::new();
    assert!(int_factory.can_start("42"));
    assert_eq!(int_factory.parse(&mut ts).unwrap(), Arg::Int(42));
}

#[test]
fn multi_token_factory_errors_on_unterminated_quote() {
    let mut ts = TokenStream::new(&toks("\"never closed"));
    let factory = MultiTokenFactory::<NameArg>::new();
    assert!(matches!(factory.parse(&mut ts), Err(Error::Parse(_))));
}

#[test]
fn arg_display_round_trips_prefixes() {
    assert_eq!(Arg::Location("Main Street".into()).to_string(), "@\"Main Street\"");
    assert_eq!(Arg::Location("Studio".into()).to_string(), "@Studio");
    assert_eq!(Arg::Scene("4B".into()).to_string(), "#4B");
    assert_eq!(Arg::Gear("boom".into()).to_string(), "+boom");
    assert_eq!(Arg::TimeSpan(t("09:00"), t("10:30")).to_string(), "09:00-10:30");
}

// ---------- arg_parser.rs ----------
#[test]
fn parser_reads_a_full_shot_line() {
    let parser = ArgParser::new();
    let args = parser
        .parse(&toks(
            "\"Opening scene\" 2099-03-01 09:00-10:30 @\"Old Mill\" #1A +cam-a +boom",
        ))
        .unwrap();
    assert_eq!(
        args,
        vec![
            Arg::Name("Opening scene".into()),
            Arg::Date(ShootDate::from_ymd(2099, 3, 1).unwrap()),
            Arg::TimeSpan(t("09:00"), t("10:30")),
            Arg::Location("Old Mill".into()),
            Arg::Scene("1A".into()),
            Arg::Gear("cam-a".into()),
            Arg::Gear("boom".into()),
        ]
    );
}

#[test]
fn parser_reads_start_and_duration() {
    let args = ArgParser::new().parse(&toks("3 14:00 2h")).unwrap();
    assert_eq!(
        args,
        vec![
            Arg::Int(3),
            Arg::Time(t("14:00")),
            Arg::Duration(ShotDuration::from_hours(2.0)),
        ]
    );
}

#[test]
fn parser_reads_plan_filters() {
    let args = ArgParser::new()
        .parse(&toks("\"mill\" done walking -h"))
        .unwrap();
    assert_eq!(
        args,
        vec![
            Arg::Name("mill".into()),
            Arg::Status(ShotStatus::Done),
            Arg::Mode(TransportMode::Walking),
            Arg::Flag(Flag::Help),
        ]
    );
}

#[test]
fn parser_rejects_unknown_tokens() {
    let err = ArgParser::new().parse(&toks("banana")).unwrap_err();
    assert!(err.to_string().contains("Unrecognized argument: 'banana'"));
}

// ---------- arg_parse_strategy.rs ----------
#[test]
fn man_parser_joins_the_topic() {
    let args = ManArgParser.parse(&toks("\"shot\"")).unwrap();
    assert_eq!(args, vec![Arg::Name("shot".into())]);
    assert!(ManArgParser.parse(&[]).unwrap().is_empty());
    assert_eq!(
        ManArgParser.parse(&toks("-h")).unwrap(),
        vec![Arg::Flag(Flag::Help)]
    );
}

#[test]
fn command_parser_keeps_config_values_raw() {
    let parser = CommandArgParser::new();
    let args = parser.parse("CONFIG", &toks("TRAVEL_MODE walking")).unwrap();
    assert_eq!(
        args,
        vec![Arg::Name("TRAVEL_MODE".into()), Arg::Name("walking".into())]
    );
    let args = parser.parse("plan", &toks("walking")).unwrap();
    assert_eq!(args, vec![Arg::Mode(TransportMode::Walking)]);
}

// ---------- arg_extractor.rs ----------
#[test]
fn extract_at_reports_missing_and_mismatched_args() {
    let args = vec![Arg::Int(7), Arg::Gear("cam".into())];
    assert_eq!(extract_at::<IntArg>(&args, 0).unwrap(), 7);

    let wrong = extract_at::<IntArg>(&args, 1).unwrap_err();
    assert!(wrong.to_string().contains("Expected a shot id, got +cam"));

    let missing = extract_at::<DateArg>(&args, 5).unwrap_err();
    assert!(missing.to_string().contains("got nothing"));
}

#[test]
fn find_helpers_scan_by_variant() {
    let args = vec![
        Arg::Gear("a".into()),
        Arg::Int(1),
        Arg::Gear("b".into()),
        Arg::Mode(TransportMode::Bus),
    ];
    assert_eq!(find_all::<GearArg>(&args), vec!["a", "b"]);
    assert_eq!(find_first::<ModeArg>(&args), Some(TransportMode::Bus));
    assert_eq!(find_first::<StatusArg>(&args), None);
}

#[test]
fn matchers_check_only_their_variant() {
    assert!(SceneArg::matches_variant(&Arg::Scene("1".into())));
    assert!(!SceneArg::matches_variant(&Arg::Gear("1".into())));
    assert!(TimeSpanArg::matches_variant(&Arg::TimeSpan(t("01:00"), t("02:00"))));
}
