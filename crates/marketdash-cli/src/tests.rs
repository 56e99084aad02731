use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["marketdash"]).expect("expected valid cli args");

    assert!(cli.command.is_none());
    assert!(cli.feeds.is_none());
    assert!(!cli.generate.offline);
    assert!(cli.generate.output.is_none());
}

#[test]
fn top_level_generate_flags_without_subcommand() {
    let cli = Cli::try_parse_from(["marketdash", "--offline", "--output", "out.html"])
        .expect("expected valid cli args");

    assert!(cli.command.is_none());
    assert!(cli.generate.offline);
    assert_eq!(cli.generate.output, Some(PathBuf::from("out.html")));
}

#[test]
fn parses_generate_subcommand() {
    let cli = Cli::try_parse_from([
        "marketdash",
        "generate",
        "--output",
        "site/index.html",
        "--feeds",
        "custom.yaml",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Generate(GenerateArgs {
            output: Some(ref p),
            offline: false,
        })) if p == &PathBuf::from("site/index.html")
    ));
    assert_eq!(cli.feeds, Some(PathBuf::from("custom.yaml")));
}

#[test]
fn parses_fetch_category() {
    let cli = Cli::try_parse_from(["marketdash", "fetch", "--category", "india"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Fetch { ref category }) if category == "india"
    ));
}

#[test]
fn fetch_requires_category() {
    assert!(Cli::try_parse_from(["marketdash", "fetch"]).is_err());
}

#[test]
fn parses_feeds_command() {
    let cli = Cli::try_parse_from(["marketdash", "feeds"]).expect("expected valid cli args");

    assert!(matches!(cli.command, Some(Commands::Feeds)));
}

#[test]
fn top_level_generate_flags_conflict_with_subcommands() {
    assert!(Cli::try_parse_from(["marketdash", "--offline", "feeds"]).is_err());
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["marketdash", "publish"]).is_err());
}
