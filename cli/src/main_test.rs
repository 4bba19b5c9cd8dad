use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("archassist-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn ping_accepts_api_url() {
    let cli = parse(&["--api-url", studio::DEFAULT_API_BASE, "ping"]);
    assert_eq!(cli.api_url, "http://localhost:8000");
    assert!(matches!(cli.command, Command::Ping));
}

#[test]
fn register_name_defaults_to_empty() {
    let cli = parse(&["register", "--email", "jane@x.com", "--password", "pw"]);
    let Command::Register { email, name, .. } = cli.command else {
        panic!("expected register");
    };
    assert_eq!(email, "jane@x.com");
    assert_eq!(name, "");
}

#[test]
fn generate_takes_optional_brief_and_sketch() {
    let cli = parse(&["generate", "--project", "7", "--sketch", "pad.json"]);
    let Command::Generate { project, brief, sketch } = cli.command else {
        panic!("expected generate");
    };
    assert_eq!(project, 7);
    assert_eq!(brief, None);
    assert_eq!(sketch, Some(PathBuf::from("pad.json")));
}

#[test]
fn projects_subcommands_parse() {
    let cli = parse(&["projects", "create", "--title", "Cabin"]);
    let Command::Projects(ProjectsCommand { command: ProjectsSubcommand::Create { title, description } }) =
        cli.command
    else {
        panic!("expected projects create");
    };
    assert_eq!(title, "Cabin");
    assert_eq!(description, "");

    let cli = parse(&["projects", "delete", "3"]);
    assert!(matches!(
        cli.command,
        Command::Projects(ProjectsCommand { command: ProjectsSubcommand::Delete { id: 3 } })
    ));
}

#[test]
fn token_file_flag_overrides_default() {
    let cli = parse(&["--token-file", "/tmp/t", "whoami"]);
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/t")));
}

#[test]
fn non_numeric_project_id_is_rejected() {
    let parsed = Cli::try_parse_from(["archassist-cli", "projects", "show", "abc"]);
    assert!(parsed.is_err());
}

#[test]
fn token_file_flag_wins_over_default() {
    let path = resolve_token_file(Some(PathBuf::from("/tmp/t")), Some(PathBuf::from("/home/a/.archassist/token")));
    assert_eq!(path.unwrap(), PathBuf::from("/tmp/t"));
}

#[test]
fn missing_home_without_flag_is_an_error() {
    let err = resolve_token_file(None, None).unwrap_err();
    assert!(matches!(err, CliError::NoTokenPath));
}
