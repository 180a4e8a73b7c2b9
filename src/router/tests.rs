use super::*;
use crate::core::types::{InvocationRequest, PackageManagerKind, ProcessSpec};

/// Prompt that always answers with a fixed kind.
struct FixedPrompt(PackageManagerKind);

impl PackageManagerPrompt for FixedPrompt {
    fn choose(&self) -> crate::error::Result<PackageManagerKind> {
        Ok(self.0)
    }
}

/// Prompt that must not be consulted.
struct NoPrompt;

impl PackageManagerPrompt for NoPrompt {
    fn choose(&self) -> crate::error::Result<PackageManagerKind> {
        panic!("prompt should not be consulted for this route");
    }
}

fn route_line(line: &str, pm: Option<PackageManagerKind>) -> crate::error::Result<Action> {
    route(&InvocationRequest::from_line(line), pm, &NoPrompt)
}

fn expect_spec(action: Action) -> ProcessSpec {
    match action {
        Action::Execute(spec) => spec,
        other => panic!("expected Execute, got {:?}", other),
    }
}

#[test]
fn bare_install_under_yarn_is_rejected() {
    let err = route_line("install", Some(PackageManagerKind::Yarn)).unwrap_err();
    assert!(matches!(err, crate::error::PompaError::BareInstallWithYarn));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn bare_install_under_npm_delegates_verbatim() {
    let spec = expect_spec(route_line("install", Some(PackageManagerKind::Npm)).unwrap());
    assert_eq!(spec.to_string(), "npm install");
}

#[test]
fn bare_install_under_pnpm_stays_install_not_add() {
    let spec = expect_spec(route_line("install", Some(PackageManagerKind::Pnpm)).unwrap());
    assert_eq!(spec.to_string(), "pnpm install");
}

#[test]
fn dev_install_under_npm_uses_save_dev() {
    let spec = expect_spec(route_line("install -D foo bar", Some(PackageManagerKind::Npm)).unwrap());
    assert_eq!(spec.program, "npm");
    assert_eq!(spec.args, ["install", "--save-dev", "foo", "bar"]);
}

#[test]
fn dev_install_accepts_long_flag_spelling() {
    let spec = expect_spec(
        route_line("install --save-dev foo", Some(PackageManagerKind::Npm)).unwrap(),
    );
    assert_eq!(spec.args, ["install", "--save-dev", "foo"]);
}

#[test]
fn install_under_yarn_becomes_add_without_dev_flag() {
    let spec = expect_spec(route_line("install foo", Some(PackageManagerKind::Yarn)).unwrap());
    assert_eq!(spec.program, "yarn");
    assert_eq!(spec.args, ["add", "foo"]);
}

#[test]
fn dev_install_under_yarn_uses_dev_flag() {
    let spec = expect_spec(route_line("install -D foo", Some(PackageManagerKind::Yarn)).unwrap());
    assert_eq!(spec.args, ["add", "--dev", "foo"]);
}

#[test]
fn install_under_pnpm_becomes_add() {
    let spec = expect_spec(route_line("install -D foo", Some(PackageManagerKind::Pnpm)).unwrap());
    assert_eq!(spec.program, "pnpm");
    assert_eq!(spec.args, ["add", "--save-dev", "foo"]);
}

#[test]
fn install_package_order_is_preserved() {
    let spec = expect_spec(
        route_line("install react react-dom redux", Some(PackageManagerKind::Npm)).unwrap(),
    );
    assert_eq!(spec.args, ["install", "react", "react-dom", "redux"]);
}

#[test]
fn routing_is_idempotent_under_repeated_parsing() {
    let request = InvocationRequest::from_line("install -D foo bar");
    let first = route(&request, Some(PackageManagerKind::Npm), &NoPrompt).unwrap();
    let second = route(&request, Some(PackageManagerKind::Npm), &NoPrompt).unwrap();
    assert_eq!(first, second);
}

#[test]
fn install_without_lockfile_consults_the_prompt() {
    let request = InvocationRequest::from_line("install foo");
    let action = route(&request, None, &FixedPrompt(PackageManagerKind::Yarn)).unwrap();
    assert_eq!(expect_spec(action).to_string(), "yarn add foo");
}

#[test]
fn every_table_entry_substitutes_exactly_for_every_kind() {
    let cases = [
        ("remove", PackageManagerKind::Npm, "npm uninstall"),
        ("remove", PackageManagerKind::Yarn, "yarn remove"),
        ("remove", PackageManagerKind::Pnpm, "pnpm remove"),
        ("start", PackageManagerKind::Npm, "npm start"),
        ("start", PackageManagerKind::Yarn, "yarn start"),
        ("start", PackageManagerKind::Pnpm, "pnpm start"),
        ("build", PackageManagerKind::Npm, "npm run build"),
        ("build", PackageManagerKind::Yarn, "yarn build"),
        ("build", PackageManagerKind::Pnpm, "pnpm build"),
        ("test", PackageManagerKind::Npm, "npm test"),
        ("test", PackageManagerKind::Yarn, "yarn test"),
        ("test", PackageManagerKind::Pnpm, "pnpm test"),
        ("init", PackageManagerKind::Npm, "npm init"),
        ("init", PackageManagerKind::Yarn, "yarn init"),
        ("init", PackageManagerKind::Pnpm, "pnpm init"),
        ("dev", PackageManagerKind::Npm, "npm run dev"),
        ("dev", PackageManagerKind::Yarn, "yarn dev"),
        ("dev", PackageManagerKind::Pnpm, "pnpm dev"),
        ("publish", PackageManagerKind::Npm, "npm publish"),
        ("publish", PackageManagerKind::Yarn, "yarn publish"),
        ("publish", PackageManagerKind::Pnpm, "pnpm publish"),
        ("add", PackageManagerKind::Npm, "npm install"),
        ("add", PackageManagerKind::Yarn, "yarn add"),
        ("add", PackageManagerKind::Pnpm, "pnpm add"),
    ];

    for (command, pm, expected) in cases {
        let spec = expect_spec(route_line(command, Some(pm)).unwrap());
        assert_eq!(spec.to_string(), expected, "command {:?} under {}", command, pm);
    }
}

#[test]
fn remapped_commands_forward_trailing_arguments_unchanged() {
    let spec = expect_spec(
        route_line("build --watch --profile", Some(PackageManagerKind::Npm)).unwrap(),
    );
    assert_eq!(spec.args, ["run", "build", "--watch", "--profile"]);
}

#[test]
fn unknown_commands_pass_through_verbatim() {
    let spec = expect_spec(route_line("frobnicate", Some(PackageManagerKind::Npm)).unwrap());
    assert_eq!(spec.to_string(), "npm frobnicate");

    let spec = expect_spec(
        route_line("audit fix --force", Some(PackageManagerKind::Npm)).unwrap(),
    );
    assert_eq!(spec.args, ["audit", "fix", "--force"]);
}

#[test]
fn no_lockfile_and_non_install_command_suggests_instead_of_executing() {
    assert_eq!(route_line("add", None).unwrap(), Action::Suggest(Some("install")));
    assert_eq!(route_line("i", None).unwrap(), Action::Suggest(Some("install")));
    assert_eq!(route_line("remove", None).unwrap(), Action::Suggest(Some("uninstall")));
    assert_eq!(route_line("rm", None).unwrap(), Action::Suggest(Some("uninstall")));
    assert_eq!(route_line("frobnicate", None).unwrap(), Action::Suggest(None));
}

#[test]
fn install_request_classification() {
    assert!(is_install_request(&InvocationRequest::from_line("install foo")));
    assert!(!is_install_request(&InvocationRequest::from_line("install")));
    assert!(!is_install_request(&InvocationRequest::from_line("build")));
}
