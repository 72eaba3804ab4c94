use sleeper_previews::RemoteSpec;

#[test]
fn full_spec_parses() {
    let spec = RemoteSpec::parse("o/r@branch:path/file.json").unwrap();
    assert_eq!(spec.owner, "o");
    assert_eq!(spec.repo, "r");
    assert_eq!(spec.git_ref, "branch");
    assert_eq!(spec.path, "path/file.json");
}

#[test]
fn ref_defaults_to_main() {
    let spec = RemoteSpec::parse("owner/repo:file.json").unwrap();
    assert_eq!(spec.git_ref, "main");
    assert_eq!(spec.owner, "owner");
    assert_eq!(spec.repo, "repo");
}

#[test]
fn missing_slash_in_repo_portion_is_unusable() {
    // `o` alone cannot be split into owner/repo, so the spec is rejected
    // even though a path is present.
    assert_eq!(RemoteSpec::parse("o:file.json"), None);
    assert_eq!(RemoteSpec::parse("o@main:file.json"), None);
}

#[test]
fn empty_components_are_unusable() {
    assert_eq!(RemoteSpec::parse(""), None);
    assert_eq!(RemoteSpec::parse("   "), None);
    assert_eq!(RemoteSpec::parse("o/r@main:"), None);
    assert_eq!(RemoteSpec::parse("o/r"), None); // no path at all
    assert_eq!(RemoteSpec::parse("/r:file.json"), None);
    assert_eq!(RemoteSpec::parse("o/:file.json"), None);
}

#[test]
fn splits_happen_on_first_separator_only() {
    let spec = RemoteSpec::parse("o/r@main:dir/week-01.json?x:y").unwrap();
    assert_eq!(spec.path, "dir/week-01.json?x:y");

    let spec = RemoteSpec::parse("o/r/extra@main:p").unwrap();
    assert_eq!(spec.owner, "o");
    assert_eq!(spec.repo, "r/extra");
}

#[test]
fn display_round_trips_the_canonical_form() {
    let raw = "o/r@main:previews/2025/week-03.json";
    let spec = RemoteSpec::parse(raw).unwrap();
    assert_eq!(spec.to_string(), raw);
}
